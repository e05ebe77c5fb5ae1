//! # 通知送信
//!
//! メール通知の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **2 つの実装**: SMTP（本番・Mailpit）、Noop（送信無効化時）
//! - **呼び出しごとの接続情報**: SMTP 接続設定はリクエストごとに異なるため、
//!   送信側は設定を保持せず `send_email` の引数で受け取る
//! - **再試行しない**: 失敗は `SendFailed` としてそのまま呼び出し元に返す

mod noop;
mod smtp;

use alertmail_domain::{EmailMessage, NotificationError, smtp::SmtpSettings};
use async_trait::async_trait;
pub use noop::NoopNotificationSender;
pub use smtp::SmtpNotificationSender;

/// メール送信トレイト
///
/// 配信処理の送信部分。接続・認証・送信のいずれかに失敗した場合は
/// `NotificationError::SendFailed` を返す。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(
        &self,
        smtp: &SmtpSettings,
        email: &EmailMessage,
    ) -> Result<(), NotificationError>;
}
