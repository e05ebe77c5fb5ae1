//! # AlertMail インフラ層
//!
//! 外部システム（SMTP サーバー）との通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! ドメイン層の型（`EmailMessage`, `SmtpSettings`）を受け取り、実際の送信方法を
//! [`notification::NotificationSender`] トレイトの実装としてカプセル化する。
//! 呼び出し側は送信手段を構築時に注入されるため、実装を名前で引くことはしない。
//!
//! ## モジュール構成
//!
//! - [`notification`] - メール送信（SMTP / Noop）
//! - `fake` - テスト用インメモリ送信（`test-utils` feature）

#[cfg(any(test, feature = "test-utils"))]
pub mod fake;
pub mod notification;

pub use notification::{NoopNotificationSender, NotificationSender, SmtpNotificationSender};
