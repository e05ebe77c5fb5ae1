//! # AlertMail ドメイン層
//!
//! 通知メール配信のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **不変・使い捨て**: すべての値はリクエストから生成され、配信完了後に破棄される
//! - **明示的な Optional**: メッセージの任意フィールドは `Option` で表現し、
//!   レンダリング時の分岐をコンパイル時に網羅できるようにする
//! - **I/O なし**: SMTP 送信やテンプレート読み込みは infra / dispatch-service の責務
//!
//! ## 依存関係の方向
//!
//! ```text
//! dispatch-service → infra → domain
//!          ↘                   ↓
//!            shared ←──────────┘
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - 通知エラーの定義
//! - [`message`] - 通知メッセージとコンテンツ種別
//! - [`notification_type`] - 通知種別と表示色
//! - [`occurred_at`] - 発生日時の解析と表示形式
//! - [`request`] - 配信リクエストと必須パラメータ検査
//! - [`smtp`] - SMTP 接続情報とデフォルト値の解決
//! - [`email`] - 送信するメールメッセージ
//!
//! ## 使用例
//!
//! ```rust
//! use alertmail_domain::{message::Message, notification_type::NotificationType};
//!
//! let message = Message {
//!     title: Some("ディスク使用率が 90% を超えました".to_string()),
//!     content_type: Some("PDF".to_string()),
//!     ..Default::default()
//! };
//! assert!(message.validate().is_err());
//!
//! assert_eq!(NotificationType::new("ERROR").color(), "#FF6A6A");
//! ```

pub mod email;
pub mod error;
pub mod message;
pub mod notification_type;
pub mod occurred_at;
pub mod request;
pub mod smtp;

pub use email::EmailMessage;
pub use error::NotificationError;
