//! # AlertMail 共有ユーティリティ
//!
//! アプリケーション層（dispatch-service）で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 通知ドメインのロジックを含まない純粋なユーティリティのみを配置
//! - axum などの Web フレームワークには依存しない
//! - ログ出力の初期化（[`observability`]）とビジネスイベントの記録規約（[`event_log`]）を持つ

pub mod error_response;
pub mod event_log;
pub mod observability;

pub use error_response::ErrorResponse;
