//! # Dispatch Service ライブラリ
//!
//! 通知メール配信のユースケース・ハンドラ・設定を公開する。
//! バイナリ（`main.rs`）と統合テストの両方から利用する。

/// ログの `span.service` に出力するサービス名
pub const SERVICE_NAME: &str = "dispatch-service";

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
