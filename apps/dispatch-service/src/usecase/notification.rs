//! # 通知ユースケース
//!
//! 配信リクエストからのメール生成・送信を統合する。
//!
//! ## モジュール構成
//!
//! - [`template_store`] - 論理名 → テンプレートソースの対応（埋め込み / ディレクトリ）
//! - [`template_renderer`] - tera テンプレートエンジンによる HTML 本文の生成
//! - [`service`] - 検証 + レンダリング + 送信の統合サービス

pub mod service;
pub mod template_renderer;
pub mod template_store;

pub use service::NotificationService;
pub use template_renderer::TemplateRenderer;
pub use template_store::TemplateSet;
