//! # ハンドラ層
//!
//! - [`health`] - ヘルスチェック
//! - [`notification`] - 通知配信 API

pub mod health;
pub mod notification;

pub use health::health_check;
pub use notification::{DispatchState, dispatch_notification};
