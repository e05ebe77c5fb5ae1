//! # ユースケース層
//!
//! - [`notification`] - 通知メールの生成と配信

pub mod notification;

pub use notification::{NotificationService, TemplateRenderer, TemplateSet};
