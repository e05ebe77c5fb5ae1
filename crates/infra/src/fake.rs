//! # テスト用インメモリ送信
//!
//! ユースケース・ハンドラのテストで使用する `NotificationSender` 実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! alertmail-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use alertmail_domain::{EmailMessage, NotificationError, smtp::SmtpSettings};
use async_trait::async_trait;

use crate::notification::NotificationSender;

/// 送信内容を記録するだけの送信実装
///
/// `Clone` しても記録領域は共有されるため、サービスに渡した後も
/// テスト側のハンドルから送信履歴を参照できる。
#[derive(Debug, Clone, Default)]
pub struct FakeNotificationSender {
    sent:    Arc<Mutex<Vec<(SmtpSettings, EmailMessage)>>>,
    failure: Option<String>,
}

impl FakeNotificationSender {
    /// 常に送信成功する送信実装
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に `SendFailed` を返す送信実装
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            sent:    Arc::default(),
            failure: Some(reason.into()),
        }
    }

    /// 送信が試行されたメール
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, email)| email.clone())
            .collect()
    }

    /// 送信時に使われた SMTP 接続設定
    pub fn used_settings(&self) -> Vec<SmtpSettings> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(smtp, _)| smtp.clone())
            .collect()
    }

    /// 送信が試行された回数（失敗した試行を含む）
    pub fn attempts(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl NotificationSender for FakeNotificationSender {
    async fn send_email(
        &self,
        smtp: &SmtpSettings,
        email: &EmailMessage,
    ) -> Result<(), NotificationError> {
        self.sent
            .lock()
            .unwrap()
            .push((smtp.clone(), email.clone()));

        match &self.failure {
            Some(reason) => Err(NotificationError::SendFailed(reason.clone())),
            None => Ok(()),
        }
    }
}
