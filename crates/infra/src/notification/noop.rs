//! Noop 通知送信実装
//!
//! メールを実際に送信せず、ログ出力のみ行う。
//! ローカル開発や通知無効化時に使用する。

use alertmail_domain::{EmailMessage, NotificationError, smtp::SmtpSettings};
use async_trait::async_trait;

use super::NotificationSender;

/// Noop 通知送信（ログ出力のみ）
#[derive(Debug, Clone)]
pub struct NoopNotificationSender;

#[async_trait]
impl NotificationSender for NoopNotificationSender {
    async fn send_email(
        &self,
        smtp: &SmtpSettings,
        email: &EmailMessage,
    ) -> Result<(), NotificationError> {
        tracing::info!(
            smtp.host = %smtp.host,
            from = %smtp.from_address,
            recipients = ?email.recipients,
            subject = %email.subject,
            "Noop: メール送信をスキップ"
        );
        Ok(())
    }
}
