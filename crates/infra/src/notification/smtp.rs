//! SMTP 通知送信実装
//!
//! lettre の `AsyncSmtpTransport` を使用してメールを送信する。
//! 接続先と認証情報は呼び出しごとに異なるため、送信のたびにトランスポートを構築する。
//! 接続プールは持たない。

use alertmail_domain::{EmailMessage, NotificationError, smtp::SmtpSettings};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport,
    AsyncTransport,
    Tokio1Executor,
    message::{Mailbox, Message, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use super::NotificationSender;

/// SMTP 通知送信
#[derive(Debug, Clone, Default)]
pub struct SmtpNotificationSender;

impl SmtpNotificationSender {
    pub fn new() -> Self {
        Self
    }
}

/// 接続設定から SMTP トランスポートを構築する
///
/// - `starttls = true`: STARTTLS で接続（本番向け）
/// - `starttls = false`: 平文で接続（Mailpit 等のローカル SMTP 向け）
///
/// ユーザー名が空の場合は認証しない。
fn build_transport(
    smtp: &SmtpSettings,
) -> Result<AsyncSmtpTransport<Tokio1Executor>, NotificationError> {
    let builder = if smtp.starttls {
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp.host)
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 接続設定が不正: {e}")))?
    } else {
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp.host)
    };

    let builder = builder.port(smtp.port);

    let builder = if smtp.user.is_empty() {
        builder
    } else {
        builder.credentials(Credentials::new(smtp.user.clone(), smtp.password.clone()))
    };

    Ok(builder.build())
}

/// 送信するメッセージを構築する
///
/// 全宛先を 1 通の `To` ヘッダーにまとめ、本文は `text/html` 単一パートとする。
fn build_message(smtp: &SmtpSettings, email: &EmailMessage) -> Result<Message, NotificationError> {
    if email.recipients.is_empty() {
        return Err(NotificationError::SendFailed(
            "宛先が指定されていません".to_string(),
        ));
    }

    let from: Mailbox = smtp
        .from_address
        .parse()
        .map_err(|e| NotificationError::SendFailed(format!("送信元アドレス不正: {e}")))?;

    let mut builder = Message::builder().from(from).subject(&email.subject);
    for recipient in &email.recipients {
        let to: Mailbox = recipient.parse().map_err(|e| {
            NotificationError::SendFailed(format!("宛先アドレス不正 {recipient:?}: {e}"))
        })?;
        builder = builder.to(to);
    }

    builder
        .header(ContentType::TEXT_HTML)
        .body(email.html_body.clone())
        .map_err(|e| NotificationError::SendFailed(format!("メッセージ構築失敗: {e}")))
}

#[async_trait]
impl NotificationSender for SmtpNotificationSender {
    async fn send_email(
        &self,
        smtp: &SmtpSettings,
        email: &EmailMessage,
    ) -> Result<(), NotificationError> {
        let message = build_message(smtp, email)?;
        let transport = build_transport(smtp)?;

        tracing::debug!(
            smtp.host = %smtp.host,
            smtp.port = smtp.port,
            smtp.starttls = smtp.starttls,
            recipient_count = email.recipients.len(),
            "SMTP 送信を開始"
        );

        transport
            .send(message)
            .await
            .map_err(|e| NotificationError::SendFailed(format!("SMTP 送信失敗: {e}")))?;

        Ok(())
    }
}
