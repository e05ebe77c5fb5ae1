//! # 通知サービス
//!
//! 必須パラメータ検査 → メッセージ検証 → テンプレートレンダリング → メール送信を統合する。
//!
//! ## 設計方針
//!
//! - **同期的な 1 リクエスト 1 送信**: キュー・再試行・スケジューリングは持たない
//! - **エラーはそのまま返す**: 送信失敗（`SendFailed`）も変換せず呼び出し元に返す
//! - **依存性注入**: `NotificationSender` は構築時に trait オブジェクトとして受け取る
//! - **SMTP 設定の解決**: `secret_data` の未指定フィールドはデフォルト値で補う

use std::sync::Arc;

use alertmail_domain::{
    EmailMessage,
    NotificationError,
    request::{DispatchInput, NotificationRequest},
    smtp::SmtpSettings,
};
use alertmail_infra::NotificationSender;
use alertmail_shared::{
    event_log::{error, event},
    log_business_event,
};

use super::TemplateRenderer;

/// 通知サービス
pub struct NotificationService {
    sender:            Arc<dyn NotificationSender>,
    template_renderer: TemplateRenderer,
    smtp_defaults:     SmtpSettings,
}

impl NotificationService {
    pub fn new(
        sender: Arc<dyn NotificationSender>,
        template_renderer: TemplateRenderer,
        smtp_defaults: SmtpSettings,
    ) -> Self {
        Self {
            sender,
            template_renderer,
            smtp_defaults,
        }
    }

    /// 通知を配信する
    ///
    /// 必須パラメータ（`options`, `message`, `notification_type`）が欠けている場合は、
    /// レンダリングや送信を行う前に `MissingParameter` を返す。
    pub async fn dispatch(&self, request: NotificationRequest) -> Result<(), NotificationError> {
        let input = request.check_required().inspect_err(log_rejected)?;
        self.dispatch_input(input).await
    }

    async fn dispatch_input(&self, input: DispatchInput) -> Result<(), NotificationError> {
        let DispatchInput {
            message,
            title,
            notification_type,
            credentials,
            recipients,
            ..
        } = input;

        message.validate().inspect_err(log_rejected)?;

        let html_body = self
            .template_renderer
            .render(&message, &notification_type)
            .inspect_err(|e| {
                tracing::error!(
                    error.category = error::category::INTERNAL,
                    error.kind = error::kind::TEMPLATE,
                    error = %e,
                    notification_type = %notification_type,
                    "通知テンプレートのレンダリングに失敗"
                );
            })?;

        let smtp = credentials.resolve(&self.smtp_defaults);
        let email = EmailMessage {
            recipients,
            subject: title,
            html_body,
        };

        match self.sender.send_email(&smtp, &email).await {
            Ok(()) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_SENT,
                    event.result = event::result::SUCCESS,
                    notification_type = %notification_type,
                    notification.recipient_count = email.recipients.len(),
                    smtp.host = %smtp.host,
                    "通知メール送信成功"
                );
                Ok(())
            }
            Err(e) => {
                log_business_event!(
                    event.category = event::category::NOTIFICATION,
                    event.action = event::action::NOTIFICATION_FAILED,
                    event.result = event::result::FAILURE,
                    error.category = error::category::EXTERNAL_SERVICE,
                    error.kind = error::kind::SMTP,
                    notification_type = %notification_type,
                    notification.recipient_count = email.recipients.len(),
                    smtp.host = %smtp.host,
                    error = %e,
                    "通知メール送信失敗"
                );
                Err(e)
            }
        }
    }
}

/// リクエスト不備による拒否のエラー種別
///
/// 送信やレンダリングの失敗は拒否ではないため `None`。
fn rejection_kind(e: &NotificationError) -> Option<&'static str> {
    match e {
        NotificationError::MissingParameter(_) => Some(error::kind::MISSING_PARAMETER),
        NotificationError::InvalidMessage { .. } => Some(error::kind::INVALID_MESSAGE),
        NotificationError::TemplateFailed(_) | NotificationError::SendFailed(_) => None,
    }
}

/// リクエスト不備による拒否を記録する
fn log_rejected(e: &NotificationError) {
    let Some(kind) = rejection_kind(e) else {
        return;
    };
    log_business_event!(
        event.category = event::category::NOTIFICATION,
        event.action = event::action::NOTIFICATION_REJECTED,
        event.result = event::result::FAILURE,
        error.category = error::category::VALIDATION,
        error.kind = kind,
        error = %e,
        "通知リクエストを拒否"
    );
}
