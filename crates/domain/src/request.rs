//! # 配信リクエスト
//!
//! 外部から受け取る配信リクエストと、処理開始前の必須パラメータ検査。
//!
//! `options` / `message` / `notification_type` は必須。いずれかが欠けていれば
//! レンダリングや送信を一切行わずに `MissingParameter` を返す。

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    NotificationError,
    message::Message,
    notification_type::NotificationType,
    smtp::SmtpCredentials,
};

/// 配信チャネル固有の宛先情報
///
/// `email` の欠落と `null` はどちらも宛先なしとして扱う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChannelData {
    #[serde(default)]
    pub email: Option<Vec<String>>,
}

/// 配信リクエスト（1 回の配信でのみ使われる）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationRequest {
    pub options:           Option<Map<String, Value>>,
    pub message:           Option<Message>,
    pub notification_type: Option<String>,
    #[serde(default)]
    pub secret_data:       Option<SmtpCredentials>,
    #[serde(default)]
    pub channel_data:      Option<ChannelData>,
}

/// 必須パラメータ検査を通過した配信入力
#[derive(Debug, Clone)]
pub struct DispatchInput {
    pub options:           Map<String, Value>,
    pub message:           Message,
    /// 件名に使うタイトル
    pub title:             String,
    pub notification_type: NotificationType,
    pub credentials:       SmtpCredentials,
    pub recipients:        Vec<String>,
}

impl NotificationRequest {
    /// 必須パラメータを検査し、配信入力に変換する
    pub fn check_required(self) -> Result<DispatchInput, NotificationError> {
        let options = self
            .options
            .ok_or(NotificationError::MissingParameter("options"))?;
        let message = self
            .message
            .ok_or(NotificationError::MissingParameter("message"))?;
        let notification_type = self
            .notification_type
            .ok_or(NotificationError::MissingParameter("notification_type"))?;
        let title = message
            .title
            .clone()
            .ok_or(NotificationError::MissingParameter("message.title"))?;

        Ok(DispatchInput {
            options,
            message,
            title,
            notification_type: NotificationType::new(notification_type),
            credentials: self.secret_data.unwrap_or_default(),
            recipients: self
                .channel_data
                .and_then(|channel| channel.email)
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn full_request_json() -> Value {
        json!({
            "options": {},
            "message": { "title": "ジョブ失敗" },
            "notification_type": "ERROR",
            "secret_data": { "smtp_host": "smtp.example.com" },
            "channel_data": { "email": ["ops@example.com", "dev@example.com"] }
        })
    }

    #[test]
    fn test_必須パラメータが揃っていれば配信入力に変換できる() {
        let request: NotificationRequest = serde_json::from_value(full_request_json()).unwrap();

        let input = request.check_required().unwrap();

        assert_eq!(input.title, "ジョブ失敗");
        assert_eq!(input.notification_type.as_str(), "ERROR");
        assert_eq!(
            input.credentials.smtp_host.as_deref(),
            Some("smtp.example.com")
        );
        assert_eq!(
            input.recipients,
            vec!["ops@example.com".to_string(), "dev@example.com".to_string()]
        );
    }

    #[rstest]
    #[case("options")]
    #[case("message")]
    #[case("notification_type")]
    fn test_必須パラメータが欠けているとmissing_parameterになる(#[case] field: &str) {
        let mut json = full_request_json();
        json.as_object_mut().unwrap().remove(field);
        let request: NotificationRequest = serde_json::from_value(json).unwrap();

        let error = request.check_required().unwrap_err();

        match error {
            NotificationError::MissingParameter(name) => assert_eq!(name, field),
            other => panic!("MissingParameter を期待したが {other:?}"),
        }
    }

    #[test]
    fn test_タイトルがないとmissing_parameterになる() {
        let mut json = full_request_json();
        json["message"] = json!({ "description": "本文のみ" });
        let request: NotificationRequest = serde_json::from_value(json).unwrap();

        let error = request.check_required().unwrap_err();

        assert!(matches!(
            error,
            NotificationError::MissingParameter("message.title")
        ));
    }

    #[test]
    fn test_secret_dataとchannel_dataは省略できる() {
        let request: NotificationRequest = serde_json::from_value(json!({
            "options": {},
            "message": { "title": "t" },
            "notification_type": "INFO",
            "secret_data": null
        }))
        .unwrap();

        let input = request.check_required().unwrap();

        assert_eq!(input.credentials, SmtpCredentials::default());
        assert!(input.recipients.is_empty());
    }

    #[rstest]
    #[case(json!({ "email": null }))]
    #[case(json!({}))]
    #[case(Value::Null)]
    fn test_宛先が欠落またはnullなら宛先なしになる(#[case] channel_data: Value) {
        let mut json = full_request_json();
        json["channel_data"] = channel_data;
        let request: NotificationRequest = serde_json::from_value(json).unwrap();

        let input = request.check_required().unwrap();

        assert!(input.recipients.is_empty());
    }
}
