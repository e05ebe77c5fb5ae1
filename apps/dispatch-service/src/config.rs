//! # Dispatch Service 設定
//!
//! 環境変数から Dispatch Service の設定を読み込む。
//! SMTP のデフォルト値は、リクエストの `secret_data` で指定されなかった項目に使われる。

use std::{env, path::PathBuf, str::FromStr};

use alertmail_domain::smtp::SmtpSettings;
use alertmail_shared::observability::LogFormat;
use strum::EnumString;
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 値を解釈できない
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Dispatch Service の設定
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// ログ出力形式
    pub log_format:   LogFormat,
    /// 通知設定
    pub notification: NotificationConfig,
}

/// 送信バックエンド
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationBackend {
    /// SMTP サーバー経由で送信
    Smtp,
    /// 送信しない（ログ出力のみ）
    Noop,
}

/// 通知機能の設定
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// 送信バックエンド
    pub backend:       NotificationBackend,
    /// SMTP のデフォルト値
    pub smtp_defaults: SmtpSettings,
    /// テンプレートディレクトリ（未設定なら埋め込みテンプレートを使う）
    pub template_dir:  Option<PathBuf>,
}

impl DispatchConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host:         lookup("DISPATCH_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port:         parse_or(&lookup, "DISPATCH_PORT", 50051)?,
            log_format:   parse_or(&lookup, "LOG_FORMAT", LogFormat::Pretty)?,
            notification: NotificationConfig::from_lookup(&lookup)?,
        })
    }
}

impl NotificationConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            backend:       parse_or(lookup, "NOTIFICATION_BACKEND", NotificationBackend::Smtp)?,
            smtp_defaults: SmtpSettings {
                host:         lookup("SMTP_HOST")
                    .unwrap_or_else(|| "smtp.mail.us-east-1.awsapps.com".to_string()),
                port:         parse_or(lookup, "SMTP_PORT", 587)?,
                user:         lookup("SMTP_USER").unwrap_or_default(),
                password:     lookup("SMTP_PASSWORD").unwrap_or_default(),
                from_address: lookup("SENDER_EMAIL_ADDR")
                    .unwrap_or_else(|| "no-reply@alertmail.example.com".to_string()),
                starttls:     parse_or(lookup, "SMTP_STARTTLS", true)?,
            },
            template_dir:  lookup("TEMPLATE_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        })
    }
}

/// 値があれば解釈し、なければデフォルト値を返す
fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_未設定ならデフォルト値を使う() {
        let config = DispatchConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 50051);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.notification.backend, NotificationBackend::Smtp);
        assert_eq!(
            config.notification.smtp_defaults.host,
            "smtp.mail.us-east-1.awsapps.com"
        );
        assert_eq!(config.notification.smtp_defaults.port, 587);
        assert_eq!(config.notification.smtp_defaults.user, "");
        assert!(config.notification.smtp_defaults.starttls);
        assert_eq!(config.notification.template_dir, None);
    }

    #[test]
    fn test_環境変数の値で上書きできる() {
        let config = DispatchConfig::from_lookup(lookup_from(&[
            ("DISPATCH_PORT", "8080"),
            ("LOG_FORMAT", "json"),
            ("NOTIFICATION_BACKEND", "noop"),
            ("SMTP_HOST", "localhost"),
            ("SMTP_PORT", "1025"),
            ("SMTP_USER", "mailer"),
            ("SMTP_PASSWORD", "secret"),
            ("SMTP_STARTTLS", "false"),
            ("SENDER_EMAIL_ADDR", "alerts@example.com"),
            ("TEMPLATE_DIR", "/etc/alertmail/templates"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.notification.backend, NotificationBackend::Noop);
        let smtp = &config.notification.smtp_defaults;
        assert_eq!(smtp.host, "localhost");
        assert_eq!(smtp.port, 1025);
        assert_eq!(smtp.user, "mailer");
        assert_eq!(smtp.password, "secret");
        assert_eq!(smtp.from_address, "alerts@example.com");
        assert!(!smtp.starttls);
        assert_eq!(
            config.notification.template_dir,
            Some(PathBuf::from("/etc/alertmail/templates"))
        );
    }

    #[test]
    fn test_不正なポート番号はエラーになる() {
        let result = DispatchConfig::from_lookup(lookup_from(&[("SMTP_PORT", "smtp")]));

        match result {
            Err(ConfigError::Invalid { name, value }) => {
                assert_eq!(name, "SMTP_PORT");
                assert_eq!(value, "smtp");
            }
            other => panic!("Invalid を期待したが {other:?}"),
        }
    }

    #[test]
    fn test_未知のバックエンドはエラーになる() {
        let result =
            DispatchConfig::from_lookup(lookup_from(&[("NOTIFICATION_BACKEND", "ses")]));

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                name: "NOTIFICATION_BACKEND",
                ..
            })
        ));
    }

    #[test]
    fn test_未知のログ形式はエラーになる() {
        let result = DispatchConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "yaml")]));

        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                name: "LOG_FORMAT",
                ..
            })
        ));
    }
}
