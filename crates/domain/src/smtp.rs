//! # SMTP 接続情報
//!
//! 呼び出しごとに渡される SMTP 認証情報（secret data）と、
//! 未指定フィールドを補うプロセス全体のデフォルト値を扱う。
//!
//! ## 設計方針
//!
//! - **フィールド単位のフォールバック**: `secret_data` の各フィールドは独立して
//!   デフォルト値にフォールバックする（ホストだけ指定、なども可）
//! - **パスワードはログに出さない**: `Debug` 実装でマスクする

use std::fmt;

use serde::{Deserialize, Deserializer, de::Error as _};

/// 呼び出し元から渡された SMTP 認証情報
///
/// すべてのフィールドが任意。未指定のものは [`SmtpSettings`] のデフォルトで補う。
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SmtpCredentials {
    pub smtp_host:  Option<String>,
    #[serde(default, deserialize_with = "deserialize_port")]
    pub smtp_port:  Option<u16>,
    pub user:       Option<String>,
    pub password:   Option<String>,
    pub from_email: Option<String>,
}

impl SmtpCredentials {
    /// デフォルト値で補完した接続設定を返す
    pub fn resolve(self, defaults: &SmtpSettings) -> SmtpSettings {
        SmtpSettings {
            host:         self.smtp_host.unwrap_or_else(|| defaults.host.clone()),
            port:         self.smtp_port.unwrap_or(defaults.port),
            user:         self.user.unwrap_or_else(|| defaults.user.clone()),
            password:     self.password.unwrap_or_else(|| defaults.password.clone()),
            from_address: self
                .from_email
                .unwrap_or_else(|| defaults.from_address.clone()),
            starttls:     defaults.starttls,
        }
    }
}

impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .field("from_email", &self.from_email)
            .finish()
    }
}

/// 解決済みの SMTP 接続設定
///
/// プロセス全体のデフォルト値としても、1 回の送信で使う確定値としても使う。
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host:         String,
    pub port:         u16,
    pub user:         String,
    pub password:     String,
    /// 送信元メールアドレス
    pub from_address: String,
    /// STARTTLS で接続するか（`false` は平文。Mailpit 等のローカル SMTP 向け）
    pub starttls:     bool,
}

impl fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"********")
            .field("from_address", &self.from_address)
            .field("starttls", &self.starttls)
            .finish()
    }
}

/// ポート番号は数値・文字列のどちらでも受け付ける
fn deserialize_port<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortRepr {
        Number(u16),
        Text(String),
    }

    match Option::<PortRepr>::deserialize(deserializer)? {
        None => Ok(None),
        Some(PortRepr::Number(port)) => Ok(Some(port)),
        Some(PortRepr::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("smtp_port が不正です: {text:?} ({e})"))),
    }
}
