//! # 通知メッセージ
//!
//! 配信リクエストに含まれるメッセージ本体と、その検証ルールを定義する。
//!
//! ## 設計方針
//!
//! - **生の値を保持**: `content_type` は受信した文字列のまま保持し、
//!   [`Message::content_type`] で [`ContentType`] に変換する。
//!   不正値をデシリアライズ失敗にせず、フィールド名と値を添えた
//!   `InvalidMessage` として返すため
//! - **タグ・コールバックは構造化データ**: 文字列として一括エスケープせず、
//!   テンプレート側の自動エスケープに任せる

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{EnumString, IntoStaticStr};

use crate::NotificationError;

/// メッセージ本文の形式
///
/// - `HTML`: 呼び出し元が用意した `contents` をそのまま本文に使う
/// - `MARKDOWN`: 構造化フィールド（description, tags など）を固定レイアウトで描画する
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    IntoStaticStr,
    EnumString,
    strum::Display,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ContentType {
    Html,
    Markdown,
}

/// 付加情報タグ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub key:     String,
    #[serde(default)]
    pub value:   String,
    #[serde(default)]
    pub options: Map<String, Value>,
}

/// アクションボタン
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Callback {
    #[serde(default)]
    pub url:     String,
    #[serde(default)]
    pub label:   String,
    #[serde(default)]
    pub options: Map<String, Value>,
}

/// 通知メッセージ
///
/// `title` は件名にも使われるため配信時には必須だが、
/// 欠落を `MissingParameter` として報告できるよう `Option` で受ける。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Message {
    pub title:             Option<String>,
    pub link:              Option<String>,
    pub description:       Option<String>,
    pub short_description: Option<String>,
    pub contents:          Option<String>,
    pub content_type:      Option<String>,
    pub image_url:         Option<String>,
    pub domain_name:       Option<String>,
    #[serde(default)]
    pub tags:              Vec<Tag>,
    #[serde(default)]
    pub callbacks:         Vec<Callback>,
    pub occurred_at:       Option<String>,
}

impl Message {
    /// `content_type` を解釈する
    ///
    /// 未指定なら `None`。`HTML` / `MARKDOWN` 以外は `InvalidMessage`。
    pub fn content_type(&self) -> Result<Option<ContentType>, NotificationError> {
        self.content_type
            .as_deref()
            .map(|raw| {
                ContentType::from_str(raw).map_err(|_| NotificationError::InvalidMessage {
                    key:   "message.content_type",
                    value: raw.to_string(),
                })
            })
            .transpose()
    }

    /// メッセージを検証する
    pub fn validate(&self) -> Result<(), NotificationError> {
        self.content_type().map(|_| ())
    }
}
