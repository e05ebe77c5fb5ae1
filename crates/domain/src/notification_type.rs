//! # 通知種別
//!
//! 通知種別名と、メール内で種別を示す表示色の対応表。

/// 表示色の対応表（完全一致・大文字小文字を区別）
const NOTIFICATION_TYPE_COLORS: &[(&str, &str)] = &[
    ("ERROR", "#FF6A6A"),
    ("WARNING", "#FFCE02"),
    ("SUCCESS", "#60B731"),
    ("INFO", "#1D94FF"),
];

/// 対応表にない種別の表示色
pub const DEFAULT_NOTIFICATION_TYPE_COLOR: &str = "#858895";

/// 通知種別
///
/// 呼び出し元が指定した文字列をそのまま保持する。未知の種別も受け付ける。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationType(String);

impl NotificationType {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 表示色を返す
    pub fn color(&self) -> &'static str {
        NOTIFICATION_TYPE_COLORS
            .iter()
            .find(|(name, _)| *name == self.0)
            .map_or(DEFAULT_NOTIFICATION_TYPE_COLOR, |&(_, color)| color)
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
