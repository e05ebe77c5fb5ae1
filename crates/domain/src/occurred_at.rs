//! # 発生日時
//!
//! メッセージの `occurred_at`（ISO 8601 文字列）を解析し、メール表示用の
//! 固定形式 `"<Month> <DD>, <YYYY> <HH>:<MM> <AM/PM> (UTC)"` に変換する。
//!
//! 解析できない値はエラーにせず `None` を返す。呼び出し側は発生日時の表示を省略する。
//!
//! 時刻は 24 時間表記のまま AM/PM を付与する（例: `14:30 PM`）。

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// 表示形式
const DISPLAY_FORMAT: &str = "%B %d, %Y %H:%M %p (UTC)";

/// タイムゾーン付きで RFC 3339 に合致しない形式
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// タイムゾーンなしの形式（UTC とみなす）
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// ISO 8601 文字列を UTC の日時に変換する
///
/// オフセット付きの値は UTC に換算する。日付のみの値は UTC 0 時とする。
pub fn parse_iso8601(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = OFFSET_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// 日時を表示形式に整形する
pub fn format_occurred_at(dt: &DateTime<Utc>) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

/// `occurred_at` を表示用文字列に変換する（解析失敗時は `None`）
pub fn convert_occurred_at(raw: &str) -> Option<String> {
    parse_iso8601(raw).map(|dt| format_occurred_at(&dt))
}
