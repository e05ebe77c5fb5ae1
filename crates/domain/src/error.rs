//! # 通知エラー
//!
//! 配信処理の各段階で発生するエラーを定義する。
//!
//! | バリアント | 発生箇所 | 呼び出し元への扱い |
//! |-----------|---------|------------------|
//! | `MissingParameter` | 必須パラメータ検査 | そのまま返す（再試行しない） |
//! | `InvalidMessage` | メッセージ検証 | フィールド名と値を添えて返す |
//! | `TemplateFailed` | テンプレート登録・レンダリング | 内部エラー |
//! | `SendFailed` | SMTP 送信 | 変換せずにそのまま返す |
//!
//! 発生日時の解析失敗はエラーではない（表示から省略するだけ）。

use thiserror::Error;

/// 通知配信エラー
#[derive(Debug, Error)]
pub enum NotificationError {
    /// 必須パラメータがない
    #[error("必須パラメータがありません: {0}")]
    MissingParameter(&'static str),

    /// メッセージの値が不正
    #[error("メッセージが不正です: {key} = {value:?}")]
    InvalidMessage { key: &'static str, value: String },

    /// テンプレートの登録またはレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),

    /// メール送信に失敗（接続・認証・送信のいずれか）
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),
}
