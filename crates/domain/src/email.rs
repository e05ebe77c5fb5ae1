//! # メールメッセージ

/// 送信するメールメッセージ
///
/// レンダリング済みの本文と宛先の組。`NotificationSender` に渡され、送信後は破棄される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    /// 宛先メールアドレス（空の場合は送信側でエラーにする）
    pub recipients: Vec<String>,
    /// 件名（メッセージのタイトル）
    pub subject:    String,
    /// HTML 本文
    pub html_body:  String,
}
