//! # テンプレートストア
//!
//! 論理名 → テンプレートソースの対応。起動時に一度だけ解決し、
//! [`TemplateRenderer`](super::TemplateRenderer) に渡す。
//!
//! - [`TemplateSet::builtin`]: `include_str!` でバイナリに埋め込んだテンプレート
//! - [`TemplateSet::from_dir`]: 指定ディレクトリから読み込んだテンプレート（`TEMPLATE_DIR`）

use std::path::Path;

use alertmail_domain::NotificationError;

/// 構造化通知テンプレートの論理名
pub const STRUCTURED_TEMPLATE: &str = "alert_notification.html";

/// HTML コンテンツ通知テンプレートの論理名
pub const HTML_CONTENTS_TEMPLATE: &str = "alert_notification_html_contents.html";

/// 通知テンプレート一式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    /// 構造化通知（description / tags / image_url）
    pub structured:    String,
    /// HTML コンテンツ通知（contents）
    pub html_contents: String,
}

impl TemplateSet {
    /// 埋め込みテンプレート
    pub fn builtin() -> Self {
        Self {
            structured:    include_str!("../../../templates/alert_notification.html").to_string(),
            html_contents: include_str!(
                "../../../templates/alert_notification_html_contents.html"
            )
            .to_string(),
        }
    }

    /// ディレクトリからテンプレートを読み込む
    ///
    /// ファイル名は論理名と同じ（`alert_notification.html` など）。
    pub fn from_dir(dir: &Path) -> Result<Self, NotificationError> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|e| {
                NotificationError::TemplateFailed(format!(
                    "テンプレートを読み込めません {}: {e}",
                    path.display()
                ))
            })
        };

        Ok(Self {
            structured:    read(STRUCTURED_TEMPLATE)?,
            html_contents: read(HTML_CONTENTS_TEMPLATE)?,
        })
    }
}
