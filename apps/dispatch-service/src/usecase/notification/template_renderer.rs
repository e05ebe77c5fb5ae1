//! # テンプレートレンダラー
//!
//! tera テンプレートエンジンで通知メールの HTML 本文を生成する。
//!
//! ## 設計方針
//!
//! - **テンプレート選択**: `content_type` が `HTML` なら HTML コンテンツテンプレート、
//!   未指定または `MARKDOWN` なら構造化テンプレート
//! - **エスケープ**: 文字列値はここで `tera::escape_html` し、テンプレートでは `| safe` で
//!   出力する。タグ・コールバックは構造化データのまま渡し、tera の自動エスケープに任せる
//! - **`image_url` は構造化テンプレートのみ**: HTML コンテンツテンプレートには渡さない
//! - **発生日時**: 解析できない `occurred_at` は表示から省略する（エラーにしない）

use alertmail_domain::{
    NotificationError,
    message::{ContentType, Message},
    notification_type::NotificationType,
    occurred_at::convert_occurred_at,
};
use tera::{Context, Tera, escape_html};

use super::template_store::{HTML_CONTENTS_TEMPLATE, STRUCTURED_TEMPLATE, TemplateSet};

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、`Message` から HTML 本文を生成する。
/// 登録済みテンプレートは読み取り専用のため、並行する配信間で共有できる。
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// テンプレート一式を登録したレンダラーを作成する
    pub fn new(templates: &TemplateSet) -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![
                (STRUCTURED_TEMPLATE, templates.structured.as_str()),
                (HTML_CONTENTS_TEMPLATE, templates.html_contents.as_str()),
            ])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 埋め込みテンプレートでレンダラーを作成する
    pub fn builtin() -> Result<Self, NotificationError> {
        Self::new(&TemplateSet::builtin())
    }

    /// メッセージから HTML 本文を生成する
    ///
    /// `content_type` が不正な場合は `InvalidMessage` を返す。
    pub fn render(
        &self,
        message: &Message,
        notification_type: &NotificationType,
    ) -> Result<String, NotificationError> {
        let content_type = message.content_type()?;
        let (template_name, context) = build_template_params(message, notification_type, content_type);

        self.engine
            .render(template_name, &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))
    }
}

/// テンプレート名とコンテキストを構築する
fn build_template_params(
    message: &Message,
    notification_type: &NotificationType,
    content_type: Option<ContentType>,
) -> (&'static str, Context) {
    let mut context = Context::new();
    context.insert(
        "domain_name",
        &escape_html(message.domain_name.as_deref().unwrap_or("")),
    );
    context.insert("notification_type", &escape_html(notification_type.as_str()));
    context.insert(
        "notification_type_color",
        &escape_html(notification_type.color()),
    );
    context.insert(
        "title",
        &escape_html(message.title.as_deref().unwrap_or("")),
    );
    context.insert("callbacks", &message.callbacks);
    context.insert("link", &message.link.as_deref().map(escape_html));
    context.insert(
        "occurred_at",
        &message
            .occurred_at
            .as_deref()
            .and_then(convert_occurred_at)
            .map(|formatted| escape_html(&formatted)),
    );

    let template_name = match content_type {
        Some(ContentType::Html) => {
            context.insert(
                "contents",
                &escape_html(message.contents.as_deref().unwrap_or("")),
            );
            HTML_CONTENTS_TEMPLATE
        }
        Some(ContentType::Markdown) | None => {
            context.insert(
                "description",
                &description_to_html(message.description.as_deref().unwrap_or("")),
            );
            context.insert("tags", &message.tags);
            context.insert("image_url", &message.image_url.as_deref().map(escape_html));
            STRUCTURED_TEMPLATE
        }
    };

    (template_name, context)
}

/// 説明文をエスケープし、改行を `<br/>` に変換する
fn description_to_html(description: &str) -> String {
    escape_html(description)
        .replace("\r\n", "<br/>")
        .replace('\n', "<br/>")
}

#[cfg(test)]
mod tests {
    use alertmail_domain::message::{Callback, Tag};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn make_renderer() -> TemplateRenderer {
        TemplateRenderer::builtin().unwrap()
    }

    fn make_message() -> Message {
        Message {
            title: Some("CPU 使用率が閾値を超えました".to_string()),
            description: Some("web-01 の CPU 使用率が 95% です".to_string()),
            contents: Some("<b>raw contents</b>".to_string()),
            tags: vec![Tag {
                key: "instance".to_string(),
                value: "web-01".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn error_type() -> NotificationType {
        NotificationType::new("ERROR")
    }

    #[test]
    fn test_埋め込みテンプレートで初期化できる() {
        assert!(TemplateRenderer::builtin().is_ok());
    }

    #[test]
    fn test_不正なテンプレートはtemplate_failedになる() {
        let templates = TemplateSet {
            structured:    "{% if %}".to_string(),
            html_contents: "ok".to_string(),
        };

        let result = TemplateRenderer::new(&templates);

        assert!(matches!(result, Err(NotificationError::TemplateFailed(_))));
    }

    #[rstest]
    #[case(None)]
    #[case(Some("MARKDOWN"))]
    fn test_htmlでなければ構造化テンプレートでdescriptionとtagsを描画する(
        #[case] content_type: Option<&str>,
    ) {
        let message = Message {
            content_type: content_type.map(str::to_string),
            ..make_message()
        };

        let html = make_renderer().render(&message, &error_type()).unwrap();

        assert!(html.contains("web-01 の CPU 使用率が 95% です"));
        assert!(html.contains("instance"));
        assert!(html.contains(r#"class="tags""#));
        assert!(!html.contains("raw contents"));
        assert!(!html.contains(r#"class="contents""#));
    }

    #[test]
    fn test_htmlならhtmlコンテンツテンプレートでcontentsを描画する() {
        let message = Message {
            content_type: Some("HTML".to_string()),
            image_url: Some("https://img.example.com/graph.png".to_string()),
            ..make_message()
        };

        let html = make_renderer().render(&message, &error_type()).unwrap();

        assert!(html.contains(r#"class="contents""#));
        assert!(html.contains("&lt;b&gt;raw contents&lt;&#x2F;b&gt;"));
        assert!(!html.contains("web-01 の CPU 使用率が 95% です"));
        assert!(!html.contains(r#"class="tags""#));
        assert!(!html.contains(r#"class="image""#));
    }

    #[test]
    fn test_不正なcontent_typeはinvalid_messageになる() {
        let message = Message {
            content_type: Some("PDF".to_string()),
            ..make_message()
        };

        let error = make_renderer().render(&message, &error_type()).unwrap_err();

        match error {
            NotificationError::InvalidMessage { key, value } => {
                assert_eq!(key, "message.content_type");
                assert_eq!(value, "PDF");
            }
            other => panic!("InvalidMessage を期待したが {other:?}"),
        }
    }

    #[test]
    fn test_文字列フィールドはエスケープされる() {
        let message = Message {
            title: Some("<script>alert(1)</script>".to_string()),
            description: Some(r#"a & b "quoted""#.to_string()),
            domain_name: Some("<domain>".to_string()),
            ..make_message()
        };

        let html = make_renderer()
            .render(&message, &NotificationType::new("<WARN>"))
            .unwrap();

        assert!(html.contains("&lt;script&gt;alert(1)&lt;&#x2F;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("a &amp; b &quot;quoted&quot;"));
        assert!(html.contains("&lt;domain&gt;"));
        assert!(html.contains("&lt;WARN&gt;"));
    }

    #[test]
    fn test_タグとコールバックはテンプレートの自動エスケープで出力される() {
        let message = Message {
            tags: vec![Tag {
                key: "<k>".to_string(),
                value: "<v>".to_string(),
                ..Default::default()
            }],
            callbacks: vec![Callback {
                url: "https://example.com/ack".to_string(),
                label: "<Ack>".to_string(),
                ..Default::default()
            }],
            ..make_message()
        };

        let html = make_renderer().render(&message, &error_type()).unwrap();

        assert!(html.contains("&lt;k&gt;"));
        assert!(html.contains("&lt;v&gt;"));
        assert!(html.contains("&lt;Ack&gt;"));
        assert!(!html.contains("<Ack>"));
    }

    #[test]
    fn test_説明文の改行はbrタグに変換される() {
        let message = Message {
            description: Some("1 行目\n2 行目\r\n3 行目".to_string()),
            ..make_message()
        };

        let html = make_renderer().render(&message, &error_type()).unwrap();

        assert!(html.contains("1 行目<br/>2 行目<br/>3 行目"));
    }

    #[test]
    fn test_通知種別の色が描画される() {
        let html = make_renderer()
            .render(&make_message(), &error_type())
            .unwrap();
        assert!(html.contains("#FF6A6A"));

        let html = make_renderer()
            .render(&make_message(), &NotificationType::new("UNKNOWN"))
            .unwrap();
        assert!(html.contains("#858895"));
    }

    #[test]
    fn test_発生日時が表示形式で描画される() {
        let message = Message {
            occurred_at: Some("2023-05-01T14:30:00Z".to_string()),
            ..make_message()
        };

        let html = make_renderer().render(&message, &error_type()).unwrap();

        assert!(html.contains("May 01, 2023 14:30 PM (UTC)"));
    }

    #[test]
    fn test_解析できない発生日時は表示から省略される() {
        let message = Message {
            occurred_at: Some("not-a-date".to_string()),
            ..make_message()
        };

        let html = make_renderer().render(&message, &error_type()).unwrap();

        assert!(!html.contains(r#"class="occurred-at""#));
        assert!(!html.contains("(UTC)"));
        assert!(!html.contains("not-a-date"));
    }

    #[test]
    fn test_リンクと画像urlは指定時のみ描画される() {
        let without = make_renderer()
            .render(&make_message(), &error_type())
            .unwrap();
        assert!(!without.contains(r#"class="link""#));
        assert!(!without.contains(r#"class="image""#));

        let message = Message {
            link: Some("https://console.example.com/alerts?id=1&tab=2".to_string()),
            image_url: Some("https://img.example.com/graph.png".to_string()),
            ..make_message()
        };
        let with = make_renderer().render(&message, &error_type()).unwrap();

        assert!(with.contains(r#"class="link""#));
        assert!(with.contains("alerts?id=1&amp;tab=2"));
        assert!(with.contains(r#"class="image""#));
        assert!(with.contains("graph.png"));
    }

    #[test]
    fn test_html_contentsモードでもリンクは描画される() {
        let message = Message {
            content_type: Some("HTML".to_string()),
            link: Some("https://console.example.com".to_string()),
            ..make_message()
        };

        let html = make_renderer().render(&message, &error_type()).unwrap();

        assert!(html.contains(r#"class="link""#));
    }

    #[test]
    fn test_説明文の変換はエスケープ後に改行を置き換える() {
        assert_eq!(description_to_html("<a>\nb"), "&lt;a&gt;<br/>b");
    }
}
