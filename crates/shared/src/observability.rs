//! # ログ出力の初期化
//!
//! `RUST_LOG` でレベルを、`LOG_FORMAT`（`json` / `pretty`）で出力形式を切り替える。
//!
//! 初期化と同時にサービス名を持つルートスパン `app` に入る。以降のログ行には
//! すべて `service` が付き、JSON 出力では `span.service` として現れる。
//!
//! ```text
//! {"timestamp":"…","level":"INFO","message":"通知メール送信成功",
//!  "event.kind":"business_event","notification_type":"ERROR",
//!  "span":{"service":"dispatch-service","name":"app"}}
//! ```

use strum::{Display, EnumString};
use tracing::span::EnteredSpan;
use tracing_subscriber::{
    EnvFilter,
    Layer as _,
    Registry,
    fmt::MakeWriter,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_FILTER: &str = "info,alertmail=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// 1 行 1 JSON（イベントフィールドはトップレベルに展開）
    Json,
    #[default]
    Pretty,
}

/// トレーシングを初期化し、サービスのルートスパンに入る
///
/// 戻り値のガードを破棄するとスパンから抜けるため、`main` の終わりまで保持すること。
pub fn init_tracing(service: &'static str, format: LogFormat) -> EnteredSpan {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    build_subscriber(format, filter, std::io::stdout).init();

    let span = enter_service_span(service);
    tracing::debug!(log_format = %format, "トレーシングを初期化しました");
    span
}

fn enter_service_span(service: &'static str) -> EnteredSpan {
    tracing::info_span!("app", service = service).entered()
}

fn build_subscriber<W>(
    format: LogFormat,
    filter: EnvFilter,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let fmt_layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .boxed(),
    };

    Registry::default().with(filter).with(fmt_layer)
}
