//! # Dispatch Service サーバー
//!
//! 通知メッセージを HTML メールにレンダリングし、SMTP で配信する内部サービス。
//!
//! ## 処理の流れ
//!
//! ```text
//! 呼び出し元 ──POST──▶ 必須パラメータ検査 ──▶ メッセージ検証 ──▶ レンダリング ──▶ SMTP 送信
//! ```
//!
//! キュー・再試行・スケジューリングは持たない。1 リクエスト 1 送信で完結する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `DISPATCH_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `DISPATCH_PORT` | No | ポート番号（デフォルト: `50051`） |
//! | `NOTIFICATION_BACKEND` | No | `smtp` / `noop`（デフォルト: `smtp`） |
//! | `SMTP_HOST` / `SMTP_PORT` / `SMTP_USER` / `SMTP_PASSWORD` | No | SMTP のデフォルト値 |
//! | `SMTP_STARTTLS` | No | STARTTLS を使うか（デフォルト: `true`） |
//! | `SENDER_EMAIL_ADDR` | No | デフォルトの送信元アドレス |
//! | `TEMPLATE_DIR` | No | テンプレートディレクトリ（未設定なら埋め込み） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（Mailpit）
//! SMTP_HOST=localhost SMTP_PORT=1025 SMTP_STARTTLS=false cargo run -p alertmail-dispatch-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use alertmail_dispatch_service::{
    SERVICE_NAME,
    app::build_router,
    config::{DispatchConfig, NotificationBackend},
    handler::DispatchState,
    usecase::{NotificationService, TemplateRenderer, TemplateSet},
};
use alertmail_infra::{NoopNotificationSender, NotificationSender, SmtpNotificationSender};
use alertmail_shared::observability::init_tracing;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let config = DispatchConfig::from_env()?;

    let _service_span = init_tracing(SERVICE_NAME, config.log_format);

    tracing::info!(
        "Dispatch Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // テンプレートは起動時に一度だけ解決する
    let templates = match &config.notification.template_dir {
        Some(dir) => {
            tracing::info!(template_dir = %dir.display(), "テンプレートをディレクトリから読み込みます");
            TemplateSet::from_dir(dir)?
        }
        None => TemplateSet::builtin(),
    };
    let template_renderer = TemplateRenderer::new(&templates)?;

    let sender: Arc<dyn NotificationSender> = match config.notification.backend {
        NotificationBackend::Smtp => Arc::new(SmtpNotificationSender::new()),
        NotificationBackend::Noop => Arc::new(NoopNotificationSender),
    };
    tracing::info!(backend = %config.notification.backend, "通知バックエンドを初期化しました");

    let service = NotificationService::new(
        sender,
        template_renderer,
        config.notification.smtp_defaults.clone(),
    );
    let app = build_router(Arc::new(DispatchState { service }));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Dispatch Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
