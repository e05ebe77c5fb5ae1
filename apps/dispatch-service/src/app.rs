//! # ルーター構築

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::Request,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    SERVICE_NAME,
    handler::{DispatchState, dispatch_notification, health_check},
};

/// Dispatch Service のルーターを構築する
///
/// リクエストごとのスパンにもサービス名を載せる。
/// ハンドラはワーカースレッド上で動くため、起動時のルートスパンを引き継がない。
pub fn build_router(state: Arc<DispatchState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/notifications/dispatch", post(dispatch_notification))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    service = SERVICE_NAME,
                    method = %request.method(),
                    uri = %request.uri()
                )
            }),
        )
}
