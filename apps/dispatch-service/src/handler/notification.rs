//! # 通知配信ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /v1/notifications/dispatch` - 通知メールを配信する
//!
//! ## リクエスト例
//!
//! ```json
//! {
//!   "options": {},
//!   "notification_type": "ERROR",
//!   "message": { "title": "バックアップ失敗", "description": "db-01" },
//!   "secret_data": { "smtp_host": "smtp.example.com" },
//!   "channel_data": { "email": ["ops@example.com"] }
//! }
//! ```

use std::sync::Arc;

use alertmail_domain::request::NotificationRequest;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::{error::DispatchError, usecase::NotificationService};

/// 通知配信 API の共有状態
pub struct DispatchState {
    pub service: NotificationService,
}

/// 配信結果 DTO
#[derive(Debug, Serialize)]
pub struct DispatchResultDto {
    pub dispatched: bool,
}

/// 成功レスポンス `{ "data": { "dispatched": true } }`
#[derive(Debug, Serialize)]
pub struct DispatchResponse {
    pub data: DispatchResultDto,
}

/// POST /v1/notifications/dispatch
///
/// 1 リクエストにつき 1 通のメールを同期的に送信する。
/// JSON として解釈できないボディは 400 を返す。
pub async fn dispatch_notification(
    State(state): State<Arc<DispatchState>>,
    payload: Result<Json<NotificationRequest>, JsonRejection>,
) -> Result<impl IntoResponse, DispatchError> {
    let Json(request) = payload.map_err(|e| DispatchError::BadRequest(e.body_text()))?;

    state.service.dispatch(request).await?;

    let response = DispatchResponse {
        data: DispatchResultDto { dispatched: true },
    };
    Ok((StatusCode::OK, Json(response)))
}
