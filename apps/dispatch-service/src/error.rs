//! # Dispatch Service エラー定義
//!
//! Dispatch Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | ステータス |
//! |-------|-----------|
//! | `MissingParameter` / `InvalidMessage` / 不正な JSON | 400 |
//! | `SendFailed` | 502 |
//! | `TemplateFailed` | 500（detail は固定値） |

use alertmail_domain::NotificationError;
use alertmail_shared::ErrorResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Dispatch Service で発生するエラー
#[derive(Debug, Error)]
pub enum DispatchError {
    /// リクエストボディを解釈できない
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// 配信処理のエラー
    #[error(transparent)]
    Notification(#[from] NotificationError),
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let body = match &self {
            DispatchError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
            DispatchError::Notification(e @ NotificationError::MissingParameter(_)) => {
                ErrorResponse::missing_parameter(e.to_string())
            }
            DispatchError::Notification(e @ NotificationError::InvalidMessage { .. }) => {
                ErrorResponse::invalid_message(e.to_string())
            }
            DispatchError::Notification(e @ NotificationError::SendFailed(_)) => {
                ErrorResponse::delivery_failed(e.to_string())
            }
            DispatchError::Notification(e @ NotificationError::TemplateFailed(_)) => {
                tracing::error!("内部エラー: {}", e);
                ErrorResponse::internal_error()
            }
        };

        let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
