use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use error::{Context, Contextual, ErrorBody, axum_error_response};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Stored exactly as received: no trimming, no case folding and no length
/// checks. Absent fields become empty strings.
#[derive(Debug, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseBody {
    pub message: String,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Database not ready")]
    NotReady,

    #[error("{0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("{0}")]
    Sqlx(#[from] Contextual<sqlx::Error>),
}

/// Readiness is checked before the body is looked at, so a service without a
/// store answers 503 whatever was sent.
#[debug_handler]
#[tracing::instrument(skip_all)]
pub async fn handler(
    State(state): State<AppState>,
    body: Result<Json<RequestBody>, JsonRejection>,
) -> Result<(StatusCode, Json<ResponseBody>), Error> {
    let data_access = state.data_access().ok_or(Error::NotReady)?;

    let Json(body) = body?;
    tracing::info!("POST /api/users body :: {:?}", body);

    data_access
        .write("insert visitor", |pool| {
            super::insert(pool, &body.name, &body.reason)
        })
        .await
        .context("insert visitor")?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseBody {
            message: "User created successfully".to_string(),
        }),
    ))
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotReady => {
                tracing::warn!("{}", self);
                axum_error_response(StatusCode::SERVICE_UNAVAILABLE, ErrorBody::new(self))
            }
            Error::InvalidBody(rejection) => {
                tracing::info!("{:?}", rejection);
                let status = rejection.status();
                axum_error_response(status, ErrorBody::new(rejection.body_text()))
            }
            Error::Sqlx(err) => {
                tracing::error!("{:?}", err);
                let inner = err.inner();
                axum_error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(super::store_message(inner))
                        .with_code(super::store_code(inner)),
                )
            }
        }
    }
}
