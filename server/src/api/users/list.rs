use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use error::{Context, Contextual, ErrorBody, axum_error_response};
use visitor::VisitorRecord;

use crate::AppState;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Database not ready")]
    NotReady,

    #[error("{0}")]
    Sqlx(#[from] Contextual<sqlx::Error>),
}

#[debug_handler]
#[tracing::instrument(skip_all)]
pub async fn handler(State(state): State<AppState>) -> Result<Json<Vec<VisitorRecord>>, Error> {
    let data_access = state.data_access().ok_or(Error::NotReady)?;

    let visitors = data_access
        .read("list visitors", |pool| super::all(pool))
        .await
        .context("list visitors")?;

    tracing::info!("{} visitors", visitors.len());
    Ok(Json(visitors))
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotReady => {
                tracing::warn!("{}", self);
                axum_error_response(StatusCode::SERVICE_UNAVAILABLE, ErrorBody::new(self))
            }
            Error::Sqlx(err) => {
                tracing::error!("{:?}", err);
                axum_error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(super::store_message(err.inner())),
                )
            }
        }
    }
}
