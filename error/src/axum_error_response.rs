use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use time::format_description::well_known::Iso8601;

/// JSON body of every error response: `{ "error": ..., "code": ..., "datetime": ... }`.
///
/// `code` is omitted when there is none.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub datetime: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl ToString) -> Self {
        let now_iso8601 = time::OffsetDateTime::now_utc()
            .format(&Iso8601::DATE_TIME_OFFSET)
            .inspect_err(|e| {
                tracing::warn!(
                    "unable to format OffsetDateTime::now_utc() as Iso8601 :: {:?}",
                    e
                )
            })
            .ok();

        Self {
            error: error.to_string(),
            code: None,
            datetime: now_iso8601,
        }
    }

    pub fn with_code(mut self, code: Option<impl ToString>) -> Self {
        self.code = code.map(|code| code.to_string());
        self
    }
}

pub fn axum_error_response(status: StatusCode, body: ErrorBody) -> Response {
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_omitted_when_absent() {
        let body = serde_json::to_value(ErrorBody::new("Database not ready")).unwrap();

        assert_eq!(body["error"], "Database not ready");
        assert!(body.get("code").is_none());
        assert!(body["datetime"].is_string());
    }

    #[test]
    fn code_is_kept_when_present() {
        let body = ErrorBody::new("UNIQUE constraint failed").with_code(Some("2067"));
        let body = serde_json::to_value(body).unwrap();

        assert_eq!(body["code"], "2067");
    }

    #[test]
    fn status_is_applied() {
        let resp = axum_error_response(StatusCode::SERVICE_UNAVAILABLE, ErrorBody::new("x"));
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
