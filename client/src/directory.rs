use reqwest::StatusCode;
use visitor::VisitorRecord;

use crate::submit::{RejectionBody, SubmitOutcome};

const USERS_PATH: &str = "/api/users";

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("unable to build http client :: {0}")]
    Build(#[from] reqwest::Error),
}

/// Talks to the visitor record service.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    fn users_url(&self) -> String {
        format!("{}{}", self.base_url, USERS_PATH)
    }

    /// The full visitor list, or an empty one if anything goes wrong.
    ///
    /// Failures are logged and never reach the visitor.
    pub async fn load_visitors(&self) -> Vec<VisitorRecord> {
        let response = match self.http.get(self.users_url()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("failed to fetch visitors :: {:?}", e);
                return vec![];
            }
        };

        match response.status() {
            status if status.is_success() => match response.json::<Vec<VisitorRecord>>().await {
                Ok(visitors) => visitors,
                Err(e) => {
                    tracing::error!("unable to decode visitors :: {:?}", e);
                    vec![]
                }
            },
            StatusCode::SERVICE_UNAVAILABLE => {
                tracing::warn!("database not ready yet");
                vec![]
            }
            status => {
                tracing::warn!("unable to fetch visitors :: status {}", status);
                vec![]
            }
        }
    }

    /// `POST /api/users`. Never fails: every failure is folded into the
    /// returned outcome.
    pub async fn create_visitor(&self, name: &str, reason: &str) -> SubmitOutcome {
        let response = match self
            .http
            .post(self.users_url())
            .json(&serde_json::json!({ "name": name, "reason": reason }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return SubmitOutcome::NetworkFailure(e.to_string()),
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return SubmitOutcome::NetworkFailure(e.to_string()),
        };

        if !status.is_success() {
            return SubmitOutcome::Rejected {
                status: status.as_u16(),
                body: RejectionBody::decode(&body),
            };
        }

        let message = serde_json::from_slice::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value.get("message")?.as_str().map(str::to_string))
            .unwrap_or_default();

        SubmitOutcome::Created { message }
    }
}
