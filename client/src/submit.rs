use crate::{DirectoryClient, FormError, LoginForm, Route};

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Returning visitor with no reason: acknowledged locally, nothing sent.
    WelcomeBack { name: String },

    Created { message: String },

    /// The service answered with a non-success status.
    Rejected { status: u16, body: RejectionBody },

    /// The request never got an answer (connection refused, DNS, TLS, ...).
    NetworkFailure(String),
}

/// Error body of a rejected submission: JSON when it parses, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionBody {
    Json(serde_json::Value),
    Text(String),
}

impl RejectionBody {
    pub fn decode(bytes: &[u8]) -> Self {
        match serde_json::from_slice(bytes) {
            Ok(value) => RejectionBody::Json(value),
            Err(_) => RejectionBody::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    /// The `error` field if there is one, else the whole body, else the status.
    pub fn message(&self, status: u16) -> String {
        match self {
            RejectionBody::Json(value) => match value.get("error").and_then(|e| e.as_str()) {
                Some(error) if !error.is_empty() => error.to_string(),
                _ if value.is_null() => status.to_string(),
                _ => value.to_string(),
            },
            RejectionBody::Text(text) if !text.is_empty() => text.clone(),
            RejectionBody::Text(_) => status.to_string(),
        }
    }
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            SubmitOutcome::WelcomeBack { .. } | SubmitOutcome::Created { .. }
        )
    }

    /// What the visitor is told.
    pub fn report(&self) -> String {
        match self {
            SubmitOutcome::WelcomeBack { name } => format!("Welcome back, {name}!"),
            SubmitOutcome::Created { message } => format!("Submit success: {message}"),
            SubmitOutcome::Rejected { status, body } => {
                format!("Submit failed: {}", body.message(*status))
            }
            SubmitOutcome::NetworkFailure(e) => format!("Network or CORS error: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub outcome: SubmitOutcome,

    /// Always [`Route::Resume`], whatever the outcome.
    pub next: Route,
}

/// Submit the form.
///
/// A returning visitor who left the reason empty is acknowledged without a
/// request. Everyone else is sent to the service. The visitor moves on to the
/// resume regardless of the outcome, which is only logged and reported.
pub async fn submit(client: &DirectoryClient, form: &LoginForm) -> Result<Submission, FormError> {
    form.validate()?;

    let outcome = match form.matched() {
        Some(_) if form.reason().is_empty() => SubmitOutcome::WelcomeBack {
            name: form.name().to_string(),
        },
        _ => client.create_visitor(form.name(), form.reason()).await,
    };

    match &outcome {
        SubmitOutcome::WelcomeBack { name } => tracing::info!("returning visitor :: {}", name),
        SubmitOutcome::Created { message } => tracing::info!("submit success :: {}", message),
        SubmitOutcome::Rejected { status, body } => {
            tracing::error!("server error :: {} :: {:?}", status, body)
        }
        SubmitOutcome::NetworkFailure(e) => tracing::error!("submit error (network) :: {}", e),
    }

    Ok(Submission {
        outcome,
        next: Route::Resume,
    })
}
