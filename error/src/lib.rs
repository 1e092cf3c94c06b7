#[cfg(feature = "axum-error-response")]
mod axum_error_response;
#[cfg(feature = "axum-error-response")]
pub use axum_error_response::{ErrorBody, axum_error_response};

#[cfg(feature = "context")]
mod context;
#[cfg(feature = "context")]
pub use context::{Context, Contextual};
