use axum::{Json, extract::State};
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};

use crate::AppState;

pub const PATH: &str = "/health";

/// Distinguishes "misconfigured" (`missing_env_vars` non-empty) from
/// "configured but unreachable"; both report `db_ready: false`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub node_env: String,
    pub db_ready: bool,
    pub missing_env_vars: Vec<String>,
    pub msg: String,
}

#[debug_handler]
#[tracing::instrument(skip_all, ret)]
pub async fn handler(State(state): State<AppState>) -> Json<ResponseBody> {
    let environment = state.environment();
    let db_ready = state.is_ready();

    Json(ResponseBody {
        node_env: environment.node_env.to_string(),
        db_ready,
        missing_env_vars: environment
            .missing_env_vars
            .iter()
            .map(|var| var.to_string())
            .collect(),
        msg: match db_ready {
            true => "ok",
            false => "database not ready",
        }
        .to_string(),
    })
}
