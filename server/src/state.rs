use std::{sync::Arc, time::Duration};

use data_access::DataAccess;
use error::Context;

use crate::config::{DbConfig, NodeEnv};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// What the process was started with. Fixed for the life of the process.
#[derive(Debug)]
pub struct Environment {
    pub node_env: NodeEnv,
    pub missing_env_vars: Vec<&'static str>,
}

/// Injected into every handler.
///
/// The store handle is present iff the service is ready. It is decided once in
/// [`AppState::init`] and never changes afterwards: there is no reconnection.
#[derive(Clone)]
pub struct AppState {
    environment: Arc<Environment>,
    data_access: Option<DataAccess>,
}

impl AppState {
    pub fn new(environment: Environment, data_access: Option<DataAccess>) -> Self {
        Self {
            environment: Arc::new(environment),
            data_access,
        }
    }

    /// Try the store exactly once.
    pub async fn init(node_env: NodeEnv, db: &DbConfig) -> Self {
        let missing_env_vars = db.missing_env_vars();

        let data_access = match db.connection_url(&node_env) {
            None => {
                tracing::error!(
                    "database not configured, missing {:?} :: continuing without database",
                    missing_env_vars
                );
                None
            }
            Some(url) => match DataAccess::connect(url.reveal_ref(), CONNECT_TIMEOUT)
                .await
                .context("connect database")
            {
                Ok(data_access) => {
                    tracing::info!("connected to database");
                    Some(data_access)
                }
                Err(e) => {
                    tracing::error!("{} :: continuing without database", e);
                    None
                }
            },
        };

        Self::new(
            Environment {
                node_env,
                missing_env_vars,
            },
            data_access,
        )
    }

    pub fn is_ready(&self) -> bool {
        self.data_access.is_some()
    }

    pub fn data_access(&self) -> Option<&DataAccess> {
        self.data_access.as_ref()
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }
}
