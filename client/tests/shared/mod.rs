use std::time::Duration;

use data_access::DataAccess;
use server::{AppState, Environment, NodeEnv};
use sqlx::AnyPool;
use tempfile::TempDir;
use tokio::net::TcpListener;

const SCHEMA: &str = include_str!("../../../schema.sql");

/// The real service listening on an ephemeral port.
pub struct TestService {
    pub base_url: String,
    pub data_access: Option<DataAccess>,
    inspect: Option<AnyPool>,
    _dir: Option<TempDir>,
}

impl TestService {
    pub async fn ready() -> Self {
        let dir = tempfile::tempdir().expect("unable to create temp dir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

        let data_access = DataAccess::connect(&url, Duration::from_secs(5))
            .await
            .expect("unable to connect to test db");
        let inspect = AnyPool::connect(&url)
            .await
            .expect("unable to connect to test db");

        sqlx::query(SCHEMA)
            .execute(&inspect)
            .await
            .expect("unable to create schema");

        Self {
            base_url: spawn(state(Some(data_access.clone()))).await,
            data_access: Some(data_access),
            inspect: Some(inspect),
            _dir: Some(dir),
        }
    }

    pub async fn not_ready() -> Self {
        Self {
            base_url: spawn(state(None)).await,
            data_access: None,
            inspect: None,
            _dir: None,
        }
    }

    pub async fn seed(&self, name: &str, reason: &str) {
        sqlx::query("INSERT INTO users (name, reason) VALUES ($1, $2)")
            .bind(name)
            .bind(reason)
            .execute(self.inspect.as_ref().expect("service has no store"))
            .await
            .expect("unable to seed visitor");
    }

    pub async fn row_count(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(self.inspect.as_ref().expect("service has no store"))
            .await
            .expect("unable to count rows")
    }

    /// Queries the service has issued so far.
    pub fn query_count(&self) -> u64 {
        self.data_access
            .as_ref()
            .map(DataAccess::query_count)
            .unwrap_or(0)
    }
}

/// Base url of a port nothing listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("unable to bind");
    let addr = listener.local_addr().expect("local_addr");
    drop(listener);
    format!("http://{addr}")
}

fn state(data_access: Option<DataAccess>) -> AppState {
    AppState::new(
        Environment {
            node_env: NodeEnv::default(),
            missing_env_vars: vec![],
        },
        data_access,
    )
}

async fn spawn(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("unable to bind");
    let addr = listener.local_addr().expect("local_addr");

    tokio::spawn(async move {
        axum::serve(listener, server::server(state))
            .await
            .expect("test service stopped");
    });

    format!("http://{addr}")
}
