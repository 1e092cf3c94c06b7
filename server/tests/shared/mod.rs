use std::time::Duration;

use axum::body::{Body, to_bytes};
use data_access::DataAccess;
use http::{Request, Response};
use server::{AppState, Environment, NodeEnv};
use sqlx::AnyPool;
use tempfile::TempDir;
use tower::ServiceExt;

pub mod request;

pub const SCHEMA: &str = include_str!("../../../schema.sql");

pub struct TestClient {
    state: AppState,
    store: Option<Store>,
}

/// Direct handle on the test database, bypassing the service, used to check
/// what the handlers did.
struct Store {
    _dir: TempDir,
    inspect: AnyPool,
}

impl TestClient {
    pub async fn ready() -> Self {
        Self::with_schema(SCHEMA).await
    }

    pub async fn with_schema(schema: &str) -> Self {
        let dir = tempfile::tempdir().expect("unable to create temp dir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

        let data_access = DataAccess::connect(&url, Duration::from_secs(5))
            .await
            .expect("unable to connect to test db");
        let inspect = AnyPool::connect(&url)
            .await
            .expect("unable to connect to test db");

        sqlx::query(schema)
            .execute(&inspect)
            .await
            .expect("unable to create schema");

        Self {
            state: AppState::new(
                Environment {
                    node_env: NodeEnv::default(),
                    missing_env_vars: vec![],
                },
                Some(data_access),
            ),
            store: Some(Store {
                _dir: dir,
                inspect,
            }),
        }
    }

    pub fn not_ready(missing_env_vars: Vec<&'static str>) -> Self {
        Self {
            state: AppState::new(
                Environment {
                    node_env: NodeEnv::default(),
                    missing_env_vars,
                },
                None,
            ),
            store: None,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Asserter {
        let response = server::server(self.state.clone())
            .oneshot(request)
            .await
            .unwrap(/* Infallible */);
        Asserter::from(response)
    }

    /// Queries the service has issued so far.
    pub fn query_count(&self) -> u64 {
        self.state
            .data_access()
            .map(DataAccess::query_count)
            .unwrap_or(0)
    }

    pub async fn row_count(&self) -> i64 {
        let store = self.store.as_ref().expect("test client has no store");
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&store.inspect)
            .await
            .expect("unable to count rows")
    }

    pub async fn seed(&self, name: &str, reason: &str) {
        let store = self.store.as_ref().expect("test client has no store");
        sqlx::query("INSERT INTO users (name, reason) VALUES ($1, $2)")
            .bind(name)
            .bind(reason)
            .execute(&store.inspect)
            .await
            .expect("unable to seed visitor");
    }
}

pub struct Asserter {
    response: Response<Body>,
}

impl Asserter {
    pub fn status(self, expected: u16) -> Self {
        assert_eq!(
            self.response.status().as_u16(),
            expected,
            "expected status {}, got {}",
            expected,
            self.response.status()
        );
        self
    }

    pub fn header(self, name: &str) -> Option<String> {
        self.response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    pub async fn json_body<T>(self, f: impl FnOnce(T))
    where
        T: serde::de::DeserializeOwned,
    {
        f(self.into_deserialized_json_body::<T>().await)
    }

    pub async fn into_deserialized_json_body<T>(self) -> T
    where
        T: serde::de::DeserializeOwned,
    {
        let body_bytes = to_bytes(self.response.into_body(), usize::MAX)
            .await
            .expect("unable to read response body");

        serde_json::from_slice::<T>(&body_bytes).expect("unable to deserialize response body")
    }
}

impl From<Response<Body>> for Asserter {
    fn from(response: Response<Body>) -> Self {
        Self { response }
    }
}

static TRACING_INIT: std::sync::Once = std::sync::Once::new();

pub fn tracing_init() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::from_default_env())
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .init();
    });
}
