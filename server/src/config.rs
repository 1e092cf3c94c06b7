use std::fmt::Display;

use crate::redacted::Redacted;

/// `NODE_ENV` as given, `development` when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeEnv(String);

impl NodeEnv {
    pub const PRODUCTION: &str = "production";
    pub const DEVELOPMENT: &str = "development";

    pub fn is_production(&self) -> bool {
        self.0 == Self::PRODUCTION
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NodeEnv {
    fn default() -> Self {
        Self(Self::DEVELOPMENT.to_string())
    }
}

impl From<Option<String>> for NodeEnv {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(value) if !value.is_empty() => Self(value),
            _ => Self::default(),
        }
    }
}

impl Display for NodeEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Store connection settings. Every field is optional so that a partially
/// configured process still starts and can report what is missing.
#[derive(Debug, Clone, Default)]
pub struct DbConfig {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<Redacted<String>>,
    pub name: Option<String>,
}

impl DbConfig {
    /// Required environment variables that were not provided, in a fixed order.
    pub fn missing_env_vars(&self) -> Vec<&'static str> {
        [
            ("DB_USER", given(&self.user).is_some()),
            ("DB_PASSWORD", self.given_password().is_some()),
            ("DB_SERVER", given(&self.server).is_some()),
            ("DB_NAME", given(&self.name).is_some()),
        ]
        .into_iter()
        .filter_map(|(var, present)| (!present).then_some(var))
        .collect()
    }

    /// Connection url, or `None` when a required value is missing.
    ///
    /// Outside production the connection is encrypted but the server
    /// certificate is not verified.
    pub fn connection_url(&self, node_env: &NodeEnv) -> Option<Redacted<String>> {
        let (Some(server), Some(user), Some(password), Some(name)) = (
            given(&self.server),
            given(&self.user),
            self.given_password(),
            given(&self.name),
        ) else {
            return None;
        };

        let host = match self.port {
            Some(port) => format!("{server}:{port}"),
            None => server.to_string(),
        };

        let sslmode = match node_env.is_production() {
            true => "verify-full",
            false => "require",
        };

        Some(Redacted::from(format!(
            "postgres://{}:{}@{}/{}?sslmode={}",
            urlencoding::encode(user),
            urlencoding::encode(password),
            host,
            urlencoding::encode(name),
            sslmode,
        )))
    }

    fn given_password(&self) -> Option<&str> {
        self.password
            .as_ref()
            .map(|password| password.reveal_ref().as_str())
            .filter(|password| !password.is_empty())
    }
}

/// An empty value counts as not provided.
fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
