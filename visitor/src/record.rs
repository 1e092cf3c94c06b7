use serde::{Deserialize, Serialize};

/// One row of the `users` table.
///
/// Names are not unique and there is no surfaced primary key.
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorRecord {
    pub name: String,
    pub reason: String,
}

impl VisitorRecord {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
