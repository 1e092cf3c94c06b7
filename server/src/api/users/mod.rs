pub mod create;
pub mod list;

use sqlx::AnyPool;
use visitor::VisitorRecord;

pub const PATH: &str = "/users";

/// Row order is whatever the store yields.
pub async fn all(pool: &AnyPool) -> Result<Vec<VisitorRecord>, sqlx::Error> {
    sqlx::query_as::<_, VisitorRecord>("SELECT name, reason FROM users")
        .fetch_all(pool)
        .await
}

pub async fn insert(pool: &AnyPool, name: &str, reason: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO users (name, reason) VALUES ($1, $2)")
        .bind(name)
        .bind(reason)
        .execute(pool)
        .await?;

    Ok(())
}

/// The store's own message, passed to the caller unredacted.
fn store_message(err: &sqlx::Error) -> String {
    match err.as_database_error() {
        Some(db_err) => db_err.message().to_string(),
        None => err.to_string(),
    }
}

fn store_code(err: &sqlx::Error) -> Option<String> {
    err.as_database_error()
        .and_then(|db_err| db_err.code())
        .map(|code| code.into_owned())
}
