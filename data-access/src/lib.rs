use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use sqlx::{AnyPool, any::AnyPoolOptions};

/// Shared handle to the visitor store.
///
/// Cloning is cheap: clones share the same pool, and the pool does all of
/// the connection multiplexing. Every query issued through [`DataAccess::read`]
/// or [`DataAccess::write`] is counted.
pub struct DataAccess {
    pool: AnyPool,
    queries: Arc<AtomicU64>,
}

impl DataAccess {
    pub fn new(pool: AnyPool) -> Self {
        Self {
            pool,
            queries: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Open a pool against `url` and make sure one connection can be
    /// established before returning.
    pub async fn connect(url: &str, acquire_timeout: Duration) -> Result<Self, sqlx::Error> {
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .acquire_timeout(acquire_timeout)
            .connect(url)
            .await?;

        Ok(Self::new(pool))
    }

    pub async fn read<'conn, V, Fut>(
        &'conn self,
        op: &'static str,
        query: impl FnOnce(&'conn AnyPool) -> Fut,
    ) -> Fut::Output
    where
        Fut: Future<Output = Result<V, sqlx::Error>>,
    {
        self.run("read", op, query).await
    }

    pub async fn write<'conn, V, Fut>(
        &'conn self,
        op: &'static str,
        query: impl FnOnce(&'conn AnyPool) -> Fut,
    ) -> Fut::Output
    where
        Fut: Future<Output = Result<V, sqlx::Error>>,
    {
        self.run("write", op, query).await
    }

    /// Number of queries issued through this handle and its clones.
    pub fn query_count(&self) -> u64 {
        self.queries.load(Ordering::Relaxed)
    }

    async fn run<'conn, V, Fut>(
        &'conn self,
        _kind: &'static str,
        _op: &'static str,
        query: impl FnOnce(&'conn AnyPool) -> Fut,
    ) -> Fut::Output
    where
        Fut: Future<Output = Result<V, sqlx::Error>>,
    {
        self.queries.fetch_add(1, Ordering::Relaxed);

        #[cfg(feature = "tracing")]
        let start = std::time::Instant::now();

        let result = query(&self.pool).await;

        #[cfg(feature = "tracing")]
        match &result {
            Ok(_) => tracing::debug!(
                "{} :: {} :: ok in {}ms",
                _kind,
                _op,
                start.elapsed().as_millis()
            ),
            Err(e) => tracing::debug!("{} :: {} :: failed :: {:?}", _kind, _op, e),
        }

        result
    }
}

impl Clone for DataAccess {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            queries: Arc::clone(&self.queries),
        }
    }
}
