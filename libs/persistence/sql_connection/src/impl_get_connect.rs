use deadpool_postgres::{Object, Pool};

use crate::static_vars::get_sql_pool;

#[derive(Debug, Clone)]
pub struct SqlConnect {
    pool: Pool,
}

impl SqlConnect {
    pub fn new(pool: Pool) -> Self { Self { pool } }

    /// Handle onto the pool registered by
    /// [`connect_postgres_db`](crate::connect_postgres_db), if any.
    pub fn from_global() -> Option<Self> {
        get_sql_pool().cloned().map(Self::new)
    }

    pub async fn get_client(
        &self,
    ) -> Result<Object, deadpool_postgres::PoolError> {
        self.pool.get().await
    }

    /// `(available, size)` of the underlying pool.
    pub fn get_pool_status(&self) -> (usize, usize) {
        let status = self.pool.status();
        (status.available, status.size)
    }
}
