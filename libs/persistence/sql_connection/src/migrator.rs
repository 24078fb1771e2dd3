use anyhow::Context;
use deadpool_postgres::Pool;
use tracing::{debug, info};

const MIGRATIONS: &[(&str, &str)] = &[(
    "001_create_events",
    include_str!(
        "../../../../domains/events/migrations/sql/001_create_events.sql"
    ),
)];

/// Applies the plain SQL migrations shipped with the domains, once each,
/// tracking them in `_migrations`.
pub struct SqlMigrator {
    pool: Pool,
}

impl SqlMigrator {
    pub fn new(pool: Pool) -> Self { Self { pool } }

    pub async fn run_all_migrations(&self) -> anyhow::Result<()> {
        for (name, sql) in MIGRATIONS {
            self.run_migration(name, sql).await?;
        }
        Ok(())
    }

    pub async fn run_migration(
        &self, migration_name: &str, migration_sql: &str,
    ) -> anyhow::Result<()> {
        self.create_migration_table().await?;

        if self.is_migration_applied(migration_name).await? {
            debug!("Migration {} already applied, skipping", migration_name);
            return Ok(());
        }

        let mut client = self.pool.get().await?;
        let tx = client.transaction().await?;
        tx.batch_execute(migration_sql)
            .await
            .with_context(|| {
                format!("Failed to run migration {}", migration_name)
            })?;
        tx.execute(
            "INSERT INTO _migrations (name, applied_at) VALUES ($1, NOW())",
            &[&migration_name],
        )
        .await?;
        tx.commit().await?;

        info!("Migration {} applied", migration_name);
        Ok(())
    }

    pub async fn list_applied_migrations(&self) -> anyhow::Result<Vec<String>> {
        self.create_migration_table().await?;

        let client = self.pool.get().await?;
        let rows = client
            .query("SELECT name FROM _migrations ORDER BY id", &[])
            .await?;

        Ok(rows.iter().map(|row| row.get(0)).collect())
    }

    async fn create_migration_table(&self) -> anyhow::Result<()> {
        let client = self.pool.get().await?;
        client
            .batch_execute(
                r#"
                CREATE TABLE IF NOT EXISTS _migrations (
                    id SERIAL PRIMARY KEY,
                    name VARCHAR(255) NOT NULL UNIQUE,
                    applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
                )
                "#,
            )
            .await?;
        Ok(())
    }

    async fn is_migration_applied(
        &self, migration_name: &str,
    ) -> anyhow::Result<bool> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(
                "SELECT COUNT(*) FROM _migrations WHERE name = $1",
                &[&migration_name],
            )
            .await?;
        let count: i64 = row.get(0);
        Ok(count > 0)
    }
}
