use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{PgPool, Pool, Postgres};
use std::str::FromStr;
use tracing::info;

#[derive(Clone)]
pub struct DbClient {
    pub pool: Pool<Postgres>,
}

impl DbClient {
    /// Builds the pool without opening a connection; the first query connects.
    pub fn connect_lazy(connection_string: &str, database: &str) -> Result<Self, sqlx::Error> {
        let options = PgConnectOptions::from_str(connection_string)?.database(database);
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy_with(options);

        Ok(Self { pool })
    }
}

/// Creates the shared documents table if it is missing.
pub(crate) async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Ensuring documents table exists...");
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            seq BIGSERIAL PRIMARY KEY,
            id UUID NOT NULL UNIQUE,
            collection TEXT NOT NULL,
            body JSONB NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS documents_collection_idx ON documents (collection, seq)")
        .execute(pool)
        .await?;

    info!("Documents table ready.");
    Ok(())
}
