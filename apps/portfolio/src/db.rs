use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates the PostgreSQL pool used by the direct database backend.
///
/// The pool connects lazily so an unreachable database does not stop the
/// site from serving its static page.
pub fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Configuring PostgreSQL pool...");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(database_url)?;

    info!("PostgreSQL pool ready (lazy connect)");
    Ok(pool)
}
