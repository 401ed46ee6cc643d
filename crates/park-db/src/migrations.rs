//! Embedded schema migrations

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;

/// All schema migrations, embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply pending migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}
