use anyhow::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::migration::Migrator;

pub type OrmConn = DatabaseConnection;

/// Create a SeaORM connection. Postgres in production; `sqlite::memory:` works
/// for tests because the schema is built from the entity definitions.
pub async fn create_orm_conn(database_url: &str) -> Result<OrmConn> {
    let conn = Database::connect(database_url).await?;
    tracing::debug!(backend = ?conn.get_database_backend(), "database connected");
    Ok(conn)
}

/// Apply every pending migration.
pub async fn run_migrations(conn: &OrmConn) -> Result<()> {
    Migrator::up(conn, None).await?;
    Ok(())
}
