//! Esquema y verificación de conexión a PostgreSQL

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use tracing::info;

/// Migraciones embebidas desde `migrations/`
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Ejecutar migraciones de la base de datos
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("✅ Migraciones aplicadas ({} en total)", MIGRATOR.iter().count());
    Ok(())
}

/// Verificar que la conexión funciona
pub async fn check_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
