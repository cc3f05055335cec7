use anyhow::Result;
use sqlx::Executor;

use crate::db::Connection;

/// Tables used by the example records
pub const SCHEMA: &str = include_str!("../../db/schema.sql");

/// Install the database schema.
pub async fn install(conn: &Connection) -> Result<()> {
    let mut conn = conn.lock().await;
    (&mut *conn).execute(SCHEMA).await?;
    tracing::info!("schema installed");
    Ok(())
}
