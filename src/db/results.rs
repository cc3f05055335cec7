use anyhow::{anyhow, Result};
use sqlx::sqlite::SqliteQueryResult;

use crate::operations::QueryResult;

/// Result of a statement executed against SQLite
#[derive(Debug, Clone)]
pub struct Outcome {
    rows_affected: u64,
    last_insert_rowid: i64,
}

impl From<SqliteQueryResult> for Outcome {
    fn from(result: SqliteQueryResult) -> Self {
        Self {
            rows_affected: result.rows_affected(),
            last_insert_rowid: result.last_insert_rowid(),
        }
    }
}

impl QueryResult for Outcome {
    /// SQLite keeps reporting the previous rowid when nothing was
    /// inserted, so no affected rows means no id.
    fn last_insert_id(&self) -> Result<i64> {
        if self.rows_affected == 0 {
            return Err(anyhow!("statement inserted no rows"));
        }
        Ok(self.last_insert_rowid)
    }

    fn rows_affected(&self) -> Result<i64> {
        Ok(i64::try_from(self.rows_affected)?)
    }
}
