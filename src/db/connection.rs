use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    Connection as SqlConnection,
};
use tokio::sync::Mutex;

use crate::{
    args::Arg,
    db::{results::Outcome, schema},
    operations::ExecuteQuery,
};

/// A thread safe connection to the database
pub type Connection = Arc<Mutex<SqliteConnection>>;

/// Open a connection to the database
pub async fn open(filename: &str) -> Result<Connection> {
    let conn = SqliteConnectOptions::from_str(filename)?
        .create_if_missing(true)
        .foreign_keys(true);
    let conn = SqliteConnection::connect_with(&conn).await?;
    tracing::debug!(filename, "opened database");
    Ok(Arc::new(Mutex::new(conn)))
}

#[async_trait]
impl ExecuteQuery for Connection {
    type Output = Outcome;

    async fn execute_query(&self, query: &str, args: &[Arg]) -> Result<Outcome> {
        let mut qry = sqlx::query(query);
        for arg in args {
            qry = match arg {
                Arg::Null => qry.bind(None::<i64>),
                Arg::Int(v) => qry.bind(*v),
                Arg::Real(v) => qry.bind(*v),
                Arg::Text(v) => qry.bind(v.clone()),
                Arg::Date(v) => qry.bind(*v),
            };
        }

        let mut conn = self.lock().await;
        let result = qry.execute(&mut *conn).await?;
        Ok(Outcome::from(result))
    }
}

pub struct TestHandle {
    filename: PathBuf,
}

impl Drop for TestHandle {
    fn drop(&mut self) {
        if self.filename.exists() {
            fs::remove_file(&self.filename).ok();
        }
    }
}

/// Open a new test database connection.
/// The database will be created on each open.
pub async fn open_test() -> (TestHandle, Connection) {
    let filename = std::env::temp_dir().join(format!(
        "rowkeeper_test_{}.sqlite3",
        rand::random::<u64>()
    ));
    let handle = TestHandle {
        filename: filename.clone(),
    };

    let conn = open(&filename.to_string_lossy()).await.unwrap();

    // Install the schema
    schema::install(&conn).await.unwrap();

    (handle, conn)
}
