use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error as ThisError;

use crate::{
    args::Arg,
    operations::{ExecuteQuery, QueryResult},
};

/// Id reported by a default stub
pub const STUB_ID: i64 = 1;

/// Failures a stub can be told to produce
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum StubError {
    #[error("connection refused")]
    ConnRefused,
    #[error("no id was generated")]
    NoInsertId,
    #[error("{0}")]
    Other(String),
}

/// An executor that never touches a database.
///
/// Every statement succeeds and reports the same id, unless a failure
/// was configured for one of the two phases.
#[derive(Debug)]
pub struct StubExecutor {
    id: i64,
    execute_error: Option<StubError>,
    last_insert_id_error: Option<StubError>,
    executed: AtomicUsize,
}

impl Default for StubExecutor {
    fn default() -> Self {
        Self::with_id(STUB_ID)
    }
}

impl StubExecutor {
    pub fn with_id(id: i64) -> Self {
        Self {
            id,
            execute_error: None,
            last_insert_id_error: None,
            executed: AtomicUsize::new(0),
        }
    }

    /// Fail every statement with `err`
    pub fn fail_execute(mut self, err: StubError) -> Self {
        self.execute_error = Some(err);
        self
    }

    /// Execute fine, but fail when asked for the generated id
    pub fn fail_last_insert_id(mut self, err: StubError) -> Self {
        self.last_insert_id_error = Some(err);
        self
    }

    /// Number of statements that were executed successfully
    pub fn executed(&self) -> usize {
        self.executed.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct StubResult {
    id: std::result::Result<i64, StubError>,
}

impl QueryResult for StubResult {
    fn last_insert_id(&self) -> Result<i64> {
        self.id.clone().map_err(anyhow::Error::new)
    }

    fn rows_affected(&self) -> Result<i64> {
        Ok(1)
    }
}

#[async_trait]
impl ExecuteQuery for StubExecutor {
    type Output = StubResult;

    async fn execute_query(&self, query: &str, args: &[Arg]) -> Result<StubResult> {
        if let Some(err) = &self.execute_error {
            return Err(anyhow::Error::new(err.clone()));
        }
        tracing::trace!(query, args = args.len(), "stub execute");
        self.executed.fetch_add(1, Ordering::SeqCst);

        let id = match &self.last_insert_id_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.id),
        };
        Ok(StubResult { id })
    }
}
