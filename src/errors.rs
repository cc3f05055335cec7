use thiserror::Error as ThisError;

/// Insert errors.
///
/// The executor's error is kept untouched as the source of either variant.
#[derive(Debug, ThisError)]
pub enum InsertError {
    #[error("insert failed: {0}")]
    Execute(#[source] anyhow::Error),
    #[error("reading the generated id failed: {0}")]
    LastInsertId(#[source] anyhow::Error),
}

impl InsertError {
    /// Name of the phase that failed
    pub fn phase(&self) -> &'static str {
        match self {
            InsertError::Execute(_) => "execute",
            InsertError::LastInsertId(_) => "last_insert_id",
        }
    }

    /// The error reported by the executor
    pub fn source_error(&self) -> &anyhow::Error {
        match self {
            InsertError::Execute(err) | InsertError::LastInsertId(err) => err,
        }
    }
}
