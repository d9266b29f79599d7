use super::bulk::BulkReport;

/// Holds the most recent bulk upload for one interactive session.
pub trait SessionStore: Send + Sync {
    fn current(&self) -> Result<Option<BulkReport>, SessionError>;
    fn replace(&self, report: BulkReport) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// Error enumeration for session storage failures.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
