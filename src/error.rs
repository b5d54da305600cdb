use thiserror::Error;

/// Failure of one step of the multipart-upload sequence.
///
/// Every variant means the same thing to the runner: the remote call did
/// not succeed and the sequence stops. The variants only shape the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    #[error("{operation}: request failed: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("{operation}: service responded with status {status}: {message}")]
    Service {
        operation: &'static str,
        status: u16,
        message: String,
    },

    #[error("{operation}: response is missing {field}")]
    MissingField {
        operation: &'static str,
        field: &'static str,
    },
}

impl HarnessError {
    /// Name of the remote operation that failed.
    pub fn operation(&self) -> &'static str {
        match self {
            HarnessError::Transport { operation, .. }
            | HarnessError::Service { operation, .. }
            | HarnessError::MissingField { operation, .. } => operation,
        }
    }
}
