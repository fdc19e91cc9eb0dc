use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Operation '{0}' is not implemented")]
    NotImplemented(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Reserved: named by the contract design (code 1) but never raised
    /// by this core. Raising it requires a caller-authorization check.
    #[error("Caller is not authorized")]
    NotAuthorized,

    /// Reserved: named by the contract design (code 2) but never raised
    /// by this core. Raising it requires a project-existence check.
    #[error("Project not found")]
    ProjectNotFound,
}

pub type Result<T> = std::result::Result<T, LedgerError>;

impl LedgerError {
    /// On-chain error code for the reserved contract errors.
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::NotAuthorized => Some(1),
            Self::ProjectNotFound => Some(2),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_error_codes() {
        assert_eq!(LedgerError::NotAuthorized.code(), Some(1));
        assert_eq!(LedgerError::ProjectNotFound.code(), Some(2));
        assert_eq!(LedgerError::NotImplemented("x".into()).code(), None);
        assert_eq!(LedgerError::InvalidArgument("x".into()).code(), None);
    }
}
