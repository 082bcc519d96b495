use thiserror::Error;

use crate::host::HostError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Host(#[from] HostError),
    #[error("Custom relation failed: {0}")]
    Custom(String),
}
