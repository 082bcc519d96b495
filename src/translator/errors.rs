use thiserror::Error;

use crate::generator::GenerateError;
use crate::host::HostError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("Relation '{relation}' failed to generate clauses: {source}")]
    Generation {
        relation: String,
        source: GenerateError,
    },
    #[error("Target options for relation '{relation}' unavailable: {source}")]
    TargetOptions {
        relation: String,
        source: HostError,
    },
}
