use thiserror::Error;

/// Failures reported by host services (date parsing, catalog queries).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("Could not parse '{input}' as a date: {reason}")]
    DateParse { input: String, reason: String },
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),
}

impl HostError {
    pub fn date_parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        HostError::DateParse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
