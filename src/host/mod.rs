//! Host services
//!
//! The translator depends on three services owned by the host environment:
//! title normalization, natural-language date parsing and enumeration of
//! known page titles / user display names. Each is a narrow trait so hosts can
//! plug in their own implementation; the defaults here are enough for the CLI
//! and for tests.
use std::sync::Arc;

use chrono::{DateTime, Utc};

mod catalog;
mod date_parser;
mod errors;

pub use catalog::StaticCatalog;
pub use date_parser::NaturalDateParser;
pub use errors::HostError;

/// Canonicalizes a free-text title before it is compared against stored titles.
#[cfg_attr(test, mockall::automock)]
pub trait TitleNormalizer: Send + Sync {
    fn normalize(&self, title: &str) -> String;
}

/// Turns a natural-language date ("yesterday", "January 5th, 2024") into an instant.
#[cfg_attr(test, mockall::automock)]
pub trait DateParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<DateTime<Utc>, HostError>;
}

/// Read-only queries against the host's current data set.
#[cfg_attr(test, mockall::automock)]
pub trait GraphCatalog: Send + Sync {
    fn page_titles(&self) -> Result<Vec<String>, HostError>;
    fn user_display_names(&self) -> Result<Vec<String>, HostError>;
}

/// Titles are used as given; quoting happens when constants are built.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimTitles;

impl TitleNormalizer for VerbatimTitles {
    fn normalize(&self, title: &str) -> String {
        title.to_string()
    }
}

/// Bundle of host services handed to generators and option providers.
#[derive(Clone)]
pub struct Host {
    pub titles: Arc<dyn TitleNormalizer>,
    pub dates: Arc<dyn DateParser>,
    pub catalog: Arc<dyn GraphCatalog>,
}

impl Host {
    pub fn new(
        titles: Arc<dyn TitleNormalizer>,
        dates: Arc<dyn DateParser>,
        catalog: Arc<dyn GraphCatalog>,
    ) -> Self {
        Host {
            titles,
            dates,
            catalog,
        }
    }

    pub fn with_catalog(catalog: StaticCatalog) -> Self {
        Host {
            catalog: Arc::new(catalog),
            ..Host::default()
        }
    }
}

impl Default for Host {
    fn default() -> Self {
        Host {
            titles: Arc::new(VerbatimTitles),
            dates: Arc::new(NaturalDateParser::new()),
            catalog: Arc::new(StaticCatalog::default()),
        }
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}
