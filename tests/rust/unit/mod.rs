//! Unit tests - translation behaviour through the public API
//!
//! No host environment is required; host services are the crate defaults or
//! static catalogs.

mod registry_tests;
mod translation_tests;
