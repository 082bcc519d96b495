use serde::{Deserialize, Serialize};

use super::{GraphCatalog, HostError};

/// Fixed lists of page titles and user display names.
///
/// Loaded from YAML in the form:
///
/// ```yaml
/// pages: [Inbox, "January 5th, 2024"]
/// users: [Ada, Grace]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(default)]
    pub users: Vec<String>,
}

impl StaticCatalog {
    pub fn new(pages: Vec<String>, users: Vec<String>) -> Self {
        StaticCatalog { pages, users }
    }

    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, HostError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HostError::CatalogUnavailable(format!("{}: {}", path.display(), e))
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| HostError::CatalogUnavailable(format!("{}: {}", path.display(), e)))
    }
}

impl GraphCatalog for StaticCatalog {
    fn page_titles(&self) -> Result<Vec<String>, HostError> {
        Ok(self.pages.clone())
    }

    fn user_display_names(&self) -> Result<Vec<String>, HostError> {
        Ok(self.users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_catalog_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pages: [Inbox, \"January 5th, 2024\"]\nusers: [Ada]").unwrap();

        let catalog = StaticCatalog::from_yaml_file(file.path()).unwrap();
        assert_eq!(
            catalog.page_titles().unwrap(),
            vec!["Inbox".to_string(), "January 5th, 2024".to_string()]
        );
        assert_eq!(catalog.user_display_names().unwrap(), vec!["Ada".to_string()]);
    }

    #[test]
    fn test_catalog_missing_sections_default_to_empty() {
        let catalog: StaticCatalog = serde_yaml::from_str("pages: [Inbox]").unwrap();
        assert!(catalog.users.is_empty());
    }

    #[test]
    fn test_catalog_missing_file_is_unavailable() {
        let err = StaticCatalog::from_yaml_file("/nonexistent/catalog.yaml").unwrap_err();
        assert!(matches!(err, HostError::CatalogUnavailable(_)));
    }
}
