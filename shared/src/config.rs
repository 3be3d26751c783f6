use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::route::ViewMode;

/// Settings for the employee directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Rows per page in the `list` view mode
    pub list_page_size: usize,
    /// Cards per page in the `table` view mode
    pub table_page_size: usize,
    /// Storage key holding the employee collection
    pub employees_key: String,
    /// Storage key holding the language preference
    pub language_key: String,
    pub default_language: Language,
    /// `log` level name (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            list_page_size: 12,
            table_page_size: 15,
            employees_key: "employees".to_string(),
            language_key: "language".to_string(),
            default_language: Language::English,
            log_level: "info".to_string(),
        }
    }
}

impl DirectoryConfig {
    pub fn page_size(&self, view_mode: ViewMode) -> usize {
        match view_mode {
            ViewMode::List => self.list_page_size,
            ViewMode::Table => self.table_page_size,
        }
    }

    /// Parse the level name, defaulting to `Info`
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_sizes() {
        let config = DirectoryConfig::default();
        assert_eq!(config.page_size(ViewMode::List), 12);
        assert_eq!(config.page_size(ViewMode::Table), 15);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: DirectoryConfig = serde_json::from_str(r#"{"table_page_size": 9, "default_language": "tr"}"#).unwrap();

        assert_eq!(config.table_page_size, 9);
        assert_eq!(config.list_page_size, 12);
        assert_eq!(config.default_language, Language::Turkish);
        assert_eq!(config.employees_key, "employees");
    }

    #[test]
    fn test_log_level_filter() {
        let mut config = DirectoryConfig::default();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);

        config.log_level = "debug".to_string();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);

        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }
}
