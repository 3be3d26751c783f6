use anyhow::{Context, Result};
use gloo::utils::document;
use shared::DirectoryConfig;

/// Id of the `<script type="application/json">` element that may override
/// the default settings
pub const CONFIG_ELEMENT_ID: &str = "directory-config";

pub fn parse_config(text: &str) -> Result<DirectoryConfig> {
    let config: DirectoryConfig = serde_json::from_str(text).context("directory config is not valid JSON")?;

    if config.list_page_size == 0 || config.table_page_size == 0 {
        anyhow::bail!("page sizes must be at least 1");
    }

    Ok(config)
}

fn read_embedded_config() -> Result<Option<DirectoryConfig>> {
    let Some(element) = document().get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };

    match element.text_content() {
        Some(text) if !text.trim().is_empty() => parse_config(&text).map(Some),
        _ => Ok(None),
    }
}

/// Settings embedded in the page, or the defaults
pub fn load_config() -> DirectoryConfig {
    match read_embedded_config() {
        Ok(Some(config)) => {
            log::info!(target: "config", "Using embedded directory config");
            config
        }
        Ok(None) => DirectoryConfig::default(),
        Err(e) => {
            log::warn!(target: "config", "Ignoring embedded config: {:#}", e);
            DirectoryConfig::default()
        }
    }
}
