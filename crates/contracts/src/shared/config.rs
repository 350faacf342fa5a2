use crate::enums::{CategoryFilter, ProjectCategory};
use crate::error::CatalogError;
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Проектов на странице
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// id секции, к которой прокручиваем при смене страницы
    #[serde(default = "default_anchor_id")]
    pub anchor_id: String,
    /// Вкладки фильтра в порядке отображения
    #[serde(default = "default_tabs")]
    pub tabs: Vec<CategoryFilter>,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[catalog]
page_size = 3
anchor_id = "projects"
tabs = ["all", "fullstack", "frontend"]
"#;

fn default_page_size() -> usize {
    3
}

fn default_anchor_id() -> String {
    "projects".to_string()
}

fn default_tabs() -> Vec<CategoryFilter> {
    vec![
        CategoryFilter::All,
        CategoryFilter::Only(ProjectCategory::Fullstack),
        CategoryFilter::Only(ProjectCategory::Frontend),
    ]
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            anchor_id: default_anchor_id(),
            tabs: default_tabs(),
        }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.page_size == 0 {
            return Err(CatalogError::InvalidPageSize(self.page_size));
        }
        if self.anchor_id.trim().is_empty() {
            return Err(CatalogError::InvalidAnchor);
        }
        Ok(())
    }
}

/// Load catalog configuration
///
/// Uses `override_toml` when given, otherwise the embedded default.
/// Tab codes are checked while deserializing, page size and anchor afterwards.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<CatalogConfig> {
    let contents = match override_toml {
        Some(contents) => {
            log::info!("Loading catalog config from override");
            contents
        }
        None => {
            log::debug!("Using default embedded catalog configuration");
            DEFAULT_CONFIG
        }
    };

    let config: Config = toml::from_str(contents).context("failed to parse catalog config")?;
    config
        .catalog
        .validate()
        .context("catalog config is invalid")?;
    Ok(config.catalog)
}
