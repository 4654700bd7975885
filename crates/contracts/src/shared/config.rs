use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub order: OrderConfig,
    pub table: TableConfig,
    pub countdown: CountdownConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OrderConfig {
    pub currency: String,
    pub locale: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CountdownConfig {
    /// Lifetime of a generated pay-by link.
    pub seconds: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ThemeConfig {
    pub storage_key: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[order]
currency = "NPR"
locale = "en-US"

[table]
default_page_size = 10
page_size_options = [5, 10, 25, 50]

[countdown]
seconds = 86400

[theme]
storage_key = "themeMode"
"#;

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            order: OrderConfig {
                currency: "NPR".to_string(),
                locale: "en-US".to_string(),
            },
            table: TableConfig {
                default_page_size: 10,
                page_size_options: vec![5, 10, 25, 50],
            },
            countdown: CountdownConfig { seconds: 86_400 },
            theme: ThemeConfig {
                storage_key: "themeMode".to_string(),
            },
        }
    }
}

/// Parse and validate a TOML configuration document.
pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = toml::from_str(contents)
        .map_err(crate::shared::error::DashboardError::from)
        .context("failed to parse dashboard configuration")?;

    anyhow::ensure!(
        config.table.default_page_size > 0,
        "table.default_page_size must be positive"
    );
    anyhow::ensure!(
        config.table.page_size_options.iter().all(|&s| s > 0),
        "table.page_size_options must be positive"
    );
    anyhow::ensure!(
        config
            .table
            .page_size_options
            .contains(&config.table.default_page_size),
        "table.default_page_size must be one of table.page_size_options"
    );
    anyhow::ensure!(
        !config.theme.storage_key.trim().is_empty(),
        "theme.storage_key must not be empty"
    );

    Ok(config)
}

/// Load the embedded configuration.
///
/// Falls back to [`DashboardConfig::default`] if the embedded document is invalid.
pub fn load_config() -> DashboardConfig {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Using built-in dashboard defaults: {:#}", e);
            DashboardConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_load_config_matches_defaults() {
        assert_eq!(load_config(), DashboardConfig::default());
    }

    #[test]
    fn test_rejects_default_page_size_outside_options() {
        let doc = DEFAULT_CONFIG.replace("default_page_size = 10", "default_page_size = 7");
        let err = parse_config(&doc).unwrap_err();
        assert!(err.to_string().contains("default_page_size"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = parse_config("[order\ncurrency = ").unwrap_err();
        assert!(format!("{:#}", err).contains("invalid configuration"));
    }
}
