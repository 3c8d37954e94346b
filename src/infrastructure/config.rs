//! Page configuration embedded in the host document.
//!
//! The page reads `<script id="portfolio-config" type="application/json">`.
//! A missing tag means the built-in sample content; a tag that does not parse
//! is reported and also falls back to the sample content.

use crate::domain::logging::LogComponent;
use crate::domain::portfolio::PortfolioConfig;
use crate::{log_error, log_info};

pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

const COMPONENT: LogComponent = LogComponent::Config("PageConfig");

pub fn load_portfolio_config() -> PortfolioConfig {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    config_from_script_text(text.as_deref())
}

/// Resolve the configuration from the script tag's text, if there was one.
pub fn config_from_script_text(text: Option<&str>) -> PortfolioConfig {
    let Some(text) = text.map(str::trim).filter(|text| !text.is_empty()) else {
        log_info!(COMPONENT, "No #{} element, using sample content", CONFIG_ELEMENT_ID);
        return PortfolioConfig::default();
    };
    match PortfolioConfig::from_json(text) {
        Ok(config) => {
            log_info!(COMPONENT, "Loaded {} projects from #{}", config.projects.len(), CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log_error!(COMPONENT, "{}; using sample content", e);
            PortfolioConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_script_means_sample_content() {
        assert_eq!(config_from_script_text(Some("  \n ")), PortfolioConfig::default());
        assert_eq!(config_from_script_text(None), PortfolioConfig::default());
    }

    #[test]
    fn broken_json_falls_back() {
        assert_eq!(config_from_script_text(Some("{ not json")), PortfolioConfig::default());
    }

    #[test]
    fn script_text_overrides_fields() {
        let config = config_from_script_text(Some(r#"{ "showBackground": false }"#));
        assert!(!config.show_background);
        assert_eq!(config.projects.len(), 3);
    }
}
