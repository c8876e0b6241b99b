// Configuration type definitions

use serde::Deserialize;

use crate::error::Result;

fn default_text_prop() -> String {
    "name".to_string()
}

fn default_id_prop() -> String {
    "id".to_string()
}

fn default_highlight() -> bool {
    true
}

/// Options for filtering and highlighting a list of items
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterConfig {
    /// Field holding the identifier of each item
    #[serde(default = "default_id_prop")]
    pub id_prop: String,
    /// Field holding the text displayed for each item
    #[serde(default = "default_text_prop")]
    pub text_prop: String,
    /// Fields searched when filtering; falls back to `text_prop`
    #[serde(default)]
    pub filter_fields: Option<Vec<String>>,
    /// Whether matches are highlighted in the displayed text
    #[serde(default = "default_highlight")]
    pub highlight: bool,
    /// Whether a search matching no listed id is offered as a new item
    #[serde(default)]
    pub accept_unlisted_value: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            id_prop: default_id_prop(),
            text_prop: default_text_prop(),
            filter_fields: None,
            highlight: default_highlight(),
            accept_unlisted_value: false,
        }
    }
}

impl FilterConfig {
    /// Parse a configuration from TOML
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: FilterConfig = toml::from_str(content)?;
        log::debug!(
            "Loaded filter config: text_prop={}, filter_fields={:?}, highlight={}",
            config.text_prop,
            config.filter_fields,
            config.highlight
        );
        Ok(config)
    }

    /// Fields consulted when filtering
    pub fn search_fields(&self) -> Vec<&str> {
        match &self.filter_fields {
            Some(fields) if !fields.is_empty() => fields.iter().map(String::as_str).collect(),
            _ => vec![self.text_prop.as_str()],
        }
    }
}
