//! Site Configuration
//!
//! Locations and labels the page behavior depends on. Every field has a
//! default matching the stock page layout, so an empty object (or no config at
//! all) is a valid configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Location of the projects data file, relative to the page
    pub projects_url: String,
    /// Id of the element the cards are appended to
    pub list_container_id: String,
    /// Selector for the navigation links
    pub navigation_links: String,
    /// Selector for the navigable sections
    pub sections: String,
    /// Section shown after start-up
    pub default_section: String,
    /// Text of the outbound link in the detail modal
    pub link_label: String,
    /// Text of the node shown when the projects cannot be loaded
    pub load_error_message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            projects_url: "src/projects.json".to_string(),
            list_container_id: "project-list".to_string(),
            navigation_links: "#navigation a".to_string(),
            sections: "main section[id]".to_string(),
            default_section: "about-me".to_string(),
            link_label: "View on GitHub".to_string(),
            load_error_message: "Unable to load projects.".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).with_context(|| "Failed to parse site config JSON")
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site config: {:?}", path))?;
        Self::from_json(&contents)
    }
}
