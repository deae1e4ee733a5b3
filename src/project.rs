//! Project Records
//!
//! One entry of the projects data file. The file is external data, so every
//! field is read leniently: absent, null, empty and non-scalar values all count
//! as missing and fall back to a display default instead of failing.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{LoadError, Result};

/// Title shown when a project has no name
pub const UNTITLED: &str = "Untitled";

/// Image alt text when a project has no name
pub const IMAGE_ALT_FALLBACK: &str = "project image";

/// Dialog label when a project has no name
pub const DIALOG_LABEL_FALLBACK: &str = "Project details";

/// Link target when a project has no link
pub const LINK_PLACEHOLDER: &str = "#";

/// Serializes back to the data file's field names, omitting missing fields
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
}

impl Project {
    /// Build a project from one JSON list entry.
    ///
    /// Non-object entries yield a project with every field missing.
    pub fn from_value(value: &Value) -> Self {
        let Some(data) = value.as_object() else {
            return Project::default();
        };

        Project {
            name: get_text(data, "name"),
            image: get_text(data, "image"),
            short_description: get_text(data, "short-description"),
            long_description: get_text(data, "long-description"),
            link: get_text(data, "link"),
            classification: get_text(data, "classification"),
        }
    }

    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(UNTITLED)
    }

    pub fn image_alt(&self) -> &str {
        self.name.as_deref().unwrap_or(IMAGE_ALT_FALLBACK)
    }

    pub fn dialog_label(&self) -> &str {
        self.name.as_deref().unwrap_or(DIALOG_LABEL_FALLBACK)
    }

    /// Image source with leading separators stripped, empty when absent
    pub fn image_src(&self) -> &str {
        self.image.as_deref().map(normalize_path).unwrap_or("")
    }

    pub fn short_text(&self) -> &str {
        self.short_description.as_deref().unwrap_or("")
    }

    pub fn long_text(&self) -> &str {
        self.long_description.as_deref().unwrap_or("")
    }

    pub fn link_href(&self) -> &str {
        self.link.as_deref().unwrap_or(LINK_PLACEHOLDER)
    }

    /// "<classification> project", or empty when unclassified
    pub fn classification_label(&self) -> String {
        self.classification
            .as_deref()
            .map(|c| format!("{} project", c))
            .unwrap_or_default()
    }
}

/// Strip every leading `/` so site-absolute paths resolve relative to the page
pub fn normalize_path(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Parse the body of the projects data file.
///
/// Only two things are checked: the body is JSON, and it is a list.
/// Entry shape is never validated.
pub fn parse_projects(body: &str) -> Result<Vec<Project>> {
    let value: Value = serde_json::from_str(body)?;
    let entries = value.as_array().ok_or(LoadError::NotAnArray)?;
    Ok(entries.iter().map(Project::from_value).collect())
}

/// Extract a displayable string field. Numbers and booleans keep their text
/// form; empty strings count as missing.
fn get_text(data: &Map<String, Value>, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
