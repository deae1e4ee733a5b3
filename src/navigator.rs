//! Section Navigator
//!
//! Radio-style visibility over the registered page sections: after start-up
//! only the default section is shown, and each navigation shows the sections
//! whose id matches the link target and hides the rest. A target that matches
//! nothing leaves every section hidden.

use tracing::{debug, warn};

pub const VISIBLE_CLASS: &str = "visible";
pub const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// Class marking this state
    pub fn class(&self) -> &'static str {
        match self {
            Visibility::Shown => VISIBLE_CLASS,
            Visibility::Hidden => HIDDEN_CLASS,
        }
    }

    /// Class marking the opposite state
    pub fn other_class(&self) -> &'static str {
        match self {
            Visibility::Shown => HIDDEN_CLASS,
            Visibility::Hidden => VISIBLE_CLASS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, Default)]
pub struct SectionNavigator {
    sections: Vec<Section>,
}

impl SectionNavigator {
    /// Register sections in document order. Visibility is settled by
    /// [`SectionNavigator::init`].
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SectionNavigator {
            sections: ids
                .into_iter()
                .map(|id| Section {
                    id: id.into(),
                    visibility: Visibility::Hidden,
                })
                .collect(),
        }
    }

    /// Hide everything, then show `default_id` if it is registered
    pub fn init(&mut self, default_id: &str) -> &[Section] {
        if !self.sections.iter().any(|s| s.id == default_id) {
            warn!("Default section '{}' not found, nothing shown", default_id);
        }
        self.show_only(default_id)
    }

    /// Navigate to the section a link points at.
    ///
    /// `None` (a link without `href`) changes nothing.
    pub fn navigate(&mut self, href: Option<&str>) -> &[Section] {
        match href {
            Some(href) => {
                let target = target_from_href(href);
                debug!("Navigating to '{}'", target);
                self.show_only(target)
            }
            None => {
                warn!("Navigation link without href ignored");
                &self.sections
            }
        }
    }

    fn show_only(&mut self, target: &str) -> &[Section] {
        for section in &mut self.sections {
            section.visibility = if section.id == target {
                Visibility::Shown
            } else {
                Visibility::Hidden
            };
        }
        &self.sections
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.visibility == Visibility::Shown)
            .map(|s| s.id.as_str())
            .collect()
    }
}

/// Section id a link points at: the `href` minus its first character (`#`)
pub fn target_from_href(href: &str) -> &str {
    let mut chars = href.chars();
    chars.next();
    chars.as_str()
}
