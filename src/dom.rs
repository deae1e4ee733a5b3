//! Element Trees
//!
//! An owned, browser-independent description of the markup the gallery builds.
//! The same tree is serialized to HTML for the preview server and materialized
//! into live nodes by the `web` bridge.

use std::fmt::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
    hide_on_error: bool,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            classes: Vec::new(),
            attributes: Vec::new(),
            styles: Vec::new(),
            text: None,
            children: Vec::new(),
            hide_on_error: false,
        }
    }

    // ------------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------------

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Set an attribute, replacing any earlier value
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
        self
    }

    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.styles.push((property.to_string(), value.to_string()));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Hide this element (`display: none`) when its resource fails to load
    pub fn hide_on_error(mut self) -> Self {
        self.hide_on_error = true;
        self
    }

    pub fn append(&mut self, child: Element) {
        self.children.push(child);
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn styles(&self) -> &[(String, String)] {
        &self.styles
    }

    pub fn get_style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Own text content, empty when none was set
    pub fn text_content(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn hides_on_error(&self) -> bool {
        self.hide_on_error
    }

    /// Inline `style` attribute value built from the style list
    pub fn style_attr(&self) -> Option<String> {
        if self.styles.is_empty() {
            return None;
        }
        let declarations: Vec<String> = self
            .styles
            .iter()
            .map(|(p, v)| format!("{}: {}", p, v))
            .collect();
        Some(declarations.join("; "))
    }

    // ------------------------------------------------------------------------
    // Queries (depth-first, self included)
    // ------------------------------------------------------------------------

    pub fn find_all(&self, pred: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(pred, &mut found);
        found
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if pred(self) {
            found.push(self);
        }
        for child in &self.children {
            child.collect(pred, found);
        }
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find_all(&|e| e.has_class(class)).into_iter().next()
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        self.find_all(&|e| e.tag == tag).into_iter().next()
    }

    pub fn count_class(&self, class: &str) -> usize {
        self.find_all(&|e| e.has_class(class)).len()
    }

    // ------------------------------------------------------------------------
    // HTML
    // ------------------------------------------------------------------------

    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(256);
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, html: &mut String) {
        html.push('<');
        html.push_str(&self.tag);
        if !self.classes.is_empty() {
            let _ = write!(html, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attributes {
            let _ = write!(html, " {}=\"{}\"", name, escape(value));
        }
        if let Some(style) = self.style_attr() {
            let _ = write!(html, " style=\"{}\"", escape(&style));
        }
        if self.hide_on_error {
            html.push_str(" onerror=\"this.style.display='none'\"");
        }
        html.push('>');

        if is_void(&self.tag) {
            return;
        }

        if let Some(text) = &self.text {
            html.push_str(&escape(text));
        }
        for child in &self.children {
            child.write_html(html);
        }
        let _ = write!(html, "</{}>", self.tag);
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "hr" | "input" | "meta" | "link")
}

/// Escape text for use in element content or a double-quoted attribute
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
