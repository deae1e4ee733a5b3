//! Headless Page
//!
//! In-memory stand-in for the document: a project list container, a body with
//! an inline `overflow` style, the overlays appended to it, and the element
//! that has focus. Drives the modal lifecycle in tests and renders the list
//! fragment on the preview server.

use crate::dom::Element;
use crate::gallery::controller::Surface;
use crate::gallery::modal::{CLOSE_CLASS, OVERLAY_CLASS};

#[derive(Debug, Default)]
pub struct Page {
    list: Option<Element>,
    overlays: Vec<Element>,
    body_overflow: Option<String>,
    overflow_writes: usize,
    listeners_attached: bool,
    focused: Option<String>,
}

impl Page {
    /// A page without a project list container
    pub fn new() -> Self {
        Page::default()
    }

    /// A page whose body already carries an inline `overflow` value
    pub fn with_body_overflow(value: &str) -> Self {
        Page {
            body_overflow: Some(value.to_string()),
            ..Page::default()
        }
    }

    pub fn with_list_container(id: &str) -> Self {
        Page {
            list: Some(Element::new("div").attr("id", id)),
            ..Page::default()
        }
    }

    pub fn list(&self) -> Option<&Element> {
        self.list.as_ref()
    }

    /// Append nodes to the list container. Returns `false` without a container.
    pub fn append_to_list(&mut self, nodes: Vec<Element>) -> bool {
        let Some(list) = self.list.as_mut() else {
            return false;
        };
        for node in nodes {
            list.append(node);
        }
        true
    }

    pub fn overlay(&self) -> Option<&Element> {
        self.overlays.first()
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    pub fn listeners_attached(&self) -> bool {
        self.listeners_attached
    }

    /// Class of the focused element
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Number of times the body overflow has been written
    pub fn overflow_writes(&self) -> usize {
        self.overflow_writes
    }
}

impl Surface for Page {
    fn overlay_present(&self) -> bool {
        self.overlays.iter().any(|o| o.has_class(OVERLAY_CLASS))
    }

    fn mount_overlay(&mut self, overlay: Element) {
        self.overlays.push(overlay);
    }

    fn unmount_overlay(&mut self) {
        self.overlays.retain(|o| !o.has_class(OVERLAY_CLASS));
        if self.focused.as_deref() == Some(CLOSE_CLASS) {
            self.focused = None;
        }
    }

    fn attach_dismiss_listeners(&mut self) {
        self.listeners_attached = true;
    }

    fn detach_dismiss_listeners(&mut self) {
        self.listeners_attached = false;
    }

    fn body_overflow(&self) -> Option<String> {
        self.body_overflow.clone()
    }

    fn set_body_overflow(&mut self, value: Option<&str>) {
        self.overflow_writes += 1;
        self.body_overflow = value.map(str::to_string);
    }

    fn focus_close_control(&mut self) {
        let has_close = self
            .overlays
            .iter()
            .any(|o| o.find_by_class(CLOSE_CLASS).is_some());
        if has_close {
            self.focused = Some(CLOSE_CLASS.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_requires_container() {
        let mut page = Page::new();
        assert!(!page.append_to_list(vec![Element::new("p")]));
        assert!(page.list().is_none());

        let mut page = Page::with_list_container("project-list");
        assert!(page.append_to_list(vec![Element::new("p"), Element::new("p")]));
        let list = page.list().unwrap();
        assert_eq!(list.get_attr("id"), Some("project-list"));
        assert_eq!(list.children().len(), 2);
    }

    #[test]
    fn test_unmount_drops_focus() {
        let mut page = Page::new();
        page.mount_overlay(
            Element::new("div")
                .class(OVERLAY_CLASS)
                .child(Element::new("button").class(CLOSE_CLASS)),
        );
        page.focus_close_control();
        assert_eq!(page.focused(), Some(CLOSE_CLASS));

        page.unmount_overlay();
        assert_eq!(page.overlay_count(), 0);
        assert_eq!(page.focused(), None);
    }
}
