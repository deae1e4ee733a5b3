//! Detail Modal Lifecycle
//!
//! Two states (`Idle`, `Open`) and four transitions (open, close via overlay,
//! close via Escape, close via button). The controller owns the only mutable
//! state the gallery has: whether a modal is open, and the body overflow value
//! to restore when it closes. The document itself is reached through
//! [`Surface`], so the lifecycle runs the same against the browser and the
//! headless [`crate::page::Page`].

use tracing::debug;

use crate::dom::Element;
use crate::gallery::modal::{is_dismiss_key, render_modal};
use crate::project::Project;

/// Document operations the modal lifecycle needs
pub trait Surface {
    /// Whether a modal overlay is already present in the document
    fn overlay_present(&self) -> bool;
    /// Append the overlay to the document body
    fn mount_overlay(&mut self, overlay: Element);
    /// Remove the overlay from the document, if still attached
    fn unmount_overlay(&mut self);
    /// Start listening for overlay clicks, Escape and the close control
    fn attach_dismiss_listeners(&mut self);
    fn detach_dismiss_listeners(&mut self);
    /// Current inline `overflow` of the body, `None` when unset
    fn body_overflow(&self) -> Option<String>;
    /// Set the inline `overflow` of the body, clearing it on `None`
    fn set_body_overflow(&mut self, value: Option<&str>);
    fn focus_close_control(&mut self);
}

/// What dismissed the modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    Overlay,
    Escape,
    Button,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Idle,
    Open {
        title: String,
        saved_overflow: Option<String>,
    },
}

#[derive(Debug, Default)]
pub struct GalleryController {
    link_label: String,
    state: ModalState,
}

impl GalleryController {
    pub fn new(link_label: &str) -> Self {
        GalleryController {
            link_label: link_label.to_string(),
            state: ModalState::Idle,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Open the detail modal for `project`.
    ///
    /// Returns `false` (and touches nothing) when a modal is already open.
    pub fn open<S: Surface>(&mut self, project: &Project, surface: &mut S) -> bool {
        if self.is_open() || surface.overlay_present() {
            debug!("Modal already open, ignoring {}", project.title());
            return false;
        }

        surface.mount_overlay(render_modal(project, &self.link_label));

        let saved_overflow = surface.body_overflow();
        surface.set_body_overflow(Some("hidden"));

        surface.attach_dismiss_listeners();
        surface.focus_close_control();

        debug!("Opened modal for {}", project.title());
        self.state = ModalState::Open {
            title: project.title().to_string(),
            saved_overflow,
        };
        true
    }

    /// Close the open modal. One-shot: returns `false` when already idle.
    pub fn close<S: Surface>(&mut self, trigger: CloseTrigger, surface: &mut S) -> bool {
        let ModalState::Open { title, saved_overflow } = std::mem::take(&mut self.state) else {
            return false;
        };

        surface.detach_dismiss_listeners();
        surface.unmount_overlay();
        surface.set_body_overflow(saved_overflow.as_deref().filter(|v| !v.is_empty()));

        debug!("Closed modal for {} via {:?}", title, trigger);
        true
    }

    /// Click on the overlay. Only a click landing on the overlay background
    /// (not inside the dialog) closes.
    pub fn overlay_clicked<S: Surface>(&mut self, on_background: bool, surface: &mut S) -> bool {
        on_background && self.close(CloseTrigger::Overlay, surface)
    }

    /// Document keydown while a modal may be open
    pub fn key_pressed<S: Surface>(&mut self, key: &str, surface: &mut S) -> bool {
        is_dismiss_key(key) && self.close(CloseTrigger::Escape, surface)
    }

    pub fn close_clicked<S: Surface>(&mut self, surface: &mut S) -> bool {
        self.close(CloseTrigger::Button, surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;

    fn project(name: &str) -> Project {
        Project {
            name: Some(name.to_string()),
            ..Project::default()
        }
    }

    #[test]
    fn test_open_suspends_scroll_and_focuses_close() {
        let mut page = Page::new();
        page.set_body_overflow(Some("auto"));
        let mut controller = GalleryController::new("View on GitHub");

        assert!(controller.open(&project("A"), &mut page));

        assert_eq!(page.overlay_count(), 1);
        assert_eq!(page.body_overflow().as_deref(), Some("hidden"));
        assert!(page.listeners_attached());
        assert_eq!(page.focused(), Some("close-btn"));
        assert_eq!(
            controller.state(),
            &ModalState::Open {
                title: "A".to_string(),
                saved_overflow: Some("auto".to_string()),
            }
        );
    }

    #[test]
    fn test_second_open_is_noop() {
        let mut page = Page::new();
        let mut controller = GalleryController::new("View on GitHub");

        assert!(controller.open(&project("A"), &mut page));
        assert!(!controller.open(&project("B"), &mut page));

        assert_eq!(page.overlay_count(), 1);
        let overlay = page.overlay().unwrap();
        assert_eq!(overlay.find_by_tag("h2").unwrap().text_content(), "A");
    }

    #[test]
    fn test_existing_overlay_in_document_blocks_open() {
        let mut page = Page::new();
        page.mount_overlay(Element::new("div").class("project-modal-overlay"));
        let mut controller = GalleryController::new("View on GitHub");

        assert!(!controller.open(&project("A"), &mut page));
        assert_eq!(page.overlay_count(), 1);
        assert_eq!(page.body_overflow(), None);
    }

    #[test]
    fn test_every_trigger_restores_overflow_once() {
        let triggers = [CloseTrigger::Overlay, CloseTrigger::Escape, CloseTrigger::Button];

        for trigger in triggers {
            let mut page = Page::with_body_overflow("scroll");
            let mut controller = GalleryController::new("View on GitHub");
            controller.open(&project("A"), &mut page);

            assert!(controller.close(trigger, &mut page), "{:?} should close", trigger);
            assert_eq!(page.overlay_count(), 0);
            assert!(!page.listeners_attached());
            assert_eq!(page.body_overflow().as_deref(), Some("scroll"));
            assert_eq!(page.overflow_writes(), 2);

            // later triggers find nothing to clean up
            page.set_body_overflow(Some("clip"));
            assert!(!controller.close(CloseTrigger::Overlay, &mut page));
            assert!(!controller.close(CloseTrigger::Escape, &mut page));
            assert!(!controller.close(CloseTrigger::Button, &mut page));
            assert_eq!(page.body_overflow().as_deref(), Some("clip"));
            assert_eq!(page.overflow_writes(), 3);
        }
    }

    #[test]
    fn test_close_clears_overflow_when_none_recorded() {
        let mut page = Page::new();
        let mut controller = GalleryController::new("View on GitHub");

        controller.open(&project("A"), &mut page);
        assert!(controller.close_clicked(&mut page));
        assert_eq!(page.body_overflow(), None);
    }

    #[test]
    fn test_click_inside_dialog_does_not_close() {
        let mut page = Page::new();
        let mut controller = GalleryController::new("View on GitHub");
        controller.open(&project("A"), &mut page);

        assert!(!controller.overlay_clicked(false, &mut page));
        assert!(controller.is_open());
        assert!(controller.overlay_clicked(true, &mut page));
        assert!(!controller.is_open());
    }

    #[test]
    fn test_only_escape_closes_from_keyboard() {
        let mut page = Page::new();
        let mut controller = GalleryController::new("View on GitHub");
        controller.open(&project("A"), &mut page);

        assert!(!controller.key_pressed("Enter", &mut page));
        assert!(!controller.key_pressed(" ", &mut page));
        assert!(controller.is_open());
        assert!(controller.key_pressed("Escape", &mut page));
        assert!(!controller.is_open());
    }

    #[test]
    fn test_reopen_after_close() {
        let mut page = Page::new();
        let mut controller = GalleryController::new("View on GitHub");

        controller.open(&project("A"), &mut page);
        controller.close_clicked(&mut page);
        assert!(controller.open(&project("B"), &mut page));
        assert_eq!(page.overlay().unwrap().find_by_tag("h2").unwrap().text_content(), "B");
    }
}
