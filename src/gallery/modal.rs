// Detail modal markup

use crate::dom::Element;
use crate::gallery::card::project_image;
use crate::project::Project;

pub const OVERLAY_CLASS: &str = "project-modal-overlay";
pub const CLOSE_CLASS: &str = "close-btn";

/// Build the overlay with the expanded project details.
///
/// Hero image first, then header (title + close control), description and the
/// meta row with the outbound link and classification.
pub fn render_modal(project: &Project, link_label: &str) -> Element {
    let header = Element::new("header")
        .child(Element::new("h2").text(project.title()))
        .child(
            Element::new("button")
                .class(CLOSE_CLASS)
                .attr("type", "button")
                .text("Close"),
        );

    let content = Element::new("div")
        .class("content")
        .child(Element::new("p").text(project.long_text()));

    // New browsing context without opener access or referrer
    let link = Element::new("a")
        .class("project-link")
        .attr("href", project.link_href())
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .text(link_label);

    let meta_row = Element::new("div")
        .class("meta-row")
        .child(link)
        .child(
            Element::new("div")
                .class("classification")
                .text(&project.classification_label()),
        );

    let body = Element::new("div")
        .class("modal-body")
        .child(header)
        .child(content)
        .child(meta_row);

    let modal = Element::new("div")
        .class("project-modal")
        .attr("role", "dialog")
        .attr("aria-modal", "true")
        .attr("aria-label", project.dialog_label())
        .child(project_image("modal-hero", project))
        .child(body);

    Element::new("div")
        .class(OVERLAY_CLASS)
        .attr("tabindex", "-1")
        .child(modal)
}

pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_project() -> Project {
        Project::from_value(&json!({
            "name": "Compiler",
            "image": "//img/compiler.png",
            "long-description": "A tiny compiler for a tiny language.",
            "link": "https://github.com/example/compiler",
            "classification": "School"
        }))
    }

    #[test]
    fn test_modal_layout() {
        let overlay = render_modal(&full_project(), "View on GitHub");

        assert!(overlay.has_class(OVERLAY_CLASS));
        assert_eq!(overlay.get_attr("tabindex"), Some("-1"));

        let dialog = overlay.find_by_class("project-modal").unwrap();
        assert_eq!(dialog.get_attr("role"), Some("dialog"));
        assert_eq!(dialog.get_attr("aria-modal"), Some("true"));
        assert_eq!(dialog.get_attr("aria-label"), Some("Compiler"));

        // hero sits before the body
        assert!(dialog.children()[0].has_class("modal-hero"));
        assert!(dialog.children()[1].has_class("modal-body"));
        assert_eq!(dialog.children()[0].get_attr("src"), Some("img/compiler.png"));

        assert_eq!(overlay.find_by_tag("h2").unwrap().text_content(), "Compiler");
        assert_eq!(overlay.find_by_class(CLOSE_CLASS).unwrap().text_content(), "Close");
        assert_eq!(
            overlay.find_by_class("content").unwrap().children()[0].text_content(),
            "A tiny compiler for a tiny language."
        );
        assert_eq!(
            overlay.find_by_class("classification").unwrap().text_content(),
            "School project"
        );
    }

    #[test]
    fn test_link_opens_isolated_context() {
        let overlay = render_modal(&full_project(), "View on GitHub");
        let link = overlay.find_by_class("project-link").unwrap();

        assert_eq!(link.get_attr("href"), Some("https://github.com/example/compiler"));
        assert_eq!(link.get_attr("target"), Some("_blank"));
        assert_eq!(link.get_attr("rel"), Some("noopener noreferrer"));
        assert_eq!(link.text_content(), "View on GitHub");
    }

    #[test]
    fn test_sparse_project_degrades() {
        let overlay = render_modal(&Project::default(), "Bekijk op GitHub");

        assert_eq!(overlay.find_by_tag("h2").unwrap().text_content(), "Untitled");
        assert_eq!(
            overlay.find_by_class("project-modal").unwrap().get_attr("aria-label"),
            Some("Project details")
        );
        assert_eq!(overlay.find_by_class("project-link").unwrap().get_attr("href"), Some("#"));
        assert_eq!(overlay.find_by_class("project-link").unwrap().text_content(), "Bekijk op GitHub");
        assert_eq!(overlay.find_by_class("classification").unwrap().text_content(), "");
    }

    #[test]
    fn test_dismiss_key() {
        assert!(is_dismiss_key("Escape"));
        assert!(!is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
    }
}
