// Summary cards for the project list

use crate::dom::Element;
use crate::project::Project;

pub const CARD_CLASS: &str = "project-card";

/// Lazily loaded project image that disappears if it fails to load
pub fn project_image(class: &str, project: &Project) -> Element {
    Element::new("img")
        .class(class)
        .attr("src", project.image_src())
        .attr("alt", project.image_alt())
        .attr("loading", "lazy")
        .hide_on_error()
}

/// Build the focusable, button-like card for one project
pub fn render_card(project: &Project) -> Element {
    let meta = Element::new("div")
        .class("meta")
        .child(Element::new("h3").text(project.title()))
        .child(Element::new("p").text(project.short_text()));

    Element::new("article")
        .class(CARD_CLASS)
        .attr("tabindex", "0")
        .attr("role", "button")
        .attr("aria-pressed", "false")
        .child(project_image("card-hero", project))
        .child(meta)
}

/// Keys that activate a focused card (default action is suppressed)
pub fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}
