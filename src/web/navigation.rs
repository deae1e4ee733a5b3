// Section navigator wired to the browser document

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event};

use crate::config::SiteConfig;
use crate::navigator::{Section, SectionNavigator};
use crate::web::bridge::{describe, select_all};

/// Mirror navigator state onto the section elements' classes
fn apply(elements: &[web_sys::Element], sections: &[Section]) {
    for (element, section) in elements.iter().zip(sections) {
        let classes = element.class_list();
        let result = classes
            .remove_1(section.visibility.other_class())
            .and(classes.add_1(section.visibility.class()));
        if let Err(e) = result {
            warn!("Failed to update section '{}': {}", section.id, describe(&e));
        }
    }
}

/// Show the default section and make every navigation link switch sections
pub fn start(document: &Document, config: &SiteConfig) {
    let elements = select_all(document, &config.sections);
    let links = select_all(document, &config.navigation_links);

    let mut navigator = SectionNavigator::new(elements.iter().map(|e| e.id()));
    apply(&elements, navigator.init(&config.default_section));

    let navigator = Rc::new(RefCell::new(navigator));
    let elements = Rc::new(elements);

    for link in links {
        let (navigator, elements, href_source) = (navigator.clone(), elements.clone(), link.clone());
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let href = href_source.get_attribute("href");
            let mut navigator = navigator.borrow_mut();
            apply(&elements, navigator.navigate(href.as_deref()));
        });

        if let Err(e) = link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            warn!("Failed to wire navigation link: {}", describe(&e));
        }
        // links live as long as the page
        on_click.forget();
    }
}
