// Element trees → live DOM nodes

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, HtmlElement};

use crate::dom::Element;

/// Builds live nodes from [`Element`] trees for one document.
///
/// Images flagged with `hide_on_error` share a single `error` listener that
/// hides whichever image fired it.
pub struct Bridge {
    document: Document,
    hide_on_error: Closure<dyn FnMut(Event)>,
}

impl Bridge {
    pub fn new(document: Document) -> Self {
        let hide_on_error = Closure::<dyn FnMut(Event)>::new(|event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<HtmlElement>().ok());
            if let Some(img) = target {
                let _ = img.style().set_property("display", "none");
            }
        });

        Bridge {
            document,
            hide_on_error,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn build(&self, node: &Element) -> Result<web_sys::Element, JsValue> {
        let el = self.document.create_element(node.tag())?;

        if !node.classes().is_empty() {
            el.set_attribute("class", &node.classes().join(" "))?;
        }
        for (name, value) in node.attributes() {
            el.set_attribute(name, value)?;
        }
        if let Some(style) = node.style_attr() {
            el.set_attribute("style", &style)?;
        }
        if node.hides_on_error() {
            el.add_event_listener_with_callback("error", self.hide_on_error.as_ref().unchecked_ref())?;
        }
        if !node.text_content().is_empty() {
            el.set_text_content(Some(node.text_content()));
        }
        for child in node.children() {
            let child_el = self.build(child)?;
            el.append_child(&child_el)?;
        }

        Ok(el)
    }
}

/// All elements matching `selector`, in document order
pub fn select_all(document: &Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        tracing::warn!("Invalid selector '{}'", selector);
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
