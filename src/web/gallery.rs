// Project gallery wired to the browser document

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent, Window};

use crate::config::SiteConfig;
use crate::dom::Element;
use crate::gallery::card::{is_activation_key, render_card};
use crate::gallery::controller::{GalleryController, Surface};
use crate::gallery::loader::{load_projects, render_list};
use crate::gallery::modal::{CLOSE_CLASS, OVERLAY_CLASS};
use crate::project::Project;
use crate::web::bridge::{describe, Bridge};
use crate::web::fetch::FetchSource;

type Listener = Closure<dyn FnMut(Event)>;

// ============================================================================
// Browser Surface
// ============================================================================

/// Listeners that dismiss the modal. Created once per gallery and attached /
/// detached around each modal lifetime, so a handler is never dropped while it
/// runs.
struct DismissListeners {
    overlay_click: Listener,
    keydown: Listener,
    close_click: Listener,
}

impl DismissListeners {
    fn new(app: Weak<GalleryApp>) -> Self {
        let on_overlay = app.clone();
        let overlay_click = Listener::new(move |event: Event| {
            // only clicks on the overlay itself, not bubbled from the dialog
            let on_background = match (event.target(), event.current_target()) {
                (Some(target), Some(current)) => JsValue::from(target) == JsValue::from(current),
                _ => false,
            };
            if let Some(app) = on_overlay.upgrade() {
                app.with_controller(|c, s| c.overlay_clicked(on_background, s));
            }
        });

        let on_key = app.clone();
        let keydown = Listener::new(move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|e| e.key()) else {
                return;
            };
            if let Some(app) = on_key.upgrade() {
                app.with_controller(|c, s| c.key_pressed(&key, s));
            }
        });

        let close_click = Listener::new(move |_event: Event| {
            if let Some(app) = app.upgrade() {
                app.with_controller(|c, s| c.close_clicked(s));
            }
        });

        DismissListeners {
            overlay_click,
            keydown,
            close_click,
        }
    }
}

pub struct BrowserSurface {
    bridge: Rc<Bridge>,
    overlay: Option<web_sys::Element>,
    close_button: Option<HtmlElement>,
    listeners: DismissListeners,
}

impl BrowserSurface {
    fn document(&self) -> &Document {
        self.bridge.document()
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document().body()
    }
}

impl Surface for BrowserSurface {
    fn overlay_present(&self) -> bool {
        let selector = format!(".{}", OVERLAY_CLASS);
        matches!(self.document().query_selector(&selector), Ok(Some(_)))
    }

    fn mount_overlay(&mut self, overlay: Element) {
        let Some(body) = self.body() else {
            warn!("Document has no body, modal not shown");
            return;
        };

        let node = match self.bridge.build(&overlay) {
            Ok(node) => node,
            Err(e) => {
                warn!("Failed to build modal: {}", describe(&e));
                return;
            }
        };
        if let Err(e) = body.append_child(&node) {
            warn!("Failed to mount modal: {}", describe(&e));
            return;
        }

        let selector = format!(".{}", CLOSE_CLASS);
        self.close_button = node
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|b| b.dyn_into::<HtmlElement>().ok());
        self.overlay = Some(node);
    }

    fn unmount_overlay(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            overlay.remove();
        }
        self.close_button = None;
    }

    fn attach_dismiss_listeners(&mut self) {
        let listeners = &self.listeners;
        let mut result: Result<(), JsValue> = Ok(());
        if let Some(overlay) = &self.overlay {
            result = result.and(overlay.add_event_listener_with_callback(
                "click",
                listeners.overlay_click.as_ref().unchecked_ref(),
            ));
        }
        result = result.and(self.document().add_event_listener_with_callback(
            "keydown",
            listeners.keydown.as_ref().unchecked_ref(),
        ));
        if let Some(button) = &self.close_button {
            result = result.and(button.add_event_listener_with_callback(
                "click",
                listeners.close_click.as_ref().unchecked_ref(),
            ));
        }
        if let Err(e) = result {
            warn!("Failed to attach modal listeners: {}", describe(&e));
        }
    }

    fn detach_dismiss_listeners(&mut self) {
        let listeners = &self.listeners;
        let mut result: Result<(), JsValue> = Ok(());
        if let Some(overlay) = &self.overlay {
            result = result.and(overlay.remove_event_listener_with_callback(
                "click",
                listeners.overlay_click.as_ref().unchecked_ref(),
            ));
        }
        result = result.and(self.document().remove_event_listener_with_callback(
            "keydown",
            listeners.keydown.as_ref().unchecked_ref(),
        ));
        if let Some(button) = &self.close_button {
            result = result.and(button.remove_event_listener_with_callback(
                "click",
                listeners.close_click.as_ref().unchecked_ref(),
            ));
        }
        if let Err(e) = result {
            warn!("Failed to detach modal listeners: {}", describe(&e));
        }
    }

    fn body_overflow(&self) -> Option<String> {
        self.body()
            .and_then(|body| body.style().get_property_value("overflow").ok())
            .filter(|value| !value.is_empty())
    }

    fn set_body_overflow(&mut self, value: Option<&str>) {
        let Some(body) = self.body() else {
            return;
        };
        let style = body.style();
        let result = match value {
            Some(value) => style.set_property("overflow", value),
            None => style.remove_property("overflow").map(|_| ()),
        };
        if let Err(e) = result {
            warn!("Failed to set body overflow: {}", describe(&e));
        }
    }

    fn focus_close_control(&mut self) {
        if let Some(button) = &self.close_button {
            let _ = button.focus();
        }
    }
}

// ============================================================================
// Gallery
// ============================================================================

pub struct GalleryApp {
    controller: RefCell<GalleryController>,
    surface: RefCell<BrowserSurface>,
}

impl GalleryApp {
    fn new(bridge: Rc<Bridge>, link_label: &str) -> Rc<Self> {
        Rc::new_cyclic(|app| GalleryApp {
            controller: RefCell::new(GalleryController::new(link_label)),
            surface: RefCell::new(BrowserSurface {
                bridge,
                overlay: None,
                close_button: None,
                listeners: DismissListeners::new(app.clone()),
            }),
        })
    }

    /// Run one controller transition. Events arriving while another transition
    /// is in progress are dropped.
    fn with_controller<F>(&self, transition: F)
    where
        F: FnOnce(&mut GalleryController, &mut BrowserSurface) -> bool,
    {
        let (Ok(mut controller), Ok(mut surface)) =
            (self.controller.try_borrow_mut(), self.surface.try_borrow_mut())
        else {
            debug!("Gallery busy, event dropped");
            return;
        };
        transition(&mut *controller, &mut *surface);
    }

    fn open(&self, project: &Project) {
        self.with_controller(|c, s| c.open(project, s));
    }
}

/// Build a live card and make it open the modal on click, Enter or Space
fn mount_card(
    app: &Rc<GalleryApp>,
    bridge: &Bridge,
    list: &web_sys::Element,
    project: Project,
) -> Result<(), JsValue> {
    let card = bridge.build(&render_card(&project))?;
    let project = Rc::new(project);

    let (on_click_app, on_click_project) = (app.clone(), project.clone());
    let on_click = Listener::new(move |_event: Event| {
        on_click_app.open(&on_click_project);
    });

    let on_key_app = app.clone();
    let on_key = Listener::new(move |event: Event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|e| e.key()) else {
            return;
        };
        if is_activation_key(&key) {
            event.prevent_default();
            on_key_app.open(&project);
        }
    });

    card.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    card.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    // cards live as long as the page
    on_click.forget();
    on_key.forget();

    list.append_child(&card)?;
    Ok(())
}

/// Fetch the projects once and fill the list container.
///
/// Does nothing when the page has no list container.
pub fn start(window: &Window, document: &Document, config: &SiteConfig) {
    let Some(list) = document.get_element_by_id(&config.list_container_id) else {
        debug!("No #{} on this page, gallery skipped", config.list_container_id);
        return;
    };

    let bridge = Rc::new(Bridge::new(document.clone()));
    let app = GalleryApp::new(bridge.clone(), &config.link_label);
    let source = FetchSource::new(window.clone());
    let config = config.clone();

    spawn_local(async move {
        let outcome = load_projects(&source, &config.projects_url).await;

        let result = match outcome {
            Ok(projects) => projects
                .into_iter()
                .try_for_each(|project| mount_card(&app, &bridge, &list, project)),
            Err(e) => render_list(Err(e), &config)
                .iter()
                .try_for_each(|node| {
                    let el = bridge.build(node)?;
                    list.append_child(&el).map(|_| ())
                }),
        };

        if let Err(e) = result {
            warn!("Failed to render project list: {}", describe(&e));
        }
    });
}
