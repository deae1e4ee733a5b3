//! Project Gallery
//!
//! Fetches the projects data file once, renders one card per project and
//! opens a single detail modal when a card is activated.
//!
//! - `card`: summary card markup and activation keys
//! - `modal`: detail modal markup and the dismiss key
//! - `controller`: modal open/close lifecycle over a [`Surface`]
//! - `loader`: retrieval, parsing and list rendering

pub mod card;
pub mod controller;
pub mod loader;
pub mod modal;

pub use card::{is_activation_key, render_card};
pub use controller::{CloseTrigger, GalleryController, ModalState, Surface};
pub use loader::{fill_page, load_projects, render_list, FetchedBody, ProjectSource};
pub use modal::render_modal;
