//! Portfolio Site
//!
//! Page behavior for a personal portfolio: a project gallery loaded from a JSON
//! data file, with a detail modal per project, and single-page section
//! navigation.
//!
//! - `project`: project records read leniently from the data file
//! - `dom`: owned element trees (built here, serialized or materialized later)
//! - `gallery/`: cards, detail modal, modal lifecycle and list loading
//! - `navigator`: radio-style section visibility
//! - `page`: headless document used by tests and the preview server
//! - `web/`: wasm entry point binding all of the above to the browser (`web`)
//! - `server`: local preview server (`server`)

pub mod config;
pub mod dom;
pub mod error;
pub mod gallery;
pub mod navigator;
pub mod page;
pub mod project;

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use config::SiteConfig;
pub use error::LoadError;
pub use gallery::{GalleryController, ProjectSource, Surface};
pub use navigator::SectionNavigator;
pub use page::Page;
pub use project::Project;
