// Browser fetch as a project source

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use crate::error::{LoadError, Result};
use crate::gallery::loader::{FetchedBody, ProjectSource};
use crate::web::bridge::describe;

pub struct FetchSource {
    window: Window,
}

impl FetchSource {
    pub fn new(window: Window) -> Self {
        FetchSource { window }
    }
}

impl ProjectSource for FetchSource {
    async fn fetch(&self, url: &str) -> Result<FetchedBody> {
        let value = JsFuture::from(self.window.fetch_with_str(url))
            .await
            .map_err(|e| LoadError::network(url, describe(&e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|e| LoadError::network(url, describe(&e)))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| LoadError::network(url, describe(&e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| LoadError::network(url, describe(&e)))?
            .as_string()
            .unwrap_or_default();

        Ok(FetchedBody { status, body })
    }
}
