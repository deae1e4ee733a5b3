//! Project List Retrieval
//!
//! One retrieval per page load: fetch, check status, parse, render. Every
//! failure along that chain goes through the same path and ends as a single
//! error node in the list container plus an error log entry.

use tracing::{error, info};

use crate::config::SiteConfig;
use crate::dom::Element;
use crate::error::{LoadError, Result};
use crate::gallery::card::render_card;
use crate::page::Page;
use crate::project::{parse_projects, Project};

pub const LOAD_ERROR_CLASS: &str = "load-error";

/// Status and body of a finished request
#[derive(Debug, Clone)]
pub struct FetchedBody {
    pub status: u16,
    pub body: String,
}

impl FetchedBody {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Where the projects data file comes from (browser fetch, local file, stub)
#[allow(async_fn_in_trait)]
pub trait ProjectSource {
    /// Issue the request. Only a request that produced no response at all is
    /// an error here; status handling belongs to [`load_projects`].
    async fn fetch(&self, url: &str) -> Result<FetchedBody>;
}

/// Retrieve and parse the project list
pub async fn load_projects<S: ProjectSource>(source: &S, url: &str) -> Result<Vec<Project>> {
    info!("Fetching projects from {}", url);

    let response = source.fetch(url).await?;
    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status,
        });
    }

    let projects = parse_projects(&response.body)?;
    info!("Loaded {} projects", projects.len());
    Ok(projects)
}

/// Node shown in place of the cards when loading fails
pub fn error_node(message: &str) -> Element {
    Element::new("p")
        .class(LOAD_ERROR_CLASS)
        .style("color", "#f88")
        .text(message)
}

/// Turn a load outcome into the nodes to append to the list container:
/// one card per project in order, or exactly one error node.
pub fn render_list(outcome: Result<Vec<Project>>, config: &SiteConfig) -> Vec<Element> {
    match outcome {
        Ok(projects) => projects.iter().map(render_card).collect(),
        Err(e) => {
            error!("{}", e);
            vec![error_node(&config.load_error_message)]
        }
    }
}

/// Fill the list container of a headless page.
///
/// Without a container nothing is fetched and `false` is returned.
pub async fn fill_page<S: ProjectSource>(page: &mut Page, source: &S, config: &SiteConfig) -> bool {
    if page.list().is_none() {
        return false;
    }
    let outcome = load_projects(source, &config.projects_url).await;
    page.append_to_list(render_list(outcome, config))
}
