//! The render pipeline
//!
//! One sequential pass per page load: fetch the catalogue, pad its tile
//! lists for the grid, compile the embedded template and mount the markup.
//! The mount element is written exactly once, at the very end, so every
//! failure path leaves the page as it was.

use portico_catalogue::{render_page, CatalogueDocument, DEFAULT_GRID_COLUMNS};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Request, Response};

use crate::dom;

/// Where the renderer finds its inputs and output.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Location of the catalogue document, relative to the page origin.
    pub config_url: String,
    /// Element id of the template holder.
    pub template_id: String,
    /// Element id of the mount point.
    pub mount_id: String,
    /// Grid width the tile lists are padded to.
    pub columns: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            config_url: "config.json".to_string(),
            template_id: "root-template".to_string(),
            mount_id: "root".to_string(),
            columns: DEFAULT_GRID_COLUMNS,
        }
    }
}

/// Failures of the render pipeline, in pipeline order
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to fetch {url}: {detail}")]
    Fetch { url: String, detail: String },
    #[error("Fetching {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("Malformed catalogue document: {0}")]
    Document(String),
    #[error("Template holder element #{0} not found")]
    MissingTemplate(String),
    #[error("Mount element #{0} not found")]
    MissingMount(String),
    #[error("Template error: {0}")]
    Render(String),
}

/// Run the full pipeline once.
pub async fn load_and_render(options: &RenderOptions) -> Result<(), RenderError> {
    let text = fetch_text(&options.config_url).await?;

    let mut document =
        CatalogueDocument::from_json(&text).map_err(|e| RenderError::Document(e.to_string()))?;
    document.normalize(options.columns);

    let template = dom::template_source(&options.template_id)
        .ok_or_else(|| RenderError::MissingTemplate(options.template_id.clone()))?;
    let mount = dom::element_by_id(&options.mount_id)
        .ok_or_else(|| RenderError::MissingMount(options.mount_id.clone()))?;

    let markup =
        render_page(&template, &document).map_err(|e| RenderError::Render(e.to_string()))?;

    mount.set_inner_html(&markup);
    Ok(())
}

/// Fetch a resource from the page origin and return its body text.
///
/// A non-2xx response counts as a retrieval failure; the body is never read.
async fn fetch_text(url: &str) -> Result<String, RenderError> {
    let window = window().ok_or_else(|| fetch_failed(url, "no window"))?;

    let request = Request::new_with_str(url).map_err(|e| fetch_err(url, &e))?;
    let resp_val = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| fetch_err(url, &e))?;
    let resp: Response = resp_val.dyn_into().map_err(|e| fetch_err(url, &e))?;

    if !resp.ok() {
        return Err(RenderError::Status {
            url: url.to_string(),
            status: resp.status(),
        });
    }

    let text_val = JsFuture::from(resp.text().map_err(|e| fetch_err(url, &e))?)
        .await
        .map_err(|e| fetch_err(url, &e))?;
    Ok(text_val.as_string().unwrap_or_default())
}

fn fetch_err(url: &str, err: &JsValue) -> RenderError {
    let detail = err
        .as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "network error".to_string());
    fetch_failed(url, &detail)
}

fn fetch_failed(url: &str, detail: &str) -> RenderError {
    RenderError::Fetch {
        url: url.to_string(),
        detail: detail.to_string(),
    }
}
