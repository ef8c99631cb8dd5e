//! Embedded page assets for single-binary distribution
//!
//! Uses rust-embed to compile the page shell (HTML, stylesheet, WASM bundle)
//! into the binary. In debug mode, files are loaded from disk; in release
//! mode they are embedded.

use rust_embed::RustEmbed;

/// Embedded page assets from the assets/ directory
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "index.html"]
#[include = "style.css"]
#[include = "pkg/*.js"]
#[include = "pkg/*.wasm"]
pub struct PageAssets;

/// Get a file from embedded assets with its MIME type
pub fn get_asset(path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Handle root path
    let path = if path.is_empty() || path == "/" {
        "index.html"
    } else {
        path.trim_start_matches('/')
    };

    PageAssets::get(path).map(|file| {
        let mime = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream");
        (file.data.into_owned(), mime)
    })
}
