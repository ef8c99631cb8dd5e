mod dom;
mod renderer;

use wasm_bindgen::prelude::*;

pub use renderer::{load_and_render, RenderError, RenderOptions};

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    Ok(())
}

/// Entry point called by the page shell once the module is loaded.
///
/// Fetches the catalogue from `config_url`, pads its tile lists to full rows
/// of `columns`, renders the template held by `template_id` and mounts the
/// markup into `mount_id`. Runs once per page load. Any failure rejects the
/// returned promise and leaves the mount element untouched.
#[wasm_bindgen]
pub async fn boot(
    config_url: String,
    template_id: String,
    mount_id: String,
    columns: usize,
) -> Result<(), JsValue> {
    let options = RenderOptions {
        config_url,
        template_id,
        mount_id,
        columns,
    };

    load_and_render(&options).await.map_err(|e| {
        let message = format!("portico: {e}");
        web_sys::console::error_1(&JsValue::from_str(&message));
        js_sys::Error::new(&message).into()
    })
}
