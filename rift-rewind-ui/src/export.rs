//! Share & Export
//!
//! PNG capture is delegated to the `html-to-image` library loaded by
//! `index.html`; clipboard and window access go through `web-sys`.

use rift_rewind::share::{export_filename, EXPORT_BACKGROUND, EXPORT_PIXEL_RATIO, EXPORT_QUALITY};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, HtmlElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = htmlToImage, js_name = toPng, catch)]
    async fn to_png(node: &HtmlElement, options: JsValue) -> Result<JsValue, JsValue>;
}

fn js_error(context: &str, err: JsValue) -> String {
    match err.as_string() {
        Some(msg) => format!("{}: {}", context, msg),
        None => context.to_string(),
    }
}

/// Render `node` to PNG and download it as `{summoner}-recap.png`
pub async fn download_png(node: &HtmlElement, summoner_name: &str) -> Result<(), String> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"backgroundColor".into(), &EXPORT_BACKGROUND.into())
        .map_err(|e| js_error("Export failed", e))?;
    js_sys::Reflect::set(&options, &"pixelRatio".into(), &EXPORT_PIXEL_RATIO.into())
        .map_err(|e| js_error("Export failed", e))?;
    js_sys::Reflect::set(&options, &"quality".into(), &EXPORT_QUALITY.into())
        .map_err(|e| js_error("Export failed", e))?;

    let data_url = to_png(node, options.into())
        .await
        .map_err(|e| js_error("Export failed", e))?
        .as_string()
        .ok_or_else(|| "Export failed".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "No document".to_string())?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_error("Export failed", e))?
        .dyn_into()
        .map_err(|_| "Export failed".to_string())?;
    link.set_href(&data_url);
    link.set_download(&export_filename(summoner_name));
    link.click();

    Ok(())
}

/// Open a URL in a new tab
pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
    window
        .open_with_url_and_target(url, "_blank")
        .map_err(|e| js_error("Could not open share window", e))?;
    Ok(())
}

/// Write `text` to the system clipboard
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
    let navigator = window.navigator();

    let clipboard = js_sys::Reflect::get(&navigator, &"clipboard".into())
        .ok()
        .filter(|c| !c.is_undefined())
        .ok_or_else(|| "Clipboard unavailable".to_string())?;
    let write_text: js_sys::Function = js_sys::Reflect::get(&clipboard, &"writeText".into())
        .map_err(|e| js_error("Clipboard unavailable", e))?
        .dyn_into()
        .map_err(|_| "Clipboard unavailable".to_string())?;
    let promise: js_sys::Promise = write_text
        .call1(&clipboard, &text.into())
        .map_err(|e| js_error("Copy failed", e))?
        .dyn_into()
        .map_err(|_| "Copy failed".to_string())?;

    JsFuture::from(promise)
        .await
        .map_err(|e| js_error("Copy failed", e))?;
    Ok(())
}
