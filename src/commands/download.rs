//! Download Commands
//!
//! Browser-side file saving through a transient `<a download>` link.

use ledger_core::ExportPayload;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, HtmlElement, Url};

/// Offer `payload` to the user as a file download
pub fn save_file(payload: &ExportPayload) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let document = window.document().ok_or("No document available")?;
    let body = document.body().ok_or("Document has no body")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&payload.content));
    let options = BlobPropertyBag::new();
    options.set_type(&payload.mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let result = click_download_link(&document, &body, &url, &payload.file_name);

    // Release the blob whether or not the click went through
    if let Err(e) = Url::revoke_object_url(&url) {
        log::warn!("[DOWNLOAD] Failed to revoke {}: {}", url, js_error(e));
    }
    result
}

fn click_download_link(
    document: &Document,
    body: &HtmlElement,
    url: &str,
    file_name: &str,
) -> Result<(), String> {
    let link = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Created element is not an anchor".to_string())?;

    link.set_href(url);
    link.set_download(file_name);
    link.style().set_property("visibility", "hidden").map_err(js_error)?;

    body.append_child(&link).map_err(js_error)?;
    link.click();
    body.remove_child(&link).map_err(js_error)?;

    log::debug!("[DOWNLOAD] Saved {}", file_name);
    Ok(())
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
