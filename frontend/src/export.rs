use chrono::Utc;
use dashboard_core::export::{export_filename, to_csv, MIME_TYPE};
use dashboard_core::VideoRecord;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Saves the given records as a CSV file through a temporary download link.
pub fn download_csv(records: &[VideoRecord]) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&to_csv(records)));
    let options = BlobPropertyBag::new();
    options.set_type(MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(&export_filename(Utc::now()));
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;
    Url::revoke_object_url(&url)?;

    log::info!("Exported {} videos to CSV", records.len());
    Ok(())
}
