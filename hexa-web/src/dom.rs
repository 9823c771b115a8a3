//! Thin wrappers over the browser APIs the tracker touches.
//!
//! Native builds (server-side rendering in tests) have no browser, so every
//! helper degrades to a logged no-op there.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

/// Retrieve the global `window` object, if there is one.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| err.message().into())
            })
            .unwrap_or_else(|| format!("{value:?}"))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        format!("{value:?}")
    }
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if there is no browser window or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Ask the user a yes/no question. Anything but an explicit "OK" is a no.
#[must_use]
pub fn confirm(message: &str) -> bool {
    let Some(win) = window() else {
        log::warn!("confirm without a window: {message}");
        return false;
    };
    win.confirm_with_message(message).unwrap_or_else(|err| {
        log::error!("confirm failed: {}", js_error_message(&err));
        false
    })
}

/// Show a blocking message to the user.
pub fn alert(message: &str) {
    let Some(win) = window() else {
        log::warn!("alert without a window: {message}");
        return;
    };
    if let Err(err) = win.alert_with_message(message) {
        log::error!("alert failed: {}", js_error_message(&err));
    }
}

/// Put `text` on the clipboard. The write completes asynchronously.
pub fn copy_to_clipboard(text: &str) {
    if let Some(win) = window() {
        let _ = win.navigator().clipboard().write_text(text);
    }
}

/// Offer `contents` to the user as a JSON file download.
///
/// # Errors
/// Returns an error if the blob, object URL or anchor element cannot be created.
pub fn download_json(file_name: &str, contents: &str) -> Result<(), JsValue> {
    #[cfg(target_arch = "wasm32")]
    {
        let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let document = win
            .document()
            .ok_or_else(|| JsValue::from_str("document unavailable"))?;

        let parts = js_sys::Array::of1(&JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/json");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let anchor = document
            .create_element("a")?
            .dyn_into::<web_sys::HtmlAnchorElement>()?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        web_sys::Url::revoke_object_url(&url)?;
        Ok(())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("download of {file_name} skipped ({} bytes)", contents.len());
        Ok(())
    }
}
