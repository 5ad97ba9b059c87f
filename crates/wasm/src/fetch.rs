use folio_core::content::ContentError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// GET `url` and return the body bytes. Non-2xx statuses are errors.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, ContentError> {
    let window = web_sys::window().ok_or_else(|| ContentError::Fetch("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| ContentError::Fetch(format!("{e:?}")))?;
    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| ContentError::Fetch("not a Response".into()))?;
    if !resp.ok() {
        return Err(ContentError::Http(resp.status()));
    }
    let buf = JsFuture::from(
        resp.array_buffer()
            .map_err(|e| ContentError::Fetch(format!("{e:?}")))?,
    )
    .await
    .map_err(|e| ContentError::Fetch(format!("{e:?}")))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}
