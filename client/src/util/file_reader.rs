//! Read a selected photo into an embedded `data:` URL.
//!
//! The image payload only exists once the browser's `FileReader` finishes;
//! the form keeps the previous preview until then.

#[cfg(test)]
#[path = "file_reader_test.rs"]
mod file_reader_test;

/// Whether a reader result is an embeddable data URL.
pub fn is_data_url(value: &str) -> bool {
    value.starts_with("data:") && value.contains(',')
}

/// Start reading `file`; `on_loaded` receives the data URL on success.
#[cfg(feature = "hydrate")]
pub fn read_as_data_url(file: &web_sys::File, on_loaded: impl FnOnce(String) + 'static) {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let Ok(reader) = web_sys::FileReader::new() else {
        log::warn!("FileReader unavailable; photo ignored");
        return;
    };

    let reader_done = reader.clone();
    let onload: Closure<dyn FnMut(web_sys::ProgressEvent)> = Closure::once(move |_ev: web_sys::ProgressEvent| {
        let Some(data_url) = reader_done.result().ok().and_then(|v| v.as_string()) else {
            log::warn!("photo read produced no text result");
            return;
        };
        if is_data_url(&data_url) {
            on_loaded(data_url);
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    if let Err(e) = reader.read_as_data_url(file) {
        log::warn!("photo read failed to start: {e:?}");
    }
}
