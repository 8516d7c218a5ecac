//! Image intake: turn a picked file into a locally renderable data URL.
//!
//! The selected file is decoded entirely in the browser via `FileReader`;
//! nothing is uploaded anywhere. Failures are deliberately silent — if the
//! reader cannot be created or the read errors, no callback fires and the
//! page stays exactly as it was.

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Read `file` as a data URL and invoke `on_loaded` with the result.
///
/// `on_loaded` is only called on a successful read that yields a string
/// result; every failure path is a no-op.
#[cfg(feature = "csr")]
pub fn read_image_file(file: &web_sys::File, on_loaded: impl FnOnce(String) + 'static) {
    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };

    let reader_for_load = reader.clone();
    let onload = wasm_bindgen::closure::Closure::once_into_js(move |_event: web_sys::ProgressEvent| {
        let Ok(result) = reader_for_load.result() else {
            return;
        };
        let Some(data_url) = result.as_string() else {
            return;
        };
        on_loaded(data_url);
    });
    reader.set_onload(Some(onload.unchecked_ref()));

    if reader.read_as_data_url(file).is_err() {
        reader.set_onload(None);
    }
}
