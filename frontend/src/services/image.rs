//! Browser file and clipboard helpers.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

use crate::types::{AppResult, MintError};

/// Decode a selected file into a `data:` URL.
pub async fn read_as_data_url(file: &File) -> AppResult<String> {
    let reader = FileReader::new().map_err(|e| MintError::FileRead(js_message(&e)))?;

    let done = js_sys::Promise::new(&mut |resolve, reject| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });

    reader
        .read_as_data_url(file)
        .map_err(|e| MintError::FileRead(js_message(&e)))?;

    JsFuture::from(done)
        .await
        .map_err(|_| MintError::FileRead(format!("could not read {}", file.name())))?;

    reader
        .result()
        .map_err(|e| MintError::FileRead(js_message(&e)))?
        .as_string()
        .ok_or_else(|| MintError::FileRead("reader result is not a string".to_string()))
}

/// `navigator.clipboard.writeText(text)`.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no global window")?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &"clipboard".into())
        .map_err(|e| js_message(&e))?;

    let write_text = js_sys::Reflect::get(&clipboard, &"writeText".into())
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
        .ok_or("Clipboard API unavailable")?;

    let promise: js_sys::Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| js_message(&e))?
        .dyn_into()
        .map_err(|_| "writeText did not return a promise".to_string())?;

    JsFuture::from(promise).await.map_err(|e| js_message(&e))?;
    Ok(())
}

fn js_message(e: &JsValue) -> String {
    js_sys::Reflect::get(e, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| e.as_string())
        .unwrap_or_else(|| format!("{:?}", e))
}
