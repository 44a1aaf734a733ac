//! Vibe generator - Model Layer
//!
//! Host key picker handshake and the image `generateContent` call.

use crate::shared::api_utils::generate_content;
use crate::shared::config::app_config;
use contracts::domain::image_generation::{
    build_image_prompt, classify_key_selection_error, ImageGenerationError,
};
use contracts::enums::ImageSize;
use contracts::shared::gemini::GenerateContentRequest;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Calls `target[name]()` and awaits the result when it is a Promise
async fn call_method(target: &JsValue, name: &str) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    let value = method.call0(target)?;
    match value.dyn_into::<Promise>() {
        Ok(promise) => JsFuture::from(promise).await,
        Err(value) => Ok(value),
    }
}

fn js_error_message(err: &JsValue) -> String {
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_default()
}

/// Some hosts (`window.aistudio`) let the visitor pick their own paid key.
/// When the picker exists and no key is selected yet, open it first.
///
/// Only an expired-session error from the picker stops the generation.
pub async fn ensure_api_key_selected() -> Result<(), ImageGenerationError> {
    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let aistudio = Reflect::get(&window, &JsValue::from_str("aistudio")).unwrap_or(JsValue::UNDEFINED);
    if aistudio.is_undefined() || aistudio.is_null() {
        return Ok(());
    }
    let has_picker = Reflect::get(&aistudio, &JsValue::from_str("hasSelectedApiKey"))
        .map(|f| f.is_function())
        .unwrap_or(false);
    if !has_picker {
        return Ok(());
    }

    let has_key = call_method(&aistudio, "hasSelectedApiKey").await.map_err(|e| {
        log::error!("hasSelectedApiKey failed: {}", js_error_message(&e));
        ImageGenerationError::Unexpected
    })?;
    if has_key.is_truthy() {
        return Ok(());
    }

    match call_method(&aistudio, "openSelectKey").await {
        Ok(_) => Ok(()),
        Err(e) => {
            let message = js_error_message(&e);
            match classify_key_selection_error(&message) {
                Some(err) => Err(err),
                None => {
                    log::warn!("openSelectKey failed, continuing: {}", message);
                    Ok(())
                }
            }
        }
    }
}

/// Generate one 16:9 picture; returns it as a `data:` URL
pub async fn generate_image(prompt: &str, size: ImageSize) -> Result<String, ImageGenerationError> {
    let config = &app_config().image;
    let request =
        GenerateContentRequest::image(build_image_prompt(prompt), size, &config.aspect_ratio);

    let response = generate_content(&config.model, &request).await.map_err(|e| {
        log::error!("image generation failed: {}", e);
        ImageGenerationError::Request(e.to_string())
    })?;

    response
        .first_image_data_url()
        .ok_or(ImageGenerationError::NoImage)
}
