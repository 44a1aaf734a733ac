//! Virtual mixologist - Model Layer
//!
//! Single Gemini call that always yields a pipe-delimited recipe string.

use crate::shared::api_utils::{gemini_api_key, generate_content};
use crate::shared::config::app_config;
use contracts::domain::recommendation::build_prompt;
use contracts::domain::recommendation::response::{EMPTY_RESPONSE_PAYLOAD, MISSING_KEY_PAYLOAD};
use contracts::shared::gemini::{GeminiError, GenerateContentRequest};

/// Ask the model for a recipe.
///
/// No key configured and an empty model answer both resolve to fixed house
/// recipes; only transport/HTTP/decode failures are returned as errors.
pub async fn get_recommendation(query: &str) -> Result<String, GeminiError> {
    if gemini_api_key().is_none() {
        log::warn!("GEMINI_API_KEY not set, serving the house recipe");
        return Ok(MISSING_KEY_PAYLOAD.to_string());
    }

    let request = GenerateContentRequest::text(build_prompt(query));
    let response = generate_content(&app_config().concierge.model, &request).await?;

    Ok(response
        .text()
        .unwrap_or_else(|| EMPTY_RESPONSE_PAYLOAD.to_string()))
}
