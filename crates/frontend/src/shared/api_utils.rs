//! Gemini REST access shared by the lab widgets.
//!
//! The API key is taken from the `GEMINI_API_KEY` environment variable at
//! build time; there is no server in between.

use crate::shared::config::app_config;
use contracts::shared::gemini::{GeminiError, GenerateContentRequest, GenerateContentResponse};
use gloo_net::http::Request;

/// Build-time API key, `None` when unset or blank
pub fn gemini_api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY").filter(|key| !key.trim().is_empty())
}

/// Build a `generateContent` URL
///
/// # Example
/// ```ignore
/// let url = generate_content_url("https://host/v1beta/", "gemini-2.5-flash", "k");
/// assert_eq!(url, "https://host/v1beta/models/gemini-2.5-flash:generateContent?key=k");
/// ```
pub fn generate_content_url(api_base: &str, model: &str, api_key: &str) -> String {
    format!(
        "{}/models/{}:generateContent?key={}",
        api_base.trim_end_matches('/'),
        urlencoding::encode(model),
        urlencoding::encode(api_key)
    )
}

/// POST a `generateContent` request to the configured endpoint
pub async fn generate_content(
    model: &str,
    request: &GenerateContentRequest,
) -> Result<GenerateContentResponse, GeminiError> {
    let api_key = gemini_api_key().ok_or(GeminiError::MissingApiKey)?;
    let url = generate_content_url(&app_config().gemini.api_base, model, api_key);

    let response = Request::post(&url)
        .header("Content-Type", "application/json")
        .json(request)
        .map_err(|e| GeminiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| GeminiError::Transport(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(GeminiError::from_http(response.status(), &body));
    }

    response
        .json::<GenerateContentResponse>()
        .await
        .map_err(|e| GeminiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_content_url() {
        assert_eq!(
            generate_content_url("https://host/v1beta/", "gemini-2.5-flash", "k"),
            "https://host/v1beta/models/gemini-2.5-flash:generateContent?key=k"
        );
    }

    #[test]
    fn test_key_is_encoded() {
        let url = generate_content_url("https://host", "m", "a b&c");
        assert!(url.ends_with("?key=a%20b%26c"));
    }
}
