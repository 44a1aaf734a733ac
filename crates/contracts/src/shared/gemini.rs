//! Wire types for the Gemini `models/{model}:generateContent` REST call.
//!
//! Only the fields the site reads or writes are modelled.

use crate::enums::ImageSize;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeminiError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx answer; `message` is the API's own error text when present
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
}

// ============================================================================
// Request
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: Option<String>,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageGenerationConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGenerationConfig {
    pub image_size: ImageSize,
    pub aspect_ratio: String,
}

impl GenerateContentRequest {
    /// Single user turn with a text prompt
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.into()),
                    inline_data: None,
                }],
            }],
            generation_config: None,
        }
    }

    /// Text prompt asking for an image of the given size
    pub fn image(prompt: impl Into<String>, size: ImageSize, aspect_ratio: &str) -> Self {
        let mut request = Self::text(prompt);
        request.generation_config = Some(GenerationConfig {
            response_modalities: Some(vec!["TEXT".to_string(), "IMAGE".to_string()]),
            image_config: Some(ImageGenerationConfig {
                image_size: size,
                aspect_ratio: aspect_ratio.to_string(),
            }),
        });
        request
    }
}

// ============================================================================
// Response
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    fn first_parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or(&[])
    }

    /// Concatenated text of the first candidate, `None` when there is none
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .first_parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// First inline image of the first candidate as a `data:` URL
    pub fn first_image_data_url(&self) -> Option<String> {
        self.first_parts()
            .iter()
            .find_map(|p| p.inline_data.as_ref())
            .map(|inline| {
                let mime = inline.mime_type.as_deref().unwrap_or("image/png");
                format!("data:{};base64,{}", mime, inline.data)
            })
    }
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: String,
}

impl GeminiError {
    /// Builds an [`GeminiError::Http`] from a failed response body
    pub fn from_http(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|env| env.error.message)
            .unwrap_or_default();
        let message = if message.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            message
        };
        GeminiError::Http { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_request_shape() {
        let value = serde_json::to_value(GenerateContentRequest::text("hi")).unwrap();
        assert_eq!(
            value,
            json!({ "contents": [{ "role": "user", "parts": [{ "text": "hi" }] }] })
        );
    }

    #[test]
    fn test_image_request_carries_size_and_ratio() {
        let value =
            serde_json::to_value(GenerateContentRequest::image("neon", ImageSize::TwoK, "16:9"))
                .unwrap();
        assert_eq!(value["generationConfig"]["imageConfig"]["imageSize"], "2K");
        assert_eq!(value["generationConfig"]["imageConfig"]["aspectRatio"], "16:9");
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Midnight | " }, { "text": "Mint" }] } }]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("Midnight | Mint"));
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), None);
        assert_eq!(response.first_image_data_url(), None);
    }

    #[test]
    fn test_first_inline_image_wins() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "here you go" },
                { "inlineData": { "mimeType": "image/png", "data": "AAA" } },
                { "inlineData": { "mimeType": "image/jpeg", "data": "BBB" } }
            ] } }]
        }))
        .unwrap();
        assert_eq!(
            response.first_image_data_url().as_deref(),
            Some("data:image/png;base64,AAA")
        );
    }

    #[test]
    fn test_http_error_uses_api_message() {
        let err = GeminiError::from_http(403, r#"{"error":{"code":403,"message":"API key not valid"}}"#);
        assert_eq!(err.to_string(), "API key not valid");

        let err = GeminiError::from_http(502, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "HTTP 502");
    }
}
