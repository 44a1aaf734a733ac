use super::flow::ImageGenerationError;

/// Marker text of the key picker error that means the session went away
const SESSION_EXPIRED_MARKER: &str = "Requested entity was not found";

/// Wraps the user prompt in the lounge styling
pub fn build_image_prompt(prompt: &str) -> String {
    format!(
        "High quality, cinematic, photorealistic image for a shisha lounge. {}. Dark, neon, luxurious atmosphere.",
        prompt.trim()
    )
}

/// Maps a key-picker failure. Only the expired-session case aborts the
/// generation; every other picker error is ignored and the call goes ahead.
pub fn classify_key_selection_error(message: &str) -> Option<ImageGenerationError> {
    if message.contains(SESSION_EXPIRED_MARKER) {
        Some(ImageGenerationError::SessionExpired)
    } else {
        None
    }
}

/// File name offered by the download link
pub fn download_file_name(timestamp_millis: i64) -> String {
    format!("myst-vibe-{}.png", timestamp_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_wrapped() {
        assert_eq!(
            build_image_prompt("  purple smoke "),
            "High quality, cinematic, photorealistic image for a shisha lounge. purple smoke. Dark, neon, luxurious atmosphere."
        );
    }

    #[test]
    fn test_key_selection_errors() {
        let expired = classify_key_selection_error("Error: Requested entity was not found.");
        assert_eq!(expired, Some(ImageGenerationError::SessionExpired));
        assert_eq!(
            expired.unwrap().user_message(),
            "Session expired. Please try connecting again."
        );
        assert_eq!(classify_key_selection_error("User closed the dialog"), None);
    }

    #[test]
    fn test_download_name() {
        assert_eq!(download_file_name(1700000000000), "myst-vibe-1700000000000.png");
    }
}
