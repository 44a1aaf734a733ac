use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_NAME: &str = "Mystery Mix";
pub const DEFAULT_INGREDIENTS: &str = "Chef's Special Selection";
pub const DEFAULT_DESCRIPTION: &str = "A perfectly balanced mix for your mood.";
pub const DEFAULT_PAIRING: &str = "Ice Water";

/// Substituted when the collaborator call fails
pub const CONNECTION_ERROR_PAYLOAD: &str =
    "Connection Error | Please ask staff | Unable to reach the lab. | Water";
/// Returned without a call when no API key is configured
pub const MISSING_KEY_PAYLOAD: &str = "Signature Mix | Secret House Blend, Mint Hint, Tropical Base | Our most popular blend perfect for any occasion. | Moroccan Mint Tea";
/// Returned when the model answers with no text
pub const EMPTY_RESPONSE_PAYLOAD: &str =
    "MYST Mystery | Chef's Choice | A surprise mix for the adventurous. | Ice Lemon Tea";

/// Recipe card fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub ingredients: String,
    pub description: String,
    pub pairing: String,
}

impl Recommendation {
    /// Splits on `|`. Missing or blank fields take their defaults, so this
    /// never fails.
    pub fn parse(raw: &str) -> Self {
        let parts: Vec<&str> = raw.split('|').map(str::trim).collect();
        let field = |i: usize, default: &str| -> String {
            parts
                .get(i)
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            name: field(0, DEFAULT_NAME),
            ingredients: field(1, DEFAULT_INGREDIENTS),
            description: field(2, DEFAULT_DESCRIPTION),
            pairing: field(3, DEFAULT_PAIRING),
        }
    }
}

/// Nine upper-case characters shown in the recipe card footer
pub fn new_recipe_id() -> String {
    Uuid::new_v4().simple().to_string()[..9].to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_response() {
        let parsed = Recommendation::parse(
            "Midnight Storm | 60% Blueberry, 40% Passion Fruit | A cooling mix. | Mojito",
        );
        assert_eq!(
            parsed,
            Recommendation {
                name: "Midnight Storm".into(),
                ingredients: "60% Blueberry, 40% Passion Fruit".into(),
                description: "A cooling mix.".into(),
                pairing: "Mojito".into(),
            }
        );
    }

    #[test]
    fn test_parse_name_only() {
        let parsed = Recommendation::parse("OnlyName");
        assert_eq!(parsed.name, "OnlyName");
        assert_eq!(parsed.ingredients, DEFAULT_INGREDIENTS);
        assert_eq!(parsed.description, DEFAULT_DESCRIPTION);
        assert_eq!(parsed.pairing, DEFAULT_PAIRING);
    }

    #[test]
    fn test_parse_blank_fields_fall_back() {
        let parsed = Recommendation::parse("  |  | Smooth. |");
        assert_eq!(parsed.name, DEFAULT_NAME);
        assert_eq!(parsed.ingredients, DEFAULT_INGREDIENTS);
        assert_eq!(parsed.description, "Smooth.");
        assert_eq!(parsed.pairing, DEFAULT_PAIRING);
    }

    #[test]
    fn test_parse_extra_fields_are_ignored() {
        let parsed = Recommendation::parse("a | b | c | d | e");
        assert_eq!(parsed.pairing, "d");
    }

    #[test]
    fn test_connection_error_payload() {
        let parsed = Recommendation::parse(CONNECTION_ERROR_PAYLOAD);
        assert_eq!(parsed.name, "Connection Error");
        assert_eq!(parsed.pairing, "Water");
    }

    #[test]
    fn test_recipe_id_format() {
        let id = new_recipe_id();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }
}
