use crate::enums::VibeTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// User input of the mixologist form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub text: String,
    pub vibes: BTreeSet<VibeTag>,
}

impl RecommendationRequest {
    pub fn new(text: impl Into<String>, vibes: impl IntoIterator<Item = VibeTag>) -> Self {
        Self {
            text: text.into(),
            vibes: vibes.into_iter().collect(),
        }
    }

    /// Flips a chip; returns whether it is selected afterwards
    pub fn toggle_vibe(&mut self, vibe: VibeTag) -> bool {
        if !self.vibes.remove(&vibe) {
            self.vibes.insert(vibe);
            true
        } else {
            false
        }
    }

    pub fn is_selected(&self, vibe: VibeTag) -> bool {
        self.vibes.contains(&vibe)
    }

    /// Selected chips joined with ", " followed by the free text, trimmed
    pub fn combined_query(&self) -> String {
        let vibes: Vec<&str> = self.vibes.iter().map(|v| v.label()).collect();
        format!("{} {}", vibes.join(", "), self.text).trim().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.combined_query().is_empty()
    }
}

/// Mixologist instructions wrapped around the user's preferences
pub fn build_prompt(query: &str) -> String {
    format!(
        r#"You are the Master Mixologist for MYST Lounge, a premium luxury shisha lounge.

User Preferences: "{query}"

Your Task: Create a custom shisha mix recipe based on the preferences.

CRITICAL CONSTRAINTS:
1. Do NOT use brand names (e.g., Al Fakher, Adalya, Starbuzz) in the ingredients list. Only list the specific flavor names (e.g., "Blackberry", "Mint", "Passion Fruit", NOT "Al Fakher Blackberry").
2. You must return the response in this EXACT format separated by pipes (|):
Mix Name | Ingredients (percentage/parts) | Short Description (1 sentence) | Recommended Drink Pairing

Example Output:
Midnight Storm | 60% Blueberry, 40% Passion Fruit | A cooling blueberry storm with a tropical twist. | Mojito Refresher

Inventory context: We have 200+ flavors. Vibe is dark, neon, luxury.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_is_empty() {
        assert!(RecommendationRequest::default().is_empty());
        assert!(RecommendationRequest::new("   ", []).is_empty());
    }

    #[test]
    fn test_single_vibe_without_text() {
        let request = RecommendationRequest::new("", [VibeTag::Fruity]);
        assert_eq!(request.combined_query(), "Fruity");
        assert!(!request.is_empty());
    }

    #[test]
    fn test_vibes_and_text_are_combined() {
        let request = RecommendationRequest::new(
            "something sweet",
            [VibeTag::SurpriseMe, VibeTag::Icy],
        );
        assert_eq!(request.combined_query(), "Icy, Surprise Me something sweet");
    }

    #[test]
    fn test_selection_order_does_not_matter() {
        let a = RecommendationRequest::new("x", [VibeTag::Dark, VibeTag::Fruity]);
        let b = RecommendationRequest::new("x", [VibeTag::Fruity, VibeTag::Dark]);
        assert_eq!(a.combined_query(), b.combined_query());
    }

    #[test]
    fn test_toggle_vibe() {
        let mut request = RecommendationRequest::default();
        assert!(request.toggle_vibe(VibeTag::Strong));
        assert!(request.is_selected(VibeTag::Strong));
        assert!(!request.toggle_vibe(VibeTag::Strong));
        assert!(request.vibes.is_empty());
    }

    #[test]
    fn test_prompt_embeds_query() {
        let prompt = build_prompt("Icy mint");
        assert!(prompt.contains("User Preferences: \"Icy mint\""));
        assert!(prompt.contains("Mix Name | Ingredients"));
    }
}
