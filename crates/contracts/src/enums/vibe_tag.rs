use serde::{Deserialize, Serialize};

/// Mood chips offered by the virtual mixologist.
///
/// Declaration order is the canonical order used when the selected chips are
/// joined into a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VibeTag {
    Fruity,
    Icy,
    Dark,
    Strong,
    #[serde(rename = "Surprise Me")]
    SurpriseMe,
}

impl VibeTag {
    pub fn label(&self) -> &'static str {
        match self {
            VibeTag::Fruity => "Fruity",
            VibeTag::Icy => "Icy",
            VibeTag::Dark => "Dark",
            VibeTag::Strong => "Strong",
            VibeTag::SurpriseMe => "Surprise Me",
        }
    }

    pub fn all() -> Vec<VibeTag> {
        vec![
            VibeTag::Fruity,
            VibeTag::Icy,
            VibeTag::Dark,
            VibeTag::Strong,
            VibeTag::SurpriseMe,
        ]
    }
}
