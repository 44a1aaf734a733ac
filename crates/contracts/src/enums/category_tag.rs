use serde::{Deserialize, Serialize};

/// Menu categories. The set is closed: an unknown tag in the dataset fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryTag {
    #[default]
    #[serde(rename = "Classics")]
    Classics,
    #[serde(rename = "House Specials")]
    HouseSpecials,
    #[serde(rename = "Most Wanted")]
    MostWanted,
    #[serde(rename = "Drinks")]
    Drinks,
}

impl CategoryTag {
    /// Short code, used as a stable DOM key
    pub fn code(&self) -> &'static str {
        match self {
            CategoryTag::Classics => "classics",
            CategoryTag::HouseSpecials => "house-specials",
            CategoryTag::MostWanted => "most-wanted",
            CategoryTag::Drinks => "drinks",
        }
    }

    /// Human readable name, same spelling as in the dataset
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryTag::Classics => "Classics",
            CategoryTag::HouseSpecials => "House Specials",
            CategoryTag::MostWanted => "Most Wanted",
            CategoryTag::Drinks => "Drinks",
        }
    }

    /// Flat price shown on the category header. Drinks are priced per item.
    pub fn price_label(&self) -> Option<&'static str> {
        match self {
            CategoryTag::Classics | CategoryTag::HouseSpecials => Some("$50"),
            CategoryTag::MostWanted => Some("$60"),
            CategoryTag::Drinks => None,
        }
    }

    /// All categories in menu order
    pub fn all() -> Vec<CategoryTag> {
        vec![
            CategoryTag::Classics,
            CategoryTag::HouseSpecials,
            CategoryTag::MostWanted,
            CategoryTag::Drinks,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|tag| tag.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&CategoryTag::HouseSpecials).unwrap();
        assert_eq!(json, "\"House Specials\"");
        let tag: CategoryTag = serde_json::from_str("\"Most Wanted\"").unwrap();
        assert_eq!(tag, CategoryTag::MostWanted);
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        assert!(serde_json::from_str::<CategoryTag>("\"Cocktails\"").is_err());
    }

    #[test]
    fn test_code_round_trip() {
        for tag in CategoryTag::all() {
            assert_eq!(CategoryTag::from_code(tag.code()), Some(tag));
        }
        assert_eq!(CategoryTag::from_code("all"), None);
    }

    #[test]
    fn test_default_is_classics() {
        assert_eq!(CategoryTag::default(), CategoryTag::Classics);
    }
}
