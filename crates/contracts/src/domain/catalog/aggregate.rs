use crate::enums::CategoryTag;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate catalog item id '{0}'")]
    DuplicateId(String),
    #[error("item '{id}' has intensity {value}, expected 1..=5")]
    IntensityOutOfRange { id: String, value: u8 },
    #[error("review '{id}' has rating {value}, expected 1..=5")]
    RatingOutOfRange { id: String, value: u8 },
}

// ============================================================================
// Menu
// ============================================================================

/// One entry of the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub category: CategoryTag,
    pub description: String,
    #[serde(default)]
    pub price: Option<String>,
    pub image: String,
    /// Intensity on a 1..=5 scale, display only
    #[serde(default)]
    pub heaviness: Option<u8>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub ingredients: Option<Vec<String>>,
}

impl CatalogItem {
    /// Drinks never show the intensity meter, even if a value is present
    pub fn intensity(&self) -> Option<u8> {
        match self.category {
            CategoryTag::Drinks => None,
            _ => self.heaviness,
        }
    }

    /// Filled state of the five meter segments
    pub fn intensity_segments(&self) -> Option<[bool; 5]> {
        self.intensity().map(|level| {
            let mut segments = [false; 5];
            for (i, segment) in segments.iter_mut().enumerate() {
                *segment = (i as u8) < level;
            }
            segments
        })
    }

    pub fn ingredients(&self) -> &[String] {
        self.ingredients.as_deref().unwrap_or(&[])
    }

    /// First `limit` feature labels, as shown on the menu card
    pub fn headline_features(&self, limit: usize) -> &[String] {
        &self.features[..self.features.len().min(limit)]
    }
}

// ============================================================================
// Testimonials
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
    pub rating: u8,
    pub content: String,
}

impl Testimonial {
    /// Letter shown inside the avatar bubble
    pub fn initial(&self) -> String {
        self.author
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

// ============================================================================
// Business details
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub instagram: String,
    pub facebook: String,
    pub tiktok: String,
    pub maps: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub day: String,
    pub hours: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub links: SocialLinks,
    /// Monday first
    pub hours: Vec<OpeningHours>,
}

impl BusinessInfo {
    /// `tel:` link with whitespace stripped from the number
    pub fn tel_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{}", digits)
    }

    pub fn hours_for(&self, weekday: Weekday) -> Option<&OpeningHours> {
        let name = weekday_name(weekday);
        self.hours.iter().find(|h| h.day.eq_ignore_ascii_case(name))
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ============================================================================
// Catalog root
// ============================================================================

/// Everything the home page renders, loaded once from the embedded dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub business: BusinessInfo,
    /// Hero phrases for the cycling text display
    #[serde(default)]
    pub taglines: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Testimonial>,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            if let Some(value) = item.heaviness {
                if !(1..=5).contains(&value) {
                    return Err(CatalogError::IntensityOutOfRange {
                        id: item.id.clone(),
                        value,
                    });
                }
            }
        }
        for review in &self.reviews {
            if !(1..=5).contains(&review.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: review.id.clone(),
                    value: review.rating,
                });
            }
        }
        Ok(())
    }

    pub fn item(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: CategoryTag, heaviness: Option<u8>) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: id.to_string(),
            category,
            description: String::new(),
            price: None,
            image: String::new(),
            heaviness,
            features: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            ingredients: None,
        }
    }

    #[test]
    fn test_drinks_hide_intensity() {
        assert_eq!(item("d", CategoryTag::Drinks, Some(3)).intensity(), None);
        assert_eq!(item("c", CategoryTag::Classics, Some(3)).intensity(), Some(3));
        assert_eq!(item("c", CategoryTag::Classics, None).intensity_segments(), None);
    }

    #[test]
    fn test_intensity_segments() {
        let segments = item("c", CategoryTag::MostWanted, Some(4))
            .intensity_segments()
            .unwrap();
        assert_eq!(segments, [true, true, true, true, false]);
    }

    #[test]
    fn test_headline_features_and_missing_ingredients() {
        let it = item("c", CategoryTag::Classics, None);
        assert_eq!(it.headline_features(3).len(), 3);
        assert_eq!(it.headline_features(10).len(), 4);
        assert!(it.ingredients().is_empty());
    }

    #[test]
    fn test_tel_href_strips_spaces() {
        let info = BusinessInfo {
            phone: "0493 028 109".into(),
            ..Default::default()
        };
        assert_eq!(info.tel_href(), "tel:0493028109");
    }

    #[test]
    fn test_validate_rejects_duplicates_and_ranges() {
        let mut catalog = Catalog::default();
        catalog.items = vec![
            item("x", CategoryTag::Classics, Some(2)),
            item("x", CategoryTag::Drinks, None),
        ];
        assert!(matches!(catalog.validate(), Err(CatalogError::DuplicateId(id)) if id == "x"));

        catalog.items = vec![item("y", CategoryTag::Classics, Some(6))];
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::IntensityOutOfRange { value: 6, .. })
        ));
    }

    #[test]
    fn test_testimonial_initial() {
        let review = Testimonial {
            id: "1".into(),
            author: "deepak".into(),
            role: None,
            rating: 5,
            content: String::new(),
        };
        assert_eq!(review.initial(), "D");
    }
}
