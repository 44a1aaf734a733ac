//! Build script validating the embedded venue dataset.
//!
//! `data/catalog.json` is compiled into the crate with `include_str!`, so any
//! mistake in it would only surface in the browser. This script parses it with
//! its own schema types and fails the build on inconsistent content.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const CATALOG_PATH: &str = "data/catalog.json";
const CATEGORIES: [&str; 4] = ["Classics", "House Specials", "Most Wanted", "Drinks"];

fn main() {
    println!("cargo:rerun-if-changed={}", CATALOG_PATH);

    if let Err(e) = validate(Path::new(CATALOG_PATH)) {
        panic!("Invalid {}: {:#}", CATALOG_PATH, e);
    }
}

// ============================================================================
// JSON Schema Types (owned Strings for serde deserialization)
// ============================================================================

#[derive(Debug, Deserialize)]
struct CatalogJson {
    business: BusinessJson,
    taglines: Vec<String>,
    reviews: Vec<ReviewJson>,
    items: Vec<ItemJson>,
}

#[derive(Debug, Deserialize)]
struct BusinessJson {
    phone: String,
    hours: Vec<HoursJson>,
}

#[derive(Debug, Deserialize)]
struct HoursJson {
    day: String,
}

#[derive(Debug, Deserialize)]
struct ReviewJson {
    id: String,
    rating: u8,
}

#[derive(Debug, Deserialize)]
struct ItemJson {
    id: String,
    category: String,
    heaviness: Option<u8>,
}

fn validate(path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let catalog: CatalogJson = serde_json::from_str(&raw).context("parsing catalog JSON")?;

    if catalog.taglines.is_empty() {
        bail!("at least one hero tagline is required");
    }
    if catalog.business.phone.trim().is_empty() {
        bail!("business phone is empty");
    }
    if catalog.business.hours.len() != 7 {
        bail!(
            "expected opening hours for 7 days, found {}",
            catalog.business.hours.len()
        );
    }
    if catalog.business.hours[0].day != "Monday" {
        bail!("opening hours must start on Monday");
    }

    let mut ids = HashSet::new();
    for item in &catalog.items {
        if !ids.insert(item.id.as_str()) {
            bail!("duplicate item id '{}'", item.id);
        }
        if !CATEGORIES.contains(&item.category.as_str()) {
            bail!("item '{}' has unknown category '{}'", item.id, item.category);
        }
        if let Some(h) = item.heaviness {
            if !(1..=5).contains(&h) {
                bail!("item '{}' has heaviness {}, expected 1..=5", item.id, h);
            }
        }
    }

    for category in CATEGORIES {
        if !catalog.items.iter().any(|item| item.category == category) {
            println!("cargo:warning=category '{}' has no items", category);
        }
    }

    for review in &catalog.reviews {
        if !(1..=5).contains(&review.rating) {
            bail!("review '{}' has rating {}, expected 1..=5", review.id, review.rating);
        }
    }

    Ok(())
}
