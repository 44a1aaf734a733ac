use super::aggregate::Catalog;
use once_cell::sync::Lazy;

const CATALOG_JSON: &str = include_str!("../../../data/catalog.json");

static CATALOG: Lazy<Catalog> = Lazy::new(|| match Catalog::from_json(CATALOG_JSON) {
    Ok(catalog) => {
        log::debug!(
            "catalog loaded: {} items, {} reviews",
            catalog.items.len(),
            catalog.reviews.len()
        );
        catalog
    }
    Err(e) => {
        // build.rs validates the same file, so this only fires on a schema drift
        log::error!("failed to load embedded catalog: {}", e);
        Catalog::default()
    }
});

/// The embedded venue dataset, parsed on first access
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::CategoryTag;
    use chrono::Weekday;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::from_json(CATALOG_JSON).expect("embedded catalog must parse");
        assert_eq!(catalog.business.name, "MYST Lounge");
        assert_eq!(catalog.reviews.len(), 5);
        assert_eq!(catalog.taglines.len(), 10);
        assert_eq!(catalog.business.hours.len(), 7);
    }

    #[test]
    fn test_every_category_has_items() {
        for tag in CategoryTag::all() {
            assert!(
                catalog().items.iter().any(|item| item.category == tag),
                "no items for {:?}",
                tag
            );
        }
    }

    #[test]
    fn test_hours_lookup() {
        let hours = catalog().business.hours_for(Weekday::Fri).unwrap();
        assert_eq!(hours.hours, "7pm – 2am");
        assert_eq!(catalog().business.hours[0].day, "Monday");
    }

    #[test]
    fn test_item_lookup() {
        let item = catalog().item("classic-4").unwrap();
        assert_eq!(item.name, "Double Apple");
        assert_eq!(item.intensity(), Some(5));
    }
}
