use super::aggregate::CatalogItem;
use crate::enums::CategoryTag;

/// Items of one category, in catalog order. An empty result is valid.
pub fn filter_by_category(items: &[CatalogItem], tag: CategoryTag) -> Vec<&CatalogItem> {
    items.iter().filter(|item| item.category == tag).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::catalog;

    #[test]
    fn test_filter_keeps_only_tag_in_order() {
        let items = &catalog().items;
        for tag in CategoryTag::all() {
            let filtered = filter_by_category(items, tag);
            assert!(filtered.iter().all(|item| item.category == tag));

            let expected: Vec<&str> = items
                .iter()
                .filter(|item| item.category == tag)
                .map(|item| item.id.as_str())
                .collect();
            let actual: Vec<&str> = filtered.iter().map(|item| item.id.as_str()).collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_classics_start_with_grapefruit() {
        let classics = filter_by_category(&catalog().items, CategoryTag::Classics);
        assert_eq!(classics.len(), 12);
        assert_eq!(classics[0].id, "classic-1");
        assert_eq!(classics[11].id, "classic-12");
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        assert!(filter_by_category(&[], CategoryTag::Drinks).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = &catalog().items;
        let first = filter_by_category(items, CategoryTag::MostWanted);
        let second = filter_by_category(items, CategoryTag::MostWanted);
        assert_eq!(first, second);
    }
}
