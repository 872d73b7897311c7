//! Catalog item types mirroring the Catalog Service wire format.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::FoodId;

/// A catalog entry as served by the Catalog Service.
///
/// The service owns creation, update, and deletion; the UI only reads these
/// and echoes edited fields back through [`FoodInput`]. The id travels as
/// `_id` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Service-issued identifier.
    #[serde(rename = "_id")]
    pub id: FoodId,
    /// Display name (e.g. "Masala Dosa").
    pub name: String,
    /// Category literal used by the category pages (e.g. "Dosa").
    pub category: String,
    /// Price in rupees.
    pub cost: Decimal,
    /// Longer description shown on item detail.
    pub description: String,
    /// Absolute URL of the item image.
    pub image: String,
}

/// Editable fields sent back to the Catalog Service on update.
///
/// `image` carries either the freshly uploaded URL or the item's existing
/// one; the service treats the payload as a full replacement of these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodInput {
    pub name: String,
    pub category: String,
    pub cost: Decimal,
    pub description: String,
    pub image: String,
}

/// Return the items whose `category` equals the given literal.
///
/// Pure derivation over the full list: relative order is preserved and no
/// other field participates in the match.
#[must_use]
pub fn filter_by_category(items: &[FoodItem], category: &str) -> Vec<FoodItem> {
    items
        .iter()
        .filter(|item| item.category == category)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, category: &str) -> FoodItem {
        FoodItem {
            id: FoodId::new(id),
            name: name.to_owned(),
            category: category.to_owned(),
            cost: Decimal::new(120, 0),
            description: format!("{name} description"),
            image: format!("https://images.example.com/{id}.jpg"),
        }
    }

    #[test]
    fn test_food_item_wire_names() {
        let json = r#"{
            "_id": "64f1c0a2e4",
            "name": "Masala Dosa",
            "category": "Dosa",
            "cost": 120,
            "description": "Crisp dosa with potato filling",
            "image": "https://images.example.com/masala-dosa.jpg"
        }"#;

        let food: FoodItem = serde_json::from_str(json).expect("deserialize");
        assert_eq!(food.id, FoodId::new("64f1c0a2e4"));
        assert_eq!(food.name, "Masala Dosa");
        assert_eq!(food.cost, Decimal::new(120, 0));

        // The id must serialize back under its wire name.
        let out = serde_json::to_value(&food).expect("serialize");
        assert_eq!(out["_id"], "64f1c0a2e4");
        assert!(out.get("id").is_none());
    }

    #[test]
    fn test_food_item_fractional_cost() {
        let json = r#"{
            "_id": "a1",
            "name": "Filter Coffee",
            "category": "Beverages",
            "cost": 45.5,
            "description": "",
            "image": ""
        }"#;

        let food: FoodItem = serde_json::from_str(json).expect("deserialize");
        assert_eq!(food.cost.to_string(), "45.5");
    }

    #[test]
    fn test_filter_by_category_exact_ordered() {
        let items = vec![
            item("1", "Masala Dosa", "Dosa"),
            item("2", "Idli", "South Indian"),
            item("3", "Rava Dosa", "Dosa"),
            item("4", "Hakka Noodles", "Chinese"),
        ];

        let dosas = filter_by_category(&items, "Dosa");
        assert_eq!(dosas.len(), 2);
        assert_eq!(dosas[0].name, "Masala Dosa");
        assert_eq!(dosas[1].name, "Rava Dosa");

        let south = filter_by_category(&items, "South Indian");
        assert_eq!(south.len(), 1);
        assert_eq!(south[0].name, "Idli");
    }

    #[test]
    fn test_filter_by_category_no_match() {
        let items = vec![item("1", "Masala Dosa", "Dosa")];
        assert!(filter_by_category(&items, "North Indian").is_empty());
        assert!(filter_by_category(&[], "Dosa").is_empty());
    }

    #[test]
    fn test_filter_one_per_category() {
        // One Dosa item and one South Indian item: each page shows exactly one.
        let items = vec![
            item("1", "Masala Dosa", "Dosa"),
            item("2", "Idli", "South Indian"),
        ];
        assert_eq!(filter_by_category(&items, "Dosa").len(), 1);
        assert_eq!(filter_by_category(&items, "South Indian").len(), 1);
    }
}
