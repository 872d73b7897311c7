//! The customer's in-progress selection of catalog items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::food::FoodItem;
use super::id::FoodId;

/// An ordered collection of selected items, keyed by item id.
///
/// Membership is a set: an item appears at most once, and insertion order is
/// preserved. The cart lives only for the session that holds it - there is no
/// quantity field and no persistence beyond the session store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<FoodItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item if no entry with the same id exists.
    ///
    /// Returns `true` if the item was inserted, `false` if an entry with the
    /// same id was already present (the cart is left unchanged).
    pub fn add(&mut self, item: FoodItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the entry with the given id, if present.
    ///
    /// Returns the removed item, or `None` if no entry matched (the cart is
    /// left unchanged).
    pub fn remove(&mut self, id: &FoodId) -> Option<FoodItem> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Whether an entry with the given id is in the cart.
    #[must_use]
    pub fn contains(&self, id: &FoodId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// The selected items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Number of entries in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of the costs of all entries.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(|item| item.cost).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, cost: i64) -> FoodItem {
        FoodItem {
            id: FoodId::new(id),
            name: format!("item-{id}"),
            category: "Dosa".to_owned(),
            cost: Decimal::new(cost, 0),
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_add_is_idempotent_per_id() {
        let mut cart = Cart::new();
        assert!(cart.add(item("a", 100)));
        assert!(!cart.add(item("a", 100)));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.subtotal(), Decimal::new(100, 0));
    }

    #[test]
    fn test_add_same_id_different_fields_keeps_first() {
        let mut cart = Cart::new();
        cart.add(item("a", 100));

        // A re-add under the same id never replaces the stored entry.
        let mut newer = item("a", 999);
        newer.name = "renamed".to_owned();
        assert!(!cart.add(newer));
        assert_eq!(cart.items()[0].name, "item-a");
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("a", 100));

        assert!(cart.remove(&FoodId::new("missing")).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_returns_entry_and_preserves_order() {
        let mut cart = Cart::new();
        cart.add(item("a", 100));
        cart.add(item("b", 50));
        cart.add(item("c", 70));

        let removed = cart.remove(&FoodId::new("b")).expect("entry present");
        assert_eq!(removed.id, FoodId::new("b"));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn test_cart_survives_session_roundtrip() {
        let mut cart = Cart::new();
        cart.add(item("a", 100));
        cart.add(item("b", 50));

        let json = serde_json::to_string(&cart).expect("serialize");
        let back: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cart);
    }
}
