//! Global Shop State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::FILTER_ALL;
use crate::models::Product;

/// Session shop state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Products fetched from the API, read-only for the session
    pub products: Vec<Product>,
    /// Wishlisted product ids, membership-unique via toggle
    pub wishlist: Vec<u32>,
    /// Cart product ids, duplicates allowed (quantity = entry count)
    pub cart: Vec<u32>,
    /// Currently selected brand filter
    pub active_filter: String,
}

impl ShopState {
    pub fn new() -> Self {
        Self {
            active_filter: FILTER_ALL.to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the product list after a successful fetch
pub fn store_set_products(store: &ShopStore, products: Vec<Product>) {
    *store.products().write() = products;
}

/// Toggle wishlist membership; returns true when the id was added
pub fn store_toggle_wishlist(store: &ShopStore, product_id: u32) -> bool {
    toggle_membership(&mut store.wishlist().write(), product_id)
}

/// Append to the cart; duplicates are intentional, there is no removal
pub fn store_add_to_cart(store: &ShopStore, product_id: u32) {
    store.cart().write().push(product_id);
}

/// Select the active brand filter
pub fn store_set_filter(store: &ShopStore, filter: &str) {
    *store.active_filter().write() = filter.to_string();
}

/// Toggle membership of `id` in an id list: push when absent (returns
/// true), remove the first occurrence when present (returns false)
pub fn toggle_membership(list: &mut Vec<u32>, id: u32) -> bool {
    match list.iter().position(|&entry| entry == id) {
        Some(index) => {
            list.remove(index);
            false
        }
        None => {
            list.push(id);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut wishlist = Vec::new();

        assert!(toggle_membership(&mut wishlist, 7));
        assert_eq!(wishlist, vec![7]);

        assert!(!toggle_membership(&mut wishlist, 7));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut wishlist = vec![1, 2, 3];
        let original = wishlist.clone();

        toggle_membership(&mut wishlist, 9);
        toggle_membership(&mut wishlist, 9);
        assert_eq!(wishlist, original);
    }

    #[test]
    fn toggle_removes_first_occurrence_only() {
        // Duplicates cannot arise from toggling, but removal must still
        // take exactly one entry if they ever do.
        let mut list = vec![5, 8, 5];
        assert!(!toggle_membership(&mut list, 5));
        assert_eq!(list, vec![8, 5]);
    }

    #[test]
    fn cart_counts_duplicate_adds() {
        let mut cart = Vec::new();
        for _ in 0..3 {
            cart.push(4u32);
        }
        assert_eq!(cart.len(), 3);
    }
}
