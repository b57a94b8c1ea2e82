// web_app/state.rs - Widget state shared by all four widgets
//
// Pure state types, no Leptos dependency:
// - FetchState: Loading -> Ready | Failed, applied once per mount
// - SelectionIndex: wrap-around cursor for the carousel widgets
// - WishlistSet: toggled product ids for the horizontal scroll widget
// - QuickViewSelection: the product shown in the quick view overlay

use std::collections::BTreeSet;

use crate::web_app::model::Product;

/// Lifecycle of a widget's single recommendation fetch
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> FetchState<T> {
    /// Apply the outcome of the fetch.
    ///
    /// Only `Loading` can transition; once Ready or Failed the state is final
    /// and later outcomes are ignored. Returns whether the state changed.
    pub fn resolve<E: std::fmt::Display>(&mut self, outcome: Result<T, E>) -> bool {
        if !self.is_loading() {
            return false;
        }
        *self = match outcome {
            Ok(value) => FetchState::Ready(value),
            Err(e) => FetchState::Failed(e.to_string()),
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Cursor into a product sequence, wrapping modulo its length
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionIndex(usize);

impl SelectionIndex {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Advance one position. Empty sequences leave the cursor at 0.
    pub fn next(self, len: usize) -> Self {
        if len == 0 {
            return Self(0);
        }
        Self((self.0 + 1) % len)
    }

    /// Step back one position. Empty sequences leave the cursor at 0.
    pub fn previous(self, len: usize) -> Self {
        if len == 0 {
            return Self(0);
        }
        Self((self.0 % len + len - 1) % len)
    }

    /// Horizontal offset of the slide track, in percent of one slide
    pub fn track_offset_percent(self) -> usize {
        self.0 * 100
    }

    /// Item under the cursor
    pub fn current<T>(self, items: &[T]) -> Option<&T> {
        items.get(self.0)
    }
}

/// Product ids the user marked as favorites (memory only)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WishlistSet {
    ids: BTreeSet<u64>,
}

impl WishlistSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the id if absent, remove it if present. Returns the new membership.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// At most one product shown in the quick view overlay
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuickViewSelection(Option<Product>);

impl QuickViewSelection {
    pub fn open(&mut self, product: Product) {
        self.0 = Some(product);
    }

    pub fn close(&mut self) {
        self.0 = None;
    }

    pub fn product(&self) -> Option<&Product> {
        self.0.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            handle: format!("product-{}", id),
            product_type: "Trunk".to_string(),
            images: vec![],
            price: Decimal::new(1999, 2),
            discount: None,
            rating: 4,
        }
    }

    #[test]
    fn test_fetch_state_default_is_loading() {
        let state: FetchState<Vec<Product>> = FetchState::default();
        assert!(state.is_loading());
        assert!(state.ready().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_fetch_state_ready_is_final() {
        let mut state = FetchState::Loading;
        assert!(state.resolve::<String>(Ok(vec![product(1)])));
        assert_eq!(state.ready().map(Vec::len), Some(1));

        // A second outcome never sends the widget back through Loading
        assert!(!state.resolve(Err("late failure")));
        assert!(!state.resolve::<String>(Ok(vec![])));
        assert_eq!(state.ready().map(Vec::len), Some(1));
    }

    #[test]
    fn test_fetch_state_failed_message() {
        let mut state: FetchState<Vec<Product>> = FetchState::Loading;
        assert!(state.resolve(Err("Failed to fetch products")));
        assert_eq!(state.error(), Some("Failed to fetch products"));
        assert!(!state.resolve::<String>(Ok(vec![product(1)])));
        assert!(state.ready().is_none());
    }

    #[test]
    fn test_selection_next_is_cyclic() {
        for len in 1..=7 {
            for start in 0..len {
                let origin = SelectionIndex(start);
                let mut index = origin;
                for _ in 0..len {
                    index = index.next(len);
                }
                assert_eq!(index, origin, "len {} start {}", len, start);
            }
        }
    }

    #[test]
    fn test_selection_previous_then_next_is_identity() {
        for len in 1..=7 {
            for start in 0..len {
                let origin = SelectionIndex(start);
                assert_eq!(origin.previous(len).next(len), origin);
                assert_eq!(origin.next(len).previous(len), origin);
            }
        }
    }

    #[test]
    fn test_selection_wraps_at_edges() {
        let first = SelectionIndex::new();
        assert_eq!(first.previous(3).get(), 2);
        assert_eq!(SelectionIndex(2).next(3).get(), 0);
        assert_eq!(first.next(1).get(), 0);
    }

    #[test]
    fn test_selection_empty_sequence_is_noop() {
        let index = SelectionIndex::new();
        assert_eq!(index.next(0).get(), 0);
        assert_eq!(index.previous(0).get(), 0);
        assert!(index.current::<Product>(&[]).is_none());
    }

    #[test]
    fn test_selection_track_offset() {
        assert_eq!(SelectionIndex::new().track_offset_percent(), 0);
        assert_eq!(SelectionIndex(3).track_offset_percent(), 300);
    }

    #[test]
    fn test_selection_current() {
        let items = vec![product(10), product(20), product(30)];
        let index = SelectionIndex::new().next(items.len());
        assert_eq!(index.current(&items).map(|p| p.id), Some(20));
    }

    #[test]
    fn test_wishlist_toggle_is_own_inverse() {
        let mut wishlist = WishlistSet::new();
        wishlist.toggle(5);
        let before = wishlist.clone();

        for id in [5, 6] {
            let was_member = wishlist.contains(id);
            assert_eq!(wishlist.toggle(id), !was_member);
            assert_eq!(wishlist.toggle(id), was_member);
            assert_eq!(wishlist, before);
        }
    }

    #[test]
    fn test_wishlist_is_a_set() {
        let mut wishlist = WishlistSet::new();
        assert!(wishlist.is_empty());
        assert!(wishlist.toggle(1));
        assert!(wishlist.toggle(2));
        assert!(!wishlist.toggle(1));
        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains(2));
        assert!(!wishlist.contains(1));
    }

    #[test]
    fn test_quick_view_round_trip() {
        let products = vec![product(1), product(2)];
        let index = SelectionIndex::new().next(products.len());
        let mut selection = QuickViewSelection::default();

        selection.open(products[1].clone());
        assert!(selection.is_open());
        assert_eq!(selection.product().map(|p| p.id), Some(2));

        selection.close();
        assert!(!selection.is_open());
        assert_eq!(selection, QuickViewSelection::default());
        assert_eq!(index.get(), 1);
        assert_eq!(products.len(), 2);
    }
}
