//! Wishlist state.

use std::sync::Arc;

use tracing::instrument;

use chapter_two_core::ProductId;

use super::cart::Cart;
use crate::models::WishlistItem;
use crate::notify::{Notice, SharedNotifier};
use crate::storage::{KeyValueStore, PersistedReducer, Reducer, keys};

/// Actions accepted by [`WishlistState`].
#[derive(Debug, Clone)]
pub enum WishlistAction {
    /// Add an item; ignored if its id is already present.
    AddItem(WishlistItem),
    RemoveItem(ProductId),
    Clear,
    Toggle,
    Open,
    Close,
}

/// Saved products (unique by id) and sidebar visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishlistState {
    items: Vec<WishlistItem>,
    is_open: bool,
}

impl WishlistState {
    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

impl Reducer for WishlistState {
    type Action = WishlistAction;
    type Snapshot = Vec<WishlistItem>;

    fn reduce(&mut self, action: WishlistAction) {
        match action {
            WishlistAction::AddItem(item) => {
                if !self.contains(item.id) {
                    self.items.push(item);
                }
            }
            WishlistAction::RemoveItem(id) => self.items.retain(|item| item.id != id),
            WishlistAction::Clear => self.items.clear(),
            WishlistAction::Toggle => self.is_open = !self.is_open,
            WishlistAction::Open => self.is_open = true,
            WishlistAction::Close => self.is_open = false,
        }
    }

    fn snapshot(&self) -> Option<Vec<WishlistItem>> {
        Some(self.items.clone())
    }

    fn restore(stored: Vec<WishlistItem>) -> Self {
        // Older payloads may hold duplicates; keep the first of each id.
        let mut state = Self::default();
        for item in stored {
            state.reduce(WishlistAction::AddItem(item));
        }
        state
    }
}

/// The wishlist container: a persisted [`WishlistState`] plus notices.
pub struct Wishlist {
    inner: PersistedReducer<WishlistState>,
    notifier: SharedNotifier,
}

impl Wishlist {
    /// Hydrate the wishlist from `store`.
    #[must_use]
    pub fn hydrate(store: Arc<dyn KeyValueStore>, notifier: SharedNotifier) -> Self {
        Self {
            inner: PersistedReducer::hydrate(store, keys::WISHLIST),
            notifier,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &WishlistState {
        self.inner.state()
    }

    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        self.state().items()
    }

    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.state().item_count()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state().is_open()
    }

    #[must_use]
    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.state().contains(id)
    }

    /// Look up an entry by product id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&WishlistItem> {
        self.items().iter().find(|item| item.id == id)
    }

    /// Save `item`; a product already saved is left alone.
    ///
    /// Returns `true` if the item was added.
    #[instrument(skip(self, item), fields(product_id = %item.id))]
    pub fn add_to_wishlist(&mut self, item: WishlistItem) -> bool {
        if self.is_in_wishlist(item.id) {
            self.notifier.notify(Notice::info(format!(
                "{} is already in your wishlist.",
                item.name
            )));
            return false;
        }

        let notice = Notice::success(format!("{} added to wishlist!", item.name));
        self.inner.dispatch(WishlistAction::AddItem(item));
        self.notifier.notify(notice);
        true
    }

    /// Remove the entry for `id`.
    ///
    /// Returns the removed entry, if there was one.
    #[instrument(skip(self))]
    pub fn remove_from_wishlist(&mut self, id: ProductId) -> Option<WishlistItem> {
        let removed = self.get(id).cloned();
        self.inner.dispatch(WishlistAction::RemoveItem(id));

        if let Some(item) = &removed {
            self.notifier
                .notify(Notice::success(format!("{} removed from wishlist.", item.name)));
        }
        removed
    }

    /// Remove `item` if saved, otherwise save it and open the sidebar.
    ///
    /// Returns `true` if the item is saved afterwards.
    pub fn toggle_item(&mut self, item: WishlistItem) -> bool {
        if self.is_in_wishlist(item.id) {
            self.remove_from_wishlist(item.id);
            false
        } else {
            self.add_to_wishlist(item);
            self.open_wishlist();
            true
        }
    }

    /// Add the saved entry for `id` to `cart`, keeping its colour and size,
    /// then drop it from the wishlist.
    ///
    /// Returns `false` if nothing is saved under `id`.
    pub fn move_to_cart(&mut self, id: ProductId, cart: &mut Cart) -> bool {
        let Some(item) = self.get(id).cloned() else {
            return false;
        };
        cart.add_to_cart(item.to_cart_product());
        self.remove_from_wishlist(id);
        true
    }

    pub fn clear_wishlist(&mut self) {
        self.inner.dispatch(WishlistAction::Clear);
        self.notifier.notify(Notice::success("Wishlist cleared."));
    }

    pub fn toggle_wishlist(&mut self) {
        self.inner.dispatch(WishlistAction::Toggle);
    }

    pub fn open_wishlist(&mut self) {
        self.inner.dispatch(WishlistAction::Open);
    }

    pub fn close_wishlist(&mut self) {
        self.inner.dispatch(WishlistAction::Close);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chapter_two_core::NoticeLevel;

    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::storage::MemoryStore;

    fn item(id: i32) -> WishlistItem {
        WishlistItem {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: "₹1,999".to_string(),
            original_price: None,
            image: String::new(),
            category: "Caps".to_string(),
            selected_color: None,
            selected_size: None,
        }
    }

    fn wishlist() -> (Wishlist, Arc<RecordingNotifier>, Arc<dyn KeyValueStore>) {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let wishlist = Wishlist::hydrate(Arc::clone(&store), notifier.clone());
        (wishlist, notifier, store)
    }

    #[test]
    fn test_reducer_ignores_duplicate_ids() {
        let mut state = WishlistState::default();
        state.reduce(WishlistAction::AddItem(item(12)));
        state.reduce(WishlistAction::AddItem(item(12)));
        assert_eq!(state.item_count(), 1);
    }

    #[test]
    fn test_duplicate_add_is_noop_with_info_notice() {
        let (mut wishlist, notifier, _) = wishlist();
        assert!(wishlist.add_to_wishlist(item(12)));
        assert!(!wishlist.add_to_wishlist(item(12)));

        assert_eq!(wishlist.item_count(), 1);
        let notices = notifier.take();
        assert_eq!(notices[0].message, "Product 12 added to wishlist!");
        assert_eq!(notices[1].level, NoticeLevel::Info);
        assert_eq!(notices[1].message, "Product 12 is already in your wishlist.");
    }

    #[test]
    fn test_remove_and_membership() {
        let (mut wishlist, notifier, _) = wishlist();
        wishlist.add_to_wishlist(item(3));
        wishlist.add_to_wishlist(item(6));
        assert!(wishlist.is_in_wishlist(ProductId::new(3)));

        let removed = wishlist.remove_from_wishlist(ProductId::new(3));
        assert_eq!(removed.map(|i| i.id), Some(ProductId::new(3)));
        assert!(!wishlist.is_in_wishlist(ProductId::new(3)));
        assert_eq!(
            notifier.last_message().as_deref(),
            Some("Product 3 removed from wishlist.")
        );

        notifier.take();
        assert!(wishlist.remove_from_wishlist(ProductId::new(99)).is_none());
        assert!(notifier.take().is_empty());
    }

    #[test]
    fn test_toggle_item_opens_sidebar_on_add() {
        let (mut wishlist, _, _) = wishlist();
        assert!(wishlist.toggle_item(item(7)));
        assert!(wishlist.is_open());
        assert!(!wishlist.toggle_item(item(7)));
        assert_eq!(wishlist.item_count(), 0);
    }

    #[test]
    fn test_clear_persists_empty_list() {
        let (mut wishlist, notifier, store) = wishlist();
        wishlist.add_to_wishlist(item(7));
        wishlist.clear_wishlist();

        assert_eq!(wishlist.item_count(), 0);
        assert_eq!(store.get(keys::WISHLIST).unwrap().as_deref(), Some("[]"));
        assert_eq!(notifier.last_message().as_deref(), Some("Wishlist cleared."));
    }

    #[test]
    fn test_restore_dedups_stored_payload() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let stored = serde_json::to_string(&vec![item(1), item(2), item(1)]).unwrap();
        store.set(keys::WISHLIST, &stored).unwrap();

        let wishlist = Wishlist::hydrate(store, Arc::new(RecordingNotifier::new()));
        assert_eq!(wishlist.item_count(), 2);
    }

    #[test]
    fn test_move_to_cart() {
        let (mut wishlist, _, store) = wishlist();
        let mut cart = Cart::hydrate(Arc::clone(&store), Arc::new(RecordingNotifier::new()));
        let mut saved = item(8);
        saved.selected_size = Some("M".to_string());
        wishlist.add_to_wishlist(saved);

        assert!(wishlist.move_to_cart(ProductId::new(8), &mut cart));
        assert_eq!(wishlist.item_count(), 0);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].selected_size.as_deref(), Some("M"));

        assert!(!wishlist.move_to_cart(ProductId::new(8), &mut cart));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_visibility() {
        let (mut wishlist, _, _) = wishlist();
        wishlist.toggle_wishlist();
        assert!(wishlist.is_open());
        wishlist.close_wishlist();
        assert!(!wishlist.is_open());
        wishlist.open_wishlist();
        assert!(wishlist.is_open());
    }
}
