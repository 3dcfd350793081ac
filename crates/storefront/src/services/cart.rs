//! Shopping cart state.
//!
//! Lines are merged by [`LineKey`] (product, colour, size). Totals are
//! recomputed from the full line list after every action rather than
//! adjusted incrementally.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::instrument;

use chapter_two_core::{CurrencyCode, Price, ProductId};

use crate::error::add_breadcrumb;
use crate::models::{CartItem, CartProduct, LineKey};
use crate::notify::{Notice, SharedNotifier};
use crate::storage::{KeyValueStore, PersistedReducer, Reducer, keys};

/// Actions accepted by [`CartState`].
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add one unit, merging into an existing line with the same key.
    AddItem(CartProduct),
    /// Remove every line for a product.
    RemoveItem(ProductId),
    /// Set the quantity of every line for a product; `<= 0` removes them.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// Remove a single line.
    RemoveLine(LineKey),
    /// Set the quantity of a single line; `<= 0` removes it.
    UpdateLineQuantity { key: LineKey, quantity: i64 },
    Clear,
    Toggle,
    Open,
    Close,
}

/// Cart contents plus derived aggregates and sidebar visibility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    items: Vec<CartItem>,
    is_open: bool,
    total: Decimal,
    item_count: u64,
}

impl CartState {
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub const fn item_count(&self) -> u64 {
        self.item_count
    }

    fn set_items(&mut self, items: Vec<CartItem>) {
        self.total = calculate_total(&items);
        self.item_count = calculate_item_count(&items);
        self.items = items;
    }
}

/// Total cart value.
///
/// Lines whose price cannot be parsed, or whose amount would overflow the
/// total, count as zero.
fn calculate_total(items: &[CartItem]) -> Decimal {
    items.iter().fold(Decimal::ZERO, |total, item| {
        let line = item
            .unit_price()
            .and_then(|price| price.times(item.quantity))
            .map(|price| price.amount);
        match line.map(|amount| total.checked_add(amount)) {
            Ok(Some(sum)) => sum,
            Ok(None) => {
                tracing::warn!(product_id = %item.id, price = %item.price, quantity = item.quantity, "Cart total overflowed");
                total
            }
            Err(e) => {
                tracing::warn!(product_id = %item.id, price = %item.price, error = %e, "Unusable cart price");
                total
            }
        }
    })
}

fn calculate_item_count(items: &[CartItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Clamp a requested quantity to a stored one; `None` means "remove".
fn positive_quantity(quantity: i64) -> Option<u32> {
    if quantity <= 0 {
        None
    } else {
        Some(u32::try_from(quantity).unwrap_or(u32::MAX))
    }
}

impl Reducer for CartState {
    type Action = CartAction;
    type Snapshot = Vec<CartItem>;

    fn reduce(&mut self, action: CartAction) {
        match action {
            CartAction::AddItem(product) => {
                let key = product.line_key();
                let mut items = std::mem::take(&mut self.items);
                if let Some(line) = items.iter_mut().find(|item| item.is_line(&key)) {
                    line.quantity = line.quantity.saturating_add(1);
                } else {
                    items.push(product.with_quantity(1));
                }
                self.set_items(items);
            }
            CartAction::RemoveItem(id) => {
                let mut items = std::mem::take(&mut self.items);
                items.retain(|item| item.id != id);
                self.set_items(items);
            }
            CartAction::UpdateQuantity { id, quantity } => {
                let mut items = std::mem::take(&mut self.items);
                match positive_quantity(quantity) {
                    Some(quantity) => items
                        .iter_mut()
                        .filter(|item| item.id == id)
                        .for_each(|item| item.quantity = quantity),
                    None => items.retain(|item| item.id != id),
                }
                self.set_items(items);
            }
            CartAction::RemoveLine(key) => {
                let mut items = std::mem::take(&mut self.items);
                items.retain(|item| !item.is_line(&key));
                self.set_items(items);
            }
            CartAction::UpdateLineQuantity { key, quantity } => {
                let mut items = std::mem::take(&mut self.items);
                match positive_quantity(quantity) {
                    Some(quantity) => {
                        if let Some(line) = items.iter_mut().find(|item| item.is_line(&key)) {
                            line.quantity = quantity;
                        }
                    }
                    None => items.retain(|item| !item.is_line(&key)),
                }
                self.set_items(items);
            }
            CartAction::Clear => self.set_items(Vec::new()),
            CartAction::Toggle => self.is_open = !self.is_open,
            CartAction::Open => self.is_open = true,
            CartAction::Close => self.is_open = false,
        }
    }

    fn snapshot(&self) -> Option<Vec<CartItem>> {
        Some(self.items.clone())
    }

    fn restore(items: Vec<CartItem>) -> Self {
        let mut state = Self::default();
        state.set_items(items.into_iter().filter(|item| item.quantity > 0).collect());
        state
    }
}

/// The cart container: a persisted [`CartState`] plus notices.
pub struct Cart {
    inner: PersistedReducer<CartState>,
    notifier: SharedNotifier,
}

impl Cart {
    /// Hydrate the cart from `store`.
    #[must_use]
    pub fn hydrate(store: Arc<dyn KeyValueStore>, notifier: SharedNotifier) -> Self {
        Self {
            inner: PersistedReducer::hydrate(store, keys::CART),
            notifier,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &CartState {
        self.inner.state()
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        self.state().items()
    }

    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.state().total()
    }

    /// Total as a display price.
    #[must_use]
    pub const fn total_price(&self) -> Price {
        Price::new(self.total(), CurrencyCode::INR)
    }

    #[must_use]
    pub const fn item_count(&self) -> u64 {
        self.state().item_count()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Add one unit of `product`.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, product: CartProduct) {
        let notice = Notice::success(format!("{} added to cart!", product.name)).with_description(
            format!(
                "Color: {}, Size: {}",
                product.selected_color.as_deref().unwrap_or("Default"),
                product.selected_size.as_deref().unwrap_or("Default"),
            ),
        );
        add_breadcrumb(
            "cart",
            "Added item to cart",
            Some(&[("product_id", product.id.to_string().as_str())]),
        );

        self.inner.dispatch(CartAction::AddItem(product));
        self.notifier.notify(notice);
    }

    /// Remove every line for product `id`.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, id: ProductId) {
        let name = self
            .items()
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.name.clone());

        self.inner.dispatch(CartAction::RemoveItem(id));

        if let Some(name) = name {
            add_breadcrumb(
                "cart",
                "Removed item from cart",
                Some(&[("product_id", id.to_string().as_str())]),
            );
            self.notifier
                .notify(Notice::success(format!("{name} removed from cart")));
        }
    }

    /// Set the quantity of every line for product `id`.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        self.inner
            .dispatch(CartAction::UpdateQuantity { id, quantity });
    }

    /// Remove a single line.
    pub fn remove_line(&mut self, key: LineKey) {
        let name = self
            .items()
            .iter()
            .find(|item| item.is_line(&key))
            .map(|item| item.name.clone());

        self.inner.dispatch(CartAction::RemoveLine(key));

        if let Some(name) = name {
            self.notifier
                .notify(Notice::success(format!("{name} removed from cart")));
        }
    }

    /// Set the quantity of a single line.
    pub fn update_line_quantity(&mut self, key: LineKey, quantity: i64) {
        self.inner
            .dispatch(CartAction::UpdateLineQuantity { key, quantity });
    }

    pub fn clear_cart(&mut self) {
        self.inner.dispatch(CartAction::Clear);
        self.notifier.notify(Notice::success("Cart cleared"));
    }

    pub fn toggle_cart(&mut self) {
        self.inner.dispatch(CartAction::Toggle);
    }

    pub fn open_cart(&mut self) {
        self.inner.dispatch(CartAction::Open);
    }

    pub fn close_cart(&mut self) {
        self.inner.dispatch(CartAction::Close);
    }
}
