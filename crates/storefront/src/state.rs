//! Application state: every container, wired to one store and one notifier.

use std::collections::HashMap;
use std::sync::Arc;

use chapter_two_core::{LookId, ProductId};

use crate::catalog::{Catalog, CatalogError};
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::models::{CartProduct, Product, Review, WishlistItem};
use crate::notify::{Notice, SharedNotifier, TracingNotifier};
use crate::services::{
    Auth, Cart, ContactService, NewsletterService, Preferences, ReviewError, ReviewService,
    Wishlist,
};
use crate::storage::{FileStore, KeyValueStore};

/// Application state.
///
/// Built once at start-up: the catalog is parsed and each container is
/// hydrated from the store. Containers are owned here and mutated only
/// through their operations.
pub struct AppState {
    config: StorefrontConfig,
    catalog: Catalog,
    cart: Cart,
    wishlist: Wishlist,
    auth: Auth,
    preferences: Preferences,
    reviews: ReviewService,
    newsletter: NewsletterService,
    contact: ContactService,
    notifier: SharedNotifier,
}

impl AppState {
    /// Create application state over `store`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the embedded catalog cannot be parsed.
    pub fn new(
        config: StorefrontConfig,
        store: Arc<dyn KeyValueStore>,
        notifier: SharedNotifier,
    ) -> Result<Self> {
        let catalog = Catalog::embedded()?;
        Ok(Self::with_catalog(config, catalog, store, notifier))
    }

    /// Create application state over `store` with an explicit catalog.
    #[must_use]
    pub fn with_catalog(
        config: StorefrontConfig,
        catalog: Catalog,
        store: Arc<dyn KeyValueStore>,
        notifier: SharedNotifier,
    ) -> Self {
        let latency = config.latency;
        Self {
            cart: Cart::hydrate(Arc::clone(&store), Arc::clone(&notifier)),
            wishlist: Wishlist::hydrate(Arc::clone(&store), Arc::clone(&notifier)),
            auth: Auth::hydrate(Arc::clone(&store), Arc::clone(&notifier), latency.auth),
            preferences: Preferences::hydrate(store, Arc::clone(&notifier)),
            reviews: ReviewService::new(Arc::clone(&notifier), latency.review),
            newsletter: NewsletterService::new(Arc::clone(&notifier), latency.newsletter),
            contact: ContactService::new(Arc::clone(&notifier), latency.contact),
            config,
            catalog,
            notifier,
        }
    }

    /// Open state persisted under `config.data_dir`, logging notices.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the data directory cannot be created
    /// and `AppError::Catalog` if the catalog cannot be parsed.
    pub fn open(config: StorefrontConfig) -> Result<Self> {
        Self::open_with_notifier(config, Arc::new(TracingNotifier))
    }

    /// Open state persisted under `config.data_dir`.
    ///
    /// # Errors
    ///
    /// See [`AppState::open`].
    pub fn open_with_notifier(config: StorefrontConfig, notifier: SharedNotifier) -> Result<Self> {
        let store = FileStore::open(&config.data_dir)?;
        Self::new(config, Arc::new(store), notifier)
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub const fn wishlist_mut(&mut self) -> &mut Wishlist {
        &mut self.wishlist
    }

    #[must_use]
    pub const fn auth(&self) -> &Auth {
        &self.auth
    }

    pub const fn auth_mut(&mut self) -> &mut Auth {
        &mut self.auth
    }

    #[must_use]
    pub const fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub const fn preferences_mut(&mut self) -> &mut Preferences {
        &mut self.preferences
    }

    #[must_use]
    pub const fn newsletter(&self) -> &NewsletterService {
        &self.newsletter
    }

    #[must_use]
    pub const fn contact(&self) -> &ContactService {
        &self.contact
    }

    /// Featured listing ordered by the shopper's preferred category.
    #[must_use]
    pub fn featured_products(&self) -> Vec<&Product> {
        self.catalog.featured(
            self.preferences.preferred_category(),
            self.config.featured_limit,
        )
    }

    /// Submit a review as the signed-in shopper.
    ///
    /// # Errors
    ///
    /// See [`ReviewService::submit`].
    pub async fn submit_review(
        &mut self,
        product_id: ProductId,
        rating: u8,
        comment: &str,
    ) -> std::result::Result<Review, ReviewError> {
        self.reviews
            .submit(
                &mut self.catalog,
                product_id,
                rating,
                comment,
                self.auth.current_user(),
            )
            .await
    }

    /// Add one unit of a catalog product. Missing choices fall back to the
    /// product's first colour and first size.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the product does not exist.
    pub fn add_product_to_cart(
        &mut self,
        id: ProductId,
        color: Option<String>,
        size: Option<String>,
    ) -> Result<()> {
        let product = self
            .catalog
            .product(id)
            .ok_or(CatalogError::ProductNotFound(id))?;
        let color = color.or_else(|| product.colors.first().cloned());
        let size = size.or_else(|| product.sizes.first().cloned());

        self.cart
            .add_to_cart(CartProduct::from_product(product, color, size));
        Ok(())
    }

    /// Save a catalog product to the wishlist.
    ///
    /// Returns `true` if it was added.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the product does not exist.
    pub fn add_product_to_wishlist(&mut self, id: ProductId) -> Result<bool> {
        let item = self.wishlist_item(id)?;
        Ok(self.wishlist.add_to_wishlist(item))
    }

    /// Toggle a catalog product in the wishlist.
    ///
    /// Returns `true` if it is saved afterwards.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the product does not exist.
    pub fn toggle_product_in_wishlist(&mut self, id: ProductId) -> Result<bool> {
        let item = self.wishlist_item(id)?;
        Ok(self.wishlist.toggle_item(item))
    }

    /// Move a saved product into the cart.
    ///
    /// Returns `false` if it was not in the wishlist.
    pub fn move_wishlist_item_to_cart(&mut self, id: ProductId) -> bool {
        self.wishlist.move_to_cart(id, &mut self.cart)
    }

    /// Add every product of a look to the cart and open the cart.
    ///
    /// Each product uses the colour chosen in `chosen_colors`, else its first
    /// colour, and its first size. Returns the number of products added.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Catalog` if the look does not exist.
    pub fn add_look_to_cart(
        &mut self,
        look_id: LookId,
        chosen_colors: &HashMap<ProductId, String>,
    ) -> Result<usize> {
        let look = self
            .catalog
            .look(look_id)
            .ok_or(CatalogError::LookNotFound(look_id))?;
        let products = self.catalog.look_products(look);

        if products.is_empty() {
            self.notifier
                .notify(Notice::info("This look has no products to add to cart."));
            return Ok(0);
        }

        for product in &products {
            let color = chosen_colors
                .get(&product.id)
                .cloned()
                .or_else(|| product.colors.first().cloned());
            let size = product.sizes.first().cloned();
            self.cart
                .add_to_cart(CartProduct::from_product(product, color, size));
        }

        self.notifier.notify(Notice::success(format!(
            "All items from \"{}\" added to cart!",
            look.name
        )));
        self.cart.open_cart();
        tracing::info!(look_id = %look_id, count = products.len(), "Added look to cart");

        Ok(products.len())
    }

    fn wishlist_item(&self, id: ProductId) -> Result<WishlistItem> {
        let product = self
            .catalog
            .product(id)
            .ok_or(CatalogError::ProductNotFound(id))?;
        Ok(WishlistItem::from(product))
    }
}
