//! Product and lookbook catalog.
//!
//! The catalog is compiled into the binary from `data/catalog.json` and
//! parsed once at start-up. Average ratings are derived from the reviews at
//! load time rather than trusted from the file.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Deserialize;
use thiserror::Error;

use chapter_two_core::{LookId, ProductId};

use crate::models::preferences::ALL_CATEGORIES;
use crate::models::{Look, Product};

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// Standard apparel sizes in display order.
const SIZE_ORDER: [&str; 5] = ["XS", "S", "M", "L", "XL"];

/// Errors from catalog loading and lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Look not found: {0}")]
    LookNotFound(LookId),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),
}

#[derive(Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
    #[serde(default)]
    looks: Vec<Look>,
}

/// In-memory products and looks.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    looks: Vec<Look>,
}

impl Catalog {
    /// The catalog shipped with the storefront.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if the embedded JSON is malformed.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parse a catalog document of the form `{"products": [...], "looks": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` if `json` does not match the catalog shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let catalog = Self::new(file.products, file.looks);
        tracing::debug!(
            products = catalog.products.len(),
            looks = catalog.looks.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog, deriving every product's average rating.
    #[must_use]
    pub fn new(mut products: Vec<Product>, looks: Vec<Look>) -> Self {
        for product in &mut products {
            product.recompute_average_rating();
        }
        Self { products, looks }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn looks(&self) -> &[Look] {
        &self.looks
    }

    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    #[must_use]
    pub fn look(&self, id: LookId) -> Option<&Look> {
        self.looks.iter().find(|l| l.id == id)
    }

    /// Products of `look` in the look's order. Ids missing from the catalog
    /// are skipped.
    #[must_use]
    pub fn look_products(&self, look: &Look) -> Vec<&Product> {
        look.product_ids
            .iter()
            .filter_map(|id| self.product(*id))
            .collect()
    }

    /// Up to `count` looks other than `id`, in catalog order.
    #[must_use]
    pub fn other_looks(&self, id: LookId, count: usize) -> Vec<&Look> {
        self.looks
            .iter()
            .filter(|l| l.id != id)
            .take(count)
            .collect()
    }

    /// Distinct sizes across the look's products: XS, S, M, L, XL first,
    /// anything else after in alphabetical order.
    #[must_use]
    pub fn look_sizes(&self, look: &Look) -> Vec<String> {
        let mut sizes: Vec<String> = self
            .look_products(look)
            .into_iter()
            .flat_map(|p| p.sizes.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        sizes.sort_by(|a, b| compare_sizes(a, b));
        sizes
    }

    /// `"All"` followed by every distinct product category, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> = self.products.iter().map(|p| p.category.as_str()).collect();
        std::iter::once(ALL_CATEGORIES)
            .chain(distinct)
            .map(String::from)
            .collect()
    }

    /// Products in `category`; `"All"` returns everything.
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        if category == ALL_CATEGORIES {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Featured listing.
    ///
    /// Without a preference the whole catalog is returned in catalog order.
    /// With one, products in the preferred category come first, the rest
    /// follow in catalog order, and the list is cut to `limit`. Nothing is
    /// filtered out before the cut.
    #[must_use]
    pub fn featured(&self, preferred_category: Option<&str>, limit: usize) -> Vec<&Product> {
        let Some(preferred) = preferred_category.filter(|c| *c != ALL_CATEGORIES) else {
            return self.products.iter().collect();
        };

        let (mut first, rest): (Vec<&Product>, Vec<&Product>) = self
            .products
            .iter()
            .partition(|p| p.category == preferred);
        first.extend(rest);
        first.truncate(limit);
        first
    }
}

fn size_rank(size: &str) -> Option<usize> {
    SIZE_ORDER.iter().position(|s| *s == size)
}

fn compare_sizes(a: &str, b: &str) -> Ordering {
    match (size_rank(a), size_rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
