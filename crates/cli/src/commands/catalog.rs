//! Catalog browsing.

use chapter_two_storefront::models::preferences::ALL_CATEGORIES;
use chapter_two_storefront::{AppState, CatalogError};

use super::output;
use crate::CatalogAction;

/// Run a catalog command.
///
/// # Errors
///
/// Returns `CatalogError` if the requested product or look does not exist.
pub fn run(state: &AppState, action: CatalogAction) -> Result<(), CatalogError> {
    let catalog = state.catalog();
    match action {
        CatalogAction::Products { category } => {
            let category = category.as_deref().unwrap_or(ALL_CATEGORIES);
            output::print_products(&catalog.by_category(category));
        }
        CatalogAction::Product { id } => {
            let product = catalog
                .product(id)
                .ok_or(CatalogError::ProductNotFound(id))?;
            output::print_product(product);
        }
        CatalogAction::Featured => output::print_products(&state.featured_products()),
        CatalogAction::Categories => output::print_categories(&catalog.categories()),
        CatalogAction::Looks => output::print_looks(catalog.looks()),
        CatalogAction::Look { id } => {
            let look = catalog.look(id).ok_or(CatalogError::LookNotFound(id))?;
            output::print_look(catalog, look);
        }
    }
    Ok(())
}
