//! Wishlist commands.

use chapter_two_storefront::{AppError, AppState};

use super::output;
use crate::WishlistAction;

/// Run a wishlist command and print the wishlist.
///
/// # Errors
///
/// Returns `AppError::Catalog` if the product does not exist.
pub fn run(state: &mut AppState, action: WishlistAction) -> Result<(), AppError> {
    match action {
        WishlistAction::Show => {}
        WishlistAction::Add { id } => {
            state.add_product_to_wishlist(id)?;
        }
        WishlistAction::Remove { id } => {
            state.wishlist_mut().remove_from_wishlist(id);
        }
        WishlistAction::Toggle { id } => {
            state.toggle_product_in_wishlist(id)?;
        }
        WishlistAction::MoveToCart { id } => {
            if state.move_wishlist_item_to_cart(id) {
                output::print_cart(state.cart());
            } else {
                tracing::warn!(product_id = %id, "Product is not in the wishlist");
            }
        }
        WishlistAction::Clear => state.wishlist_mut().clear_wishlist(),
    }
    output::print_wishlist(state.wishlist());
    Ok(())
}
