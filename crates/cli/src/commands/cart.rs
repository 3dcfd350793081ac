//! Cart commands.

use std::collections::HashMap;

use chapter_two_storefront::{AppError, AppState};

use super::output;
use crate::CartAction;

/// Run a cart command and print the cart.
///
/// # Errors
///
/// Returns `AppError::Catalog` if the product or look does not exist.
pub fn run(state: &mut AppState, action: CartAction) -> Result<(), AppError> {
    match action {
        CartAction::Show => {}
        CartAction::Add { id, color, size } => state.add_product_to_cart(id, color, size)?,
        CartAction::Remove { id } => state.cart_mut().remove_from_cart(id),
        CartAction::Set { id, quantity } => state.cart_mut().update_quantity(id, quantity),
        CartAction::Clear => state.cart_mut().clear_cart(),
        CartAction::AddLook { id, colors } => {
            let chosen: HashMap<_, _> = colors
                .into_iter()
                .map(|choice| (choice.product_id, choice.color))
                .collect();
            state.add_look_to_cart(id, &chosen)?;
        }
        CartAction::Toggle => state.cart_mut().toggle_cart(),
    }
    output::print_cart(state.cart());
    Ok(())
}
