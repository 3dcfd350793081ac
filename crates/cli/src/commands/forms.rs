//! Review, newsletter and contact submissions.

use chapter_two_core::ProductId;
use chapter_two_storefront::AppState;
use chapter_two_storefront::services::{
    ContactError, ContactMessage, NewsletterError, ReviewError,
};

use super::output;

/// Submit a review and print the product with its refreshed rating.
///
/// Reviews are held in memory only, so the printed product is the only
/// place the new review shows up.
///
/// # Errors
///
/// Returns `ReviewError` if the submission is rejected.
pub async fn review(
    state: &mut AppState,
    product_id: ProductId,
    rating: u8,
    comment: &str,
) -> Result<(), ReviewError> {
    state.submit_review(product_id, rating, comment).await?;
    if let Some(product) = state.catalog().product(product_id) {
        output::print_product(product);
    }
    Ok(())
}

/// Subscribe `email` to the newsletter.
///
/// # Errors
///
/// Returns `NewsletterError` if the address is blank or malformed.
pub async fn newsletter(state: &AppState, email: &str) -> Result<(), NewsletterError> {
    state.newsletter().subscribe(email).await
}

/// Send the contact form.
///
/// # Errors
///
/// Returns `ContactError` if any field is blank.
pub async fn contact(
    state: &AppState,
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ContactError> {
    let message = ContactMessage {
        name,
        email,
        subject,
        message,
    };
    state.contact().send(&message).await
}
