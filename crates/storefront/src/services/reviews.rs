//! Review submission against a simulated backend.
//!
//! Reviews live only in the in-memory catalog; a restart loses them.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use thiserror::Error;
use tracing::instrument;

use chapter_two_core::{ProductId, Rating, ReviewId};

use crate::catalog::Catalog;
use crate::models::{Review, User};
use crate::notify::{Notice, SharedNotifier};

const ID_SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LENGTH: usize = 7;

/// Review submission failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("You must be logged in to submit a review.")]
    NotSignedIn,

    #[error("Please select a rating.")]
    MissingRating,

    #[error("Please write a comment for your review.")]
    MissingComment,

    #[error("Product not found.")]
    ProductNotFound(ProductId),
}

/// Review submission.
pub struct ReviewService {
    notifier: SharedNotifier,
    delay: Duration,
}

impl ReviewService {
    #[must_use]
    pub fn new(notifier: SharedNotifier, delay: Duration) -> Self {
        Self { notifier, delay }
    }

    /// Append a review by `author` to the product and refresh its average.
    ///
    /// Input is checked before the simulated round-trip; the product lookup
    /// happens after it.
    ///
    /// # Errors
    ///
    /// Returns `ReviewError` if the shopper is signed out, the rating is not
    /// 1-5, the comment is blank, or the product does not exist. Every
    /// failure is also raised as a notice.
    #[instrument(skip(self, catalog, comment, author))]
    pub async fn submit(
        &self,
        catalog: &mut Catalog,
        product_id: ProductId,
        rating: u8,
        comment: &str,
        author: Option<&User>,
    ) -> Result<Review, ReviewError> {
        let result = self
            .try_submit(catalog, product_id, rating, comment, author)
            .await;

        match &result {
            Ok(review) => {
                tracing::info!(review_id = %review.id, "Review submitted");
                self.notifier
                    .notify(Notice::success("Review submitted successfully!"));
            }
            Err(err) => self.notifier.notify(Notice::error(err.to_string())),
        }
        result
    }

    async fn try_submit(
        &self,
        catalog: &mut Catalog,
        product_id: ProductId,
        rating: u8,
        comment: &str,
        author: Option<&User>,
    ) -> Result<Review, ReviewError> {
        let author = author.ok_or(ReviewError::NotSignedIn)?;
        let rating = Rating::new(rating).map_err(|_| ReviewError::MissingRating)?;
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(ReviewError::MissingComment);
        }

        tokio::time::sleep(self.delay).await;

        let product = catalog
            .product_mut(product_id)
            .ok_or(ReviewError::ProductNotFound(product_id))?;

        let review = Review {
            id: generate_review_id(),
            user_id: author.id.clone(),
            user_name: author.name.clone(),
            rating,
            comment: comment.to_string(),
            date: Utc::now(),
        };
        product.add_review(review.clone());

        Ok(review)
    }
}

/// `rev-<unix millis>-<7 base36 chars>`.
fn generate_review_id() -> ReviewId {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..ID_SUFFIX_CHARSET.len());
            ID_SUFFIX_CHARSET.get(idx).map_or('0', |b| char::from(*b))
        })
        .collect();
    ReviewId::new(format!("rev-{}-{suffix}", Utc::now().timestamp_millis()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use chapter_two_core::UserId;

    use super::*;
    use crate::notify::RecordingNotifier;

    fn author() -> User {
        User {
            id: UserId::new("user-123"),
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
        }
    }

    fn service() -> (ReviewService, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        (ReviewService::new(notifier.clone(), Duration::ZERO), notifier)
    }

    #[test]
    fn test_review_id_shape() {
        let id = generate_review_id();
        let parts: Vec<&str> = id.as_str().split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "rev");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 7);
        assert!(parts[2].bytes().all(|b| ID_SUFFIX_CHARSET.contains(&b)));
    }

    #[tokio::test]
    async fn test_submit_recomputes_average() {
        let mut catalog = Catalog::embedded().unwrap();
        // Product 6 ships with two reviews averaging 4.5.
        let id = ProductId::new(6);
        assert_eq!(catalog.product(id).unwrap().average_rating, Decimal::new(45, 1));

        let (service, notifier) = service();
        let review = service
            .submit(&mut catalog, id, 5, " Lovely fabric ", Some(&author()))
            .await
            .unwrap();

        let product = catalog.product(id).unwrap();
        assert_eq!(product.reviews.len(), 3);
        assert_eq!(product.average_rating, Decimal::new(47, 1));
        assert_eq!(review.comment, "Lovely fabric");
        assert_eq!(review.user_name, "Demo User");
        assert_eq!(
            notifier.last_message().as_deref(),
            Some("Review submitted successfully!")
        );
    }

    #[tokio::test]
    async fn test_first_review_sets_average() {
        let mut catalog = Catalog::embedded().unwrap();
        let id = ProductId::new(7);
        let (service, _) = service();
        service
            .submit(&mut catalog, id, 3, "Fine", Some(&author()))
            .await
            .unwrap();
        assert_eq!(catalog.product(id).unwrap().average_rating, Decimal::new(3, 0));
    }

    #[tokio::test]
    async fn test_validation_failures() {
        let mut catalog = Catalog::embedded().unwrap();
        let id = ProductId::new(7);
        let (service, notifier) = service();

        let err = service.submit(&mut catalog, id, 4, "ok", None).await.unwrap_err();
        assert_eq!(err, ReviewError::NotSignedIn);

        let err = service
            .submit(&mut catalog, id, 0, "ok", Some(&author()))
            .await
            .unwrap_err();
        assert_eq!(err, ReviewError::MissingRating);

        let err = service
            .submit(&mut catalog, id, 4, "   ", Some(&author()))
            .await
            .unwrap_err();
        assert_eq!(err, ReviewError::MissingComment);
        assert_eq!(
            notifier.last_message().as_deref(),
            Some("Please write a comment for your review.")
        );
        assert!(catalog.product(id).unwrap().reviews.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_product() {
        let mut catalog = Catalog::embedded().unwrap();
        let (service, notifier) = service();
        let err = service
            .submit(&mut catalog, ProductId::new(404), 5, "Great", Some(&author()))
            .await
            .unwrap_err();

        assert_eq!(err, ReviewError::ProductNotFound(ProductId::new(404)));
        assert_eq!(notifier.last_message().as_deref(), Some("Product not found."));
    }
}
