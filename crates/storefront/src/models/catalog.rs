//! Catalog records: products, their reviews, and curated looks.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use chapter_two_core::{LookId, Price, PriceError, ProductId, Rating, ReviewId, UserId};

/// A customer review attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub user_name: String,
    pub rating: Rating,
    pub comment: String,
    pub date: DateTime<Utc>,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<String>,
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Mean review rating to one decimal place, zero without reviews.
    #[serde(default)]
    pub average_rating: Decimal,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default)]
    pub is_new: bool,
}

impl Product {
    /// Parsed unit price.
    ///
    /// # Errors
    ///
    /// Returns `PriceError` if the price string is not a number.
    pub fn unit_price(&self) -> Result<Price, PriceError> {
        Price::parse(&self.price)
    }

    /// Append a review and refresh the average rating.
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
        self.recompute_average_rating();
    }

    /// Recompute `average_rating` from every review.
    ///
    /// This walks the full review list; fine for catalog-sized review counts.
    pub fn recompute_average_rating(&mut self) {
        self.average_rating = average_rating(&self.reviews);
    }
}

/// Arithmetic mean of the ratings, rounded half away from zero to one
/// decimal place. Zero for an empty slice.
#[must_use]
pub fn average_rating(reviews: &[Review]) -> Decimal {
    if reviews.is_empty() {
        return Decimal::ZERO;
    }

    let total: u32 = reviews.iter().map(|r| u32::from(r.rating.stars())).sum();
    let count = u32::try_from(reviews.len()).unwrap_or(u32::MAX);

    (Decimal::from(total) / Decimal::from(count))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// A curated set of products shown and sold together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Look {
    pub id: LookId,
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub product_ids: Vec<ProductId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn review(stars: u8) -> Review {
        Review {
            id: ReviewId::new(format!("rev-{stars}")),
            user_id: UserId::new("user-1"),
            user_name: "Test".to_string(),
            rating: Rating::new(stars).unwrap(),
            comment: "ok".to_string(),
            date: Utc::now(),
        }
    }

    #[test]
    fn test_average_of_nothing_is_zero() {
        assert_eq!(average_rating(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        // 14 / 3 = 4.666..
        let reviews = [review(5), review(4), review(5)];
        assert_eq!(average_rating(&reviews), Decimal::new(47, 1));

        // 9 / 2 = 4.5 exactly
        assert_eq!(average_rating(&[review(5), review(4)]), Decimal::new(45, 1));
    }

    #[test]
    fn test_midpoint_rounds_up() {
        // 17 / 4 = 4.25
        let reviews = [review(5), review(4), review(4), review(4)];
        assert_eq!(average_rating(&reviews), Decimal::new(43, 1));
    }
}
