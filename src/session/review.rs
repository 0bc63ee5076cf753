//! Review submission: form state, validation and review construction

use crate::catalog::{Catalog, ProductId, Review, GUEST_USER};
use chrono::NaiveDate;
use std::fmt;

/// Ratings offered by the selector, in display order
pub const RATING_CHOICES: [u8; 5] = [5, 4, 3, 2, 1];

/// Rating the selector starts on (and resets to after a submission)
pub const DEFAULT_RATING: u8 = 5;

/// Message shown when a submission is rejected
pub const VALIDATION_MESSAGE: &str = "Please enter a comment and select a valid rating.";

/// Message shown after a review is accepted
pub const SUCCESS_MESSAGE: &str = "Review successfully submitted!";

/// Label for a rating choice: "1 Star", "4 Stars"
pub fn rating_label(rating: u8) -> String {
    if rating == 1 {
        "1 Star".to_string()
    } else {
        format!("{} Stars", rating)
    }
}

/// Raw form inputs, kept exactly as the user entered them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    pub rating: u8,
    pub comment: String,
}

impl Default for ReviewForm {
    fn default() -> Self {
        Self {
            rating: DEFAULT_RATING,
            comment: String::new(),
        }
    }
}

impl ReviewForm {
    /// Clear the comment and put the rating back to the default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move the selector one entry down the list (toward 1 Star), wrapping
    pub fn next_rating(&mut self) {
        self.rating = Self::step(self.rating, 1);
    }

    /// Move the selector one entry up the list (toward 5 Stars), wrapping
    pub fn prev_rating(&mut self) {
        self.rating = Self::step(self.rating, RATING_CHOICES.len() - 1);
    }

    fn step(current: u8, by: usize) -> u8 {
        let index = RATING_CHOICES
            .iter()
            .position(|&r| r == current)
            .unwrap_or(0);
        RATING_CHOICES[(index + by) % RATING_CHOICES.len()]
    }

    pub fn push_char(&mut self, c: char) {
        self.comment.push(c);
    }

    pub fn backspace(&mut self) {
        self.comment.pop();
    }
}

/// Why a submission was rejected
///
/// Both checks always run; the user sees one combined message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub empty_comment: bool,
    pub rating_out_of_range: bool,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(VALIDATION_MESSAGE)
    }
}

impl std::error::Error for ValidationError {}

/// Build a guest review from raw inputs
pub fn build_review(rating: u8, comment: &str, today: NaiveDate) -> Result<Review, ValidationError> {
    let trimmed = comment.trim();
    let error = ValidationError {
        empty_comment: trimmed.is_empty(),
        rating_out_of_range: !(1..=5).contains(&rating),
    };
    if error.empty_comment || error.rating_out_of_range {
        return Err(error);
    }

    Ok(Review {
        user: GUEST_USER.to_string(),
        rating,
        comment: trimmed.to_string(),
        date: today,
    })
}

/// Validate the inputs and apply the review to `catalog`
pub fn submit(
    product_id: ProductId,
    rating: u8,
    comment: &str,
    catalog: &Catalog,
    today: NaiveDate,
) -> Result<Catalog, ValidationError> {
    let review = build_review(rating, comment, today)?;
    Ok(catalog.append_review(product_id, review))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixture::default_catalog;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 18).unwrap()
    }

    #[test]
    fn build_review_trims_and_assigns_guest() {
        let review = build_review(3, "  Works fine.  ", today()).unwrap();
        assert_eq!(review.user, "Guest User");
        assert_eq!(review.comment, "Works fine.");
        assert_eq!(review.rating, 3);
        assert_eq!(review.date.format("%Y-%m-%d").to_string(), "2024-10-18");
    }

    #[test]
    fn whitespace_comment_is_rejected() {
        let err = build_review(4, "   \n\t", today()).unwrap_err();
        assert!(err.empty_comment);
        assert!(!err.rating_out_of_range);
        assert_eq!(err.to_string(), VALIDATION_MESSAGE);
    }

    #[test]
    fn out_of_range_ratings_are_rejected() {
        for rating in [0, 6, 255] {
            let err = build_review(rating, "Nice", today()).unwrap_err();
            assert!(err.rating_out_of_range);
            assert!(!err.empty_comment);
        }
    }

    #[test]
    fn both_failures_are_reported_together() {
        let err = build_review(0, "", today()).unwrap_err();
        assert!(err.empty_comment && err.rating_out_of_range);
    }

    #[test]
    fn submit_valid_review_changes_only_target_product() {
        let catalog = default_catalog();
        for target in catalog.products() {
            let updated = submit(target.id, 5, "Good", &catalog, today()).unwrap();
            for product in updated.products() {
                let before = catalog.find(product.id).unwrap();
                if product.id == target.id {
                    assert_eq!(product.review_count(), before.review_count() + 1);
                    assert_eq!(product.reviews[0].comment, "Good");
                    assert_eq!(&product.reviews[1..], &before.reviews[..]);
                } else {
                    assert_eq!(product.reviews, before.reviews);
                }
            }
        }
    }

    #[test]
    fn rating_selector_wraps_both_ways() {
        let mut form = ReviewForm::default();
        assert_eq!(form.rating, 5);
        form.prev_rating();
        assert_eq!(form.rating, 1);
        form.next_rating();
        assert_eq!(form.rating, 5);
        form.next_rating();
        form.next_rating();
        assert_eq!(form.rating, 3);
    }

    #[test]
    fn rating_labels() {
        assert_eq!(rating_label(1), "1 Star");
        assert_eq!(rating_label(5), "5 Stars");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = ReviewForm {
            rating: 2,
            comment: "draft".to_string(),
        };
        form.reset();
        assert_eq!(form, ReviewForm::default());
    }
}
