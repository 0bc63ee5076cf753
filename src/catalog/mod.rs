//! Catalog store - the in-memory product list for a session
//!
//! A `Catalog` is an immutable snapshot. Adding a review produces a new
//! snapshot that shares every untouched product with the old one, so any
//! reference taken from an older snapshot stays exactly as it was.

pub mod fixture;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Stable product identifier
pub type ProductId = u32;

/// Display name assigned to every review posted from the storefront
pub const GUEST_USER: &str = "Guest User";

/// A single customer review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub user: String,
    /// 1-5 inclusive
    pub rating: u8,
    pub comment: String,
    /// Serialized as YYYY-MM-DD
    pub date: NaiveDate,
}

/// A product listed in the shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    /// Image URI (shown as text in the terminal)
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Average rating in [0, 5]
    pub rating: f64,
    /// Newest first
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    /// Number of reviews, as shown on the "(N Reviews)" affordance
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Copy of this product with `review` at the front of its review list
    fn with_review(&self, review: Review) -> Self {
        let mut reviews = Vec::with_capacity(self.reviews.len() + 1);
        reviews.push(review);
        reviews.extend(self.reviews.iter().cloned());
        Self {
            reviews,
            ..self.clone()
        }
    }
}

/// Ordered, immutable snapshot of all products
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Build a catalog from products in display order
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(Arc::new).collect(),
        }
    }

    /// All products in display order
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Look up a product by id
    pub fn find(&self, id: ProductId) -> Option<Arc<Product>> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    /// Return a new snapshot with `review` prepended to product `id`
    ///
    /// Products other than `id` are shared with `self`. An unknown id yields
    /// an unchanged copy.
    pub fn append_review(&self, id: ProductId, review: Review) -> Self {
        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            tracing::debug!(product_id = id, "append_review: no such product, ignoring");
            return self.clone();
        };

        let mut products = self.products.clone();
        products[index] = Arc::new(self.products[index].with_review(review));
        Self { products }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(comment: &str) -> Review {
        Review {
            user: GUEST_USER.to_string(),
            rating: 4,
            comment: comment.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 10, 2).unwrap(),
        }
    }

    #[test]
    fn append_review_prepends_to_matching_product() {
        let catalog = fixture::default_catalog();
        let before = catalog.find(3).unwrap().review_count();

        let updated = catalog.append_review(3, review("Great"));
        let product = updated.find(3).unwrap();

        assert_eq!(product.review_count(), before + 1);
        assert_eq!(product.reviews[0].comment, "Great");
    }

    #[test]
    fn append_review_leaves_previous_snapshot_untouched() {
        let catalog = fixture::default_catalog();
        let updated = catalog.append_review(1, review("New"));

        assert_eq!(catalog.find(1).unwrap().review_count(), 2);
        assert_eq!(updated.find(1).unwrap().review_count(), 3);
    }

    #[test]
    fn append_review_shares_untouched_products() {
        let catalog = fixture::default_catalog();
        let updated = catalog.append_review(1, review("New"));

        assert!(Arc::ptr_eq(&catalog.products()[1], &updated.products()[1]));
        assert!(Arc::ptr_eq(&catalog.products()[2], &updated.products()[2]));
        assert!(!Arc::ptr_eq(&catalog.products()[0], &updated.products()[0]));
    }

    #[test]
    fn append_review_unknown_id_is_noop() {
        let catalog = fixture::default_catalog();
        let updated = catalog.append_review(99, review("Lost"));
        assert_eq!(catalog, updated);
    }

    #[test]
    fn product_order_is_preserved() {
        let catalog = fixture::default_catalog().append_review(2, review("x"));
        let ids: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
