// Seed data for the catalog
//
// The built-in fixture is what the shop shows out of the box. A JSON file with
// the same shape (an array of products) can replace it via --fixture or the
// TECHSHOP_FIXTURE environment variable.

use super::{Catalog, Product, Review};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::Path;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Literal dates below are all valid
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn review(user: &str, rating: u8, comment: &str, on: NaiveDate) -> Review {
    Review {
        user: user.to_string(),
        rating,
        comment: comment.to_string(),
        date: on,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The built-in three-product catalog
pub fn default_catalog() -> Catalog {
    Catalog::new(vec![
        Product {
            id: 1,
            name: "Luxury Ergonomic Office Chair".to_string(),
            price: 499.99,
            image: "https://placehold.co/600x400/1e3a8a/bfdbfe?text=Office+Chair".to_string(),
            description: "Experience ultimate comfort and productivity with this premium \
                ergonomic chair designed for long hours. Features fully adjustable lumbar \
                support and breathable, high-tension mesh fabric."
                .to_string(),
            features: strings(&[
                "Fully Adjustable Lumbar Support",
                "Breathable Mesh Fabric",
                "4D Armrests",
                "Tilt Lock Mechanism",
            ]),
            rating: 4.5,
            reviews: vec![
                review(
                    "Alice C.",
                    5,
                    "Best chair I've ever owned. Worth the investment!",
                    date(2024, 9, 10),
                ),
                review(
                    "Bob F.",
                    4,
                    "Very comfortable, but assembly took a while. Great quality once done.",
                    date(2024, 9, 5),
                ),
            ],
        },
        Product {
            id: 2,
            name: "Smart Wi-Fi Coffee Maker".to_string(),
            price: 129.00,
            image: "https://placehold.co/600x400/b45309/fff7ed?text=Coffee+Maker".to_string(),
            description: "Brew your perfect cup from your phone. Program schedules, customize \
                strength, and enjoy fresh coffee every morning with the integrated grinder."
                .to_string(),
            features: strings(&[
                "Wi-Fi Enabled Scheduling",
                "12-Cup Glass Carafe",
                "Integrated Burr Grinder",
                "Keep-Warm Function",
            ]),
            rating: 4.8,
            reviews: vec![
                review(
                    "Charlie D.",
                    5,
                    "Simple to use and makes great coffee. Love the remote start!",
                    date(2024, 9, 20),
                ),
                review(
                    "Eve L.",
                    5,
                    "A game changer for early mornings. Highly recommend.",
                    date(2024, 9, 18),
                ),
            ],
        },
        Product {
            id: 3,
            name: "Noise Cancelling Headphones".to_string(),
            price: 279.50,
            image: "https://placehold.co/600x400/0f172a/94a3b8?text=Headphones".to_string(),
            description: "Immerse yourself in pure sound with industry-leading noise \
                cancellation technology and unparalleled comfort for long listening sessions."
                .to_string(),
            features: strings(&[
                "50-Hour Battery Life",
                "Over-Ear Design",
                "Crisp Hi-Res Audio",
                "USB-C Charging",
            ]),
            rating: 4.2,
            reviews: vec![
                review(
                    "Frank M.",
                    4,
                    "Incredible sound quality and solid noise cancellation.",
                    date(2024, 10, 1),
                ),
                review(
                    "Grace P.",
                    5,
                    "Perfect for flights and working remotely. Lightweight too.",
                    date(2024, 9, 25),
                ),
            ],
        },
    ])
}

/// Parse a catalog from JSON text (an array of products)
pub fn parse(json: &str) -> Result<Catalog> {
    let products: Vec<Product> =
        serde_json::from_str(json).context("Fixture is not a valid product list")?;
    validate(&products)?;
    Ok(Catalog::new(products))
}

/// Load a catalog from a JSON fixture file
pub fn load(path: &Path) -> Result<Catalog> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture {}", path.display()))?;
    let catalog = parse(&contents).with_context(|| format!("Invalid fixture {}", path.display()))?;
    tracing::info!(
        "Loaded {} product(s) from fixture {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Resolve the seed catalog: a fixture file if one is configured, else the built-in set
pub fn seed(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => load(path),
        None => Ok(default_catalog()),
    }
}

fn validate(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::new();
    for product in products {
        if !seen.insert(product.id) {
            bail!("duplicate product id {}", product.id);
        }
        if !product.price.is_finite() {
            bail!("product {} has no valid price", product.id);
        }
        if product.price < 0.0 {
            bail!("product {} has a negative price", product.id);
        }
        if !(0.0..=5.0).contains(&product.rating) {
            bail!("product {} has a rating outside 0-5", product.id);
        }
        if let Some(r) = product.reviews.iter().find(|r| !(1..=5).contains(&r.rating)) {
            bail!(
                "product {} has a review by {} rated {}",
                product.id,
                r.user,
                r.rating
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_three_products_with_two_reviews_each() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 3);
        for product in catalog.products() {
            assert_eq!(product.review_count(), 2);
        }
        assert_eq!(catalog.find(2).unwrap().name, "Smart Wi-Fi Coffee Maker");
    }

    #[test]
    fn default_catalog_passes_validation() {
        let products: Vec<Product> = default_catalog()
            .products()
            .iter()
            .map(|p| (**p).clone())
            .collect();
        assert!(validate(&products).is_ok());
    }

    #[test]
    fn parse_reads_dates_and_optional_fields() {
        let json = r#"[
            {"id": 7, "name": "Desk Lamp", "price": 19.5, "image": "lamp.png",
             "description": "Bright", "rating": 3.5,
             "reviews": [{"user": "Ann", "rating": 3, "comment": "Ok", "date": "2024-01-02"}]}
        ]"#;
        let catalog = parse(json).unwrap();
        let lamp = catalog.find(7).unwrap();
        assert!(lamp.features.is_empty());
        assert_eq!(lamp.reviews[0].date.to_string(), "2024-01-02");
    }

    #[test]
    fn parse_rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "name": "A", "price": 1.0, "image": "", "description": "", "rating": 1.0},
            {"id": 1, "name": "B", "price": 2.0, "image": "", "description": "", "rating": 2.0}
        ]"#;
        let err = parse(json).unwrap_err();
        assert!(err.to_string().contains("duplicate product id 1"));
    }

    #[test]
    fn parse_rejects_out_of_range_review_rating() {
        let json = r#"[
            {"id": 1, "name": "A", "price": 1.0, "image": "", "description": "", "rating": 1.0,
             "reviews": [{"user": "X", "rating": 9, "comment": "c", "date": "2024-01-01"}]}
        ]"#;
        assert!(parse(json).is_err());
    }

    #[test]
    fn parse_rejects_negative_price() {
        let json = r#"[
            {"id": 4, "name": "A", "price": -0.5, "image": "", "description": "", "rating": 1.0}
        ]"#;
        let err = parse(json).unwrap_err();
        assert_eq!(err.to_string(), "product 4 has a negative price");
    }

    #[test]
    fn parse_rejects_product_rating_above_five() {
        let json = r#"[
            {"id": 5, "name": "A", "price": 1.0, "image": "", "description": "", "rating": 5.5}
        ]"#;
        let err = parse(json).unwrap_err();
        assert_eq!(err.to_string(), "product 5 has a rating outside 0-5");
    }

    #[test]
    fn validate_rejects_nan_price() {
        let mut product = default_catalog().find(1).unwrap().as_ref().clone();
        product.price = f64::NAN;
        let err = validate(&[product]).unwrap_err();
        assert_eq!(err.to_string(), "product 1 has no valid price");
    }

    #[test]
    fn seed_without_path_uses_builtin() {
        assert_eq!(seed(None).unwrap(), default_catalog());
    }
}
