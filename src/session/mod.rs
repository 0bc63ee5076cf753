// Session state - catalog, route, selection and the review form
//
// Everything the storefront knows lives in one `Session` owned by the TUI app.
// The selection is a snapshot of a product, not a live reference into the
// catalog: after every catalog change it is looked up again by id, and if the
// id is gone the session reports `Screen::NotFound`.

pub mod navigation;
pub mod notice;
pub mod review;

pub use navigation::{Nav, Route};
pub use notice::{Notice, NoticeKind, Notices};
pub use review::{ReviewForm, ValidationError};

use crate::catalog::{Catalog, Product, ProductId};
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// What the renderer should draw, derived from the session on demand
#[derive(Debug, Clone, Copy)]
pub enum Screen<'a> {
    Home {
        products: &'a [Arc<Product>],
    },
    Details {
        product: &'a Product,
    },
    Reviews {
        product: &'a Product,
        form: &'a ReviewForm,
        notice: Option<&'a Notice>,
    },
    /// The route points at a product that is not in the catalog
    NotFound,
}

impl Screen<'_> {
    /// Heading for the title bar
    pub fn title(&self) -> String {
        match self {
            Screen::Home { .. } => "Featured Products".to_string(),
            Screen::Details { product } => product.name.clone(),
            Screen::Reviews { product, .. } => format!("Reviews for {}", product.name),
            Screen::NotFound => "Product not found".to_string(),
        }
    }
}

/// One shopper's session
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    route: Route,
    selection: Option<Arc<Product>>,
    form: ReviewForm,
    notices: Notices,
}

impl Session {
    pub fn with_notice_ttl(catalog: Catalog, ttl: Duration) -> Self {
        Self {
            catalog,
            route: Route::Home,
            selection: None,
            form: ReviewForm::default(),
            notices: Notices::new(ttl),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn selection(&self) -> Option<&Arc<Product>> {
        self.selection.as_ref()
    }

    pub fn form_mut(&mut self) -> &mut ReviewForm {
        &mut self.form
    }

    /// Apply a navigation request. Returns false if it did not apply here.
    pub fn navigate(&mut self, nav: Nav) -> bool {
        let Some(next) = self.route.next(nav) else {
            tracing::debug!("Ignoring {:?} on {}", nav, self.route.name());
            return false;
        };

        match nav {
            Nav::SelectProduct(id) => self.selection = self.catalog.find(id),
            Nav::ViewReviews => {
                // Each visit starts with a fresh form
                self.form.reset();
                self.notices.reset();
            }
            Nav::Home | Nav::Back => {}
        }
        // Home never carries a selection, however it was reached
        if next == Route::Home {
            self.selection = None;
        }

        tracing::info!("Navigate {} -> {}", self.route.name(), next.name());
        self.route = next;
        true
    }

    pub fn select_product(&mut self, id: ProductId) -> bool {
        self.navigate(Nav::SelectProduct(id))
    }

    pub fn view_reviews(&mut self) -> bool {
        self.navigate(Nav::ViewReviews)
    }

    pub fn back(&mut self) -> bool {
        self.navigate(Nav::Back)
    }

    pub fn go_home(&mut self) -> bool {
        self.navigate(Nav::Home)
    }

    /// The "Add to Cart" button. There is no cart; this only logs.
    pub fn add_to_cart(&self) {
        if let (Route::Details(_), Some(product)) = (self.route, &self.selection) {
            tracing::info!("Added to cart: {}", product.name);
        }
    }

    /// Submit the review form for the selected product using the current time
    pub fn submit_review(&mut self) -> Result<(), ValidationError> {
        self.submit_review_at(Instant::now(), Utc::now().date_naive())
    }

    /// Submit the review form as of `now` / `today`
    ///
    /// On success the catalog is replaced, the selection is refreshed, the
    /// form resets and a success notice is shown. On failure only the notice
    /// changes.
    pub fn submit_review_at(
        &mut self,
        now: Instant,
        today: NaiveDate,
    ) -> Result<(), ValidationError> {
        let Route::Reviews(id) = self.route else {
            tracing::debug!("Review submitted outside the reviews screen, ignoring");
            return Ok(());
        };
        if self.selection.is_none() {
            tracing::debug!(product_id = id, "Review submitted for missing product, ignoring");
            return Ok(());
        }

        match review::submit(id, self.form.rating, &self.form.comment, &self.catalog, today) {
            Ok(catalog) => {
                self.replace_catalog(catalog);
                self.form.reset();
                self.notices.success(review::SUCCESS_MESSAGE, now);
                tracing::info!(product_id = id, "Review submitted");
                Ok(())
            }
            Err(e) => {
                self.notices.error(e.to_string());
                tracing::warn!(
                    product_id = id,
                    empty_comment = e.empty_comment,
                    rating_out_of_range = e.rating_out_of_range,
                    "Review rejected"
                );
                Err(e)
            }
        }
    }

    /// Advance timers. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notices.tick(now)
    }

    /// Swap in a new catalog snapshot and re-resolve the selection against it
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.refresh_selection();
    }

    fn refresh_selection(&mut self) {
        self.selection = self
            .route
            .product_id()
            .and_then(|id| self.catalog.find(id));
        if self.route.product_id().is_some() && self.selection.is_none() {
            tracing::warn!("Selected product is no longer in the catalog");
        }
    }

    /// Derive the screen to draw
    pub fn screen(&self) -> Screen<'_> {
        match (self.route, self.selection.as_deref()) {
            (Route::Home, _) => Screen::Home {
                products: self.catalog.products(),
            },
            (Route::Details(_), Some(product)) => Screen::Details { product },
            (Route::Reviews(_), Some(product)) => Screen::Reviews {
                product,
                form: &self.form,
                notice: self.notices.current(),
            },
            (Route::Details(_) | Route::Reviews(_), None) => Screen::NotFound,
        }
    }
}

// Shortcuts for assertions; the TUI reads these through `screen()`
#[cfg(test)]
impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_notice_ttl(catalog, notice::DEFAULT_NOTICE_TTL)
    }

    pub fn form(&self) -> &ReviewForm {
        &self.form
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notices.current()
    }
}
