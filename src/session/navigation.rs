// Navigation state machine
//
// Home ──select──▶ Details(id) ──reviews──▶ Reviews(id)
//  ▲                  │  ▲                      │
//  └──────back────────┘  └────────back──────────┘
//
// `Home` is reachable from every route and always drops the selection.

use crate::catalog::ProductId;

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Details(ProductId),
    Reviews(ProductId),
}

/// A navigation request from the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    SelectProduct(ProductId),
    ViewReviews,
    Back,
    Home,
}

impl Route {
    /// Product the route refers to, if any
    pub fn product_id(self) -> Option<ProductId> {
        match self {
            Route::Home => None,
            Route::Details(id) | Route::Reviews(id) => Some(id),
        }
    }

    /// Next route for `nav`, or `None` if the request does not apply here
    pub fn next(self, nav: Nav) -> Option<Route> {
        match (self, nav) {
            (_, Nav::Home) => Some(Route::Home),
            (Route::Home, Nav::SelectProduct(id)) => Some(Route::Details(id)),
            (Route::Details(id), Nav::ViewReviews) => Some(Route::Reviews(id)),
            (Route::Details(_), Nav::Back) => Some(Route::Home),
            (Route::Reviews(id), Nav::Back) => Some(Route::Details(id)),
            (Route::Home, Nav::ViewReviews | Nav::Back)
            | (Route::Details(_) | Route::Reviews(_), Nav::SelectProduct(_))
            | (Route::Reviews(_), Nav::ViewReviews) => None,
        }
    }

    /// Short name for logs
    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Details(_) => "details",
            Route::Reviews(_) => "reviews",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_route_is_home() {
        assert_eq!(Route::default(), Route::Home);
    }

    #[test]
    fn forward_and_back() {
        let details = Route::Home.next(Nav::SelectProduct(2)).unwrap();
        assert_eq!(details, Route::Details(2));

        let reviews = details.next(Nav::ViewReviews).unwrap();
        assert_eq!(reviews, Route::Reviews(2));

        assert_eq!(reviews.next(Nav::Back), Some(Route::Details(2)));
        assert_eq!(details.next(Nav::Back), Some(Route::Home));
    }

    #[test]
    fn home_is_reachable_from_everywhere() {
        for route in [Route::Home, Route::Details(1), Route::Reviews(3)] {
            assert_eq!(route.next(Nav::Home), Some(Route::Home));
        }
    }

    #[test]
    fn inapplicable_requests_are_ignored() {
        assert_eq!(Route::Home.next(Nav::Back), None);
        assert_eq!(Route::Home.next(Nav::ViewReviews), None);
        assert_eq!(Route::Reviews(1).next(Nav::ViewReviews), None);
        assert_eq!(Route::Details(1).next(Nav::SelectProduct(2)), None);
    }

    #[test]
    fn product_id_follows_route() {
        assert_eq!(Route::Home.product_id(), None);
        assert_eq!(Route::Details(4).product_id(), Some(4));
        assert_eq!(Route::Reviews(5).product_id(), Some(5));
    }
}
