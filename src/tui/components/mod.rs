// Components module - reusable UI building blocks
//
// Shell components are rendered on every screen:
// - Title bar: shop name and current heading
// - Status bar: copyright and key hints
// - Logs panel: recent activity (optional)
//
// The rest are pieces of individual screens.

pub mod detail_actions;
pub mod formatters;
pub mod logs_panel;
pub mod notice;
pub mod product_list;
pub mod rating_stars;
pub mod review_editor;
pub mod status_bar;
pub mod title_bar;

pub use detail_actions::{DetailAction, DetailActions};
pub use product_list::ProductList;
pub use review_editor::{ReviewEditor, ReviewFocus};
