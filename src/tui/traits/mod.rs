//! Component traits for the TUI
//!
//! Panels that own focus or cursor state implement [`Interactive`] so the
//! key dispatcher can hand them whatever input the app itself did not claim.
//!
//! ```text
//! KeyEvent
//!    │
//!    ▼
//! App (global: Ctrl+C, q, h/F1, l)
//!    │
//!    ▼
//! Screen actions (Enter, Esc, r, a, Ctrl+S)
//!    │ if not handled
//!    ▼
//! Focused component (ProductList, DetailActions, ReviewEditor)
//! ```

mod interactive;

pub use interactive::{Handled, Interactive};
