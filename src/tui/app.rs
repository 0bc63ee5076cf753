// TUI application state
//
// Wraps the storefront session with the presentation-only state the terminal
// needs: cursor and focus positions, theme, the activity log toggle.

use super::components::{DetailAction, DetailActions, ProductList, ReviewEditor, ReviewFocus};
use super::input::InputHandler;
use super::theme::{Theme, ThemeKind};
use super::traits::{Handled, Interactive};
use super::views::max_reviews_scroll;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::session::{Screen, Session};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Which screen is showing, without borrowing the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Details,
    Reviews,
    NotFound,
}

impl From<&Screen<'_>> for View {
    fn from(screen: &Screen<'_>) -> Self {
        match screen {
            Screen::Home { .. } => View::Home,
            Screen::Details { .. } => View::Details,
            Screen::Reviews { .. } => View::Reviews,
            Screen::NotFound => View::NotFound,
        }
    }
}

/// Main application state for the TUI
pub struct App {
    /// Catalog, route, selection and review form
    pub session: Session,

    pub theme: Theme,

    /// Shop name for title and footer
    pub shop_name: String,

    /// Home screen cursor
    pub product_list: ProductList,

    /// Detail screen focus
    pub detail_actions: DetailActions,

    /// Reviews screen focus
    pub review_focus: ReviewFocus,

    /// Scroll offset of the review list
    pub reviews_scroll: u16,

    /// Log buffer for the activity panel
    pub log_buffer: LogBuffer,

    /// Whether the activity panel is visible
    pub show_logs: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    input_handler: InputHandler,
}

impl App {
    pub fn new(session: Session, log_buffer: LogBuffer) -> Self {
        Self {
            session,
            theme: Theme::default(),
            shop_name: "Tech Shop".to_string(),
            product_list: ProductList::new(),
            detail_actions: DetailActions::default(),
            review_focus: ReviewFocus::default(),
            reviews_scroll: 0,
            log_buffer,
            show_logs: false,
            should_quit: false,
            input_handler: InputHandler::default(),
        }
    }

    /// Create app state with theme and shop name taken from config
    pub fn with_config(session: Session, log_buffer: LogBuffer, config: &Config) -> Self {
        let mut app = Self::new(session, log_buffer);
        app.theme = ThemeKind::from_name(&config.theme).theme();
        app.shop_name = config.shop_name.clone();
        app
    }

    pub fn view(&self) -> View {
        View::from(&self.session.screen())
    }

    /// True while keys should go straight into the comment box
    pub fn is_typing(&self) -> bool {
        self.view() == View::Reviews && self.review_focus == ReviewFocus::Comment
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Periodic tick: expire notices
    pub fn tick(&mut self, now: Instant) {
        self.session.tick(now);
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    // ─── Navigation ──────────────────────────────────────────

    pub fn go_home(&mut self) {
        self.session.go_home();
    }

    /// Open the product under the home cursor
    pub fn open_selected_product(&mut self) {
        let id = self
            .session
            .catalog()
            .products()
            .get(self.product_list.selected)
            .map(|p| p.id);
        if let Some(id) = id {
            if self.session.select_product(id) {
                self.detail_actions.reset();
            }
        }
    }

    pub fn open_reviews(&mut self) {
        if self.session.view_reviews() {
            self.review_focus = ReviewFocus::default();
            self.reviews_scroll = 0;
        }
    }

    pub fn back(&mut self) {
        if self.session.back() {
            self.detail_actions.reset();
        }
    }

    // ─── Screen actions ──────────────────────────────────────

    /// Activate the focused detail-screen action
    pub fn activate_detail_action(&mut self) {
        match self.detail_actions.focused {
            DetailAction::AddToCart => self.session.add_to_cart(),
            DetailAction::ViewReviews | DetailAction::ReviewCount => self.open_reviews(),
        }
    }

    /// Post the review form; the outcome shows up as the session notice
    pub fn submit_review(&mut self) {
        if self.session.submit_review().is_ok() {
            self.review_focus = ReviewFocus::default();
            self.reviews_scroll = 0;
        }
    }

    pub fn scroll_reviews_up(&mut self) {
        self.reviews_scroll = self.reviews_scroll.saturating_sub(4);
    }

    /// Scroll down, stopping once the last review line reaches the top
    pub fn scroll_reviews_down(&mut self) {
        let max = self.session.selection().map_or(0, |p| max_reviews_scroll(p));
        self.reviews_scroll = self.reviews_scroll.saturating_add(4).min(max);
    }

    // ─── Component dispatch ──────────────────────────────────

    /// Route a key to the component that owns focus on the current screen
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.view() {
            View::Home => {
                self.product_list
                    .sync(self.session.catalog().products().len());
                self.product_list.handle_key(key)
            }
            View::Details => self.detail_actions.handle_key(key),
            View::Reviews => ReviewEditor {
                focus: &mut self.review_focus,
                form: self.session.form_mut(),
            }
            .handle_key(key),
            View::NotFound => Handled::No,
        }
    }

    /// Key hints for the focused component
    pub fn focus_hint(&self) -> &'static str {
        match self.view() {
            View::Home => self.product_list.focus_hint(),
            View::Details => self.detail_actions.focus_hint(),
            View::Reviews => self.review_focus.hint(),
            View::NotFound => "Enter:go home",
        }
    }
}
