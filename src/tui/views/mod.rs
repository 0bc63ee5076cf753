// Views module - screen-level rendering logic
//
// Each view fills the content slot between the title bar and the footer:
// - Home: featured product list
// - Details: one product with its actions
// - Reviews: review form plus the product's reviews
// - NotFound: stale selection fallback
//
// The session decides which screen applies; this module only dispatches.

mod details;
mod home;
mod not_found;
mod reviews;

pub use reviews::max_scroll as max_reviews_scroll;

use super::app::App;
use crate::session::Screen;
use crate::tui::components::{logs_panel, status_bar, title_bar};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(6)];
    if app.show_logs {
        constraints.push(Constraint::Length(logs_panel::HEIGHT));
    }
    constraints.push(Constraint::Length(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    title_bar::render(f, chunks[0], app);

    let content = chunks[1];
    match app.session.screen() {
        Screen::Home { products } => home::render(f, content, app, products),
        Screen::Details { product } => details::render(f, content, app, product),
        Screen::Reviews {
            product,
            form,
            notice,
        } => reviews::render(f, content, app, product, form, notice),
        Screen::NotFound => not_found::render(f, content, app),
    }

    if app.show_logs {
        let entries = app.log_buffer.recent(logs_panel::HEIGHT.saturating_sub(2) as usize);
        logs_panel::render(f, chunks[2], &entries, &app.theme);
    }

    status_bar::render(f, chunks[chunks.len() - 1], app);
}
