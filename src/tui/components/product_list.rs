//! Product list component for the home screen
//!
//! Owns only the cursor. Products come from the session each frame.

use super::formatters::{format_price, truncate};
use super::rating_stars;
use crate::catalog::Product;
use crate::tui::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct ProductList {
    /// Highlighted row
    pub selected: usize,
    /// Number of products last synced
    len: usize,
}

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync the product count, clamping the cursor
    pub fn sync(&mut self, len: usize) {
        self.len = len;
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, products: &[Arc<Product>], theme: &Theme) {
        let name_width = area.width.saturating_sub(8) as usize;

        let items: Vec<ListItem> = products
            .iter()
            .map(|product| {
                let name = Line::from(vec![
                    Span::styled(
                        " NEW ",
                        Style::default()
                            .bg(theme.badge_bg)
                            .fg(theme.badge_fg)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        truncate(&product.name, name_width),
                        Style::default()
                            .fg(theme.foreground)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]);

                let mut details = vec![Span::raw("      ")];
                details.extend(rating_stars::spans(product.rating, theme));
                details.push(Span::raw("   "));
                details.push(Span::styled(
                    format_price(product.price),
                    Style::default().fg(theme.price).add_modifier(Modifier::BOLD),
                ));

                ListItem::new(vec![name, Line::from(details), Line::raw("")])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(theme.border_style(true))
                    .title(" Discover the latest in technology and comfort "),
            )
            .highlight_style(theme.selected_style())
            .highlight_symbol("▶ ");

        let mut state = ListState::default().with_selected(Some(self.selected));
        f.render_stateful_widget(list, area, &mut state);
    }

    /// Keybind hints for the footer while this has focus
    pub fn focus_hint(&self) -> &'static str {
        "↑↓:browse  Enter:view details"
    }
}

impl Interactive for ProductList {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Handled::Yes
            }
            KeyCode::PageUp => {
                self.selected = 0;
                Handled::Yes
            }
            KeyCode::PageDown => {
                self.selected = self.len.saturating_sub(1);
                Handled::Yes
            }
            _ => Handled::No,
        }
    }
}
