//! Focusable action buttons on the product detail screen

use crate::tui::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// The three clickable things on the detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailAction {
    #[default]
    AddToCart,
    ViewReviews,
    /// The "(N Reviews)" link next to the rating
    ReviewCount,
}

impl DetailAction {
    const ORDER: [DetailAction; 3] = [
        DetailAction::AddToCart,
        DetailAction::ViewReviews,
        DetailAction::ReviewCount,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|&a| a == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Focus state for the detail screen's actions
#[derive(Debug, Default)]
pub struct DetailActions {
    pub focused: DetailAction,
}

impl DetailActions {
    pub fn reset(&mut self) {
        self.focused = DetailAction::default();
    }

    fn button(
        &self,
        label: &str,
        action: DetailAction,
        color: Color,
        theme: &Theme,
    ) -> Span<'static> {
        let style = if self.focused == action {
            Style::default()
                .bg(color)
                .fg(theme.badge_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        };
        Span::styled(format!(" {} ", label), style)
    }

    /// The button row: [ Add to Cart ]  [ View Reviews ]
    pub fn buttons_line(&self, theme: &Theme) -> Line<'static> {
        Line::from(vec![
            self.button("🛒 Add to Cart", DetailAction::AddToCart, theme.success, theme),
            Span::raw("   "),
            self.button("View Reviews", DetailAction::ViewReviews, theme.accent, theme),
        ])
    }

    /// Style for the "(N Reviews)" link
    pub fn review_count_style(&self, theme: &Theme) -> Style {
        let base = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::UNDERLINED);
        if self.focused == DetailAction::ReviewCount {
            base.bg(theme.selected_bg).add_modifier(Modifier::BOLD)
        } else {
            base
        }
    }

    /// Keybind hints for the footer while this has focus
    pub fn focus_hint(&self) -> &'static str {
        "Tab:focus  Enter:activate  r:reviews  a:add to cart  Esc:back"
    }
}

impl Interactive for DetailActions {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Down => {
                self.focused = self.focused.next();
                Handled::Yes
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused = self.focused.prev();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn focus_cycles_through_all_actions() {
        let mut actions = DetailActions::default();
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);

        actions.handle_key(tab);
        assert_eq!(actions.focused, DetailAction::ViewReviews);
        actions.handle_key(tab);
        assert_eq!(actions.focused, DetailAction::ReviewCount);
        actions.handle_key(tab);
        assert_eq!(actions.focused, DetailAction::AddToCart);

        actions.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(actions.focused, DetailAction::ReviewCount);
    }
}
