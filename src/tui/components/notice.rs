//! Notice banner component
//!
//! Shows the review form's current notice, green for success and red for
//! validation errors. Expiry is owned by the session; this only draws.

use crate::session::{Notice, NoticeKind};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Height the banner needs: one line of text plus borders
pub const HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, notice: &Notice, theme: &Theme) {
    let color = match notice.kind {
        NoticeKind::Success => theme.success,
        NoticeKind::Error => theme.error,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(theme.background));

    let text = Paragraph::new(notice.message.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(block);

    // Clear first so the banner sits on top of the form
    f.render_widget(Clear, area);
    f.render_widget(text, area);
}
