//! Activity log panel
//!
//! Shows the tail of the in-memory log buffer (navigation, submissions,
//! "Added to cart" lines). Toggled with `l`.

use crate::logging::LogEntry;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Rows the panel takes, including borders
pub const HEIGHT: u16 = 8;

/// One log line: "[12:04:31] INFO  session: Navigate home -> details"
pub fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        short_target(&entry.target),
        entry.message
    )
}

/// Last path segment of a tracing target: "techshop::session" -> "session"
fn short_target(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

pub fn render(f: &mut Frame, area: Rect, entries: &[LogEntry], theme: &Theme) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(Span::styled(
                format_log_entry(entry),
                Style::default().fg(theme.log_level_color(entry.level)),
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(false))
            .title(" Activity "),
    );

    f.render_widget(list, area);
}
