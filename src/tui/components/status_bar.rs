// Status bar component
//
// Footer line: copyright, then key hints for whatever has focus.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use chrono::{Datelike, Utc};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let copyright = format!("© {} {}", Utc::now().year(), app.shop_name);

    let status_text = if Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
        format!(
            " {} │ {}  F1:home  l:activity  q:quit",
            copyright,
            app.focus_hint()
        )
    } else {
        format!(" {} │ {}", copyright, app.focus_hint())
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
