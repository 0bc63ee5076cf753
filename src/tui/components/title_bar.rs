// Title bar component
//
// Shop name, the current screen's heading, a back arrow where "back" applies
// and the home shortcut on the right.

use crate::tui::app::{App, View};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let back = match app.view() {
        View::Details | View::Reviews => "← ",
        View::Home | View::NotFound => "",
    };
    let title_text = format!(
        " 🛒 {} ──── {}{}",
        app.shop_name,
        back,
        app.session.screen().title()
    );

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(" ⌂ Home [h] ").right_aligned()),
        );

    f.render_widget(title, area);
}
