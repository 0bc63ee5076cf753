// Details view - one product with its actions
//
// Wide terminals get the image panel beside the info column; narrower ones
// stack the image reference above it.

use crate::catalog::Product;
use crate::tui::app::App;
use crate::tui::components::formatters::{format_price, format_review_count};
use crate::tui::components::rating_stars;
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App, product: &Product) {
    let (image_area, info_area) = if Breakpoint::from_width(area.width).at_least(Breakpoint::Wide)
    {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);
        (cols[0], cols[1])
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(area);
        (rows[0], rows[1])
    };

    render_image(f, image_area, product, &app.theme);
    render_info(f, info_area, app, product);
}

/// The terminal can't show the picture, so show where it lives
fn render_image(f: &mut Frame, area: Rect, product: &Product, theme: &Theme) {
    let image = Paragraph::new(vec![
        Line::from(Span::styled("🖼", Style::default().fg(theme.accent))),
        Line::from(Span::styled(
            product.image.as_str(),
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(false))
            .title(" Image "),
    );
    f.render_widget(image, area);
}

fn render_info(f: &mut Frame, area: Rect, app: &App, product: &Product) {
    let theme = &app.theme;

    let mut rating_line = rating_stars::spans(product.rating, theme);
    rating_line.push(Span::raw("  "));
    rating_line.push(Span::styled(
        format_review_count(product.review_count()),
        app.detail_actions.review_count_style(theme),
    ));

    let mut lines = vec![
        Line::from(Span::styled(
            product.name.as_str(),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(rating_line),
        Line::from(Span::styled(
            format_price(product.price),
            Style::default().fg(theme.price).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            product.description.as_str(),
            Style::default().fg(theme.foreground),
        )),
    ];

    if !product.features.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Key Features",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )));
        for feature in &product.features {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(theme.accent)),
                Span::styled(feature.as_str(), Style::default().fg(theme.foreground)),
            ]));
        }
    }

    lines.push(Line::raw(""));
    lines.push(app.detail_actions.buttons_line(theme));

    let info = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(true))
            .title(" Details "),
    );
    f.render_widget(info, area);
}
