// Reviews view - review form, notice banner and the product's reviews
//
// The review list scrolls with PageUp/PageDown; newest reviews come first.

use crate::catalog::{Product, Review};
use crate::session::{Notice, ReviewForm};
use crate::tui::app::App;
use crate::tui::components::{notice, rating_stars, review_editor};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const EMPTY_MESSAGE: &str = "No reviews yet. Be the first to share your thoughts!";

pub fn render(
    f: &mut Frame,
    area: Rect,
    app: &App,
    product: &Product,
    form: &ReviewForm,
    current: Option<&Notice>,
) {
    let mut constraints = vec![Constraint::Length(review_editor::FORM_HEIGHT)];
    if current.is_some() {
        constraints.push(Constraint::Length(notice::HEIGHT));
    }
    constraints.push(Constraint::Min(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    review_editor::render(f, chunks[0], form, app.review_focus, &app.theme);
    if let Some(current) = current {
        notice::render(f, chunks[1], current, &app.theme);
    }
    render_review_list(f, chunks[chunks.len() - 1], app, product);
}

/// Rows one review takes besides its comment: the header and a spacer
const REVIEW_CHROME_LINES: usize = 2;

/// Number of lines the review list renders for `product`
pub fn line_count(product: &Product) -> usize {
    product
        .reviews
        .iter()
        .map(|review| REVIEW_CHROME_LINES + review.comment.lines().count())
        .sum()
}

/// Furthest the review list can scroll while keeping its last line visible
pub fn max_scroll(product: &Product) -> u16 {
    u16::try_from(line_count(product).saturating_sub(1)).unwrap_or(u16::MAX)
}

fn review_lines<'a>(review: &'a Review, theme: &Theme) -> Vec<Line<'a>> {
    let stars = rating_stars::stars_text(f64::from(review.rating));
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                review.user.as_str(),
                Style::default()
                    .fg(theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(stars, Style::default().fg(theme.star)),
            Span::raw("  "),
            Span::styled(
                review.date.format("%Y-%m-%d").to_string(),
                Style::default().fg(theme.muted),
            ),
        ]),
    ];
    lines.extend(
        review
            .comment
            .lines()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(theme.foreground)))),
    );
    lines.push(Line::raw(""));
    lines
}

fn render_review_list(f: &mut Frame, area: Rect, app: &App, product: &Product) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(false))
        .title(format!(
            " All Customer Reviews ({}) ",
            product.review_count()
        ));

    if product.reviews.is_empty() {
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::ITALIC),
            )
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = product
        .reviews
        .iter()
        .flat_map(|review| review_lines(review, theme))
        .collect();

    let scroll = app.reviews_scroll.min(max_scroll(product));

    let list = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    f.render_widget(list, area);
}
