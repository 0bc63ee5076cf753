// Home view - featured product list

use crate::catalog::Product;
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::sync::Arc;

pub fn render(f: &mut Frame, area: Rect, app: &App, products: &[Arc<Product>]) {
    if products.is_empty() {
        let empty = Paragraph::new("\nNo products available.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.muted))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(app.theme.border_type)
                    .border_style(app.theme.border_style(false)),
            );
        f.render_widget(empty, area);
        return;
    }

    app.product_list.render(f, area, products, &app.theme);
}
