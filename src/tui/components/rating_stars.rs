// Star rating glyphs
//
// Whole stars for the integer part, one half star for any fraction, empty
// stars for the rest, followed by the numeric rating.

use crate::tui::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

const FULL: &str = "★";
const HALF: &str = "⯨";
const EMPTY: &str = "☆";

/// Counts of (full, half, empty) stars for a 0-5 rating
pub fn star_counts(rating: f64) -> (usize, usize, usize) {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let half = usize::from(rating.fract() != 0.0);
    (full, half, 5 - full - half)
}

/// Plain-text stars, e.g. "★★★★⯨"
pub fn stars_text(rating: f64) -> String {
    let (full, half, empty) = star_counts(rating);
    format!("{}{}{}", FULL.repeat(full), HALF.repeat(half), EMPTY.repeat(empty))
}

/// Styled stars plus the rating with one decimal
pub fn spans(rating: f64, theme: &Theme) -> Vec<Span<'static>> {
    let (full, half, empty) = star_counts(rating);
    let star = Style::default().fg(theme.star);
    vec![
        Span::styled(FULL.repeat(full), star),
        Span::styled(HALF.repeat(half), star),
        Span::styled(EMPTY.repeat(empty), Style::default().fg(theme.star_empty)),
        Span::styled(
            format!(" {:.1}", rating),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_rating_gets_one_half_star() {
        assert_eq!(star_counts(4.5), (4, 1, 0));
        assert_eq!(star_counts(4.2), (4, 1, 0));
        assert_eq!(star_counts(3.0), (3, 0, 2));
    }

    #[test]
    fn counts_always_total_five() {
        for tenths in 0..=50 {
            let (f, h, e) = star_counts(tenths as f64 / 10.0);
            assert_eq!(f + h + e, 5);
        }
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(star_counts(7.0), (5, 0, 0));
        assert_eq!(star_counts(-1.0), (0, 0, 5));
    }

    #[test]
    fn text_form() {
        assert_eq!(stars_text(2.0), "★★☆☆☆");
    }
}
