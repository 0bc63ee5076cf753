// Text formatters
//
// Shared formatting utilities for prices and width-limited labels.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a price with a dollar sign and two decimals
///
/// # Examples
/// ```ignore
/// assert_eq!(format_price(129.0), "$129.00");
/// ```
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// "(N Reviews)" affordance text
pub fn format_review_count(count: usize) -> String {
    format!("({} Reviews)", count)
}

/// Truncate to a display width, adding an ellipsis when cut
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
