/// Width breakpoints for layout decisions.
///
/// Keeps the column thresholds in one place instead of scattered through views.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: single column, short footer
    Compact,
    /// 60-109 cols: single column, full footer
    Normal,
    /// 110+ cols: detail screen splits into two columns
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=109 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(self, min: Breakpoint) -> bool {
        self >= min
    }
}
