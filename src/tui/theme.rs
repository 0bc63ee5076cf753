// Theme system for the TUI
//
// Two built-in palettes, selected by name from config.

use crate::logging::LogLevel;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Parse a theme name from config; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "dark" => ThemeKind::Dark,
            other => {
                tracing::warn!("Unknown theme '{}', using dark", other);
                ThemeKind::Dark
            }
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Resolved colors for every UI element
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,

    // Title and footer
    pub title: Color,
    pub status_bar: Color,

    // Selection
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Storefront
    pub accent: Color,
    pub price: Color,
    pub star: Color,
    pub star_empty: Color,
    pub badge_bg: Color,
    pub badge_fg: Color,
    pub muted: Color,

    // Notices
    pub success: Color,
    pub error: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Gray,
            border_focused: Color::LightBlue,
            border_type: BorderType::Rounded,

            title: Color::LightBlue,
            status_bar: Color::Gray,

            selected_bg: Color::DarkGray,
            selected_fg: Color::White,

            accent: Color::LightBlue,
            price: Color::LightMagenta,
            star: Color::Yellow,
            star_empty: Color::DarkGray,
            badge_bg: Color::Blue,
            badge_fg: Color::White,
            muted: Color::Gray,

            success: Color::Green,
            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            border_type: BorderType::Rounded,

            title: Color::Blue,
            status_bar: Color::DarkGray,

            selected_bg: Color::LightBlue,
            selected_fg: Color::Black,

            accent: Color::Blue,
            price: Color::Rgb(67, 56, 202), // Indigo
            star: Color::Rgb(202, 138, 4),  // Dark yellow
            star_empty: Color::Gray,
            badge_bg: Color::Blue,
            badge_fg: Color::White,
            muted: Color::DarkGray,

            success: Color::Green,
            error: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11), // Dark goldenrod
            log_info: Color::Blue,
            log_debug: Color::Gray,
        }
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn log_level_color(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug | LogLevel::Trace => self.log_debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_are_case_insensitive() {
        assert_eq!(ThemeKind::from_name("Light"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name(" DARK "), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name("neon"), ThemeKind::Dark);
    }
}
