//! Review form editor: rating selector, comment box and submit button
//!
//! The form values live in the session; this component only borrows them
//! alongside the focus state kept by the app.

use crate::session::review::{rating_label, RATING_CHOICES};
use crate::session::ReviewForm;
use crate::tui::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const PLACEHOLDER: &str = "Share your experience with this product...";

/// Which part of the form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewFocus {
    #[default]
    Rating,
    Comment,
    Submit,
}

impl ReviewFocus {
    pub fn next(self) -> Self {
        match self {
            ReviewFocus::Rating => ReviewFocus::Comment,
            ReviewFocus::Comment => ReviewFocus::Submit,
            ReviewFocus::Submit => ReviewFocus::Rating,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ReviewFocus::Rating => ReviewFocus::Submit,
            ReviewFocus::Comment => ReviewFocus::Rating,
            ReviewFocus::Submit => ReviewFocus::Comment,
        }
    }

    /// Footer hint while this part has focus
    pub fn hint(self) -> &'static str {
        match self {
            ReviewFocus::Rating => "←→/1-5:rating  Tab:next  Ctrl+S:post  Esc:back",
            ReviewFocus::Comment => "type your review  Tab:next  Ctrl+S:post  Esc:back",
            ReviewFocus::Submit => "Enter:post review  Tab:next  Esc:back",
        }
    }
}

/// Short-lived view over the form and its focus, built per key event
pub struct ReviewEditor<'a> {
    pub focus: &'a mut ReviewFocus,
    pub form: &'a mut ReviewForm,
}

impl Interactive for ReviewEditor<'_> {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Tab => {
                *self.focus = self.focus.next();
                return Handled::Yes;
            }
            KeyCode::BackTab => {
                *self.focus = self.focus.prev();
                return Handled::Yes;
            }
            _ => {}
        }

        match *self.focus {
            ReviewFocus::Rating => match key.code {
                KeyCode::Up | KeyCode::Left | KeyCode::Char('+') | KeyCode::Char('k') => {
                    self.form.prev_rating();
                    Handled::Yes
                }
                KeyCode::Down | KeyCode::Right | KeyCode::Char('-') | KeyCode::Char('j') => {
                    self.form.next_rating();
                    Handled::Yes
                }
                KeyCode::Char(c @ '1'..='5') => {
                    self.form.rating = c as u8 - b'0';
                    Handled::Yes
                }
                KeyCode::Enter => {
                    *self.focus = ReviewFocus::Comment;
                    Handled::Yes
                }
                _ => Handled::No,
            },
            ReviewFocus::Comment => match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.form.push_char(c);
                    Handled::Yes
                }
                KeyCode::Backspace => {
                    self.form.backspace();
                    Handled::Yes
                }
                KeyCode::Enter => {
                    self.form.push_char('\n');
                    Handled::Yes
                }
                _ => Handled::No,
            },
            ReviewFocus::Submit => Handled::No,
        }
    }
}

/// Height the form needs, excluding the notice banner
pub const FORM_HEIGHT: u16 = 11;

/// Render the form into `area`
pub fn render(f: &mut Frame, area: Rect, form: &ReviewForm, focus: ReviewFocus, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(true))
        .title(Span::styled(
            " Submit Your Review ",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // rating label
            Constraint::Length(1), // rating choices
            Constraint::Length(1), // comment label
            Constraint::Min(3),    // comment box
            Constraint::Length(1), // submit
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new("Your Rating").style(Style::default().fg(theme.muted)),
        rows[0],
    );

    let mut choices = Vec::new();
    for rating in RATING_CHOICES {
        let style = if rating == form.rating {
            let style = Style::default().fg(theme.star).add_modifier(Modifier::BOLD);
            if focus == ReviewFocus::Rating {
                style.bg(theme.selected_bg)
            } else {
                style
            }
        } else {
            Style::default().fg(theme.muted)
        };
        choices.push(Span::styled(format!(" {} ", rating_label(rating)), style));
        choices.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(choices)), rows[1]);

    f.render_widget(
        Paragraph::new("Your Comment").style(Style::default().fg(theme.muted)),
        rows[2],
    );

    let comment = if form.comment.is_empty() && focus != ReviewFocus::Comment {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(theme.muted))
    } else {
        let cursor = if focus == ReviewFocus::Comment { "▏" } else { "" };
        Paragraph::new(format!("{}{}", form.comment, cursor))
            .style(Style::default().fg(theme.foreground))
    };
    f.render_widget(
        comment.wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(theme.border_style(focus == ReviewFocus::Comment)),
        ),
        rows[3],
    );

    let submit_style = if focus == ReviewFocus::Submit {
        Style::default()
            .bg(theme.accent)
            .fg(theme.badge_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
    };
    f.render_widget(
        Paragraph::new(Span::styled(" ➤ Post Review ", submit_style)),
        rows[4],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(editor: &mut ReviewEditor<'_>, code: KeyCode) -> Handled {
        editor.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_goes_into_comment_only_when_focused() {
        let mut focus = ReviewFocus::Rating;
        let mut form = ReviewForm::default();
        let mut editor = ReviewEditor {
            focus: &mut focus,
            form: &mut form,
        };

        assert_eq!(press(&mut editor, KeyCode::Char('x')), Handled::No);
        press(&mut editor, KeyCode::Tab);
        for c in "Hi!".chars() {
            press(&mut editor, KeyCode::Char(c));
        }
        press(&mut editor, KeyCode::Backspace);
        press(&mut editor, KeyCode::Enter);

        assert_eq!(form.comment, "Hi\n");
        assert_eq!(focus, ReviewFocus::Comment);
    }

    #[test]
    fn digits_set_rating_directly() {
        let mut focus = ReviewFocus::Rating;
        let mut form = ReviewForm::default();
        let mut editor = ReviewEditor {
            focus: &mut focus,
            form: &mut form,
        };

        press(&mut editor, KeyCode::Char('2'));
        assert_eq!(editor.form.rating, 2);
        press(&mut editor, KeyCode::Left);
        assert_eq!(editor.form.rating, 3);
        press(&mut editor, KeyCode::Char('9'));
        assert_eq!(editor.form.rating, 3);
    }

    #[test]
    fn control_chars_are_not_typed() {
        let mut focus = ReviewFocus::Comment;
        let mut form = ReviewForm::default();
        let mut editor = ReviewEditor {
            focus: &mut focus,
            form: &mut form,
        };

        let handled = editor.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(handled, Handled::No);
        assert!(form.comment.is_empty());
    }

    #[test]
    fn focus_cycles() {
        assert_eq!(ReviewFocus::Submit.next(), ReviewFocus::Rating);
        assert_eq!(ReviewFocus::Rating.prev(), ReviewFocus::Submit);
    }
}
