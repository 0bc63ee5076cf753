// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the storefront screens

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod theme;
pub mod traits;
pub mod views;

use anyhow::{Context, Result};
use app::{App, View};
use components::ReviewFocus;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub async fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    tracing::info!("Storefront opened on {}", app.session.route().name());
    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on keyboard input and a 200ms tick. The tick is what expires
/// success notices, so it runs whether or not keys arrive.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Release → Control chords → Typing → Global → Screen → Component
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    let key = key_event.code;

    match key_event.kind {
        KeyEventKind::Release => {
            app.handle_key_release(key);
            return;
        }
        KeyEventKind::Press => {}
        _ => return,
    }

    if handle_control_chords(app, &key_event) {
        return;
    }

    // Layer: comment box swallows plain keys, undebounced. Non-text keys
    // that leave the screen still apply.
    if app.is_typing() {
        match key {
            KeyCode::Esc => app.back(),
            KeyCode::F(1) | KeyCode::Home => app.go_home(),
            _ => dispatch(app, key_event),
        }
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    if handle_screen_keys(app, &key_event) {
        return;
    }

    // Navigation keys - use state tracking for hold-to-repeat
    if app.handle_key_press(key) {
        dispatch(app, key_event);
    }
}

/// Last layer: the focused component, or nothing
fn dispatch(app: &mut App, key_event: KeyEvent) {
    if !app.dispatch_to_focused(key_event).was_handled() {
        tracing::trace!("Unhandled key {:?} on {:?}", key_event.code, app.view());
    }
}

/// Ctrl chords work everywhere, including while typing
fn handle_control_chords(app: &mut App, key_event: &KeyEvent) -> bool {
    if !key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key_event.code {
        KeyCode::Char('c') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('s') => {
            if app.view() == View::Reviews {
                app.submit_review();
            }
            true
        }
        KeyCode::Char('h') => {
            app.go_home();
            true
        }
        _ => false,
    }
}

/// Handle global keys - returns true if handled
/// Uses InputHandler for debounce (StateChange behavior = trigger once per press)
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::F(1) | KeyCode::Home | KeyCode::Char('h') => {
            if app.handle_key_press(key) {
                app.go_home();
            }
            true
        }
        KeyCode::Char('l') => {
            if app.handle_key_press(key) {
                app.toggle_logs();
            }
            true
        }
        _ => false,
    }
}

/// Per-screen action keys - returns true if handled
fn handle_screen_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;
    let view = app.view();

    match (view, key) {
        (View::Home, KeyCode::Enter) => {
            if app.handle_key_press(key) {
                app.open_selected_product();
            }
            true
        }
        (View::Details, KeyCode::Enter) => {
            if app.handle_key_press(key) {
                app.activate_detail_action();
            }
            true
        }
        (View::Details, KeyCode::Char('r')) => {
            if app.handle_key_press(key) {
                app.open_reviews();
            }
            true
        }
        (View::Details, KeyCode::Char('a')) => {
            if app.handle_key_press(key) {
                app.session.add_to_cart();
            }
            true
        }
        (View::Details, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left)
        | (View::Reviews, KeyCode::Esc | KeyCode::Backspace) => {
            if app.handle_key_press(key) {
                app.back();
            }
            true
        }
        (View::Reviews, KeyCode::Enter) if app.review_focus == ReviewFocus::Submit => {
            if app.handle_key_press(key) {
                app.submit_review();
            }
            true
        }
        (View::Reviews, KeyCode::PageUp) => {
            if app.handle_key_press(key) {
                app.scroll_reviews_up();
            }
            true
        }
        (View::Reviews, KeyCode::PageDown) => {
            if app.handle_key_press(key) {
                app.scroll_reviews_down();
            }
            true
        }
        (View::NotFound, KeyCode::Enter | KeyCode::Esc) => {
            if app.handle_key_press(key) {
                app.go_home();
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixture::default_catalog;
    use crate::catalog::Catalog;
    use crate::logging::LogBuffer;
    use crate::session::{NoticeKind, Route, Session};

    fn app() -> App {
        App::new(Session::new(default_catalog()), LogBuffer::new())
    }

    fn press(app: &mut App, code: KeyCode) {
        press_with(app, code, KeyModifiers::NONE);
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        handle_key_event(app, KeyEvent::new(code, modifiers));
        let mut release = KeyEvent::new(code, modifiers);
        release.kind = KeyEventKind::Release;
        handle_key_event(app, release);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn browse_to_reviews_and_back_home() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.route(), Route::Details(2));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session.route(), Route::Reviews(2));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.session.route(), Route::Details(2));

        press(&mut app, KeyCode::F(1));
        assert_eq!(app.session.route(), Route::Home);
        assert!(app.session.selection().is_none());
    }

    #[test]
    fn full_review_submission_by_keyboard() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));

        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Comfy all day");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);

        let product = app.session.selection().unwrap();
        assert_eq!(product.review_count(), 3);
        assert_eq!(product.reviews[0].rating, 4);
        assert_eq!(product.reviews[0].comment, "Comfy all day");
        assert_eq!(app.session.notice().unwrap().kind, NoticeKind::Success);
        assert!(app.session.form().comment.is_empty());
    }

    #[test]
    fn letters_are_typed_not_treated_as_shortcuts() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Tab);

        type_text(&mut app, "quality chair");

        assert!(!app.should_quit);
        assert_eq!(app.session.route(), Route::Reviews(1));
        assert_eq!(app.session.form().comment, "quality chair");
        assert!(!app.show_logs);
    }

    #[test]
    fn repeated_letters_are_not_debounced_while_typing() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Tab);

        // Terminals without release events send bare presses
        for _ in 0..3 {
            handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('o'), KeyModifiers::NONE));
        }
        assert_eq!(app.session.form().comment, "ooo");
    }

    #[test]
    fn home_keys_work_while_typing() {
        for home_key in [KeyCode::F(1), KeyCode::Home] {
            let mut app = app();
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Char('r'));
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "x");
            assert!(app.is_typing());

            press(&mut app, home_key);

            assert_eq!(app.session.route(), Route::Home);
            assert!(app.session.selection().is_none());
        }
    }

    #[test]
    fn backspace_while_typing_edits_comment() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "ab");

        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.session.route(), Route::Reviews(1));
        assert_eq!(app.session.form().comment, "a");
    }

    #[test]
    fn ctrl_s_posts_from_comment_box() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Solid");

        press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert_eq!(app.session.selection().unwrap().reviews[0].comment, "Solid");
    }

    #[test]
    fn empty_comment_shows_error_and_keeps_catalog() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        let before = app.session.catalog().clone();

        press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert_eq!(app.session.catalog(), &before);
        assert_eq!(app.session.notice().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn add_to_cart_key_keeps_route() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.session.route(), Route::Details(1));
    }

    #[test]
    fn not_found_enter_goes_home() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        app.session.replace_catalog(Catalog::default());
        assert_eq!(app.view(), View::NotFound);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view(), View::Home);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = self::app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Tab);
        press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
