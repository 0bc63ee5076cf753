// Input handling with configurable key behaviors
//
// - State-change keys trigger once per press (Enter, Tab, action letters)
// - Repeatable keys trigger on press, then repeat while held (arrows)
//
// Text typed into the review comment bypasses this entirely so fast typing
// never drops repeated letters.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of a held state-change key
const STATE_CHANGE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Defines how a key should behave when pressed/held
#[derive(Debug, Clone, Copy)]
pub enum KeyBehavior {
    /// Trigger only on state change (press → release)
    StateChange,

    /// Trigger on press, then repeat after initial delay
    Repeatable {
        initial_delay: Duration,
        repeat_interval: Duration,
    },
}

impl KeyBehavior {
    /// Standard navigation key behavior (like arrow keys)
    pub fn navigation() -> Self {
        Self::Repeatable {
            initial_delay: Duration::from_millis(400),
            repeat_interval: Duration::from_millis(60),
        }
    }
}

#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    press_started: Option<Instant>,
    last_triggered: Option<Instant>,
}

/// Tracks pressed keys and decides whether each press should act
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
    key_behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            key_states: HashMap::new(),
            key_behaviors: HashMap::new(),
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.key_behaviors.insert(*key, behavior);
        }
    }

    /// Handle a key press. Returns true if the action should be triggered.
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.handle_key_press_at(key, Instant::now())
    }

    fn handle_key_press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .key_behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let state = self.key_states.entry(key).or_default();

        if !state.is_pressed {
            state.is_pressed = true;
            state.press_started = Some(now);
            state.last_triggered = Some(now);
            return true;
        }

        let (Some(press_start), Some(last)) = (state.press_started, state.last_triggered) else {
            return false;
        };

        let fire = match behavior {
            // Terminals without release events report every press as "held";
            // let it through once the debounce window has passed
            KeyBehavior::StateChange => now.duration_since(last) >= STATE_CHANGE_DEBOUNCE,
            KeyBehavior::Repeatable {
                initial_delay,
                repeat_interval,
            } => {
                now.duration_since(press_start) >= initial_delay
                    && now.duration_since(last) >= repeat_interval
            }
        };
        if fire {
            state.last_triggered = Some(now);
        }
        fire
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            *state = KeyState::default();
        }
    }

    /// Storefront key configuration
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();

        handler.configure_keys(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::Left,
                KeyCode::Right,
                KeyCode::Char('j'),
                KeyCode::Char('k'),
                KeyCode::PageUp,
                KeyCode::PageDown,
            ],
            KeyBehavior::navigation(),
        );

        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_change_triggers_once_per_press() {
        let mut handler = InputHandler::new();
        let t0 = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Enter, t0));
        assert!(!handler.handle_key_press_at(KeyCode::Enter, t0 + Duration::from_millis(10)));

        handler.handle_key_release(KeyCode::Enter);
        assert!(handler.handle_key_press_at(KeyCode::Enter, t0 + Duration::from_millis(20)));
    }

    #[test]
    fn state_change_lets_through_after_debounce_without_release() {
        let mut handler = InputHandler::new();
        let t0 = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Char('r'), t0));
        assert!(handler.handle_key_press_at(KeyCode::Char('r'), t0 + Duration::from_millis(200)));
    }

    #[test]
    fn repeatable_waits_for_initial_delay() {
        let mut handler = InputHandler::with_default_config();
        let t0 = Instant::now();

        assert!(handler.handle_key_press_at(KeyCode::Down, t0));
        assert!(!handler.handle_key_press_at(KeyCode::Down, t0 + Duration::from_millis(100)));
        assert!(handler.handle_key_press_at(KeyCode::Down, t0 + Duration::from_millis(450)));
        assert!(!handler.handle_key_press_at(KeyCode::Down, t0 + Duration::from_millis(470)));
        assert!(handler.handle_key_press_at(KeyCode::Down, t0 + Duration::from_millis(520)));
    }
}
