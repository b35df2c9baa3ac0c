//! Event handling for the application
//!
//! Every key press is first offered to the hotkey dispatcher as a DOM-style
//! event. Whatever the listeners leave unhandled goes to the switcher while
//! it is open, or to the dashboard otherwise.

use super::core::App;
use crate::hotkey::EventTarget;
use crate::select::{InputAction, filter_options};
use crate::tui::input::to_key_event;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

impl App {
    /// Main keyboard event handler
    ///
    /// Returns Some(true) to quit, None for normal continuation
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<bool> {
        self.handle_key_at(key, Instant::now())
    }

    /// [`App::handle_key`] with an explicit clock for the search debounce
    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> Option<bool> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(true);
        }

        // The search input has focus while the switcher is mounted
        let target = if self.is_switcher_open() {
            EventTarget::input()
        } else {
            EventTarget::body()
        };
        let mut event = to_key_event(&key, target);
        self.dispatcher.dispatch(&mut event);

        let result = if event.default_prevented() {
            None
        } else if self.is_switcher_open() {
            self.handle_switcher_key(key, now);
            None
        } else {
            self.handle_dashboard_key(key)
        };

        self.process_overlay_requests();
        result
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(true),
            _ => None,
        }
    }

    fn handle_switcher_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                if !session.behavior().escape_clears_value {
                    self.switcher_context.overlay.close();
                }
            }
            KeyCode::Enter => {
                let candidates = session.candidates();
                let options = filter_options(&candidates, session.search_value());
                let focused = self.select.focused(&options);
                if !session.commit(focused) {
                    tracing::debug!("Nothing to switch to");
                }
            }
            KeyCode::Down => {
                let candidates = session.candidates();
                let len = filter_options(&candidates, session.search_value()).len();
                self.select.move_down(len);
            }
            KeyCode::Up => self.select.move_up(),
            KeyCode::Backspace => {
                let mut value = session.search_value().to_string();
                if value.pop().is_some() {
                    session.on_input_change(&value, InputAction::InputChange, now);
                    self.select.reset();
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                let mut value = session.search_value().to_string();
                value.push(c);
                session.on_input_change(&value, InputAction::InputChange, now);
                self.select.reset();
            }
            _ => {}
        }
    }
}
