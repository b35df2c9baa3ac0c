//! Hotkey gate
//!
//! Owns at most one dispatcher subscription. The subscription opens the
//! resource switcher on the activation chord and leaves every other key,
//! including a chord typed into an editable field, untouched.

use super::{KeyEvent, KeyEventDispatcher, ListenerId, Platform};
use crate::host::{OverlayContent, OverlayHost};
use std::sync::Arc;

/// Physical key code of the activation key
const ACTIVATION_CODE: &str = "KeyK";

/// Activation chord for a platform
///
/// Apple platforms use Command+K and reject Control; everything else uses
/// Control+K and rejects Meta. Shift, Alt, auto-repeat and events already
/// handled by another listener never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord {
    platform: Platform,
}

impl Chord {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.default_prevented()
            || event.repeat
            || event.code != ACTIVATION_CODE
            || event.targets_editable()
        {
            return false;
        }

        let (primary, secondary) = if self.platform.is_apple() {
            (event.meta_key, event.ctrl_key)
        } else {
            (event.ctrl_key, event.meta_key)
        };

        primary && !secondary && !event.shift_key && !event.alt_key
    }
}

/// Process-wide switcher hotkey listener
pub struct HotkeyGate {
    chord: Chord,
    overlay: Arc<dyn OverlayHost>,
    listener: Option<ListenerId>,
}

impl HotkeyGate {
    pub fn new(platform: Platform, overlay: Arc<dyn OverlayHost>) -> Self {
        Self {
            chord: Chord::new(platform),
            overlay,
            listener: None,
        }
    }

    pub fn chord(&self) -> Chord {
        self.chord
    }

    pub fn is_registered(&self) -> bool {
        self.listener.is_some()
    }

    /// Subscribe to `dispatcher`. No-op while already registered.
    pub fn register(&mut self, dispatcher: &mut KeyEventDispatcher) {
        if self.listener.is_some() {
            tracing::debug!("Switcher hotkey already registered");
            return;
        }

        let chord = self.chord;
        let overlay = Arc::clone(&self.overlay);
        let id = dispatcher.add_listener(Box::new(move |event: &mut KeyEvent| {
            if !chord.matches(event) {
                return;
            }

            event.prevent_default();
            event.stop_propagation();

            tracing::debug!("Switcher hotkey pressed, opening overlay");
            overlay.open(OverlayContent::ResourceSwitcher);
        }));

        self.listener = Some(id);
        tracing::debug!(
            "Registered switcher hotkey {}",
            chord.platform().chord_label()
        );
    }

    /// Remove the subscription. No-op while not registered.
    pub fn unregister(&mut self, dispatcher: &mut KeyEventDispatcher) {
        let Some(id) = self.listener.take() else {
            return;
        };

        if !dispatcher.remove_listener(id) {
            tracing::warn!("Switcher hotkey listener was already removed from the dispatcher");
        }
        tracing::debug!("Unregistered switcher hotkey");
    }
}

impl std::fmt::Debug for HotkeyGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotkeyGate")
            .field("chord", &self.chord)
            .field("listener", &self.listener)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotkey::EventTarget;
    use crate::host::MockOverlayHost;

    fn apple_chord() -> KeyEvent {
        KeyEvent::new("KeyK")
            .with_meta()
            .with_target(EventTarget::body())
    }

    fn other_chord() -> KeyEvent {
        KeyEvent::new("KeyK")
            .with_ctrl()
            .with_target(EventTarget::body())
    }

    #[test]
    fn test_apple_chord() {
        let chord = Chord::new(Platform::Apple);
        assert!(chord.matches(&apple_chord()));
        assert!(!chord.matches(&other_chord()));
        assert!(!chord.matches(&apple_chord().with_ctrl()));
    }

    #[test]
    fn test_other_chord() {
        let chord = Chord::new(Platform::Other);
        assert!(chord.matches(&other_chord()));
        assert!(!chord.matches(&apple_chord()));
        assert!(!chord.matches(&other_chord().with_meta()));
    }

    #[test]
    fn test_chord_rejects_extra_modifiers() {
        let chord = Chord::new(Platform::Other);
        assert!(!chord.matches(&other_chord().with_shift()));
        assert!(!chord.matches(&other_chord().with_alt()));
    }

    #[test]
    fn test_chord_rejects_repeat_and_handled_events() {
        let chord = Chord::new(Platform::Other);
        assert!(!chord.matches(&other_chord().with_repeat()));

        let mut handled = other_chord();
        handled.prevent_default();
        assert!(!chord.matches(&handled));
    }

    #[test]
    fn test_chord_requires_physical_k() {
        let chord = Chord::new(Platform::Other);
        let event = KeyEvent::new("KeyJ")
            .with_ctrl()
            .with_target(EventTarget::body());
        assert!(!chord.matches(&event));
    }

    #[test]
    fn test_chord_ignored_in_editable_targets() {
        let chord = Chord::new(Platform::Other);
        for target in [
            EventTarget::input(),
            EventTarget::textarea(),
            EventTarget::content_editable("DIV"),
        ] {
            let event = KeyEvent::new("KeyK").with_ctrl().with_target(target);
            assert!(!chord.matches(&event));
        }
    }

    #[test]
    fn test_chord_without_target_matches() {
        let chord = Chord::new(Platform::Other);
        assert!(chord.matches(&KeyEvent::new("KeyK").with_ctrl()));
    }

    #[test]
    fn test_match_opens_overlay_and_consumes_event() {
        let mut overlay = MockOverlayHost::new();
        overlay
            .expect_open()
            .withf(|content| *content == OverlayContent::ResourceSwitcher)
            .times(1)
            .return_const(());

        let mut dispatcher = KeyEventDispatcher::new();
        let mut gate = HotkeyGate::new(Platform::Other, Arc::new(overlay));
        gate.register(&mut dispatcher);

        let mut event = other_chord();
        dispatcher.dispatch(&mut event);
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }

    #[test]
    fn test_non_matching_event_is_left_alone() {
        let mut overlay = MockOverlayHost::new();
        overlay.expect_open().times(0);

        let mut dispatcher = KeyEventDispatcher::new();
        let mut gate = HotkeyGate::new(Platform::Other, Arc::new(overlay));
        gate.register(&mut dispatcher);

        let mut event = KeyEvent::new("KeyK").with_target(EventTarget::body());
        dispatcher.dispatch(&mut event);
        assert!(!event.default_prevented());
        assert!(!event.propagation_stopped());
    }

    #[test]
    fn test_register_twice_keeps_one_listener() {
        let mut overlay = MockOverlayHost::new();
        overlay.expect_open().times(1).return_const(());

        let mut dispatcher = KeyEventDispatcher::new();
        let mut gate = HotkeyGate::new(Platform::Other, Arc::new(overlay));
        gate.register(&mut dispatcher);
        gate.register(&mut dispatcher);
        assert_eq!(dispatcher.listener_count(), 1);

        dispatcher.dispatch(&mut other_chord());
    }

    #[test]
    fn test_unregister_is_idempotent() {
        let mut overlay = MockOverlayHost::new();
        overlay.expect_open().times(0);

        let mut dispatcher = KeyEventDispatcher::new();
        let mut gate = HotkeyGate::new(Platform::Other, Arc::new(overlay));
        gate.unregister(&mut dispatcher);

        gate.register(&mut dispatcher);
        gate.unregister(&mut dispatcher);
        gate.unregister(&mut dispatcher);
        assert!(!gate.is_registered());
        assert_eq!(dispatcher.listener_count(), 0);

        dispatcher.dispatch(&mut other_chord());
    }
}
