//! DOM-style key events
//!
//! Key events carry the physical key code (`KeyK`, not the shifted
//! character), modifier flags, and the element that had focus. Listeners mark
//! events handled with [`KeyEvent::prevent_default`] and stop later listeners
//! with [`KeyEvent::stop_propagation`].

/// The element a key event was delivered to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTarget {
    pub tag_name: String,
    pub is_content_editable: bool,
}

impl EventTarget {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            is_content_editable: false,
        }
    }

    pub fn body() -> Self {
        Self::new("BODY")
    }

    pub fn input() -> Self {
        Self::new("INPUT")
    }

    pub fn textarea() -> Self {
        Self::new("TEXTAREA")
    }

    pub fn content_editable(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            is_content_editable: true,
        }
    }

    /// Whether typing into this element should never trigger shortcuts
    pub fn is_editable(&self) -> bool {
        self.is_content_editable || self.tag_name == "INPUT" || self.tag_name == "TEXTAREA"
    }
}

/// A keydown event
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyEvent {
    /// Physical key code, e.g. "KeyK", "Enter", "ArrowDown"
    pub code: String,
    pub meta_key: bool,
    pub ctrl_key: bool,
    pub shift_key: bool,
    pub alt_key: bool,
    /// Auto-repeat from a held key
    pub repeat: bool,
    /// Focused element; `None` when focus is not on an element
    pub target: Option<EventTarget>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl KeyEvent {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    pub fn with_repeat(mut self) -> Self {
        self.repeat = true;
        self
    }

    pub fn with_target(mut self, target: EventTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Mark the event as handled
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Prevent listeners after the current one from seeing the event
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Whether the event was delivered to an editable element
    pub fn targets_editable(&self) -> bool {
        self.target.as_ref().is_some_and(EventTarget::is_editable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editable_targets() {
        assert!(EventTarget::input().is_editable());
        assert!(EventTarget::textarea().is_editable());
        assert!(EventTarget::content_editable("DIV").is_editable());
        assert!(!EventTarget::body().is_editable());
        assert!(!EventTarget::new("BUTTON").is_editable());
    }

    #[test]
    fn test_event_without_target_is_not_editable() {
        let event = KeyEvent::new("KeyK");
        assert!(!event.targets_editable());
    }

    #[test]
    fn test_handled_flags() {
        let mut event = KeyEvent::new("KeyK");
        assert!(!event.default_prevented());
        event.prevent_default();
        event.stop_propagation();
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }
}
