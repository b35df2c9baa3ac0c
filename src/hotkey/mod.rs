//! Global hotkey handling
//!
//! The host delivers every key press to a [`KeyEventDispatcher`]. The
//! [`HotkeyGate`] subscribes to it and opens the resource switcher when the
//! platform's activation chord is pressed outside of editable fields.

mod dispatcher;
mod event;
mod gate;
mod platform;

pub use dispatcher::{KeyEventDispatcher, KeyListener, ListenerId};
pub use event::{EventTarget, KeyEvent};
pub use gate::{Chord, HotkeyGate};
pub use platform::{Platform, PlatformSetting, navigator_platform};
