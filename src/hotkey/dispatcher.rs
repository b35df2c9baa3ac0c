//! Key event dispatcher
//!
//! Plays the role of the window's keydown subscription list. Listeners run in
//! registration order until one stops propagation.

use super::KeyEvent;

/// Boxed keydown listener
pub type KeyListener = Box<dyn FnMut(&mut KeyEvent) + Send>;

/// Handle returned by [`KeyEventDispatcher::add_listener`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
pub struct KeyEventDispatcher {
    listeners: Vec<(ListenerId, KeyListener)>,
    next_id: u64,
}

impl KeyEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a listener; every call adds a new subscription
    pub fn add_listener(&mut self, listener: KeyListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a subscription. Returns false if `id` was not subscribed.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver an event to all listeners
    pub fn dispatch(&mut self, event: &mut KeyEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            if event.propagation_stopped() {
                break;
            }
            listener(event);
        }
    }
}

impl std::fmt::Debug for KeyEventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyEventDispatcher")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_listener(counter: &Arc<AtomicUsize>) -> KeyListener {
        let counter = Arc::clone(counter);
        Box::new(move |_event| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_dispatch_reaches_all_listeners() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut dispatcher = KeyEventDispatcher::new();
        dispatcher.add_listener(counting_listener(&counter));
        dispatcher.add_listener(counting_listener(&counter));

        dispatcher.dispatch(&mut KeyEvent::new("KeyA"));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_stop_propagation_skips_later_listeners() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut dispatcher = KeyEventDispatcher::new();
        dispatcher.add_listener(Box::new(|event| event.stop_propagation()));
        dispatcher.add_listener(counting_listener(&counter));

        dispatcher.dispatch(&mut KeyEvent::new("KeyA"));
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_remove_listener() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut dispatcher = KeyEventDispatcher::new();
        let id = dispatcher.add_listener(counting_listener(&counter));

        assert!(dispatcher.remove_listener(id));
        assert!(!dispatcher.remove_listener(id));
        assert_eq!(dispatcher.listener_count(), 0);

        dispatcher.dispatch(&mut KeyEvent::new("KeyA"));
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }
}
