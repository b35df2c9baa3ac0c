//! Host collaborator contracts
//!
//! The switcher core only talks to its host through these traits: a
//! navigation sink, an overlay host, and the shared namespace selection
//! context. The terminal host in [`crate::tui`] implements all of them.

/// Content the overlay host can mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayContent {
    ResourceSwitcher,
}

/// Changes the displayed view by absolute path
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Mounts and unmounts dismissible overlay content
///
/// Both operations are fire-and-forget requests; the host applies them on
/// its own schedule.
#[cfg_attr(test, mockall::automock)]
pub trait OverlayHost: Send + Sync {
    fn open(&self, content: OverlayContent);
    fn close(&self);
}

/// Active-namespace selection context owned outside the switcher
#[cfg_attr(test, mockall::automock)]
pub trait NamespaceSelection: Send + Sync {
    fn select_all(&self);
    fn select_single(&self, name: &str);
}
