//! Terminal implementations of the host contracts
//!
//! Overlay requests go through a channel that the event loop drains, so a
//! listener or an action can ask for the overlay to open or close without
//! re-entering the app.

use crate::host::{NamespaceSelection, Navigator, OverlayContent, OverlayHost};
use std::sync::RwLock;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Path shown before the user navigates anywhere
pub const DEFAULT_PATH: &str = "/overview";

/// Request queued by [`ChannelOverlay`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRequest {
    Open(OverlayContent),
    Close,
}

/// Overlay host backed by an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelOverlay {
    tx: UnboundedSender<OverlayRequest>,
}

impl ChannelOverlay {
    pub fn channel() -> (Self, UnboundedReceiver<OverlayRequest>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, request: OverlayRequest) {
        if self.tx.send(request).is_err() {
            tracing::debug!("Overlay request {:?} dropped, host is gone", request);
        }
    }
}

impl OverlayHost for ChannelOverlay {
    fn open(&self, content: OverlayContent) {
        self.send(OverlayRequest::Open(content));
    }

    fn close(&self) {
        self.send(OverlayRequest::Close);
    }
}

/// Navigation sink tracking the displayed view
#[derive(Debug)]
pub struct Router {
    current: RwLock<String>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(DEFAULT_PATH.to_string()),
        }
    }

    pub fn current_path(&self) -> String {
        self.current.read().unwrap().clone()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for Router {
    fn navigate(&self, path: &str) {
        tracing::debug!("Navigating to {}", path);
        *self.current.write().unwrap() = path.to_string();
    }
}

/// Which namespaces the dashboard is scoped to
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NamespaceScope {
    #[default]
    All,
    Single(String),
}

impl std::fmt::Display for NamespaceScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamespaceScope::All => f.write_str("all"),
            NamespaceScope::Single(name) => f.write_str(name),
        }
    }
}

/// Shared active-namespace selection
#[derive(Debug, Default)]
pub struct NamespaceSelector {
    scope: RwLock<NamespaceScope>,
}

impl NamespaceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self) -> NamespaceScope {
        self.scope.read().unwrap().clone()
    }
}

impl NamespaceSelection for NamespaceSelector {
    fn select_all(&self) {
        tracing::debug!("Selecting all namespaces");
        *self.scope.write().unwrap() = NamespaceScope::All;
    }

    fn select_single(&self, name: &str) {
        tracing::debug!("Selecting namespace {}", name);
        *self.scope.write().unwrap() = NamespaceScope::Single(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_overlay_queues_requests() {
        let (overlay, mut rx) = ChannelOverlay::channel();
        overlay.open(OverlayContent::ResourceSwitcher);
        overlay.close();

        assert_eq!(
            rx.try_recv().unwrap(),
            OverlayRequest::Open(OverlayContent::ResourceSwitcher)
        );
        assert_eq!(rx.try_recv().unwrap(), OverlayRequest::Close);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_overlay_without_receiver() {
        let (overlay, rx) = ChannelOverlay::channel();
        drop(rx);
        overlay.close();
    }

    #[test]
    fn test_router_tracks_current_path() {
        let router = Router::new();
        assert_eq!(router.current_path(), DEFAULT_PATH);
        router.navigate("/pods");
        assert_eq!(router.current_path(), "/pods");
    }

    #[test]
    fn test_namespace_selector() {
        let selector = NamespaceSelector::new();
        assert_eq!(selector.scope(), NamespaceScope::All);

        selector.select_single("flux-system");
        assert_eq!(
            selector.scope(),
            NamespaceScope::Single("flux-system".to_string())
        );
        assert_eq!(selector.scope().to_string(), "flux-system");

        selector.select_all();
        assert_eq!(selector.scope().to_string(), "all");
    }
}
