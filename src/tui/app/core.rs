//! Application state and main TUI logic

use crate::config::Config;
use crate::hotkey::{HotkeyGate, KeyEventDispatcher, Platform};
use crate::host::OverlayContent;
use crate::select::SelectState;
use crate::store::{CustomResourceType, Namespace, ObjectStore};
use crate::switcher::{SwitcherContext, SwitcherSession};
use crate::tui::Theme;
use crate::tui::host::{ChannelOverlay, NamespaceScope, NamespaceSelector, OverlayRequest, Router};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedReceiver;

/// Main application state
pub struct App {
    // Core data
    pub(crate) context: String,
    pub(crate) platform: Platform,
    pub(crate) theme: Theme,

    // Host services shared with the switcher
    pub(crate) switcher_context: SwitcherContext,
    pub(crate) router: Arc<Router>,
    pub(crate) namespaces: Arc<NamespaceSelector>,

    // Hotkey plumbing
    pub(crate) dispatcher: KeyEventDispatcher,
    pub(crate) gate: HotkeyGate,
    pub(crate) overlay_rx: UnboundedReceiver<OverlayRequest>,

    // Mounted overlay
    pub(crate) session: Option<SwitcherSession>,
    pub(crate) select: SelectState,
}

impl App {
    pub fn new(
        context: String,
        namespace_store: Arc<dyn ObjectStore<Namespace>>,
        crd_store: Arc<dyn ObjectStore<CustomResourceType>>,
        config: &Config,
        theme: Theme,
    ) -> Self {
        let platform = config.hotkey.platform.resolve();
        let (overlay, overlay_rx) = ChannelOverlay::channel();
        let overlay = Arc::new(overlay);
        let router = Arc::new(Router::new());
        let namespaces = Arc::new(NamespaceSelector::new());

        let switcher_context = SwitcherContext::new(
            namespace_store,
            namespaces.clone(),
            crd_store,
            router.clone(),
            overlay.clone(),
        )
        .with_settings(config.switcher.settings());

        tracing::debug!(
            "App created for context {} with hotkey {}",
            context,
            platform.chord_label()
        );

        Self {
            context,
            platform,
            theme,
            switcher_context,
            router,
            namespaces,
            dispatcher: KeyEventDispatcher::new(),
            gate: HotkeyGate::new(platform, overlay),
            overlay_rx,
            session: None,
            select: SelectState::new(),
        }
    }

    /// Start listening for the switcher hotkey
    pub fn activate(&mut self) {
        self.gate.register(&mut self.dispatcher);
    }

    /// Stop listening for the switcher hotkey and unmount the overlay
    pub fn deactivate(&mut self) {
        self.gate.unregister(&mut self.dispatcher);
        self.session = None;
    }

    pub fn is_active(&self) -> bool {
        self.gate.is_registered()
    }

    /// Apply overlay requests queued by the hotkey and by switcher actions
    pub fn process_overlay_requests(&mut self) {
        while let Ok(request) = self.overlay_rx.try_recv() {
            match request {
                OverlayRequest::Open(OverlayContent::ResourceSwitcher) => {
                    // Reopening remounts with a fresh search
                    self.session = Some(SwitcherSession::open(self.switcher_context.clone()));
                    self.select.reset();
                }
                OverlayRequest::Close => {
                    self.session = None;
                }
            }
        }
    }

    /// Advance timers. Returns true when a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.session
            .as_mut()
            .is_some_and(|session| session.tick(now))
    }

    /// When [`App::tick`] next has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.as_ref().and_then(SwitcherSession::next_deadline)
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn current_path(&self) -> String {
        self.router.current_path()
    }

    pub fn namespace_scope(&self) -> NamespaceScope {
        self.namespaces.scope()
    }

    pub fn is_switcher_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&SwitcherSession> {
        self.session.as_ref()
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("context", &self.context)
            .field("platform", &self.platform)
            .field("gate", &self.gate)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
