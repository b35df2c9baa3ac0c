//! TUI module
//!
//! Terminal host for the resource switcher, built with ratatui.

mod app;
pub mod host;
pub mod input;
pub mod keybindings;
mod theme;
pub mod views;

pub use app::*;
pub use host::{ChannelOverlay, NamespaceScope, NamespaceSelector, OverlayRequest, Router};
pub use theme::*;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Longest wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Run the TUI application
pub async fn run_tui(mut app: App) -> Result<()> {
    tracing::debug!("Initializing TUI");

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.activate();
    tracing::debug!("TUI initialized, entering main loop");

    let result = event_loop(&mut terminal, &mut app).await;

    tracing::debug!("TUI shutting down");
    app.deactivate();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        // Wake up in time for a pending highlight update
        let timeout = app
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .map_or(POLL_INTERVAL, |remaining| remaining.min(POLL_INTERVAL));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    if let Some(true) = app.handle_key(key) {
                        break;
                    }
                }
            }
        }

        app.process_overlay_requests();
        app.tick(Instant::now());

        // Let preload tasks make progress on the runtime
        tokio::task::yield_now().await;
    }

    Ok(())
}
