//! Rendering logic for the application

use super::core::App;
use crate::select::filter_options;
use crate::tui::keybindings::{dashboard_hints, switcher_hints};
use crate::tui::views::{render_footer, render_header, render_switcher};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

impl App {
    /// Main render entry point
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header
                Constraint::Min(3),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(area);

        render_header(
            f,
            chunks[0],
            &self.context,
            &self.current_path(),
            &self.namespace_scope(),
            &self.theme,
        );

        let body = Paragraph::new(vec![
            Line::from(format!("Viewing {}", self.current_path())),
            Line::from(""),
            Line::from(format!(
                "Press {} to switch resource",
                self.platform.chord_label()
            )),
        ])
        .style(Style::default().fg(self.theme.text_secondary))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(body, chunks[1]);

        let hints = if self.is_switcher_open() {
            switcher_hints()
        } else {
            dashboard_hints(self.platform)
        };
        render_footer(f, chunks[2], &hints, &self.theme);

        if let Some(session) = self.session.as_ref() {
            let candidates = session.candidates();
            let options = filter_options(&candidates, session.search_value());
            render_switcher(
                f,
                area,
                session,
                &options,
                &mut self.select,
                &self.theme,
            );
        }
    }
}
