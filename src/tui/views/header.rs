//! Header view rendering

use crate::tui::host::NamespaceScope;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header with context, current view and namespace selection
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    context: &str,
    current_path: &str,
    namespace: &NamespaceScope,
    theme: &Theme,
) {
    let is_all = *namespace == NamespaceScope::All;
    let lines = vec![
        Line::from(vec![
            Span::styled("Context: ", Style::default().fg(theme.text_secondary)),
            Span::styled(context.to_string(), theme.header_context_style()),
        ]),
        Line::from(vec![
            Span::styled("View: ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                current_path.to_string(),
                Style::default().fg(theme.header_path),
            ),
        ]),
        Line::from(vec![
            Span::styled("Namespace: ", Style::default().fg(theme.text_secondary)),
            Span::styled(namespace.to_string(), theme.header_namespace_style(is_all)),
        ]),
    ];

    let header = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}
