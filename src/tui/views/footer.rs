//! Footer view rendering

use crate::tui::keybindings::KeyHint;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render key hints separated by bars
pub fn render_footer(f: &mut Frame, area: Rect, hints: &[KeyHint], theme: &Theme) {
    let mut spans = Vec::new();

    for (idx, hint) in hints.iter().enumerate() {
        // Add separator before segment (except first)
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(hint.key, theme.footer_key_style()));
        spans.push(Span::styled(
            format!(" {}", hint.label),
            Style::default().fg(theme.footer_text),
        ));
    }

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
