//! Resource switcher overlay rendering
//!
//! Renders the switcher as a centered popup over the current view: the
//! search line, the filtered options with the matched text emphasized, and
//! the loading or empty message when there is nothing to list.

use crate::select::SelectState;
use crate::switcher::{Candidate, HighlightSegment, SwitcherSession};
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

const POPUP_MAX_HEIGHT: u16 = 20;

/// Render the switcher overlay
pub fn render_switcher(
    f: &mut Frame,
    area: Rect,
    session: &SwitcherSession,
    options: &[&Candidate],
    select: &mut SelectState,
    theme: &Theme,
) {
    let popup_width = area.width.clamp(30, 70);
    let popup_height = (options.len() as u16)
        .saturating_add(5) // Input + separator + border + loading line
        .clamp(8, POPUP_MAX_HEIGHT.min(area.height.saturating_sub(2)).max(8));

    let popup_area = centered_rect(popup_width, popup_height, area);

    // Clear the background area to make it opaque
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.switcher_border))
        .style(Style::default().fg(theme.text_primary).bg(Color::Black));
    let inner_area = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Input
            Constraint::Length(1), // Separator
            Constraint::Min(1),    // Options
        ])
        .split(inner_area);

    render_input(f, chunks[0], session, theme);

    let separator = Paragraph::new("─".repeat(chunks[1].width as usize))
        .style(Style::default().fg(theme.text_secondary));
    f.render_widget(separator, chunks[1]);

    if options.is_empty() {
        let message = if session.is_loading() {
            session.loading_message()
        } else {
            session.no_options_message()
        };
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(theme.text_secondary))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, chunks[2]);
        return;
    }

    let list_height = chunks[2].height as usize;
    select.update_scroll(options.len(), list_height);
    let focused = select.focused_index(options.len());

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .skip(select.scroll_offset())
        .take(list_height)
        .map(|(idx, candidate)| {
            let is_focused = Some(idx) == focused;
            let base = if is_focused {
                theme.switcher_selected_style()
            } else {
                Style::default().fg(theme.text_primary)
            };

            let prefix = if is_focused { "> " } else { "  " };
            let mut spans = vec![Span::styled(prefix, base)];
            spans.extend(
                session
                    .render_label(candidate.label())
                    .into_iter()
                    .map(|segment| segment_span(segment, base, theme)),
            );
            ListItem::new(Line::from(spans))
        })
        .collect();

    f.render_widget(List::new(items), chunks[2]);
}

fn render_input(f: &mut Frame, area: Rect, session: &SwitcherSession, theme: &Theme) {
    let prompt = Span::styled(
        "> ",
        Style::default()
            .fg(theme.command_prompt)
            .add_modifier(Modifier::BOLD),
    );
    let search = session.search_value();

    let mut spans = vec![prompt];
    if search.is_empty() {
        spans.push(Span::styled(
            session.behavior().placeholder,
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::DIM),
        ));
    } else {
        spans.push(Span::raw(search.to_string()));
    }
    if session.is_loading() {
        spans.push(Span::styled(
            format!("  {}", session.loading_message()),
            Style::default().fg(theme.text_secondary),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);

    let cursor_x = area
        .x
        .saturating_add(2)
        .saturating_add(search.chars().count() as u16)
        .min(area.x + area.width.saturating_sub(1));
    f.set_cursor_position(Position::new(cursor_x, area.y));
}

fn segment_span(segment: HighlightSegment, base: Style, theme: &Theme) -> Span<'static> {
    match segment {
        HighlightSegment::Plain(text) => Span::styled(text, base),
        HighlightSegment::Strong(text) => Span::styled(text, base.patch(theme.match_style())),
    }
}

/// Helper to create a centered rectangle
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_x = area.x.saturating_add(area.width.saturating_sub(width) / 2);
    let popup_y = area
        .y
        .saturating_add(area.height.saturating_sub(height) / 2);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
