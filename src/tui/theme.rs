//! Theme and styling definitions
//!
//! This module provides a centralized place for all color and style definitions.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // Header colors
    pub header_context: Color,
    pub header_path: Color,
    pub header_namespace: Color,
    pub header_namespace_all: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Switcher colors
    pub switcher_border: Color,
    pub switcher_selected: Color,
    pub switcher_selected_bg: Color, // Background color for focused option
    pub match_highlight: Color,
    pub command_prompt: Color,

    // Footer colors
    pub footer_key: Color,
    pub footer_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Header colors
            header_context: Color::Yellow,
            header_path: Color::Cyan,
            header_namespace: Color::Yellow,
            header_namespace_all: Color::Green,

            // Text colors
            text_primary: Color::White,
            text_secondary: Color::Gray,

            // Switcher colors
            switcher_border: Color::Cyan,
            switcher_selected: Color::Blue,
            switcher_selected_bg: Color::DarkGray,
            match_highlight: Color::Yellow,
            command_prompt: Color::Yellow,

            // Footer colors
            footer_key: Color::Yellow,
            footer_text: Color::White,
        }
    }
}

impl Theme {
    // Helper methods for common style combinations

    pub fn header_context_style(&self) -> Style {
        Style::default()
            .fg(self.header_context)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_namespace_style(&self, is_all: bool) -> Style {
        Style::default()
            .fg(if is_all {
                self.header_namespace_all
            } else {
                self.header_namespace
            })
            .add_modifier(Modifier::BOLD)
    }

    pub fn switcher_selected_style(&self) -> Style {
        Style::default()
            .fg(self.switcher_selected)
            .bg(self.switcher_selected_bg)
    }

    /// Emphasis for the part of a label matching the search
    pub fn match_style(&self) -> Style {
        Style::default()
            .fg(self.match_highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default().fg(self.footer_key)
    }
}
