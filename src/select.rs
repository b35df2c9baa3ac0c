//! Searchable select primitive
//!
//! The list the switcher configures: substring filtering against the raw
//! input, a focused option, and the behavior flags the host honors.

/// Option with a stable key used for matching and identity
pub trait SelectOption {
    fn option_value(&self) -> &str;
}

/// Why the input value changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// The user edited the text
    InputChange,
    /// An option was chosen and the input was reset
    SetValue,
    InputBlur,
    MenuClose,
}

/// Host-facing configuration of the select list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectBehavior {
    pub menu_is_open: bool,
    pub is_clearable: bool,
    pub auto_focus: bool,
    pub escape_clears_value: bool,
    pub placeholder: &'static str,
}

/// Options whose value contains the trimmed input, ignoring case
pub fn filter_options<'a, T: SelectOption>(options: &'a [T], input: &str) -> Vec<&'a T> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return options.iter().collect();
    }

    options
        .iter()
        .filter(|option| option.option_value().to_lowercase().contains(&needle))
        .collect()
}

/// Focus and scroll position within the filtered options
#[derive(Debug, Clone, Default)]
pub struct SelectState {
    focused: usize,
    scroll_offset: usize,
}

impl SelectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus the first option again, e.g. after the input changed
    pub fn reset(&mut self) {
        self.focused = 0;
        self.scroll_offset = 0;
    }

    pub fn move_down(&mut self, len: usize) {
        if self.focused < len.saturating_sub(1) {
            self.focused += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.focused > 0 {
            self.focused -= 1;
        }
    }

    /// Focused index clamped to `len`, `None` when there are no options
    pub fn focused_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.focused.min(len - 1))
        }
    }

    pub fn focused<'a, T>(&self, options: &[&'a T]) -> Option<&'a T> {
        self.focused_index(options.len()).map(|idx| options[idx])
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Keep the focused option inside a window of `visible_height` rows
    pub fn update_scroll(&mut self, len: usize, visible_height: usize) {
        let Some(focused) = self.focused_index(len) else {
            self.scroll_offset = 0;
            return;
        };
        if visible_height == 0 {
            return;
        }

        if focused < self.scroll_offset {
            self.scroll_offset = focused;
        } else if focused >= self.scroll_offset + visible_height {
            self.scroll_offset = focused + 1 - visible_height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str);

    impl SelectOption for Item {
        fn option_value(&self) -> &str {
            self.0
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item("Workloads: Pods"),
            Item("Workloads: Deployments"),
            Item("Network: Services"),
        ]
    }

    fn values<'a>(options: &[&'a Item]) -> Vec<&'a str> {
        options.iter().map(|item| item.0).collect()
    }

    #[test]
    fn test_empty_input_keeps_everything() {
        let items = items();
        assert_eq!(filter_options(&items, "").len(), 3);
        assert_eq!(filter_options(&items, "  ").len(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let items = items();
        assert_eq!(
            values(&filter_options(&items, "WORKLOADS")),
            vec!["Workloads: Pods", "Workloads: Deployments"]
        );
        assert_eq!(values(&filter_options(&items, "vice")), vec!["Network: Services"]);
        assert!(filter_options(&items, "nodes").is_empty());
    }

    #[test]
    fn test_filter_trims_input() {
        let items = items();
        assert_eq!(values(&filter_options(&items, " pods ")), vec!["Workloads: Pods"]);
    }

    #[test]
    fn test_focus_movement_is_bounded() {
        let mut state = SelectState::new();
        state.move_up();
        assert_eq!(state.focused_index(3), Some(0));

        state.move_down(3);
        state.move_down(3);
        state.move_down(3);
        assert_eq!(state.focused_index(3), Some(2));

        state.reset();
        assert_eq!(state.focused_index(3), Some(0));
    }

    #[test]
    fn test_focus_clamps_to_shrunk_list() {
        let mut state = SelectState::new();
        state.move_down(5);
        state.move_down(5);
        assert_eq!(state.focused_index(1), Some(0));
        assert_eq!(state.focused_index(0), None);

        let items = items();
        let filtered = filter_options(&items, "network");
        assert_eq!(state.focused(&filtered).map(|item| item.0), Some("Network: Services"));
    }

    #[test]
    fn test_scroll_follows_focus() {
        let mut state = SelectState::new();
        for _ in 0..5 {
            state.move_down(10);
        }
        state.update_scroll(10, 3);
        assert_eq!(state.scroll_offset(), 3);

        for _ in 0..5 {
            state.move_up();
        }
        state.update_scroll(10, 3);
        assert_eq!(state.scroll_offset(), 0);
    }
}
