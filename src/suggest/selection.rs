//! Selection state management for suggestions
//!
//! Down wraps from the last item to the first. Up from the first item drops
//! the highlight entirely instead of wrapping to the bottom, so Enter falls
//! back to submitting the typed query.

/// Highlighted suggestion, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    /// Highlight a specific index (mouse hover), ignoring out-of-range values
    pub fn select_index(&mut self, index: usize, suggestion_count: usize) {
        if index < suggestion_count {
            self.selected_index = Some(index);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }

    pub fn get_selected(&self) -> Option<usize> {
        self.selected_index
    }

    /// Index in the `-1` means "no highlight" convention
    pub fn as_signed(&self) -> i64 {
        self.selected_index.map_or(-1, |idx| idx as i64)
    }

    /// Move down, wrapping to the first suggestion after the last
    pub fn navigate_next(&mut self, suggestion_count: usize) {
        if suggestion_count == 0 {
            self.selected_index = None;
            return;
        }

        self.selected_index = match self.selected_index {
            Some(current) if current + 1 < suggestion_count => Some(current + 1),
            Some(_) => Some(0),
            None => Some(0),
        };
    }

    /// Move up; from the first suggestion (or none) the highlight is dropped
    pub fn navigate_previous(&mut self, suggestion_count: usize) {
        if suggestion_count == 0 {
            self.selected_index = None;
            return;
        }

        self.selected_index = match self.selected_index {
            Some(current) if current > 0 => Some((current - 1).min(suggestion_count - 1)),
            _ => None,
        };
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
