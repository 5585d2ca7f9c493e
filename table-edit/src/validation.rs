//! The selection check run before a submit.

/// Selected vs. total data cells of a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionSummary {
    pub selected: usize,
    pub total: usize,
}

impl SelectionSummary {
    pub fn new(selected: usize, total: usize) -> Self {
        Self { selected, total }
    }

    /// Rows still missing a selection.
    pub fn missing(&self) -> usize {
        (self.total / 2).saturating_sub(self.selected)
    }

    /// Exactly one of every two data cells is selected.
    pub fn is_complete(&self) -> bool {
        self.selected * 2 == self.total
    }
}
