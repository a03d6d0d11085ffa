//! Per-group row hover state.
//!
//! DESIGN
//! ======
//! Hover is keyed by row position, not member, and is owned by the rendering
//! component. After a transfer the index is left as-is, so the row that slides
//! into the hovered slot keeps the move button visible.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

/// Which row of one group, if any, is under the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowHover {
    index: Option<usize>,
}

impl RowHover {
    pub fn enter(&mut self, index: usize) {
        self.index = Some(index);
    }

    pub fn leave(&mut self) {
        self.index = None;
    }

    #[must_use]
    pub fn index(self) -> Option<usize> {
        self.index
    }

    #[must_use]
    pub fn is_hovered(self, index: usize) -> bool {
        self.index == Some(index)
    }
}
