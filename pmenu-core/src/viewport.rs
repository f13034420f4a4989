use std::ops::Range;

/// The window of filtered entries visible below the header row.
///
/// Derived every frame from the terminal height and the highlighted index, so
/// it never drifts from the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub offset: usize,
    pub height: usize,
}

impl Viewport {
    /// One row of `terminal_rows` is reserved for the search header.
    pub fn compute(terminal_rows: usize, filtered_len: usize, highlighted: usize) -> Self {
        let height = terminal_rows.saturating_sub(1).min(filtered_len);
        let offset = if height == 0 {
            0
        } else {
            (highlighted + 1).saturating_sub(height)
        };
        Self { offset, height }
    }

    /// Indices into the filtered view that are drawn this frame.
    pub fn rows(&self, filtered_len: usize) -> Range<usize> {
        self.offset..(self.offset + self.height).min(filtered_len)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.offset && index < self.offset + self.height
    }
}
