//! Row-breaking cursor shared by every fit-rows pass.

use layout_util::{ItemBox, LayoutContext};

/// A row that was completed because the next item did not fit behind it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClosedRow {
    /// Index of the completed row.
    pub index: usize,
    /// Accumulated `outer_width + gutter` of its items.
    pub width: f32,
}

/// Outcome of advancing the cursor over one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    /// Left edge before any row offset is applied.
    pub x: f32,
    /// Top edge of the item's row.
    pub y: f32,
    /// Row the item landed in.
    pub row: usize,
    /// True when nothing precedes the item in its row.
    pub opens_row: bool,
    /// Set when this item wrapped and thereby completed the previous row.
    pub closed: Option<ClosedRow>,
}

/// Cursor state threaded through a single pass over the items.
///
/// A pass owns its state; two passes over the same items with fresh states make exactly the
/// same row decisions.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PackingState {
    /// Advance accumulated in the open row.
    x: f32,
    /// Top of the open row.
    y: f32,
    /// Largest bottom edge seen so far, across all rows.
    max_y: f32,
    /// Index of the open row.
    current_row: usize,
}

impl PackingState {
    /// Cursor at the container origin, on row 0.
    #[inline]
    pub const fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            max_y: 0.0,
            current_row: 0,
        }
    }

    /// Place `item` behind the previous one, wrapping first if it would overflow.
    ///
    /// The first item of a row is always accepted, however wide it is, so no item is ever
    /// dropped. A wrapped row starts below the tallest bottom edge of every earlier row.
    pub fn advance(&mut self, item: ItemBox, context: LayoutContext) -> Step {
        let advance = context.advance_of(item);
        let mut closed = None;
        if self.x != 0.0 && advance + self.x > context.row_capacity() {
            closed = Some(ClosedRow {
                index: self.current_row,
                width: self.x,
            });
            self.current_row += 1;
            self.x = 0.0;
            self.y = self.max_y;
        }
        let step = Step {
            x: self.x,
            y: self.y,
            row: self.current_row,
            opens_row: self.x == 0.0,
            closed,
        };
        self.max_y = self.max_y.max(self.y + item.outer_height);
        self.x += advance;
        step
    }

    /// Accumulated advance of the row still open.
    #[inline]
    pub const fn open_row_width(&self) -> f32 {
        self.x
    }

    /// Index of the row still open.
    #[inline]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    /// Largest bottom edge placed so far.
    #[inline]
    pub const fn content_height(&self) -> f32 {
        self.max_y
    }
}
