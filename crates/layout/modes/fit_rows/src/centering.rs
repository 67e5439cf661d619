//! Centered fit-rows mode.
//!
//! A row's offset depends on its total width, which is only known once the item that
//! wraps (or the end of the input) is reached. The first pass therefore runs the cursor
//! purely to measure row widths, and the second pass replays the identical row decisions
//! with the finished offsets applied.

use layout_util::{ItemBox, LayoutContext, Packing, PackingStrategy};
use log::debug;

use crate::cursor::PackingState;
use crate::rows::place_rows;

/// Shift that centers a row of `row_width` inside `capacity`.
///
/// Not clamped: a lone item wider than the container gets a negative offset and overhangs
/// both edges equally.
#[inline]
fn centering_offset(capacity: f32, row_width: f32) -> f32 {
    (capacity - row_width) / 2.0
}

/// Measurement pass: one centering offset per row, indexed by row.
fn measure_row_offsets(items: &[ItemBox], context: LayoutContext) -> Vec<f32> {
    let capacity = context.row_capacity();
    let mut state = PackingState::new();
    let mut offsets: Vec<f32> = Vec::new();
    for item in items.iter().copied() {
        let step = state.advance(item, context);
        if let Some(closed) = step.closed
            && let Some(slot) = offsets.get_mut(closed.index)
        {
            *slot = centering_offset(capacity, closed.width);
        }
        // Zero-advance items leave the cursor at the row start; one slot per row still.
        if step.opens_row && offsets.len() <= step.row {
            offsets.push(0.0);
        }
    }
    // The last row is never closed by a wrap; finish it from the open width.
    if let Some(last) = offsets.get_mut(state.current_row()) {
        *last = centering_offset(capacity, state.open_row_width());
    }
    offsets
}

/// Pack `items` into rows and center every row within the container.
pub fn layout_centered(items: &[ItemBox], context: LayoutContext) -> Packing {
    let offsets = measure_row_offsets(items, context);
    debug!(
        target: "layout::fit_rows",
        "[CENTERED] items={} container={:.3} gutter={:.3} row_offsets={:?}",
        items.len(),
        context.container_inner_width,
        context.gutter,
        offsets
    );
    place_rows(items, context, &offsets)
}

/// [`PackingStrategy`] for the centered mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CenteredRows;

impl CenteredRows {
    /// Mode name used in configuration.
    pub const NAME: &'static str = "centeredFitRows";
}

impl PackingStrategy for CenteredRows {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn pack(&self, items: &[ItemBox], context: LayoutContext) -> Packing {
        layout_centered(items, context)
    }
}
