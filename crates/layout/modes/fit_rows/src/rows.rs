//! Placement pass: walk the items with a fresh cursor and shift each row by a known offset.

use layout_util::{ItemBox, LayoutContext, Packing, Position, RowMetrics};
use log::trace;

use crate::cursor::{PackingState, Step};

/// Folds cursor steps into per-row metrics.
#[derive(Default)]
struct RowTracker {
    rows: Vec<RowMetrics>,
}

impl RowTracker {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    fn record(&mut self, index: usize, item: ItemBox, step: Step, offset: f32, advance: f32) {
        let bottom = step.y + item.outer_height;
        match self.rows.last_mut() {
            Some(row) if row.index == step.row => {
                row.end = index + 1;
                row.width += advance;
                row.bottom = row.bottom.max(bottom);
            }
            _ => self.rows.push(RowMetrics {
                index: step.row,
                start: index,
                end: index + 1,
                width: advance,
                offset,
                y: step.y,
                bottom,
            }),
        }
    }
}

/// Pack `items` with the fit-rows breaking rule, shifting row `n` by `row_offsets[n]`.
///
/// Rows without an entry in `row_offsets` stay unshifted, so an empty slice yields the stock
/// left-aligned layout.
pub fn place_rows(items: &[ItemBox], context: LayoutContext, row_offsets: &[f32]) -> Packing {
    let mut state = PackingState::new();
    let mut tracker = RowTracker::with_capacity(row_offsets.len());
    let mut positions = Vec::with_capacity(items.len());
    for (index, item) in items.iter().copied().enumerate() {
        let step = state.advance(item, context);
        let offset = row_offsets.get(step.row).copied().unwrap_or(0.0);
        tracker.record(index, item, step, offset, context.advance_of(item));
        positions.push(Position {
            x: step.x + offset,
            y: step.y,
        });
    }
    for row in &tracker.rows {
        trace!(
            target: "layout::fit_rows",
            "[FIT-ROWS] row {}: items=[{}..{}) width={:.3} offset={:.3} y={:.3} bottom={:.3}",
            row.index,
            row.start,
            row.end,
            row.width,
            row.offset,
            row.y,
            row.bottom
        );
    }
    Packing {
        positions,
        rows: tracker.rows,
        content_height: state.content_height(),
    }
}
