//! Packing results and the strategy trait hosts dispatch through.

use crate::geometry::{ItemBox, LayoutContext, Position};

/// Geometry of one packed row.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RowMetrics {
    /// Zero-based row index.
    pub index: usize,
    /// First item of the row (inclusive, input order).
    pub start: usize,
    /// One past the last item of the row.
    pub end: usize,
    /// Sum of `outer_width + gutter` over the row's items.
    pub width: f32,
    /// Horizontal shift applied to every item in the row. May be negative.
    pub offset: f32,
    /// Top edge shared by the row's items.
    pub y: f32,
    /// Largest bottom edge among the row's items.
    pub bottom: f32,
}

impl RowMetrics {
    /// Number of items in the row.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the row holds no items. Packed rows never are.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Full output of a packing pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Packing {
    /// One position per input item, same order as the input.
    pub positions: Vec<Position>,
    /// Rows in top-to-bottom order.
    pub rows: Vec<RowMetrics>,
    /// Largest bottom edge over all items; `0.0` for empty input.
    pub content_height: f32,
}

/// Pluggable packing algorithm.
///
/// Implementations are stateless: every call builds its own cursor, so one instance may
/// serve any number of hosts and threads at once.
pub trait PackingStrategy: Send + Sync {
    /// Stable mode name, as used in configuration and logs.
    fn name(&self) -> &'static str;

    /// Pack `items` into the container described by `context`.
    fn pack(&self, items: &[ItemBox], context: LayoutContext) -> Packing;

    /// Positions only, one per item in input order.
    fn layout(&self, items: &[ItemBox], context: LayoutContext) -> Vec<Position> {
        self.pack(items, context).positions
    }
}
