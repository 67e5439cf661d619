//! Tests for fit-rows packing.

use super::*;
use layout_util::{ItemBox, LayoutContext, Packing, PackingStrategy, Position, RowMetrics};

mod property_tests;

/// Helper to build item boxes from `(outer_width, outer_height)` pairs.
#[inline]
pub fn boxes(sizes: &[(f32, f32)]) -> Vec<ItemBox> {
    sizes
        .iter()
        .map(|&(width, height)| ItemBox::new(width, height))
        .collect()
}

/// Helper to create three 50x20 items.
#[inline]
pub fn three_items_50() -> Vec<ItemBox> {
    boxes(&[(50.0, 20.0), (50.0, 20.0), (50.0, 20.0)])
}

/// Compare positions against expected `(x, y)` pairs within 0.001.
///
/// # Panics
/// Panics if lengths differ or any coordinate is off.
pub fn assert_positions(got: &[Position], expected: &[(f32, f32)]) {
    assert_eq!(got.len(), expected.len(), "position count");
    for (index, (position, &(exp_x, exp_y))) in got.iter().zip(expected).enumerate() {
        assert!(
            (position.x - exp_x).abs() < 0.001,
            "item {index}: x={} expected {exp_x}",
            position.x
        );
        assert!(
            (position.y - exp_y).abs() < 0.001,
            "item {index}: y={} expected {exp_y}",
            position.y
        );
    }
}

/// Row offsets in order.
#[inline]
pub fn offsets(packing: &Packing) -> Vec<f32> {
    packing.rows.iter().map(|row| row.offset).collect()
}

/// Row item ranges in order.
#[inline]
pub fn ranges(rows: &[RowMetrics]) -> Vec<(usize, usize)> {
    rows.iter().map(|row| (row.start, row.end)).collect()
}

/// Shorthand for a context.
#[inline]
pub const fn context(container_inner_width: f32, gutter: f32) -> LayoutContext {
    LayoutContext::new(container_inner_width, gutter)
}
