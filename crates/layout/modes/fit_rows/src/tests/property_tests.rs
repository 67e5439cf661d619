//! Property tests for fit-rows packing over generated item lists.

use super::*;
use proptest::prelude::*;

/// Item lists of up to 40 boxes with non-negative sizes.
fn items_strategy() -> impl Strategy<Value = Vec<ItemBox>> {
    prop::collection::vec((0.0f32..200.0, 0.0f32..200.0), 0..40).prop_map(|sizes| {
        sizes
            .into_iter()
            .map(|(width, height)| ItemBox::new(width, height))
            .collect()
    })
}

/// Container width (possibly non-positive) and gutter.
fn context_strategy() -> impl Strategy<Value = LayoutContext> {
    (-50.0f32..800.0, 0.0f32..24.0).prop_map(|(width, gutter)| LayoutContext::new(width, gutter))
}

proptest! {
    #[test]
    fn one_position_per_item_and_every_item_in_one_row(
        items in items_strategy(),
        ctx in context_strategy(),
    ) {
        let packing = layout_centered(&items, ctx);
        prop_assert_eq!(packing.positions.len(), items.len());
        let mut expected_start = 0usize;
        for row in &packing.rows {
            prop_assert_eq!(row.start, expected_start);
            prop_assert!(!row.is_empty());
            expected_start = row.end;
        }
        prop_assert_eq!(expected_start, items.len());
    }

    #[test]
    fn repeated_calls_are_identical(items in items_strategy(), ctx in context_strategy()) {
        prop_assert_eq!(layout_centered(&items, ctx), layout_centered(&items, ctx));
        prop_assert_eq!(layout_left_aligned(&items, ctx), layout_left_aligned(&items, ctx));
    }

    #[test]
    fn row_top_is_tallest_bottom_of_earlier_items(
        items in items_strategy(),
        ctx in context_strategy(),
    ) {
        let packing = layout_centered(&items, ctx);
        let mut previous_y = 0.0f32;
        for row in &packing.rows {
            prop_assert!(row.y >= previous_y);
            let tallest_before = packing
                .positions
                .iter()
                .zip(&items)
                .take(row.start)
                .map(|(position, item)| position.y + item.outer_height)
                .fold(0.0f32, f32::max);
            prop_assert!((row.y - tallest_before).abs() < 0.001);
            previous_y = row.y;
        }
    }

    #[test]
    fn everything_fitting_yields_one_centered_row(
        items in prop::collection::vec((0.0f32..40.0, 0.0f32..40.0), 1..10),
        gutter in 0.0f32..10.0,
    ) {
        let boxes: Vec<ItemBox> = items
            .into_iter()
            .map(|(width, height)| ItemBox::new(width, height))
            .collect();
        let total = boxes
            .iter()
            .fold(0.0f32, |acc, item| acc + (item.outer_width + gutter));
        let ctx = LayoutContext::new(total + 100.0, gutter);
        let packing = layout_centered(&boxes, ctx);
        prop_assert_eq!(packing.rows.len(), 1);
        let offset = packing.rows.first().map_or(f32::NAN, |row| row.offset);
        prop_assert!((offset - (ctx.row_capacity() - total) / 2.0).abs() < 0.001);
    }
}
