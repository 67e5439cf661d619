//! Stock fit-rows mode: rows stay flush with the container start.

use layout_util::{ItemBox, LayoutContext, Packing, PackingStrategy};
use log::debug;

use crate::rows::place_rows;

/// Pack `items` into rows without shifting them.
pub fn layout_left_aligned(items: &[ItemBox], context: LayoutContext) -> Packing {
    let packing = place_rows(items, context, &[]);
    debug!(
        target: "layout::fit_rows",
        "[FIT-ROWS] items={} rows={} container={:.3} gutter={:.3} content_height={:.3}",
        items.len(),
        packing.rows.len(),
        context.container_inner_width,
        context.gutter,
        packing.content_height
    );
    packing
}

/// [`PackingStrategy`] for the stock mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LeftAlignedRows;

impl LeftAlignedRows {
    /// Mode name used in configuration.
    pub const NAME: &'static str = "fitRows";
}

impl PackingStrategy for LeftAlignedRows {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn pack(&self, items: &[ItemBox], context: LayoutContext) -> Packing {
        layout_left_aligned(items, context)
    }
}
