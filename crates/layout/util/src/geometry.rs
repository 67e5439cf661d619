//! Basic geometry types used by the packing modes.

/// Minimal handle for an item reference. This crate keeps it opaque.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ItemRef(pub u64);

/// Outer box of an item, measured by the host before layout.
///
/// Sizes are expected to be non-negative and finite. Nothing here checks that;
/// garbage in yields garbage geometry out.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ItemBox {
    /// Border-box width plus horizontal margins.
    pub outer_width: f32,
    /// Border-box height plus vertical margins.
    pub outer_height: f32,
}

impl ItemBox {
    /// Create an item box from its outer width and height.
    #[inline]
    pub const fn new(outer_width: f32, outer_height: f32) -> Self {
        Self {
            outer_width,
            outer_height,
        }
    }
}

/// Top-left corner assigned to an item, relative to the container content box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Per-invocation container parameters.
///
/// A fresh context is built for every layout call; nothing carries over between calls.
///
/// All geometry is single-precision `f32`, so very large or fractional widths may wrap at a
/// different item than a double-precision layout would.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LayoutContext {
    /// Available width inside the container's border and padding.
    pub container_inner_width: f32,
    /// Spacing added after each item.
    pub gutter: f32,
}

impl LayoutContext {
    /// Create a context for the given container inner width and gutter.
    #[inline]
    pub const fn new(container_inner_width: f32, gutter: f32) -> Self {
        Self {
            container_inner_width,
            gutter,
        }
    }

    /// Horizontal room a row may fill.
    ///
    /// Every item contributes its width plus one gutter, so the trailing gutter of the
    /// last item in a row is granted back here.
    #[inline]
    pub fn row_capacity(self) -> f32 {
        self.container_inner_width + self.gutter
    }

    /// Horizontal advance of `item` along a row.
    #[inline]
    pub fn advance_of(self, item: ItemBox) -> f32 {
        item.outer_width + self.gutter
    }
}
