//! Gallery host: keeps the item collection, applies the category filter, and hands the
//! visible items to a pluggable packing strategy.

mod filter;
pub use filter::Filter;

mod host;
pub use host::{Arrangement, Gallery, GalleryItem};

mod settings;
pub use settings::{GalleryConfig, LayoutMode};

pub use layout_util::{
    ItemBox, ItemRef, LayoutContext, Packing, PackingStrategy, Position, RowMetrics,
};
