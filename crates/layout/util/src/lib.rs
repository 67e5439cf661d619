//! Layout utility types and traits shared by the packing modes and their hosts.
//!
//! This crate defines the geometry vocabulary and the strategy seam that lets a
//! host swap packing algorithms without depending on any concrete mode crate.

mod geometry;
pub use geometry::{ItemBox, ItemRef, LayoutContext, Position};

mod dispatch;
pub use dispatch::{Packing, PackingStrategy, RowMetrics};
