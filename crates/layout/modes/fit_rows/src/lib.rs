//! Fit-rows packing: items flow left to right and wrap into a new row when the next one
//! would overflow the container.
//!
//! Two modes share the same row breaking:
//! - [`LeftAlignedRows`] keeps every row flush with the container start.
//! - [`CenteredRows`] shifts each completed row so its content sits in the middle of the
//!   container.

// Row-breaking cursor.
mod cursor;
pub use cursor::{ClosedRow, PackingState, Step};

// Replay pass that turns cursor steps into positions and row metrics.
mod rows;

// Stock mode.
mod stock;
pub use stock::{LeftAlignedRows, layout_left_aligned};

// Centered mode.
mod centering;
pub use centering::{CenteredRows, layout_centered};

#[cfg(test)]
mod tests;
