//! Screen-space clipping for the world-map overlay.
//!
//! - [`line`]: Liang–Barsky clipping of a segment to a rectangle. Transport
//!   links are clipped this way once per edge per frame.
//! - [`region`]: the visible part of the world map, which is the map widget
//!   minus whichever sub-panels currently cover it.

pub mod line;
pub mod region;

pub use line::{clip_line, Segment};
pub use region::ViewportClipRegion;
