//! Screen-space geometry shared by every projection.

pub mod polygon;
pub mod rect;
pub mod vec2;
