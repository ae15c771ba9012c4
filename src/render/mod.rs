//! Drawing surfaces for the overlays.
//!
//! Overlays only ever talk to the [`Canvas`] trait. Two implementations ship
//! with the crate:
//!
//! - [`PixelCanvas`]: a CPU ARGB8888 framebuffer, presented through SDL2 or
//!   saved as a PNG.
//! - [`RecordingCanvas`]: keeps every call as a [`DrawCommand`], for tests and
//!   for hosts that replay the commands onto their own graphics.

mod canvas;
pub mod font;
mod pixel;
mod recording;

pub use canvas::Canvas;
pub use pixel::PixelCanvas;
pub use recording::{DrawCommand, RecordingCanvas};
