//! Pixel-buffer construction and painting — pure Rust, no codec involvement.
//!
//! | Concern | Where |
//! |---|---|
//! | **Allocation + per-layout packing** | [`buffer`] — [`create_buffer`], [`PixelBuffer::put_pixel`] |
//! | **Synthetic content** | [`paint`] — gradient baseline, randomized shapes |
//!
//! The split keeps painting layout-agnostic: drawing primitives work in
//! normalized RGBA color and never know whether the target stores 8-bit
//! integers, packed 1-bit rows, or little-endian float words. All layout
//! knowledge lives behind [`PixelBuffer::put_pixel`].

pub mod buffer;
pub mod paint;

pub use buffer::{Color, ConstructionError, PixelBuffer, create_buffer};
pub use paint::{PaintMode, draw_linear_gradient, fill_ellipse, fill_rect, paint, stroke_line};
