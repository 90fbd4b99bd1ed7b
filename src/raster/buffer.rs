//! Pixel-buffer allocation and per-layout pixel packing.
//!
//! [`create_buffer`] turns a catalog entry into an owned, zero-initialized
//! raster whose storage is exactly `bytes_per_row × height`. The buffer owns
//! all layout knowledge: [`PixelBuffer::put_pixel`] accepts a normalized
//! RGBA [`Color`] and stores it according to the layout — premultiplying
//! where the layout calls for it, swizzling channel order for alpha-first
//! and little-endian 32-bit word layouts, packing 1-bit rows MSB-first, and
//! collapsing RGB to gray with the Rec. 601 luma weights.
//!
//! Construction failures are values, not panics: the alpha-only
//! configuration fails by contract, and impossible geometry (zero dimension,
//! arithmetic overflow) is an allocation rejection. Callers treat either as
//! "skip this configuration".

use crate::catalog::{AlphaLayout, BufferLayout, ByteOrder, ColorModel, LayoutSpec};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConstructionError {
    /// The configuration defines no constructible geometry. Permanent and
    /// expected for the alpha-only layout.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(&'static str),
    /// The allocation parameters were rejected (zero dimension or byte-size
    /// overflow).
    #[error("allocation rejected: {0}")]
    AllocationRejected(String),
}

/// Normalized RGBA color; components in `0.0..=1.0`, non-premultiplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Rec. 601 luma of the color channels.
    pub fn luma(self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Linear interpolation toward `other`; `t` clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// An owned, mutable 2-D raster tagged with the layout that created it.
///
/// One buffer serves one generation step: created, painted once, encoded
/// into each permitted container, then dropped. Nothing is shared between
/// configurations.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    layout: BufferLayout,
    spec: LayoutSpec,
    width: u32,
    height: u32,
    bytes_per_row: usize,
    data: Vec<u8>,
}

/// Allocate a zeroed buffer for `layout` at `width × height`.
pub fn create_buffer(
    layout: BufferLayout,
    width: u32,
    height: u32,
) -> Result<PixelBuffer, ConstructionError> {
    let spec = layout
        .spec()
        .ok_or(ConstructionError::UnsupportedConfiguration(layout.name()))?;

    if width == 0 || height == 0 {
        return Err(ConstructionError::AllocationRejected(format!(
            "zero dimension: {width}x{height}"
        )));
    }

    let bytes_per_row = spec.bytes_per_row(width).ok_or_else(|| {
        ConstructionError::AllocationRejected(format!("row stride overflow at width {width}"))
    })?;
    let len = bytes_per_row.checked_mul(height as usize).ok_or_else(|| {
        ConstructionError::AllocationRejected(format!(
            "byte size overflow: {bytes_per_row} x {height}"
        ))
    })?;

    Ok(PixelBuffer {
        layout,
        spec,
        width,
        height,
        bytes_per_row,
        data: vec![0u8; len],
    })
}

impl PixelBuffer {
    pub fn layout(&self) -> BufferLayout {
        self.layout
    }

    pub fn spec(&self) -> &LayoutSpec {
        &self.spec
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Store `color` at `(x, y)` according to the buffer's layout.
    /// Out-of-bounds coordinates are ignored, so drawing primitives can
    /// overshoot the canvas without bounds bookkeeping.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let row = y as usize * self.bytes_per_row;

        match (self.spec.color_model, self.spec.bits_per_component) {
            (ColorModel::Gray, 1) => {
                let idx = row + (x / 8) as usize;
                // MSB-first within each row byte
                let bit = 7 - (x % 8);
                if color.luma() >= 0.5 {
                    self.data[idx] |= 1u8 << bit;
                } else {
                    self.data[idx] &= !(1u8 << bit);
                }
            }
            (ColorModel::Gray, _) => {
                self.data[row + x as usize] = quantize8(color.luma());
            }
            (ColorModel::Rgb, 8) => {
                let [c0, c1, c2, c3] = self.ordered_components(color);
                let named = [quantize8(c0), quantize8(c1), quantize8(c2), quantize8(c3)];
                let bytes = match self.spec.byte_order {
                    ByteOrder::Little32 => {
                        let mut b = named;
                        b.reverse();
                        b
                    }
                    ByteOrder::Default | ByteOrder::Big32 => named,
                };
                let px = row + x as usize * 4;
                self.data[px..px + 4].copy_from_slice(&bytes);
            }
            (ColorModel::Rgb, 16) => {
                let components = self.ordered_components(color);
                let px = row + x as usize * 8;
                for (i, c) in components.into_iter().enumerate() {
                    let off = px + i * 2;
                    self.data[off..off + 2].copy_from_slice(&quantize16(c).to_ne_bytes());
                }
            }
            (ColorModel::Rgb, _) => {
                let components = self.ordered_components(color);
                let px = row + x as usize * 16;
                for (i, c) in components.into_iter().enumerate() {
                    let off = px + i * 4;
                    self.data[off..off + 4].copy_from_slice(&c.to_ne_bytes());
                }
            }
        }
    }

    /// Component values in the layout's named order (before any 32-bit word
    /// byte swap), with premultiplication applied where the layout blends.
    fn ordered_components(&self, color: Color) -> [f32; 4] {
        let a = color.a.clamp(0.0, 1.0);
        match self.spec.alpha {
            AlphaLayout::PremultipliedLast => [color.r * a, color.g * a, color.b * a, a],
            AlphaLayout::PremultipliedFirst => [a, color.r * a, color.g * a, color.b * a],
            AlphaLayout::SkipLast | AlphaLayout::None => [color.r, color.g, color.b, 0.0],
            AlphaLayout::SkipFirst => [0.0, color.r, color.g, color.b],
        }
    }
}

fn quantize8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn quantize16(v: f32) -> u16 {
    (v.clamp(0.0, 1.0) * 65535.0).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BufferLayout;

    #[test]
    fn storage_is_stride_times_height_for_every_layout() {
        for layout in BufferLayout::CATALOG {
            if layout == BufferLayout::AlphaOnly {
                continue;
            }
            for (w, h) in [(300, 300), (1, 1), (17, 5)] {
                let buf = create_buffer(layout, w, h).unwrap();
                let stride = layout.spec().unwrap().bytes_per_row(w).unwrap();
                assert_eq!(buf.bytes_per_row(), stride, "{layout} at {w}x{h}");
                assert_eq!(buf.data().len(), stride * h as usize, "{layout} at {w}x{h}");
            }
        }
    }

    #[test]
    fn storage_starts_zeroed() {
        let buf = create_buffer(BufferLayout::Depth16, 8, 8).unwrap();
        assert!(buf.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn alpha_only_always_fails() {
        for (w, h) in [(300, 300), (1, 1), (4096, 4096)] {
            let err = create_buffer(BufferLayout::AlphaOnly, w, h).unwrap_err();
            assert!(matches!(
                err,
                ConstructionError::UnsupportedConfiguration("AlphaOnly")
            ));
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        for (w, h) in [(0, 300), (300, 0), (0, 0)] {
            let err = create_buffer(BufferLayout::StandardRgb, w, h).unwrap_err();
            assert!(matches!(err, ConstructionError::AllocationRejected(_)));
        }
    }

    #[test]
    fn oversized_geometry_is_rejected_not_panicking() {
        let err = create_buffer(BufferLayout::StandardRgb, u32::MAX, u32::MAX).unwrap_err();
        assert!(matches!(err, ConstructionError::AllocationRejected(_)));
    }

    #[test]
    fn standard_rgb_stores_rgba_bytes() {
        let mut buf = create_buffer(BufferLayout::StandardRgb, 4, 4).unwrap();
        buf.put_pixel(1, 0, Color::rgb(1.0, 0.5, 0.0));
        assert_eq!(&buf.data()[4..8], &[255, 128, 0, 255]);
    }

    #[test]
    fn premultiplied_first_stores_argb_bytes() {
        let mut buf = create_buffer(BufferLayout::PremultipliedFirstAlpha, 4, 4).unwrap();
        buf.put_pixel(0, 0, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(&buf.data()[0..4], &[255, 255, 0, 0]);
    }

    #[test]
    fn premultiplication_scales_color_channels() {
        let mut buf = create_buffer(BufferLayout::StandardRgb, 2, 1).unwrap();
        buf.put_pixel(0, 0, Color::rgba(1.0, 0.0, 1.0, 0.5));
        assert_eq!(&buf.data()[0..4], &[128, 0, 128, 128]);
    }

    #[test]
    fn pad_byte_layouts_do_not_premultiply() {
        let mut buf = create_buffer(BufferLayout::NonPremultipliedAlpha, 2, 1).unwrap();
        buf.put_pixel(0, 0, Color::rgba(1.0, 0.0, 0.0, 0.25));
        // color untouched, pad byte zero
        assert_eq!(&buf.data()[0..4], &[255, 0, 0, 0]);
    }

    #[test]
    fn big_endian_word_is_rgbx_in_memory() {
        let mut buf = create_buffer(BufferLayout::BigEndian, 2, 1).unwrap();
        buf.put_pixel(0, 0, Color::rgb(1.0, 0.5, 0.25));
        assert_eq!(&buf.data()[0..4], &[255, 128, 64, 0]);
    }

    #[test]
    fn little_endian_word_is_xbgr_in_memory() {
        let mut buf = create_buffer(BufferLayout::LittleEndian, 2, 1).unwrap();
        buf.put_pixel(0, 0, Color::rgb(1.0, 0.5, 0.25));
        assert_eq!(&buf.data()[0..4], &[0, 64, 128, 255]);
    }

    #[test]
    fn sixteen_bit_components_are_native_endian_u16() {
        let mut buf = create_buffer(BufferLayout::Depth16, 2, 1).unwrap();
        buf.put_pixel(0, 0, Color::rgb(1.0, 0.0, 0.0));
        let r = u16::from_ne_bytes([buf.data()[0], buf.data()[1]]);
        let g = u16::from_ne_bytes([buf.data()[2], buf.data()[3]]);
        let a = u16::from_ne_bytes([buf.data()[6], buf.data()[7]]);
        assert_eq!((r, g, a), (65535, 0, 65535));
    }

    #[test]
    fn float_components_round_trip_exactly() {
        let mut buf = create_buffer(BufferLayout::HdrFloat, 2, 1).unwrap();
        buf.put_pixel(1, 0, Color::rgb(0.25, 0.5, 0.75));
        let at = |i: usize| {
            let off = 16 + i * 4;
            f32::from_ne_bytes(buf.data()[off..off + 4].try_into().unwrap())
        };
        assert_eq!((at(0), at(1), at(2), at(3)), (0.25, 0.5, 0.75, 1.0));
    }

    #[test]
    fn grayscale_stores_luma() {
        let mut buf = create_buffer(BufferLayout::Grayscale, 2, 1).unwrap();
        buf.put_pixel(0, 0, Color::rgb(1.0, 1.0, 1.0));
        buf.put_pixel(1, 0, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(buf.data()[0], 255);
        assert_eq!(buf.data()[1], quantize8(0.299));
    }

    #[test]
    fn mono_packs_msb_first() {
        let mut buf = create_buffer(BufferLayout::Mono1, 10, 1).unwrap();
        buf.put_pixel(0, 0, Color::rgb(1.0, 1.0, 1.0));
        buf.put_pixel(9, 0, Color::rgb(1.0, 1.0, 1.0));
        // pixel 0 → bit 7 of byte 0; pixel 9 → bit 6 of byte 1
        assert_eq!(buf.data(), &[0b1000_0000, 0b0100_0000]);

        buf.put_pixel(0, 0, Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(buf.data()[0], 0);
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut buf = create_buffer(BufferLayout::StandardRgb, 2, 2).unwrap();
        buf.put_pixel(2, 0, Color::RED);
        buf.put_pixel(0, 2, Color::RED);
        buf.put_pixel(u32::MAX, u32::MAX, Color::RED);
        assert!(buf.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let mid = Color::RED.lerp(Color::BLUE, 0.5);
        assert_eq!((mid.r, mid.b), (0.5, 0.5));
        let start = Color::RED.lerp(Color::BLUE, 0.0);
        assert_eq!(start, Color::RED);
        let clamped = Color::RED.lerp(Color::BLUE, 2.0);
        assert_eq!(clamped, Color::BLUE);
    }
}
