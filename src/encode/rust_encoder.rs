//! Pure Rust encoder backend — every codec statically linked.
//!
//! ## Crate mapping
//!
//! | Container | Codec |
//! |---|---|
//! | PNG, JPEG, TIFF, BMP, GIF | `image` crate encoders |
//! | HEIC | none — reported as [`EncodeError::UnsupportedFormat`] |
//!
//! Encoding is two conversions and a serialize:
//!
//! 1. The buffer's layout is unpacked into the nearest `image` pixel type
//!    that preserves its information: channel swizzles undone (alpha-first,
//!    little-endian word order), pad bytes dropped, 1-bit rows expanded to
//!    8-bit gray, 16-bit and float components read back in native order.
//! 2. The result is adapted to what the target codec accepts: PNG and TIFF
//!    keep 16-bit depth (float downconverts to 16-bit integer); JPEG takes
//!    8-bit gray or RGB; BMP takes 8-bit RGB; GIF takes 8-bit RGBA.
//!
//! The buffer→bytes contract means a decoder reading the corpus sees each
//! exotic in-memory layout normalized through a real codec path, which is
//! exactly the surface under test downstream.

use super::backend::{EncodeError, Encoder};
use crate::catalog::{AlphaLayout, ByteOrder, ColorModel, ContainerFormat};
use crate::raster::PixelBuffer;
use image::{DynamicImage, GrayImage, ImageBuffer, ImageFormat, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// Production encoder on the `image` crate.
pub struct RustEncoder;

impl RustEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder for RustEncoder {
    fn encode(&self, buffer: &PixelBuffer, format: ContainerFormat) -> Result<Vec<u8>, EncodeError> {
        let target = image_format(format)?;
        let img = adapt_to_codec(to_dynamic(buffer)?, format);

        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, target)
            .map_err(|e| EncodeError::Codec(e.to_string()))?;
        Ok(out.into_inner())
    }
}

fn image_format(format: ContainerFormat) -> Result<ImageFormat, EncodeError> {
    Ok(match format {
        ContainerFormat::Png => ImageFormat::Png,
        ContainerFormat::Jpeg => ImageFormat::Jpeg,
        ContainerFormat::Tiff => ImageFormat::Tiff,
        ContainerFormat::Bmp => ImageFormat::Bmp,
        ContainerFormat::Gif => ImageFormat::Gif,
        ContainerFormat::Heic => return Err(EncodeError::UnsupportedFormat(format)),
    })
}

/// Unpack the buffer into the nearest information-preserving `image` type.
fn to_dynamic(buffer: &PixelBuffer) -> Result<DynamicImage, EncodeError> {
    let spec = buffer.spec();
    let (w, h) = (buffer.width(), buffer.height());

    match (spec.color_model, spec.bits_per_component) {
        (ColorModel::Gray, 1) => {
            let mut gray = Vec::with_capacity(w as usize * h as usize);
            for row in buffer.data().chunks_exact(buffer.bytes_per_row()) {
                for x in 0..w {
                    let byte = row[(x / 8) as usize];
                    let on = (byte >> (7 - (x % 8))) & 1;
                    gray.push(if on == 1 { 255 } else { 0 });
                }
            }
            GrayImage::from_raw(w, h, gray).map(DynamicImage::ImageLuma8)
        }
        (ColorModel::Gray, _) => {
            GrayImage::from_raw(w, h, buffer.data().to_vec()).map(DynamicImage::ImageLuma8)
        }
        (ColorModel::Rgb, 8) => rgb8_image(buffer),
        (ColorModel::Rgb, 16) => {
            let mut vals = Vec::with_capacity(buffer.data().len() / 2);
            for c in buffer.data().chunks_exact(2) {
                vals.push(u16::from_ne_bytes([c[0], c[1]]));
            }
            ImageBuffer::<Rgba<u16>, Vec<u16>>::from_raw(w, h, vals)
                .map(DynamicImage::ImageRgba16)
        }
        (ColorModel::Rgb, _) => {
            let mut vals = Vec::with_capacity(buffer.data().len() / 4);
            for c in buffer.data().chunks_exact(4) {
                vals.push(f32::from_ne_bytes([c[0], c[1], c[2], c[3]]));
            }
            ImageBuffer::<Rgba<f32>, Vec<f32>>::from_raw(w, h, vals)
                .map(DynamicImage::ImageRgba32F)
        }
    }
    .ok_or_else(|| {
        EncodeError::Codec(format!(
            "buffer geometry does not match its layout ({})",
            buffer.layout()
        ))
    })
}

/// Undo the 8-bit layout's channel arrangement: alpha-carrying layouts come
/// back as RGBA, pad-byte layouts as RGB with the pad dropped.
fn rgb8_image(buffer: &PixelBuffer) -> Option<DynamicImage> {
    let spec = buffer.spec();
    let (w, h) = (buffer.width(), buffer.height());
    let data = buffer.data();
    let little = spec.byte_order == ByteOrder::Little32;

    match spec.alpha {
        AlphaLayout::PremultipliedLast if !little => {
            // already RGBA in memory
            RgbaImage::from_raw(w, h, data.to_vec()).map(DynamicImage::ImageRgba8)
        }
        AlphaLayout::PremultipliedLast | AlphaLayout::PremultipliedFirst => {
            let mut rgba = Vec::with_capacity(data.len());
            for px in data.chunks_exact(4) {
                let unswizzled = match (spec.alpha, little) {
                    (AlphaLayout::PremultipliedFirst, false) => [px[1], px[2], px[3], px[0]],
                    (AlphaLayout::PremultipliedFirst, true) => [px[2], px[1], px[0], px[3]],
                    // premultiplied-last, little-endian word: A,B,G,R in memory
                    _ => [px[3], px[2], px[1], px[0]],
                };
                rgba.extend_from_slice(&unswizzled);
            }
            RgbaImage::from_raw(w, h, rgba).map(DynamicImage::ImageRgba8)
        }
        AlphaLayout::SkipFirst | AlphaLayout::SkipLast | AlphaLayout::None => {
            let mut rgb = Vec::with_capacity(data.len() / 4 * 3);
            for px in data.chunks_exact(4) {
                let unswizzled = match (spec.alpha, little) {
                    (AlphaLayout::SkipFirst, false) => [px[1], px[2], px[3]],
                    (AlphaLayout::SkipFirst, true) => [px[2], px[1], px[0]],
                    (_, true) => [px[3], px[2], px[1]],
                    (_, false) => [px[0], px[1], px[2]],
                };
                rgb.extend_from_slice(&unswizzled);
            }
            RgbImage::from_raw(w, h, rgb).map(DynamicImage::ImageRgb8)
        }
    }
}

/// Convert to a pixel type the target codec accepts.
fn adapt_to_codec(img: DynamicImage, format: ContainerFormat) -> DynamicImage {
    match format {
        // PNG and TIFF carry 16-bit; float downconverts to 16-bit integer
        ContainerFormat::Png | ContainerFormat::Tiff => match img {
            DynamicImage::ImageRgba32F(_) => DynamicImage::ImageRgba16(img.to_rgba16()),
            other => other,
        },
        ContainerFormat::Jpeg => match img {
            DynamicImage::ImageLuma8(_) => img,
            other => DynamicImage::ImageRgb8(other.to_rgb8()),
        },
        ContainerFormat::Bmp => DynamicImage::ImageRgb8(img.to_rgb8()),
        ContainerFormat::Gif => DynamicImage::ImageRgba8(img.to_rgba8()),
        ContainerFormat::Heic => img,
    }
}
