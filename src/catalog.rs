//! The layout and container catalog: what gets generated, in what order,
//! and what the files are called.
//!
//! Every corpus run walks the same two fixed enumerations — pixel-buffer
//! layouts outer, container formats inner — so this module is the single
//! source of truth for:
//!
//! - [`BufferLayout`]: the named pixel-buffer configurations and their
//!   geometry ([`LayoutSpec`])
//! - [`BufferLayout::SWEEP`]: the subset and order the generator walks
//! - [`ContainerFormat`]: the on-disk encodings and their canonical suffixes
//! - [`is_skipped`]: the static layout × container compatibility rule
//! - [`artifact_file_name`]: the `{Layout}-image.{ext}` naming convention
//!
//! ## Catalog vs. sweep
//!
//! Two layouts exist in the catalog but not in the default sweep:
//! `AlphaOnly` (construction fails by contract — see
//! [`create_buffer`](crate::raster::create_buffer)) and `1BitMonochrome`.
//! Both remain constructible through the public factory; the sweep simply
//! never visits them. Widening the sweep is a deliberate, visible change to
//! [`BufferLayout::SWEEP`], not something a caller can do by accident.

use serde::{Deserialize, Serialize};

/// Color model of a buffer's components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorModel {
    Rgb,
    Gray,
}

/// Where the alpha channel sits in a pixel, and whether color components are
/// pre-scaled by it.
///
/// The `Skip*` variants reserve the byte without blending: the channel is
/// present in memory but carries no alpha semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaLayout {
    None,
    PremultipliedFirst,
    PremultipliedLast,
    SkipFirst,
    SkipLast,
}

/// Numeric encoding of a single component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentEncoding {
    Integer,
    Float,
}

/// Byte order applied to each 32-bit pixel word.
///
/// `Default` leaves components in their natural memory order. The explicit
/// variants reorder the four bytes of each pixel word, so a skip-last RGB
/// pixel reads `R,G,B,X` under `Big32` and `X,B,G,R` under `Little32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Default,
    Little32,
    Big32,
}

/// Full geometry of one pixel-buffer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSpec {
    pub color_model: ColorModel,
    pub bits_per_component: u32,
    pub alpha: AlphaLayout,
    pub encoding: ComponentEncoding,
    pub byte_order: ByteOrder,
}

impl LayoutSpec {
    /// Components stored per pixel: 1 for gray, 4 for RGB (alpha or pad
    /// byte always present in the RGB layouts of this catalog).
    pub fn components_per_pixel(&self) -> u32 {
        match self.color_model {
            ColorModel::Gray => 1,
            ColorModel::Rgb => 4,
        }
    }

    /// Row stride in bytes for a given width.
    ///
    /// Sub-byte (1-bit) rows pack 8 pixels per byte, rounded up. Returns
    /// `None` when the multiplication overflows `usize`.
    pub fn bytes_per_row(&self, width: u32) -> Option<usize> {
        let width = width as usize;
        if self.bits_per_component == 1 {
            return Some(width.div_ceil(8));
        }
        let bytes_per_component = (self.bits_per_component / 8) as usize;
        width
            .checked_mul(self.components_per_pixel() as usize)?
            .checked_mul(bytes_per_component)
    }
}

/// A named pixel-buffer configuration.
///
/// Each variant is one entry of the generator's configuration matrix. The
/// names are stable: they appear verbatim in artifact filenames and in the
/// run manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferLayout {
    /// 8-bit RGB, premultiplied alpha last. The baseline.
    StandardRgb,
    /// 8-bit RGB, premultiplied alpha first (`A,R,G,B` in memory).
    PremultipliedFirstAlpha,
    /// 8-bit RGB with a reserved trailing pad byte; alpha never blended.
    NonPremultipliedAlpha,
    /// 16-bit RGB, premultiplied alpha last. 8 bytes per pixel.
    Depth16,
    /// 8-bit single-channel gray, no alpha.
    Grayscale,
    /// 32-bit float RGB, premultiplied alpha last. 16 bytes per pixel.
    HdrFloat,
    /// Alpha channel only. Unsupported: construction always fails.
    AlphaOnly,
    /// 1-bit monochrome, 8 pixels per row byte.
    Mono1,
    /// 8-bit RGB pad-last with explicit big-endian 32-bit pixel words.
    BigEndian,
    /// 8-bit RGB pad-last with explicit little-endian 32-bit pixel words.
    LittleEndian,
    /// 32-bit float, 4 components, premultiplied alpha last.
    Float4x32,
}

impl BufferLayout {
    /// Every layout the catalog defines, in declaration order.
    pub const CATALOG: [BufferLayout; 11] = [
        BufferLayout::StandardRgb,
        BufferLayout::PremultipliedFirstAlpha,
        BufferLayout::NonPremultipliedAlpha,
        BufferLayout::Depth16,
        BufferLayout::Grayscale,
        BufferLayout::HdrFloat,
        BufferLayout::AlphaOnly,
        BufferLayout::Mono1,
        BufferLayout::BigEndian,
        BufferLayout::LittleEndian,
        BufferLayout::Float4x32,
    ];

    /// The layouts the generator visits, in visit order. `AlphaOnly` and
    /// `Mono1` are catalog-only (see the module docs).
    pub const SWEEP: [BufferLayout; 9] = [
        BufferLayout::StandardRgb,
        BufferLayout::PremultipliedFirstAlpha,
        BufferLayout::NonPremultipliedAlpha,
        BufferLayout::Depth16,
        BufferLayout::Grayscale,
        BufferLayout::HdrFloat,
        BufferLayout::BigEndian,
        BufferLayout::LittleEndian,
        BufferLayout::Float4x32,
    ];

    /// Stable name, used in artifact filenames and the manifest.
    pub fn name(self) -> &'static str {
        match self {
            BufferLayout::StandardRgb => "StandardRGB",
            BufferLayout::PremultipliedFirstAlpha => "PremultipliedFirstAlpha",
            BufferLayout::NonPremultipliedAlpha => "NonPremultipliedAlpha",
            BufferLayout::Depth16 => "16BitDepth",
            BufferLayout::Grayscale => "Grayscale",
            BufferLayout::HdrFloat => "HDRFloatComponents",
            BufferLayout::AlphaOnly => "AlphaOnly",
            BufferLayout::Mono1 => "1BitMonochrome",
            BufferLayout::BigEndian => "BigEndian",
            BufferLayout::LittleEndian => "LittleEndian",
            BufferLayout::Float4x32 => "32BitFloat4Component",
        }
    }

    /// The layout's geometry, or `None` for the alpha-only configuration,
    /// which has no constructible geometry.
    pub fn spec(self) -> Option<LayoutSpec> {
        use AlphaLayout::*;
        use ByteOrder::*;
        use ColorModel::*;
        use ComponentEncoding::*;

        let spec = match self {
            BufferLayout::StandardRgb => LayoutSpec {
                color_model: Rgb,
                bits_per_component: 8,
                alpha: PremultipliedLast,
                encoding: Integer,
                byte_order: Default,
            },
            BufferLayout::PremultipliedFirstAlpha => LayoutSpec {
                color_model: Rgb,
                bits_per_component: 8,
                alpha: PremultipliedFirst,
                encoding: Integer,
                byte_order: Default,
            },
            BufferLayout::NonPremultipliedAlpha => LayoutSpec {
                color_model: Rgb,
                bits_per_component: 8,
                alpha: SkipLast,
                encoding: Integer,
                byte_order: Default,
            },
            BufferLayout::Depth16 => LayoutSpec {
                color_model: Rgb,
                bits_per_component: 16,
                alpha: PremultipliedLast,
                encoding: Integer,
                byte_order: Default,
            },
            BufferLayout::Grayscale => LayoutSpec {
                color_model: Gray,
                bits_per_component: 8,
                alpha: None,
                encoding: Integer,
                byte_order: Default,
            },
            BufferLayout::HdrFloat => LayoutSpec {
                color_model: Rgb,
                bits_per_component: 32,
                alpha: PremultipliedLast,
                encoding: Float,
                byte_order: Default,
            },
            BufferLayout::AlphaOnly => return Option::None,
            BufferLayout::Mono1 => LayoutSpec {
                color_model: Gray,
                bits_per_component: 1,
                alpha: None,
                encoding: Integer,
                byte_order: Default,
            },
            BufferLayout::BigEndian => LayoutSpec {
                color_model: Rgb,
                bits_per_component: 8,
                alpha: SkipLast,
                encoding: Integer,
                byte_order: Big32,
            },
            BufferLayout::LittleEndian => LayoutSpec {
                color_model: Rgb,
                bits_per_component: 8,
                alpha: SkipLast,
                encoding: Integer,
                byte_order: Little32,
            },
            BufferLayout::Float4x32 => LayoutSpec {
                color_model: Rgb,
                bits_per_component: 32,
                alpha: PremultipliedLast,
                encoding: Float,
                byte_order: Default,
            },
        };
        Some(spec)
    }
}

impl std::fmt::Display for BufferLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An on-disk container encoding, distinct from the in-memory pixel layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerFormat {
    Png,
    Jpeg,
    Tiff,
    Bmp,
    Gif,
    Heic,
}

impl ContainerFormat {
    /// Every container format, in encode order.
    pub const ALL: [ContainerFormat; 6] = [
        ContainerFormat::Png,
        ContainerFormat::Jpeg,
        ContainerFormat::Tiff,
        ContainerFormat::Bmp,
        ContainerFormat::Gif,
        ContainerFormat::Heic,
    ];

    /// Canonical file suffix.
    pub fn extension(self) -> &'static str {
        match self {
            ContainerFormat::Png => "png",
            ContainerFormat::Jpeg => "jpg",
            ContainerFormat::Tiff => "tiff",
            ContainerFormat::Bmp => "bmp",
            ContainerFormat::Gif => "gif",
            ContainerFormat::Heic => "heic",
        }
    }
}

impl std::fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ContainerFormat::Png => "PNG",
            ContainerFormat::Jpeg => "JPEG",
            ContainerFormat::Tiff => "TIFF",
            ContainerFormat::Bmp => "BMP",
            ContainerFormat::Gif => "GIF",
            ContainerFormat::Heic => "HEIC",
        };
        f.write_str(name)
    }
}

/// Static layout × container compatibility rule, consulted before any encode
/// attempt. Total over the cross product; pure.
///
/// The one known incompatibility: single-channel gray buffers cannot be
/// carried in HEIC.
pub fn is_skipped(layout: BufferLayout, format: ContainerFormat) -> bool {
    matches!(
        (layout, format),
        (BufferLayout::Grayscale, ContainerFormat::Heic)
    )
}

/// Artifact filename for a (layout, container) pair: `{Layout}-image.{ext}`.
pub fn artifact_file_name(layout: BufferLayout, format: ContainerFormat) -> String {
    format!("{}-image.{}", layout.name(), format.extension())
}
