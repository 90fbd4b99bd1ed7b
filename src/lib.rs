//! # pixcorpus
//!
//! A raster image corpus generator for stress-testing image decoders.
//! One run sweeps a matrix of in-memory pixel-buffer layouts — color
//! models, bit depths, alpha arrangements, byte orders — and re-encodes
//! each into several container formats, leaving a directory of files whose
//! on-disk encodings were all produced from deliberately exotic buffers.
//!
//! # Architecture: Factory → Paint → Encode
//!
//! Each buffer layout flows through three independent steps:
//!
//! ```text
//! 1. Construct   catalog entry  →  PixelBuffer     (zeroed, exact stride)
//! 2. Paint       PixelBuffer    →  gradient (+ optional random shapes)
//! 3. Encode      PixelBuffer    →  {png,jpg,tiff,bmp,gif} bytes on disk
//! ```
//!
//! The separation exists for three reasons:
//!
//! - **Layout isolation**: all channel-order, bit-depth, and endianness
//!   knowledge lives behind [`raster::PixelBuffer::put_pixel`]; painting
//!   and the sweep never branch on layout.
//! - **Testability**: the driver is written against the [`encode::Encoder`]
//!   trait, so sweep logic (ordering, skip rule, failure downgrade) is
//!   exercised with a recording mock and zero codec work.
//! - **Failure containment**: each step has its own error scope — a layout
//!   that cannot be constructed, or a container that cannot be encoded,
//!   removes exactly its own artifacts and nothing else.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Named buffer layouts, sweep order, container formats, skip rule, artifact naming |
//! | [`raster`] | Buffer factory and per-layout pixel packing, plus synthetic content painting |
//! | [`encode`] | `Encoder` trait, codec registry, and the `image`-crate production backend |
//! | [`corpus`] | The sweep driver: `generate_corpus`, progress events, artifact accumulation |
//! | [`output`] | CLI display formatting — pure `format_*` functions over events and the catalog |
//!
//! # Design Decisions
//!
//! ## An Infallible Driver
//!
//! [`corpus::generate_corpus`] returns a plain `Vec` of artifacts, never a
//! `Result`. A corpus with holes is still a corpus: a decoder test rig
//! pointed at the output directory should see whatever could be produced,
//! and the progress event stream — not an error path — explains what is
//! missing. Only an unusable output directory empties the run.
//!
//! ## Fixed Enumerations Over Configuration
//!
//! The layout catalog, sweep order, container order, and naming rule are
//! compile-time constants. Corpus consumers diff directories across runs
//! and machines; that only works when `StandardRGB-image.png` means the
//! same thing everywhere. The only knobs are canvas size and paint mode.
//!
//! ## Pure-Rust Codecs (No System Libraries)
//!
//! Encoding uses the `image` crate's pure-Rust encoders, statically
//! linked. HEIC is the one container in the matrix with no pure-Rust
//! encoder: it stays fully modeled (naming, skip rule, codec registry)
//! and the backend reports it as an unsupported codec, which the driver
//! downgrades to a per-artifact skip.

pub mod catalog;
pub mod corpus;
pub mod encode;
pub mod output;
pub mod raster;
