//! CLI output formatting for corpus runs.
//!
//! # Information-First Display
//!
//! Output leads with the semantic identity of each entity — the layout name
//! — with per-container outcomes as indented context lines, so a run reads
//! as an inventory of what was generated and why anything is missing:
//!
//! ```text
//! Sweeping 9 buffer layouts x 6 container formats
//! StandardRGB
//!     png: StandardRGB-image.png (1834 bytes)
//!     jpg: StandardRGB-image.jpg (2710 bytes)
//!     heic: encode failed (no encoder available for HEIC)
//! Grayscale
//!     heic: incompatible, skipped
//! ```
//!
//! # Architecture
//!
//! Every surface has a `format_*` function returning `Vec<String>` (pure —
//! no I/O, unit-testable) and a `print_*` wrapper that writes to stdout.

use crate::catalog::{AlphaLayout, BufferLayout, ByteOrder, ColorModel, ComponentEncoding};
use crate::corpus::{CorpusEvent, GeneratedArtifact};
use std::path::Path;

// ============================================================================
// Corpus run events
// ============================================================================

/// Format a single sweep progress event as display lines.
pub fn format_corpus_event(event: &CorpusEvent) -> Vec<String> {
    match event {
        CorpusEvent::SweepStarted {
            layouts,
            containers,
        } => {
            vec![format!(
                "Sweeping {layouts} buffer layouts x {containers} container formats"
            )]
        }
        CorpusEvent::LayoutStarted { layout } => vec![layout.to_string()],
        CorpusEvent::BufferSkipped { reason, .. } => {
            vec![format!("    buffer construction failed: {reason}")]
        }
        CorpusEvent::PairSkipped { format, .. } => {
            vec![format!("    {}: incompatible, skipped", format.extension())]
        }
        CorpusEvent::ArtifactWritten {
            format,
            path,
            bytes,
            ..
        } => {
            let name = path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            vec![format!(
                "    {}: {name} ({bytes} bytes)",
                format.extension()
            )]
        }
        CorpusEvent::EncodeFailed { format, reason, .. } => {
            vec![format!(
                "    {}: encode failed ({reason})",
                format.extension()
            )]
        }
        CorpusEvent::WriteFailed { format, reason, .. } => {
            vec![format!(
                "    {}: write failed ({reason})",
                format.extension()
            )]
        }
        CorpusEvent::DirectoryFailed { path, reason } => {
            vec![format!(
                "Cannot create output directory {}: {reason}",
                path.display()
            )]
        }
    }
}

/// Format the end-of-run summary.
pub fn format_run_summary(artifacts: &[GeneratedArtifact], output_dir: &Path) -> Vec<String> {
    vec![format!(
        "Generated {} files -> {}",
        artifacts.len(),
        output_dir.display()
    )]
}

// ============================================================================
// Layout catalog listing
// ============================================================================

/// Format the full layout catalog: geometry plus sweep membership.
pub fn format_layout_catalog() -> Vec<String> {
    let mut lines = Vec::new();

    for layout in BufferLayout::CATALOG {
        lines.push(layout.name().to_string());

        match layout.spec() {
            None => lines.push("    construction unsupported".to_string()),
            Some(spec) => {
                let model = match spec.color_model {
                    ColorModel::Rgb => "rgb",
                    ColorModel::Gray => "gray",
                };
                let encoding = match spec.encoding {
                    ComponentEncoding::Integer => "integer",
                    ComponentEncoding::Float => "float",
                };
                lines.push(format!(
                    "    {model}, {}-bit {encoding}, {}",
                    spec.bits_per_component,
                    describe_alpha(spec.alpha)
                ));
                if let Some(words) = describe_byte_order(spec.byte_order) {
                    lines.push(format!("    {words}"));
                }
                if let Some(stride) = spec.bytes_per_row(300) {
                    lines.push(format!("    row stride at 300 px: {stride} bytes"));
                }
            }
        }

        let in_sweep = BufferLayout::SWEEP.contains(&layout);
        lines.push(format!(
            "    default sweep: {}",
            if in_sweep { "yes" } else { "no" }
        ));
    }

    lines
}

fn describe_alpha(alpha: AlphaLayout) -> &'static str {
    match alpha {
        AlphaLayout::None => "no alpha",
        AlphaLayout::PremultipliedFirst => "premultiplied alpha first",
        AlphaLayout::PremultipliedLast => "premultiplied alpha last",
        AlphaLayout::SkipFirst => "reserved alpha byte first",
        AlphaLayout::SkipLast => "reserved alpha byte last",
    }
}

fn describe_byte_order(order: ByteOrder) -> Option<&'static str> {
    match order {
        ByteOrder::Default => None,
        ByteOrder::Little32 => Some("little-endian 32-bit pixel words"),
        ByteOrder::Big32 => Some("big-endian 32-bit pixel words"),
    }
}

// ============================================================================
// Print wrappers
// ============================================================================

pub fn print_corpus_event(event: &CorpusEvent) {
    for line in format_corpus_event(event) {
        println!("{line}");
    }
}

pub fn print_run_summary(artifacts: &[GeneratedArtifact], output_dir: &Path) {
    for line in format_run_summary(artifacts, output_dir) {
        println!("{line}");
    }
}

pub fn print_layout_catalog() {
    for line in format_layout_catalog() {
        println!("{line}");
    }
}
