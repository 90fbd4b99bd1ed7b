//! The corpus sweep: every pixel-buffer layout through every compatible
//! container format.
//!
//! ## Output Structure
//!
//! ```text
//! corpus/
//! ├── StandardRGB-image.png
//! ├── StandardRGB-image.jpg
//! ├── StandardRGB-image.tiff
//! ├── StandardRGB-image.bmp
//! ├── StandardRGB-image.gif
//! ├── PremultipliedFirstAlpha-image.png
//! │   ...
//! └── manifest.json              # written by the CLI when requested
//! ```
//!
//! ## Failure policy
//!
//! [`generate_corpus`] never fails. Failures are downgraded at the
//! narrowest scope that can contain them:
//!
//! - output directory cannot be created → the run returns empty
//! - one buffer cannot be constructed → that layout's formats are skipped
//! - one encode or file write fails → that single artifact is skipped
//!
//! Nothing is retried; a partial corpus is an expected outcome, and the
//! returned sequence lists exactly what landed on disk, in production
//! order (layouts outer, containers inner). Callers who want to know *why*
//! something is missing subscribe to the progress channel.
//!
//! ## Concurrency
//!
//! The sweep is synchronous and single-threaded: each buffer is allocated,
//! painted, encoded into every permitted container, and dropped before the
//! next layout begins. The optional progress [`Sender`] exists so a CLI can
//! render events from another thread; the sweep itself never blocks on it.

use crate::catalog::{BufferLayout, ContainerFormat, artifact_file_name, is_skipped};
use crate::encode::{Encoder, RustEncoder};
use crate::raster::{PaintMode, create_buffer, paint};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

/// Canvas geometry and painting mode for one run.
#[derive(Debug, Clone)]
pub struct CorpusConfig {
    pub width: u32,
    pub height: u32,
    pub paint: PaintMode,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            paint: PaintMode::Baseline,
        }
    }
}

/// One file that landed on disk: recorded only on successful write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    /// Absolute path of the written file.
    pub path: PathBuf,
    /// Name of the pixel-buffer layout that produced it.
    pub layout: String,
    /// Container format the buffer was encoded into.
    pub format: ContainerFormat,
}

/// Progress events emitted while the sweep runs.
#[derive(Debug, Clone)]
pub enum CorpusEvent {
    SweepStarted {
        layouts: usize,
        containers: usize,
    },
    LayoutStarted {
        layout: BufferLayout,
    },
    /// Buffer construction failed; the layout contributes no artifacts.
    BufferSkipped {
        layout: BufferLayout,
        reason: String,
    },
    /// The static compatibility rule removed this pair before any encode.
    PairSkipped {
        layout: BufferLayout,
        format: ContainerFormat,
    },
    ArtifactWritten {
        layout: BufferLayout,
        format: ContainerFormat,
        path: PathBuf,
        bytes: usize,
    },
    EncodeFailed {
        layout: BufferLayout,
        format: ContainerFormat,
        reason: String,
    },
    WriteFailed {
        layout: BufferLayout,
        format: ContainerFormat,
        path: PathBuf,
        reason: String,
    },
    DirectoryFailed {
        path: PathBuf,
        reason: String,
    },
}

/// Run the full sweep with the production encoder.
///
/// Creates `output_dir` (and intermediate directories) if absent. Existing
/// files with colliding names are silently overwritten, so re-running
/// against the same directory regenerates the same path set.
pub fn generate_corpus(output_dir: &Path, config: &CorpusConfig) -> Vec<GeneratedArtifact> {
    generate_corpus_with_encoder(&RustEncoder::new(), output_dir, config, None)
}

/// Run the sweep with a specific encoder (allows testing with a mock).
pub fn generate_corpus_with_encoder(
    encoder: &impl Encoder,
    output_dir: &Path,
    config: &CorpusConfig,
    progress: Option<Sender<CorpusEvent>>,
) -> Vec<GeneratedArtifact> {
    let emit = |event: CorpusEvent| {
        if let Some(tx) = &progress {
            let _ = tx.send(event);
        }
    };

    if let Err(e) = fs::create_dir_all(output_dir) {
        emit(CorpusEvent::DirectoryFailed {
            path: output_dir.to_path_buf(),
            reason: e.to_string(),
        });
        return Vec::new();
    }
    let output_dir =
        std::path::absolute(output_dir).unwrap_or_else(|_| output_dir.to_path_buf());

    emit(CorpusEvent::SweepStarted {
        layouts: BufferLayout::SWEEP.len(),
        containers: ContainerFormat::ALL.len(),
    });

    let mut artifacts = Vec::new();

    for layout in BufferLayout::SWEEP {
        emit(CorpusEvent::LayoutStarted { layout });

        let mut buffer = match create_buffer(layout, config.width, config.height) {
            Ok(buffer) => buffer,
            Err(e) => {
                emit(CorpusEvent::BufferSkipped {
                    layout,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        paint(&mut buffer, config.paint);

        for format in ContainerFormat::ALL {
            if is_skipped(layout, format) {
                emit(CorpusEvent::PairSkipped { layout, format });
                continue;
            }

            let path = output_dir.join(artifact_file_name(layout, format));
            let bytes = match encoder.encode(&buffer, format) {
                Ok(bytes) => bytes,
                Err(e) => {
                    emit(CorpusEvent::EncodeFailed {
                        layout,
                        format,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            match fs::write(&path, &bytes) {
                Ok(()) => {
                    emit(CorpusEvent::ArtifactWritten {
                        layout,
                        format,
                        path: path.clone(),
                        bytes: bytes.len(),
                    });
                    artifacts.push(GeneratedArtifact {
                        path,
                        layout: layout.name().to_string(),
                        format,
                    });
                }
                Err(e) => {
                    emit(CorpusEvent::WriteFailed {
                        layout,
                        format,
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    artifacts
}
