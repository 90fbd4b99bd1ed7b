//! End-to-end corpus generation through the production encoder.
//!
//! These tests run the real sweep — buffer construction, painting, `image`
//! crate encoding, filesystem writes — into temp directories, and decode a
//! sample artifact back to prove the bytes are a real image. Randomized
//! painting means no exact-pixel assertions anywhere.

use pixcorpus::catalog::ContainerFormat;
use pixcorpus::corpus::{CorpusConfig, GeneratedArtifact, generate_corpus};
use pixcorpus::raster::PaintMode;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn small_config() -> CorpusConfig {
    CorpusConfig {
        width: 24,
        height: 24,
        ..Default::default()
    }
}

fn path_set(artifacts: &[GeneratedArtifact]) -> BTreeSet<PathBuf> {
    artifacts.iter().map(|a| a.path.clone()).collect()
}

#[test]
fn full_run_stays_within_the_cross_product_bound() {
    let tmp = TempDir::new().unwrap();
    let artifacts = generate_corpus(tmp.path(), &small_config());

    // 9 layouts × 6 containers − 1 static skip = 53 candidates at most
    assert!(artifacts.len() <= 53);
    assert!(
        !artifacts
            .iter()
            .any(|a| a.layout == "Grayscale" && a.format == ContainerFormat::Heic)
    );

    // with the pure-Rust backend, every container except HEIC encodes
    assert_eq!(artifacts.len(), 45);
    assert!(!artifacts.iter().any(|a| a.format == ContainerFormat::Heic));
}

#[test]
fn every_artifact_is_a_nonempty_absolute_file() {
    let tmp = TempDir::new().unwrap();
    let artifacts = generate_corpus(tmp.path(), &small_config());

    for artifact in &artifacts {
        assert!(artifact.path.is_absolute(), "{:?}", artifact.path);
        let meta = std::fs::metadata(&artifact.path).unwrap();
        assert!(meta.len() > 0, "{:?} is empty", artifact.path);
    }
}

#[test]
fn generation_creates_a_missing_output_directory() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("deep").join("corpus");
    assert!(!nested.exists());

    let artifacts = generate_corpus(&nested, &small_config());

    assert!(nested.is_dir());
    assert!(!artifacts.is_empty());
}

#[test]
fn generation_leaves_an_existing_directory_alone() {
    let tmp = TempDir::new().unwrap();
    let sentinel = tmp.path().join("keep-me.txt");
    std::fs::write(&sentinel, b"untouched").unwrap();

    generate_corpus(tmp.path(), &small_config());

    assert_eq!(std::fs::read(&sentinel).unwrap(), b"untouched");
}

#[test]
fn reruns_are_idempotent_on_the_path_set() {
    let tmp = TempDir::new().unwrap();

    let first = generate_corpus(tmp.path(), &small_config());
    let second = generate_corpus(tmp.path(), &small_config());

    assert!(!second.is_empty());
    assert_eq!(path_set(&first), path_set(&second));
}

#[test]
fn baseline_png_decodes_to_the_default_canvas() {
    let tmp = TempDir::new().unwrap();
    let artifacts = generate_corpus(tmp.path(), &CorpusConfig::default());

    let png = tmp.path().join("StandardRGB-image.png");
    assert!(png.is_file());
    assert!(artifacts.iter().any(|a| a.path.ends_with(Path::new("StandardRGB-image.png"))));

    let bytes = std::fs::read(&png).unwrap();
    assert!(!bytes.is_empty());

    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (300, 300));
    // red→blue diagonal gradient: corners keep their end colors
    let rgb = decoded.to_rgb8();
    let top_left = rgb[(0, 0)];
    assert_eq!(top_left.0, [255, 0, 0]);
}

#[test]
fn randomized_painting_produces_the_same_path_set() {
    let tmp = TempDir::new().unwrap();
    let baseline = generate_corpus(tmp.path(), &small_config());

    let tmp2 = TempDir::new().unwrap();
    let randomized = generate_corpus(
        tmp2.path(),
        &CorpusConfig {
            paint: PaintMode::Randomized,
            ..small_config()
        },
    );

    let names = |arts: &[GeneratedArtifact]| -> BTreeSet<String> {
        arts.iter()
            .map(|a| a.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    };
    assert_eq!(names(&baseline), names(&randomized));
}

#[test]
fn every_generated_file_decodes_back() {
    let tmp = TempDir::new().unwrap();
    let config = small_config();
    let artifacts = generate_corpus(tmp.path(), &config);

    for artifact in &artifacts {
        let bytes = std::fs::read(&artifact.path).unwrap();
        let decoded = image::load_from_memory(&bytes)
            .unwrap_or_else(|e| panic!("{:?} did not decode: {e}", artifact.path));
        assert_eq!(
            (decoded.width(), decoded.height()),
            (config.width, config.height),
            "{:?}",
            artifact.path
        );
    }
}
