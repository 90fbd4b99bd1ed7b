use clap::{Parser, Subcommand, ValueEnum};
use pixcorpus::corpus::{self, CorpusConfig};
use pixcorpus::encode::RustEncoder;
use pixcorpus::output;
use pixcorpus::raster::PaintMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pixcorpus")]
#[command(about = "Generate a raster image corpus for decoder stress testing")]
#[command(long_about = "\
Generate a raster image corpus for decoder stress testing

Every run sweeps the full pixel-buffer layout catalog and encodes each
layout into every compatible container format:

  corpus/
  ├── StandardRGB-image.png        # 8-bit RGBA baseline
  ├── StandardRGB-image.jpg
  ├── StandardRGB-image.tiff
  ├── StandardRGB-image.bmp
  ├── StandardRGB-image.gif
  ├── 16BitDepth-image.png         # 16-bit components survive PNG/TIFF
  ├── Grayscale-image.png          # single channel (never HEIC)
  ├── LittleEndian-image.png       # swizzled 32-bit pixel words
  └── ...

File names are stable across runs and machines, so corpus directories can
be diffed. A layout that cannot be constructed, or a container that cannot
be encoded, is skipped and reported; everything else is still generated.

Run 'pixcorpus layouts' to inspect the layout catalog.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Content painted into each buffer before encoding.
#[derive(Clone, Copy, ValueEnum)]
enum PaintArg {
    /// Fixed red-to-blue diagonal gradient (deterministic)
    Baseline,
    /// Random gradient colors plus 10 random shapes
    Randomized,
}

impl From<PaintArg> for PaintMode {
    fn from(arg: PaintArg) -> Self {
        match arg {
            PaintArg::Baseline => PaintMode::Baseline,
            PaintArg::Randomized => PaintMode::Randomized,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Run the full sweep and write the corpus to a directory
    Generate {
        /// Output directory (created if absent)
        #[arg(long, default_value = "corpus")]
        output: PathBuf,

        /// Canvas edge length in pixels (square canvas)
        #[arg(long, default_value_t = 300)]
        size: u32,

        /// Content painted into each buffer
        #[arg(long, value_enum, default_value = "baseline")]
        paint: PaintArg,

        /// Write manifest.json (the artifact list) into the output directory
        #[arg(long)]
        manifest: bool,
    },
    /// List the pixel-buffer layout catalog
    Layouts,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            output,
            size,
            paint,
            manifest,
        } => {
            let config = CorpusConfig {
                width: size,
                height: size,
                paint: paint.into(),
            };

            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    output::print_corpus_event(&event);
                }
            });

            let artifacts = corpus::generate_corpus_with_encoder(
                &RustEncoder::new(),
                &output,
                &config,
                Some(tx),
            );
            printer.join().unwrap();

            output::print_run_summary(&artifacts, &output);

            if manifest {
                let manifest_path = output.join("manifest.json");
                let json = serde_json::to_string_pretty(&artifacts)?;
                std::fs::write(&manifest_path, json)?;
                println!("Manifest: {}", manifest_path.display());
            }
        }
        Command::Layouts => {
            output::print_layout_catalog();
        }
    }

    Ok(())
}
