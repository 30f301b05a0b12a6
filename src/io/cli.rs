//! Command-line interface for rendering sketches from source images

use crate::color::palette::ExhaustionPolicy;
use crate::io::configuration::{
    DEFAULT_SAMPLE_WIDTH, OUTPUT_EXTENSION, OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, WithContext, invalid_parameter};
use crate::io::image::{export_png, load_source_image};
use crate::io::progress::ProgressManager;
use crate::sketch::{SketchConfig, TileSketch};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tilesketch")]
#[command(
    author,
    version,
    about = "Render tiled geometric sketches from the colors of source images"
)]
/// Command-line arguments for the sketch renderer
pub struct Cli {
    /// Source image or directory of images to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible output (drawn randomly when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output file, only valid when TARGET is a single image
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Downscale sources wider than this before sampling (0 keeps full size)
    #[arg(long, default_value_t = DEFAULT_SAMPLE_WIDTH)]
    pub sample_width: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every random draw
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Fail on sources with too few distinct colors instead of shrinking the palette
    #[arg(long)]
    pub strict_palette: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation parameters implied by the flags
    pub fn sketch_config(&self) -> SketchConfig {
        let exhaustion_policy = if self.strict_palette {
            ExhaustionPolicy::Fail
        } else {
            ExhaustionPolicy::Truncate
        };

        SketchConfig {
            exhaustion_policy,
            ..SketchConfig::default()
        }
    }

    /// Default log filter for the chosen verbosity
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Renders each source image into a sketch PNG
pub struct FileProcessor {
    cli: Cli,
    seed: u64,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a processor, drawing a seed if none was given
    pub fn new(cli: Cli) -> Self {
        let seed = cli.seed.unwrap_or_else(rand::random);
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            seed,
            progress_manager,
        }
    }

    /// Seed used for every file in this run
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or any file fails to render
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            tracing::warn!(path = %self.cli.target.display(), "nothing to process");
            return Ok(());
        }

        tracing::info!(seed = self.seed, files = files.len(), "rendering sketches");

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if !is_supported_image(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("expected one of: {}", SUPPORTED_EXTENSIONS.join(", ")),
                ));
            }
            Ok(self
                .should_process_file(target)
                .then(|| vec![target.clone()])
                .unwrap_or_default())
        } else if target.is_dir() {
            if self.cli.output.is_some() {
                return Err(invalid_parameter(
                    "output",
                    &target.display(),
                    &"an explicit output needs a single target file",
                ));
            }

            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target)? {
                let path = entry.with_path(target)?.path();
                if path.is_file()
                    && is_supported_image(&path)
                    && !is_rendered_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path_for(input_path);
        if output_path.exists() {
            tracing::warn!(
                input = %input_path.display(),
                "skipping, output exists"
            );
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();
        let output_path = self.output_path_for(input_path);

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let source = load_source_image(input_path, self.cli.sample_width)?;
        let mut sketch = TileSketch::with_config(self.cli.sketch_config(), self.seed)?;
        let frame = sketch.render(&source)?;
        export_png(&frame, &output_path)?;

        tracing::info!(
            input = %input_path.display(),
            output = %output_path.display(),
            elapsed = ?start_time.elapsed(),
            "sketch written"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    /// Where the sketch for `input_path` is written
    pub fn output_path_for(&self, input_path: &Path) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(input_path))
    }
}

/// `<stem>_sketch.png` next to the input
pub fn default_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!(
        "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
        stem.to_string_lossy()
    );

    if let Some(parent) = input_path.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

// Earlier outputs sitting in a scanned directory are not sources
fn is_rendered_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
