//! MaskFill CLI

use anyhow::{Context, Result};
use clap::Parser;
use maskfill::{
    image_io,
    parallel::{inpaint_batch, BatchJob},
    process_image,
    types::ProcessingConfig,
};
use std::path::{Path, PathBuf};

/// MaskFill: fill masked image regions with Fast Marching Method inpainting
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input image file(s) (PNG, JPEG, TIFF, ...)
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<PathBuf>,

    /// Mask image: nonzero pixels are reconstructed (single input only)
    #[arg(short, long, value_name = "FILE", conflicts_with = "mask_suffix")]
    mask: Option<PathBuf>,

    /// Derive each input's mask path as STEM+SUFFIX.EXT (e.g. "_mask")
    #[arg(long, value_name = "SUFFIX")]
    mask_suffix: Option<String>,

    /// Output file (default: INPUT_inpainted.EXT; single input only)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Reconstruction radius in pixels
    #[arg(short, long, default_value = "5.0")]
    radius: f32,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,

    /// Show detailed timing information
    #[arg(long)]
    benchmark: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.radius.is_finite() || cli.radius <= 0.0 {
        anyhow::bail!("Radius must be positive, got {}", cli.radius);
    }
    for input in &cli.inputs {
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }
    }

    let config = ProcessingConfig {
        radius: cli.radius,
        show_progress: !cli.quiet && cli.inputs.len() == 1,
        benchmark: cli.benchmark,
    };

    if cli.inputs.len() == 1 {
        run_single(&cli, &config)
    } else {
        run_batch(&cli, &config)
    }
}

fn run_single(cli: &Cli, config: &ProcessingConfig) -> Result<()> {
    let input = &cli.inputs[0];

    let mask_path = match (&cli.mask, &cli.mask_suffix) {
        (Some(mask), _) => mask.clone(),
        (None, Some(suffix)) => mask_path_for(input, suffix)?,
        (None, None) => anyhow::bail!("Provide a mask with --mask or --mask-suffix"),
    };
    if !mask_path.exists() {
        anyhow::bail!("Mask file does not exist: {}", mask_path.display());
    }

    let output_path = if let Some(out) = &cli.output {
        out.clone()
    } else {
        image_io::generate_output_path(input).context("Failed to generate output path")?
    };

    if !cli.quiet {
        println!("MaskFill v{}", env!("CARGO_PKG_VERSION"));
        println!("Input:  {}", input.display());
        println!("Mask:   {}", mask_path.display());
        println!("Output: {}\n", output_path.display());
    }

    match process_image(input, &mask_path, &output_path, config) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            anyhow::bail!("Processing failed");
        }
    }
}

fn run_batch(cli: &Cli, config: &ProcessingConfig) -> Result<()> {
    let suffix = cli
        .mask_suffix
        .as_ref()
        .context("Multiple inputs require --mask-suffix")?;
    if cli.output.is_some() {
        anyhow::bail!("--output only applies to a single input; batch outputs are generated");
    }

    let mut jobs = Vec::with_capacity(cli.inputs.len());
    for input in &cli.inputs {
        let mask = mask_path_for(input, suffix)?;
        if !mask.exists() {
            anyhow::bail!("Mask file does not exist: {}", mask.display());
        }
        let output =
            image_io::generate_output_path(input).context("Failed to generate output path")?;
        jobs.push(BatchJob {
            input: input.clone(),
            mask,
            output,
        });
    }

    if !cli.quiet {
        println!("MaskFill v{} — batch", env!("CARGO_PKG_VERSION"));
        println!("Jobs: {}\n", jobs.len());
    }

    let results = inpaint_batch(&jobs, config);

    let mut failures = 0;
    for (job, result) in jobs.iter().zip(&results) {
        match result {
            Ok(()) => {
                if !cli.quiet {
                    println!("✓ {} -> {}", job.input.display(), job.output.display());
                }
            }
            Err(e) => {
                failures += 1;
                eprintln!("✗ {}: {}", job.input.display(), e);
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} jobs failed", failures, jobs.len());
    }
    Ok(())
}

/// Mask path next to the input: STEM+SUFFIX.EXT
fn mask_path_for(input: &Path, suffix: &str) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .context("Invalid input filename")?;
    let extension = input
        .extension()
        .and_then(|s| s.to_str())
        .context("Input file has no extension")?;
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    Ok(parent.join(format!("{}{}.{}", stem, suffix, extension)))
}
