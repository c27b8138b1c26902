//! MaskFill: Fast Marching Method (Telea) image inpainting
//!
//! Fills masked regions of an RGBA image by marching a distance wavefront
//! inward from the mask boundary and reconstructing each pixel from a
//! directionally weighted window of already-known neighbors.

pub mod image_io;
pub mod inpainting;
pub mod parallel;
pub mod types;

pub use inpainting::telea_inpaint;

use std::path::Path;
use std::time::Instant;
use types::{ProcessingConfig, Result};

/// Main entry point: inpaint the masked region of an image file
///
/// # Arguments
/// * `input_path` - Path to input image
/// * `mask_path` - Path to mask image (nonzero pixels are reconstructed)
/// * `output_path` - Path for output image
/// * `config` - Processing configuration
pub fn process_image(
    input_path: &Path,
    mask_path: &Path,
    output_path: &Path,
    config: &ProcessingConfig,
) -> Result<()> {
    let start_time = Instant::now();

    // Load image and mask
    if config.show_progress {
        println!("Loading image...");
    }
    let image = image_io::load_image(input_path)?;
    let mask = image_io::load_mask(mask_path)?;
    let load_time = start_time.elapsed();

    if config.benchmark {
        println!("  Load time: {:.2}s", load_time.as_secs_f32());
    }

    if config.show_progress {
        let masked = mask.iter().filter(|&&m| m).count();
        println!(
            "  {}×{} pixels, {} masked, radius {}",
            image.width(),
            image.height(),
            masked,
            config.radius
        );
    }

    // Inpaint
    let inpaint_start = Instant::now();
    let result = telea_inpaint(&image, &mask, config.radius)?;
    let inpaint_time = inpaint_start.elapsed();

    if config.benchmark {
        println!("  Inpaint time: {:.2}s", inpaint_time.as_secs_f32());
    }

    // Save output
    if config.show_progress {
        println!("Saving output...");
    }
    let save_start = Instant::now();
    image_io::save_image(output_path, &result)?;
    let save_time = save_start.elapsed();

    if config.benchmark {
        println!("  Save time: {:.2}s", save_time.as_secs_f32());
    }

    let total_time = start_time.elapsed();
    if config.show_progress {
        println!("\n✓ Completed in {:.2}s", total_time.as_secs_f32());
    }

    Ok(())
}
