//! Image and mask file I/O

use crate::types::{Error, Result};
use image::{ImageReader, RgbaImage};
use ndarray::Array2;
use std::path::{Path, PathBuf};

/// Load an image from a file as interleaved RGBA8.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let mut reader = ImageReader::open(path)?;
    reader.no_limits();
    Ok(reader.decode()?.to_rgba8())
}

/// Load a mask image as a boolean grid in `(y, x)` layout.
///
/// The file is decoded to 8-bit luma; any nonzero pixel marks a location to
/// reconstruct.
pub fn load_mask(path: &Path) -> Result<Array2<bool>> {
    let mut reader = ImageReader::open(path)?;
    reader.no_limits();
    let gray = reader.decode()?.to_luma8();

    let (width, height) = gray.dimensions();
    let flags: Vec<bool> = gray.into_raw().iter().map(|&v| v != 0).collect();

    Array2::from_shape_vec((height as usize, width as usize), flags)
        .map_err(|e| Error::InvalidInput(format!("mask shape error: {}", e)))
}

/// Save an RGBA image; format is inferred from the file extension.
pub fn save_image(path: &Path, image: &RgbaImage) -> Result<()> {
    image.save(path)?;
    Ok(())
}

/// Generate output filename based on the input path
pub fn generate_output_path(input: &Path) -> Result<PathBuf> {
    let stem = input.file_stem().and_then(|s| s.to_str()).ok_or_else(|| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Invalid input filename",
        ))
    })?;

    let extension = input.extension().and_then(|s| s.to_str()).ok_or_else(|| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "No file extension",
        ))
    })?;

    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    Ok(parent.join(format!("{}_inpainted.{}", stem, extension)))
}
