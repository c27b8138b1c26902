//! Fast Marching Method orchestrator
//!
//! Drives the main loop of Telea's inpainting algorithm: seed the wavefront at
//! the mask boundary, then repeatedly freeze the closest Band pixel and relax
//! its neighbors until the front has swept the whole masked region.

use crate::inpainting::eikonal::solve_eikonal;
use crate::inpainting::grid::{PixelState, StateGrid, FAR};
use crate::inpainting::heap::BandHeap;
use crate::inpainting::reconstruct::reconstruct_pixel;
use crate::types::{Error, Result};
use image::RgbaImage;
use ndarray::Array2;

/// Inpaint the masked pixels of an RGBA image.
///
/// `mask` is `(y, x)`-indexed with `true` marking pixels to reconstruct, and
/// must match the image dimensions. `radius` bounds the reconstruction window
/// (typical 1–50). Returns a new image: byte-identical to the input outside
/// the mask (alpha everywhere), reconstructed inside it.
///
/// An empty mask returns a plain copy. A fully-masked image has no boundary
/// to march from and is also returned unchanged.
pub fn telea_inpaint(image: &RgbaImage, mask: &Array2<bool>, radius: f32) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidInput(
            "image width and height must be positive".to_string(),
        ));
    }
    if mask.ncols() != width as usize || mask.nrows() != height as usize {
        return Err(Error::InvalidInput(format!(
            "mask is {}x{} but image is {}x{}",
            mask.ncols(),
            mask.nrows(),
            width,
            height
        )));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(Error::InvalidInput(format!(
            "radius must be positive, got {}",
            radius
        )));
    }

    // Scratch output: published only if the whole run succeeds
    let mut output = clone_image(image)?;
    let (mut grid, seeds) = StateGrid::from_mask(mask)?;

    let (w, h) = (width as usize, height as usize);
    let mut heap = BandHeap::new(w * h)?;

    for &(x, y) in &seeds {
        heap.push(y * w + x, 0.0);
        reconstruct_pixel(&mut output, &grid, x, y, radius);
    }

    while let Some((index, _)) = heap.extract_min() {
        let (x, y) = (index % w, index / w);
        grid.state[(y, x)] = PixelState::Known;

        let neighbors = [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];

        for (nx, ny) in neighbors {
            if nx >= w || ny >= h || grid.state[(ny, nx)] == PixelState::Known {
                continue;
            }

            let estimate = solve_eikonal(nx, ny, &grid.state, &grid.dist);
            if estimate >= FAR {
                continue;
            }

            match grid.state[(ny, nx)] {
                PixelState::Unknown => {
                    grid.dist[(ny, nx)] = estimate;
                    grid.state[(ny, nx)] = PixelState::Band;
                    heap.push(ny * w + nx, estimate);
                    reconstruct_pixel(&mut output, &grid, nx, ny, radius);
                }
                PixelState::Band if estimate < grid.dist[(ny, nx)] => {
                    grid.dist[(ny, nx)] = estimate;
                    heap.decrease_key(ny * w + nx, estimate);
                    reconstruct_pixel(&mut output, &grid, nx, ny, radius);
                }
                _ => {}
            }
        }
    }

    Ok(output)
}

/// Fallible copy of the input into the scratch output buffer.
fn clone_image(image: &RgbaImage) -> Result<RgbaImage> {
    let raw = image.as_raw();
    let mut buf = Vec::new();
    buf.try_reserve_exact(raw.len()).map_err(|_| {
        Error::ResourceExhausted(format!(
            "{}x{} output buffer",
            image.width(),
            image.height()
        ))
    })?;
    buf.extend_from_slice(raw);

    RgbaImage::from_raw(image.width(), image.height(), buf)
        .ok_or_else(|| Error::InvalidInput("image buffer size mismatch".to_string()))
}
