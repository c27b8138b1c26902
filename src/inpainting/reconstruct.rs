//! Weighted color reconstruction of wavefront pixels
//!
//! A pixel's fill color is the weighted average of the Known pixels inside its
//! radius window. Each contribution is weighted by alignment with the front
//! normal (the distance-field gradient), similarity of arrival time, and
//! proximity. RGB only; alpha is never touched.

use crate::inpainting::grid::{PixelState, StateGrid};
use image::RgbaImage;

/// Keeps the directional weight positive when a neighbor direction is
/// orthogonal to the front normal.
const DIR_EPSILON: f32 = 1e-6;

/// Recompute the color at `(x, y)` from the Known pixels within `radius`.
///
/// If no Known pixel qualifies, the pixel keeps its current value. That
/// happens when the radius is small relative to the masked region's
/// thickness, and is not an error.
pub fn reconstruct_pixel(image: &mut RgbaImage, grid: &StateGrid, x: usize, y: usize, radius: f32) {
    let (height, width) = (grid.state.nrows(), grid.state.ncols());
    let (gx, gy) = distance_gradient(grid, x, y);
    let target_dist = grid.dist[(y, x)];

    let r = radius.ceil() as usize;
    let x_start = x.saturating_sub(r);
    let x_end = (x + r + 1).min(width);
    let y_start = y.saturating_sub(r);
    let y_end = (y + r + 1).min(height);

    let mut sum = [0.0f32; 3];
    let mut sum_weight = 0.0f32;

    for ny in y_start..y_end {
        for nx in x_start..x_end {
            if grid.state[(ny, nx)] != PixelState::Known {
                continue;
            }

            let dx = x as f32 - nx as f32;
            let dy = y as f32 - ny as f32;
            let length = (dx * dx + dy * dy).sqrt();
            if length == 0.0 || length > radius {
                continue;
            }

            let w_dir = ((dx / length) * gx + (dy / length) * gy).abs() + DIR_EPSILON;
            let w_level = 1.0 / (1.0 + (grid.dist[(ny, nx)] - target_dist).abs());
            let w_dist = 1.0 / (length * length);
            let weight = w_dir * w_level * w_dist;

            let pixel = image.get_pixel(nx as u32, ny as u32);
            sum[0] += weight * pixel[0] as f32;
            sum[1] += weight * pixel[1] as f32;
            sum[2] += weight * pixel[2] as f32;
            sum_weight += weight;
        }
    }

    if sum_weight > 0.0 {
        let pixel = image.get_pixel_mut(x as u32, y as u32);
        pixel[0] = (sum[0] / sum_weight).round() as u8;
        pixel[1] = (sum[1] / sum_weight).round() as u8;
        pixel[2] = (sum[2] / sum_weight).round() as u8;
    }
}

/// Distance-field gradient at `(x, y)`: central difference where both axis
/// neighbors are resolved, one-sided where only one is, zero where neither is.
fn distance_gradient(grid: &StateGrid, x: usize, y: usize) -> (f32, f32) {
    let center = grid.dist[(y, x)];
    let gx = axis_gradient(
        center,
        sample(grid, x.wrapping_sub(1), y),
        sample(grid, x + 1, y),
    );
    let gy = axis_gradient(
        center,
        sample(grid, x, y.wrapping_sub(1)),
        sample(grid, x, y + 1),
    );
    (gx, gy)
}

fn axis_gradient(center: f32, prev: Option<f32>, next: Option<f32>) -> f32 {
    match (prev, next) {
        (Some(p), Some(n)) => (n - p) * 0.5,
        (None, Some(n)) => n - center,
        (Some(p), None) => center - p,
        (None, None) => 0.0,
    }
}

/// Distance at a neighbor, or None if out of bounds or still Unknown.
fn sample(grid: &StateGrid, x: usize, y: usize) -> Option<f32> {
    let (height, width) = (grid.state.nrows(), grid.state.ncols());
    if x < width && y < height && grid.state[(y, x)] != PixelState::Unknown {
        Some(grid.dist[(y, x)])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use ndarray::Array2;

    fn uniform_grid(height: usize, width: usize) -> StateGrid {
        StateGrid {
            state: Array2::from_elem((height, width), PixelState::Known),
            dist: Array2::from_elem((height, width), 0.0),
        }
    }

    #[test]
    fn test_uniform_neighborhood_restores_exact_color() {
        let mut image = RgbaImage::from_pixel(5, 5, Rgba([180, 90, 30, 255]));
        image.put_pixel(2, 2, Rgba([0, 0, 0, 255]));

        let mut grid = uniform_grid(5, 5);
        grid.state[(2, 2)] = PixelState::Band;

        reconstruct_pixel(&mut image, &grid, 2, 2, 3.0);

        assert_eq!(image.get_pixel(2, 2), &Rgba([180, 90, 30, 255]));
    }

    #[test]
    fn test_no_qualifying_neighbor_keeps_prior_value() {
        let mut image = RgbaImage::from_pixel(3, 3, Rgba([10, 20, 30, 200]));

        let grid = StateGrid {
            state: Array2::from_elem((3, 3), PixelState::Unknown),
            dist: Array2::from_elem((3, 3), crate::inpainting::grid::FAR),
        };

        reconstruct_pixel(&mut image, &grid, 1, 1, 2.0);

        assert_eq!(image.get_pixel(1, 1), &Rgba([10, 20, 30, 200]));
    }

    #[test]
    fn test_alpha_is_untouched() {
        let mut image = RgbaImage::from_pixel(3, 3, Rgba([100, 100, 100, 255]));
        image.put_pixel(1, 1, Rgba([0, 0, 0, 42]));

        let mut grid = uniform_grid(3, 3);
        grid.state[(1, 1)] = PixelState::Band;

        reconstruct_pixel(&mut image, &grid, 1, 1, 2.0);

        assert_eq!(image.get_pixel(1, 1)[3], 42);
        assert_eq!(image.get_pixel(1, 1)[0], 100);
    }

    #[test]
    fn test_radius_excludes_distant_pixels() {
        // Known pixels only in the far corner, outside a radius of 1.5
        let mut image = RgbaImage::from_pixel(5, 5, Rgba([7, 7, 7, 255]));
        image.put_pixel(0, 0, Rgba([250, 250, 250, 255]));

        let mut grid = StateGrid {
            state: Array2::from_elem((5, 5), PixelState::Unknown),
            dist: Array2::from_elem((5, 5), crate::inpainting::grid::FAR),
        };
        grid.state[(0, 0)] = PixelState::Known;
        grid.dist[(0, 0)] = 0.0;
        grid.state[(4, 4)] = PixelState::Band;
        grid.dist[(4, 4)] = 0.0;

        reconstruct_pixel(&mut image, &grid, 4, 4, 1.5);

        // (0,0) is outside the window: nothing qualified, value kept
        assert_eq!(image.get_pixel(4, 4), &Rgba([7, 7, 7, 255]));
    }

    #[test]
    fn test_gradient_central_and_one_sided() {
        let mut grid = uniform_grid(3, 3);
        grid.dist[(1, 0)] = 1.0;
        grid.dist[(1, 2)] = 3.0;
        grid.dist[(1, 1)] = 2.0;
        grid.state[(0, 1)] = PixelState::Unknown;
        grid.dist[(2, 1)] = 6.0;

        let (gx, gy) = distance_gradient(&grid, 1, 1);
        assert_eq!(gx, 1.0); // central: (3 - 1) / 2
        assert_eq!(gy, 4.0); // one-sided: 6 - 2
    }
}
