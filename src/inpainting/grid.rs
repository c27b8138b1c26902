//! Pixel state grid and wavefront initialization

use crate::types::{Error, Result};
use ndarray::Array2;

/// Distance sentinel for pixels the wavefront has not reached yet.
pub const FAR: f32 = f32::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelState {
    /// Distance and color are final
    Known,
    /// On the wavefront with a tentative distance, held in the queue
    Band,
    /// Not reached yet
    Unknown,
}

/// Per-pixel marching state: flags and arrival-time distances, both in
/// `(y, x)` layout matching the mask.
pub struct StateGrid {
    pub state: Array2<PixelState>,
    pub dist: Array2<f32>,
}

impl StateGrid {
    /// Build the initial state from a mask and find the starting wavefront.
    ///
    /// Unmasked pixels are Known at distance 0; masked pixels are Unknown at
    /// the FAR sentinel, except those with a 4-connected Known neighbor, which
    /// become the initial Band at distance 0. Seeds are returned as `(x, y)`
    /// in raster order.
    ///
    /// An empty mask and a fully-masked image both yield no seeds.
    pub fn from_mask(mask: &Array2<bool>) -> Result<(Self, Vec<(usize, usize)>)> {
        let (height, width) = (mask.nrows(), mask.ncols());
        let mut state = try_grid(height, width, PixelState::Unknown)?;
        let mut dist = try_grid(height, width, FAR)?;

        for y in 0..height {
            for x in 0..width {
                if !mask[(y, x)] {
                    state[(y, x)] = PixelState::Known;
                    dist[(y, x)] = 0.0;
                }
            }
        }

        let mut seeds = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if state[(y, x)] == PixelState::Unknown && has_known_neighbor(&state, x, y) {
                    state[(y, x)] = PixelState::Band;
                    dist[(y, x)] = 0.0;
                    seeds.push((x, y));
                }
            }
        }

        Ok((Self { state, dist }, seeds))
    }
}

/// Check for a 4-connected Known neighbor.
fn has_known_neighbor(state: &Array2<PixelState>, x: usize, y: usize) -> bool {
    let (height, width) = (state.nrows(), state.ncols());
    let neighbors = [
        (x.wrapping_sub(1), y),
        (x + 1, y),
        (x, y.wrapping_sub(1)),
        (x, y + 1),
    ];

    neighbors
        .into_iter()
        .any(|(nx, ny)| nx < width && ny < height && state[(ny, nx)] == PixelState::Known)
}

/// Allocate a filled working grid, surfacing allocation failure as an error
/// instead of aborting.
fn try_grid<T: Clone>(height: usize, width: usize, fill: T) -> Result<Array2<T>> {
    let len = height
        .checked_mul(width)
        .ok_or_else(|| Error::ResourceExhausted(format!("{}x{} working grid", width, height)))?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::ResourceExhausted(format!("{}x{} working grid", width, height)))?;
    buf.resize(len, fill);

    Array2::from_shape_vec((height, width), buf)
        .map_err(|e| Error::InvalidInput(format!("grid shape error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_masked_pixel_seeds_band() {
        let mut mask = Array2::from_elem((3, 3), false);
        mask[(1, 1)] = true;

        let (grid, seeds) = StateGrid::from_mask(&mask).unwrap();

        assert_eq!(seeds, vec![(1, 1)]);
        assert_eq!(grid.state[(1, 1)], PixelState::Band);
        assert_eq!(grid.dist[(1, 1)], 0.0);
        assert_eq!(grid.state[(0, 0)], PixelState::Known);
        assert_eq!(grid.dist[(0, 0)], 0.0);
    }

    #[test]
    fn test_interior_of_thick_mask_stays_unknown() {
        // 5x5 with a 3x3 masked block: the center has no Known neighbor
        let mut mask = Array2::from_elem((5, 5), false);
        for y in 1..4 {
            for x in 1..4 {
                mask[(y, x)] = true;
            }
        }

        let (grid, seeds) = StateGrid::from_mask(&mask).unwrap();

        assert_eq!(seeds.len(), 8);
        assert_eq!(grid.state[(2, 2)], PixelState::Unknown);
        assert_eq!(grid.dist[(2, 2)], FAR);
        assert_eq!(grid.state[(1, 2)], PixelState::Band);
    }

    #[test]
    fn test_empty_mask_has_no_seeds() {
        let mask = Array2::from_elem((4, 4), false);
        let (grid, seeds) = StateGrid::from_mask(&mask).unwrap();

        assert!(seeds.is_empty());
        assert!(grid.state.iter().all(|&s| s == PixelState::Known));
    }

    #[test]
    fn test_full_mask_has_no_seeds() {
        let mask = Array2::from_elem((4, 4), true);
        let (grid, seeds) = StateGrid::from_mask(&mask).unwrap();

        assert!(seeds.is_empty());
        assert!(grid.state.iter().all(|&s| s == PixelState::Unknown));
        assert!(grid.dist.iter().all(|&d| d == FAR));
    }

    #[test]
    fn test_seeds_are_raster_ordered() {
        let mut mask = Array2::from_elem((4, 4), false);
        mask[(0, 2)] = true;
        mask[(2, 1)] = true;
        mask[(2, 3)] = true;

        let (_, seeds) = StateGrid::from_mask(&mask).unwrap();
        assert_eq!(seeds, vec![(2, 0), (1, 2), (3, 2)]);
    }
}
