//! Discrete Eikonal update for wavefront arrival times

use crate::inpainting::grid::{PixelState, FAR};
use ndarray::Array2;

/// Tentative arrival time at `(x, y)` from its resolved 4-neighbors.
///
/// Upwind finite-difference solution of `|∇T| = 1` on a unit grid: take the
/// smaller distance on each axis (neighbors still Unknown do not qualify) and
/// solve the quadratic when both axes agree closely enough for it to have a
/// real root, else fall back to the smaller axis plus one grid step.
///
/// Pure with respect to the grid: safe to recompute for the same pixel as its
/// neighbors resolve.
pub fn solve_eikonal(
    x: usize,
    y: usize,
    state: &Array2<PixelState>,
    dist: &Array2<f32>,
) -> f32 {
    let dx = axis_min(state, dist, [(x.wrapping_sub(1), y), (x + 1, y)]);
    let dy = axis_min(state, dist, [(x, y.wrapping_sub(1)), (x, y + 1)]);

    match (dx, dy) {
        (None, None) => FAR,
        (Some(d), None) | (None, Some(d)) => d + 1.0,
        (Some(dx), Some(dy)) => {
            let diff = (dx - dy).abs();
            if diff < 1.0 {
                (dx + dy + (2.0 - diff * diff).sqrt()) / 2.0
            } else {
                dx.min(dy) + 1.0
            }
        }
    }
}

/// Smallest distance among the axis pair, ignoring out-of-bounds and Unknown
/// neighbors.
fn axis_min(
    state: &Array2<PixelState>,
    dist: &Array2<f32>,
    neighbors: [(usize, usize); 2],
) -> Option<f32> {
    let (height, width) = (state.nrows(), state.ncols());
    let mut best: Option<f32> = None;

    for (nx, ny) in neighbors {
        if nx < width && ny < height && state[(ny, nx)] != PixelState::Unknown {
            let d = dist[(ny, nx)];
            best = Some(best.map_or(d, |b| b.min(d)));
        }
    }

    best
}
