//! Telea Fast Marching Method inpainting engine

pub mod eikonal;
pub mod grid;
pub mod heap;
pub mod reconstruct;
pub mod telea;

pub use telea::telea_inpaint;
