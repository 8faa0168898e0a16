pub use build_inputs::*;
pub use geometry::*;
pub use triangle_count::*;

pub mod build_inputs;
pub mod geometry;
pub mod triangle_count;
