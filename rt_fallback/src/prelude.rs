pub use super::acceleration_structure::{
    get_total_triangle_count, triangle_count, AabbsDesc, BuildInputs, ElementsLayout, Geometry,
    GeometryDesc, GeometryDescs, RawBuildInputs, RawGeometryDescs, TrianglesDesc,
};
pub use super::error::{self, ErrorKind, FallbackError};
pub use super::traits::*;
pub use super::util::format::*;
pub use ash::vk;
