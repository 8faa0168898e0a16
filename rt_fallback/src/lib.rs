//! Host-side validation of bottom-level acceleration structure inputs for a raytracing
//! fallback builder: geometry descriptor traversal, format checks and the triangle counts
//! used to size build memory before any GPU work is issued.

pub mod acceleration_structure;
pub mod error;
pub mod prelude;
pub mod traits;
pub mod util;

pub use error::FallbackError;

// Re-exports
pub use ash;
