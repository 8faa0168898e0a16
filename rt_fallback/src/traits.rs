use crate::acceleration_structure::GeometryDesc;
use crate::error::Result;

/// Anything that holds the geometry entries of a bottom-level build
pub trait GeometrySource {
    /// Number of geometry entries, failing if it cannot be expressed as a `u32`
    fn num_descs(&self) -> Result<u32>;

    /// Resolve the entry at `index`.
    ///
    /// `index` must be below [`Self::num_descs`]; bounds are the caller's responsibility.
    fn geometry_desc(&self, index: u32) -> Result<&GeometryDesc>;
}
