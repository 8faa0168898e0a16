use crate::acceleration_structure::{Geometry, GeometryDesc};
use crate::error::{FallbackError, Result};
use crate::traits::GeometrySource;
use crate::util::format::{is_index_buffer_format_supported, uses_null_index_buffer};

/// Number of triangles a single geometry entry contributes to a build.
///
/// Geometry is always read as a triangle list, so the vertex count (no index buffer) or the
/// index count must be a multiple of 3. Procedural AABBs are rejected rather than skipped.
pub fn triangle_count(desc: &GeometryDesc) -> Result<u32> {
    let triangles = match &desc.geometry {
        Geometry::Triangles(triangles) => triangles,
        Geometry::ProceduralAabbs(_) => {
            return Err(FallbackError::NotImplemented(
                "Intersection shaders are not currently supported. This error was thrown due to the use of procedural AABB geometry",
            ));
        }
    };

    if !is_index_buffer_format_supported(triangles.index_format) {
        return Err(FallbackError::NotImplemented(
            "Unsupported index buffer format provided",
        ));
    }

    let null_index_buffer = uses_null_index_buffer(triangles.index_format);
    let vertex_count = if null_index_buffer {
        triangles.vertex_count
    } else {
        triangles.index_count
    };
    if vertex_count % 3 != 0 {
        return Err(FallbackError::InvalidArgument(if null_index_buffer {
            "Invalid vertex count provided, must be a multiple of 3 when there is no index buffer since geometry is always a triangle list"
        } else {
            "Invalid index count provided, must be a multiple of 3 since geometry is always a triangle list"
        }));
    }
    Ok(vertex_count / 3)
}

/// Sum of [`triangle_count`] over every entry of `source`.
///
/// The first invalid entry fails the whole count.
pub fn get_total_triangle_count<S: GeometrySource + ?Sized>(source: &S) -> Result<u32> {
    let num_descs = source.num_descs()?;
    let mut total_triangles: u32 = 0;
    for index in 0..num_descs {
        let desc = source.geometry_desc(index)?;
        let triangles = triangle_count(desc)?;
        #[cfg(feature = "log-validation")]
        tracing::trace!("Geometry {} contributes {} triangles", index, triangles);
        total_triangles = total_triangles.checked_add(triangles).ok_or(
            FallbackError::InvalidArgument("Total triangle count overflows u32"),
        )?;
    }

    #[cfg(feature = "log-validation")]
    tracing::debug!(
        "Validated {} geometry descs, {} triangles total",
        num_descs,
        total_triangles
    );
    Ok(total_triangles)
}
