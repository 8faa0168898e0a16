//! Which buffer element formats the fallback builder accepts as geometry input

use ash::vk;

use crate::acceleration_structure::TrianglesDesc;
use crate::error::{FallbackError, Result};

/// Only 3 and 4 component 32-bit float positions are readable by the build shaders
pub fn is_vertex_buffer_format_supported(format: vk::Format) -> bool {
    matches!(
        format,
        vk::Format::R32G32B32_SFLOAT | vk::Format::R32G32B32A32_SFLOAT
    )
}

/// [`vk::Format::UNDEFINED`] stands for "no index buffer" and is accepted
pub fn is_index_buffer_format_supported(format: vk::Format) -> bool {
    matches!(
        format,
        vk::Format::R32_UINT | vk::Format::R16_UINT | vk::Format::UNDEFINED
    )
}

pub fn uses_null_index_buffer(format: vk::Format) -> bool {
    format == vk::Format::UNDEFINED
}

/// Element format a Vulkan index type reads as, `None` for index types without a counterpart.
///
/// 8-bit indices map to [`vk::Format::R8_UINT`], which the index policy then rejects.
pub fn index_format_from_index_type(index_type: vk::IndexType) -> Option<vk::Format> {
    match index_type {
        vk::IndexType::UINT16 => Some(vk::Format::R16_UINT),
        vk::IndexType::UINT32 => Some(vk::Format::R32_UINT),
        vk::IndexType::NONE_KHR => Some(vk::Format::UNDEFINED),
        // also covers the `UINT8_EXT` alias
        vk::IndexType::UINT8_KHR => Some(vk::Format::R8_UINT),
        _ => None,
    }
}

/// Checks the element formats of the buffers attached to a triangles entry
pub fn validate_triangles_formats(triangles: &TrianglesDesc) -> Result<()> {
    if !is_vertex_buffer_format_supported(triangles.vertex_format) {
        return Err(FallbackError::NotImplemented(
            "Unsupported vertex buffer format provided",
        ));
    }
    if !is_index_buffer_format_supported(triangles.index_format) {
        return Err(FallbackError::NotImplemented(
            "Unsupported index buffer format provided",
        ));
    }
    Ok(())
}
