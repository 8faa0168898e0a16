use ash::vk;

/// One piece of input geometry for a bottom-level build
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct GeometryDesc {
    pub flags: vk::GeometryFlagsKHR,
    pub geometry: Geometry,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Geometry {
    Triangles(TrianglesDesc),
    /// Procedural primitives bounded by AABBs, resolved by intersection shaders
    ProceduralAabbs(AabbsDesc),
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::Triangles(TrianglesDesc::default())
    }
}

/// Triangle list geometry.
///
/// An `index_format` of [`vk::Format::UNDEFINED`] means there is no index buffer, in which
/// case `vertex_count` drives the triangle count instead of `index_count`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TrianglesDesc {
    /// Device address of a 3x4 row-major transform, `0` if none
    pub transform: vk::DeviceAddress,
    pub index_format: vk::Format,
    pub vertex_format: vk::Format,
    pub index_count: u32,
    pub vertex_count: u32,
    pub index_buffer: vk::DeviceAddress,
    pub vertex_buffer: vk::DeviceAddress,
    pub vertex_stride: vk::DeviceSize,
}

impl Default for TrianglesDesc {
    fn default() -> Self {
        Self {
            transform: 0,
            index_format: vk::Format::UNDEFINED,
            vertex_format: vk::Format::R32G32B32_SFLOAT,
            index_count: 0,
            vertex_count: 0,
            index_buffer: 0,
            vertex_buffer: 0,
            vertex_stride: (std::mem::size_of::<f32>() * 3) as vk::DeviceSize,
        }
    }
}

impl TrianglesDesc {
    pub fn transform(mut self, transform: Option<vk::DeviceAddress>) -> Self {
        self.transform = transform.unwrap_or(0);
        self
    }

    pub fn index_format(mut self, format: vk::Format) -> Self {
        self.index_format = format;
        self
    }

    pub fn vertex_format(mut self, format: vk::Format) -> Self {
        self.vertex_format = format;
        self
    }

    pub fn index_count(mut self, count: u32) -> Self {
        self.index_count = count;
        self
    }

    pub fn vertex_count(mut self, count: u32) -> Self {
        self.vertex_count = count;
        self
    }

    pub fn index_buffer(mut self, address: vk::DeviceAddress) -> Self {
        self.index_buffer = address;
        self
    }

    pub fn vertex_buffer(mut self, address: vk::DeviceAddress, stride: vk::DeviceSize) -> Self {
        self.vertex_buffer = address;
        self.vertex_stride = stride;
        self
    }

    /// Wraps the triangles into a [`GeometryDesc`] with the given flags
    pub fn into_geometry(self, flags: vk::GeometryFlagsKHR) -> GeometryDesc {
        GeometryDesc {
            flags,
            geometry: Geometry::Triangles(self),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct AabbsDesc {
    pub aabb_count: u64,
    pub aabbs: vk::DeviceAddress,
    pub stride: vk::DeviceSize,
}

impl AabbsDesc {
    pub fn into_geometry(self, flags: vk::GeometryFlagsKHR) -> GeometryDesc {
        GeometryDesc {
            flags,
            geometry: Geometry::ProceduralAabbs(self),
        }
    }
}

impl GeometryDesc {
    pub fn triangles(&self) -> Option<&TrianglesDesc> {
        match &self.geometry {
            Geometry::Triangles(triangles) => Some(triangles),
            Geometry::ProceduralAabbs(_) => None,
        }
    }

    /// Vulkan geometry type of this entry
    pub fn ty(&self) -> vk::GeometryTypeKHR {
        match self.geometry {
            Geometry::Triangles(_) => vk::GeometryTypeKHR::TRIANGLES,
            Geometry::ProceduralAabbs(_) => vk::GeometryTypeKHR::AABBS,
        }
    }
}
