use std::marker::PhantomData;
use std::ptr;

use ash::vk;

use crate::acceleration_structure::GeometryDesc;
use crate::error::{FallbackError, Result};
use crate::traits::GeometrySource;

/// Raw discriminant selecting how geometry entries are stored in [`RawBuildInputs`]
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ElementsLayout(u32);

impl ElementsLayout {
    /// Entries are stored contiguously
    pub const ARRAY: Self = Self(0);
    /// Entries are reached through an array of pointers
    pub const ARRAY_OF_POINTERS: Self = Self(1);

    pub const fn from_raw(x: u32) -> Self {
        Self(x)
    }

    pub const fn as_raw(self) -> u32 {
        self.0
    }
}

/// Storage of the geometry entries of a build
#[derive(Debug, Copy, Clone)]
pub enum GeometryDescs<'a> {
    Array(&'a [GeometryDesc]),
    ArrayOfPointers(&'a [&'a GeometryDesc]),
}

impl<'a> GeometryDescs<'a> {
    pub fn len(&self) -> usize {
        match self {
            GeometryDescs::Array(descs) => descs.len(),
            GeometryDescs::ArrayOfPointers(descs) => descs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn layout(&self) -> ElementsLayout {
        match self {
            GeometryDescs::Array(_) => ElementsLayout::ARRAY,
            GeometryDescs::ArrayOfPointers(_) => ElementsLayout::ARRAY_OF_POINTERS,
        }
    }

    /// # Panics
    /// Panics if `index` is out of bounds
    pub fn get(&self, index: usize) -> &'a GeometryDesc {
        match *self {
            GeometryDescs::Array(descs) => &descs[index],
            GeometryDescs::ArrayOfPointers(descs) => descs[index],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a GeometryDesc> + '_ {
        (0..self.len()).map(move |index| self.get(index))
    }
}

/// Inputs of a bottom-level acceleration structure build
#[derive(Debug, Copy, Clone)]
pub struct BuildInputs<'a> {
    flags: vk::BuildAccelerationStructureFlagsKHR,
    descs: GeometryDescs<'a>,
}

impl<'a> BuildInputs<'a> {
    pub fn from_array(descs: &'a [GeometryDesc]) -> Self {
        Self {
            flags: vk::BuildAccelerationStructureFlagsKHR::empty(),
            descs: GeometryDescs::Array(descs),
        }
    }

    pub fn from_pointers(descs: &'a [&'a GeometryDesc]) -> Self {
        Self {
            flags: vk::BuildAccelerationStructureFlagsKHR::empty(),
            descs: GeometryDescs::ArrayOfPointers(descs),
        }
    }

    pub fn flags(mut self, flags: vk::BuildAccelerationStructureFlagsKHR) -> Self {
        self.flags = flags;
        self
    }

    pub fn get_flags(&self) -> vk::BuildAccelerationStructureFlagsKHR {
        self.flags
    }

    pub fn descs(&self) -> &GeometryDescs<'a> {
        &self.descs
    }

    pub fn layout(&self) -> ElementsLayout {
        self.descs.layout()
    }
}

/// Entry counts travel as `u32`; longer slices are rejected rather than truncated
fn descs_count(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        FallbackError::InvalidArgument("Geometry descriptor count does not fit in a u32")
    })
}

impl GeometrySource for BuildInputs<'_> {
    fn num_descs(&self) -> Result<u32> {
        descs_count(self.descs.len())
    }

    fn geometry_desc(&self, index: u32) -> Result<&GeometryDesc> {
        Ok(self.descs.get(index as usize))
    }
}

/// Pointer storage of [`RawBuildInputs`], interpreted according to its [`ElementsLayout`]
#[repr(C)]
#[derive(Copy, Clone)]
pub union RawGeometryDescs {
    pub p_geometry_descs: *const GeometryDesc,
    pub pp_geometry_descs: *const *const GeometryDesc,
}

/// C-shaped build inputs: an entry count, a layout discriminant and one of two pointer forms.
///
/// Nothing stops the discriminant from holding a value outside of [`ElementsLayout`]'s
/// constants, so every access checks it.
#[derive(Copy, Clone)]
pub struct RawBuildInputs<'a> {
    flags: vk::BuildAccelerationStructureFlagsKHR,
    num_descs: u32,
    descs_layout: ElementsLayout,
    descs: RawGeometryDescs,
    _marker: PhantomData<&'a GeometryDesc>,
}

impl std::fmt::Debug for RawBuildInputs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawBuildInputs")
            .field("flags", &self.flags)
            .field("num_descs", &self.num_descs)
            .field("descs_layout", &self.descs_layout)
            .field("descs", &unsafe { self.descs.p_geometry_descs })
            .finish()
    }
}

impl<'a> RawBuildInputs<'a> {
    /// # Safety
    /// For [`ElementsLayout::ARRAY`], `descs.p_geometry_descs` must point to `num_descs`
    /// initialized entries that outlive `'a`. For [`ElementsLayout::ARRAY_OF_POINTERS`],
    /// `descs.pp_geometry_descs` must point to `num_descs` non-null pointers, each pointing to an
    /// entry that outlives `'a`. Either pointer may be null when `num_descs` is zero.
    pub unsafe fn new(
        flags: vk::BuildAccelerationStructureFlagsKHR,
        num_descs: u32,
        descs_layout: ElementsLayout,
        descs: RawGeometryDescs,
    ) -> Self {
        Self {
            flags,
            num_descs,
            descs_layout,
            descs,
            _marker: PhantomData,
        }
    }

    pub fn layout(&self) -> ElementsLayout {
        self.descs_layout
    }

    /// Turns the raw inputs back into their typed form
    pub fn resolve(&self) -> Result<BuildInputs<'a>> {
        let len = self.num_descs as usize;
        let descs = match self.descs_layout {
            ElementsLayout::ARRAY => {
                let p = unsafe { self.descs.p_geometry_descs };
                if len == 0 {
                    GeometryDescs::Array(&[])
                } else if p.is_null() {
                    return Err(FallbackError::InvalidArgument(
                        "Null geometry descriptor array provided",
                    ));
                } else {
                    GeometryDescs::Array(unsafe { std::slice::from_raw_parts(p, len) })
                }
            }
            ElementsLayout::ARRAY_OF_POINTERS => {
                let pp = unsafe { self.descs.pp_geometry_descs };
                if len == 0 {
                    GeometryDescs::ArrayOfPointers(&[])
                } else if pp.is_null() {
                    return Err(FallbackError::InvalidArgument(
                        "Null geometry descriptor array provided",
                    ));
                } else {
                    // non-null `*const T` and `&T` share a layout
                    GeometryDescs::ArrayOfPointers(unsafe {
                        std::slice::from_raw_parts(pp as *const &'a GeometryDesc, len)
                    })
                }
            }
            _ => return Err(unexpected_layout()),
        };
        Ok(BuildInputs {
            flags: self.flags,
            descs,
        })
    }
}

fn unexpected_layout() -> FallbackError {
    FallbackError::InvalidArgument("Unexpected value for elements layout")
}

impl GeometrySource for RawBuildInputs<'_> {
    fn num_descs(&self) -> Result<u32> {
        Ok(self.num_descs)
    }

    /// # Panics
    /// Panics if `index` is not below the entry count, the only range the pointers are valid for
    fn geometry_desc(&self, index: u32) -> Result<&GeometryDesc> {
        assert!(
            index < self.num_descs,
            "geometry desc index {} out of bounds for {} descs",
            index,
            self.num_descs
        );
        match self.descs_layout {
            ElementsLayout::ARRAY => {
                Ok(unsafe { &*self.descs.p_geometry_descs.add(index as usize) })
            }
            ElementsLayout::ARRAY_OF_POINTERS => {
                Ok(unsafe { &**self.descs.pp_geometry_descs.add(index as usize) })
            }
            _ => Err(unexpected_layout()),
        }
    }
}

impl<'a> TryFrom<&BuildInputs<'a>> for RawBuildInputs<'a> {
    type Error = FallbackError;

    fn try_from(inputs: &BuildInputs<'a>) -> Result<Self> {
        let descs = match inputs.descs {
            GeometryDescs::Array(descs) => RawGeometryDescs {
                p_geometry_descs: descs.as_ptr(),
            },
            GeometryDescs::ArrayOfPointers(descs) => RawGeometryDescs {
                pp_geometry_descs: descs.as_ptr() as *const *const GeometryDesc,
            },
        };
        Ok(Self {
            flags: inputs.flags,
            num_descs: inputs.num_descs()?,
            descs_layout: inputs.layout(),
            descs,
            _marker: PhantomData,
        })
    }
}

impl Default for RawGeometryDescs {
    fn default() -> Self {
        Self {
            p_geometry_descs: ptr::null(),
        }
    }
}
