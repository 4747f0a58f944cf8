use super::WallCollection;
use crate::core::geometry::Wall;

/// Flat single-precision image of a [`WallCollection`] for compute kernels.
///
/// Every record is 32 bytes and 16-byte aligned in the buffer so the layout
/// matches a WGSL `array<struct>` with `vec3<f32>` members.
#[derive(Debug, Clone, Default)]
pub struct PackedWalls {
    pub header: PackedHeader,
    pub spheres: Vec<PackedSphere>,
    pub cylinders: Vec<PackedCylinder>,
    pub planes: Vec<PackedPlane>,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedHeader {
    pub num_spheres: u32,
    pub num_cylinders: u32,
    pub num_planes: u32,
    _pad: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedSphere {
    pub origin: [f32; 3],
    pub radius: f32,
    pub inside: u32,
    _pad: [u32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedCylinder {
    pub origin: [f32; 3],
    pub radius: f32,
    pub axis: [f32; 3],
    pub inside: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedPlane {
    pub origin: [f32; 3],
    pub inside: u32,
    pub normal: [f32; 3],
    _pad: u32,
}

impl PackedWalls {
    pub fn from_collection<const S: usize, const C: usize, const P: usize>(
        walls: &WallCollection<S, C, P>,
    ) -> Self {
        let spheres: Vec<PackedSphere> = walls
            .spheres()
            .iter()
            .map(|w| PackedSphere {
                origin: w.origin().as_vec3().to_array(),
                radius: w.radius() as f32,
                inside: w.inside() as u32,
                _pad: [0; 3],
            })
            .collect();
        let cylinders: Vec<PackedCylinder> = walls
            .cylinders()
            .iter()
            .map(|w| PackedCylinder {
                origin: w.origin().as_vec3().to_array(),
                radius: w.radius() as f32,
                axis: w.axis().as_vec3().to_array(),
                inside: w.inside() as u32,
            })
            .collect();
        let planes: Vec<PackedPlane> = walls
            .planes()
            .iter()
            .map(|w| PackedPlane {
                origin: w.origin().as_vec3().to_array(),
                inside: w.inside() as u32,
                normal: w.normal().as_vec3().to_array(),
                _pad: 0,
            })
            .collect();

        Self {
            header: PackedHeader {
                num_spheres: spheres.len() as u32,
                num_cylinders: cylinders.len() as u32,
                num_planes: planes.len() as u32,
                _pad: 0,
            },
            spheres,
            cylinders,
            planes,
        }
    }

    /// Header followed by the sphere, cylinder and plane records.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(
            std::mem::size_of::<PackedHeader>()
                + 32 * (self.spheres.len() + self.cylinders.len() + self.planes.len()),
        );
        bytes.extend_from_slice(bytemuck::bytes_of(&self.header));
        bytes.extend_from_slice(bytemuck::cast_slice(&self.spheres));
        bytes.extend_from_slice(bytemuck::cast_slice(&self.cylinders));
        bytes.extend_from_slice(bytemuck::cast_slice(&self.planes));
        bytes
    }
}
