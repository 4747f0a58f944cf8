use crate::core::geometry::{CylinderWall, PlaneWall, SphereWall, Wall, WallKind};
use crate::error::WallError;

pub mod packed;

pub use packed::PackedWalls;

/// Default number of sphere walls a collection can hold.
pub const MAX_SPHERES: usize = 20;
/// Default number of cylinder walls a collection can hold.
pub const MAX_CYLINDERS: usize = 20;
/// Default number of plane walls a collection can hold.
pub const MAX_PLANES: usize = 60;

/// Fixed-capacity set of walls, evaluated as a whole for every particle.
///
/// Storage is inline (array + count per geometry kind), so a collection is
/// `Copy` and evaluating it never touches the heap. Capacities are const
/// parameters; the defaults give room for 20 spheres, 20 cylinders and 60
/// planes.
#[derive(Debug, Clone, Copy)]
pub struct WallCollection<
    const S: usize = MAX_SPHERES,
    const C: usize = MAX_CYLINDERS,
    const P: usize = MAX_PLANES,
> {
    spheres: [SphereWall; S],
    cylinders: [CylinderWall; C],
    planes: [PlaneWall; P],
    num_spheres: usize,
    num_cylinders: usize,
    num_planes: usize,
}

impl<const S: usize, const C: usize, const P: usize> Default for WallCollection<S, C, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const S: usize, const C: usize, const P: usize> WallCollection<S, C, P> {
    pub fn new() -> Self {
        Self {
            spheres: [SphereWall::default(); S],
            cylinders: [CylinderWall::default(); C],
            planes: [PlaneWall::default(); P],
            num_spheres: 0,
            num_cylinders: 0,
            num_planes: 0,
        }
    }

    pub const fn capacity(kind: WallKind) -> usize {
        match kind {
            WallKind::Sphere => S,
            WallKind::Cylinder => C,
            WallKind::Plane => P,
        }
    }

    pub fn spheres(&self) -> &[SphereWall] {
        &self.spheres[..self.num_spheres]
    }

    pub fn cylinders(&self) -> &[CylinderWall] {
        &self.cylinders[..self.num_cylinders]
    }

    pub fn planes(&self) -> &[PlaneWall] {
        &self.planes[..self.num_planes]
    }

    pub fn push_sphere(&mut self, wall: SphereWall) -> Result<(), WallError> {
        push(&mut self.spheres, &mut self.num_spheres, wall)
    }

    pub fn push_cylinder(&mut self, wall: CylinderWall) -> Result<(), WallError> {
        push(&mut self.cylinders, &mut self.num_cylinders, wall)
    }

    pub fn push_plane(&mut self, wall: PlaneWall) -> Result<(), WallError> {
        push(&mut self.planes, &mut self.num_planes, wall)
    }

    /// Total number of configured walls across all kinds.
    pub fn len(&self) -> usize {
        self.num_spheres + self.num_cylinders + self.num_planes
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn push<W: Wall, const N: usize>(
    slots: &mut [W; N],
    count: &mut usize,
    wall: W,
) -> Result<(), WallError> {
    let slot = slots.get_mut(*count).ok_or(WallError::CapacityExceeded {
        kind: W::KIND,
        count: *count + 1,
        capacity: N,
    })?;
    *slot = wall;
    *count += 1;
    Ok(())
}

/// Growable description of a wall set, checked against the fixed capacities
/// when it is turned into a [`WallCollection`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallGroup {
    pub spheres: Vec<SphereWall>,
    pub cylinders: Vec<CylinderWall>,
    pub planes: Vec<PlaneWall>,
}

impl WallGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sphere(mut self, wall: SphereWall) -> Self {
        self.spheres.push(wall);
        self
    }

    pub fn with_cylinder(mut self, wall: CylinderWall) -> Self {
        self.cylinders.push(wall);
        self
    }

    pub fn with_plane(mut self, wall: PlaneWall) -> Self {
        self.planes.push(wall);
        self
    }

    /// Builds a collection with the default capacities.
    pub fn build(&self) -> Result<WallCollection, WallError> {
        self.build_with_capacity()
    }

    /// Builds a collection, failing if any kind overflows its capacity.
    ///
    /// Nothing is partially built: an overflow in any kind is reported before
    /// a single wall is copied.
    pub fn build_with_capacity<const S: usize, const C: usize, const P: usize>(
        &self,
    ) -> Result<WallCollection<S, C, P>, WallError> {
        check_capacity(WallKind::Sphere, self.spheres.len(), S)?;
        check_capacity(WallKind::Cylinder, self.cylinders.len(), C)?;
        check_capacity(WallKind::Plane, self.planes.len(), P)?;

        let mut walls = WallCollection::new();
        for wall in &self.spheres {
            walls.push_sphere(*wall)?;
        }
        for wall in &self.cylinders {
            walls.push_cylinder(*wall)?;
        }
        for wall in &self.planes {
            walls.push_plane(*wall)?;
        }

        tracing::info!(
            target: "walls",
            spheres = walls.spheres().len(),
            cylinders = walls.cylinders().len(),
            planes = walls.planes().len(),
            "wall collection built"
        );
        Ok(walls)
    }
}

fn check_capacity(kind: WallKind, count: usize, capacity: usize) -> Result<(), WallError> {
    if count > capacity {
        tracing::error!(
            target: "walls",
            %kind,
            count,
            capacity,
            "more walls than the maximum allowed were specified"
        );
        return Err(WallError::CapacityExceeded {
            kind,
            count,
            capacity,
        });
    }
    Ok(())
}
