use glam::DVec3;
use wallfield::core::field::{MAX_CYLINDERS, MAX_PLANES, MAX_SPHERES, WallCollection, WallGroup};
use wallfield::core::geometry::{CylinderWall, PlaneWall, SphereWall, WallKind};
use wallfield::error::WallError;

fn spheres(n: usize) -> WallGroup {
    (0..n).fold(WallGroup::new(), |group, i| {
        group.with_sphere(SphereWall::new(1.0 + i as f64, DVec3::ZERO, true).unwrap())
    })
}

fn cylinders(n: usize) -> WallGroup {
    (0..n).fold(WallGroup::new(), |group, i| {
        group.with_cylinder(CylinderWall::new(1.0 + i as f64, DVec3::ZERO, DVec3::Z, true).unwrap())
    })
}

fn planes(n: usize) -> WallGroup {
    (0..n).fold(WallGroup::new(), |group, i| {
        group.with_plane(PlaneWall::new(DVec3::new(0.0, 0.0, i as f64), DVec3::Z, true).unwrap())
    })
}

#[test]
fn test_default_capacities() {
    assert_eq!(MAX_SPHERES, 20);
    assert_eq!(MAX_CYLINDERS, 20);
    assert_eq!(MAX_PLANES, 60);
    assert_eq!(WallCollection::<20, 20, 60>::capacity(WallKind::Sphere), 20);
    assert_eq!(<WallCollection>::capacity(WallKind::Plane), 60);
}

#[test]
fn test_full_sphere_capacity_builds() {
    let walls = spheres(MAX_SPHERES).build().unwrap();
    assert_eq!(walls.spheres().len(), 20);
    assert_eq!(walls.len(), 20);
    // Insertion order is kept.
    assert_eq!(walls.spheres()[0].radius(), 1.0);
    assert_eq!(walls.spheres()[19].radius(), 20.0);
}

#[test]
fn test_one_sphere_too_many() {
    let err = spheres(MAX_SPHERES + 1).build().unwrap_err();
    println!("overflow: {}", err);
    assert!(matches!(
        err,
        WallError::CapacityExceeded {
            kind: WallKind::Sphere,
            count: 21,
            capacity: 20
        }
    ));
    assert!(err.to_string().contains("sphere"));
}

#[test]
fn test_cylinder_and_plane_overflow() {
    assert!(cylinders(MAX_CYLINDERS).build().is_ok());
    assert!(matches!(
        cylinders(MAX_CYLINDERS + 1).build(),
        Err(WallError::CapacityExceeded {
            kind: WallKind::Cylinder,
            count: 21,
            capacity: 20
        })
    ));

    assert!(planes(MAX_PLANES).build().is_ok());
    assert!(matches!(
        planes(MAX_PLANES + 1).build(),
        Err(WallError::CapacityExceeded {
            kind: WallKind::Plane,
            count: 61,
            capacity: 60
        })
    ));
}

#[test]
fn test_overflow_in_one_kind_rejects_the_whole_group() {
    let mut group = planes(MAX_PLANES + 5);
    group.spheres = spheres(3).spheres;
    group.cylinders = cylinders(2).cylinders;

    let err = group.build().unwrap_err();
    assert!(matches!(err, WallError::CapacityExceeded { kind: WallKind::Plane, .. }));
}

#[test]
fn test_custom_capacities() {
    let group = spheres(3).with_plane(PlaneWall::new(DVec3::ZERO, DVec3::X, false).unwrap());

    let walls = group.build_with_capacity::<3, 0, 1>().unwrap();
    assert_eq!(walls.len(), 4);
    assert!(walls.cylinders().is_empty());

    let err = group.build_with_capacity::<2, 0, 1>().unwrap_err();
    assert!(matches!(
        err,
        WallError::CapacityExceeded {
            kind: WallKind::Sphere,
            count: 3,
            capacity: 2
        }
    ));
}

#[test]
fn test_push_past_capacity_keeps_existing_walls() {
    let mut walls: WallCollection<2, 2, 2> = WallCollection::new();
    assert!(walls.is_empty());

    let plane = PlaneWall::new(DVec3::ZERO, DVec3::Y, true).unwrap();
    walls.push_plane(plane).unwrap();
    walls.push_plane(plane).unwrap();
    assert!(walls.push_plane(plane).is_err());
    assert_eq!(walls.planes().len(), 2);
    assert_eq!(walls.len(), 2);
}
