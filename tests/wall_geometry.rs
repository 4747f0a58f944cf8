use glam::DVec3;
use wallfield::core::geometry::{CylinderWall, PlaneWall, SphereWall, Wall};

#[test]
fn test_plane_separation_is_unit_along_normal() {
    let plane = PlaneWall::new(DVec3::ZERO, DVec3::Z, true).unwrap();
    let point = plane.origin() + plane.normal();

    let dx = plane.separation(point);
    assert_eq!(dx, DVec3::Z);
    assert_eq!(dx.length_squared(), 1.0);
}

#[test]
fn test_oblique_plane_separation() {
    let origin = DVec3::new(1.0, -1.0, 0.5);
    let plane = PlaneWall::new(origin, DVec3::new(1.0, 2.0, 2.0), true).unwrap();
    let n = plane.normal();
    assert!((n.length() - 1.0).abs() < 1e-15, "normal must be normalized");

    let dx = plane.separation(origin + n * 1.5);
    println!("oblique separation: {:?}", dx);
    assert!((dx.length_squared() - 2.25).abs() < 1e-12);
    assert!((dx - n * 1.5).length() < 1e-12);
    assert!((plane.height(origin - n * 0.25) + 0.25).abs() < 1e-12);
}

#[test]
fn test_sphere_distance_to_surface() {
    let sphere = SphereWall::new(5.0, DVec3::new(1.0, 1.0, 1.0), true).unwrap();

    // Inside, 2 units from the surface: separation points from the surface inward.
    let point = DVec3::new(1.0, 1.0, 4.0);
    let dx = sphere.separation(point);
    assert_eq!(dx, DVec3::new(0.0, 0.0, -2.0));

    // On the surface there is no separation at all.
    assert_eq!(sphere.separation(DVec3::new(6.0, 1.0, 1.0)).length(), 0.0);
}

#[test]
fn test_sphere_violation_grows_outward() {
    let sphere = SphereWall::new(2.0, DVec3::ZERO, true).unwrap();

    let near = sphere.displacement(DVec3::new(3.0, 0.0, 0.0));
    let far = sphere.displacement(DVec3::new(4.0, 0.0, 0.0));

    // Crossed to the excluded side: the displacement points outward and
    // lengthens with the violation.
    assert_eq!(near, DVec3::new(1.0, 0.0, 0.0));
    assert_eq!(far, DVec3::new(2.0, 0.0, 0.0));

    // The separation points back into the sphere, so repulsion restores.
    assert_eq!(sphere.separation(DVec3::new(4.0, 0.0, 0.0)), DVec3::new(-2.0, 0.0, 0.0));
}

#[test]
fn test_exterior_sphere_pushes_outward() {
    let sphere = SphereWall::new(2.0, DVec3::ZERO, false).unwrap();

    let allowed = sphere.separation(DVec3::new(0.0, 3.0, 0.0));
    let crossed = sphere.separation(DVec3::new(0.0, 1.0, 0.0));
    assert_eq!(allowed, DVec3::new(0.0, 1.0, 0.0));
    assert_eq!(crossed, DVec3::new(0.0, 1.0, 0.0));
}

#[test]
fn test_cylinder_ignores_axial_offset() {
    let cylinder = CylinderWall::new(3.0, DVec3::ZERO, DVec3::new(0.0, 0.0, 4.0), true).unwrap();
    assert_eq!(cylinder.axis(), DVec3::Z);

    let a = cylinder.separation(DVec3::new(1.0, 0.0, 0.0));
    let b = cylinder.separation(DVec3::new(1.0, 0.0, 250.0));
    assert_eq!(a, b);
    assert_eq!(a, DVec3::new(-2.0, 0.0, 0.0));
}

#[test]
fn test_tilted_cylinder_distance() {
    let axis = DVec3::new(1.0, 1.0, 0.0);
    let cylinder = CylinderWall::new(2.0, DVec3::ZERO, axis, false).unwrap();

    // 5 units along the axis, 3 units off it (along z).
    let point = axis.normalize() * 5.0 + DVec3::Z * 3.0;
    let dx = cylinder.separation(point);
    assert!((dx.length() - 1.0).abs() < 1e-12);
    assert!(dx.dot(cylinder.axis()).abs() < 1e-12, "no axial component");
    // Outside a cylinder that excludes its interior: pushed away from the axis.
    assert!(dx.z > 0.0);
}

#[test]
fn test_inside_flag_flips_sign_only() {
    let point = DVec3::new(0.3, -0.7, 1.1);

    let pairs: [(DVec3, DVec3); 3] = [
        (
            SphereWall::new(2.0, DVec3::ZERO, true).unwrap().displacement(point),
            SphereWall::new(2.0, DVec3::ZERO, false).unwrap().displacement(point),
        ),
        (
            CylinderWall::new(2.0, DVec3::ZERO, DVec3::Y, true).unwrap().displacement(point),
            CylinderWall::new(2.0, DVec3::ZERO, DVec3::Y, false).unwrap().displacement(point),
        ),
        (
            PlaneWall::new(DVec3::ZERO, DVec3::X, true).unwrap().displacement(point),
            PlaneWall::new(DVec3::ZERO, DVec3::X, false).unwrap().displacement(point),
        ),
    ];

    for (inside, outside) in pairs {
        assert_eq!(inside, -outside);
        assert_eq!(inside.length(), outside.length());
        assert!(inside.length() > 0.0);
    }
}

#[test]
fn test_degenerate_center_points_are_deterministic() {
    let sphere = SphereWall::new(1.5, DVec3::new(2.0, 0.0, 0.0), true).unwrap();
    let dx = sphere.separation(sphere.origin());
    assert_eq!(dx, DVec3::new(-1.5, 0.0, 0.0));

    let cylinder = CylinderWall::new(1.5, DVec3::ZERO, DVec3::Z, true).unwrap();
    let on_axis = cylinder.separation(DVec3::new(0.0, 0.0, 7.0));
    assert!((on_axis.length() - 1.5).abs() < 1e-12);
    assert!(on_axis.dot(DVec3::Z).abs() < 1e-12);
    assert_eq!(on_axis, cylinder.separation(DVec3::new(0.0, 0.0, -3.0)));
    assert!(on_axis.is_finite());
}

#[test]
fn test_invalid_descriptors_rejected() {
    assert!(SphereWall::new(-1.0, DVec3::ZERO, true).is_err());
    assert!(CylinderWall::new(1.0, DVec3::ZERO, DVec3::ZERO, true).is_err());
    assert!(PlaneWall::new(DVec3::ZERO, DVec3::ZERO, true).is_err());
    assert!(PlaneWall::new(DVec3::ZERO, DVec3::new(f64::NAN, 0.0, 1.0), true).is_err());
}
