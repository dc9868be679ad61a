use approx::assert_relative_eq;
use rebound3d::dynamics::{BodyMaterial, RigidBody};
use rebound3d::math::{Point, Vector, DEFAULT_TINY_GAP};
use rebound3d::query::{self, CollisionOptions, HitArea};
use rebound3d::response;
use rebound3d::shape::{Capsule, Cuboid, Cylinder, Sphere};

#[test]
fn sphere_resting_in_cuboid_top_face() {
    let options = CollisionOptions::default();
    let cuboid = RigidBody::new(Cuboid::from_size(Vector::repeat(1.0)), Point::new(0.0, 0.0, -0.5));
    let sphere = RigidBody::new(Sphere::new(0.5), Point::new(0.0, 0.0, 0.4));

    let hit = query::check(&cuboid, &cuboid.next_pos, &sphere, &sphere.next_pos, &options)
        .unwrap()
        .expect("the sphere sinks 0.1 into the cuboid");

    assert_eq!(hit.area1, HitArea::TopFace);
    assert_eq!(hit.area2, HitArea::Unspecified);
    assert_relative_eq!(hit.point, Point::origin(), epsilon = 1.0e-6);
    assert_eq!(hit.normal12.into_inner(), Vector::z());
}

#[test]
fn exact_touch_is_a_miss() {
    let options = CollisionOptions::default();
    let cylinder = RigidBody::new(Cylinder::new(1.0, 2.0), Point::origin());
    let cuboid = RigidBody::new(Cuboid::from_size(Vector::repeat(2.0)), Point::new(0.0, 0.0, -2.0));

    let hit = query::check(&cylinder, &cylinder.next_pos, &cuboid, &cuboid.next_pos, &options);
    assert_eq!(hit, Ok(None));
    let hit = query::check(&cuboid, &cuboid.next_pos, &cylinder, &cylinder.next_pos, &options);
    assert_eq!(hit, Ok(None));
}

#[test]
fn capsule_pushed_out_of_immovable_cuboid() {
    let options = CollisionOptions::default();
    let mut capsule = RigidBody::new(Capsule::new(0.3, 1.0), Point::new(0.75, 0.0, 0.0));
    let mut cuboid =
        RigidBody::new_immovable(Cuboid::from_size(Vector::repeat(1.0)), Point::origin());
    let cuboid_before = cuboid.clone();

    let hit = query::check(&capsule, &capsule.next_pos, &cuboid, &cuboid.next_pos, &options)
        .unwrap()
        .expect("the capsule penetrates the east face by 0.05");
    assert_eq!((hit.area1, hit.area2), (HitArea::Side, HitArea::EastFace));

    response::separate(&mut capsule, &mut cuboid, &hit, &options).unwrap();
    assert_eq!(cuboid, cuboid_before);
    assert_relative_eq!(
        capsule.next_pos,
        Point::new(0.75 + 0.05 + DEFAULT_TINY_GAP, 0.0, 0.0),
        epsilon = 1.0e-6
    );
}

#[test]
fn friction_zeroes_tangential_slip() {
    let options = CollisionOptions::default();
    let sticky = BodyMaterial::new(1.0, 0.0);
    let mut b1 = RigidBody::new(Sphere::new(0.5), Point::origin())
        .with_speed(Vector::new(1.0, 0.0, 0.0))
        .with_material(sticky);
    let mut b2 = RigidBody::new(Sphere::new(0.5), Point::new(0.0, 0.9, 0.0)).with_material(sticky);

    let hit = query::check(&b1, &b1.next_pos, &b2, &b2.next_pos, &options)
        .unwrap()
        .unwrap();
    assert_relative_eq!(hit.normal12.into_inner(), Vector::y(), epsilon = 1.0e-6);

    response::bounce(&mut b1, &mut b2, &hit, &options).unwrap();
    assert_relative_eq!(b1.next_speed.x, b2.next_speed.x, epsilon = 1.0e-6);
    assert_relative_eq!(b1.next_speed.x, 0.5, epsilon = 1.0e-6);
    assert_relative_eq!(b1.next_speed.y, 0.0, epsilon = 1.0e-6);
    assert_relative_eq!(b2.next_speed.y, 0.0, epsilon = 1.0e-6);
}
