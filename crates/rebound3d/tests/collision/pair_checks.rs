use approx::assert_relative_eq;
use rebound3d::dynamics::RigidBody;
use rebound3d::math::{Point, Real, Vector};
use rebound3d::query::{self, CollisionOptions, HitArea, HitResult, WhenEdge};
use rebound3d::shape::{BodyShape, Capsule, Cuboid, Cylinder, Sphere};

fn check(
    shape1: impl Into<BodyShape>,
    centre1: Point<Real>,
    shape2: impl Into<BodyShape>,
    centre2: Point<Real>,
) -> Option<HitResult> {
    check_with(shape1, centre1, Vector::zeros(), shape2, centre2, &CollisionOptions::default())
}

fn check_with(
    shape1: impl Into<BodyShape>,
    centre1: Point<Real>,
    speed1: Vector<Real>,
    shape2: impl Into<BodyShape>,
    centre2: Point<Real>,
    options: &CollisionOptions,
) -> Option<HitResult> {
    let body1 = RigidBody::new(shape1, centre1).with_speed(speed1);
    let body2 = RigidBody::new(shape2, centre2);
    query::check(&body1, &body1.next_pos, &body2, &body2.next_pos, options).unwrap()
}

#[test]
fn touching_spheres_do_not_collide() {
    let sphere = Sphere::new(0.5);
    assert!(check(sphere, Point::origin(), sphere, Point::new(1.0, 0.0, 0.0)).is_none());

    let hit = check(sphere, Point::origin(), sphere, Point::new(0.0, 0.0, -0.99)).unwrap();
    assert_relative_eq!(hit.normal12.into_inner(), -Vector::z());
    assert_relative_eq!(hit.point, Point::new(0.0, 0.0, -0.495), epsilon = 1.0e-6);
}

#[test]
fn sphere_on_cylinder_cap() {
    let cylinder = Cylinder::new(1.0, 2.0);
    let sphere = Sphere::new(0.5);

    let hit = check(cylinder, Point::origin(), sphere, Point::new(0.1, 0.0, 1.4)).unwrap();
    assert_eq!((hit.area1, hit.area2), (HitArea::TopFace, HitArea::Unspecified));
    assert_eq!(hit.normal12.into_inner(), Vector::z());
    assert_relative_eq!(hit.point, Point::new(0.1, 0.0, 0.95), epsilon = 1.0e-6);

    let hit = check(sphere, Point::new(0.1, 0.0, 1.4), cylinder, Point::origin()).unwrap();
    assert_eq!((hit.area1, hit.area2), (HitArea::Unspecified, HitArea::TopFace));
    assert_eq!(hit.normal12.into_inner(), -Vector::z());
}

#[test]
fn cylinder_beside_capsule() {
    let cylinder = Cylinder::new(0.5, 1.0);
    let capsule = Capsule::new(0.25, 1.0);

    let hit = check(cylinder, Point::origin(), capsule, Point::new(0.7, 0.0, 0.0)).unwrap();
    assert_eq!((hit.area1, hit.area2), (HitArea::Side, HitArea::Side));
    assert_relative_eq!(hit.normal12.into_inner(), Vector::x());

    let hit = check(capsule, Point::new(0.7, 0.0, 0.0), cylinder, Point::origin()).unwrap();
    assert_relative_eq!(hit.normal12.into_inner(), -Vector::x());
    assert!(check(capsule, Point::new(0.75, 0.0, 0.0), cylinder, Point::origin()).is_none());
}

#[test]
fn capsule_standing_on_cuboid() {
    let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 0.5));
    let capsule = Capsule::new(0.3, 1.6);

    let hit = check(cuboid, Point::origin(), capsule, Point::new(0.0, 0.0, 1.25)).unwrap();
    assert_eq!((hit.area1, hit.area2), (HitArea::TopFace, HitArea::BottomTip));
    assert_eq!(hit.normal12.into_inner(), Vector::z());
}

#[test]
fn overhanging_cylinder_prefers_the_top_face() {
    let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 0.5));
    let cylinder = Cylinder::new(0.5, 1.0);

    let hit = check(cylinder, Point::new(1.2, 0.0, 0.9), cuboid, Point::origin()).unwrap();
    assert_eq!((hit.area1, hit.area2), (HitArea::BottomFace, HitArea::TopFace));
    assert_eq!(hit.normal12.into_inner(), -Vector::z());
}

#[test]
fn speeds_decide_edge_contacts() {
    let options = CollisionOptions::default().with_when_edge(WhenEdge::InspectSpeeds);
    let cuboid = Cuboid::new(Vector::new(1.0, 1.0, 0.5));
    let cylinder = Cylinder::new(0.5, 1.0);
    let centre = Point::new(1.2, 0.0, 0.9);

    // Coming from the east: the east face was crossed.
    let east = Vector::new(-1.0, 0.0, 0.0);
    let hit = check_with(cylinder, centre, east, cuboid, Point::origin(), &options).unwrap();
    assert_eq!((hit.area1, hit.area2), (HitArea::Side, HitArea::EastFace));
    assert_eq!(hit.normal12.into_inner(), -Vector::x());

    // Falling: the top face was crossed.
    let down = Vector::new(0.0, 0.0, -1.0);
    let hit = check_with(cylinder, centre, down, cuboid, Point::origin(), &options).unwrap();
    assert_eq!((hit.area1, hit.area2), (HitArea::BottomFace, HitArea::TopFace));
}

#[test]
fn capsules_tip_to_tip() {
    let lower = Capsule::new(0.5, 2.0);
    let upper = Capsule::new(0.25, 1.0);

    let hit = check(upper, Point::new(0.0, 0.0, 1.4), lower, Point::origin()).unwrap();
    assert_eq!((hit.area1, hit.area2), (HitArea::BottomTip, HitArea::TopTip));
    assert_eq!(hit.normal12.into_inner(), -Vector::z());
    assert!(check(upper, Point::new(0.0, 0.0, 1.5), lower, Point::origin()).is_none());
}
