use approx::assert_relative_eq;
use rebound3d::bricks::{self, Brick, BrickCoords, BrickGrid, BrickShape};
use rebound3d::dynamics::{BodyMaterial, RigidBody};
use rebound3d::math::{Point, Real, Vector};
use rebound3d::query::{self, CollisionOptions};
use rebound3d::response;
use rebound3d::shape::{BodyShape, Cuboid, Cylinder, Sphere};

fn separate_twice(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    options: &CollisionOptions,
) -> Real {
    let hit = query::check(body1, &body1.next_pos, body2, &body2.next_pos, options)
        .unwrap()
        .expect("the bodies start overlapping");
    response::separate(body1, body2, &hit, options).unwrap();

    assert_eq!(
        query::check(body1, &body1.next_pos, body2, &body2.next_pos, options),
        Ok(None)
    );

    // Replaying the stale hit barely moves the bodies.
    let (before1, before2) = (body1.next_pos, body2.next_pos);
    response::separate(body1, body2, &hit, options).unwrap();
    (body1.next_pos - before1).norm() + (body2.next_pos - before2).norm()
}

#[test]
fn separation_is_idempotent() {
    let options = CollisionOptions::default();
    let cuboid: BodyShape = Cuboid::new(Vector::repeat(0.5)).into();
    let cases: [(BodyShape, Point<Real>, BodyShape, Point<Real>); 4] = [
        (Sphere::new(0.5).into(), Point::new(0.3, 0.0, 0.6), cuboid, Point::origin()),
        // Past the east edge of the top face.
        (Sphere::new(0.5).into(), Point::new(0.8, 0.0, 0.6), cuboid, Point::origin()),
        (
            Sphere::new(0.5).into(),
            Point::origin(),
            Sphere::new(0.3).into(),
            Point::new(0.4, 0.3, 0.2),
        ),
        (Cylinder::new(0.5, 1.0).into(), Point::new(0.2, 0.9, 0.1), cuboid, Point::origin()),
    ];

    for (shape1, centre1, shape2, centre2) in cases {
        let mut body1 = RigidBody::new(shape1, centre1);
        let mut fixed = RigidBody::new_immovable(shape2, centre2);
        let replay = separate_twice(&mut body1, &mut fixed, &options);
        assert!(replay <= options.tiny_gap, "{shape1:?}: moved again by {replay}");

        let mut body1 = RigidBody::new(shape1, centre1);
        let mut body2 = RigidBody::new(shape2, centre2);
        let replay = separate_twice(&mut body1, &mut body2, &options);
        assert!(replay <= options.tiny_gap, "{shape1:?}: moved again by {replay}");
    }
}

fn floor() -> BrickGrid {
    let mut grid = BrickGrid::new();
    let bouncy = Brick::new(BrickShape::Cube).with_material(BodyMaterial::new(0.5, 1.0));
    for x in -2..=2 {
        for y in -2..=2 {
            let _ = grid.insert(BrickCoords::new(x, y, -1), bouncy);
        }
    }
    grid
}

fn step(body: &mut RigidBody, grid: &BrickGrid, options: &CollisionOptions) -> usize {
    body.next_speed = body.speed - Vector::z() * (options.gravity * options.time_step);
    body.next_pos = body.pos + body.next_speed * options.time_step;
    let contacts = bricks::resolve_bricks(body, grid, grid, options).unwrap();
    body.commit();
    contacts
}

#[test]
fn resting_bodies_do_not_hop() {
    let options = CollisionOptions::default();
    let grid = floor();
    let rest = 0.25 + options.tiny_gap;
    let mut ball = RigidBody::new(Sphere::new(0.25), Point::new(0.5, 0.5, rest))
        .with_material(BodyMaterial::new(0.5, 1.0));

    for _ in 0..120 {
        assert_eq!(step(&mut ball, &grid, &options), 1);
        assert!(ball.speed.z.abs() <= options.epsilon);
        assert_relative_eq!(ball.pos.z, rest, epsilon = 1.0e-4);
    }
}

#[test]
fn fast_bodies_still_bounce() {
    let options = CollisionOptions::default();
    let grid = floor();
    let mut ball = RigidBody::new(Sphere::new(0.25), Point::new(0.5, 0.5, 0.26))
        .with_speed(Vector::new(0.0, 0.0, -5.0))
        .with_material(BodyMaterial::new(0.5, 1.0));

    assert_eq!(step(&mut ball, &grid, &options), 1);
    assert!(ball.speed.z > 4.5);
}
