use rebound3d::dynamics::{BodyMaterial, RigidBody};
use rebound3d::math::{Point, Real, Vector, LARGE_MASS};
use rebound3d::query::{self, CollisionOptions};
use rebound3d::response;
use rebound3d::shape::{BodyShape, Capsule, Cuboid, Cylinder, Sphere};

fn bits(v: &Vector<Real>) -> [u64; 3] {
    [v.x, v.y, v.z].map(|c| c.to_bits() as u64)
}

fn round_shapes() -> [BodyShape; 3] {
    [
        Sphere::new(0.5).into(),
        Cylinder::new(0.4, 1.0).into(),
        Capsule::new(0.3, 1.0).into(),
    ]
}

fn resolve(moving: &mut RigidBody, fixed: &mut RigidBody, options: &CollisionOptions) {
    let hit = query::check(moving, &moving.next_pos, fixed, &fixed.next_pos, options)
        .unwrap()
        .unwrap_or_else(|| panic!("{:?} should hit {:?}", moving.shape, fixed.shape));
    response::separate(moving, fixed, &hit, options).unwrap();
    response::bounce(moving, fixed, &hit, options).unwrap();

    // The other way around as well.
    let hit = query::check(fixed, &fixed.next_pos, moving, &moving.next_pos, options).unwrap();
    if let Some(hit) = hit {
        response::separate(fixed, moving, &hit, options).unwrap();
        response::bounce(fixed, moving, &hit, options).unwrap();
    }
}

#[test]
fn immovable_bodies_keep_their_state_bit_for_bit() {
    let options = CollisionOptions::default();
    let material = BodyMaterial::new(0.8, 0.6);
    let mut fixed_shapes = round_shapes().to_vec();
    fixed_shapes.push(Cuboid::new(Vector::repeat(0.5)).into());

    for moving_shape in round_shapes() {
        for fixed_shape in fixed_shapes.iter().copied() {
            for mass in [LARGE_MASS, LARGE_MASS * 10.0] {
                let mut fixed = RigidBody::new(fixed_shape, Point::origin())
                    .with_mass(mass)
                    .with_speed(Vector::new(0.1, -0.2, 0.0))
                    .with_material(material);
                let mut moving = RigidBody::new(moving_shape, Point::new(0.2, 0.1, 0.5))
                    .with_speed(Vector::new(-0.5, 0.2, -3.0))
                    .with_material(material);

                let pos = bits(&fixed.next_pos.coords);
                let speed = bits(&fixed.next_speed);
                let before = moving.clone();

                resolve(&mut moving, &mut fixed, &options);

                assert_eq!(bits(&fixed.next_pos.coords), pos);
                assert_eq!(bits(&fixed.next_speed), speed);
                assert_ne!(moving, before);
            }
        }
    }
}

#[test]
fn two_immovable_bodies_are_left_alone() {
    let options = CollisionOptions::default();
    let mut b1 = RigidBody::new_immovable(Sphere::new(0.5), Point::origin())
        .with_speed(Vector::new(1.0, 0.0, 0.0));
    let mut b2 = RigidBody::new_immovable(Sphere::new(0.5), Point::new(0.8, 0.0, 0.0));
    let (before1, before2) = (b1.clone(), b2.clone());

    let hit = query::check(&b1, &b1.next_pos, &b2, &b2.next_pos, &options)
        .unwrap()
        .unwrap();
    response::separate(&mut b1, &mut b2, &hit, &options).unwrap();
    response::bounce(&mut b1, &mut b2, &hit, &options).unwrap();

    assert_eq!(b1, before1);
    assert_eq!(b2, before2);
}
