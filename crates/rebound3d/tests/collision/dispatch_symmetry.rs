use approx::{assert_relative_eq, relative_eq};
use rebound3d::bounding_volume::{Aabb, BoundingVolume};
use rebound3d::dynamics::RigidBody;
use rebound3d::math::{Point, Real, UnitVector, Vector};
use rebound3d::query::{self, CollisionError, CollisionOptions, HitArea, HitResult, ShapePair};
use rebound3d::response;
use rebound3d::shape::{BodyShape, Capsule, Cuboid, Cylinder, ShapeKind, Sphere};

fn shapes() -> [BodyShape; 4] {
    [
        Sphere::new(0.5).into(),
        Cylinder::new(0.4, 1.2).into(),
        Capsule::new(0.3, 1.4).into(),
        Cuboid::new(Vector::new(0.6, 0.4, 0.5)).into(),
    ]
}

fn random_point(rng: &mut oorandom::Rand32, spread: Real) -> Point<Real> {
    let mut coord = || (rng.rand_float() as Real * 2.0 - 1.0) * spread;
    Point::new(coord(), coord(), coord())
}

fn assert_mirrored(ab: &HitResult, ba: &HitResult) {
    assert_relative_eq!(ab.normal12.into_inner(), -ba.normal12.into_inner(), epsilon = 1.0e-5);
    assert_relative_eq!(ab.point, ba.point, epsilon = 1.0e-5);
    assert_eq!((ab.area1, ab.area2), (ba.area2, ba.area1));
}

#[test]
fn swapping_the_bodies_mirrors_the_hit() {
    let options = CollisionOptions::default();
    let mut rng = oorandom::Rand32::new(42);
    let mut hits = 0;

    for shape1 in shapes() {
        for shape2 in shapes() {
            if !ShapePair::for_kinds(shape1.kind(), shape2.kind()).0.is_supported() {
                continue;
            }

            for _ in 0..200 {
                let body1 = RigidBody::new(shape1, random_point(&mut rng, 0.5));
                let body2 = RigidBody::new(shape2, random_point(&mut rng, 1.5));

                let ab = query::check(&body1, &body1.next_pos, &body2, &body2.next_pos, &options)
                    .unwrap();
                let ba = query::check(&body2, &body2.next_pos, &body1, &body1.next_pos, &options)
                    .unwrap();

                match (ab, ba) {
                    (Some(ab), Some(ba)) => {
                        assert_mirrored(&ab, &ba);
                        hits += 1;
                    }
                    (None, None) => {}
                    (ab, ba) => panic!(
                        "Asymmetric check between {:?} at {} and {:?} at {}: {ab:?} vs {ba:?}",
                        shape1, body1.next_pos, shape2, body2.next_pos
                    ),
                }
            }
        }
    }

    assert!(hits > 100);
}

#[test]
fn hits_are_unit_and_bounded_by_the_aabbs() {
    let options = CollisionOptions::default();
    let mut rng = oorandom::Rand32::new(7);

    for shape1 in shapes() {
        for shape2 in shapes() {
            if shape1.kind() == ShapeKind::Cuboid && shape2.kind() == ShapeKind::Cuboid {
                continue;
            }

            for _ in 0..200 {
                let body1 = RigidBody::new(shape1, random_point(&mut rng, 0.5));
                let body2 = RigidBody::new(shape2, random_point(&mut rng, 1.5));
                let hit = query::check(&body1, &body1.next_pos, &body2, &body2.next_pos, &options)
                    .unwrap();

                let aabb1 = Aabb::from_body_extent(&body1.shape, &body1.next_pos);
                let aabb2 = Aabb::from_body_extent(&body2.shape, &body2.next_pos);

                if !aabb1.intersects(&aabb2) {
                    assert_eq!(hit, None);
                }
                if let Some(hit) = hit {
                    assert!(relative_eq!(hit.normal12.norm(), 1.0, epsilon = 1.0e-5));
                }
            }
        }
    }
}

/// Is `pt` deeper than `margin` inside `shape` centred at `centre`?
fn strictly_contains(
    shape: &BodyShape,
    centre: &Point<Real>,
    pt: &Point<Real>,
    margin: Real,
) -> bool {
    let p = pt - centre;
    match shape {
        BodyShape::Sphere(s) => p.norm() < s.radius - margin,
        BodyShape::Cylinder(c) => {
            p.xy().norm() < c.radius - margin && p.z.abs() < c.half_height() - margin
        }
        BodyShape::Capsule(c) => {
            let seg = c.segment_half_height();
            let axis_pt = Vector::new(0.0, 0.0, p.z.clamp(-seg, seg));
            (p - axis_pt).norm() < c.radius - margin
        }
        BodyShape::Cuboid(c) => p
            .iter()
            .zip(c.half_extents.iter())
            .all(|(x, e)| x.abs() < e - margin),
    }
}

#[test]
fn shared_interior_points_are_always_hits() {
    let options = CollisionOptions::default();
    let mut rng = oorandom::Rand32::new(2024);
    let mut overlaps = 0;

    for shape1 in shapes() {
        for shape2 in shapes() {
            if !ShapePair::for_kinds(shape1.kind(), shape2.kind()).0.is_supported() {
                continue;
            }

            for _ in 0..300 {
                let body1 = RigidBody::new(shape1, random_point(&mut rng, 0.5));
                let body2 = RigidBody::new(shape2, random_point(&mut rng, 1.5));
                let half_extents = shape1.half_extents();

                let shared = (0..40).any(|_| {
                    let offset = random_point(&mut rng, 1.0).coords.component_mul(&half_extents);
                    let pt = body1.next_pos + offset;
                    strictly_contains(&shape1, &body1.next_pos, &pt, 1.0e-3)
                        && strictly_contains(&shape2, &body2.next_pos, &pt, 1.0e-3)
                });
                if !shared {
                    continue;
                }

                overlaps += 1;
                let hit = query::check(&body1, &body1.next_pos, &body2, &body2.next_pos, &options)
                    .unwrap();
                assert!(
                    hit.is_some(),
                    "Missed overlap between {:?} at {} and {:?} at {}",
                    shape1,
                    body1.next_pos,
                    shape2,
                    body2.next_pos
                );
            }
        }
    }

    assert!(overlaps > 100);
}

#[test]
fn cuboid_pairs_are_unsupported() {
    let options = CollisionOptions::default();
    let cuboid = Cuboid::new(Vector::repeat(0.5));
    let mut b1 = RigidBody::new(cuboid, Point::origin());
    let mut b2 = RigidBody::new(cuboid, Point::new(0.0, 0.0, 0.9));
    let expected = CollisionError::UnsupportedPair {
        kind1: ShapeKind::Cuboid,
        kind2: ShapeKind::Cuboid,
    };

    assert_eq!(
        query::check(&b1, &b1.next_pos, &b2, &b2.next_pos, &options),
        Err(expected)
    );

    let hit = HitResult::new(
        Point::new(0.0, 0.0, 0.45),
        UnitVector::new_unchecked(Vector::z()),
        HitArea::TopFace,
        HitArea::BottomFace,
    );
    assert_eq!(response::separate(&mut b1, &mut b2, &hit, &options), Err(expected));
    assert_eq!(response::bounce(&mut b1, &mut b2, &hit, &options), Err(expected));
    assert_eq!(b2.next_pos, Point::new(0.0, 0.0, 0.9));
}

#[test]
fn shape_pairs_are_canonical() {
    let (pair, flipped) = ShapePair::for_kinds(ShapeKind::Cuboid, ShapeKind::Sphere);
    assert_eq!(pair, ShapePair::SphereCuboid);
    assert!(flipped);

    let (pair, flipped) = ShapePair::for_kinds(ShapeKind::Cylinder, ShapeKind::Capsule);
    assert_eq!(pair, ShapePair::CylinderCapsule);
    assert!(!flipped);
}
