use crate::bricks::FaceCoveringQuery;
use crate::dynamics::RigidBody;
use crate::math::{Point, Real};
use crate::query::check::*;
use crate::query::{
    BodyPose, CollisionDispatcher, CollisionError, CollisionOptions, HitResult, ShapePair,
};
use crate::response::*;
use crate::shape::BodyShape;

/// The dispatcher for every pair of shapes supported by this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCollisionDispatcher;

impl DefaultCollisionDispatcher {
    fn check_canonical(
        &self,
        body1: &RigidBody,
        pose1: &BodyPose,
        body2: &RigidBody,
        pose2: &BodyPose,
        covering: Option<&FaceCoveringQuery<'_>>,
        options: &CollisionOptions,
    ) -> Result<Option<HitResult>, CollisionError> {
        use BodyShape::*;

        let hit = match (&body1.shape, &body2.shape) {
            (Sphere(s1), Sphere(s2)) => check_sphere_sphere(pose1, s1, pose2, s2),
            (Sphere(s1), Cylinder(c2)) => check_sphere_cylinder(pose1, s1, pose2, c2),
            (Sphere(s1), Capsule(c2)) => check_sphere_capsule(pose1, s1, pose2, c2, options),
            (Sphere(s1), Cuboid(c2)) => {
                check_sphere_cuboid(pose1, s1, pose2, c2, covering, options)
            }
            (Cylinder(c1), Cylinder(c2)) => check_cylinder_cylinder(pose1, c1, pose2, c2),
            (Cylinder(c1), Capsule(c2)) => check_cylinder_capsule(pose1, c1, pose2, c2),
            (Cylinder(c1), Cuboid(c2)) => {
                check_cylinder_cuboid(pose1, c1, pose2, c2, covering, options)
            }
            (Capsule(c1), Capsule(c2)) => check_capsule_capsule(pose1, c1, pose2, c2, options),
            (Capsule(c1), Cuboid(c2)) => {
                check_capsule_cuboid(pose1, c1, pose2, c2, covering, options)
            }
            (shape1, shape2) => {
                return Err(CollisionError::UnsupportedPair {
                    kind1: shape1.kind(),
                    kind2: shape2.kind(),
                })
            }
        };

        Ok(hit)
    }

    fn separate_canonical(
        &self,
        body1: &mut RigidBody,
        body2: &mut RigidBody,
        hit: &HitResult,
        options: &CollisionOptions,
    ) -> Result<(), CollisionError> {
        use BodyShape::*;

        match (body1.shape, body2.shape) {
            (Sphere(s1), Sphere(s2)) => {
                separate_sphere_sphere(body1, &s1, body2, &s2, hit, options)
            }
            (Sphere(s1), Cylinder(c2)) => {
                separate_sphere_cylinder(body1, &s1, body2, &c2, hit, options)
            }
            (Sphere(s1), Capsule(c2)) => {
                separate_sphere_capsule(body1, &s1, body2, &c2, hit, options)
            }
            (Sphere(s1), Cuboid(c2)) => {
                separate_sphere_cuboid(body1, &s1, body2, &c2, hit, options)
            }
            (Cylinder(c1), Cylinder(c2)) => {
                separate_cylinder_cylinder(body1, &c1, body2, &c2, hit, options)
            }
            (Cylinder(c1), Capsule(c2)) => {
                separate_cylinder_capsule(body1, &c1, body2, &c2, hit, options)
            }
            (Cylinder(c1), Cuboid(c2)) => {
                separate_cylinder_cuboid(body1, &c1, body2, &c2, hit, options)
            }
            (Capsule(c1), Capsule(c2)) => {
                separate_capsule_capsule(body1, &c1, body2, &c2, hit, options)
            }
            (Capsule(c1), Cuboid(c2)) => {
                separate_capsule_cuboid(body1, &c1, body2, &c2, hit, options)
            }
            (shape1, shape2) => Err(CollisionError::UnsupportedPair {
                kind1: shape1.kind(),
                kind2: shape2.kind(),
            }),
        }
    }

    fn bounce_canonical(
        &self,
        pair: ShapePair,
        body1: &mut RigidBody,
        body2: &mut RigidBody,
        hit: &HitResult,
        options: &CollisionOptions,
    ) -> Result<(), CollisionError> {
        match pair {
            ShapePair::SphereSphere => bounce_sphere_sphere(body1, body2, hit, options),
            ShapePair::SphereCylinder => bounce_sphere_cylinder(body1, body2, hit, options),
            ShapePair::SphereCapsule => bounce_sphere_capsule(body1, body2, hit, options),
            ShapePair::SphereCuboid => bounce_sphere_cuboid(body1, body2, hit, options),
            ShapePair::CylinderCylinder => bounce_cylinder_cylinder(body1, body2, hit, options),
            ShapePair::CylinderCapsule => bounce_cylinder_capsule(body1, body2, hit, options),
            ShapePair::CylinderCuboid => bounce_cylinder_cuboid(body1, body2, hit, options),
            ShapePair::CapsuleCapsule => bounce_capsule_capsule(body1, body2, hit, options),
            ShapePair::CapsuleCuboid => bounce_capsule_cuboid(body1, body2, hit, options),
            ShapePair::CuboidCuboid => {
                let (kind1, kind2) = pair.kinds();
                Err(CollisionError::UnsupportedPair { kind1, kind2 })
            }
        }
    }
}

impl CollisionDispatcher for DefaultCollisionDispatcher {
    fn check(
        &self,
        body1: &RigidBody,
        centre1: &Point<Real>,
        body2: &RigidBody,
        centre2: &Point<Real>,
        covering: Option<&FaceCoveringQuery<'_>>,
        options: &CollisionOptions,
    ) -> Result<Option<HitResult>, CollisionError> {
        let pose1 = BodyPose::new(body1, *centre1);
        let pose2 = BodyPose::new(body2, *centre2);
        let (_, flipped) = ShapePair::for_kinds(body1.kind(), body2.kind());

        if flipped {
            let hit = self.check_canonical(body2, &pose2, body1, &pose1, covering, options)?;
            Ok(hit.map(HitResult::flipped))
        } else {
            self.check_canonical(body1, &pose1, body2, &pose2, covering, options)
        }
    }

    fn separate(
        &self,
        body1: &mut RigidBody,
        body2: &mut RigidBody,
        hit: &HitResult,
        options: &CollisionOptions,
    ) -> Result<(), CollisionError> {
        let (_, flipped) = ShapePair::for_kinds(body1.kind(), body2.kind());

        if flipped {
            self.separate_canonical(body2, body1, &hit.flipped(), options)
        } else {
            self.separate_canonical(body1, body2, hit, options)
        }
    }

    fn bounce(
        &self,
        body1: &mut RigidBody,
        body2: &mut RigidBody,
        hit: &HitResult,
        options: &CollisionOptions,
    ) -> Result<(), CollisionError> {
        let (pair, flipped) = ShapePair::for_kinds(body1.kind(), body2.kind());

        if flipped {
            self.bounce_canonical(pair, body2, body1, &hit.flipped(), options)
        } else {
            self.bounce_canonical(pair, body1, body2, hit, options)
        }
    }
}
