use crate::dynamics::RigidBody;
use crate::query::{CollisionError, CollisionOptions, HitArea, HitResult};
use crate::response::hit_areas::{
    expect_cuboid_face, is_capsule_area_against, is_cylinder_area_against, is_sphere_area,
};
use crate::response::{friction_then_bounce, ContactNormal};
use crate::shape::CuboidFace;

fn bounce_against_face(
    routine: &'static str,
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    hit: &HitResult,
    options: &CollisionOptions,
    valid: impl FnOnce(HitArea, CuboidFace) -> bool,
) -> Result<(), CollisionError> {
    let face = expect_cuboid_face(routine, hit, valid)?;
    // The normal is exactly the opposite of the face normal.
    let normal = ContactNormal::classify(&-face.unit_normal());
    friction_then_bounce(body1, body2, &normal, options);
    Ok(())
}

/// Bounces a sphere on a cuboid.
pub fn bounce_sphere_cuboid(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    bounce_against_face("bounce_sphere_cuboid", body1, body2, hit, options, |area, _| {
        is_sphere_area(area)
    })
}

/// Bounces a cylinder on a cuboid.
pub fn bounce_cylinder_cuboid(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    bounce_against_face(
        "bounce_cylinder_cuboid",
        body1,
        body2,
        hit,
        options,
        is_cylinder_area_against,
    )
}

/// Bounces a capsule on a cuboid.
pub fn bounce_capsule_cuboid(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    bounce_against_face(
        "bounce_capsule_cuboid",
        body1,
        body2,
        hit,
        options,
        is_capsule_area_against,
    )
}
