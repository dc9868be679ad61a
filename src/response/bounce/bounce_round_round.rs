use crate::dynamics::RigidBody;
use crate::query::{CollisionError, CollisionOptions, HitArea, HitResult};
use crate::response::hit_areas::{expect_areas, is_capsule_area, is_cylinder_area, is_sphere_area};
use crate::response::{friction_then_bounce, ContactNormal};

fn bounce_valid(
    routine: &'static str,
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    hit: &HitResult,
    options: &CollisionOptions,
    valid: impl FnOnce(HitArea, HitArea) -> bool,
) -> Result<(), CollisionError> {
    expect_areas(routine, hit, valid)?;
    let normal = ContactNormal::classify(&hit.normal12);
    friction_then_bounce(body1, body2, &normal, options);
    Ok(())
}

/// Bounces two spheres.
pub fn bounce_sphere_sphere(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    bounce_valid("bounce_sphere_sphere", body1, body2, hit, options, |a1, a2| {
        is_sphere_area(a1) && is_sphere_area(a2)
    })
}

/// Bounces a sphere and a cylinder.
pub fn bounce_sphere_cylinder(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    bounce_valid("bounce_sphere_cylinder", body1, body2, hit, options, |a1, a2| {
        is_sphere_area(a1) && is_cylinder_area(a2)
    })
}

/// Bounces a sphere and a capsule.
pub fn bounce_sphere_capsule(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    bounce_valid("bounce_sphere_capsule", body1, body2, hit, options, |a1, a2| {
        is_sphere_area(a1) && is_capsule_area(a2)
    })
}

/// Bounces two cylinders.
pub fn bounce_cylinder_cylinder(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    bounce_valid("bounce_cylinder_cylinder", body1, body2, hit, options, |a1, a2| {
        is_cylinder_area(a1) && is_cylinder_area(a2)
    })
}

/// Bounces a cylinder and a capsule.
pub fn bounce_cylinder_capsule(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    bounce_valid("bounce_cylinder_capsule", body1, body2, hit, options, |a1, a2| {
        is_cylinder_area(a1) && is_capsule_area(a2)
    })
}

/// Bounces two capsules.
pub fn bounce_capsule_capsule(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    bounce_valid("bounce_capsule_capsule", body1, body2, hit, options, |a1, a2| {
        is_capsule_area(a1) && is_capsule_area(a2)
    })
}
