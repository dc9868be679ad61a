use crate::dynamics::RigidBody;
use crate::query::{CollisionError, CollisionOptions, HitResult};
use crate::response::hit_areas::{expect_areas, is_capsule_area, is_cylinder_area, is_sphere_area};
use crate::response::separate::{apply_separation, support_move_by};
use crate::shape::{Capsule, Cylinder, Sphere, SupportMap};

fn separate_along_normal(
    body1: &mut RigidBody,
    shape1: &impl SupportMap,
    body2: &mut RigidBody,
    shape2: &impl SupportMap,
    hit: &HitResult,
    options: &CollisionOptions,
) {
    let move_by = support_move_by(body1, shape1, body2, shape2, &hit.normal12, options);
    apply_separation(body1, body2, &hit.normal12, move_by);
}

/// Separates two spheres.
pub fn separate_sphere_sphere(
    body1: &mut RigidBody,
    sphere1: &Sphere,
    body2: &mut RigidBody,
    sphere2: &Sphere,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    expect_areas("separate_sphere_sphere", hit, |a1, a2| {
        is_sphere_area(a1) && is_sphere_area(a2)
    })?;
    separate_along_normal(body1, sphere1, body2, sphere2, hit, options);
    Ok(())
}

/// Separates a sphere and a cylinder.
pub fn separate_sphere_cylinder(
    body1: &mut RigidBody,
    sphere1: &Sphere,
    body2: &mut RigidBody,
    cylinder2: &Cylinder,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    expect_areas("separate_sphere_cylinder", hit, |a1, a2| {
        is_sphere_area(a1) && is_cylinder_area(a2)
    })?;
    separate_along_normal(body1, sphere1, body2, cylinder2, hit, options);
    Ok(())
}

/// Separates a sphere and a capsule.
pub fn separate_sphere_capsule(
    body1: &mut RigidBody,
    sphere1: &Sphere,
    body2: &mut RigidBody,
    capsule2: &Capsule,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    expect_areas("separate_sphere_capsule", hit, |a1, a2| {
        is_sphere_area(a1) && is_capsule_area(a2)
    })?;
    separate_along_normal(body1, sphere1, body2, capsule2, hit, options);
    Ok(())
}

/// Separates two cylinders.
pub fn separate_cylinder_cylinder(
    body1: &mut RigidBody,
    cylinder1: &Cylinder,
    body2: &mut RigidBody,
    cylinder2: &Cylinder,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    expect_areas("separate_cylinder_cylinder", hit, |a1, a2| {
        is_cylinder_area(a1) && is_cylinder_area(a2)
    })?;
    separate_along_normal(body1, cylinder1, body2, cylinder2, hit, options);
    Ok(())
}

/// Separates a cylinder and a capsule.
pub fn separate_cylinder_capsule(
    body1: &mut RigidBody,
    cylinder1: &Cylinder,
    body2: &mut RigidBody,
    capsule2: &Capsule,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    expect_areas("separate_cylinder_capsule", hit, |a1, a2| {
        is_cylinder_area(a1) && is_capsule_area(a2)
    })?;
    separate_along_normal(body1, cylinder1, body2, capsule2, hit, options);
    Ok(())
}

/// Separates two capsules.
pub fn separate_capsule_capsule(
    body1: &mut RigidBody,
    capsule1: &Capsule,
    body2: &mut RigidBody,
    capsule2: &Capsule,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    expect_areas("separate_capsule_capsule", hit, |a1, a2| {
        is_capsule_area(a1) && is_capsule_area(a2)
    })?;
    separate_along_normal(body1, capsule1, body2, capsule2, hit, options);
    Ok(())
}
