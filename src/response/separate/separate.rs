use crate::dynamics::RigidBody;
use crate::query::{
    CollisionDispatcher, CollisionError, CollisionOptions, DefaultCollisionDispatcher, HitResult,
};

/// Moves the tentative positions of `body1` and `body2` apart to remove the penetration
/// described by `hit`.
///
/// `hit` must come from a [`crate::query::check`] of the same bodies in the same order. A body
/// with a mass of at least [`crate::math::LARGE_MASS`] is never moved.
pub fn separate(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    DefaultCollisionDispatcher.separate(body1, body2, hit, options)
}
