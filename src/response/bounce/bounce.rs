use crate::dynamics::RigidBody;
use crate::query::{
    CollisionDispatcher, CollisionError, CollisionOptions, DefaultCollisionDispatcher, HitResult,
};

/// Applies friction, then an elastic bounce, to the tentative velocities of `body1` and
/// `body2` touching as described by `hit`.
///
/// `hit` must come from a [`crate::query::check`] of the same bodies in the same order. A body
/// with a mass of at least [`crate::math::LARGE_MASS`] keeps its velocity.
pub fn bounce(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    DefaultCollisionDispatcher.bounce(body1, body2, hit, options)
}
