use crate::bricks::FaceCoveringQuery;
use crate::dynamics::RigidBody;
use crate::math::{Point, Real};
use crate::query::{
    CollisionDispatcher, CollisionError, CollisionOptions, DefaultCollisionDispatcher, HitResult,
};

/// Checks if `body1` centred at `centre1` overlaps `body2` centred at `centre2`.
///
/// Exact touching is not an overlap. On hit, the normal of the result points from `body1`
/// toward `body2`. Returns an error for a pair of cuboids.
pub fn check(
    body1: &RigidBody,
    centre1: &Point<Real>,
    body2: &RigidBody,
    centre2: &Point<Real>,
    options: &CollisionOptions,
) -> Result<Option<HitResult>, CollisionError> {
    DefaultCollisionDispatcher.check(body1, centre1, body2, centre2, None, options)
}

/// Same as [`check`] when one of the bodies stands for a brick, described by `covering`.
pub fn check_with_covering(
    body1: &RigidBody,
    centre1: &Point<Real>,
    body2: &RigidBody,
    centre2: &Point<Real>,
    covering: &FaceCoveringQuery<'_>,
    options: &CollisionOptions,
) -> Result<Option<HitResult>, CollisionError> {
    DefaultCollisionDispatcher.check(body1, centre1, body2, centre2, Some(covering), options)
}
