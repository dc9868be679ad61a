use crate::bricks::FaceCoveringQuery;
use crate::dynamics::RigidBody;
use crate::math::{Point, Real};
use crate::query::{CollisionError, CollisionOptions, HitResult};

/// Dispatcher for the pairwise collision routines.
///
/// A dispatcher selects the routine of the canonical pair matching two bodies and swaps the
/// arguments (and the point of view of the hit) when they come in the reverse order.
pub trait CollisionDispatcher {
    /// Checks if `body1` centred at `centre1` overlaps `body2` centred at `centre2`.
    ///
    /// `covering` is given when one of the bodies is a brick, to decide the contacts near the
    /// edges of its cuboid.
    fn check(
        &self,
        body1: &RigidBody,
        centre1: &Point<Real>,
        body2: &RigidBody,
        centre2: &Point<Real>,
        covering: Option<&FaceCoveringQuery<'_>>,
        options: &CollisionOptions,
    ) -> Result<Option<HitResult>, CollisionError>;

    /// Moves the tentative positions of the bodies apart to remove the penetration of `hit`.
    fn separate(
        &self,
        body1: &mut RigidBody,
        body2: &mut RigidBody,
        hit: &HitResult,
        options: &CollisionOptions,
    ) -> Result<(), CollisionError>;

    /// Applies friction then bounce to the tentative velocities of the bodies.
    fn bounce(
        &self,
        body1: &mut RigidBody,
        body2: &mut RigidBody,
        hit: &HitResult,
        options: &CollisionOptions,
    ) -> Result<(), CollisionError>;
}
