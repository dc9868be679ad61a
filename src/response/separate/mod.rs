//! Positional correction, one routine per canonical pair of shapes.
//!
//! The routines move the tentative positions (`next_pos`) of two bodies apart along the contact
//! normal. An immovable body never moves; otherwise both bodies move by the same amount.

pub use self::separate::separate;
pub use self::separate_round_cuboid::{
    separate_capsule_cuboid, separate_cylinder_cuboid, separate_sphere_cuboid,
};
pub use self::separate_round_round::{
    separate_capsule_capsule, separate_cylinder_capsule, separate_cylinder_cylinder,
    separate_sphere_capsule, separate_sphere_cylinder, separate_sphere_sphere,
};

mod separate;
mod separate_round_cuboid;
mod separate_round_round;

use crate::dynamics::RigidBody;
use crate::math::{Real, UnitVector};
use crate::query::CollisionOptions;
use crate::shape::SupportMap;

/// The distance the two bodies must move apart along `normal12` to be `tiny_gap` away from
/// each other.
pub(crate) fn support_move_by(
    body1: &RigidBody,
    shape1: &impl SupportMap,
    body2: &RigidBody,
    shape2: &impl SupportMap,
    normal12: &UnitVector<Real>,
    options: &CollisionOptions,
) -> Real {
    let reach1 = shape1.support_extent(normal12);
    let reach2 = shape2.support_extent(&-*normal12);
    let distance = (body2.next_pos - body1.next_pos).dot(normal12);
    reach1 + reach2 + options.tiny_gap - distance
}

/// Moves `body1` along `-normal12` and `body2` along `normal12` by a total of `move_by`.
pub(crate) fn apply_separation(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    normal12: &UnitVector<Real>,
    move_by: Real,
) {
    if move_by <= 0.0 {
        log::warn!(
            "Bodies at {} and {} are already separated along {:?} (move by {move_by}).",
            body1.next_pos,
            body2.next_pos,
            normal12.as_ref(),
        );
        return;
    }

    let shift = normal12.into_inner() * move_by;
    match (body1.is_immovable(), body2.is_immovable()) {
        (true, true) => {}
        (true, false) => body2.next_pos += shift,
        (false, true) => body1.next_pos -= shift,
        (false, false) => {
            body1.next_pos -= shift / 2.0;
            body2.next_pos += shift / 2.0;
        }
    }
}
