//! Narrow-phase checks, one per canonical pair of shapes.
//!
//! The functions have the form `check_[shape1]_[shape2]()` where `shape1` comes before `shape2`
//! in the order sphere, cylinder, capsule, cuboid. Use [`crate::query::check`] to test two
//! bodies in any order.

pub use self::check_bodies::{check, check_with_covering};
pub use self::check_capsule_capsule::check_capsule_capsule;
pub use self::check_capsule_cuboid::check_capsule_cuboid;
pub use self::check_cylinder_capsule::check_cylinder_capsule;
pub use self::check_cylinder_cuboid::check_cylinder_cuboid;
pub use self::check_cylinder_cylinder::check_cylinder_cylinder;
pub use self::check_sphere_capsule::check_sphere_capsule;
pub use self::check_sphere_cuboid::check_sphere_cuboid;
pub use self::check_sphere_cylinder::check_sphere_cylinder;
pub use self::check_sphere_sphere::check_sphere_sphere;

mod check_bodies;
mod check_capsule_capsule;
mod check_capsule_cuboid;
mod check_cylinder_capsule;
mod check_cylinder_cuboid;
mod check_cylinder_cylinder;
mod check_sphere_capsule;
mod check_sphere_cuboid;
mod check_sphere_cylinder;
mod check_sphere_sphere;

use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::{BodyPose, HitArea, HitResult};
use crate::shape::CuboidFace;
use core::cmp::Ordering;

/// The vertical unit vector pointing up if `up`, down otherwise.
#[inline]
pub(crate) fn vertical(up: bool) -> UnitVector<Real> {
    if up {
        UnitVector::new_unchecked(Vector::z())
    } else {
        UnitVector::new_unchecked(-Vector::z())
    }
}

/// Whether body 2, at `dz` above body 1, should be considered above it.
///
/// Ties are broken by the lexicographic order of the centres so that swapping the two bodies
/// gives the opposite answer.
pub(crate) fn is_above(dz: Real, centre1: &Point<Real>, centre2: &Point<Real>) -> bool {
    if dz != 0.0 {
        return dz > 0.0;
    }

    let order = centre1
        .iter()
        .zip(centre2.iter())
        .map(|(a, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal);
    order != Ordering::Greater
}

#[inline]
pub(crate) fn horizontal_norm(v: &Vector<Real>) -> Real {
    (v.x * v.x + v.y * v.y).sqrt()
}

fn interval_overlap_mid(lo1: Real, hi1: Real, lo2: Real, hi2: Real) -> Real {
    (lo1.max(lo2) + hi1.min(hi2)) / 2.0
}

/// The contact point of two bodies touching along a vertical normal.
///
/// Horizontally, the centre of the overlap of the two footprints. Vertically, halfway between
/// the two surfaces in contact.
pub(crate) fn vertical_hit_point(
    centre1: &Point<Real>,
    half_extents1: &Vector<Real>,
    centre2: &Point<Real>,
    half_extents2: &Vector<Real>,
    up: bool,
) -> Point<Real> {
    let mut point = Point::origin();
    for i in 0..2 {
        point[i] = interval_overlap_mid(
            centre1[i] - half_extents1[i],
            centre1[i] + half_extents1[i],
            centre2[i] - half_extents2[i],
            centre2[i] + half_extents2[i],
        );
    }

    point.z = if up {
        (centre1.z + half_extents1.z + centre2.z - half_extents2.z) / 2.0
    } else {
        (centre1.z - half_extents1.z + centre2.z + half_extents2.z) / 2.0
    };
    point
}

/// The contact point of two vertical shapes touching along the horizontal normal `normal12`.
///
/// `radius` is the horizontal reach of each shape from its axis and `z_range` the vertical span
/// of the surface in contact.
pub(crate) fn side_hit_point(
    centre1: &Point<Real>,
    radius1: Real,
    z_range1: (Real, Real),
    centre2: &Point<Real>,
    radius2: Real,
    z_range2: (Real, Real),
    normal12: &UnitVector<Real>,
) -> Point<Real> {
    let mut point = na::center(
        &(centre1 + normal12.into_inner() * radius1),
        &(centre2 - normal12.into_inner() * radius2),
    );
    point.z = interval_overlap_mid(z_range1.0, z_range1.1, z_range2.0, z_range2.1);
    point
}

/// The point halfway between two rounded features along `normal12`.
///
/// Each feature is a point dilated by a radius: the centre of a sphere or of a capsule cap,
/// or a point of a cylinder's rim with a zero radius.
#[inline]
pub(crate) fn rounded_hit_point(
    feature1: &Point<Real>,
    radius1: Real,
    feature2: &Point<Real>,
    radius2: Real,
    normal12: &UnitVector<Real>,
) -> Point<Real> {
    na::center(
        &(feature1 + normal12.into_inner() * radius1),
        &(feature2 - normal12.into_inner() * radius2),
    )
}

/// The hit of a round body 1 against `face` of the cuboid body 2.
///
/// `contact` is the contact point relative to the centre of the cuboid.
#[inline]
pub(crate) fn round_cuboid_hit(
    cuboid: &BodyPose,
    face: CuboidFace,
    contact: Vector<Real>,
    area1: HitArea,
) -> HitResult {
    HitResult::new(
        cuboid.centre + contact,
        -face.unit_normal(),
        area1,
        HitArea::from(face),
    )
}
