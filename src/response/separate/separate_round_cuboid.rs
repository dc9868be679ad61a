use crate::dynamics::RigidBody;
use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::{CollisionError, CollisionOptions, HitArea, HitResult};
use crate::response::hit_areas::{
    expect_cuboid_face, is_capsule_area_against, is_cylinder_area_against, is_sphere_area,
};
use crate::response::separate::{apply_separation, support_move_by};
use crate::shape::{Capsule, Cuboid, CuboidFace, Cylinder, Sphere, SupportMap};
use crate::utils::outward_travel;

/// The rounded feature of body 1 closest to the cuboid: a point dilated by a radius.
struct RoundFeature {
    point: Point<Real>,
    radius: Real,
    /// Only the horizontal distances matter (vertical sides of cylinders and capsules).
    horizontal: bool,
}

impl RoundFeature {
    fn projects_inside(&self, rel: &Vector<Real>, cuboid: &Cuboid, face: CuboidFace) -> bool {
        if self.horizontal {
            let other = 1 - face.axis();
            rel[other].abs() <= cuboid.half_extents[other]
        } else {
            cuboid.face_contains_projection(rel, face)
        }
    }
}

/// The distance body 1 and the cuboid body 2 must move apart, or `None` if no such distance
/// exists.
///
/// The support extents are exact while `feature` projects on the face. Past the edges of the
/// face, the closest point of the cuboid is on its boundary and the feature must only get
/// `radius` away from it.
fn move_by_against_face(
    body1: &RigidBody,
    shape1: &impl SupportMap,
    body2: &RigidBody,
    cuboid: &Cuboid,
    face: CuboidFace,
    feature: Option<RoundFeature>,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Option<Real> {
    if let Some(feature) = feature {
        let mut rel = feature.point - body2.next_pos;

        if !feature.projects_inside(&rel, cuboid, face) {
            let mut closest = cuboid.clamp_to_face(&rel, face);
            let dir: UnitVector<Real> = face.unit_normal();

            if feature.horizontal {
                rel.z = 0.0;
                closest.z = 0.0;
            }

            let travel = outward_travel(&rel, &closest, &dir, feature.radius + options.tiny_gap);
            if travel.is_none() {
                log::warn!(
                    "No separation of the feature at {} from the {face:?} face of the cuboid at {}: skipping it.",
                    feature.point,
                    body2.next_pos,
                );
            }
            return travel;
        }
    }

    Some(support_move_by(body1, shape1, body2, cuboid, &hit.normal12, options))
}

fn separate_against_face(
    body1: &mut RigidBody,
    shape1: &impl SupportMap,
    body2: &mut RigidBody,
    cuboid: &Cuboid,
    face: CuboidFace,
    feature: Option<RoundFeature>,
    hit: &HitResult,
    options: &CollisionOptions,
) {
    if let Some(move_by) =
        move_by_against_face(body1, shape1, body2, cuboid, face, feature, hit, options)
    {
        apply_separation(body1, body2, &hit.normal12, move_by);
    }
}

/// Separates a sphere and a cuboid.
pub fn separate_sphere_cuboid(
    body1: &mut RigidBody,
    sphere1: &Sphere,
    body2: &mut RigidBody,
    cuboid2: &Cuboid,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    let face = expect_cuboid_face("separate_sphere_cuboid", hit, |area, _| {
        is_sphere_area(area)
    })?;
    let feature = RoundFeature {
        point: body1.next_pos,
        radius: sphere1.radius,
        horizontal: false,
    };

    separate_against_face(body1, sphere1, body2, cuboid2, face, Some(feature), hit, options);
    Ok(())
}

/// Separates a cylinder and a cuboid.
///
/// Caps always separate along the face normal. The side only needs to clear the vertical
/// edges of the cuboid.
pub fn separate_cylinder_cuboid(
    body1: &mut RigidBody,
    cylinder1: &Cylinder,
    body2: &mut RigidBody,
    cuboid2: &Cuboid,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    let face = expect_cuboid_face("separate_cylinder_cuboid", hit, is_cylinder_area_against)?;
    let feature = (hit.area1 == HitArea::Side).then(|| RoundFeature {
        point: body1.next_pos,
        radius: cylinder1.radius,
        horizontal: true,
    });

    separate_against_face(body1, cylinder1, body2, cuboid2, face, feature, hit, options);
    Ok(())
}

/// Separates a capsule and a cuboid.
pub fn separate_capsule_cuboid(
    body1: &mut RigidBody,
    capsule1: &Capsule,
    body2: &mut RigidBody,
    cuboid2: &Cuboid,
    hit: &HitResult,
    options: &CollisionOptions,
) -> Result<(), CollisionError> {
    let face = expect_cuboid_face("separate_capsule_cuboid", hit, is_capsule_area_against)?;
    let radius = capsule1.radius;
    let feature = match hit.area1 {
        HitArea::Side => Some(RoundFeature {
            point: body1.next_pos,
            radius,
            horizontal: true,
        }),
        HitArea::TopSphere => Some(RoundFeature {
            point: capsule1.top_cap_centre(&body1.next_pos),
            radius,
            horizontal: false,
        }),
        HitArea::BottomSphere => Some(RoundFeature {
            point: capsule1.bottom_cap_centre(&body1.next_pos),
            radius,
            horizontal: false,
        }),
        _ => None,
    };

    separate_against_face(body1, capsule1, body2, cuboid2, face, feature, hit, options);
    Ok(())
}
