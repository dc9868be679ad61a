use crate::math::Vector;
use crate::query::check::{horizontal_norm, rounded_hit_point, vertical};
use crate::query::{BodyPose, CollisionOptions, HitArea, HitResult};
use crate::shape::{Capsule, Sphere};
use crate::utils::{normalize_horizontal_or_random, normalize_or_random};

/// Checks if a sphere and a capsule overlap.
///
/// Contacts with a cap on the capsule's axis (within `options.epsilon`) are reported as tips
/// with a vertical normal.
pub fn check_sphere_capsule(
    pose1: &BodyPose,
    sphere1: &Sphere,
    pose2: &BodyPose,
    capsule2: &Capsule,
    options: &CollisionOptions,
) -> Option<HitResult> {
    let centre1 = pose1.centre;
    let centre2 = pose2.centre;
    let s = capsule2.segment_half_height();
    let radii = sphere1.radius + capsule2.radius;
    // The sphere relative to the capsule.
    let d = centre1 - centre2;

    let segment_point = Vector::new(0.0, 0.0, d.z.clamp(-s, s));
    let from_segment = d - segment_point;

    if from_segment.norm_squared() >= radii * radii {
        return None;
    }

    let feature2 = centre2 + segment_point;
    let (normal12, area2) = if d.z.abs() > s {
        let top = d.z > 0.0;
        if horizontal_norm(&d) <= options.epsilon {
            let area = if top { HitArea::TopTip } else { HitArea::BottomTip };
            (vertical(!top), area)
        } else {
            let area = if top {
                HitArea::TopSphere
            } else {
                HitArea::BottomSphere
            };
            (normalize_or_random(&-from_segment, &centre1, &feature2), area)
        }
    } else {
        (
            normalize_horizontal_or_random(&-from_segment, &centre1, &feature2),
            HitArea::Side,
        )
    };

    let point = rounded_hit_point(
        &centre1,
        sphere1.radius,
        &feature2,
        capsule2.radius,
        &normal12,
    );

    Some(HitResult::new(point, normal12, HitArea::Unspecified, area2))
}
