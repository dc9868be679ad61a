use crate::query::check::rounded_hit_point;
use crate::query::{BodyPose, HitArea, HitResult};
use crate::shape::Sphere;
use crate::utils::normalize_or_random;

/// Checks if two spheres overlap.
#[inline]
pub fn check_sphere_sphere(
    pose1: &BodyPose,
    sphere1: &Sphere,
    pose2: &BodyPose,
    sphere2: &Sphere,
) -> Option<HitResult> {
    let centre1 = pose1.centre;
    let centre2 = pose2.centre;
    let delta = centre2 - centre1;
    let radii = sphere1.radius + sphere2.radius;

    if delta.norm_squared() >= radii * radii {
        return None;
    }

    let normal12 = normalize_or_random(&delta, &centre1, &centre2);
    let point = rounded_hit_point(&centre1, sphere1.radius, &centre2, sphere2.radius, &normal12);

    Some(HitResult::new(
        point,
        normal12,
        HitArea::Unspecified,
        HitArea::Unspecified,
    ))
}
