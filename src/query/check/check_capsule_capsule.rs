use crate::math::Vector;
use crate::query::check::{horizontal_norm, rounded_hit_point, side_hit_point, vertical};
use crate::query::{BodyPose, CollisionOptions, HitArea, HitResult};
use crate::shape::Capsule;
use crate::utils::{normalize_horizontal_or_random, normalize_or_random};

/// Checks if two capsules overlap.
///
/// If the middle segments span a common height the contact is lateral. Otherwise the lower cap
/// of the upper capsule is tested against the upper cap of the lower one.
pub fn check_capsule_capsule(
    pose1: &BodyPose,
    capsule1: &Capsule,
    pose2: &BodyPose,
    capsule2: &Capsule,
    options: &CollisionOptions,
) -> Option<HitResult> {
    let centre1 = pose1.centre;
    let centre2 = pose2.centre;
    let s1 = capsule1.segment_half_height();
    let s2 = capsule2.segment_half_height();
    let radii = capsule1.radius + capsule2.radius;
    let d = centre2 - centre1;

    if d.z.abs() >= capsule1.half_height() + capsule2.half_height() {
        return None;
    }

    let dxy = horizontal_norm(&d);

    if d.z.abs() <= s1 + s2 {
        if dxy >= radii {
            return None;
        }

        let normal12 = normalize_horizontal_or_random(&d, &centre1, &centre2);
        let point = side_hit_point(
            &centre1,
            capsule1.radius,
            (centre1.z - s1, centre1.z + s1),
            &centre2,
            capsule2.radius,
            (centre2.z - s2, centre2.z + s2),
            &normal12,
        );
        return Some(HitResult::new(point, normal12, HitArea::Side, HitArea::Side));
    }

    let up = d.z > 0.0;
    let sign = if up { 1.0 } else { -1.0 };
    // From the nearest cap centre of capsule 1 to the nearest cap centre of capsule 2.
    let between_caps = Vector::new(d.x, d.y, sign * (d.z.abs() - (s1 + s2)));

    if between_caps.norm_squared() >= radii * radii {
        return None;
    }

    let cap1 = centre1 + Vector::z() * (sign * s1);
    let cap2 = centre2 - Vector::z() * (sign * s2);

    let (normal12, area1, area2) = if dxy <= options.epsilon {
        let (area1, area2) = if up {
            (HitArea::TopTip, HitArea::BottomTip)
        } else {
            (HitArea::BottomTip, HitArea::TopTip)
        };
        (vertical(up), area1, area2)
    } else {
        let (area1, area2) = if up {
            (HitArea::TopSphere, HitArea::BottomSphere)
        } else {
            (HitArea::BottomSphere, HitArea::TopSphere)
        };
        (normalize_or_random(&between_caps, &cap1, &cap2), area1, area2)
    };

    let point = rounded_hit_point(&cap1, capsule1.radius, &cap2, capsule2.radius, &normal12);
    Some(HitResult::new(point, normal12, area1, area2))
}
