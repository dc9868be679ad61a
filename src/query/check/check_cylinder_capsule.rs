use crate::math::Vector;
use crate::query::check::{
    horizontal_norm, rounded_hit_point, side_hit_point, vertical, vertical_hit_point,
};
use crate::query::{BodyPose, HitArea, HitResult};
use crate::shape::{Capsule, Cylinder};
use crate::utils::{normalize_horizontal_or_random, normalize_or_random};

/// Checks if a cylinder and a capsule overlap.
///
/// When the middle segment of the capsule spans part of the cylinder's height, the contact is
/// either lateral or on the capsule's tip, whichever penetrates least. Otherwise the nearest cap
/// of the capsule is tested like a sphere against the cylinder's cap and rim.
pub fn check_cylinder_capsule(
    pose1: &BodyPose,
    cylinder1: &Cylinder,
    pose2: &BodyPose,
    capsule2: &Capsule,
) -> Option<HitResult> {
    let centre1 = pose1.centre;
    let centre2 = pose2.centre;
    let hh = cylinder1.half_height();
    let rc = cylinder1.radius;
    let r = capsule2.radius;
    let s = capsule2.segment_half_height();
    // The capsule relative to the cylinder.
    let d = centre2 - centre1;

    if d.z.abs() >= hh + capsule2.half_height() {
        return None;
    }

    let dxy = horizontal_norm(&d);
    let segment_low = d.z - s;
    let segment_high = d.z + s;
    let capsule_above = d.z >= 0.0;
    let (area1_cap, area2_tip, area2_sphere) = if capsule_above {
        (HitArea::TopFace, HitArea::BottomTip, HitArea::BottomSphere)
    } else {
        (HitArea::BottomFace, HitArea::TopTip, HitArea::TopSphere)
    };
    let half_extents1 = Vector::new(rc, rc, hh);
    let half_extents2 = Vector::new(r, r, capsule2.half_height());

    if segment_low <= hh && segment_high >= -hh {
        let penetration_xy = rc + r - dxy;
        if penetration_xy <= 0.0 {
            return None;
        }

        let penetration_z = hh + capsule2.half_height() - d.z.abs();
        if penetration_z < penetration_xy {
            let point = vertical_hit_point(
                &centre1,
                &half_extents1,
                &centre2,
                &half_extents2,
                capsule_above,
            );
            return Some(HitResult::new(
                point,
                vertical(capsule_above),
                area1_cap,
                area2_tip,
            ));
        }

        let normal12 = normalize_horizontal_or_random(&d, &centre1, &centre2);
        let point = side_hit_point(
            &centre1,
            rc,
            (centre1.z - hh, centre1.z + hh),
            &centre2,
            r,
            (centre2.z - s, centre2.z + s),
            &normal12,
        );
        return Some(HitResult::new(point, normal12, HitArea::Side, HitArea::Side));
    }

    // The nearest cap, relative to the cylinder.
    let cap = Vector::new(d.x, d.y, if capsule_above { segment_low } else { segment_high });

    if dxy <= rc {
        // The z overlap test above guarantees the tip reaches the cap.
        let point = vertical_hit_point(
            &centre1,
            &half_extents1,
            &centre2,
            &half_extents2,
            capsule_above,
        );
        return Some(HitResult::new(
            point,
            vertical(capsule_above),
            area1_cap,
            area2_tip,
        ));
    }

    let rim = Vector::new(d.x * rc / dxy, d.y * rc / dxy, hh.copysign(cap.z));
    let from_rim = cap - rim;
    if from_rim.norm_squared() >= r * r {
        return None;
    }

    let rim_point = centre1 + rim;
    let cap_point = centre1 + cap;
    let normal12 = normalize_or_random(&from_rim, &rim_point, &cap_point);
    let point = rounded_hit_point(&rim_point, 0.0, &cap_point, r, &normal12);

    Some(HitResult::new(point, normal12, area1_cap, area2_sphere))
}
