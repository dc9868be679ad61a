use crate::math::Vector;
use crate::query::check::{horizontal_norm, is_above, side_hit_point, vertical, vertical_hit_point};
use crate::query::{BodyPose, HitArea, HitResult};
use crate::shape::Cylinder;
use crate::utils::normalize_horizontal_or_random;

/// Checks if two cylinders overlap.
///
/// Two vertical cylinders overlap iff both their heights and their discs overlap. The contact
/// normal is vertical or horizontal, whichever has the smallest penetration.
pub fn check_cylinder_cylinder(
    pose1: &BodyPose,
    cylinder1: &Cylinder,
    pose2: &BodyPose,
    cylinder2: &Cylinder,
) -> Option<HitResult> {
    let centre1 = pose1.centre;
    let centre2 = pose2.centre;
    let hh1 = cylinder1.half_height();
    let hh2 = cylinder2.half_height();
    let d = centre2 - centre1;

    let penetration_z = (hh1 + hh2) - d.z.abs();
    if penetration_z <= 0.0 {
        return None;
    }

    let penetration_xy = (cylinder1.radius + cylinder2.radius) - horizontal_norm(&d);
    if penetration_xy <= 0.0 {
        return None;
    }

    if penetration_z <= penetration_xy {
        let up = is_above(d.z, &centre1, &centre2);
        let (area1, area2) = if up {
            (HitArea::TopFace, HitArea::BottomFace)
        } else {
            (HitArea::BottomFace, HitArea::TopFace)
        };
        let point = vertical_hit_point(
            &centre1,
            &Vector::new(cylinder1.radius, cylinder1.radius, hh1),
            &centre2,
            &Vector::new(cylinder2.radius, cylinder2.radius, hh2),
            up,
        );
        Some(HitResult::new(point, vertical(up), area1, area2))
    } else {
        let normal12 = normalize_horizontal_or_random(&d, &centre1, &centre2);
        let point = side_hit_point(
            &centre1,
            cylinder1.radius,
            (centre1.z - hh1, centre1.z + hh1),
            &centre2,
            cylinder2.radius,
            (centre2.z - hh2, centre2.z + hh2),
            &normal12,
        );
        Some(HitResult::new(point, normal12, HitArea::Side, HitArea::Side))
    }
}
