use crate::math::{Real, Vector};
use crate::query::check::{
    horizontal_norm, rounded_hit_point, side_hit_point, vertical, vertical_hit_point,
};
use crate::query::{BodyPose, HitArea, HitResult};
use crate::shape::{Cylinder, Sphere};
use crate::utils::{normalize_horizontal_or_random, normalize_or_random};

/// Checks if a sphere and a cylinder overlap.
///
/// The cylinder's area is `TopFace` or `BottomFace` for contacts with its caps or their rims,
/// `Side` otherwise.
pub fn check_sphere_cylinder(
    pose1: &BodyPose,
    sphere1: &Sphere,
    pose2: &BodyPose,
    cylinder2: &Cylinder,
) -> Option<HitResult> {
    let centre1 = pose1.centre;
    let centre2 = pose2.centre;
    let rs = sphere1.radius;
    let rc = cylinder2.radius;
    let hh = cylinder2.half_height();
    // The sphere relative to the cylinder.
    let d = centre1 - centre2;

    if d.z.abs() >= hh + rs {
        return None;
    }

    let dxy = horizontal_norm(&d);
    if dxy >= rc + rs {
        return None;
    }

    let over_caps = dxy <= rc;
    let within_height = d.z.abs() <= hh;
    let sphere_above = d.z >= 0.0;

    let vertical_contact = if over_caps && within_height {
        // The centre of the sphere is inside the cylinder.
        hh - d.z.abs() <= rc - dxy
    } else if over_caps || within_height {
        over_caps
    } else {
        // Closest to one of the rims.
        let rim = Vector::new(d.x * rc / dxy, d.y * rc / dxy, hh.copysign(d.z));
        let to_rim = rim - d;
        if to_rim.norm_squared() >= rs * rs {
            return None;
        }

        let rim_point = centre2 + rim;
        let normal12 = normalize_or_random(&to_rim, &centre1, &rim_point);
        let area2 = if sphere_above {
            HitArea::TopFace
        } else {
            HitArea::BottomFace
        };
        let point = rounded_hit_point(&centre1, rs, &rim_point, 0.0, &normal12);
        return Some(HitResult::new(point, normal12, HitArea::Unspecified, area2));
    };

    if vertical_contact {
        let normal12 = vertical(!sphere_above);
        let area2 = if sphere_above {
            HitArea::TopFace
        } else {
            HitArea::BottomFace
        };
        let point = vertical_hit_point(
            &centre1,
            &Vector::repeat(rs),
            &centre2,
            &Vector::new(rc, rc, hh),
            !sphere_above,
        );
        Some(HitResult::new(point, normal12, HitArea::Unspecified, area2))
    } else {
        let normal12 = normalize_horizontal_or_random(&-d, &centre1, &centre2);
        let point = side_hit_point(
            &centre1,
            sphere_horizontal_reach(rs, d.z, hh),
            (centre1.z - rs, centre1.z + rs),
            &centre2,
            rc,
            (centre2.z - hh, centre2.z + hh),
            &normal12,
        );
        Some(HitResult::new(point, normal12, HitArea::Unspecified, HitArea::Side))
    }
}

// Radius of the slice of the sphere at the nearest height covered by the cylinder.
fn sphere_horizontal_reach(radius: Real, dz: Real, half_height: Real) -> Real {
    let outside = (dz.abs() - half_height).max(0.0);
    (radius * radius - outside * outside).max(0.0).sqrt()
}

#[cfg(test)]
mod test {
    use super::check_sphere_cylinder;
    use crate::math::{Point, Vector};
    use crate::query::{BodyPose, HitArea};
    use crate::shape::{Cylinder, Sphere};

    fn check(sphere_centre: Point<crate::math::Real>) -> Option<crate::query::HitResult> {
        check_sphere_cylinder(
            &BodyPose::at_rest(sphere_centre),
            &Sphere::new(0.5),
            &BodyPose::at_rest(Point::origin()),
            &Cylinder::new(1.0, 2.0),
        )
    }

    #[test]
    fn sphere_on_top_cap() {
        let hit = check(Point::new(0.3, 0.0, 1.4)).unwrap();
        assert_eq!(hit.area2, HitArea::TopFace);
        assert_eq!(hit.normal12.into_inner(), -Vector::z());
    }

    #[test]
    fn sphere_against_side() {
        let hit = check(Point::new(0.0, -1.4, 0.2)).unwrap();
        assert_eq!(hit.area2, HitArea::Side);
        assert_relative_eq!(hit.normal12.into_inner(), Vector::y());
        assert_relative_eq!(hit.point.y, -0.95, epsilon = 1.0e-6);
    }

    #[test]
    fn sphere_against_rim() {
        let hit = check(Point::new(1.2, 0.0, 1.2)).unwrap();
        assert_eq!(hit.area2, HitArea::TopFace);
        assert_relative_eq!(
            hit.normal12.into_inner(),
            Vector::new(-1.0, 0.0, -1.0).normalize(),
            epsilon = 1.0e-6
        );
        assert!(check(Point::new(1.4, 0.0, 1.4)).is_none());
    }
}
