use crate::math::{Real, UnitVector, Vector};

/// Computes how far `point` must travel along `dir` so that its distance to `anchor` becomes
/// exactly `radius`.
///
/// Of the two roots of `|point + t * dir - anchor| = radius`, this returns the one leaving
/// `point` on the side of `anchor` that `dir` points to; the other root lies behind `anchor`.
/// Returns `None` if no such distance exists (negative discriminant), which happens when
/// `point` passes `anchor` laterally farther than `radius`.
#[inline]
pub fn outward_travel(
    point: &Vector<Real>,
    anchor: &Vector<Real>,
    dir: &UnitVector<Real>,
    radius: Real,
) -> Option<Real> {
    let delta = point - anchor;
    let along = delta.dot(dir);
    let lateral_sq = (delta.norm_squared() - along * along).max(0.0);
    let discriminant = radius * radius - lateral_sq;

    if discriminant < 0.0 {
        None
    } else {
        Some(discriminant.sqrt() - along)
    }
}

#[cfg(test)]
mod test {
    use super::outward_travel;
    use crate::math::{UnitVector, Vector};

    #[test]
    fn travel_to_corner_distance() {
        // Lateral offset 0.3, radius 0.5: the final height above the anchor is 0.4.
        let point = Vector::new(0.3, 0.0, 0.1);
        let anchor = Vector::zeros();
        let travel = outward_travel(&point, &anchor, &UnitVector::new_unchecked(Vector::z()), 0.5);
        assert_relative_eq!(travel.unwrap(), 0.3, epsilon = 1.0e-6);
    }

    #[test]
    fn lateral_miss_has_no_travel() {
        let point = Vector::new(0.6, 0.0, 0.1);
        let anchor = Vector::zeros();
        let dir = UnitVector::new_unchecked(Vector::z());
        assert_eq!(outward_travel(&point, &anchor, &dir, 0.5), None);
    }
}
