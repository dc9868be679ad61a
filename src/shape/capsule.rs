use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::support_map::sign_or_zero;
use crate::shape::SupportMap;

#[derive(PartialEq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// A capsule shape: a vertical segment dilated by a sphere.
///
/// Its cylindrical middle spans `height - 2 * radius` and is closed by two hemispherical caps
/// centred at the endpoints of the middle segment.
pub struct Capsule {
    /// The radius of the capsule.
    pub radius: Real,
    /// The full height of the capsule, from its bottom tip to its top tip.
    pub height: Real,
}

impl Capsule {
    /// Creates a new capsule with the given radius and tip-to-tip height.
    pub fn new(radius: Real, height: Real) -> Self {
        assert!(radius > 0.0, "A capsule must have a positive radius.");
        assert!(
            height >= 2.0 * radius,
            "A capsule cannot be shorter than its two caps."
        );
        Self { radius, height }
    }

    /// The distance between the centre of this capsule and each of its tips.
    pub fn half_height(&self) -> Real {
        self.height / 2.0
    }

    /// Half of the length of the middle segment, i.e., the distance between the centre of the
    /// capsule and the centre of each cap.
    pub fn segment_half_height(&self) -> Real {
        self.half_height() - self.radius
    }

    /// The centre of the top cap of a capsule centred at `centre`.
    pub fn top_cap_centre(&self, centre: &Point<Real>) -> Point<Real> {
        centre + Vector::z() * self.segment_half_height()
    }

    /// The centre of the bottom cap of a capsule centred at `centre`.
    pub fn bottom_cap_centre(&self, centre: &Point<Real>) -> Point<Real> {
        centre - Vector::z() * self.segment_half_height()
    }
}

impl SupportMap for Capsule {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let rounded = UnitVector::try_new(*dir, Real::EPSILON)
            .map(|dir| *dir * self.radius)
            .unwrap_or_else(Vector::zeros);
        let segment_end =
            Vector::z() * self.segment_half_height() * sign_or_zero(dir.z, Real::EPSILON);
        Point::from(segment_end + rounded)
    }

    fn support_extent(&self, dir: &UnitVector<Real>) -> Real {
        self.radius + self.segment_half_height() * dir.z.abs()
    }
}
