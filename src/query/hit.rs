use crate::math::{Point, Real, UnitVector};
use crate::shape::CuboidFace;
use core::mem;

/// The part of a body's surface involved in a contact.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum HitArea {
    /// No specific area, used for spheres.
    Unspecified,
    /// The top face of a cuboid or the top cap (and its rim) of a cylinder.
    TopFace,
    /// The bottom face of a cuboid or the bottom cap (and its rim) of a cylinder.
    BottomFace,
    /// The lateral surface of a cylinder or of the middle of a capsule.
    Side,
    /// The `+y` face of a cuboid.
    NorthFace,
    /// The `+x` face of a cuboid.
    EastFace,
    /// The `-y` face of a cuboid.
    SouthFace,
    /// The `-x` face of a cuboid.
    WestFace,
    /// The top cap of a capsule, away from its axis.
    TopSphere,
    /// The bottom cap of a capsule, away from its axis.
    BottomSphere,
    /// The top cap of a capsule, on its axis.
    TopTip,
    /// The bottom cap of a capsule, on its axis.
    BottomTip,
}

impl HitArea {
    /// The cuboid face this area designates, if any.
    pub fn as_cuboid_face(self) -> Option<CuboidFace> {
        match self {
            HitArea::TopFace => Some(CuboidFace::Top),
            HitArea::BottomFace => Some(CuboidFace::Bottom),
            HitArea::NorthFace => Some(CuboidFace::North),
            HitArea::EastFace => Some(CuboidFace::East),
            HitArea::SouthFace => Some(CuboidFace::South),
            HitArea::WestFace => Some(CuboidFace::West),
            _ => None,
        }
    }

    /// Is this one of the two caps of a capsule?
    pub fn is_capsule_cap(self) -> bool {
        matches!(
            self,
            HitArea::TopSphere | HitArea::BottomSphere | HitArea::TopTip | HitArea::BottomTip
        )
    }
}

impl From<CuboidFace> for HitArea {
    fn from(face: CuboidFace) -> Self {
        match face {
            CuboidFace::East => HitArea::EastFace,
            CuboidFace::West => HitArea::WestFace,
            CuboidFace::North => HitArea::NorthFace,
            CuboidFace::South => HitArea::SouthFace,
            CuboidFace::Top => HitArea::TopFace,
            CuboidFace::Bottom => HitArea::BottomFace,
        }
    }
}

/// Geometric description of a contact between two bodies.
#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct HitResult {
    /// The contact point, in world-space.
    pub point: Point<Real>,
    /// The contact normal, pointing from the first body toward the second one.
    pub normal12: UnitVector<Real>,
    /// The area of the first body involved in the contact.
    pub area1: HitArea,
    /// The area of the second body involved in the contact.
    pub area2: HitArea,
}

impl HitResult {
    /// Creates a new hit result.
    #[inline]
    pub fn new(
        point: Point<Real>,
        normal12: UnitVector<Real>,
        area1: HitArea,
        area2: HitArea,
    ) -> Self {
        HitResult {
            point,
            normal12,
            area1,
            area2,
        }
    }

    /// Swaps the point of view of this hit: the normal is negated and the areas swapped.
    #[inline]
    pub fn flip(&mut self) {
        self.normal12 = -self.normal12;
        mem::swap(&mut self.area1, &mut self.area2);
    }

    /// Returns a new hit result seen from the point of view of the second body.
    #[inline]
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }
}

#[cfg(test)]
mod test {
    use super::{HitArea, HitResult};
    use crate::math::{Point, UnitVector, Vector};
    use crate::shape::CuboidFace;

    #[test]
    fn flip_swaps_point_of_view() {
        let hit = HitResult::new(
            Point::new(1.0, 2.0, 3.0),
            UnitVector::new_unchecked(Vector::z()),
            HitArea::BottomTip,
            HitArea::TopFace,
        );
        let flipped = hit.flipped();
        assert_eq!(flipped.point, hit.point);
        assert_eq!(flipped.normal12.into_inner(), -Vector::z());
        assert_eq!(flipped.area1, HitArea::TopFace);
        assert_eq!(flipped.area2, HitArea::BottomTip);
        assert_eq!(flipped.flipped(), hit);
    }

    #[test]
    fn cuboid_faces_round_trip() {
        for face in CuboidFace::ALL {
            assert_eq!(HitArea::from(face).as_cuboid_face(), Some(face));
        }
        assert_eq!(HitArea::Side.as_cuboid_face(), None);
    }
}
