use crate::math::{Real, UnitVector, Vector};
use na::Vector3;

/// One of the six faces of an axis-aligned box.
///
/// With `+z` pointing up, `+x` is east and `+y` is north.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CuboidFace {
    /// The face with outward normal `+x`.
    East,
    /// The face with outward normal `-x`.
    West,
    /// The face with outward normal `+y`.
    North,
    /// The face with outward normal `-y`.
    South,
    /// The face with outward normal `+z`.
    Top,
    /// The face with outward normal `-z`.
    Bottom,
}

impl CuboidFace {
    /// All the faces, side faces first.
    pub const ALL: [CuboidFace; 6] = [
        CuboidFace::East,
        CuboidFace::West,
        CuboidFace::North,
        CuboidFace::South,
        CuboidFace::Top,
        CuboidFace::Bottom,
    ];

    /// The four faces with a horizontal normal.
    pub const SIDES: [CuboidFace; 4] = [
        CuboidFace::East,
        CuboidFace::West,
        CuboidFace::North,
        CuboidFace::South,
    ];

    /// The index of the coordinate axis this face is orthogonal to.
    #[inline]
    pub fn axis(self) -> usize {
        match self {
            CuboidFace::East | CuboidFace::West => 0,
            CuboidFace::North | CuboidFace::South => 1,
            CuboidFace::Top | CuboidFace::Bottom => 2,
        }
    }

    /// The sign of the outward normal along [`Self::axis`].
    #[inline]
    pub fn sign(self) -> Real {
        match self {
            CuboidFace::East | CuboidFace::North | CuboidFace::Top => 1.0,
            CuboidFace::West | CuboidFace::South | CuboidFace::Bottom => -1.0,
        }
    }

    /// The outward normal of this face.
    #[inline]
    pub fn normal(self) -> Vector<Real> {
        let mut normal = Vector::zeros();
        normal[self.axis()] = self.sign();
        normal
    }

    /// The outward unit normal of this face.
    #[inline]
    pub fn unit_normal(self) -> UnitVector<Real> {
        UnitVector::new_unchecked(self.normal())
    }

    /// The offset to the neighbouring grid cell sharing this face.
    #[inline]
    pub fn neighbour_offset(self) -> Vector3<i32> {
        let mut offset = Vector3::zeros();
        offset[self.axis()] = if self.sign() > 0.0 { 1 } else { -1 };
        offset
    }

    /// Is the normal of this face horizontal?
    #[inline]
    pub fn is_side(self) -> bool {
        self.axis() != 2
    }

    /// The face on the other side of the box.
    pub fn opposite(self) -> CuboidFace {
        match self {
            CuboidFace::East => CuboidFace::West,
            CuboidFace::West => CuboidFace::East,
            CuboidFace::North => CuboidFace::South,
            CuboidFace::South => CuboidFace::North,
            CuboidFace::Top => CuboidFace::Bottom,
            CuboidFace::Bottom => CuboidFace::Top,
        }
    }

    /// The side face with the outward normal `(normal_x, normal_y, 0)`, if it is axis-aligned.
    pub fn from_side_normal(normal_x: Real, normal_y: Real) -> Option<CuboidFace> {
        match (normal_x, normal_y) {
            (x, y) if x > 0.0 && y == 0.0 => Some(CuboidFace::East),
            (x, y) if x < 0.0 && y == 0.0 => Some(CuboidFace::West),
            (x, y) if x == 0.0 && y > 0.0 => Some(CuboidFace::North),
            (x, y) if x == 0.0 && y < 0.0 => Some(CuboidFace::South),
            _ => None,
        }
    }

    /// The top (`normal_z > 0`) or bottom (`normal_z < 0`) face.
    pub fn from_vertical_normal(normal_z: Real) -> Option<CuboidFace> {
        if normal_z > 0.0 {
            Some(CuboidFace::Top)
        } else if normal_z < 0.0 {
            Some(CuboidFace::Bottom)
        } else {
            None
        }
    }
}
