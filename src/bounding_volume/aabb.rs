//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::bricks::{BrickCoords, BrickRange};
use crate::math::{Point, Real, Vector, DIM};
use crate::shape::BodyShape;

/// An Axis-Aligned Bounding Box (AABB).
///
/// Defined by its minimum and maximum corners, with `mins[i] <= maxs[i]` on every axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The AABB of `shape` centred at `centre`.
    ///
    /// The brick adapters call this with the tentative position of a body.
    #[inline]
    pub fn from_body_extent(shape: &BodyShape, centre: &Point<Real>) -> Self {
        Self::from_half_extents(*centre, shape.half_extents())
    }

    /// The inclusive range of brick cells this AABB overlaps, for bricks of size `brick_size`.
    ///
    /// The cell `c` spans `[c * brick_size, (c + 1) * brick_size]`. A max corner lying exactly on
    /// a cell boundary does not include the cell above it, since touching is not overlapping.
    pub fn brick_range(&self, brick_size: &Vector<Real>) -> BrickRange {
        let mut mins = BrickCoords::origin();
        let mut maxs = BrickCoords::origin();

        for i in 0..DIM {
            mins[i] = (self.mins[i] / brick_size[i]).floor() as i32;
            maxs[i] = (self.maxs[i] / brick_size[i]).ceil() as i32 - 1;
        }

        BrickRange::new(mins, maxs)
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }
}
