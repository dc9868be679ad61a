//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector, DIM};
use crate::shape::{CuboidFace, SupportMap};
use crate::utils::WSign;

/// Shape of an axis-aligned box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        assert!(
            half_extents.iter().all(|e| *e > 0.0),
            "A cuboid must have positive half-extents."
        );
        Cuboid { half_extents }
    }

    /// Creates a new box from its full size along each axis.
    #[inline]
    pub fn from_size(size: Vector<Real>) -> Cuboid {
        Self::new(size / 2.0)
    }

    /// Half of the vertical extent of this box.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.half_extents.z
    }

    /// Projects `pt`, expressed relative to the centre of the box, on the rectangle of `face`.
    ///
    /// The component along the face normal is set on the face plane while the two other
    /// components are clamped to the face boundaries.
    pub fn clamp_to_face(&self, pt: &Vector<Real>, face: CuboidFace) -> Vector<Real> {
        let mut res = *pt;

        for i in 0..DIM {
            let e = self.half_extents[i];
            res[i] = if i == face.axis() {
                face.sign() * e
            } else {
                res[i].clamp(-e, e)
            };
        }

        res
    }

    /// Checks if the projection of `pt` (relative to the centre of the box) on the plane of
    /// `face` lies within the boundaries of `face`.
    pub fn face_contains_projection(&self, pt: &Vector<Real>, face: CuboidFace) -> bool {
        (0..DIM)
            .filter(|i| *i != face.axis())
            .all(|i| pt[i].abs() <= self.half_extents[i])
    }

    /// Signed distance from `pt` (relative to the centre of the box) to the plane of `face`,
    /// positive on the outer side.
    #[inline]
    pub fn distance_to_face_plane(&self, pt: &Vector<Real>, face: CuboidFace) -> Real {
        face.sign() * pt[face.axis()] - self.half_extents[face.axis()]
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        dir.copy_sign_to(self.half_extents).into()
    }
}
