use crate::dynamics::{BodyMaterial, RigidBody};
use crate::math::{Point, Real, Vector};
use crate::shape::{Cuboid, CuboidFace};

/// The shape of the content of a brick cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BrickShape {
    /// Nothing to collide with.
    #[default]
    Empty,
    /// The whole cell.
    Cube,
    /// The lower half of the cell.
    BottomSlab,
    /// The upper half of the cell.
    TopSlab,
    /// A slope going up toward the given side face.
    Ramp(CuboidFace),
    /// Any other geometry, not modelled as a collidable solid.
    Complex,
}

impl BrickShape {
    /// Does this shape fill its whole cell?
    #[inline]
    pub fn is_cube(self) -> bool {
        self == BrickShape::Cube
    }
}

/// A brick: its shape and the surface properties of its material.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Brick {
    /// The shape of the brick.
    pub shape: BrickShape,
    /// The friction and elasticity of the brick's surface.
    pub material: BodyMaterial,
}

impl From<BrickShape> for Brick {
    fn from(shape: BrickShape) -> Self {
        Brick::new(shape)
    }
}

impl Brick {
    /// A brick of the given shape with the default material.
    #[inline]
    pub fn new(shape: BrickShape) -> Self {
        Brick {
            shape,
            material: BodyMaterial::default(),
        }
    }

    /// Sets the material of this brick.
    #[inline]
    #[must_use]
    pub fn with_material(mut self, material: BodyMaterial) -> Self {
        self.material = material;
        self
    }
}

/// The collision geometry of a brick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BrickGeometry {
    /// The brick is not collided with.
    None,
    /// The brick collides as an axis-aligned cuboid.
    Cuboid {
        /// The world-space centre of the cuboid.
        centre: Point<Real>,
        /// The full size of the cuboid.
        size: Vector<Real>,
    },
}

impl BrickGeometry {
    /// The collision geometry of a brick of the given shape, in the cell starting at
    /// `cell_origin`.
    pub fn determine(
        shape: BrickShape,
        cell_origin: &Point<Real>,
        brick_size: &Vector<Real>,
    ) -> Self {
        let half = brick_size / 2.0;
        let quarter_z = Vector::new(0.0, 0.0, brick_size.z / 4.0);
        let slab = Vector::new(brick_size.x, brick_size.y, half.z);

        match shape {
            BrickShape::Cube => BrickGeometry::Cuboid {
                centre: cell_origin + half,
                size: *brick_size,
            },
            BrickShape::BottomSlab => BrickGeometry::Cuboid {
                centre: cell_origin + half - quarter_z,
                size: slab,
            },
            BrickShape::TopSlab => BrickGeometry::Cuboid {
                centre: cell_origin + half + quarter_z,
                size: slab,
            },
            BrickShape::Empty | BrickShape::Ramp(_) | BrickShape::Complex => BrickGeometry::None,
        }
    }

    /// The immovable body standing for this geometry, if it is collidable.
    pub fn to_body(&self, material: BodyMaterial) -> Option<RigidBody> {
        match *self {
            BrickGeometry::None => None,
            BrickGeometry::Cuboid { centre, size } => Some(
                RigidBody::new_immovable(Cuboid::from_size(size), centre).with_material(material),
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{BrickGeometry, BrickShape};
    use crate::dynamics::BodyMaterial;
    use crate::math::{Point, Vector};
    use crate::shape::CuboidFace;

    #[test]
    fn slabs_fill_half_of_the_cell() {
        let origin = Point::new(2.0, 0.0, -1.0);
        let size = Vector::repeat(1.0);

        assert_eq!(
            BrickGeometry::determine(BrickShape::BottomSlab, &origin, &size),
            BrickGeometry::Cuboid {
                centre: Point::new(2.5, 0.5, -0.75),
                size: Vector::new(1.0, 1.0, 0.5),
            }
        );
        assert_eq!(
            BrickGeometry::determine(BrickShape::TopSlab, &origin, &size),
            BrickGeometry::Cuboid {
                centre: Point::new(2.5, 0.5, -0.25),
                size: Vector::new(1.0, 1.0, 0.5),
            }
        );
    }

    #[test]
    fn only_solid_shapes_have_a_body() {
        let origin = Point::origin();
        let size = Vector::new(1.0, 1.0, 2.0);

        let cube = BrickGeometry::determine(BrickShape::Cube, &origin, &size);
        let body = cube.to_body(BodyMaterial::default()).unwrap();
        assert!(body.is_immovable());
        assert_eq!(body.pos, Point::new(0.5, 0.5, 1.0));

        for shape in [
            BrickShape::Empty,
            BrickShape::Ramp(CuboidFace::North),
            BrickShape::Complex,
        ] {
            let geometry = BrickGeometry::determine(shape, &origin, &size);
            assert_eq!(geometry, BrickGeometry::None);
            assert!(geometry.to_body(BodyMaterial::default()).is_none());
        }
    }
}
