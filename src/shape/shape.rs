use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{Capsule, Cuboid, Cylinder, Sphere, SupportMap};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(u8)]
/// Enum representing the type of a shape.
///
/// The declaration order is the canonical argument order of the pairwise collision routines.
pub enum ShapeKind {
    /// A sphere shape.
    Sphere = 0,
    /// A cylinder shape with a vertical axis.
    Cylinder,
    /// A capsule shape with a vertical axis.
    Capsule,
    /// An axis-aligned cuboid shape.
    Cuboid,
}

impl ShapeKind {
    /// The number of shape kinds.
    pub const COUNT: usize = 4;

    /// All the shape kinds, in canonical order.
    pub const ALL: [ShapeKind; Self::COUNT] = [
        ShapeKind::Sphere,
        ShapeKind::Cylinder,
        ShapeKind::Capsule,
        ShapeKind::Cuboid,
    ];

    /// The index of this kind in [`Self::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The shape of a rigid body.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BodyShape {
    /// A sphere.
    Sphere(Sphere),
    /// A cylinder with a vertical axis.
    Cylinder(Cylinder),
    /// A capsule with a vertical axis.
    Capsule(Capsule),
    /// An axis-aligned cuboid.
    Cuboid(Cuboid),
}

impl BodyShape {
    /// The kind of this shape.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            BodyShape::Sphere(_) => ShapeKind::Sphere,
            BodyShape::Cylinder(_) => ShapeKind::Cylinder,
            BodyShape::Capsule(_) => ShapeKind::Capsule,
            BodyShape::Cuboid(_) => ShapeKind::Cuboid,
        }
    }

    /// Converts this shape into a sphere if it is one.
    #[inline]
    pub fn as_sphere(&self) -> Option<&Sphere> {
        match self {
            BodyShape::Sphere(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this shape into a cylinder if it is one.
    #[inline]
    pub fn as_cylinder(&self) -> Option<&Cylinder> {
        match self {
            BodyShape::Cylinder(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this shape into a capsule if it is one.
    #[inline]
    pub fn as_capsule(&self) -> Option<&Capsule> {
        match self {
            BodyShape::Capsule(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this shape into a cuboid if it is one.
    #[inline]
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        match self {
            BodyShape::Cuboid(s) => Some(s),
            _ => None,
        }
    }

    /// Half of the vertical extent of this shape.
    pub fn half_height(&self) -> Real {
        match self {
            BodyShape::Sphere(s) => s.half_height(),
            BodyShape::Cylinder(s) => s.half_height(),
            BodyShape::Capsule(s) => s.half_height(),
            BodyShape::Cuboid(s) => s.half_height(),
        }
    }

    /// The half-extents of the axis-aligned box enclosing this shape.
    pub fn half_extents(&self) -> Vector<Real> {
        match self {
            BodyShape::Sphere(s) => Vector::repeat(s.radius),
            BodyShape::Cylinder(s) => Vector::new(s.radius, s.radius, s.half_height()),
            BodyShape::Capsule(s) => Vector::new(s.radius, s.radius, s.half_height()),
            BodyShape::Cuboid(s) => s.half_extents,
        }
    }

    fn as_support_map(&self) -> &dyn SupportMap {
        match self {
            BodyShape::Sphere(s) => s,
            BodyShape::Cylinder(s) => s,
            BodyShape::Capsule(s) => s,
            BodyShape::Cuboid(s) => s,
        }
    }
}

impl SupportMap for BodyShape {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.as_support_map().local_support_point(dir)
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &UnitVector<Real>) -> Point<Real> {
        self.as_support_map().local_support_point_toward(dir)
    }

    #[inline]
    fn support_extent(&self, dir: &UnitVector<Real>) -> Real {
        self.as_support_map().support_extent(dir)
    }
}

impl From<Sphere> for BodyShape {
    fn from(shape: Sphere) -> Self {
        BodyShape::Sphere(shape)
    }
}

impl From<Cylinder> for BodyShape {
    fn from(shape: Cylinder) -> Self {
        BodyShape::Cylinder(shape)
    }
}

impl From<Capsule> for BodyShape {
    fn from(shape: Capsule) -> Self {
        BodyShape::Capsule(shape)
    }
}

impl From<Cuboid> for BodyShape {
    fn from(shape: Cuboid) -> Self {
        BodyShape::Cuboid(shape)
    }
}
