use crate::shape::ShapeKind;

/// An unordered pair of shape kinds, named in canonical order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapePair {
    /// Two spheres.
    SphereSphere,
    /// A sphere and a cylinder.
    SphereCylinder,
    /// A sphere and a capsule.
    SphereCapsule,
    /// A sphere and a cuboid.
    SphereCuboid,
    /// Two cylinders.
    CylinderCylinder,
    /// A cylinder and a capsule.
    CylinderCapsule,
    /// A cylinder and a cuboid.
    CylinderCuboid,
    /// Two capsules.
    CapsuleCapsule,
    /// A capsule and a cuboid.
    CapsuleCuboid,
    /// Two cuboids.
    CuboidCuboid,
}

const fn pair_of(kind1: ShapeKind, kind2: ShapeKind) -> (ShapePair, bool) {
    use ShapeKind::*;

    match (kind1, kind2) {
        (Sphere, Sphere) => (ShapePair::SphereSphere, false),
        (Sphere, Cylinder) => (ShapePair::SphereCylinder, false),
        (Sphere, Capsule) => (ShapePair::SphereCapsule, false),
        (Sphere, Cuboid) => (ShapePair::SphereCuboid, false),
        (Cylinder, Sphere) => (ShapePair::SphereCylinder, true),
        (Cylinder, Cylinder) => (ShapePair::CylinderCylinder, false),
        (Cylinder, Capsule) => (ShapePair::CylinderCapsule, false),
        (Cylinder, Cuboid) => (ShapePair::CylinderCuboid, false),
        (Capsule, Sphere) => (ShapePair::SphereCapsule, true),
        (Capsule, Cylinder) => (ShapePair::CylinderCapsule, true),
        (Capsule, Capsule) => (ShapePair::CapsuleCapsule, false),
        (Capsule, Cuboid) => (ShapePair::CapsuleCuboid, false),
        (Cuboid, Sphere) => (ShapePair::SphereCuboid, true),
        (Cuboid, Cylinder) => (ShapePair::CylinderCuboid, true),
        (Cuboid, Capsule) => (ShapePair::CapsuleCuboid, true),
        (Cuboid, Cuboid) => (ShapePair::CuboidCuboid, false),
    }
}

const PAIR_TABLE: [[(ShapePair, bool); ShapeKind::COUNT]; ShapeKind::COUNT] = {
    let mut table = [[(ShapePair::SphereSphere, false); ShapeKind::COUNT]; ShapeKind::COUNT];
    let mut i = 0;
    while i < ShapeKind::COUNT {
        let mut j = 0;
        while j < ShapeKind::COUNT {
            table[i][j] = pair_of(ShapeKind::ALL[i], ShapeKind::ALL[j]);
            j += 1;
        }
        i += 1;
    }
    table
};

impl ShapePair {
    /// The pair of `kind1` and `kind2`, and whether they must be swapped to match the canonical
    /// order of the pair.
    #[inline]
    pub fn for_kinds(kind1: ShapeKind, kind2: ShapeKind) -> (ShapePair, bool) {
        PAIR_TABLE[kind1.index()][kind2.index()]
    }

    /// The kinds of this pair, in canonical order.
    pub fn kinds(self) -> (ShapeKind, ShapeKind) {
        match self {
            ShapePair::SphereSphere => (ShapeKind::Sphere, ShapeKind::Sphere),
            ShapePair::SphereCylinder => (ShapeKind::Sphere, ShapeKind::Cylinder),
            ShapePair::SphereCapsule => (ShapeKind::Sphere, ShapeKind::Capsule),
            ShapePair::SphereCuboid => (ShapeKind::Sphere, ShapeKind::Cuboid),
            ShapePair::CylinderCylinder => (ShapeKind::Cylinder, ShapeKind::Cylinder),
            ShapePair::CylinderCapsule => (ShapeKind::Cylinder, ShapeKind::Capsule),
            ShapePair::CylinderCuboid => (ShapeKind::Cylinder, ShapeKind::Cuboid),
            ShapePair::CapsuleCapsule => (ShapeKind::Capsule, ShapeKind::Capsule),
            ShapePair::CapsuleCuboid => (ShapeKind::Capsule, ShapeKind::Cuboid),
            ShapePair::CuboidCuboid => (ShapeKind::Cuboid, ShapeKind::Cuboid),
        }
    }

    /// Does a collision routine exist for this pair?
    #[inline]
    pub fn is_supported(self) -> bool {
        self != ShapePair::CuboidCuboid
    }
}
