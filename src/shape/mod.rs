//! Shapes supported by rebound3d.
//!
//! Every shape is axis-aligned and never rotates. Round shapes (cylinders and capsules) always
//! have a vertical axis.

pub use self::capsule::Capsule;
pub use self::cuboid::Cuboid;
pub use self::cuboid_face::CuboidFace;
pub use self::cylinder::Cylinder;
#[doc(inline)]
pub use self::shape::{BodyShape, ShapeKind};
pub use self::sphere::Sphere;
#[doc(inline)]
pub use self::support_map::SupportMap;

mod capsule;
mod cuboid;
mod cuboid_face;
mod cylinder;
mod shape;
mod sphere;
mod support_map;
