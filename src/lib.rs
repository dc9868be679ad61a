/*!
rebound3d
========

**rebound3d** is a narrow-phase collision library for a voxel ("brick") world written with
the rust programming language.

It detects, separates and bounces a closed set of dynamic rigid bodies (spheres, cylinders,
capsules and cuboids, all with a vertical axis) against each other and against the static
axis-aligned bricks of a voxel volume.

Every pairwise resolution follows the same three steps:

1. [`query::check`] tells whether two bodies overlap and describes the contact with a
   [`query::HitResult`].
2. [`response::separate`] removes the penetration by moving the tentative positions apart.
3. [`response::bounce`] applies friction then an elastic bounce to the tentative velocities.

The [`bricks`] module feeds static bricks through the same machinery.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)] // Maybe revisit this one later.
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive. Disable the default features to enable `f64`.");
#[cfg(not(any(feature = "f32", feature = "f64")))]
core::compile_error!("Exactly one of the `f32` or `f64` features must be enabled.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod bricks;
pub mod dynamics;
pub mod query;
pub mod response;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector2, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub type UnitVector<N> = na::Unit<Vector3<N>>;

    /// Any mass greater or equal to this value makes a body immovable.
    ///
    /// Always compare with `>=`: bricks and other static geometry may use any value above it.
    pub const LARGE_MASS: Real = 1.0e9;

    /// The default gap left between two bodies after their separation.
    pub const DEFAULT_TINY_GAP: Real = 1.0e-4;

    /// The default tolerance used for geometric operations and speed comparisons.
    pub const DEFAULT_EPSILON: Real = 1.0e-5;

    /// The default magnitude of the gravity, acting along `-z`.
    pub const DEFAULT_GRAVITY: Real = 9.81;

    /// The default duration of one simulation step.
    pub const DEFAULT_TIME_STEP: Real = 1.0 / 60.0;
}
