//! Velocity response, one routine per canonical pair of shapes.
//!
//! Every routine validates the hit areas it receives, then runs the same friction and bounce
//! math along the contact normal.

pub use self::bounce::bounce;
pub use self::bounce_math::friction_then_bounce;
pub use self::bounce_round_cuboid::{
    bounce_capsule_cuboid, bounce_cylinder_cuboid, bounce_sphere_cuboid,
};
pub use self::bounce_round_round::{
    bounce_capsule_capsule, bounce_cylinder_capsule, bounce_cylinder_cylinder,
    bounce_sphere_capsule, bounce_sphere_cylinder, bounce_sphere_sphere,
};

mod bounce;
mod bounce_math;
mod bounce_round_cuboid;
mod bounce_round_round;
