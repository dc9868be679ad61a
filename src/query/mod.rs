//! Narrow-phase collision queries.
//!
//! The most general functions provided by this module are:
//!
//! * [`query::check()`](check()) to test two bodies in any order.
//! * [`query::check_with_covering()`](check_with_covering()) to test a body against a brick.
//!
//! The functions of the [`check`](mod@check) submodule are the routines of each canonical pair.
//! They have the form `check_[shape1]_[shape2]()` where `shape1` comes before `shape2` in the order
//! sphere, cylinder, capsule, cuboid.

pub use self::body_pose::BodyPose;
pub use self::check::{check, check_with_covering};
pub use self::collision_dispatcher::CollisionDispatcher;
pub use self::cuboid_check_helper::{
    CuboidCheckDelegate, CuboidCheckHelper, FaceFrame, FaceHit, FaceTest,
};
pub use self::default_collision_dispatcher::DefaultCollisionDispatcher;
pub use self::error::CollisionError;
pub use self::hit::{HitArea, HitResult};
pub use self::query_options::{CollisionOptions, WhenEdge};
pub use self::shape_pair::ShapePair;

mod body_pose;
pub mod check;
mod collision_dispatcher;
pub mod cuboid_check_helper;
mod default_collision_dispatcher;
mod error;
mod hit;
mod query_options;
mod shape_pair;
