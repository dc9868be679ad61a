//! Rigid bodies resolved by the collision routines.

pub use self::rigid_body::{BodyMaterial, RigidBody};

mod rigid_body;
