//! Collision response: positional separation and velocity bounce.
//!
//! Both steps consume the [`HitResult`](crate::query::HitResult) of a successful
//! [`check`](crate::query::check()) of the same two bodies, and only ever mutate their
//! tentative state (`next_pos` and `next_speed`).

pub use self::bounce::*;
pub use self::contact_normal::ContactNormal;
pub use self::separate::*;

mod bounce;
mod contact_normal;
pub(crate) mod hit_areas;
mod separate;
