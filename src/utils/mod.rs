//! Various unsorted geometrical and numerical operators.

pub use self::normalize::{normalize_horizontal_or_random, normalize_or_random};
pub use self::outward_travel::outward_travel;
pub(crate) use self::wops::WSign;

mod normalize;
mod outward_travel;
mod wops;
