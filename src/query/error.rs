use crate::query::HitArea;
use crate::shape::ShapeKind;

/// Errors raised by the collision routines.
///
/// Both variants signal a programming error on the caller's side or an inconsistency between
/// the check and response routines. They are never caused by the geometric configuration alone.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollisionError {
    /// No collision routine exists for this pair of shapes.
    ///
    /// This is the case for two cuboids.
    #[error("collisions between a {kind1:?} and a {kind2:?} are not supported")]
    UnsupportedPair {
        /// The kind of the first body.
        kind1: ShapeKind,
        /// The kind of the second body.
        kind2: ShapeKind,
    },

    /// A response routine received a hit area it cannot handle.
    ///
    /// This means the hit passed to separation or bounce was not produced by the check routine
    /// of the same pair, in the same order.
    #[error("{routine}: unexpected hit areas {area1:?} and {area2:?}")]
    UnexpectedHitArea {
        /// The name of the routine that rejected the hit.
        routine: &'static str,
        /// The area reported for the first body.
        area1: HitArea,
        /// The area reported for the second body.
        area2: HitArea,
    },
}
