use crate::dynamics::RigidBody;
use crate::math::{Point, Real, Vector};

/// The kinematic state of a body as seen by the narrow phase.
///
/// The centre is the position being tested, usually the tentative position of the body. The
/// previous centre and the speed are only used to break ties between the faces of a cuboid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyPose {
    /// The centre of the body being tested.
    pub centre: Point<Real>,
    /// The committed centre of the body at the end of the previous step.
    pub previous_centre: Point<Real>,
    /// The tentative velocity of the body.
    pub speed: Vector<Real>,
}

impl BodyPose {
    /// The pose of `body` tested at `centre`.
    #[inline]
    pub fn new(body: &RigidBody, centre: Point<Real>) -> Self {
        BodyPose {
            centre,
            previous_centre: body.pos,
            speed: body.next_speed,
        }
    }

    /// The pose of a body resting at `centre` since the previous step.
    #[inline]
    pub fn at_rest(centre: Point<Real>) -> Self {
        BodyPose {
            centre,
            previous_centre: centre,
            speed: Vector::zeros(),
        }
    }
}
