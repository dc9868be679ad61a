//! Face search shared by every round shape checked against a cuboid.
//!
//! Each face of the cuboid is tested independently by a [`CuboidCheckDelegate`] and the six
//! results are reduced into the face actually hit, if any.

use crate::bricks::{BrickFaceCovering, FaceCoveringQuery};
use crate::math::{Real, Vector};
use crate::query::{BodyPose, CollisionOptions, WhenEdge};
use crate::shape::CuboidFace;
use arrayvec::ArrayVec;

/// The outcome of testing a round shape against one face of a cuboid.
///
/// `gap` is the signed distance between the extremal point of the shape and the face plane,
/// along the outward face normal. It is negative for every hit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FaceTest {
    /// The face plane separates the shapes, or the closest point of the cuboid is out of reach.
    DecisiveMiss,
    /// This face cannot decide whether there is a hit.
    Unknown,
    /// The shape's centre projects inside the face.
    HitInsideFace,
    /// The shape overlaps an edge of the face while its centre projects outside of it.
    HitOutsideFace {
        /// The penetration along the face normal, negated.
        gap: Real,
    },
    /// Same as [`FaceTest::HitOutsideFace`] on a face fully covered by its brick.
    HitFullyCoveredFace {
        /// The penetration along the face normal, negated.
        gap: Real,
    },
    /// Same as [`FaceTest::HitOutsideFace`] on a face partially covered by its brick.
    HitPartiallyCoveredFace {
        /// The penetration along the face normal, negated.
        gap: Real,
    },
}

/// Geometric face tests of one round shape against a cuboid.
pub trait CuboidCheckDelegate {
    /// Tests the side face with the outward normal `(normal_x, normal_y, 0)`.
    ///
    /// Returns one of `DecisiveMiss`, `Unknown`, `HitInsideFace` or `HitOutsideFace`.
    fn check_side_face(&self, normal_x: Real, normal_y: Real) -> FaceTest;

    /// Tests the top (`normal_z > 0`) or bottom (`normal_z < 0`) face.
    ///
    /// Returns one of `DecisiveMiss`, `Unknown`, `HitInsideFace` or `HitOutsideFace`.
    fn check_top_bottom_face(&self, normal_z: Real) -> FaceTest;
}

/// The face of a cuboid hit by a round shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceHit {
    /// The face hit.
    pub face: CuboidFace,
    /// Whether the round shape's centre projects inside the face.
    pub inside: bool,
}

impl FaceHit {
    /// A hit with the centre projecting inside `face`.
    #[inline]
    pub fn inside(face: CuboidFace) -> Self {
        FaceHit { face, inside: true }
    }

    /// A hit near an edge of `face`.
    #[inline]
    pub fn outside(face: CuboidFace) -> Self {
        FaceHit {
            face,
            inside: false,
        }
    }
}

/// The position of a round shape relative to a cuboid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FaceFrame {
    /// The centre of the round shape minus the centre of the cuboid.
    pub centre: Vector<Real>,
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

impl FaceFrame {
    /// The frame of a round shape at `round` relative to a cuboid at `cuboid`.
    #[inline]
    pub fn new(round: &BodyPose, cuboid: &BodyPose, half_extents: Vector<Real>) -> Self {
        FaceFrame {
            centre: round.centre - cuboid.centre,
            half_extents,
        }
    }

    /// The signed distance from the shape's centre to the plane of `face`.
    #[inline]
    pub fn centre_to_plane(&self, face: CuboidFace) -> Real {
        face.sign() * self.centre[face.axis()] - self.half_extents[face.axis()]
    }

    /// Checks if the centre lies inside of the cuboid, boundary included.
    #[inline]
    pub fn centre_inside(&self) -> bool {
        self.centre
            .iter()
            .zip(self.half_extents.iter())
            .all(|(c, e)| c.abs() <= *e)
    }
}

/// Reduces the face tests of a round shape against a cuboid into the face hit.
pub struct CuboidCheckHelper<'a> {
    frame: FaceFrame,
    covering: Option<&'a FaceCoveringQuery<'a>>,
    when_edge: WhenEdge,
    previous_footprints_overlap: bool,
    relative_speed: Vector<Real>,
}

impl<'a> CuboidCheckHelper<'a> {
    /// Creates the helper for the round shape `round` with the horizontal half-extent
    /// `round_radius`, against the cuboid `cuboid`.
    pub fn new(
        frame: FaceFrame,
        round: &BodyPose,
        round_radius: Real,
        cuboid: &BodyPose,
        covering: Option<&'a FaceCoveringQuery<'a>>,
        options: &CollisionOptions,
    ) -> Self {
        let previous = round.previous_centre - cuboid.previous_centre;
        let previous_footprints_overlap = previous.x.abs() < frame.half_extents.x + round_radius
            && previous.y.abs() < frame.half_extents.y + round_radius;

        CuboidCheckHelper {
            frame,
            covering,
            when_edge: options.when_edge,
            previous_footprints_overlap,
            relative_speed: round.speed - cuboid.speed,
        }
    }

    /// Runs the six face tests of `delegate` and reduces them into the face hit.
    pub fn check(&self, delegate: &impl CuboidCheckDelegate) -> Option<FaceHit> {
        let mut tests = [(CuboidFace::East, FaceTest::Unknown); 6];

        for (test, face) in tests.iter_mut().zip(CuboidFace::ALL) {
            let raw = if face.is_side() {
                let normal = face.normal();
                delegate.check_side_face(normal.x, normal.y)
            } else {
                delegate.check_top_bottom_face(face.sign())
            };
            *test = (face, self.apply_covering(face, raw));
        }

        self.reduce(&tests)
    }

    fn apply_covering(&self, face: CuboidFace, test: FaceTest) -> FaceTest {
        let (FaceTest::HitOutsideFace { gap }, Some(covering)) = (test, self.covering) else {
            return test;
        };

        match covering.covering(face) {
            BrickFaceCovering::FullyCovered => FaceTest::HitFullyCoveredFace { gap },
            BrickFaceCovering::PartiallyCovered => FaceTest::HitPartiallyCoveredFace { gap },
            BrickFaceCovering::NotCovered => {
                log::debug!(
                    "Edge contact with the {face:?} face of the brick {} rejected: face not covered.",
                    covering.coords
                );
                FaceTest::Unknown
            }
        }
    }

    /// Reduces the tests, ordered with the side faces first, into the face hit.
    ///
    /// Edge hits on plain and covered faces alike are ranked by the [`WhenEdge`] policy. The
    /// covering only breaks the remaining ties, a partially covered face winning over a fully
    /// covered one.
    pub fn reduce(&self, tests: &[(CuboidFace, FaceTest)]) -> Option<FaceHit> {
        let mut inside = None;
        let mut edges = ArrayVec::<EdgeCandidate, 6>::new();

        for (face, test) in tests.iter().copied() {
            let (gap, fallback_rank) = match test {
                FaceTest::DecisiveMiss => return None,
                FaceTest::Unknown => continue,
                FaceTest::HitInsideFace => {
                    if inside.is_none() {
                        inside = Some(face);
                    }
                    continue;
                }
                FaceTest::HitOutsideFace { gap } | FaceTest::HitPartiallyCoveredFace { gap } => {
                    (gap, 1)
                }
                FaceTest::HitFullyCoveredFace { gap } => (gap, 0),
            };
            edges.push(EdgeCandidate {
                face,
                gap,
                fallback_rank,
            });
        }

        if let Some(face) = inside {
            return Some(FaceHit::inside(face));
        }

        if let Some(face) = self.select_edge_face(&edges) {
            return Some(FaceHit::outside(face));
        }

        if self.frame.centre_inside() {
            // Deep penetration: leave through the face with the least penetration.
            return CuboidFace::ALL
                .into_iter()
                .max_by(|a, b| {
                    let gap_a = self.frame.centre_to_plane(*a);
                    let gap_b = self.frame.centre_to_plane(*b);
                    gap_a.total_cmp(&gap_b)
                })
                .map(FaceHit::inside);
        }

        None
    }

    fn select_edge_face(&self, candidates: &[EdgeCandidate]) -> Option<CuboidFace> {
        if candidates.len() <= 1 {
            return candidates.first().map(|c| c.face);
        }

        if self.when_edge == WhenEdge::PreferTopBottomFace && self.previous_footprints_overlap {
            if let Some(c) = candidates.iter().find(|c| !c.face.is_side()) {
                return Some(c.face);
            }
        }

        self.most_recently_crossed(candidates)
            .or_else(|| best_fallback(candidates))
    }

    fn most_recently_crossed(&self, candidates: &[EdgeCandidate]) -> Option<CuboidFace> {
        let mut best: Option<(CuboidFace, Real)> = None;

        for c in candidates {
            let approach = -self.relative_speed.dot(&c.face.normal());
            if approach <= 0.0 {
                continue;
            }

            let elapsed = -c.gap / approach;
            if best.map_or(true, |(_, t)| elapsed < t) {
                best = Some((c.face, elapsed));
            }
        }

        best.map(|(face, _)| face)
    }
}

/// A face hit near one of its edges.
#[derive(Copy, Clone, Debug)]
struct EdgeCandidate {
    face: CuboidFace,
    gap: Real,
    // Fully covered faces rank below plain and partially covered ones.
    fallback_rank: u8,
}

fn best_fallback(candidates: &[EdgeCandidate]) -> Option<CuboidFace> {
    candidates
        .iter()
        .max_by(|a, b| {
            a.fallback_rank
                .cmp(&b.fallback_rank)
                .then(a.gap.total_cmp(&b.gap))
        })
        .map(|c| c.face)
}
