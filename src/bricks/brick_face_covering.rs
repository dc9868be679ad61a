use crate::bricks::BrickCoords;
use crate::shape::CuboidFace;

/// How much of a face of a brick's bounding cuboid is occupied by the brick's actual geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BrickFaceCovering {
    /// The face is not part of the brick's surface, or is hidden by a neighbour.
    NotCovered,
    /// Only part of the face is part of the brick's surface.
    PartiallyCovered,
    /// The whole face is part of the brick's surface.
    FullyCovered,
}

/// Gives the covering of the faces of the bricks of a volume.
pub trait BrickFaceCoveringRetriever {
    /// The covering of `face` of the brick at `coords`.
    fn brick_face_covering(&self, coords: &BrickCoords, face: CuboidFace) -> BrickFaceCovering;
}

/// A face-covering retriever bound to the brick cell being tested.
///
/// Passed to the narrow phase when one of the two bodies is a brick so that contacts near the
/// edges of its cuboid can be accepted or rejected.
#[derive(Copy, Clone)]
pub struct FaceCoveringQuery<'a> {
    /// The retriever to query.
    pub retriever: &'a dyn BrickFaceCoveringRetriever,
    /// The coordinates of the brick being tested.
    pub coords: BrickCoords,
}

impl<'a> FaceCoveringQuery<'a> {
    /// Creates a new query for the brick at `coords`.
    #[inline]
    pub fn new(retriever: &'a dyn BrickFaceCoveringRetriever, coords: BrickCoords) -> Self {
        FaceCoveringQuery { retriever, coords }
    }

    /// The covering of `face` of the brick.
    #[inline]
    pub fn covering(&self, face: CuboidFace) -> BrickFaceCovering {
        self.retriever.brick_face_covering(&self.coords, face)
    }
}

impl core::fmt::Debug for FaceCoveringQuery<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FaceCoveringQuery")
            .field("coords", &self.coords)
            .finish_non_exhaustive()
    }
}
