use crate::bricks::{
    Brick, BrickCoords, BrickFaceCovering, BrickFaceCoveringRetriever, BrickShape, BrickVolume,
};
use crate::math::{Real, Vector};
use crate::shape::CuboidFace;
use hashbrown::HashMap;

/// A sparse in-memory volume of bricks.
///
/// Cells without an entry are empty.
#[derive(Clone, Debug)]
pub struct BrickGrid {
    brick_size: Vector<Real>,
    bricks: HashMap<BrickCoords, Brick>,
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BrickGrid {
    /// An empty grid of unit cells.
    pub fn new() -> Self {
        Self::with_brick_size(Vector::repeat(1.0))
    }

    /// An empty grid with cells of the given size.
    pub fn with_brick_size(brick_size: Vector<Real>) -> Self {
        assert!(
            brick_size.iter().all(|s| *s > 0.0),
            "The size of the bricks must be positive."
        );
        BrickGrid {
            brick_size,
            bricks: HashMap::new(),
        }
    }

    /// Puts a brick at `coords`, returning the brick it replaces.
    ///
    /// Inserting an empty brick clears the cell.
    pub fn insert(&mut self, coords: BrickCoords, brick: impl Into<Brick>) -> Option<Brick> {
        let brick = brick.into();
        if brick.shape == BrickShape::Empty {
            self.bricks.remove(&coords)
        } else {
            self.bricks.insert(coords, brick)
        }
    }

    /// Clears the cell at `coords`, returning the brick it contained.
    pub fn remove(&mut self, coords: &BrickCoords) -> Option<Brick> {
        self.bricks.remove(coords)
    }

    /// The number of non-empty cells.
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    /// Is every cell of this grid empty?
    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Iterates over the non-empty cells, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&BrickCoords, &Brick)> {
        self.bricks.iter()
    }

    fn shape_at(&self, coords: &BrickCoords) -> BrickShape {
        self.bricks
            .get(coords)
            .map(|brick| brick.shape)
            .unwrap_or_default()
    }
}

impl BrickVolume for BrickGrid {
    #[inline]
    fn brick_size(&self) -> Vector<Real> {
        self.brick_size
    }

    #[inline]
    fn brick(&self, coords: &BrickCoords) -> Option<Brick> {
        self.bricks.get(coords).copied()
    }
}

impl BrickFaceCoveringRetriever for BrickGrid {
    fn brick_face_covering(&self, coords: &BrickCoords, face: CuboidFace) -> BrickFaceCovering {
        use BrickFaceCovering::*;

        // Faces against a full neighbour are hidden.
        if self.shape_at(&(coords + face.neighbour_offset())).is_cube() {
            return NotCovered;
        }

        match self.shape_at(coords) {
            BrickShape::Cube => FullyCovered,
            BrickShape::BottomSlab => match face {
                CuboidFace::Bottom => FullyCovered,
                CuboidFace::Top => NotCovered,
                _ => PartiallyCovered,
            },
            BrickShape::TopSlab => match face {
                CuboidFace::Top => FullyCovered,
                CuboidFace::Bottom => NotCovered,
                _ => PartiallyCovered,
            },
            BrickShape::Ramp(high) => {
                if face == CuboidFace::Bottom || face == high {
                    FullyCovered
                } else if face == CuboidFace::Top || face == high.opposite() {
                    NotCovered
                } else {
                    PartiallyCovered
                }
            }
            BrickShape::Empty | BrickShape::Complex => NotCovered,
        }
    }
}
