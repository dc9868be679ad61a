use crate::bricks::{Brick, BrickCoords};
use crate::math::{Point, Real, Vector};

/// A volume of bricks aligned on a regular grid.
pub trait BrickVolume {
    /// The size of every cell of the grid.
    fn brick_size(&self) -> Vector<Real>;

    /// The brick at `coords`, or `None` if that cell is empty.
    fn brick(&self, coords: &BrickCoords) -> Option<Brick>;

    /// The world-space corner of the cell `coords` with the smallest coordinates.
    fn cell_origin(&self, coords: &BrickCoords) -> Point<Real> {
        let size = self.brick_size();
        Point::new(
            coords.x as Real * size.x,
            coords.y as Real * size.y,
            coords.z as Real * size.z,
        )
    }
}
