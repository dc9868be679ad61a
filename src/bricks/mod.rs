//! Static voxel ("brick") geometry and its collision with dynamic bodies.
//!
//! Bricks live on a regular grid. Each collidable brick is turned into an immovable cuboid
//! body and fed through the same check, separate and bounce routines as dynamic bodies, with
//! the face covering of the brick deciding the contacts near its edges.

pub use self::brick_collision::{bricks_overlapping, check_bricks, resolve_bricks};
pub use self::brick_coords::{BrickCoords, BrickRange};
pub use self::brick_face_covering::{
    BrickFaceCovering, BrickFaceCoveringRetriever, FaceCoveringQuery,
};
pub use self::brick_geometry::{Brick, BrickGeometry, BrickShape};
pub use self::brick_grid::BrickGrid;
pub use self::brick_volume::BrickVolume;

mod brick_collision;
mod brick_coords;
mod brick_face_covering;
mod brick_geometry;
mod brick_grid;
mod brick_volume;
