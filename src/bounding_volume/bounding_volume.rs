/// Trait of bounding volumes.
///
/// Bounding volumes are coarse approximations of shapes. The brick adapters use them to skip
/// the cells whose collision geometry cannot touch a body before running the exact tests.
pub trait BoundingVolume {
    /// Checks if this bounding volume intersects with another one.
    fn intersects(&self, _: &Self) -> bool;
}
