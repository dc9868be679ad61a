use na::Point3;

/// The integer coordinates of a brick cell.
///
/// The cell `c` spans `[c * brick_size, (c + 1) * brick_size]` in world-space.
pub type BrickCoords = Point3<i32>;

/// An inclusive range of brick cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BrickRange {
    /// The cell with the smallest coordinates.
    pub mins: BrickCoords,
    /// The cell with the largest coordinates.
    pub maxs: BrickCoords,
}

impl BrickRange {
    /// Creates a new range. It is empty if any component of `maxs` is smaller than `mins`.
    #[inline]
    pub fn new(mins: BrickCoords, maxs: BrickCoords) -> Self {
        BrickRange { mins, maxs }
    }

    /// Does this range contain no cell?
    #[inline]
    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.maxs[i] < self.mins[i])
    }

    /// The number of cells in this range.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }

        (0..3)
            .map(|i| (self.maxs[i] - self.mins[i] + 1) as usize)
            .product()
    }

    /// Does this range contain the cell `coords`?
    #[inline]
    pub fn contains(&self, coords: &BrickCoords) -> bool {
        (0..3).all(|i| coords[i] >= self.mins[i] && coords[i] <= self.maxs[i])
    }

    /// Iterates over the cells of this range with `x` varying fastest, then `y`, then `z`.
    pub fn iter(&self) -> impl Iterator<Item = BrickCoords> {
        let BrickRange { mins, maxs } = *self;
        (mins.z..=maxs.z).flat_map(move |z| {
            (mins.y..=maxs.y)
                .flat_map(move |y| (mins.x..=maxs.x).map(move |x| BrickCoords::new(x, y, z)))
        })
    }
}
