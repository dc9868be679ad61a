use crate::math::{
    Real, DEFAULT_EPSILON, DEFAULT_GRAVITY, DEFAULT_TIME_STEP, DEFAULT_TINY_GAP,
};

/// How to pick the face of a cuboid hit near one of its edges or corners.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum WhenEdge {
    /// Prefer the top or bottom face if the two bodies already overlapped horizontally at the
    /// previous step. A body that was already above or below the cuboid can only have reached
    /// it through that face. Otherwise the speeds are inspected.
    #[default]
    PreferTopBottomFace,
    /// Pick the face most recently crossed given the relative speed of the two bodies.
    InspectSpeeds,
}

/// Tolerances and physical constants used by the collision routines.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionOptions {
    /// The gap left between two bodies after their separation.
    pub tiny_gap: Real,
    /// Tolerance for geometric and speed comparisons.
    pub epsilon: Real,
    /// The magnitude of the gravity, acting along `-z`.
    pub gravity: Real,
    /// The duration of one simulation step.
    pub time_step: Real,
    /// The strategy used to resolve contacts near the edges of a cuboid.
    pub when_edge: WhenEdge,
}

impl Default for CollisionOptions {
    fn default() -> Self {
        CollisionOptions {
            tiny_gap: DEFAULT_TINY_GAP,
            epsilon: DEFAULT_EPSILON,
            gravity: DEFAULT_GRAVITY,
            time_step: DEFAULT_TIME_STEP,
            when_edge: WhenEdge::default(),
        }
    }
}

impl CollisionOptions {
    /// Sets the edge resolution strategy.
    #[must_use]
    pub fn with_when_edge(mut self, when_edge: WhenEdge) -> Self {
        self.when_edge = when_edge;
        self
    }

    /// Sets the duration of one simulation step.
    #[must_use]
    pub fn with_time_step(mut self, time_step: Real) -> Self {
        self.time_step = time_step;
        self
    }

    /// The largest approach speed treated as resting contact.
    ///
    /// A body resting on a support gains `gravity * time_step` of downward speed every step.
    /// Bouncing it back at that speed makes it hop, so approaches below this threshold are
    /// resolved as inelastic.
    #[inline]
    pub fn hopping_threshold(&self) -> Real {
        self.gravity * self.time_step + self.epsilon
    }
}
