use crate::math::{Point, Real, Vector, LARGE_MASS};
use crate::shape::{BodyShape, ShapeKind};

/// The physical material of a rigid body or of a brick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BodyMaterial {
    /// The friction coefficient, in `[0, 1]`.
    pub friction: Real,
    /// The restitution coefficient, in `[0, 1]`.
    pub elasticity: Real,
}

impl BodyMaterial {
    /// Creates a new material.
    pub fn new(friction: Real, elasticity: Real) -> Self {
        assert!(
            (0.0..=1.0).contains(&friction) && (0.0..=1.0).contains(&elasticity),
            "Friction and elasticity must lie in [0, 1]."
        );
        Self {
            friction,
            elasticity,
        }
    }
}

impl Default for BodyMaterial {
    fn default() -> Self {
        Self {
            friction: 0.5,
            elasticity: 0.0,
        }
    }
}

/// A physically simulated shape.
///
/// `pos` and `speed` hold the state committed by the previous step and are never written by the
/// collision routines. `next_pos` and `next_speed` hold the tentative state of the step being
/// resolved; separation and bounce update them in place.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RigidBody {
    /// The geometry of this body, centred at its position.
    pub shape: BodyShape,
    /// The committed position of the centre of this body.
    pub pos: Point<Real>,
    /// The committed velocity of this body.
    pub speed: Vector<Real>,
    /// The tentative position of the centre of this body.
    pub next_pos: Point<Real>,
    /// The tentative velocity of this body.
    pub next_speed: Vector<Real>,
    /// The mass of this body. Any value `>= LARGE_MASS` makes it immovable.
    pub mass: Real,
    /// The friction coefficient, in `[0, 1]`.
    pub friction: Real,
    /// The restitution coefficient, in `[0, 1]`.
    pub elasticity: Real,
}

impl RigidBody {
    /// Creates a body at rest at `pos` with a unit mass and the default material.
    pub fn new(shape: impl Into<BodyShape>, pos: Point<Real>) -> Self {
        let material = BodyMaterial::default();
        Self {
            shape: shape.into(),
            pos,
            speed: Vector::zeros(),
            next_pos: pos,
            next_speed: Vector::zeros(),
            mass: 1.0,
            friction: material.friction,
            elasticity: material.elasticity,
        }
    }

    /// Creates an immovable body at `pos`.
    pub fn new_immovable(shape: impl Into<BodyShape>, pos: Point<Real>) -> Self {
        Self::new(shape, pos).with_mass(LARGE_MASS)
    }

    /// Sets the mass of this body.
    #[must_use]
    pub fn with_mass(mut self, mass: Real) -> Self {
        assert!(mass > 0.0, "A rigid body must have a positive mass.");
        self.mass = mass;
        self
    }

    /// Sets both the committed and the tentative velocity of this body.
    #[must_use]
    pub fn with_speed(mut self, speed: Vector<Real>) -> Self {
        self.speed = speed;
        self.next_speed = speed;
        self
    }

    /// Sets the tentative position of this body, keeping its committed position.
    #[must_use]
    pub fn with_next_pos(mut self, next_pos: Point<Real>) -> Self {
        self.next_pos = next_pos;
        self
    }

    /// Sets the friction and elasticity of this body.
    #[must_use]
    pub fn with_material(mut self, material: BodyMaterial) -> Self {
        self.friction = material.friction;
        self.elasticity = material.elasticity;
        self
    }

    /// The friction and elasticity of this body.
    #[inline]
    pub fn material(&self) -> BodyMaterial {
        BodyMaterial {
            friction: self.friction,
            elasticity: self.elasticity,
        }
    }

    /// The kind of this body's shape.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// Is this body immovable, i.e., is its mass at least `LARGE_MASS`?
    #[inline]
    pub fn is_immovable(&self) -> bool {
        self.mass >= LARGE_MASS
    }

    /// Commits the tentative state of this body.
    ///
    /// This is the integrator's job; it is exposed for hosts and tests driving a step by hand.
    pub fn commit(&mut self) {
        self.pos = self.next_pos;
        self.speed = self.next_speed;
    }
}
