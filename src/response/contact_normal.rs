use crate::math::{Real, UnitVector, Vector};

/// A contact normal, specialised for the axis-aligned cases.
///
/// Most contacts against cuboids and between vertical shapes have a vertical or horizontal
/// normal. Those cases skip the components known to be zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ContactNormal {
    /// The normal is `(0, 0, sign)`.
    Vertical(Real),
    /// The normal has a zero `z` component.
    Horizontal(UnitVector<Real>),
    /// Any other normal.
    Generic(UnitVector<Real>),
}

impl ContactNormal {
    /// Selects the specialisation matching `normal`.
    pub fn classify(normal: &UnitVector<Real>) -> Self {
        if normal.x == 0.0 && normal.y == 0.0 {
            ContactNormal::Vertical(normal.z.signum())
        } else if normal.z == 0.0 {
            ContactNormal::Horizontal(*normal)
        } else {
            ContactNormal::Generic(*normal)
        }
    }

    /// The component of `v` along this normal.
    #[inline]
    pub fn normal_speed(&self, v: &Vector<Real>) -> Real {
        match self {
            ContactNormal::Vertical(sign) => sign * v.z,
            ContactNormal::Horizontal(n) => n.x * v.x + n.y * v.y,
            ContactNormal::Generic(n) => n.dot(v),
        }
    }

    /// The part of `v` orthogonal to this normal.
    #[inline]
    pub fn tangential(&self, v: &Vector<Real>) -> Vector<Real> {
        match self {
            ContactNormal::Vertical(_) => Vector::new(v.x, v.y, 0.0),
            ContactNormal::Horizontal(n) | ContactNormal::Generic(n) => {
                v - n.into_inner() * self.normal_speed(v)
            }
        }
    }

    /// The vector with the tangential part `tangential` and the normal component `normal_speed`.
    #[inline]
    pub fn compose(&self, tangential: &Vector<Real>, normal_speed: Real) -> Vector<Real> {
        match self {
            ContactNormal::Vertical(sign) => {
                Vector::new(tangential.x, tangential.y, sign * normal_speed)
            }
            ContactNormal::Horizontal(n) | ContactNormal::Generic(n) => {
                tangential + n.into_inner() * normal_speed
            }
        }
    }
}
