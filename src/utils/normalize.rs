use crate::math::{Point, Real, UnitVector, Vector};
use core::cmp::Ordering;

/// Normalizes `v`, the vector going from `from` to `to`.
///
/// If `v` is too small to be normalized (both points coincide), a pseudo-random direction
/// seeded by the two points is returned instead and a warning is logged. Swapping `from` and
/// `to` (and negating `v`) yields exactly the opposite direction.
pub fn normalize_or_random(
    v: &Vector<Real>,
    from: &Point<Real>,
    to: &Point<Real>,
) -> UnitVector<Real> {
    UnitVector::try_new(*v, Real::EPSILON).unwrap_or_else(|| {
        log::warn!(
            "Cannot normalize the direction from {from} to {to}: falling back to a pseudo-random direction."
        );
        random_direction(from, to, false)
    })
}

/// Normalizes the horizontal part of `v`, the vector going from `from` to `to`.
///
/// The returned direction always has a zero `z` component. Degenerate inputs fall back to a
/// pseudo-random horizontal direction, like [`normalize_or_random`].
pub fn normalize_horizontal_or_random(
    v: &Vector<Real>,
    from: &Point<Real>,
    to: &Point<Real>,
) -> UnitVector<Real> {
    UnitVector::try_new(Vector::new(v.x, v.y, 0.0), Real::EPSILON).unwrap_or_else(|| {
        log::warn!(
            "Cannot normalize the horizontal direction from {from} to {to}: falling back to a pseudo-random direction."
        );
        random_direction(from, to, true)
    })
}

fn random_direction(from: &Point<Real>, to: &Point<Real>, horizontal: bool) -> UnitVector<Real> {
    // Seed from the unordered pair so that both points of view agree up to the sign.
    let (first, second, sign) = match lexicographic_cmp(from, to) {
        Ordering::Greater => (to, from, -1.0),
        _ => (from, to, 1.0),
    };

    let mut seed = 0x9e37_79b9_7f4a_7c15u64;
    for c in first.iter().chain(second.iter()) {
        seed = seed.rotate_left(17) ^ (c.to_bits() as u64);
    }

    let mut rng = oorandom::Rand32::new(seed);
    let angle = rng.rand_float() as Real * core::f64::consts::TAU as Real;
    let z = if horizontal {
        0.0
    } else {
        rng.rand_float() as Real * 2.0 - 1.0
    };
    let planar = (1.0 - z * z).max(0.0).sqrt();
    let dir = Vector::new(planar * angle.cos(), planar * angle.sin(), z) * sign;

    UnitVector::try_new(dir, Real::EPSILON)
        .unwrap_or_else(|| UnitVector::new_unchecked(Vector::x() * sign))
}

fn lexicographic_cmp(a: &Point<Real>, b: &Point<Real>) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| x.partial_cmp(y).unwrap_or(Ordering::Equal))
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}
