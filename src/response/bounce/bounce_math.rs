use crate::dynamics::RigidBody;
use crate::math::Real;
use crate::query::CollisionOptions;
use crate::response::ContactNormal;

/// The share of a velocity change taken by each body.
fn mass_weights(body1: &RigidBody, body2: &RigidBody) -> (Real, Real) {
    match (body1.is_immovable(), body2.is_immovable()) {
        (true, _) => (0.0, 1.0),
        (_, true) => (1.0, 0.0),
        _ => {
            let total = body1.mass + body2.mass;
            (body2.mass / total, body1.mass / total)
        }
    }
}

/// Applies friction then bounce to the tentative velocities of two bodies touching along
/// `normal` (pointing from body 1 toward body 2).
///
/// Bodies moving apart are left untouched. An approach slower than
/// [`CollisionOptions::hopping_threshold`] is resolved as a resting contact: the relative
/// normal speed becomes exactly zero.
///
/// Friction reduces the tangential slip by the combined friction times the normal velocity
/// change. Resting contacts carry almost no normal change, so their slip is also reduced by
/// the combined friction times the slip itself, letting bodies sliding against each other
/// come to rest.
pub fn friction_then_bounce(
    body1: &mut RigidBody,
    body2: &mut RigidBody,
    normal: &ContactNormal,
    options: &CollisionOptions,
) {
    let immovable1 = body1.is_immovable();
    let immovable2 = body2.is_immovable();
    if immovable1 && immovable2 {
        return;
    }

    let v1n = normal.normal_speed(&body1.next_speed);
    let v2n = normal.normal_speed(&body2.next_speed);
    let approach = v1n - v2n;
    if approach < 0.0 {
        return;
    }

    let resting = approach <= options.hopping_threshold();
    let e = body1.elasticity * body2.elasticity;
    let mu = body1.friction * body2.friction;
    let impulse = if resting { approach } else { (1.0 + e) * approach };
    let (w1, w2) = mass_weights(body1, body2);

    // Friction.
    let mut vt1 = normal.tangential(&body1.next_speed);
    let mut vt2 = normal.tangential(&body2.next_speed);
    let slip = vt1 - vt2;
    let slip_norm = slip.norm();

    if slip_norm > 0.0 {
        let drag = if resting { slip_norm } else { 0.0 };
        let reduced = (slip_norm - mu * (impulse + drag)).max(0.0);
        let change = slip * ((reduced - slip_norm) / slip_norm);
        vt1 += change * w1;
        vt2 -= change * w2;
    }

    // Bounce.
    let (m1, m2) = (body1.mass, body2.mass);
    let (new_v1n, new_v2n) = match (immovable1, immovable2) {
        (true, _) if resting => (v1n, v1n),
        (_, true) if resting => (v2n, v2n),
        _ if resting => {
            let common = (m1 * v1n + m2 * v2n) / (m1 + m2);
            (common, common)
        }
        (true, _) => (v1n, v1n + e * (v1n - v2n)),
        (_, true) => (v2n + e * (v2n - v1n), v2n),
        _ => {
            let momentum = m1 * v1n + m2 * v2n;
            (
                (momentum + m2 * e * (v2n - v1n)) / (m1 + m2),
                (momentum + m1 * e * (v1n - v2n)) / (m1 + m2),
            )
        }
    };

    if !immovable1 {
        body1.next_speed = normal.compose(&vt1, new_v1n);
    }
    if !immovable2 {
        body2.next_speed = normal.compose(&vt2, new_v2n);
    }
}
