use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::bricks::{
    BrickCoords, BrickFaceCoveringRetriever, BrickGeometry, BrickRange, BrickVolume,
    FaceCoveringQuery,
};
use crate::dynamics::RigidBody;
use crate::math::{Real, Vector};
use crate::query::{check_with_covering, CollisionError, CollisionOptions, HitResult};
use crate::response::{bounce, separate};

/// The cells overlapped by `body` at its tentative position.
pub fn bricks_overlapping(body: &RigidBody, brick_size: &Vector<Real>) -> BrickRange {
    Aabb::from_body_extent(&body.shape, &body.next_pos).brick_range(brick_size)
}

/// The immovable body standing for the brick at `coords`, if that brick is collidable.
fn brick_body<V: BrickVolume + ?Sized>(volume: &V, coords: &BrickCoords) -> Option<RigidBody> {
    let brick = volume.brick(coords)?;
    let geometry = BrickGeometry::determine(
        brick.shape,
        &volume.cell_origin(coords),
        &volume.brick_size(),
    );
    let body = geometry.to_body(brick.material);

    if body.is_none() {
        log::debug!(
            "Skipping brick {coords} of shape {:?}: no collision geometry.",
            brick.shape
        );
    }

    body
}

/// Can the bounding boxes of `body`, at its tentative position, and of `brick` touch?
fn may_touch(body: &RigidBody, brick: &RigidBody) -> bool {
    let body_aabb = Aabb::from_body_extent(&body.shape, &body.next_pos);
    body_aabb.intersects(&Aabb::from_body_extent(&brick.shape, &brick.next_pos))
}

/// Checks `body`, at its tentative position, against every brick of `volume` it may overlap.
///
/// `on_hit` is called with the coordinates of every brick hit and the corresponding hit, the
/// brick being the second body. Returns the number of bricks hit.
pub fn check_bricks<V: BrickVolume + ?Sized>(
    body: &RigidBody,
    volume: &V,
    covering: &dyn BrickFaceCoveringRetriever,
    options: &CollisionOptions,
    mut on_hit: impl FnMut(BrickCoords, &HitResult),
) -> Result<usize, CollisionError> {
    let mut hits = 0;

    for coords in bricks_overlapping(body, &volume.brick_size()).iter() {
        let Some(brick) = brick_body(volume, &coords).filter(|b| may_touch(body, b)) else {
            continue;
        };
        let query = FaceCoveringQuery::new(covering, coords);

        if let Some(hit) =
            check_with_covering(body, &body.next_pos, &brick, &brick.next_pos, &query, options)?
        {
            on_hit(coords, &hit);
            hits += 1;
        }
    }

    Ok(hits)
}

/// Resolves every contact between `body` and the bricks of `volume`.
///
/// The candidate cells are visited in ascending `(z, y, x)` order. Each one is checked against
/// the tentative position left by the previous contacts, then separated and bounced. Returns
/// the number of contacts resolved.
pub fn resolve_bricks<V: BrickVolume + ?Sized>(
    body: &mut RigidBody,
    volume: &V,
    covering: &dyn BrickFaceCoveringRetriever,
    options: &CollisionOptions,
) -> Result<usize, CollisionError> {
    let mut resolved = 0;

    for coords in bricks_overlapping(body, &volume.brick_size()).iter() {
        let Some(mut brick) = brick_body(volume, &coords).filter(|b| may_touch(body, b)) else {
            continue;
        };
        let query = FaceCoveringQuery::new(covering, coords);
        let Some(hit) =
            check_with_covering(body, &body.next_pos, &brick, &brick.next_pos, &query, options)?
        else {
            continue;
        };

        separate(body, &mut brick, &hit, options)?;
        bounce(body, &mut brick, &hit, options)?;
        resolved += 1;

        log::trace!(
            "Resolved contact with brick {coords} on {:?}: position {}, speed {:?}.",
            hit.area2,
            body.next_pos,
            body.next_speed.as_slice(),
        );
    }

    Ok(resolved)
}
