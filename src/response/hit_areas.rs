//! Validation of the hit areas received by the response routines.

use crate::query::{CollisionError, HitArea, HitResult};
use crate::shape::CuboidFace;

#[inline]
pub(crate) fn is_sphere_area(area: HitArea) -> bool {
    area == HitArea::Unspecified
}

#[inline]
pub(crate) fn is_cylinder_area(area: HitArea) -> bool {
    matches!(area, HitArea::TopFace | HitArea::BottomFace | HitArea::Side)
}

#[inline]
pub(crate) fn is_capsule_area(area: HitArea) -> bool {
    area == HitArea::Side || area.is_capsule_cap()
}

/// Can a capsule touch `face` of a cuboid with `area`?
pub(crate) fn is_capsule_area_against(area: HitArea, face: CuboidFace) -> bool {
    match face {
        CuboidFace::Top => matches!(area, HitArea::BottomTip | HitArea::BottomSphere),
        CuboidFace::Bottom => matches!(area, HitArea::TopTip | HitArea::TopSphere),
        _ => matches!(
            area,
            HitArea::Side | HitArea::TopSphere | HitArea::BottomSphere
        ),
    }
}

/// Can a cylinder touch `face` of a cuboid with `area`?
pub(crate) fn is_cylinder_area_against(area: HitArea, face: CuboidFace) -> bool {
    match face {
        CuboidFace::Top => area == HitArea::BottomFace,
        CuboidFace::Bottom => area == HitArea::TopFace,
        _ => area == HitArea::Side,
    }
}

/// Fails with [`CollisionError::UnexpectedHitArea`] unless `valid` holds for the areas of `hit`.
pub(crate) fn expect_areas(
    routine: &'static str,
    hit: &HitResult,
    valid: impl FnOnce(HitArea, HitArea) -> bool,
) -> Result<(), CollisionError> {
    if valid(hit.area1, hit.area2) {
        Ok(())
    } else {
        Err(CollisionError::UnexpectedHitArea {
            routine,
            area1: hit.area1,
            area2: hit.area2,
        })
    }
}

/// The face of the cuboid body 2 in `hit`, once the area of the round body 1 is validated.
pub(crate) fn expect_cuboid_face(
    routine: &'static str,
    hit: &HitResult,
    valid_round_area: impl FnOnce(HitArea, CuboidFace) -> bool,
) -> Result<CuboidFace, CollisionError> {
    match hit.area2.as_cuboid_face() {
        Some(face) if valid_round_area(hit.area1, face) => Ok(face),
        _ => Err(CollisionError::UnexpectedHitArea {
            routine,
            area1: hit.area1,
            area2: hit.area2,
        }),
    }
}
