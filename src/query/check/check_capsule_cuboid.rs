use crate::bricks::FaceCoveringQuery;
use crate::math::{Real, Vector};
use crate::query::check::round_cuboid_hit;
use crate::query::cuboid_check_helper::{
    CuboidCheckDelegate, CuboidCheckHelper, FaceFrame, FaceHit, FaceTest,
};
use crate::query::{BodyPose, CollisionOptions, HitArea, HitResult};
use crate::shape::{Capsule, Cuboid, CuboidFace};

struct CapsuleFaces<'a> {
    capsule: &'a Capsule,
    cuboid: &'a Cuboid,
    frame: FaceFrame,
}

impl CapsuleFaces<'_> {
    /// The point of the middle segment closest to `point`, both relative to the cuboid.
    fn segment_point(&self, point: &Vector<Real>) -> Vector<Real> {
        let d = self.frame.centre;
        let s = self.capsule.segment_half_height();
        Vector::new(d.x, d.y, point.z.clamp(d.z - s, d.z + s))
    }

    fn check_face(&self, face: CuboidFace) -> FaceTest {
        let d = self.frame.centre;
        let to_plane = self.frame.centre_to_plane(face);
        let reach = if face.is_side() {
            self.capsule.radius
        } else {
            self.capsule.half_height()
        };
        let gap = to_plane - reach;

        if gap >= 0.0 {
            return FaceTest::DecisiveMiss;
        }

        if to_plane < 0.0 {
            return FaceTest::Unknown;
        }

        if self.cuboid.face_contains_projection(&d, face) {
            return FaceTest::HitInsideFace;
        }

        let closest = self.cuboid.clamp_to_face(&d, face);
        let radius = self.capsule.radius;
        if (self.segment_point(&closest) - closest).norm_squared() < radius * radius {
            FaceTest::HitOutsideFace { gap }
        } else {
            FaceTest::DecisiveMiss
        }
    }

    fn area(&self, hit: &FaceHit) -> HitArea {
        match hit.face {
            CuboidFace::Top if hit.inside => HitArea::BottomTip,
            CuboidFace::Top => HitArea::BottomSphere,
            CuboidFace::Bottom if hit.inside => HitArea::TopTip,
            CuboidFace::Bottom => HitArea::TopSphere,
            face => {
                let closest = self.cuboid.clamp_to_face(&self.frame.centre, face);
                let s = self.capsule.segment_half_height();
                if closest.z > self.frame.centre.z + s {
                    HitArea::TopSphere
                } else if closest.z < self.frame.centre.z - s {
                    HitArea::BottomSphere
                } else {
                    HitArea::Side
                }
            }
        }
    }
}

impl CuboidCheckDelegate for CapsuleFaces<'_> {
    fn check_side_face(&self, normal_x: Real, normal_y: Real) -> FaceTest {
        CuboidFace::from_side_normal(normal_x, normal_y)
            .map_or(FaceTest::Unknown, |face| self.check_face(face))
    }

    fn check_top_bottom_face(&self, normal_z: Real) -> FaceTest {
        CuboidFace::from_vertical_normal(normal_z)
            .map_or(FaceTest::Unknown, |face| self.check_face(face))
    }
}

/// Checks if a capsule and a cuboid overlap.
///
/// Side faces touched by the cylindrical middle report the `Side` area, those touched by a
/// cap report `TopSphere` or `BottomSphere`. Top and bottom faces report a tip when the
/// capsule's axis projects inside the face.
pub fn check_capsule_cuboid(
    pose1: &BodyPose,
    capsule1: &Capsule,
    pose2: &BodyPose,
    cuboid2: &Cuboid,
    covering: Option<&FaceCoveringQuery<'_>>,
    options: &CollisionOptions,
) -> Option<HitResult> {
    let frame = FaceFrame::new(pose1, pose2, cuboid2.half_extents);
    let d = frame.centre;
    let e = frame.half_extents;

    if d.z.abs() >= e.z + capsule1.half_height() {
        return None;
    }

    let delegate = CapsuleFaces {
        capsule: capsule1,
        cuboid: cuboid2,
        frame,
    };

    let radius = capsule1.radius;
    let hit = if d.x.abs() + radius <= e.x && d.y.abs() + radius <= e.y {
        FaceHit::inside(if d.z >= 0.0 {
            CuboidFace::Top
        } else {
            CuboidFace::Bottom
        })
    } else {
        CuboidCheckHelper::new(frame, pose1, radius, pose2, covering, options).check(&delegate)?
    };

    let contact = cuboid2.clamp_to_face(&d, hit.face);
    Some(round_cuboid_hit(
        pose2,
        hit.face,
        contact,
        delegate.area(&hit),
    ))
}
