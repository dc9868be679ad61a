use crate::bricks::FaceCoveringQuery;
use crate::math::{Real, Vector};
use crate::query::check::round_cuboid_hit;
use crate::query::cuboid_check_helper::{
    CuboidCheckDelegate, CuboidCheckHelper, FaceFrame, FaceTest,
};
use crate::query::{BodyPose, CollisionOptions, HitArea, HitResult};
use crate::shape::{Cuboid, CuboidFace, Sphere};

struct SphereFaces<'a> {
    radius: Real,
    cuboid: &'a Cuboid,
    frame: FaceFrame,
}

impl SphereFaces<'_> {
    fn check_face(&self, face: CuboidFace) -> FaceTest {
        let d = self.frame.centre;
        let to_plane = self.frame.centre_to_plane(face);
        let gap = to_plane - self.radius;

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
        if (d - closest).norm_squared() < self.radius * self.radius {
            FaceTest::HitOutsideFace { gap }
        } else {
            FaceTest::DecisiveMiss
        }
    }
}

impl CuboidCheckDelegate for SphereFaces<'_> {
    fn check_side_face(&self, normal_x: Real, normal_y: Real) -> FaceTest {
        CuboidFace::from_side_normal(normal_x, normal_y)
            .map_or(FaceTest::Unknown, |face| self.check_face(face))
    }

    fn check_top_bottom_face(&self, normal_z: Real) -> FaceTest {
        CuboidFace::from_vertical_normal(normal_z)
            .map_or(FaceTest::Unknown, |face| self.check_face(face))
    }
}

/// Checks if a sphere and a cuboid overlap.
///
/// All six faces are searched. `covering` describes the brick the cuboid stands for, if any,
/// and decides the contacts near its edges.
pub fn check_sphere_cuboid(
    pose1: &BodyPose,
    sphere1: &Sphere,
    pose2: &BodyPose,
    cuboid2: &Cuboid,
    covering: Option<&FaceCoveringQuery<'_>>,
    options: &CollisionOptions,
) -> Option<HitResult> {
    let frame = FaceFrame::new(pose1, pose2, cuboid2.half_extents);
    let delegate = SphereFaces {
        radius: sphere1.radius,
        cuboid: cuboid2,
        frame,
    };
    let helper = CuboidCheckHelper::new(frame, pose1, sphere1.radius, pose2, covering, options);
    let hit = helper.check(&delegate)?;
    let contact: Vector<Real> = cuboid2.clamp_to_face(&frame.centre, hit.face);

    Some(round_cuboid_hit(pose2, hit.face, contact, HitArea::Unspecified))
}
