use crate::bricks::FaceCoveringQuery;
use crate::math::{Real, Vector};
use crate::query::check::round_cuboid_hit;
use crate::query::cuboid_check_helper::{
    CuboidCheckDelegate, CuboidCheckHelper, FaceFrame, FaceHit, FaceTest,
};
use crate::query::{BodyPose, CollisionOptions, HitArea, HitResult};
use crate::shape::{Cuboid, CuboidFace, Cylinder};

struct CylinderFaces<'a> {
    cylinder: &'a Cylinder,
    cuboid: &'a Cuboid,
    frame: FaceFrame,
}

impl CylinderFaces<'_> {
    fn check_side(&self, face: CuboidFace) -> FaceTest {
        let d = self.frame.centre;
        let e = self.frame.half_extents;
        let radius = self.cylinder.radius;
        let to_plane = self.frame.centre_to_plane(face);
        let gap = to_plane - radius;

        if gap >= 0.0 {
            return FaceTest::DecisiveMiss;
        }

        if to_plane < 0.0 {
            return FaceTest::Unknown;
        }

        let other = 1 - face.axis();
        if d[other].abs() <= e[other] && d.z.abs() <= e.z {
            return FaceTest::HitInsideFace;
        }

        // The heights overlap: only the horizontal distance to the face matters.
        let lateral = d[other] - d[other].clamp(-e[other], e[other]);
        if to_plane * to_plane + lateral * lateral < radius * radius {
            FaceTest::HitOutsideFace { gap }
        } else {
            FaceTest::DecisiveMiss
        }
    }

    fn check_cap(&self, face: CuboidFace) -> FaceTest {
        let d = self.frame.centre;
        let e = self.frame.half_extents;
        let to_plane = self.frame.centre_to_plane(face);
        let gap = to_plane - self.cylinder.half_height();

        if gap >= 0.0 {
            return FaceTest::DecisiveMiss;
        }

        if to_plane < 0.0 {
            return FaceTest::Unknown;
        }

        if d.x.abs() <= e.x && d.y.abs() <= e.y {
            return FaceTest::HitInsideFace;
        }

        let dx = d.x - d.x.clamp(-e.x, e.x);
        let dy = d.y - d.y.clamp(-e.y, e.y);
        let radius = self.cylinder.radius;
        if dx * dx + dy * dy < radius * radius {
            FaceTest::HitOutsideFace { gap }
        } else {
            FaceTest::DecisiveMiss
        }
    }

    fn contact(&self, face: CuboidFace) -> Vector<Real> {
        let mut contact = self.cuboid.clamp_to_face(&self.frame.centre, face);
        if face.is_side() {
            let hh = self.cylinder.half_height();
            let e = self.frame.half_extents.z;
            let d = self.frame.centre.z;
            contact.z = ((d - hh).max(-e) + (d + hh).min(e)) / 2.0;
        }
        contact
    }
}

impl CuboidCheckDelegate for CylinderFaces<'_> {
    fn check_side_face(&self, normal_x: Real, normal_y: Real) -> FaceTest {
        CuboidFace::from_side_normal(normal_x, normal_y)
            .map_or(FaceTest::Unknown, |face| self.check_side(face))
    }

    fn check_top_bottom_face(&self, normal_z: Real) -> FaceTest {
        CuboidFace::from_vertical_normal(normal_z)
            .map_or(FaceTest::Unknown, |face| self.check_cap(face))
    }
}

/// The area of a cylinder in contact with `face` of a cuboid.
pub(crate) fn cylinder_area_against(face: CuboidFace) -> HitArea {
    match face {
        CuboidFace::Top => HitArea::BottomFace,
        CuboidFace::Bottom => HitArea::TopFace,
        _ => HitArea::Side,
    }
}

/// Checks if a cylinder and a cuboid overlap.
///
/// `covering` describes the brick the cuboid stands for, if any, and decides the contacts near
/// its edges.
pub fn check_cylinder_cuboid(
    pose1: &BodyPose,
    cylinder1: &Cylinder,
    pose2: &BodyPose,
    cuboid2: &Cuboid,
    covering: Option<&FaceCoveringQuery<'_>>,
    options: &CollisionOptions,
) -> Option<HitResult> {
    let frame = FaceFrame::new(pose1, pose2, cuboid2.half_extents);
    let d = frame.centre;
    let e = frame.half_extents;

    if d.z.abs() >= e.z + cylinder1.half_height() {
        return None;
    }

    let delegate = CylinderFaces {
        cylinder: cylinder1,
        cuboid: cuboid2,
        frame,
    };

    let radius = cylinder1.radius;
    let hit = if d.x.abs() + radius <= e.x && d.y.abs() + radius <= e.y {
        // The footprint of the cylinder lies within the top face.
        FaceHit::inside(if d.z >= 0.0 {
            CuboidFace::Top
        } else {
            CuboidFace::Bottom
        })
    } else {
        CuboidCheckHelper::new(frame, pose1, radius, pose2, covering, options).check(&delegate)?
    };

    Some(round_cuboid_hit(
        pose2,
        hit.face,
        delegate.contact(hit.face),
        cylinder_area_against(hit.face),
    ))
}
