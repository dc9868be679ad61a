use approx::assert_relative_eq;
use rebound3d::bricks::{
    check_bricks, resolve_bricks, BrickCoords, BrickGeometry, BrickGrid, BrickShape, BrickVolume,
};
use rebound3d::dynamics::{BodyMaterial, RigidBody};
use rebound3d::math::{Point, Vector};
use rebound3d::query::{self, CollisionError, CollisionOptions, HitArea, WhenEdge};
use rebound3d::shape::{Cuboid, CuboidFace, ShapeKind, Sphere};

fn wall() -> BrickGrid {
    let mut grid = BrickGrid::new();
    let _ = grid.insert(BrickCoords::new(1, 0, 0), BrickShape::Cube);
    let _ = grid.insert(BrickCoords::new(1, 0, 1), BrickShape::Cube);
    grid
}

#[test]
fn hidden_faces_do_not_catch_bodies_sliding_along_a_wall() {
    let options = CollisionOptions::default();
    let grid = wall();
    // Level with the seam between the two bricks of the wall.
    let ball = RigidBody::new(Sphere::new(0.25), Point::new(0.9, 0.5, 1.05));

    let mut hits = vec![];
    let count = check_bricks(&ball, &grid, &grid, &options, |coords, hit| {
        hits.push((coords, *hit))
    })
    .unwrap();

    assert_eq!(count, 2);
    for (_, hit) in &hits {
        assert_eq!(hit.area2, HitArea::WestFace);
        assert_eq!(hit.normal12.into_inner(), Vector::x());
    }

    // Without the covering, the edge of the lower brick is taken for its top face.
    let lower = BrickGeometry::determine(
        BrickShape::Cube,
        &grid.cell_origin(&BrickCoords::new(1, 0, 0)),
        &grid.brick_size(),
    )
    .to_body(BodyMaterial::default())
    .unwrap();
    let hit = query::check(&ball, &ball.next_pos, &lower, &lower.next_pos, &options)
        .unwrap()
        .unwrap();
    assert_eq!(hit.area2, HitArea::TopFace);
}

#[test]
fn rolling_over_a_seam_keeps_horizontal_speed() {
    let options = CollisionOptions::default();
    let mut grid = BrickGrid::new();
    let _ = grid.insert(BrickCoords::new(0, 0, -1), BrickShape::Cube);
    let _ = grid.insert(BrickCoords::new(1, 0, -1), BrickShape::Cube);

    let mut ball = RigidBody::new(Sphere::new(0.25), Point::new(1.05, 0.5, 0.24))
        .with_speed(Vector::new(2.0, 0.0, -0.1))
        .with_material(BodyMaterial::new(0.0, 0.0));

    let resolved = resolve_bricks(&mut ball, &grid, &grid, &options).unwrap();
    assert_eq!(resolved, 2);
    assert_relative_eq!(ball.next_pos.x, 1.05);
    assert_relative_eq!(ball.next_pos.z, 0.25 + options.tiny_gap, epsilon = 1.0e-5);
    assert_relative_eq!(ball.next_speed.x, 2.0);
    assert_eq!(ball.next_speed.z, 0.0);
}

#[test]
fn slabs_collide_with_their_half_cell() {
    let options = CollisionOptions::default();
    let mut grid = BrickGrid::with_brick_size(Vector::new(1.0, 1.0, 2.0));
    let _ = grid.insert(BrickCoords::new(0, 0, 0), BrickShape::BottomSlab);

    let mut ball = RigidBody::new(Sphere::new(0.25), Point::new(0.5, 0.5, 1.2));
    assert_eq!(resolve_bricks(&mut ball, &grid, &grid, &options), Ok(1));
    assert_relative_eq!(ball.next_pos.z, 1.25 + options.tiny_gap, epsilon = 1.0e-5);
}

#[test]
fn bricks_without_geometry_are_skipped() {
    let options = CollisionOptions::default();
    let mut grid = BrickGrid::new();
    let _ = grid.insert(BrickCoords::new(0, 0, 0), BrickShape::Complex);
    let _ = grid.insert(BrickCoords::new(1, 0, 0), BrickShape::Ramp(CuboidFace::East));

    let mut ball = RigidBody::new(Sphere::new(0.25), Point::new(1.0, 0.5, 0.5));
    let before = ball.clone();
    assert_eq!(resolve_bricks(&mut ball, &grid, &grid, &options), Ok(0));
    assert_eq!(ball, before);
}

#[test]
fn cuboid_bodies_cannot_collide_with_bricks() {
    let options = CollisionOptions::default();
    let mut grid = BrickGrid::new();
    let _ = grid.insert(BrickCoords::new(0, 0, -1), BrickShape::Cube);

    let mut crate_body =
        RigidBody::new(Cuboid::new(Vector::repeat(0.25)), Point::new(0.5, 0.5, 0.2));
    assert_eq!(
        resolve_bricks(&mut crate_body, &grid, &grid, &options),
        Err(CollisionError::UnsupportedPair {
            kind1: ShapeKind::Cuboid,
            kind2: ShapeKind::Cuboid,
        })
    );
}

fn lone_cube() -> BrickGrid {
    let mut grid = BrickGrid::new();
    let _ = grid.insert(BrickCoords::origin(), BrickShape::Cube);
    grid
}

fn falling_past_the_east_edge() -> RigidBody {
    RigidBody::new(Sphere::new(0.5), Point::new(1.3, 0.5, 1.6))
        .with_speed(Vector::new(0.0, 0.0, -24.0))
        .with_next_pos(Point::new(1.3, 0.5, 1.2))
}

#[test]
fn edge_policies_apply_to_covered_brick_faces() {
    let grid = lone_cube();
    let ball = falling_past_the_east_edge();

    for when_edge in [WhenEdge::PreferTopBottomFace, WhenEdge::InspectSpeeds] {
        let options = CollisionOptions::default().with_when_edge(when_edge);
        let mut areas = vec![];
        let count = check_bricks(&ball, &grid, &grid, &options, |_, hit| areas.push(hit.area2))
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(areas, [HitArea::TopFace], "{when_edge:?}");
    }
}

#[test]
fn falling_on_a_brick_edge_lands_on_top() {
    let options = CollisionOptions::default();
    let grid = lone_cube();
    let mut ball = falling_past_the_east_edge();

    assert_eq!(resolve_bricks(&mut ball, &grid, &grid, &options), Ok(1));
    assert_eq!(ball.next_pos.x, 1.3);
    assert_eq!(ball.next_pos.y, 0.5);
    // The ball rests on the edge of the top face, at its radius from the edge.
    let above_edge = ((0.5 + options.tiny_gap).powi(2) - 0.3 * 0.3).sqrt();
    assert_relative_eq!(ball.next_pos.z, 1.0 + above_edge, epsilon = 1.0e-4);
    assert_eq!(ball.next_speed.x, 0.0);
    assert!(ball.next_speed.z.abs() < 1.0e-4);
}
