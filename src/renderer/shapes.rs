//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in clip space. Every triangle is
//! flat-colored, so runs of equal color always hold whole triangles.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use super::viewport::Viewport;
use crate::sim::{GamePhase, RenderSnapshot};

/// Two triangles from four corners (in order around the quad)
fn quad(corners: [Vec2; 4], color: [f32; 4]) -> [Vertex; 6] {
    let [a, b, c, d] = corners.map(|p| Vertex::new(p.x, p.y, color));
    [a, b, c, a, c, d]
}

/// Axis-aligned world rectangle
pub fn rect(viewport: &Viewport, min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let corners = [
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(max.x, max.y),
        Vec2::new(min.x, max.y),
    ];
    quad(corners.map(|p| viewport.world_to_clip(p)), color)
}

/// World rectangle rotated by `angle` radians around its center
pub fn rotated_rect(
    viewport: &Viewport,
    center: Vec2,
    half_size: Vec2,
    angle: f32,
    color: [f32; 4],
) -> [Vertex; 6] {
    let rotation = Vec2::from_angle(angle);
    let corners = [
        Vec2::new(-half_size.x, -half_size.y),
        Vec2::new(half_size.x, -half_size.y),
        Vec2::new(half_size.x, half_size.y),
        Vec2::new(-half_size.x, half_size.y),
    ];
    quad(
        corners.map(|c| viewport.world_to_clip(center + rotation.rotate(c))),
        color,
    )
}

/// Full frame: background, obstacles (upper and lower part), actor, and a
/// dimming overlay once the run is over
pub fn scene_vertices(snapshot: &RenderSnapshot, viewport: &Viewport) -> Vec<Vertex> {
    let world = Vec2::new(snapshot.world_width, snapshot.world_height);
    let mut vertices = Vec::with_capacity(6 * (3 + 2 * snapshot.obstacles.len()));

    vertices.extend(rect(viewport, Vec2::ZERO, world, colors::SKY));

    for obstacle in &snapshot.obstacles {
        let left = obstacle.x;
        let right = obstacle.right_edge(snapshot.obstacle_width);
        vertices.extend(rect(
            viewport,
            Vec2::new(left, 0.0),
            Vec2::new(right, obstacle.gap_start),
            colors::OBSTACLE,
        ));
        vertices.extend(rect(
            viewport,
            Vec2::new(left, obstacle.gap_end),
            Vec2::new(right, world.y),
            colors::OBSTACLE,
        ));
    }

    let actor = &snapshot.actor;
    let half = Vec2::new(actor.width, actor.height) * 0.5;
    let center = Vec2::new(actor.x, actor.y) + half;
    vertices.extend(rotated_rect(viewport, center, half, snapshot.tilt, colors::ACTOR));

    if snapshot.phase == GamePhase::Over {
        vertices.extend(rect(viewport, Vec2::ZERO, world, colors::OVERLAY));
    }

    vertices
}
