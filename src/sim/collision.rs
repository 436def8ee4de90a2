//! Collision detection between the actor, obstacles and the world bounds
//!
//! Everything here is a pure function of the current positions. Edges are
//! strict: an actor exactly touching a boundary is not colliding.

use super::actor::Actor;
use super::obstacles::Obstacle;

/// Actor's vertical extent leaves `[0, world_height]`
#[inline]
pub fn out_of_bounds(actor: &Actor, world_height: f32) -> bool {
    actor.y < 0.0 || actor.bottom() > world_height
}

/// Actor overlaps the obstacle horizontally and is not fully inside its gap
pub fn hits_obstacle(actor: &Actor, obstacle: &Obstacle, obstacle_width: f32) -> bool {
    let overlaps_x = actor.right() > obstacle.x && actor.x < obstacle.right_edge(obstacle_width);
    if !overlaps_x {
        return false;
    }
    actor.y < obstacle.gap_start || actor.bottom() > obstacle.gap_end
}

/// True if the actor has hit the floor, the ceiling or any obstacle
pub fn check_collision(
    actor: &Actor,
    obstacles: &[Obstacle],
    obstacle_width: f32,
    world_height: f32,
) -> bool {
    out_of_bounds(actor, world_height)
        || obstacles
            .iter()
            .any(|obstacle| hits_obstacle(actor, obstacle, obstacle_width))
}
