//! Free-body integration and playfield walls
//!
//! Only the ball moves under its own dynamics. The paddle follows input and
//! bricks never move, so both functions ignore non-circle bodies.

use glam::Vec2;

use super::body::{Body, Shape};

/// Which wall the ball was pushed back from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Right,
    Bottom,
    Left,
    Top,
}

/// Advance a body by `dt` (already scaled simulation time)
///
/// Velocity picks up `acc * dt`, each axis is clamped to `±max_speed`,
/// then position moves by `vel * dt`.
pub fn move_body(body: &mut Body, dt: f32, max_speed: f32) {
    if !matches!(body.shape, Shape::Circle { .. }) {
        return;
    }

    body.vel += body.acc * dt;
    body.vel = body.vel.clamp(Vec2::splat(-max_speed), Vec2::splat(max_speed));
    body.pos += body.vel * dt;
}

/// Push the ball back inside a `width` x `height` playfield
///
/// Edges are tested right, bottom, left, top and only the first breach is
/// handled. The breached axis has its velocity and acceleration negated and
/// the center is placed one diameter in from that edge.
///
/// Returns the wall that was hit, if any.
pub fn resolve_wall_collision(body: &mut Body, width: f32, height: f32) -> Option<Wall> {
    let Shape::Circle { radius: r } = body.shape else {
        return None;
    };

    let wall = if body.pos.x + r > width {
        body.pos.x = width - r * 2.0;
        Wall::Right
    } else if body.pos.y + r > height {
        body.pos.y = height - r * 2.0;
        Wall::Bottom
    } else if body.pos.x - r < 0.0 {
        body.pos.x = r * 2.0;
        Wall::Left
    } else if body.pos.y - r < 0.0 {
        body.pos.y = r * 2.0;
        Wall::Top
    } else {
        return None;
    };

    match wall {
        Wall::Right | Wall::Left => {
            body.vel.x = -body.vel.x;
            body.acc.x = -body.acc.x;
        }
        Wall::Bottom | Wall::Top => {
            body.vel.y = -body.vel.y;
            body.acc.y = -body.acc.y;
        }
    }

    log::debug!("Ball bounced off {:?} wall at {}", wall, body.pos);
    Some(wall)
}
