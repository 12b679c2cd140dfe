//! Collision detection and response
//!
//! The ball is tested against the paddle and every brick with a closest-point
//! circle/rectangle test. Response is a fixed vertical bounce rather than a
//! reflection about a contact normal.

use glam::Vec2;

use super::body::{Body, BodyKind, Shape};

/// A ball/rectangle contact found during one frame
///
/// Bodies are referenced by their index in the frame's body list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Index of the ball
    pub ball: usize,
    /// Index of the paddle or brick that was hit
    pub other: usize,
    /// Kind of the body that was hit
    pub other_kind: BodyKind,
    /// Vector from the ball's position to the other body's position
    pub delta: Vec2,
    /// Length of `delta`
    pub distance: f32,
}

/// Closest-point test between a circle and an axis-aligned rectangle
///
/// `rect_pos` is the rectangle's top-left corner. Touching counts as a hit.
pub fn circle_rect(center: Vec2, radius: f32, rect_pos: Vec2, rect_size: Vec2) -> bool {
    let closest = center.clamp(rect_pos, rect_pos + rect_size);
    center.distance(closest) <= radius
}

/// Test one ordered pair for a ball/rectangle contact
///
/// Only (ball, paddle) and (ball, brick) pairs can collide; every other
/// combination returns `None`. Inactive bricks are skipped.
///
/// A brick is deactivated here, as part of detection, the moment a hit is
/// found. Later tests in the same pass therefore already see it inactive,
/// which guarantees at most one event per brick.
pub fn check_collision(
    (ball_idx, ball): (usize, &Body),
    (other_idx, other): (usize, &mut Body),
) -> Option<CollisionEvent> {
    let Shape::Circle { radius } = ball.shape else {
        return None;
    };
    let (size, other_kind) = match other.shape {
        Shape::Paddle { width, height } => (Vec2::new(width, height), BodyKind::Paddle),
        Shape::Brick {
            width,
            height,
            active: true,
        } => (Vec2::new(width, height), BodyKind::Brick),
        _ => return None,
    };

    if !circle_rect(ball.pos, radius, other.pos, size) {
        return None;
    }

    if other_kind == BodyKind::Brick {
        other.set_active(false);
    }

    let delta = other.pos - ball.pos;
    Some(CollisionEvent {
        ball: ball_idx,
        other: other_idx,
        other_kind,
        delta,
        distance: delta.length(),
    })
}

/// Test every unordered pair of bodies once (`i < j`), in index order
pub fn detect_collisions(bodies: &mut [Body]) -> Vec<CollisionEvent> {
    let mut events = Vec::new();
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = bodies.split_at_mut(j);
            if let Some(event) = check_collision((i, &head[i]), (j, &mut tail[0])) {
                events.push(event);
            }
        }
    }

    events
}

/// Apply the bounce for one collision event to the ball
///
/// The ball is lifted by one radius. Its vertical velocity and acceleration
/// are then negated, except when a brick is hit while the ball accelerates
/// downward (`acc.y > 0`): that case keeps its vertical motion. Horizontal
/// motion is never changed here.
pub fn resolve_collision_with_bounce(ball: &mut Body, other_kind: BodyKind) {
    let Shape::Circle { radius } = ball.shape else {
        return;
    };

    ball.pos.y -= radius;

    if other_kind == BodyKind::Brick && ball.acc.y > 0.0 {
        return;
    }

    ball.vel.y = -ball.vel.y;
    ball.acc.y = -ball.acc.y;
}
