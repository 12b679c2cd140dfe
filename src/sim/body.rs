//! Simulated bodies
//!
//! Ball, paddle and bricks share one kinematic record; what differs between
//! them lives in the [`Shape`] tag.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Per-kind geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// The ball. Position is its center.
    Circle { radius: f32 },
    /// The player's paddle. Position is its top-left corner.
    Paddle { width: f32, height: f32 },
    /// A destructible brick. Position is its top-left corner.
    /// Inactive bricks stay in the body list but never collide again.
    Brick {
        width: f32,
        height: f32,
        active: bool,
    },
}

/// Shape discriminant without the geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Circle,
    Paddle,
    Brick,
}

/// A simulated body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Placeholder mass (bricks are always 0)
    pub mass: f32,
    pub shape: Shape,
}

impl Body {
    pub fn circle(pos: Vec2, radius: f32, mass: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            mass,
            shape: Shape::Circle { radius },
        }
    }

    pub fn paddle(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            mass: 1.0,
            shape: Shape::Paddle { width, height },
        }
    }

    pub fn brick(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            mass: 0.0,
            shape: Shape::Brick {
                width,
                height,
                active: true,
            },
        }
    }

    #[inline]
    pub fn kind(&self) -> BodyKind {
        match self.shape {
            Shape::Circle { .. } => BodyKind::Circle,
            Shape::Paddle { .. } => BodyKind::Paddle,
            Shape::Brick { .. } => BodyKind::Brick,
        }
    }

    /// Ball radius, `None` for rectangles
    #[inline]
    pub fn radius(&self) -> Option<f32> {
        match self.shape {
            Shape::Circle { radius } => Some(radius),
            _ => None,
        }
    }

    /// Width and height of a paddle or brick, `None` for the ball
    #[inline]
    pub fn extent(&self) -> Option<Vec2> {
        match self.shape {
            Shape::Paddle { width, height } | Shape::Brick { width, height, .. } => {
                Some(Vec2::new(width, height))
            }
            Shape::Circle { .. } => None,
        }
    }

    /// Whether this body can still be collided with. Only bricks ever turn inactive.
    #[inline]
    pub fn is_active(&self) -> bool {
        match self.shape {
            Shape::Brick { active, .. } => active,
            _ => true,
        }
    }

    /// Set a brick's active flag (no-op for other shapes)
    pub fn set_active(&mut self, value: bool) {
        if let Shape::Brick { active, .. } = &mut self.shape {
            *active = value;
        }
    }

    /// Geometric center
    pub fn center(&self) -> Vec2 {
        match self.extent() {
            Some(extent) => self.pos + extent / 2.0,
            None => self.pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_and_extents() {
        let ball = Body::circle(Vec2::new(10.0, 20.0), 5.0, 50.0);
        assert_eq!(ball.kind(), BodyKind::Circle);
        assert_eq!(ball.radius(), Some(5.0));
        assert_eq!(ball.extent(), None);
        assert_eq!(ball.center(), Vec2::new(10.0, 20.0));

        let paddle = Body::paddle(Vec2::new(0.0, 100.0), 40.0, 10.0);
        assert_eq!(paddle.kind(), BodyKind::Paddle);
        assert_eq!(paddle.extent(), Some(Vec2::new(40.0, 10.0)));
        assert_eq!(paddle.center(), Vec2::new(20.0, 105.0));

        let brick = Body::brick(Vec2::ZERO, 30.0, 12.0);
        assert_eq!(brick.kind(), BodyKind::Brick);
        assert_eq!(brick.mass, 0.0);
        assert!(brick.is_active());
    }

    #[test]
    fn test_set_active_only_touches_bricks() {
        let mut brick = Body::brick(Vec2::ZERO, 30.0, 12.0);
        brick.set_active(false);
        assert!(!brick.is_active());

        let mut paddle = Body::paddle(Vec2::ZERO, 40.0, 10.0);
        paddle.set_active(false);
        assert!(paddle.is_active());
    }
}
