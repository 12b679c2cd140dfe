//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One serialized mutation path per frame
//! - Stable iteration order (ball, paddle, then bricks by index)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod motion;
pub mod state;
pub mod tick;

pub use body::{Body, BodyKind, Shape};
pub use collision::{
    CollisionEvent, check_collision, circle_rect, detect_collisions, resolve_collision_with_bounce,
};
pub use motion::{Wall, move_body, resolve_wall_collision};
pub use state::{BrickCounter, GamePhase, GameState, Snapshot, brick_position};
pub use tick::{TickInput, animate, tick};
