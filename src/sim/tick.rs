//! Per-frame simulation tick
//!
//! One call per rendered frame: integrate, walls, detect, resolve.

use super::body::BodyKind;
use super::collision::{CollisionEvent, detect_collisions, resolve_collision_with_bounce};
use super::motion::{Wall, move_body, resolve_wall_collision};
use super::state::{GamePhase, GameState};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Milliseconds since the previous frame. `None` skips the frame.
    pub elapsed_ms: Option<f32>,
    /// Pointer x the paddle should center under (from drag input)
    pub paddle_target: Option<f32>,
    /// A drag gesture started this frame (restarts a finished game)
    pub drag_start: bool,
    /// Idle/demo mode - paddle follows the ball
    pub idle_mode: bool,
}

/// Advance the game by one frame
///
/// Paddle input is applied even when the frame itself is skipped or the game
/// is over. Elapsed time that is missing, zero, negative or not finite skips
/// the frame; long frames are capped at `max_frame_ms`.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<CollisionEvent> {
    if input.drag_start && state.begin_drag() {
        log::info!("Restarted by drag");
    }

    let mut paddle_target = input.paddle_target;
    if input.idle_mode {
        paddle_target = Some(state.ball().pos.x);
    }
    if let Some(target) = paddle_target {
        state.set_paddle_target(target);
    }

    let Some(elapsed_ms) = input.elapsed_ms else {
        return Vec::new();
    };
    if !elapsed_ms.is_finite() || elapsed_ms < 0.0 {
        log::warn!("Skipping frame with invalid elapsed time {elapsed_ms}");
        return Vec::new();
    }
    if elapsed_ms == 0.0 {
        return Vec::new();
    }

    let dt = state.config.base_scale * elapsed_ms.min(state.config.max_frame_ms);
    animate(state, dt)
}

/// Run one frame of physics with an already scaled `dt`
///
/// 1. A finished game only re-freezes the ball.
/// 2. Integrate every body.
/// 3. Resolve walls; the bottom wall ends the game if configured to.
/// 4. Detect all ball/paddle and ball/brick contacts.
/// 5. Resolve contacts in detection order, counting each brick hit.
///
/// Returns the contacts found this frame.
pub fn animate(state: &mut GameState, dt: f32) -> Vec<CollisionEvent> {
    if state.is_terminal() {
        state.freeze_ball();
        return Vec::new();
    }

    state.frame_count += 1;

    let max_speed = state.config.max_speed;
    for body in &mut state.bodies {
        move_body(body, dt, max_speed);
    }

    let (width, height) = (state.config.width, state.config.height);
    let bottom_loses = state.config.bottom_wall_loses;
    for body in &mut state.bodies {
        let wall = resolve_wall_collision(body, width, height);
        if wall == Some(Wall::Bottom) && bottom_loses {
            state.counter.mark_lost();
        }
    }
    if state.phase() == GamePhase::Lost {
        log::info!("Ball lost at frame {}", state.frame_count);
        state.freeze_ball();
        return Vec::new();
    }

    let events = detect_collisions(&mut state.bodies);

    for event in &events {
        if event.other_kind == BodyKind::Brick {
            state.counter.increment();
            log::debug!(
                "Brick {} destroyed ({} of {})",
                event.other,
                state.counter.get(),
                state.config.total_bricks
            );
        }
        resolve_collision_with_bounce(&mut state.bodies[event.ball], event.other_kind);
    }

    if state.phase() == GamePhase::Won {
        log::info!("All bricks cleared at frame {}", state.frame_count);
        state.freeze_ball();
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::{BALL, FIRST_BRICK, PADDLE};
    use glam::Vec2;
    use proptest::prelude::*;

    fn frame(ms: f32) -> TickInput {
        TickInput {
            elapsed_ms: Some(ms),
            ..Default::default()
        }
    }

    fn nine_brick_game() -> GameState {
        GameState::new(GameConfig {
            total_bricks: 9,
            ..Default::default()
        })
    }

    #[test]
    fn test_skipped_frames_do_nothing() {
        let mut state = GameState::new(GameConfig::default());
        let before = state.snapshot();

        for input in [
            TickInput::default(),
            frame(0.0),
            frame(-16.0),
            frame(f32::NAN),
            frame(f32::INFINITY),
        ] {
            assert!(tick(&mut state, &input).is_empty());
        }
        assert_eq!(state.snapshot(), before);
        assert_eq!(state.frame_count(), 0);
    }

    #[test]
    fn test_frame_advances_ball() {
        let mut state = GameState::new(GameConfig::default());
        let start = state.ball().pos;

        tick(&mut state, &frame(16.0));
        assert_eq!(state.frame_count(), 1);
        // dt = 0.15, acc = (0.5, 0.5): vel = 0.075, pos += 0.01125
        let ball = state.ball();
        assert!((ball.vel.x - 0.075).abs() < 1e-6);
        assert!((ball.vel.y - 0.075).abs() < 1e-6);
        assert!((ball.pos.x - (start.x + 0.01125)).abs() < 1e-4);
        // Paddle and bricks do not move
        let paddle_start = Vec2::new(state.config.paddle_start_x(), state.config.paddle_y());
        assert_eq!(state.paddle().pos, paddle_start);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut capped = GameState::new(GameConfig::default());
        let mut reference = capped.clone();

        tick(&mut capped, &frame(5_000.0));
        tick(&mut reference, &frame(100.0));
        assert_eq!(capped.ball().pos, reference.ball().pos);
    }

    #[test]
    fn test_paddle_bounce_inverts_vertical_only() {
        let mut state = GameState::new(GameConfig::default());
        let paddle = state.paddle().pos;
        {
            let ball = state.ball_mut();
            ball.pos = Vec2::new(paddle.x + 60.0, paddle.y - 10.0);
            ball.vel = Vec2::new(2.0, 5.0);
            ball.acc = Vec2::ZERO;
        }

        let events = tick(&mut state, &frame(16.0));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].other, PADDLE);
        assert_eq!(state.ball().vel, Vec2::new(2.0, -5.0));
        assert_eq!(state.counter().get(), 0);
    }

    #[test]
    fn test_brick_hit_with_downward_accel_keeps_direction() {
        let mut state = GameState::new(GameConfig::default());
        let brick = state.bricks()[0].center();
        {
            let ball = state.ball_mut();
            ball.pos = brick;
            ball.vel = Vec2::new(0.0, -3.0);
            ball.acc = Vec2::new(0.0, 0.5);
        }

        let events = tick(&mut state, &frame(16.0));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].other, FIRST_BRICK);
        assert_eq!(state.counter().get(), 1);
        assert!(!state.bricks()[0].is_active());
        assert!(state.ball().vel.y < 0.0);
        assert_eq!(state.ball().acc.y, 0.5);
    }

    #[test]
    fn test_win_after_every_brick() {
        let mut state = nine_brick_game();

        for idx in 0..9 {
            let target = state.bricks()[idx].center();
            {
                let ball = state.ball_mut();
                ball.pos = target;
                ball.vel = Vec2::ZERO;
                ball.acc = Vec2::ZERO;
            }
            let events = tick(&mut state, &frame(16.0));
            assert_eq!(events.len(), 1, "brick {idx}");
            assert_eq!(state.counter().get(), idx as i32 + 1);
        }

        assert_eq!(state.phase(), GamePhase::Won);
        assert_eq!(state.active_bricks(), 0);

        // No further increments once won
        let won = state.snapshot();
        for _ in 0..10 {
            assert!(tick(&mut state, &frame(16.0)).is_empty());
        }
        assert_eq!(state.counter().get(), 9);
        assert_eq!(state.snapshot().bodies[BALL].pos, won.bodies[BALL].pos);
    }

    #[test]
    fn test_terminal_state_is_frozen() {
        let mut state = GameState::new(GameConfig::default());
        state.counter.mark_lost();
        state.ball_mut().vel = Vec2::new(3.0, 3.0);
        let before = state.snapshot();

        for _ in 0..5 {
            tick(&mut state, &frame(16.0));
        }
        let after = state.snapshot();
        assert_eq!(after.brick_count, -1);
        assert_eq!(after.frame, before.frame);
        for (a, b) in after.bodies.iter().zip(&before.bodies) {
            assert_eq!(a.pos, b.pos);
        }
        assert_eq!(state.ball().vel, Vec2::ZERO);
        assert_eq!(state.ball().acc, state.config.frozen_ball_accel);
    }

    #[test]
    fn test_bottom_wall_loses() {
        let mut state = GameState::new(GameConfig::default());
        let height = state.config.height;
        {
            let ball = state.ball_mut();
            ball.pos = Vec2::new(30.0, height - 17.0);
            ball.vel = Vec2::new(0.0, 20.0);
        }

        tick(&mut state, &frame(16.0));
        assert_eq!(state.phase(), GamePhase::Lost);
        assert_eq!(state.counter().get(), -1);
        assert_eq!(state.ball().vel, Vec2::ZERO);
    }

    #[test]
    fn test_bottom_wall_bounces_when_loss_disabled() {
        let mut state = GameState::new(GameConfig {
            bottom_wall_loses: false,
            ..Default::default()
        });
        let height = state.config.height;
        {
            let ball = state.ball_mut();
            ball.pos = Vec2::new(30.0, height - 17.0);
            ball.vel = Vec2::new(0.0, 20.0);
        }

        tick(&mut state, &frame(16.0));
        assert_eq!(state.phase(), GamePhase::Playing);
        assert!(state.ball().vel.y < 0.0);
        assert_eq!(state.ball().pos.y, height - 2.0 * state.config.radius);
    }

    #[test]
    fn test_drag_start_resets_after_loss() {
        let mut state = GameState::new(GameConfig::default());
        state.counter.mark_lost();
        state.bodies[FIRST_BRICK].set_active(false);

        let input = TickInput {
            drag_start: true,
            paddle_target: Some(100.0),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.counter().get(), 0);
        assert_eq!(state.active_bricks(), state.config.total_bricks as usize);
        assert_eq!(state.ball().pos, state.config.ball_start);
        assert_eq!(state.ball().vel, Vec2::ZERO);
        // Drag position applies after the reset
        assert_eq!(state.paddle().pos.x, 100.0 - state.config.paddle_width / 2.0);
    }

    #[test]
    fn test_idle_mode_tracks_ball() {
        let mut state = GameState::new(GameConfig::default());
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        let paddle_center = state.paddle().pos.x + state.config.paddle_width / 2.0;
        assert_eq!(paddle_center, state.ball().pos.x);
    }

    proptest! {
        #[test]
        fn prop_counter_monotonic_and_bricks_hit_once(
            frames in prop::collection::vec((0.0f32..390.0, 1.0f32..40.0), 1..300),
        ) {
            let mut state = GameState::new(GameConfig::default());
            let mut last = state.counter().get();
            let mut was_inactive = vec![false; state.bricks().len()];

            for (target, ms) in frames {
                let input = TickInput {
                    elapsed_ms: Some(ms),
                    paddle_target: Some(target),
                    ..Default::default()
                };
                for event in tick(&mut state, &input) {
                    if event.other_kind == BodyKind::Brick {
                        let idx = event.other - FIRST_BRICK;
                        prop_assert!(!was_inactive[idx]);
                        was_inactive[idx] = true;
                    }
                }

                let count = state.counter().get();
                prop_assert!(count >= last || count == -1);
                prop_assert!(state.ball().vel.x.abs() <= state.config.max_speed);
                prop_assert!(state.ball().vel.y.abs() <= state.config.max_speed);
                last = count;
                if state.is_terminal() {
                    break;
                }
            }
        }
    }
}
