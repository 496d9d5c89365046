//! Per-tick physics stepper
//!
//! One call advances the world by one fixed unit of motion. The stepper is a
//! plain function over `(WorldState, InputAggregator)` returning the tick's
//! events, so the whole simulation is testable without any host wiring.

use super::collision::{ReflectAxis, brick_reflect_axis, circle_rect_overlap, paddle_bounce};
use super::input::InputAggregator;
use super::state::{GamePhase, WorldState};

/// One-shot notifications raised during a tick, in the order they occurred.
/// Each variant fires at most once per tick, synchronously, never buffered
/// across ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    ScoreChanged(u32),
    LivesChanged(u32),
    BrickDestroyed,
    GameOver,
    LevelComplete,
}

/// Advance the world by one tick.
///
/// A no-op outside `Playing`. Collision order within a tick: side walls, top
/// wall, bottom-out, paddle, bricks. A bottom-out or a level clear ends the
/// tick early; at most one brick resolves per tick (first overlap in storage
/// order).
pub fn tick(state: &mut WorldState, input: &mut InputAggregator) -> Vec<TickEvent> {
    if state.phase != GamePhase::Playing {
        return Vec::new();
    }

    let mut events = Vec::new();
    state.tick_count += 1;

    // Paddle chases the resolved input target, never teleports
    state.paddle.target_x = input.resolve();
    state.paddle.chase_target(state.width);

    // Integrate ball motion
    state.ball.pos += state.ball.vel;

    let radius = state.ball.radius;

    // Side walls: clamp and mirror dx
    if state.ball.pos.x - radius < 0.0 {
        state.ball.pos.x = radius;
        state.ball.vel.x = -state.ball.vel.x;
    } else if state.ball.pos.x + radius > state.width {
        state.ball.pos.x = state.width - radius;
        state.ball.vel.x = -state.ball.vel.x;
    }

    // Top wall: clamp and mirror dy
    if state.ball.pos.y - radius < 0.0 {
        state.ball.pos.y = radius;
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Bottom-out: lose a life, then either end the round or re-launch.
    // Either way this tick is over.
    if state.ball.pos.y - radius > state.height {
        state.lives -= 1;
        events.push(TickEvent::LivesChanged(state.lives));
        if state.lives == 0 {
            log::debug!("game over at level {} with score {}", state.level, state.score);
            state.phase = GamePhase::GameOver;
            events.push(TickEvent::GameOver);
        } else {
            state.respawn_ball();
        }
        return events;
    }

    // Paddle: only a downward-moving ball can bounce
    if state.ball.vel.y > 0.0
        && circle_rect_overlap(
            state.ball.pos,
            radius,
            state.paddle.pos,
            state.paddle.width,
            state.paddle.height,
        )
    {
        let hit_pos = state.paddle.hit_position(state.ball.pos.x);
        state.ball.vel = paddle_bounce(hit_pos, state.ball.speed());
        // Re-seat just above the face so the bounce cannot re-trigger
        state.ball.pos.y = state.paddle.pos.y - radius;
    }

    // Bricks: resolve the first live overlap in storage order, one per tick
    let hit_index = state.bricks.iter().position(|b| {
        !b.destroyed && circle_rect_overlap(state.ball.pos, radius, b.pos, b.width, b.height)
    });
    if let Some(index) = hit_index {
        let brick = &mut state.bricks[index];
        brick.destroyed = true;
        state.score = state.score.saturating_add(brick.points);

        match brick_reflect_axis(state.ball.pos, brick.center(), brick.width, brick.height) {
            ReflectAxis::X => state.ball.vel.x = -state.ball.vel.x,
            ReflectAxis::Y => state.ball.vel.y = -state.ball.vel.y,
        }

        events.push(TickEvent::ScoreChanged(state.score));
        events.push(TickEvent::BrickDestroyed);

        if state.all_bricks_destroyed() {
            log::debug!("level {} cleared with score {}", state.level, state.score);
            state.phase = GamePhase::Won;
            events.push(TickEvent::LevelComplete);
        }
    }

    events
}
