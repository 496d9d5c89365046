//! Engine facade and game-state machine
//!
//! Wraps the simulation with the Ready/Playing/Paused/GameOver/Won lifecycle
//! and gates whether the stepper runs. Hosts drive it cooperatively: call
//! [`Engine::step`] once per frame, feed input between frames, draw from
//! [`Engine::render`]. The engine owns no thread, timer, or resource and
//! needs no teardown.

use crate::error::ConfigError;
use crate::sim::{GamePhase, InputAggregator, PaddleKey, Snapshot, TickEvent, WorldState, tick};

/// One-shot notification channels consumed by the host's UI/audio layer.
///
/// Every method has a no-op default, so a sink implements only what it cares
/// about. Methods are invoked synchronously before `step` returns, once per
/// triggering tick; panics in a sink propagate rather than being swallowed,
/// since swallowing them would corrupt the tick's atomicity.
pub trait EventSink {
    fn on_score_change(&mut self, _score: u32) {}
    fn on_lives_change(&mut self, _lives: u32) {}
    fn on_brick_destroyed(&mut self) {}
    fn on_game_over(&mut self) {}
    fn on_level_complete(&mut self) {}
}

/// The breakout engine: world state, input aggregation, event dispatch.
pub struct Engine {
    world: WorldState,
    input: InputAggregator,
    sink: Option<Box<dyn EventSink>>,
}

impl Engine {
    /// Create an engine for a `width` x `height` surface with a random seed.
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        Self::with_seed(width, height, rand::random())
    }

    /// Create an engine with a pinned seed, for reproducible runs.
    pub fn with_seed(width: f64, height: f64, seed: u64) -> Result<Self, ConfigError> {
        let world = WorldState::new(width, height, seed)?;
        let input = InputAggregator::new(world.paddle.pos.x, world.paddle.max_x(width));
        log::info!("engine created: {width}x{height} surface, seed {seed}");
        Ok(Self {
            world,
            input,
            sink: None,
        })
    }

    /// Register the host's event sink. At most one; a later call replaces it.
    pub fn set_sink(&mut self, sink: impl EventSink + 'static) {
        self.sink = Some(Box::new(sink));
    }

    // --- lifecycle -------------------------------------------------------

    /// `Ready -> Playing`. Ignored in any other phase.
    pub fn start(&mut self) {
        if self.world.phase == GamePhase::Ready {
            self.world.phase = GamePhase::Playing;
        }
    }

    /// `Playing -> Paused`. Purely a gate on the stepper; nothing is frozen
    /// internally because nothing internal keeps time.
    pub fn pause(&mut self) {
        if self.world.phase == GamePhase::Playing {
            self.world.phase = GamePhase::Paused;
        }
    }

    /// `Paused -> Playing`.
    pub fn resume(&mut self) {
        if self.world.phase == GamePhase::Paused {
            self.world.phase = GamePhase::Playing;
        }
    }

    /// Full reset back to `Ready`: score 0, lives restored, level 1.
    pub fn restart(&mut self) {
        self.world.reset();
        self.recenter_input();
    }

    /// `Won -> Ready` on the next level, carrying score and lives. Ignored
    /// in any other phase.
    pub fn advance(&mut self) -> Result<(), ConfigError> {
        if self.world.phase == GamePhase::Won {
            let next = self.world.level + 1;
            self.next_level(next)?;
        }
        Ok(())
    }

    // --- commands --------------------------------------------------------

    /// Re-place ball, paddle, and bricks for the current level.
    pub fn init(&mut self) {
        self.world.init();
        self.recenter_input();
    }

    /// Alias for [`Engine::restart`], matching the command vocabulary.
    pub fn reset(&mut self) {
        self.restart();
    }

    /// Jump to an arbitrary level (>= 1), keeping score and lives.
    pub fn next_level(&mut self, level: u32) -> Result<(), ConfigError> {
        self.world.next_level(level)?;
        self.recenter_input();
        Ok(())
    }

    /// Pointer/touch update: where the pointer wants the paddle center.
    /// Last write before the next step wins.
    pub fn move_paddle_target(&mut self, x: f64) {
        self.input.set_pointer_target(x, self.world.paddle.width);
    }

    /// Keyboard update: a movement key went down or up.
    pub fn set_key_state(&mut self, key: PaddleKey, pressed: bool) {
        self.input.set_key_state(key, pressed);
    }

    /// Advance one tick. A no-op outside `Playing`. Returns the tick's
    /// events after dispatching each to the registered sink.
    pub fn step(&mut self) -> Vec<TickEvent> {
        let events = tick(&mut self.world, &mut self.input);
        if let Some(sink) = self.sink.as_deref_mut() {
            for event in &events {
                match *event {
                    TickEvent::ScoreChanged(score) => sink.on_score_change(score),
                    TickEvent::LivesChanged(lives) => sink.on_lives_change(lives),
                    TickEvent::BrickDestroyed => sink.on_brick_destroyed(),
                    TickEvent::GameOver => sink.on_game_over(),
                    TickEvent::LevelComplete => sink.on_level_complete(),
                }
            }
        }
        events
    }

    /// Snapshot the world for drawing. The engine computes geometry; the
    /// host paints it.
    pub fn render(&self) -> Snapshot {
        self.world.snapshot()
    }

    // --- queries ---------------------------------------------------------

    pub fn score(&self) -> u32 {
        self.world.score
    }

    pub fn lives(&self) -> u32 {
        self.world.lives
    }

    pub fn level(&self) -> u32 {
        self.world.level
    }

    pub fn phase(&self) -> GamePhase {
        self.world.phase
    }

    /// Direct world access for diagnostics and tests
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    /// Input tracks the paddle wherever a lifecycle command re-seats it;
    /// held-key state survives the re-seat
    fn recenter_input(&mut self) {
        self.input.reseat(
            self.world.paddle.pos.x,
            self.world.paddle.max_x(self.world.width),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Sink that records every notification for assertion
    #[derive(Default)]
    struct Recorder {
        scores: Vec<u32>,
        lives: Vec<u32>,
        bricks_destroyed: u32,
        game_overs: u32,
        levels_completed: u32,
    }

    #[derive(Clone, Default)]
    struct SharedRecorder(Rc<RefCell<Recorder>>);

    impl EventSink for SharedRecorder {
        fn on_score_change(&mut self, score: u32) {
            self.0.borrow_mut().scores.push(score);
        }
        fn on_lives_change(&mut self, lives: u32) {
            self.0.borrow_mut().lives.push(lives);
        }
        fn on_brick_destroyed(&mut self) {
            self.0.borrow_mut().bricks_destroyed += 1;
        }
        fn on_game_over(&mut self) {
            self.0.borrow_mut().game_overs += 1;
        }
        fn on_level_complete(&mut self) {
            self.0.borrow_mut().levels_completed += 1;
        }
    }

    fn engine() -> Engine {
        Engine::with_seed(700.0, 500.0, 42).unwrap()
    }

    #[test]
    fn test_rejects_bad_surface() {
        assert!(Engine::new(0.0, 500.0).is_err());
        assert!(Engine::new(700.0, 0.0).is_err());
        assert!(Engine::new(-1.0, -1.0).is_err());
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut game = engine();
        assert_eq!(game.phase(), GamePhase::Ready);

        // Pause/resume only apply from their source phases
        game.pause();
        assert_eq!(game.phase(), GamePhase::Ready);
        game.resume();
        assert_eq!(game.phase(), GamePhase::Ready);

        game.start();
        assert_eq!(game.phase(), GamePhase::Playing);
        game.start();
        assert_eq!(game.phase(), GamePhase::Playing);

        game.pause();
        assert_eq!(game.phase(), GamePhase::Paused);
        game.resume();
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_step_outside_playing_is_noop() {
        let mut game = engine();
        let before = game.render();
        assert!(game.step().is_empty());
        let after = game.render();
        assert_eq!(before.ball, after.ball);
        assert_eq!(before.paddle, after.paddle);
    }

    #[test]
    fn test_paused_freezes_and_resumes() {
        let mut game = engine();
        game.start();
        game.step();
        game.pause();
        let frozen = game.render();
        for _ in 0..10 {
            assert!(game.step().is_empty());
        }
        assert_eq!(game.render().ball, frozen.ball);
        game.resume();
        game.step();
        assert_ne!(game.render().ball.pos, frozen.ball.pos);
    }

    #[test]
    fn test_sink_receives_brick_events() {
        let mut game = engine();
        let recorder = SharedRecorder::default();
        game.set_sink(recorder.clone());
        game.start();

        // Aim the ball at a brick directly
        let brick = game.world().bricks[35];
        game.world.ball.pos =
            DVec2::new(brick.center().x, brick.pos.y + brick.height + brick.height);
        game.world.ball.vel = DVec2::new(0.0, -brick.height);

        let events = game.step();
        assert!(events.contains(&TickEvent::BrickDestroyed));
        let rec = recorder.0.borrow();
        assert_eq!(rec.bricks_destroyed, 1);
        assert_eq!(rec.scores, vec![brick.points]);
    }

    #[test]
    fn test_sink_receives_game_over_once() {
        let mut game = engine();
        let recorder = SharedRecorder::default();
        game.set_sink(recorder.clone());
        game.start();

        for _ in 0..3 {
            game.world.ball.pos = DVec2::new(350.0, 520.0);
            game.world.ball.vel = DVec2::new(0.0, 5.0);
            game.step();
        }
        let rec = recorder.0.borrow();
        assert_eq!(rec.lives, vec![2, 1, 0]);
        assert_eq!(rec.game_overs, 1);
        assert_eq!(game.phase(), GamePhase::GameOver);
        drop(rec);

        // Terminal: further steps emit nothing
        for _ in 0..10 {
            assert!(game.step().is_empty());
        }
        assert_eq!(recorder.0.borrow().game_overs, 1);
    }

    #[test]
    fn test_won_then_advance_carries_score() {
        let mut game = engine();
        let recorder = SharedRecorder::default();
        game.set_sink(recorder.clone());
        game.start();

        // Clear everything but one brick and strike it
        let last = game.world.bricks[0];
        for brick in game.world.bricks.iter_mut().skip(1) {
            brick.destroyed = true;
        }
        game.world.ball.pos = DVec2::new(last.center().x, last.pos.y + last.height + 10.0);
        game.world.ball.vel = DVec2::new(0.0, -4.0);
        game.step();

        assert_eq!(game.phase(), GamePhase::Won);
        assert_eq!(recorder.0.borrow().levels_completed, 1);
        let score = game.score();
        assert!(score > 0);

        game.advance().unwrap();
        assert_eq!(game.phase(), GamePhase::Ready);
        assert_eq!(game.level(), 2);
        assert_eq!(game.score(), score);
        assert_eq!(game.render().bricks.len(), 50); // 5 rows x 10 cols
    }

    #[test]
    fn test_advance_outside_won_is_noop() {
        let mut game = engine();
        game.advance().unwrap();
        assert_eq!(game.level(), 1);
        assert_eq!(game.phase(), GamePhase::Ready);
    }

    #[test]
    fn test_restart_resets_round() {
        let mut game = engine();
        game.start();
        game.world.score = 300;
        game.world.lives = 1;
        game.world.phase = GamePhase::GameOver;

        game.restart();
        assert_eq!(game.phase(), GamePhase::Ready);
        assert_eq!(game.score(), 0);
        assert_eq!(game.lives(), 3);
        assert_eq!(game.level(), 1);
    }

    #[test]
    fn test_next_level_zero_rejected() {
        let mut game = engine();
        assert_eq!(game.next_level(0), Err(ConfigError::InvalidLevel(0)));
        // Failed advance leaves the world untouched
        assert_eq!(game.level(), 1);
    }

    #[test]
    fn test_pointer_moves_paddle_over_ticks() {
        let mut game = engine();
        game.start();
        // Park the ball so only the paddle moves
        game.world.ball.pos = DVec2::new(350.0, 300.0);
        game.world.ball.vel = DVec2::ZERO;

        game.move_paddle_target(600.0);
        for _ in 0..200 {
            game.step();
        }
        assert!((game.world().paddle.pos.x - 550.0).abs() < 1e-6);
    }

    #[test]
    fn test_keys_move_paddle_over_ticks() {
        let mut game = engine();
        game.start();
        game.world.ball.pos = DVec2::new(350.0, 300.0);
        game.world.ball.vel = DVec2::ZERO;

        let start = game.world().paddle.pos.x;
        game.set_key_state(PaddleKey::Right, true);
        for _ in 0..20 {
            game.step();
        }
        assert!(game.world().paddle.pos.x > start);
        game.set_key_state(PaddleKey::Right, false);
    }

    #[test]
    fn test_held_key_survives_level_advance() {
        let mut game = engine();
        game.start();
        game.set_key_state(PaddleKey::Right, true);

        game.next_level(2).unwrap();
        game.start();
        // Park the ball so only the paddle moves
        game.world.ball.pos = DVec2::new(350.0, 300.0);
        game.world.ball.vel = DVec2::ZERO;

        let start = game.world().paddle.pos.x;
        for _ in 0..10 {
            game.step();
        }
        // No fresh keydown was sent after the advance
        assert!(game.world().paddle.pos.x > start);
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = Engine::with_seed(700.0, 500.0, 7).unwrap();
        let mut b = Engine::with_seed(700.0, 500.0, 7).unwrap();
        a.start();
        b.start();
        for _ in 0..500 {
            assert_eq!(a.step(), b.step());
        }
        assert_eq!(a.render().ball, b.render().ball);
        assert_eq!(a.score(), b.score());
    }
}
