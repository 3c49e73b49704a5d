//! Game state module - the tick-driven state machine
//!
//! Ties together the snake, apple, power-up spawner, and timed effects.
//! `tick` accumulates fixed-timestep time and performs one movement step per
//! step interval; each step advances the snake, resolves apple and power-up
//! pickups, and checks self-collision.

use arrayvec::ArrayVec;

use crate::core::effects::ActiveEffects;
use crate::core::power_up::{PowerUp, PowerUpSpawner};
use crate::core::rng::SimpleRng;
use crate::core::snake::Snake;
use crate::core::snapshot::GameSnapshot;
use crate::types::{
    Direction, GameAction, Position, PowerUpKind, BASE_STEP_MS, INITIAL_BODY_PARTS, MAX_POWER_UPS,
    POWER_UP_KINDS, SPEED_UP_DIVISOR,
};

/// Complete game state.
///
/// States: welcome (`!started`), running, game over. Entities are owned here
/// exclusively; collaborators only ever see a [`GameSnapshot`].
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    /// Authoritative heading: the most recent accepted turn, consumed by the
    /// next step's advance.
    direction: Direction,
    apple: Position,
    power_ups: ArrayVec<PowerUp, MAX_POWER_UPS>,
    spawner: PowerUpSpawner,
    effects: ActiveEffects,
    rng: SimpleRng,
    apples_eaten: u32,
    /// Highest score this process has seen; survives restarts.
    highest_score: u32,
    /// Time accumulated toward the next movement step.
    step_timer_ms: u32,
    /// Interval of the in-flight step window.
    ///
    /// Latched when a step window opens, so a SpeedUp collected or expiring
    /// mid-window only affects subsequent windows.
    scheduled_step_ms: u32,
    started: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// The game sits on the welcome screen until [`GameState::start`] (or a
    /// Confirm action) is applied.
    pub fn new(seed: u32) -> Self {
        Self {
            snake: Snake::new(Position::new(0, 0), INITIAL_BODY_PARTS),
            direction: Direction::Right,
            apple: Position::new(0, 0),
            power_ups: ArrayVec::new(),
            spawner: PowerUpSpawner::new(),
            effects: ActiveEffects::new(),
            rng: SimpleRng::new(seed),
            apples_eaten: 0,
            highest_score: 0,
            step_timer_ms: 0,
            scheduled_step_ms: BASE_STEP_MS,
            started: false,
            game_over: false,
        }
    }

    /// Leave the welcome screen: place the first apple and power-up.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.apple = self.rng.next_cell();
        self.spawn_power_up();
    }

    /// Full reset back into the running state.
    ///
    /// Discards every entity and active effect; the high score and the RNG
    /// stream persist for the process lifetime.
    pub fn restart(&mut self) {
        self.snake = Snake::new(Position::new(0, 0), INITIAL_BODY_PARTS);
        self.direction = Direction::Right;
        self.apples_eaten = 0;
        self.apple = self.rng.next_cell();
        self.power_ups.clear();
        self.spawner.reset();
        self.effects.clear();
        self.step_timer_ms = 0;
        self.scheduled_step_ms = BASE_STEP_MS;
        self.game_over = false;
        self.started = true;
        self.spawn_power_up();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.apples_eaten
    }

    pub fn high_score(&self) -> u32 {
        self.highest_score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Position {
        self.apple
    }

    pub fn power_ups(&self) -> &[PowerUp] {
        &self.power_ups
    }

    pub fn effects(&self) -> &ActiveEffects {
        &self.effects
    }

    /// Interval between movement steps under the current effects.
    pub fn step_interval_ms(&self) -> u32 {
        if self.effects.is_active(PowerUpKind::SpeedUp) {
            BASE_STEP_MS / SPEED_UP_DIVISOR
        } else {
            BASE_STEP_MS
        }
    }

    /// Apply a logical input action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(dir) => self.turn(dir),
            GameAction::Confirm => {
                if !self.started {
                    self.start();
                    true
                } else if self.game_over {
                    self.restart();
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Request a heading change.
    ///
    /// Rejected when it reverses the authoritative direction; between two
    /// steps the last accepted turn wins.
    pub fn turn(&mut self, dir: Direction) -> bool {
        if !self.started || self.game_over {
            return false;
        }
        if dir == self.direction.opposite() {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Advance game time by `elapsed_ms`. Returns true when a movement step
    /// was performed.
    ///
    /// Effect countdowns drain every call; movement happens once the
    /// accumulated time crosses the latched step interval.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.started || self.game_over {
            return false;
        }

        self.effects.tick(elapsed_ms);

        self.step_timer_ms += elapsed_ms;
        if self.step_timer_ms >= self.scheduled_step_ms {
            self.step_timer_ms -= self.scheduled_step_ms;
            self.step();
            // The next window picks up any interval change from this step's
            // pickups or from effect expiry.
            self.scheduled_step_ms = self.step_interval_ms();
            return true;
        }

        false
    }

    /// One movement step: advance, apple check, self-collision, power-ups.
    pub(crate) fn step(&mut self) {
        self.snake.advance(self.direction);

        self.check_apple();

        // GoThroughSelf suppresses the self-collision check entirely.
        if !self.effects.is_active(PowerUpKind::GoThroughSelf) && self.snake.hits_self() {
            self.game_over = true;
            return;
        }

        self.check_power_ups();
    }

    fn check_apple(&mut self) {
        if self.snake.head() != self.apple {
            return;
        }
        self.snake.grow();
        let points = if self.effects.is_active(PowerUpKind::DoublePoints) {
            2
        } else {
            1
        };
        self.add_points(points);
        // Respawn anywhere on the grid; overlap with the snake is legal.
        self.apple = self.rng.next_cell();
    }

    fn check_power_ups(&mut self) {
        let head = self.snake.head();
        // At most one pickup per step, even if several overlap the head.
        let Some(index) = self.power_ups.iter().position(|p| p.pos == head) else {
            return;
        };
        let collected = self.power_ups.remove(index);
        self.effects.activate(collected.kind);
        self.spawn_power_up();
    }

    fn spawn_power_up(&mut self) {
        let power_up = self.spawner.spawn(&mut self.rng);
        let _ = self.power_ups.try_push(power_up);
    }

    /// The single place the score changes; keeps the high score monotonic.
    fn add_points(&mut self, points: u32) {
        self.apples_eaten += points;
        if self.apples_eaten > self.highest_score {
            self.highest_score = self.apples_eaten;
        }
    }

    /// Fill a reusable snapshot for the render/HUD collaborators.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.segments.clear();
        for &seg in self.snake.segments() {
            let _ = out.segments.try_push(seg);
        }
        out.apple = self.apple;
        out.power_ups.clear();
        for &p in self.power_ups.iter() {
            let _ = out.power_ups.try_push(p);
        }
        out.score = self.apples_eaten;
        out.high_score = self.highest_score;
        out.started = self.started;
        out.game_over = self.game_over;
        for kind in POWER_UP_KINDS {
            out.effect_secs[kind.slot()] = self.effects.remaining_secs(kind);
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    // Scenario setup hooks; tests only.

    #[cfg(test)]
    pub(crate) fn set_snake_segments(&mut self, positions: &[Position]) {
        self.snake.set_segments(positions);
    }

    #[cfg(test)]
    pub(crate) fn set_direction(&mut self, dir: Direction) {
        self.direction = dir;
    }

    #[cfg(test)]
    pub(crate) fn place_apple(&mut self, pos: Position) {
        self.apple = pos;
    }

    #[cfg(test)]
    pub(crate) fn set_power_ups(&mut self, power_ups: &[PowerUp]) {
        self.power_ups.clear();
        for &p in power_ups {
            let _ = self.power_ups.try_push(p);
        }
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.apples_eaten = score;
        if score > self.highest_score {
            self.highest_score = score;
        }
    }

    #[cfg(test)]
    pub(crate) fn effects_mut(&mut self) -> &mut ActiveEffects {
        &mut self.effects
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
