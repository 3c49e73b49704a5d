//! Shared types and constants
//!
//! Pure data structures used by every layer (core logic, input mapping,
//! terminal rendering). Nothing here depends on another crate.
//!
//! # Board Dimensions
//!
//! The playfield mirrors the original 1300x750 window with 50px cells:
//!
//! - **Width**: 1300 units → 26 columns
//! - **Height**: 750 units → 15 rows
//! - All positions are multiples of `UNIT_SIZE`
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `BASE_STEP_MS` | 175 | Time between snake movement steps |
//! | `SPEED_UP_DIVISOR` | 2 | SpeedUp halves the step interval |
//! | `SPEED_UP_MS` | 5000 | SpeedUp effect window |
//! | `GO_THROUGH_SELF_MS` | 10000 | GoThroughSelf effect window |
//! | `DOUBLE_POINTS_MS` | 10000 | DoublePoints effect window |

/// Playfield width in units (pixels in the original window).
pub const SCREEN_WIDTH: i32 = 1300;

/// Playfield height in units.
pub const SCREEN_HEIGHT: i32 = 750;

/// Side length of one grid cell; every position is a multiple of this.
pub const UNIT_SIZE: i32 = 50;

/// Grid width in cells (26 columns).
pub const GRID_WIDTH: i32 = SCREEN_WIDTH / UNIT_SIZE;

/// Grid height in cells (15 rows).
pub const GRID_HEIGHT: i32 = SCREEN_HEIGHT / UNIT_SIZE;

/// Total cell count; upper bound for the snake's length.
pub const GAME_UNITS: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Base interval between movement steps (the original's timer delay).
pub const BASE_STEP_MS: u32 = 175;

/// SpeedUp divides the step interval by this while active.
pub const SPEED_UP_DIVISOR: u32 = 2;

/// SpeedUp effect window (5 seconds).
pub const SPEED_UP_MS: u32 = 5_000;

/// GoThroughSelf effect window (10 seconds).
pub const GO_THROUGH_SELF_MS: u32 = 10_000;

/// DoublePoints effect window (10 seconds).
pub const DOUBLE_POINTS_MS: u32 = 10_000;

/// Snake length at game start and after restart.
pub const INITIAL_BODY_PARTS: usize = 6;

/// Upper bound for concurrently placed power-ups.
///
/// Collected power-ups are replaced 1:1, so in practice the count stays at
/// one; the headroom only exists so the collection type never reallocates.
pub const MAX_POWER_UPS: usize = 4;

/// A grid-aligned position on the playfield.
///
/// Coordinates are unit-based like the original window coordinates: both
/// components are multiples of [`UNIT_SIZE`] and stay within
/// `[0, SCREEN_WIDTH) x [0, SCREEN_HEIGHT)` after wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move one unit in `dir` without wrapping.
    pub fn step(self, dir: Direction) -> Self {
        match dir {
            Direction::Up => Self::new(self.x, self.y - UNIT_SIZE),
            Direction::Down => Self::new(self.x, self.y + UNIT_SIZE),
            Direction::Left => Self::new(self.x - UNIT_SIZE, self.y),
            Direction::Right => Self::new(self.x + UNIT_SIZE, self.y),
        }
    }

    /// Apply screen-edge wraparound.
    ///
    /// Exiting one side re-enters from the opposite side: `x >= SCREEN_WIDTH`
    /// wraps to 0 and `x < 0` wraps to the rightmost column; same for `y`.
    pub fn wrap(self) -> Self {
        let mut p = self;
        if p.x >= SCREEN_WIDTH {
            p.x = 0;
        }
        if p.x < 0 {
            p.x = SCREEN_WIDTH - UNIT_SIZE;
        }
        if p.y >= SCREEN_HEIGHT {
            p.y = 0;
        }
        if p.y < 0 {
            p.y = SCREEN_HEIGHT - UNIT_SIZE;
        }
        p
    }

    /// Column index in `[0, GRID_WIDTH)`.
    pub fn col(self) -> i32 {
        self.x / UNIT_SIZE
    }

    /// Row index in `[0, GRID_HEIGHT)`.
    pub fn row(self) -> i32 {
        self.y / UNIT_SIZE
    }
}

/// The snake's heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The 180° reverse of this direction.
    ///
    /// Turning into the reverse of the current heading is rejected, since it
    /// would walk the head straight into the first body segment.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The three timed power-up kinds.
///
/// Spawn weights: SpeedUp 30%, GoThroughSelf 30%, DoublePoints 40%, with an
/// immediate-repeat veto against the previously spawned kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Halves the step interval for 5 seconds.
    SpeedUp,
    /// Suppresses self-collision for 10 seconds.
    GoThroughSelf,
    /// Apples count double for 10 seconds.
    DoublePoints,
}

/// All kinds, in effect-slot order.
pub const POWER_UP_KINDS: [PowerUpKind; 3] = [
    PowerUpKind::SpeedUp,
    PowerUpKind::GoThroughSelf,
    PowerUpKind::DoublePoints,
];

impl PowerUpKind {
    /// Effect window after collection, in milliseconds.
    pub fn duration_ms(&self) -> u32 {
        match self {
            PowerUpKind::SpeedUp => SPEED_UP_MS,
            PowerUpKind::GoThroughSelf => GO_THROUGH_SELF_MS,
            PowerUpKind::DoublePoints => DOUBLE_POINTS_MS,
        }
    }

    /// HUD label (the original's countdown texts).
    pub fn label(&self) -> &'static str {
        match self {
            PowerUpKind::SpeedUp => "Speed Up",
            PowerUpKind::GoThroughSelf => "Go Through Self",
            PowerUpKind::DoublePoints => "Double XP",
        }
    }

    /// Stable index into per-kind effect slots.
    pub fn slot(&self) -> usize {
        match self {
            PowerUpKind::SpeedUp => 0,
            PowerUpKind::GoThroughSelf => 1,
            PowerUpKind::DoublePoints => 2,
        }
    }
}

/// Logical game actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a heading change (ignored if it reverses the snake).
    Turn(Direction),
    /// Enter: start from the welcome screen or restart after game over.
    Confirm,
}
