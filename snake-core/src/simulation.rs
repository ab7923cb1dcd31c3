use log::error;

use crate::grid::{Direction, GridConfig, GridPos};
use crate::input_buffer::InputQueue;
use crate::rng::Lcg;

/// Hard cap on tail segments. The grid bounds the maximum possible score well
/// below this, so running out of room is a programming error, not a
/// recoverable condition.
pub const MAX_TAIL_LENGTH: usize = 1000;

/// How much the step interval shrinks every time a blip is eaten. There is no
/// enforced floor; at an unreachably high score the interval would go
/// non-positive. Kept as-is.
const STEP_INTERVAL_DECREMENT_S: f32 = 0.0005;

const INITIAL_STEP_INTERVAL_S: f32 = 0.1;

/// One tail segment. The direction it was facing when it occupied the cell is
/// retained for visual use; correctness only depends on the position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SnakePart {
    pub pos: GridPos,
    pub direction: Direction,
}

/// Fire-and-forget hooks for side effects that accompany simulation events.
/// The simulation never consults a result; an implementation that does
/// nothing is always valid.
#[allow(unused_variables)]
pub trait EffectSink {
    /// The first tick after a reset has run; background music should start.
    fn music_started(&mut self) {}

    /// The head landed on the blip this tick.
    fn blip_eaten(&mut self) {}

    /// The snake hit itself or a wall this tick.
    fn snake_crashed(&mut self) {}
}

/// An [`EffectSink`] that ignores every event.
pub struct NoEffects;

impl EffectSink for NoEffects {}

/// The snake simulation: head, tail, blip, timers and flags, advanced exactly
/// one grid cell per elapsed step interval. Owns its own input queue and RNG
/// so no ambient state is involved; callers mutate it only through
/// [`GameplayState::enqueue_direction`], [`GameplayState::step`] and the
/// pause/reset operations.
#[derive(Debug, Clone)]
pub struct GameplayState {
    grid: GridConfig,

    is_starting: bool,
    game_over: bool,
    paused: bool,

    head: GridPos,
    parts: Vec<SnakePart>,
    current_direction: Direction,
    direction_locked: bool,

    time_until_grid_jump_s: f32,
    step_interval_s: f32,

    blip: GridPos,

    inputs: InputQueue,
    rng: Lcg,
}

impl GameplayState {
    pub fn new(grid: GridConfig) -> Self {
        let mut state = GameplayState {
            grid,
            is_starting: true,
            game_over: false,
            paused: true,
            head: GridPos::new(0, 0),
            parts: Vec::with_capacity(MAX_TAIL_LENGTH),
            current_direction: Direction::North,
            direction_locked: false,
            time_until_grid_jump_s: INITIAL_STEP_INTERVAL_S,
            step_interval_s: INITIAL_STEP_INTERVAL_S,
            blip: GridPos::new(0, 0),
            inputs: InputQueue::new(),
            rng: Lcg::new(),
        };
        state.reset();
        state
    }

    /// Returns the state to the start-of-game configuration: head centered
    /// horizontally in the upper-middle region, facing North, no tail, blip
    /// at the grid center, paused. The RNG deliberately keeps its state
    /// across resets so consecutive games see different blip sequences.
    pub fn reset(&mut self) {
        self.inputs.clear();

        self.is_starting = true;
        self.paused = true;
        self.game_over = false;

        self.head = GridPos::new(self.grid.x_grids / 2, self.grid.y_grids / 4);
        self.current_direction = Direction::North;
        self.direction_locked = false;
        self.parts.clear();

        self.step_interval_s = INITIAL_STEP_INTERVAL_S;
        self.time_until_grid_jump_s = self.step_interval_s;

        self.blip = GridPos::new(self.grid.x_grids / 2, self.grid.y_grids / 2);
    }

    /// Queues a directional intent for the next grid jump. Called once per
    /// key-press edge, never per held key.
    pub fn enqueue_direction(&mut self, dir: Direction) {
        self.inputs.enqueue(dir);
    }

    /// Advances the simulation by one fixed tick of `dt_s` seconds.
    ///
    /// The countdown to the next grid jump runs every tick; the snake only
    /// moves (one whole cell, never partially) on the tick where the
    /// countdown reaches zero. Frozen entirely while paused or after game
    /// over.
    pub fn step(&mut self, dt_s: f32, effects: &mut dyn EffectSink) {
        if self.is_starting {
            self.is_starting = false;
            effects.music_started();
        }

        if self.game_over || self.paused {
            return;
        }

        self.time_until_grid_jump_s -= dt_s;

        if self.time_until_grid_jump_s <= 0.0 {
            self.grid_jump(effects);
            self.direction_locked = false;
            self.time_until_grid_jump_s = self.step_interval_s;
        }
    }

    /// One whole-cell move: direction intake, blip collision, tail shift,
    /// head advance, crash check. Order matters throughout.
    fn grid_jump(&mut self, effects: &mut dyn EffectSink) {
        let proposed = self.inputs.dequeue();

        // Honor at most one turn per jump. A 180-degree flip is rejected
        // outright since it would collide with the segment behind the head.
        if !self.direction_locked {
            if let Some(proposed) = proposed {
                if proposed != self.current_direction.opposite() {
                    self.current_direction = proposed;
                    self.direction_locked = true;
                }
            }
        }

        if self.head == self.blip {
            effects.blip_eaten();
            self.grow_tail();
            self.respawn_blip();
            // Every blip makes the game slightly faster, with no floor.
            self.step_interval_s -= STEP_INTERVAL_DECREMENT_S;
        }

        // Shift from the highest index down so each segment reads its
        // predecessor's pre-shift value. Segment 0 inherits the head.
        for i in (0..self.parts.len()).rev() {
            self.parts[i] = if i == 0 {
                SnakePart {
                    pos: self.head,
                    direction: self.current_direction,
                }
            } else {
                self.parts[i - 1]
            };
        }

        let (dx, dy) = self.current_direction.offset();
        self.head.x += dx;
        self.head.y += dy;

        let crashed = self.parts.iter().any(|part| part.pos == self.head)
            || !self.grid.contains(self.head);
        if crashed {
            self.game_over = true;
            effects.snake_crashed();
        }
    }

    fn grow_tail(&mut self) {
        // Duplicate the last segment (or the head, for the first blip); the
        // shift that follows immediately gives the new segment its real
        // trailing position.
        let new_part = match self.parts.last() {
            Some(last) => *last,
            None => SnakePart {
                pos: self.head,
                direction: self.current_direction,
            },
        };

        if self.parts.len() >= MAX_TAIL_LENGTH {
            error!(
                "snake tail must never get this long: {}",
                self.parts.len() + 1
            );
        }
        assert!(
            self.parts.len() < MAX_TAIL_LENGTH,
            "snake tail exceeded capacity"
        );

        self.parts.push(new_part);
    }

    /// Rolls a fresh blip cell, x then y. The roll is independent of snake
    /// occupancy, so the blip can land under the body; kept as-is.
    fn respawn_blip(&mut self) {
        let x = self.rng.next_in_range(self.grid.x_grids as u32);
        self.blip.x = x as i32;
        let y = self.rng.next_in_range(self.grid.y_grids as u32);
        self.blip.y = y as i32;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    // Read-only surface for the renderer, all in grid-cell coordinates.

    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    pub fn head(&self) -> GridPos {
        self.head
    }

    pub fn parts(&self) -> &[SnakePart] {
        &self.parts
    }

    /// The current score: number of active tail segments.
    pub fn score(&self) -> usize {
        self.parts.len()
    }

    pub fn blip(&self) -> GridPos {
        self.blip
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn current_direction(&self) -> Direction {
        self.current_direction
    }

    pub fn step_interval_s(&self) -> f32 {
        self.step_interval_s
    }
}
