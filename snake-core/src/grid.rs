/// Logical render resolution the grid is derived from.
pub const LOGICAL_WIDTH: i32 = 1280;
pub const LOGICAL_HEIGHT: i32 = 720;

/// Side length of one grid cell in logical pixels. Must divide evenly into
/// `LOGICAL_WIDTH`.
pub const GRID_BLOCK_SIZE: i32 = 20;

pub const X_GRIDS: i32 = LOGICAL_WIDTH / GRID_BLOCK_SIZE;
pub const Y_GRIDS: i32 = LOGICAL_HEIGHT / GRID_BLOCK_SIZE;

/// Simulation rate, decoupled from the render rate.
pub const SIMULATION_FPS: f32 = 100.0;
pub const SIMULATION_DELTA_TIME_S: f32 = 1.0 / SIMULATION_FPS;

/// A position in grid-cell units. The origin is the bottom-left corner of the
/// playfield; the renderer is responsible for flipping the vertical axis.
///
/// Coordinates are signed so that an out-of-bounds head position can be
/// represented while the game-over check runs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        GridPos { x, y }
    }
}

/// The playfield dimensions in cells. Kept as a value rather than bare
/// constants so the simulation can be driven on a small grid in tests.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridConfig {
    pub x_grids: i32,
    pub y_grids: i32,
}

impl GridConfig {
    pub fn new(x_grids: i32, y_grids: i32) -> Self {
        GridConfig { x_grids, y_grids }
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.x < self.x_grids && pos.y >= 0 && pos.y < self.y_grids
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig::new(X_GRIDS, Y_GRIDS)
    }
}

/// A cardinal movement direction. "No input" is represented as
/// `Option::<Direction>::None` at the queue boundary rather than as a variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The 180-degree reverse. A single flip onto this direction is always
    /// rejected by the simulation since it would collide with the segment
    /// directly behind the head.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// One cell of movement in this direction. North is +y (grid origin is
    /// bottom-left).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }
}
