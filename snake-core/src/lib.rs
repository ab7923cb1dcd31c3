pub mod grid;
pub mod input_buffer;
pub mod rng;
pub mod simulation;
pub mod timestep;

pub mod prelude {
    pub use crate::grid::{Direction, GridConfig, GridPos};
    pub use crate::simulation::{EffectSink, GameplayState};
    pub use crate::timestep::FixedTimestep;
}

pub use grid::Direction;
pub use grid::GridConfig;
pub use grid::GridPos;
pub use input_buffer::InputQueue;
pub use rng::Lcg;
pub use simulation::EffectSink;
pub use simulation::GameplayState;
pub use simulation::MAX_TAIL_LENGTH;
pub use timestep::FixedTimestep;
