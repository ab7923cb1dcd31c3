mod assets;
mod render;
mod scenes;

use anyhow::Result;
use log::info;
use tetra::time::Timestep;
use tetra::ContextBuilder;

use snake_core::grid::{LOGICAL_HEIGHT, LOGICAL_WIDTH, SIMULATION_FPS};

use crate::scenes::SceneManager;

fn main() -> Result<()> {
    env_logger::init();

    info!(
        "starting snake: {}x{} logical, {} Hz simulation",
        LOGICAL_WIDTH, LOGICAL_HEIGHT, SIMULATION_FPS
    );

    // The engine timestep stays variable; the scene manager drains frame
    // deltas into fixed simulation steps itself. Vsync paces rendering.
    ContextBuilder::new("Snake Game", LOGICAL_WIDTH, LOGICAL_HEIGHT)
        .resizable(true)
        .show_mouse(true)
        .vsync(true)
        .timestep(Timestep::Variable)
        .build()?
        .run(SceneManager::new)?;

    Ok(())
}
