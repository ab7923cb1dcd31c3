pub mod gameplay;
pub mod start_screen;

use log::debug;
use tetra::graphics::scaling::{ScalingMode, ScreenScaler};
use tetra::graphics::{self, Color};
use tetra::input::{self, Key};
use tetra::{time, window, Context, Event, State};

use snake_core::grid::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
use snake_core::FixedTimestep;

use crate::assets::Assets;
use start_screen::StartScreenScene;

/// The transition a scene requests from its input handling.
pub enum Trans {
    /// Continue as normal.
    None,

    /// Swap to the provided scene; it is reset before it takes over.
    Switch(Box<dyn Scene>),

    /// Quit the game.
    Quit,
}

/// A screen of the game: the start menu or the gameplay itself.
///
/// `update` runs at the fixed simulation rate, zero or more times per frame;
/// `handle_input` and `render` run exactly once per frame.
pub trait Scene {
    /// Returns the scene to its initial state. Called when the scene becomes
    /// current.
    fn reset(&mut self);

    fn handle_input(&mut self, ctx: &mut Context, assets: &mut Assets) -> tetra::Result<Trans>;

    fn update(
        &mut self,
        ctx: &mut Context,
        assets: &mut Assets,
        simulation_time_elapsed_s: f64,
        dt_s: f32,
    ) -> tetra::Result;

    fn render(&mut self, ctx: &mut Context, assets: &mut Assets) -> tetra::Result;
}

/// Owns the current scene and the pending switch, drives input, the fixed
/// timestep and rendering in that order each frame, and letterboxes the
/// logical canvas into the window.
pub struct SceneManager {
    current: Box<dyn Scene>,
    next: Option<Box<dyn Scene>>,
    assets: Assets,
    timestep: FixedTimestep,
    scaler: ScreenScaler,
    fullscreen: bool,
    debug_logging: bool,
    debug_counter_s: f32,
}

impl SceneManager {
    pub fn new(ctx: &mut Context) -> tetra::Result<SceneManager> {
        let assets = Assets::load(ctx)?;
        let mut start_screen = StartScreenScene::new(&assets.fonts);
        start_screen.reset();

        Ok(SceneManager {
            current: Box::new(start_screen),
            next: None,
            assets,
            timestep: FixedTimestep::new(),
            scaler: ScreenScaler::with_window_size(
                ctx,
                LOGICAL_WIDTH,
                LOGICAL_HEIGHT,
                ScalingMode::ShowAll,
            )?,
            fullscreen: false,
            debug_logging: false,
            debug_counter_s: 0.0,
        })
    }

    fn handle_global_keys(&mut self, ctx: &mut Context) -> tetra::Result {
        if input::is_key_pressed(ctx, Key::F) {
            self.fullscreen = !self.fullscreen;
            window::set_fullscreen(ctx, self.fullscreen)?;
        }

        if input::is_key_pressed(ctx, Key::F1) {
            self.debug_logging = !self.debug_logging;
        }

        Ok(())
    }

    fn tick_debug_counter(&mut self, ctx: &mut Context, frame_time_s: f32) {
        self.debug_counter_s += frame_time_s;
        if self.debug_counter_s < 1.0 {
            return;
        }
        self.debug_counter_s = 0.0;

        let fps = time::get_fps(ctx);
        window::set_title(ctx, &format!("Snake Game (FPS: {:.2})", fps));

        if self.debug_logging {
            debug!(
                "fps: {:.1}, ms/frame: {:.4}, sim elapsed: {:.2}s, alpha: {:.2}",
                fps,
                1000.0 / fps,
                self.timestep.simulation_elapsed_s(),
                self.timestep.alpha(),
            );
        }
    }
}

impl State for SceneManager {
    fn update(&mut self, ctx: &mut Context) -> tetra::Result {
        self.handle_global_keys(ctx)?;

        match self.current.handle_input(ctx, &mut self.assets)? {
            Trans::None => {}
            Trans::Switch(scene) => self.next = Some(scene),
            Trans::Quit => window::quit(ctx),
        }

        if let Some(mut next) = self.next.take() {
            next.reset();
            self.current = next;
        }

        // Drain the accumulator into fixed simulation steps, then the draw
        // callback renders the resulting state once.
        let frame_time_s = time::get_delta_time(ctx).as_secs_f32();
        let current = &mut self.current;
        let assets = &mut self.assets;
        let mut tick_result = Ok(());
        self.timestep.advance(frame_time_s, |elapsed_s, dt_s| {
            if tick_result.is_ok() {
                tick_result = current.update(ctx, assets, elapsed_s, dt_s);
            }
        });
        tick_result?;

        self.tick_debug_counter(ctx, frame_time_s);

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> tetra::Result {
        graphics::set_canvas(ctx, self.scaler.canvas());
        self.current.render(ctx, &mut self.assets)?;
        graphics::reset_canvas(ctx);

        graphics::clear(ctx, Color::BLACK);
        self.scaler.draw(ctx);

        Ok(())
    }

    fn event(&mut self, _ctx: &mut Context, event: Event) -> tetra::Result {
        if let Event::Resized { width, height } = event {
            self.scaler.set_outer_size(width, height);
        }

        Ok(())
    }
}
