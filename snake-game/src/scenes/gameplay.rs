use tetra::graphics::mesh::Mesh;
use tetra::graphics::text::Text;
use tetra::graphics::{self, DrawParams};
use tetra::input::{self, Key};
use tetra::math::Vec2;
use tetra::Context;

use snake_core::grid::{GRID_BLOCK_SIZE, LOGICAL_HEIGHT, LOGICAL_WIDTH};
use snake_core::{Direction, EffectSink, GameplayState, GridConfig};

use crate::assets::{Assets, AudioBank, Fonts};
use crate::render::{
    build_cell_mesh, build_grid_mesh, world_to_screen, BLIP_BLUE, CANVAS_BG, SNAKE_RED, TAIL_RED,
    TEXT_WHITE,
};
use crate::scenes::start_screen::{draw_centered, StartScreenScene};
use crate::scenes::{Scene, Trans};

const SCORE_MARGIN: f32 = 40.0;

/// Bridges the simulation's fire-and-forget effect hooks to the audio bank.
struct AudioSink<'a> {
    ctx: &'a mut Context,
    audio: &'a mut AudioBank,
}

impl EffectSink for AudioSink<'_> {
    fn music_started(&mut self) {
        self.audio.play_music(self.ctx);
    }

    fn blip_eaten(&mut self) {
        self.audio.play_eat_beep(self.ctx);
    }

    fn snake_crashed(&mut self) {
        self.audio.play_crash_boom(self.ctx);
    }
}

/// The playable scene: owns the simulation state and draws it.
pub struct GameplayScene {
    state: GameplayState,

    // Meshes are built lazily on the first render since building needs the
    // graphics context.
    grid_mesh: Option<Mesh>,
    cell_mesh: Option<Mesh>,

    score_label_text: Text,
    score_value_text: Text,
    last_drawn_score: Option<usize>,
    game_over_text: Text,
    restart_text: Text,
    paused_text: Text,
}

impl GameplayScene {
    pub fn new(fonts: &Fonts) -> GameplayScene {
        GameplayScene {
            state: GameplayState::new(GridConfig::default()),
            grid_mesh: None,
            cell_mesh: None,
            score_label_text: Text::new("SCORE", fonts.body.clone()),
            score_value_text: Text::new("0", fonts.body.clone()),
            last_drawn_score: None,
            game_over_text: Text::new("GAME OVER", fonts.heading.clone()),
            restart_text: Text::new("Press <Enter> to restart.", fonts.body.clone()),
            paused_text: Text::new("GAME PAUSED", fonts.heading.clone()),
        }
    }

    fn draw_playfield(&mut self, ctx: &mut Context) -> tetra::Result {
        if self.grid_mesh.is_none() {
            self.grid_mesh = Some(build_grid_mesh(ctx, self.state.grid())?);
        }
        if self.cell_mesh.is_none() {
            self.cell_mesh = Some(build_cell_mesh(ctx)?);
        }

        if let Some(grid_mesh) = &self.grid_mesh {
            grid_mesh.draw(ctx, DrawParams::new());
        }

        if let Some(cell_mesh) = &self.cell_mesh {
            // Blip: a half-size square centered in its cell.
            let blip_pos = world_to_screen(self.state.blip());
            let quarter = GRID_BLOCK_SIZE as f32 / 4.0;
            cell_mesh.draw(
                ctx,
                DrawParams::new()
                    .position(blip_pos + Vec2::new(quarter, quarter))
                    .scale(Vec2::new(0.5, 0.5))
                    .color(BLIP_BLUE),
            );

            cell_mesh.draw(
                ctx,
                DrawParams::new()
                    .position(world_to_screen(self.state.head()))
                    .color(SNAKE_RED),
            );

            for part in self.state.parts() {
                cell_mesh.draw(
                    ctx,
                    DrawParams::new()
                        .position(world_to_screen(part.pos))
                        .color(TAIL_RED),
                );
            }
        }

        Ok(())
    }

    fn draw_score(&mut self, ctx: &mut Context) {
        let score = self.state.score();
        if self.last_drawn_score != Some(score) {
            self.last_drawn_score = Some(score);
            self.score_value_text.set_content(score.to_string());
        }

        let label_width = self
            .score_label_text
            .get_bounds(ctx)
            .map(|bounds| bounds.width)
            .unwrap_or_default();

        let label_x = LOGICAL_WIDTH as f32 - label_width - SCORE_MARGIN;
        self.score_label_text.draw(
            ctx,
            DrawParams::new()
                .position(Vec2::new(label_x, 0.0))
                .color(TEXT_WHITE),
        );
        self.score_value_text.draw(
            ctx,
            DrawParams::new()
                .position(Vec2::new(label_x + label_width + 5.0, 0.0))
                .color(TEXT_WHITE),
        );
    }

    fn draw_overlays(&mut self, ctx: &mut Context) {
        let center = Vec2::new(LOGICAL_WIDTH as f32 / 2.0, LOGICAL_HEIGHT as f32 / 2.0);

        if self.state.is_game_over() {
            draw_centered(ctx, &mut self.game_over_text, center, TEXT_WHITE);

            let banner_height = self
                .game_over_text
                .get_bounds(ctx)
                .map(|bounds| bounds.height)
                .unwrap_or_default();
            draw_centered(
                ctx,
                &mut self.restart_text,
                center + Vec2::new(0.0, banner_height),
                TEXT_WHITE,
            );
        } else if self.state.is_paused() {
            draw_centered(ctx, &mut self.paused_text, center, TEXT_WHITE);
        }
    }
}

impl Scene for GameplayScene {
    fn reset(&mut self) {
        // A fresh game starts paused; Space begins play.
        self.state.reset();
    }

    fn handle_input(&mut self, ctx: &mut Context, assets: &mut Assets) -> tetra::Result<Trans> {
        if input::is_key_pressed(ctx, Key::Escape) {
            assets.audio.stop_music();
            return Ok(Trans::Switch(Box::new(StartScreenScene::new(
                &assets.fonts,
            ))));
        }

        if input::is_key_pressed(ctx, Key::Space) && !self.state.is_game_over() {
            self.state.toggle_pause();
        }

        if !self.state.is_paused() {
            if input::is_key_pressed(ctx, Key::W) || input::is_key_pressed(ctx, Key::Up) {
                self.state.enqueue_direction(Direction::North);
            }
            if input::is_key_pressed(ctx, Key::A) || input::is_key_pressed(ctx, Key::Left) {
                self.state.enqueue_direction(Direction::West);
            }
            if input::is_key_pressed(ctx, Key::S) || input::is_key_pressed(ctx, Key::Down) {
                self.state.enqueue_direction(Direction::South);
            }
            if input::is_key_pressed(ctx, Key::D) || input::is_key_pressed(ctx, Key::Right) {
                self.state.enqueue_direction(Direction::East);
            }
        }

        if self.state.is_game_over() && input::is_key_pressed(ctx, Key::Enter) {
            self.state.reset();
            self.state.set_paused(false);
        }

        Ok(Trans::None)
    }

    fn update(
        &mut self,
        ctx: &mut Context,
        assets: &mut Assets,
        _simulation_time_elapsed_s: f64,
        dt_s: f32,
    ) -> tetra::Result {
        let mut sink = AudioSink {
            ctx,
            audio: &mut assets.audio,
        };
        self.state.step(dt_s, &mut sink);

        Ok(())
    }

    fn render(&mut self, ctx: &mut Context, _assets: &mut Assets) -> tetra::Result {
        graphics::clear(ctx, CANVAS_BG);

        self.draw_playfield(ctx)?;
        self.draw_score(ctx);
        self.draw_overlays(ctx);

        Ok(())
    }
}
