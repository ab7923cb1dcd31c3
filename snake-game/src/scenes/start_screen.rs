use tetra::graphics::text::Text;
use tetra::graphics::{self, Color, DrawParams};
use tetra::input::{self, Key};
use tetra::math::Vec2;
use tetra::Context;

use snake_core::grid::{LOGICAL_HEIGHT, LOGICAL_WIDTH};

use crate::assets::{Assets, Fonts};
use crate::render::{BLINK_YELLOW, CANVAS_BG, TEXT_WHITE};
use crate::scenes::gameplay::GameplayScene;
use crate::scenes::{Scene, Trans};

const BLINK_INTERVAL_S: f32 = 0.15;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum MenuOption {
    StartGame,
    ExitGame,
}

impl MenuOption {
    fn other(self) -> MenuOption {
        match self {
            MenuOption::StartGame => MenuOption::ExitGame,
            MenuOption::ExitGame => MenuOption::StartGame,
        }
    }
}

/// The title menu: a blinking highlight over Start / Exit.
pub struct StartScreenScene {
    title_text: Text,
    start_text: Text,
    exit_text: Text,

    current_option: MenuOption,
    blink_on: bool,
    blink_remaining_s: f32,
}

impl StartScreenScene {
    pub fn new(fonts: &Fonts) -> StartScreenScene {
        StartScreenScene {
            title_text: Text::new("Snake Game", fonts.title.clone()),
            start_text: Text::new("Start", fonts.menu.clone()),
            exit_text: Text::new("Exit", fonts.menu.clone()),
            current_option: MenuOption::StartGame,
            blink_on: false,
            blink_remaining_s: BLINK_INTERVAL_S,
        }
    }

    fn option_color(&self, option: MenuOption) -> Color {
        if option == self.current_option && self.blink_on {
            BLINK_YELLOW
        } else {
            TEXT_WHITE
        }
    }
}

impl Scene for StartScreenScene {
    fn reset(&mut self) {
        self.current_option = MenuOption::StartGame;
        self.blink_on = false;
        self.blink_remaining_s = BLINK_INTERVAL_S;
    }

    fn handle_input(&mut self, ctx: &mut Context, assets: &mut Assets) -> tetra::Result<Trans> {
        if input::is_key_pressed(ctx, Key::Enter) {
            return Ok(match self.current_option {
                MenuOption::StartGame => {
                    Trans::Switch(Box::new(GameplayScene::new(&assets.fonts)))
                }
                MenuOption::ExitGame => Trans::Quit,
            });
        }

        if input::is_key_pressed(ctx, Key::A) || input::is_key_pressed(ctx, Key::D) {
            assets.audio.play_menu_beep(ctx);
            self.current_option = self.current_option.other();
        }

        Ok(Trans::None)
    }

    fn update(
        &mut self,
        _ctx: &mut Context,
        _assets: &mut Assets,
        _simulation_time_elapsed_s: f64,
        dt_s: f32,
    ) -> tetra::Result {
        self.blink_remaining_s -= dt_s;
        if self.blink_remaining_s <= 0.0 {
            self.blink_remaining_s = BLINK_INTERVAL_S;
            self.blink_on = !self.blink_on;
        }

        Ok(())
    }

    fn render(&mut self, ctx: &mut Context, _assets: &mut Assets) -> tetra::Result {
        graphics::clear(ctx, CANVAS_BG);

        let width = LOGICAL_WIDTH as f32;
        let height = LOGICAL_HEIGHT as f32;

        draw_centered(
            ctx,
            &mut self.title_text,
            Vec2::new(width / 2.0, height * 0.25),
            TEXT_WHITE,
        );

        let start_color = self.option_color(MenuOption::StartGame);
        draw_centered(
            ctx,
            &mut self.start_text,
            Vec2::new(width * 0.25, height * 0.75),
            start_color,
        );

        let exit_color = self.option_color(MenuOption::ExitGame);
        draw_centered(
            ctx,
            &mut self.exit_text,
            Vec2::new(width * 0.75, height * 0.75),
            exit_color,
        );

        Ok(())
    }
}

/// Draws `text` with its bounding box centered on `center`.
pub(crate) fn draw_centered(ctx: &mut Context, text: &mut Text, center: Vec2<f32>, color: Color) {
    let size = text
        .get_bounds(ctx)
        .map(|bounds| Vec2::new(bounds.width, bounds.height))
        .unwrap_or_default();

    text.draw(
        ctx,
        DrawParams::new()
            .position(center - size / 2.0)
            .color(color),
    );
}
