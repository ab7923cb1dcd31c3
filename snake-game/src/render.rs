use tetra::graphics::mesh::{GeometryBuilder, Mesh, ShapeStyle};
use tetra::graphics::{Color, Rectangle};
use tetra::math::Vec2;
use tetra::Context;

use snake_core::grid::{GRID_BLOCK_SIZE, LOGICAL_HEIGHT};
use snake_core::{GridConfig, GridPos};

pub const CANVAS_BG: Color = Color::rgb(0.157, 0.157, 0.157);
pub const GRID_BORDER: Color = Color::rgb(0.235, 0.235, 0.235);
pub const GRID_FILL: Color = Color::rgb(0.157, 0.157, 0.157);
pub const BLIP_BLUE: Color = Color::rgb(0.204, 0.596, 0.859);
pub const SNAKE_RED: Color = Color::rgb(0.671, 0.275, 0.259);
pub const TAIL_RED: Color = Color::rgb(0.604, 0.247, 0.231);
pub const TEXT_WHITE: Color = Color::WHITE;
pub const BLINK_YELLOW: Color = Color::rgb(0.769, 0.627, 0.012);

/// Maps a grid-cell position to the top-left corner of its cell in logical
/// screen pixels. The grid origin is bottom-left, the screen origin top-left,
/// so the vertical axis is flipped.
pub fn world_to_screen(pos: GridPos) -> Vec2<f32> {
    let x = (pos.x * GRID_BLOCK_SIZE) as f32;
    let y = (LOGICAL_HEIGHT - (pos.y + 1) * GRID_BLOCK_SIZE) as f32;
    Vec2::new(x, y)
}

/// Builds the playfield backdrop once: a bordered rectangle per cell, baked
/// into a single mesh so rendering it is one draw call per frame.
pub fn build_grid_mesh(ctx: &mut Context, grid: GridConfig) -> tetra::Result<Mesh> {
    let block = GRID_BLOCK_SIZE as f32;
    let border = 1.0;

    let mut builder = GeometryBuilder::new();
    for row in 0..grid.y_grids {
        for col in 0..grid.x_grids {
            let x = col as f32 * block;
            let y = row as f32 * block;

            builder.set_color(GRID_BORDER);
            builder.rectangle(ShapeStyle::Fill, Rectangle::new(x, y, block, block))?;

            builder.set_color(GRID_FILL);
            builder.rectangle(
                ShapeStyle::Fill,
                Rectangle::new(
                    x + border,
                    y + border,
                    block - 2.0 * border,
                    block - 2.0 * border,
                ),
            )?;
        }
    }

    builder.build_mesh(ctx)
}

/// A single filled cell-sized square, tinted and positioned per draw.
pub fn build_cell_mesh(ctx: &mut Context) -> tetra::Result<Mesh> {
    let block = GRID_BLOCK_SIZE as f32;
    Mesh::rectangle(ctx, ShapeStyle::Fill, Rectangle::new(0.0, 0.0, block, block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_core::grid::{LOGICAL_WIDTH, X_GRIDS, Y_GRIDS};

    #[test]
    fn origin_maps_to_bottom_left() {
        let screen = world_to_screen(GridPos::new(0, 0));
        assert_eq!(screen.x, 0.0);
        assert_eq!(screen.y, (LOGICAL_HEIGHT - GRID_BLOCK_SIZE) as f32);
    }

    #[test]
    fn top_right_cell_maps_to_top_right() {
        let screen = world_to_screen(GridPos::new(X_GRIDS - 1, Y_GRIDS - 1));
        assert_eq!(screen.x, (LOGICAL_WIDTH - GRID_BLOCK_SIZE) as f32);
        assert_eq!(screen.y, 0.0);
    }

    #[test]
    fn north_moves_up_the_screen() {
        let low = world_to_screen(GridPos::new(3, 4));
        let high = world_to_screen(GridPos::new(3, 5));
        assert!(high.y < low.y);
        assert_eq!(low.y - high.y, GRID_BLOCK_SIZE as f32);
    }
}
