use ggez::graphics::{self, Color};

use crate::grid::Position;

/// Target the game draws onto: a background fill plus square cells.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_cell(&mut self, position: Position, size: i32, color: Color);
}

/// Capability shared by the entities that show up on screen.
pub trait Drawable {
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S);
}

impl Surface for graphics::Canvas {
    /// Repaints the canvas' screen area. A canvas made with
    /// `Canvas::from_frame(ctx, color)` is already cleared, so a canvas
    /// without screen coordinates keeps that fill.
    fn clear(&mut self, color: Color) {
        if let Some(screen) = self.screen_coordinates() {
            self.draw(
                &graphics::Quad,
                graphics::DrawParam::default().dest_rect(screen).color(color),
            );
        }
    }

    fn fill_cell(&mut self, position: Position, size: i32, color: Color) {
        let rect = graphics::Rect::new_i32(position.x, position.y, size, size);
        self.draw(
            &graphics::Quad,
            graphics::DrawParam::default().dest_rect(rect).color(color),
        );
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum DrawCall {
        Clear(Color),
        Cell(Position, i32, Color),
    }

    /// Surface that records every call instead of drawing it.
    #[derive(Default)]
    pub struct RecordingSurface {
        pub calls: Vec<DrawCall>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, color: Color) {
            self.calls.push(DrawCall::Clear(color));
        }

        fn fill_cell(&mut self, position: Position, size: i32, color: Color) {
            self.calls.push(DrawCall::Cell(position, size, color));
        }
    }
}
