//! GameView: places the engine's text frame onto a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::Cell;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// How the glyphs of a frame should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// The playing field; glyphs are coloured by the cell they stand for.
    Field,
    /// Free text such as the game over summary; drawn in one style.
    Message,
}

/// Maps frames to a centred, coloured framebuffer.
#[derive(Debug, Clone)]
pub struct GameView {
    border: Style,
    player: Style,
    item: Style,
    enemy: Style,
    text: Style,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            border: Style::fg(Rgb::new(150, 150, 160)),
            player: Style::fg(Rgb::new(100, 220, 120)).bold(),
            item: Style::fg(Rgb::new(240, 220, 80)).bold(),
            enemy: Style::fg(Rgb::new(220, 80, 80)).bold(),
            text: Style::fg(Rgb::new(255, 255, 255)).bold(),
        }
    }
}

impl GameView {
    /// Render a frame into an existing framebuffer, resizing it to the viewport.
    ///
    /// The frame is centred; anything that does not fit is clipped.
    pub fn render_into(&self, frame: &str, kind: FrameKind, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let frame_w = frame.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let frame_h = frame.lines().count();
        let start_x = viewport.width.saturating_sub(clamp_u16(frame_w)) / 2;
        let start_y = viewport.height.saturating_sub(clamp_u16(frame_h)) / 2;

        for (dy, line) in frame.lines().enumerate() {
            let y = start_y.saturating_add(clamp_u16(dy));
            if y >= viewport.height {
                break;
            }
            for (dx, ch) in line.chars().enumerate() {
                let x = start_x.saturating_add(clamp_u16(dx));
                if x >= viewport.width {
                    break;
                }
                fb.put_char(x, y, ch, self.style_for(ch, kind));
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &str, kind: FrameKind, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, kind, viewport, &mut fb);
        fb
    }

    fn style_for(&self, ch: char, kind: FrameKind) -> Style {
        if kind == FrameKind::Message {
            return self.text;
        }
        match Cell::from_glyph(ch) {
            Some(Cell::Border(_)) => self.border,
            Some(Cell::Player) => self.player,
            Some(Cell::Item) => self.item,
            Some(Cell::Enemy) => self.enemy,
            Some(Cell::Empty) | None => Style::default(),
        }
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: &str = "+---+\n|0$X|\n+---+\n";

    #[test]
    fn frame_is_centred() {
        let fb = GameView::default().render(FRAME, FrameKind::Field, Viewport::new(9, 5));

        // 5x3 frame in a 9x5 viewport: offset (2, 1).
        assert_eq!(fb.row_text(0), "         ");
        assert_eq!(fb.row_text(1), "  +---+  ");
        assert_eq!(fb.row_text(2), "  |0$X|  ");
        assert_eq!(fb.row_text(3), "  +---+  ");
    }

    #[test]
    fn field_glyphs_are_coloured_by_cell() {
        let view = GameView::default();
        let fb = view.render(FRAME, FrameKind::Field, Viewport::new(5, 3));

        assert_eq!(fb.get(1, 1).map(|g| g.style), Some(view.player));
        assert_eq!(fb.get(2, 1).map(|g| g.style), Some(view.item));
        assert_eq!(fb.get(3, 1).map(|g| g.style), Some(view.enemy));
        assert_eq!(fb.get(0, 0).map(|g| g.style), Some(view.border));
    }

    #[test]
    fn message_uses_text_style() {
        let view = GameView::default();
        let fb = view.render("Your score: 10", FrameKind::Message, Viewport::new(14, 1));

        assert_eq!(fb.row_text(0), "Your score: 10");
        assert_eq!(fb.get(13, 0).map(|g| g.style), Some(view.text));
    }

    #[test]
    fn oversized_frame_is_clipped() {
        let fb = GameView::default().render(FRAME, FrameKind::Field, Viewport::new(3, 2));
        assert_eq!(fb.row_text(0), "+--");
        assert_eq!(fb.row_text(1), "|0$");
    }
}
