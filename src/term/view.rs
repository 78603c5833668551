//! SceneView: realizes the core's draw primitives on a terminal framebuffer.
//!
//! The core emits pixel-space primitives (one board cell = `BLOCK_PX` pixels);
//! this view scales them down to character cells, using 2 columns per board
//! cell to compensate for the terminal glyph aspect ratio. Pure (no I/O), so
//! it can be unit-tested.

use crate::core::GameSession;
use crate::render::{Rgb, RenderSink, BLOCK_PX};
use crate::term::fb::{CellStyle, FrameBuffer};
use crate::term::particles::ParticleField;
use crate::types::Phase;

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

/// Nominal scene size in terminal cells (board plus side panel).
const SCENE_COLS: u16 = 20 + 14;
const SCENE_ROWS: u16 = 20;

pub struct SceneView {
    fb: FrameBuffer,
    origin_x: u16,
    origin_y: u16,
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for SceneView {
    fn default() -> Self {
        Self {
            fb: FrameBuffer::new(0, 0),
            origin_x: 0,
            origin_y: 0,
            cell_w: 2,
        }
    }
}

impl SceneView {
    /// Render one frame: background particles (menu/credits only), then the
    /// session's own scene.
    pub fn render(
        &mut self,
        session: &GameSession,
        particles: &ParticleField,
        viewport: Viewport,
    ) -> &FrameBuffer {
        self.fb.resize(viewport.width, viewport.height);
        self.fb.clear();
        self.origin_x = viewport.width.saturating_sub(SCENE_COLS) / 2;
        self.origin_y = viewport.height.saturating_sub(SCENE_ROWS) / 2;

        if session.phase() != Phase::Game {
            particles.draw(self);
        }
        session.draw(self);
        &self.fb
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    fn to_col(&self, x: i32) -> i32 {
        self.origin_x as i32 + x * self.cell_w as i32 / BLOCK_PX
    }

    fn to_row(&self, y: i32) -> i32 {
        self.origin_y as i32 + y / BLOCK_PX
    }

    fn put(&mut self, col: i32, row: i32, ch: char, color: Rgb) {
        if col < 0 || row < 0 {
            return;
        }
        let style = CellStyle {
            fg: color,
            ..CellStyle::default()
        };
        self.fb.put_char(col as u16, row as u16, ch, style);
    }
}

impl RenderSink for SceneView {
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        let col = self.to_col(x);
        let row = self.to_row(y);
        let cols = (w * self.cell_w as i32 / BLOCK_PX).max(1);
        let rows = (h / BLOCK_PX).max(1);
        for dy in 0..rows {
            for dx in 0..cols {
                self.put(col + dx, row + dy, '█', color);
            }
        }
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let (c0, r0) = (self.to_col(x0), self.to_row(y0));
        let (c1, r1) = (self.to_col(x1), self.to_row(y1));
        let ch = if r0 == r1 {
            '─'
        } else if c0 == c1 {
            '│'
        } else {
            '·'
        };

        // Integer line walk; scenes only ever ask for short segments.
        let steps = (c1 - c0).abs().max((r1 - r0).abs()).max(1);
        for i in 0..=steps {
            let col = c0 + (c1 - c0) * i / steps;
            let row = r0 + (r1 - r0) * i / steps;
            self.put(col, row, ch, color);
        }
    }

    fn text(&mut self, x: i32, y: i32, s: &str, color: Rgb) {
        let col = self.to_col(x);
        let row = self.to_row(y);
        for (i, ch) in s.chars().enumerate() {
            self.put(col + i as i32, row, ch, color);
        }
    }

    fn circle(&mut self, cx: i32, cy: i32, _radius: i32, color: Rgb) {
        // One glyph is the best a character cell can do for a small circle.
        self.put(self.to_col(cx), self.to_row(cy), '•', color);
    }
}
