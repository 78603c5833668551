//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Draws full frames on entry/resize and diffs against the previous frame
//! otherwise, emitting only changed cells.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::render::Rgb;
use crate::term::fb::{CellStyle, FrameBuffer};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let needs_full = match &self.last {
            Some(prev) => prev.width() != fb.width() || prev.height() != fb.height(),
            None => true,
        };

        if needs_full {
            self.full_redraw(fb)?;
        } else {
            let prev = self.last.as_ref().unwrap();
            let mut queued = false;
            for y in 0..fb.height() {
                for x in 0..fb.width() {
                    let cur = fb.get(x, y).unwrap();
                    if prev.get(x, y) != Some(cur) {
                        self.stdout.queue(cursor::MoveTo(x, y))?;
                        queue_style(&mut self.stdout, cur.style)?;
                        self.stdout.queue(Print(cur.ch))?;
                        queued = true;
                    }
                }
            }
            if queued {
                self.stdout.flush()?;
            }
        }

        self.last = Some(fb.clone());
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap();
                queue_style(&mut self.stdout, cell.style)?;
                self.stdout.queue(Print(cell.ch))?;
            }
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn queue_style(out: &mut io::Stdout, style: CellStyle) -> Result<()> {
    // Attribute reset clears colors on some terminals, so it must come first.
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    } else if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    } else {
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
