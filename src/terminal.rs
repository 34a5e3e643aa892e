use crate::error::SketchError;
use crate::graphics::{Canvas, RenderTarget};
use crate::vertex::Vertex;
use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, warn};
use std::io::{self, Stdout, Write};

/// Upper half block: foreground paints the top pixel, background the bottom
const HALF_BLOCK: char = '\u{2580}';

/// Current terminal size as (cols, rows)
pub fn terminal_cells() -> Result<(u16, u16), SketchError> {
    let (cols, rows) = termsize::get()
        .map(|size| (size.cols, size.rows))
        .or_else(|| terminal::size().ok())
        .ok_or(SketchError::TerminalUnavailable)?;
    if cols == 0 || rows == 0 {
        return Err(SketchError::TerminalTooSmall { cols, rows });
    }
    Ok((cols, rows))
}

/// Canvas shown in the terminal, two pixels per character cell
pub struct TerminalSurface {
    out: Stdout,
    canvas: Canvas,
}

impl TerminalSurface {
    /// Takes over the terminal: alternate screen, raw mode, hidden cursor
    pub fn open() -> Result<Self, SketchError> {
        let (cols, rows) = terminal_cells()?;
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err.into());
        }
        debug!("terminal opened at {cols}x{rows} cells");
        Ok(TerminalSurface {
            out,
            canvas: Canvas::new(usize::from(cols), usize::from(rows) * 2),
        })
    }

    /// Matches the canvas to a new terminal size in cells
    pub fn resize(&mut self, cols: u16, rows: u16) {
        debug!("terminal resized to {cols}x{rows} cells");
        self.canvas.resize(usize::from(cols), usize::from(rows) * 2);
    }

    /// Writes the canvas to the terminal
    pub fn present(&mut self) -> io::Result<()> {
        let width = self.canvas.width();
        let mut last: Option<(Color, Color)> = None;

        for row in 0..self.canvas.height() / 2 {
            queue!(self.out, cursor::MoveTo(0, row as u16))?;
            for x in 0..width {
                let top = self.canvas.pixel(x, row * 2);
                let bottom = self.canvas.pixel(x, row * 2 + 1);
                if last != Some((top, bottom)) {
                    queue!(self.out, SetForegroundColor(top), SetBackgroundColor(bottom))?;
                    last = Some((top, bottom));
                }
                queue!(self.out, Print(HALF_BLOCK))?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Prints text lines over the top-left corner of the last frame
    pub fn overlay(&mut self, lines: &[String]) -> io::Result<()> {
        for (row, line) in lines.iter().enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(1, row as u16),
                SetForegroundColor(Color::White),
                SetBackgroundColor(Color::Black),
                Print(line)
            )?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Prints `text` in bold at the center of the screen
    pub fn banner(&mut self, text: &str) -> io::Result<()> {
        let cols = self.canvas.width();
        let rows = self.canvas.height() / 2;
        let x = cols.saturating_sub(text.chars().count()) / 2;
        queue!(
            self.out,
            cursor::MoveTo(x as u16, (rows / 2) as u16),
            SetForegroundColor(Color::White),
            SetBackgroundColor(Color::Black),
            SetAttribute(Attribute::Bold),
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        self.out.flush()
    }
}

impl RenderTarget for TerminalSurface {
    fn size(&self) -> (usize, usize) {
        self.canvas.size()
    }

    fn clear(&mut self, color: Color) {
        self.canvas.clear(color);
    }

    fn fill_polygon(&mut self, points: &[Vertex], color: Color) {
        self.canvas.fill_polygon(points, color);
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        let restored = execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen)
            .and_then(|_| terminal::disable_raw_mode());
        if let Err(err) = restored {
            warn!("failed to restore terminal: {err}");
        }
    }
}
