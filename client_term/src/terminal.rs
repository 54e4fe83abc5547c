use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, size, supports_keyboard_enhancement,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use game_core::Canvas;
use glam::Vec2;
use std::io::{self, stdout, Write};

/// A single cell in the terminal buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::White,
            bg: Color::Black,
        }
    }
}

fn rgb(color: game_core::Color) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Character grid that arena coordinates are scaled onto
pub struct Grid {
    width: u16,
    height: u16,
    scale: Vec2, // cells per arena unit
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: u16, height: u16, arena: Vec2) -> Self {
        Self {
            width,
            height,
            scale: Vec2::new(width as f32 / arena.x, height as f32 / arena.y),
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let idx = y as usize * self.width as usize + x as usize;
            self.cells[idx] = cell;
        }
    }

    fn to_cell(&self, pos: Vec2) -> (i32, i32) {
        let p = pos * self.scale;
        (p.x.floor() as i32, p.y.floor() as i32)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

impl Canvas for Grid {
    fn fill_rect(
        &mut self,
        pos: Vec2,
        size: Vec2,
        fill: game_core::Color,
        _line: game_core::Color,
    ) {
        let (x0, y0) = self.to_cell(pos);
        let end = (pos + size) * self.scale;
        // Always cover at least one cell so a small ball stays visible
        let x1 = (end.x.ceil() as i32).max(x0 + 1);
        let y1 = (end.y.ceil() as i32).max(y0 + 1);
        let cell = Cell {
            ch: ' ',
            fg: Color::White,
            bg: rgb(fill),
        };
        for y in y0..y1 {
            for x in x0..x1 {
                self.set(x, y, cell);
            }
        }
    }

    fn text(&mut self, text: &str, pos: Vec2, _size: f32, color: game_core::Color) {
        let (x, y) = self.to_cell(pos);
        for (i, ch) in text.chars().enumerate() {
            let cx = x + i as i32;
            let bg = u16::try_from(cx)
                .ok()
                .zip(u16::try_from(y).ok())
                .and_then(|(cx, cy)| self.get(cx, cy))
                .map_or(Color::Black, |cell| cell.bg);
            self.set(
                cx,
                y,
                Cell {
                    ch,
                    fg: rgb(color),
                    bg,
                },
            );
        }
    }
}

/// Raw-mode alternate screen, restored on drop
pub struct Terminal {
    enhanced_keys: bool,
}

impl Terminal {
    /// Initialize the terminal for drawing
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen, Hide)?;

        // Ask for key release events where the terminal supports it
        let enhanced_keys = supports_keyboard_enhancement().unwrap_or(false);
        if enhanced_keys {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        log::info!("terminal ready, key release events: {enhanced_keys}");

        Ok(Self { enhanced_keys })
    }

    /// Get terminal dimensions
    pub fn size(&self) -> io::Result<(u16, u16)> {
        size()
    }

    /// Render the entire grid to screen
    pub fn draw(&self, grid: &Grid) -> io::Result<()> {
        let mut out = stdout();
        for (y, row) in grid.rows().enumerate() {
            queue!(out, MoveTo(0, y as u16))?;
            for cell in row {
                queue!(
                    out,
                    SetForegroundColor(cell.fg),
                    SetBackgroundColor(cell.bg),
                    Print(cell.ch)
                )?;
            }
        }
        queue!(out, ResetColor)?;
        out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let mut out = stdout();
        if self.enhanced_keys {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(out, ResetColor, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
