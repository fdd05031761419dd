use crate::surface::{for_each_disc_pixel, Rgb, Surface};
use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) ch: char,
    pub(crate) fg: Color,
    pub(crate) bg: Color,
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

pub(crate) struct CellBuffer {
    pub(crate) w: u16,
    pub(crate) h: u16,
    pub(crate) cells: Vec<Cell>,
}

impl CellBuffer {
    pub(crate) fn new(w: u16, h: u16) -> Self {
        Self {
            w,
            h,
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
        }
    }
    pub(crate) fn idx(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.w as usize) + (x as usize)
    }
    pub(crate) fn set(&mut self, x: u16, y: u16, c: Cell) {
        if x < self.w && y < self.h {
            let i = self.idx(x, y);
            self.cells[i] = c;
        }
    }
}

/// Braille dot canvas: every terminal cell holds 2x4 dots.
pub(crate) struct PixelCanvas {
    pub(crate) w: u32,
    pub(crate) h: u32,
    pub(crate) bg: Rgb,
    pub(crate) px: Vec<Rgb>,
}

impl PixelCanvas {
    pub(crate) fn new(w: u32, h: u32) -> Self {
        Self {
            w,
            h,
            bg: Rgb::BLACK,
            px: vec![Rgb::BLACK; (w as usize) * (h as usize)],
        }
    }
    pub(crate) fn idx(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.w as usize) + (x as usize)
    }
    fn inked(&self, x: u32, y: u32) -> Option<Rgb> {
        let p = self.px[self.idx(x, y)];
        (p != self.bg).then_some(p)
    }
}

impl Surface for PixelCanvas {
    fn width(&self) -> u32 {
        self.w
    }

    fn height(&self) -> u32 {
        self.h
    }

    fn clear(&mut self, color: Rgb) {
        self.bg = color;
        self.px.fill(color);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, diameter: f64, color: Rgb) {
        let w = self.w;
        let px = &mut self.px;
        for_each_disc_pixel(cx, cy, diameter, self.w, self.h, |x, y| {
            px[(y as usize) * (w as usize) + (x as usize)] = color;
        });
    }
}

pub(crate) struct Terminal {
    pub(crate) out: io::Stdout,
    pub(crate) cols: u16,
    pub(crate) rows: u16,
    /// Bottom rows kept free of the canvas for the status line.
    pub(crate) reserved_rows: u16,
    pub(crate) prev: CellBuffer,
    pub(crate) cur: CellBuffer,
    pub(crate) canvas: PixelCanvas,
    full_redraw: bool,
}

impl Terminal {
    pub(crate) fn begin(title: &str, reserved_rows: u16) -> anyhow::Result<Self> {
        let mut out = io::stdout();
        execute!(
            out,
            EnterAlternateScreen,
            SetTitle(title),
            cursor::Hide,
            DisableLineWrap,
            terminal::Clear(ClearType::All)
        )?;
        terminal::enable_raw_mode()?;

        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out,
            cols,
            rows,
            reserved_rows,
            prev: CellBuffer::new(cols, rows),
            cur: CellBuffer::new(cols, rows),
            canvas: canvas_for(cols, rows, reserved_rows),
            full_redraw: true,
        })
    }

    pub(crate) fn end(&mut self) -> anyhow::Result<()> {
        queue!(
            self.out,
            BeginSynchronizedUpdate,
            ResetColor,
            Clear(ClearType::All),
            cursor::Show,
            EnableLineWrap,
            EndSynchronizedUpdate,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Rebuild buffers when the terminal size changed. Returns true if it did.
    pub(crate) fn resize_if_needed(&mut self) -> anyhow::Result<bool> {
        let (c, r) = terminal::size()?;
        if c == self.cols && r == self.rows {
            return Ok(false);
        }
        self.resize(c, r);
        Ok(true)
    }

    pub(crate) fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.prev = CellBuffer::new(cols, rows);
        self.cur = CellBuffer::new(cols, rows);
        self.canvas = canvas_for(cols, rows, self.reserved_rows);
        self.full_redraw = true;
    }

    pub(crate) fn set_reserved_rows(&mut self, reserved_rows: u16) {
        if reserved_rows != self.reserved_rows {
            self.reserved_rows = reserved_rows;
            self.resize(self.cols, self.rows);
        }
    }

    pub(crate) fn present(&mut self) -> anyhow::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;
        if self.full_redraw {
            queue!(self.out, ResetColor, Clear(ClearType::All))?;
        }

        let mut last_fg = None;
        let mut last_bg = None;

        for y in 0..self.rows {
            for x in 0..self.cols {
                let i = self.cur.idx(x, y);
                let c = self.cur.cells[i];
                if !self.full_redraw && c == self.prev.cells[i] {
                    continue;
                }

                queue!(self.out, cursor::MoveTo(x, y))?;

                if last_fg != Some(c.fg) {
                    queue!(self.out, SetForegroundColor(c.fg))?;
                    last_fg = Some(c.fg);
                }
                if last_bg != Some(c.bg) {
                    queue!(self.out, SetBackgroundColor(c.bg))?;
                    last_bg = Some(c.bg);
                }

                queue!(self.out, Print(c.ch))?;
            }
        }

        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()?;
        self.prev.cells.copy_from_slice(&self.cur.cells);
        self.full_redraw = false;
        Ok(())
    }
}

fn canvas_for(cols: u16, rows: u16, reserved_rows: u16) -> PixelCanvas {
    PixelCanvas::new(cols as u32 * 2, rows.saturating_sub(reserved_rows) as u32 * 4)
}

/* -----------------------------
   Braille encoding: 2×4 dots -> U+2800..U+28FF
------------------------------ */

fn braille_bit(dx: u32, dy: u32) -> u8 {
    // Dot mapping:
    // (0,0)=1 (0,1)=2 (0,2)=4 (0,3)=64
    // (1,0)=8 (1,1)=16 (1,2)=32 (1,3)=128
    match (dx, dy) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0x00,
    }
}

/// Encode the canvas into braille cells starting at the top-left of `out`.
/// A cell's foreground is the mean color of its inked dots.
pub(crate) fn canvas_to_cells(canvas: &PixelCanvas, out: &mut CellBuffer, enable_color: bool) {
    let cols = canvas.w.div_ceil(2).min(out.w as u32);
    let rows = canvas.h.div_ceil(4).min(out.h as u32);
    let bg = canvas.bg.to_color();

    for cy in 0..rows {
        for cx in 0..cols {
            let px0 = cx * 2;
            let py0 = cy * 4;

            let mut mask: u8 = 0;
            let mut sum_r: u32 = 0;
            let mut sum_g: u32 = 0;
            let mut sum_b: u32 = 0;
            let mut ink_count: u32 = 0;

            for dy in 0..4 {
                for dx in 0..2 {
                    let x = px0 + dx;
                    let y = py0 + dy;
                    if x >= canvas.w || y >= canvas.h {
                        continue;
                    }
                    if let Some(p) = canvas.inked(x, y) {
                        mask |= braille_bit(dx, dy);
                        sum_r += p.r as u32;
                        sum_g += p.g as u32;
                        sum_b += p.b as u32;
                        ink_count += 1;
                    }
                }
            }

            let ch = char::from_u32(0x2800 + (mask as u32)).unwrap_or(' ');

            let fg = if enable_color && ink_count > 0 {
                Rgb::new(
                    (sum_r / ink_count) as u8,
                    (sum_g / ink_count) as u8,
                    (sum_b / ink_count) as u8,
                )
                .to_color()
            } else {
                Color::White
            };

            out.set(cx as u16, cy as u16, Cell { ch, fg, bg });
        }
    }
}

pub(crate) fn draw_text(buf: &mut CellBuffer, x: u16, y: u16, s: &str, fg: Color, bg: Color) {
    for (i, ch) in s.chars().enumerate() {
        let xx = x.saturating_add(i as u16);
        if xx >= buf.w {
            break;
        }
        buf.set(xx, y, Cell { ch, fg, bg });
    }
}

/// Fill row `y` with `line`, padding with blanks to the full width.
pub(crate) fn draw_status_line(buf: &mut CellBuffer, y: u16, line: &str, fg: Color, bg: Color) {
    for x in 0..buf.w {
        buf.set(x, y, Cell { ch: ' ', fg, bg });
    }
    draw_text(buf, 0, y, line, fg, bg);
}
