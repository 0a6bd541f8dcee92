/// ASCII canvas that rasterizes overlay draw commands for the terminal
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use devlay_core::{DrawCommand, Polygon, Rect, Rgba, ScreenPoint, TextMetrics};
use std::io::Write;

/// Canvas pixels per terminal row. Cells are roughly twice as tall as they
/// are wide, so each row covers two pixel rows and each column one.
pub const CELL_ASPECT: i32 = 2;

const FILL_CHAR: char = '.';
const TILE_CHAR: char = '+';
const OUTLINE_CHAR: char = '*';
const RECT_CHAR: char = '#';

/// Text measured in canvas pixels: one column per character, one row tall.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMetrics;

impl TextMetrics for CellMetrics {
    fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32
    }

    fn text_height(&self) -> i32 {
        CELL_ASPECT
    }
}

/// Character and colour buffers for a terminal-sized canvas
pub struct AsciiCanvas {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    color_buffer: Vec<Color>,
}

impl AsciiCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            char_buffer: vec![' '; size],
            color_buffer: vec![Color::Reset; size],
        }
    }

    /// Size in terminal cells.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Size in canvas pixels, the space draw commands are expressed in.
    pub fn pixel_size(&self) -> (i32, i32) {
        (self.width as i32, self.height as i32 * CELL_ASPECT)
    }

    pub fn clear(&mut self) {
        self.char_buffer.fill(' ');
        self.color_buffer.fill(Color::Reset);
    }

    pub fn char_at(&self, column: usize, row: usize) -> Option<char> {
        (column < self.width && row < self.height)
            .then(|| self.char_buffer[row * self.width + column])
    }

    pub fn apply(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            match command {
                DrawCommand::Polygon {
                    points,
                    stroke,
                    fill,
                } => {
                    if let Some(fill) = fill {
                        self.fill_polygon(points, *fill);
                    }
                    let ch = if fill.is_some() { TILE_CHAR } else { OUTLINE_CHAR };
                    self.stroke_polygon(points, ch, *stroke);
                }
                DrawCommand::Text { at, text, color } => self.put_text(*at, text, *color),
                DrawCommand::Rect { rect, stroke, fill } => {
                    if let Some(fill) = fill {
                        self.fill_rect(*rect, *fill);
                    }
                    if let Some(stroke) = stroke {
                        self.stroke_rect(*rect, *stroke);
                    }
                }
            }
        }
    }

    fn cell_index(&self, p: ScreenPoint) -> Option<usize> {
        let column = usize::try_from(p.x).ok()?;
        let row = usize::try_from(p.y.div_euclid(CELL_ASPECT)).ok()?;
        (column < self.width && row < self.height).then_some(row * self.width + column)
    }

    fn plot(&mut self, p: ScreenPoint, ch: char, color: Rgba) {
        if let Some(i) = self.cell_index(p) {
            self.char_buffer[i] = ch;
            self.color_buffer[i] = to_color(color);
        }
    }

    /// Bresenham line between two canvas pixels.
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, ch: char, color: Rgba) {
        let (mut x, mut y) = (from.x, from.y);
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;

        // Off-canvas pixels are walked but not plotted.
        loop {
            self.plot(ScreenPoint::new(x, y), ch, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn stroke_polygon(&mut self, points: &[ScreenPoint], ch: char, color: Rgba) {
        let polygon = Polygon::new(points.to_vec());
        for (a, b) in polygon.edges() {
            self.draw_line(a, b, ch, color);
        }
    }

    /// Mark empty cells whose centre falls inside the polygon.
    fn fill_polygon(&mut self, points: &[ScreenPoint], color: Rgba) {
        let polygon = Polygon::new(points.to_vec());
        let Some(bounds) = polygon.bounds() else {
            return;
        };
        let first_row = bounds.y.div_euclid(CELL_ASPECT).max(0);
        let last_row = (bounds.y + bounds.height).div_euclid(CELL_ASPECT);
        let first_column = bounds.x.max(0);
        let last_column = bounds.x + bounds.width;
        for row in first_row..=last_row.min(self.height as i32 - 1) {
            for column in first_column..=last_column.min(self.width as i32 - 1) {
                let centre = ScreenPoint::new(column, row * CELL_ASPECT + CELL_ASPECT / 2);
                if !polygon.contains(centre) {
                    continue;
                }
                if let Some(i) = self.cell_index(centre) {
                    if self.char_buffer[i] == ' ' {
                        self.char_buffer[i] = FILL_CHAR;
                        self.color_buffer[i] = to_color(color);
                    }
                }
            }
        }
    }

    /// Text sits on the row just above its baseline.
    fn put_text(&mut self, at: ScreenPoint, text: &str, color: Rgba) {
        let y = at.y - 1;
        for (offset, ch) in text.chars().enumerate() {
            self.plot(ScreenPoint::new(at.x + offset as i32, y), ch, color);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgba) {
        let (left, top) = (rect.x, rect.y);
        let (right, bottom) = (rect.x + rect.width - 1, rect.y + rect.height - 1);
        let corners = [
            ScreenPoint::new(left, top),
            ScreenPoint::new(right, top),
            ScreenPoint::new(right, bottom),
            ScreenPoint::new(left, bottom),
        ];
        self.stroke_polygon(&corners, RECT_CHAR, color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        for y in (rect.y..rect.y + rect.height).step_by(CELL_ASPECT as usize) {
            for x in rect.x..rect.x + rect.width {
                let p = ScreenPoint::new(x, y);
                if let Some(i) = self.cell_index(p) {
                    if self.char_buffer[i] == ' ' {
                        self.plot(p, FILL_CHAR, color);
                    }
                }
            }
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = y * self.width + x;
                writer.queue(SetForegroundColor(self.color_buffer[idx]))?;
                writer.queue(Print(self.char_buffer[idx]))?;
            }
            writer.queue(Print("\r\n"))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    /// The canvas as plain text, one line per row with trailing blanks
    /// trimmed.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.char_buffer.chunks(self.width.max(1)) {
            let line: String = row.iter().collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

fn to_color(color: Rgba) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}
