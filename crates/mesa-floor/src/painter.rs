#![forbid(unsafe_code)]

//! Character-cell rasterizer for the floor plan.
//!
//! Floor coordinates are in pixels on the 600x420 canvas; the painter
//! scales them onto a character grid at a fixed 8x12 pixels per cell, so
//! the full floor maps to 75x35 cells. Table boxes are drawn with
//! box-drawing characters (double-line borders for occupied tables), chain
//! edges with Bresenham-traced dot runs plus arrowhead barbs.
//!
//! The painter accumulates into a row-major `char` buffer and hands back
//! finished lines; it does no terminal I/O itself.

use crate::chain::Edge;
use crate::layout::{FLOOR_HEIGHT, FLOOR_WIDTH, OVERFLOW_BASE_Y, OVERFLOW_COLS, OVERFLOW_GAP_Y, PRESET_ANCHORS, Point, TABLE_H};
use mesa_core::Table;
use unicode_width::UnicodeWidthChar;

/// Horizontal pixels per character cell.
const CELL_W_PX: i32 = 8;
/// Vertical pixels per character cell.
const CELL_H_PX: i32 = 12;
/// Table box width in cells (80px wide).
const TABLE_COLS: i32 = 10;
/// Table box height in cells (60px tall): border, three text rows, border.
const TABLE_ROWS: i32 = 5;

/// Glyph used for chain edge shafts and barbs.
const EDGE_DOT: char = '·';

/// A character grid the floor plan is rasterized into.
#[derive(Debug, Clone)]
pub struct FloorPainter {
    width: u16,
    height: u16,
    /// Row-major cell buffer; `' '` = empty.
    cells: Vec<char>,
}

impl FloorPainter {
    /// Create an empty grid of the given cell dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width as usize * height as usize],
        }
    }

    /// Create a grid sized for `table_count` tables.
    ///
    /// Covers the full 600x420 floor; grows downward when the overflow
    /// grid spills past the canvas bottom.
    pub fn for_floor(table_count: usize) -> Self {
        let width = (FLOOR_WIDTH / CELL_W_PX) as u16;
        let mut floor_px = FLOOR_HEIGHT;
        if table_count > PRESET_ANCHORS.len() {
            let rows = (table_count - PRESET_ANCHORS.len() - 1) / OVERFLOW_COLS;
            let bottom = OVERFLOW_BASE_Y + rows as i32 * OVERFLOW_GAP_Y + TABLE_H + 10;
            floor_px = floor_px.max(bottom);
        }
        let height = (floor_px as u32).div_ceil(CELL_H_PX as u32) as u16;
        Self::new(width, height)
    }

    /// Grid dimensions in cells.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Clear the grid.
    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// Character at a cell; `None` outside the grid.
    pub fn get(&self, cx: i32, cy: i32) -> Option<char> {
        self.index(cx, cy).map(|idx| self.cells[idx])
    }

    /// Finished lines, top to bottom, trailing blanks trimmed.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height as usize)
            .map(|row| {
                let start = row * self.width as usize;
                let line: String = self.cells[start..start + self.width as usize]
                    .iter()
                    .collect();
                line.trim_end().to_string()
            })
            .collect()
    }

    /// Draw one table's glyph box at its floor position.
    ///
    /// Free tables get single-line borders, occupied ones double-line.
    /// Interior rows: centered id, `cap:N`, and the party label truncated
    /// to the interior width.
    pub fn draw_table(&mut self, table: &Table, at: Point) {
        let cx = at.x / CELL_W_PX;
        let cy = at.y / CELL_H_PX;
        let (tl, tr, bl, br, hor, ver) = if table.occupied {
            ('╔', '╗', '╚', '╝', '═', '║')
        } else {
            ('┌', '┐', '└', '┘', '─', '│')
        };

        self.put(cx, cy, tl);
        self.put(cx + TABLE_COLS - 1, cy, tr);
        self.put(cx, cy + TABLE_ROWS - 1, bl);
        self.put(cx + TABLE_COLS - 1, cy + TABLE_ROWS - 1, br);
        for dx in 1..TABLE_COLS - 1 {
            self.put(cx + dx, cy, hor);
            self.put(cx + dx, cy + TABLE_ROWS - 1, hor);
        }
        for dy in 1..TABLE_ROWS - 1 {
            self.put(cx, cy + dy, ver);
            self.put(cx + TABLE_COLS - 1, cy + dy, ver);
        }

        let interior = (TABLE_COLS - 2) as usize;
        let id_text = table.id.to_string();
        let pad = interior.saturating_sub(id_text.len()) / 2;
        self.text(cx + 1 + pad as i32, cy + 1, &id_text);
        self.text(cx + 1, cy + 2, &truncate_label(&format!("cap:{}", table.capacity), interior));
        if table.occupied {
            self.text(cx + 1, cy + 3, &truncate_label(&table.party, interior));
        }
    }

    /// Trace a chain edge: shaft from source to destination, then the two
    /// arrowhead barbs at the destination end.
    ///
    /// Edge dots never overwrite table glyphs; an edge crossing a box
    /// leaves the box intact, like arrows painted over the sketch.
    pub fn draw_edge(&mut self, edge: &Edge) {
        let from = cell_of(edge.from);
        let to = cell_of(edge.to);
        self.trace(from, to);
        for barb in edge.barbs() {
            self.trace(cell_of(barb), to);
        }
    }

    /// Bresenham line of soft dots between two cells.
    fn trace(&mut self, a: (i32, i32), b: (i32, i32)) {
        let (x0, y0) = a;
        let (x1, y1) = b;
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx: i32 = if x0 < x1 { 1 } else { -1 };
        let sy: i32 = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let mut cx = x0;
        let mut cy = y0;

        loop {
            self.put_soft(cx, cy, EDGE_DOT);

            if cx == x1 && cy == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                if cx == x1 {
                    break;
                }
                err += dy;
                cx += sx;
            }
            if e2 <= dx {
                if cy == y1 {
                    break;
                }
                err += dx;
                cy += sy;
            }
        }
    }

    /// Write a string starting at a cell, clipped at the grid edge.
    fn text(&mut self, cx: i32, cy: i32, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            self.put(cx + i as i32, cy, ch);
        }
    }

    fn put(&mut self, cx: i32, cy: i32, ch: char) {
        if let Some(idx) = self.index(cx, cy) {
            self.cells[idx] = ch;
        }
    }

    /// Write only into empty cells.
    fn put_soft(&mut self, cx: i32, cy: i32, ch: char) {
        if let Some(idx) = self.index(cx, cy) {
            if self.cells[idx] == ' ' {
                self.cells[idx] = ch;
            }
        }
    }

    fn index(&self, cx: i32, cy: i32) -> Option<usize> {
        if cx < 0 || cy < 0 || cx >= self.width as i32 || cy >= self.height as i32 {
            return None;
        }
        Some(cy as usize * self.width as usize + cx as usize)
    }
}

/// Floor pixel point to grid cell.
fn cell_of(p: Point) -> (i32, i32) {
    (p.x / CELL_W_PX, p.y / CELL_H_PX)
}

/// Truncate a label to a display-cell budget, ellipsizing long names.
fn truncate_label(s: &str, max_cols: usize) -> String {
    let width: usize = s.chars().filter_map(UnicodeWidthChar::width).sum();
    if width <= max_cols {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_cols.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::{FloorPainter, cell_of, truncate_label};
    use crate::chain::edges;
    use crate::layout::{Point, positions};
    use mesa_core::TableRegistry;

    #[test]
    fn default_grid_covers_the_floor() {
        let p = FloorPainter::for_floor(5);
        assert_eq!(p.size(), (75, 35));
    }

    #[test]
    fn overflow_rows_grow_the_grid() {
        let five = FloorPainter::for_floor(5);
        let fourteen = FloorPainter::for_floor(14);
        assert!(fourteen.size().1 > five.size().1);
        assert_eq!(fourteen.size().0, five.size().0);
    }

    #[test]
    fn free_table_uses_single_borders() {
        let mut reg = TableRegistry::new();
        reg.create(4).unwrap();
        let mut p = FloorPainter::for_floor(1);
        p.draw_table(&reg.tables()[0], Point::new(0, 0));
        assert_eq!(p.get(0, 0), Some('┌'));
        assert_eq!(p.get(9, 0), Some('┐'));
        assert_eq!(p.get(0, 4), Some('└'));
        assert_eq!(p.get(9, 4), Some('┘'));
        // Centered id and capacity line.
        assert_eq!(p.get(4, 1), Some('1'));
        let caps: String = (1..7).filter_map(|x| p.get(x, 2)).collect();
        assert_eq!(caps.trim_end(), "cap:4");
    }

    #[test]
    fn occupied_table_uses_double_borders_and_party() {
        let mut reg = TableRegistry::new();
        reg.create(4).unwrap();
        reg.seat(1, "Alice").unwrap();
        let mut p = FloorPainter::for_floor(1);
        p.draw_table(&reg.tables()[0], Point::new(0, 0));
        assert_eq!(p.get(0, 0), Some('╔'));
        let party: String = (1..6).filter_map(|x| p.get(x, 3)).collect();
        assert_eq!(party, "Alice");
    }

    #[test]
    fn edge_dots_never_overwrite_boxes() {
        let mut reg = TableRegistry::new();
        for cap in [2, 4] {
            reg.create(cap).unwrap();
        }
        let pos = positions(2);
        let mut p = FloorPainter::for_floor(2);
        for (t, at) in reg.tables().iter().zip(&pos) {
            p.draw_table(t, *at);
        }
        let before_corner = p.get(pos[0].x / 8, pos[0].y / 12);
        for e in edges(&pos, true) {
            p.draw_edge(&e);
        }
        assert_eq!(p.get(pos[0].x / 8, pos[0].y / 12), before_corner);
    }

    #[test]
    fn edge_leaves_a_dot_trail() {
        let mut p = FloorPainter::new(40, 10);
        let e = crate::chain::Edge {
            from: Point::new(0, 48),
            to: Point::new(160, 48),
        };
        p.draw_edge(&e);
        let (x0, y) = cell_of(Point::new(0, 48));
        let (x1, _) = cell_of(Point::new(160, 48));
        for x in x0..=x1 {
            assert_eq!(p.get(x, y), Some('·'));
        }
    }

    #[test]
    fn truncation_preserves_short_labels() {
        assert_eq!(truncate_label("Alice", 8), "Alice");
        assert_eq!(truncate_label("exactly8", 8), "exactly8");
    }

    #[test]
    fn truncation_ellipsizes_long_labels() {
        let out = truncate_label("Wolfeschlegelstein", 8);
        assert_eq!(out, "Wolfesc…");
    }

    #[test]
    fn clear_resets_the_grid() {
        let mut p = FloorPainter::new(10, 5);
        let e = crate::chain::Edge {
            from: Point::new(0, 0),
            to: Point::new(40, 0),
        };
        p.draw_edge(&e);
        p.clear();
        assert!(p.lines().iter().all(String::is_empty));
    }
}
