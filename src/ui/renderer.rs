use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::model::engine;
use crate::model::grid::Grid;

/// What the interior cells display: alive/dead markers, or the per-cell live
/// neighbor count (the original's debugging view).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Cells,
    NeighborCounts,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Cells => ViewMode::NeighborCounts,
            ViewMode::NeighborCounts => ViewMode::Cells,
        }
    }
}

/// One glyph per grid cell. The border ring renders as the frame
/// (`+` corners, `-` top/bottom, `|` sides); interior cells render as the
/// marker glyph, a blank, or a count digit depending on the view mode.
fn glyph_at(grid: &Grid, row: u16, col: u16, view: ViewMode, alive_glyph: char) -> char {
    let last_row = grid.height() - 1;
    let last_col = grid.width() - 1;
    if (row == 0 || row == last_row) && (col == 0 || col == last_col) {
        '+'
    } else if row == 0 || row == last_row {
        '-'
    } else if col == 0 || col == last_col {
        '|'
    } else {
        match view {
            ViewMode::Cells => {
                if grid.get(row, col) {
                    alive_glyph
                } else {
                    ' '
                }
            }
            ViewMode::NeighborCounts => {
                let n = engine::count_neighbors(grid, row, col).unwrap_or(0);
                char::from(b'0' + n)
            }
        }
    }
}

/// Renders the grid as text, one line per grid row, glyphs separated by a
/// space. Used by headless mode and by tests; the TUI widget paints the same
/// glyphs into the terminal buffer.
pub fn ascii_frame(grid: &Grid, view: ViewMode, alive_glyph: char) -> String {
    let mut out = String::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if col > 0 {
                out.push(' ');
            }
            out.push(glyph_at(grid, row, col, view, alive_glyph));
        }
        out.push('\n');
    }
    out
}

pub struct GridWidget<'a> {
    grid: &'a Grid,
    view: ViewMode,
    alive_glyph: char,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a Grid, view: ViewMode, alive_glyph: char) -> Self {
        Self {
            grid,
            view,
            alive_glyph,
        }
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..self.grid.height().min(area.height) {
            for col in 0..self.grid.width() {
                // Space the columns out like the text renderer does.
                let x = u32::from(area.x) + u32::from(col) * 2;
                let y = area.y + row;
                if x >= u32::from(area.right()) || y >= area.bottom() {
                    continue;
                }
                let glyph = glyph_at(self.grid, row, col, self.view, self.alive_glyph);
                let cell = buf.get_mut(x as u16, y);
                cell.set_char(glyph);
                cell.set_fg(if self.grid.is_border(row, col) {
                    Color::DarkGray
                } else if self.view == ViewMode::NeighborCounts {
                    Color::Cyan
                } else {
                    Color::Green
                });
            }
        }
    }
}
