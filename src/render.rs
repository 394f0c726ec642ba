use std::io::{self, Write};

use crate::grid::Grid;

/// Character emitted for a live cell.
const ALIVE_CHAR: char = 'X';
/// Character emitted for a dead cell.
const DEAD_CHAR: char = '.';

/// Serialize the current generation as one line of text per row.
///
/// Row-major, top to bottom, left to right; a pure transform of the grid
/// state, so two calls on an unmodified grid yield identical output. The
/// caller owns the output channel.
pub fn render_lines(grid: &Grid) -> Vec<String> {
    let columns = grid.columns() as usize;
    let mut lines = Vec::with_capacity(grid.rows() as usize);
    for row in grid.cells().chunks(columns) {
        let line: String = row
            .iter()
            .map(|&cell| if cell != 0 { ALIVE_CHAR } else { DEAD_CHAR })
            .collect();
        lines.push(line);
    }
    lines
}

/// Full-width separator line printed between frames.
pub fn separator(columns: u32) -> String {
    "-".repeat(columns as usize)
}

/// Write one frame (all rows plus the separator) to the given sink.
pub fn write_frame<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    for line in render_lines(grid) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", separator(grid.columns()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_grid() {
        let grid = Grid::create(3, 5).unwrap();
        let lines = render_lines(&grid);
        assert_eq!(lines, vec!["....."; 3]);
    }

    #[test]
    fn test_render_marks_live_cells() {
        let mut grid = Grid::create(3, 4).unwrap();
        grid.set(0, 0, true);
        grid.set(1, 2, true);
        grid.set(2, 3, true);
        let lines = render_lines(&grid);
        assert_eq!(lines, vec!["X...", "..X.", "...X"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut grid = Grid::create(4, 4).unwrap();
        grid.set(1, 1, true);
        grid.set(2, 2, true);
        assert_eq!(render_lines(&grid), render_lines(&grid));
    }

    #[test]
    fn test_render_charset_and_shape() {
        let mut grid = Grid::create(20, 100).unwrap();
        grid.set(7, 42, true);
        let lines = render_lines(&grid);
        assert_eq!(lines.len(), 20);
        for line in &lines {
            assert_eq!(line.len(), 100);
            assert!(line.chars().all(|ch| ch == 'X' || ch == '.'));
        }
    }

    #[test]
    fn test_write_frame_appends_separator() {
        let mut grid = Grid::create(2, 3).unwrap();
        grid.set(0, 1, true);
        let mut out = Vec::new();
        write_frame(&mut out, &grid).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, ".X.\n...\n---\n");
    }
}
