// Copyright (C) 2020-2026 Andy Kurnia.

use super::{builder, grid};
use std::fmt::Write;

// a-z, then A-Z, then '+' for every column after that.
#[inline(always)]
fn col_label(c: usize) -> char {
    match c {
        0..26 => (b'a' + c as u8) as char,
        26..52 => (b'A' + (c - 26) as u8) as char,
        _ => '+',
    }
}

// letters separated by spaces, one line per row, blanks as spaces.
pub fn format_grid(grid: &grid::Grid) -> String {
    let mut s = String::new();
    for row in grid.rows() {
        for cell in row {
            s.push(cell.unwrap_or(' '));
            s.push(' ');
        }
        s.push('\n');
    }
    s
}

pub fn print_grid(grid: &grid::Grid) {
    print!("{}", format_grid(grid));
}

// squares covered by found words are shown uppercased.
pub fn format_framed(grid: &grid::Grid, found: &[builder::PlacementRecord]) -> String {
    let dim = grid.dim();
    let mut highlighted = vec![false; dim.len()];
    for record in found {
        for (x, y) in record.cells() {
            highlighted[dim.at_row_col(y, x)] = true;
        }
    }

    let mut s = String::new();
    let header = |s: &mut String| {
        s.push_str("   ");
        for c in 0..dim.cols {
            s.push(' ');
            s.push(col_label(c));
        }
        s.push('\n');
    };
    let rule = |s: &mut String| {
        s.push_str("   +");
        for _ in 1..dim.cols {
            s.push_str("--");
        }
        s.push_str("-+\n");
    };

    header(&mut s);
    rule(&mut s);
    for r in 0..dim.rows {
        write!(s, "{:2} |", r + 1).ok();
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            let idx = dim.at_row_col(r, c);
            match grid.at(idx) {
                Some(letter) if highlighted[idx] => s.extend(letter.to_uppercase()),
                Some(letter) => s.push(letter),
                None => s.push('.'),
            }
        }
        writeln!(s, "|{}", r + 1).ok();
    }
    rule(&mut s);
    header(&mut s);
    s
}

pub fn print_framed(grid: &grid::Grid, found: &[builder::PlacementRecord]) {
    print!("{}", format_framed(grid, found));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation;

    #[test]
    fn test_col_label_past_z() {
        assert_eq!(col_label(0), 'a');
        assert_eq!(col_label(25), 'z');
        assert_eq!(col_label(26), 'A');
        assert_eq!(col_label(51), 'Z');
        assert_eq!(col_label(52), '+');
        assert_eq!(col_label(300), '+');
    }

    #[test]
    fn test_format_grid() {
        let grid = grid::Grid::from_rows(&["ab", " c"]).unwrap();
        assert_eq!(format_grid(&grid), "a b \n  c \n");
    }

    #[test]
    fn test_format_framed_highlights_found_words() {
        let grid = grid::Grid::from_rows(&["ab", " c"]).unwrap();
        let found = [builder::PlacementRecord {
            x: 0,
            y: 0,
            orientation: Orientation::Diagonal,
            word: "ac".to_string(),
            overlap: 2,
        }];
        let s = format_framed(&grid, &found);
        let lines = s.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "    a b");
        assert_eq!(lines[1], "   +---+");
        assert_eq!(lines[2], " 1 |A b|1");
        assert_eq!(lines[3], " 2 |. C|2");
        assert_eq!(lines.len(), 6);
    }
}
