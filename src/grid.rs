// Copyright (C) 2020-2026 Andy Kurnia.

use super::{matrix, orientation};

// row-major. None is an empty square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dim: matrix::Dim,
    cells: Box<[Option<char>]>,
}

impl Grid {
    pub fn new(height: usize, width: usize) -> Self {
        let dim = matrix::Dim {
            rows: height,
            cols: width,
        };
        Self {
            dim,
            cells: vec![None; dim.len()].into_boxed_slice(),
        }
    }

    // every row must have the same length. empty strings and spaces are empty squares.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let mut cells = Vec::with_capacity(rows.len() * width);
        for row in rows {
            let before = cells.len();
            cells.extend(
                row.as_ref()
                    .chars()
                    .map(|c| if c == ' ' { None } else { Some(c) }),
            );
            if cells.len() - before != width {
                return None;
            }
        }
        Some(Self {
            dim: matrix::Dim {
                rows: rows.len(),
                cols: width,
            },
            cells: cells.into_boxed_slice(),
        })
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.dim.rows
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.dim.cols
    }

    #[inline(always)]
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells[self.dim.at_row_col(y, x)]
    }

    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, c: char) {
        let idx = self.dim.at_row_col(y, x);
        self.cells[idx] = Some(c);
    }

    // the cells a run of len letters starting at (x, y) would occupy.
    // caller has checked that the run fits.
    #[inline(always)]
    pub fn ray(&self, x: usize, y: usize, orientation: orientation::Orientation, len: usize) -> matrix::Strider {
        let d = orientation.descriptor();
        self.dim.ray(y, x, d.dy, d.dx, len)
    }

    #[inline(always)]
    pub fn at(&self, idx: usize) -> Option<char> {
        self.cells[idx]
    }

    #[inline(always)]
    pub(crate) fn put(&mut self, idx: usize, c: char) {
        self.cells[idx] = Some(c);
    }

    // reads up to len letters along an orientation, stopping at the edge or at an empty square.
    pub fn read(&self, x: usize, y: usize, orientation: orientation::Orientation, len: usize) -> String {
        let mut s = String::with_capacity(len);
        for i in 0..len {
            let (cx, cy) = orientation.step(x, y, i);
            if !self.dim.contains(cy, cx) {
                break;
            }
            match self.get(cx as usize, cy as usize) {
                Some(c) => s.push(c),
                None => break,
            }
        }
        s
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        // chunks panics on zero
        self.cells.chunks(self.dim.cols.max(1))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn fill_empty<F: FnMut() -> char>(&mut self, mut pick: F) {
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            *cell = Some(pick());
        }
    }

    // one string per row, empty squares as spaces.
    pub fn to_rows(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|c| c.unwrap_or(' ')).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation;

    #[test]
    fn test_new_is_empty() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.empty_count(), 12);
    }

    #[test]
    fn test_from_rows_and_back() {
        let grid = Grid::from_rows(&["ab c", "defg"]).unwrap();
        assert_eq!(grid.get(3, 0), Some('c'));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.empty_count(), 1);
        assert_eq!(grid.to_rows(), vec!["ab c".to_string(), "defg".to_string()]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(Grid::from_rows(&["abc", "de"]).is_none());
    }

    #[test]
    fn test_read_stops_at_edge() {
        let grid = Grid::from_rows(&["cat", "a  ", "r  "]).unwrap();
        assert_eq!(grid.read(0, 0, Orientation::Vertical, 3), "car");
        assert_eq!(grid.read(2, 0, Orientation::HorizontalBack, 5), "tac");
        assert_eq!(grid.read(0, 0, Orientation::Diagonal, 3), "c");
    }

    #[test]
    fn test_set_and_fill() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 0, 'x');
        assert_eq!(grid.get(1, 0), Some('x'));
        grid.fill_empty(|| 'o');
        assert_eq!(grid.to_rows(), vec!["ox".to_string(), "oo".to_string()]);
    }

    #[test]
    fn test_ray_indices() {
        let grid = Grid::new(3, 3);
        let ray = grid.ray(2, 0, Orientation::DiagonalBack, 3);
        assert_eq!((0..3).map(|i| ray.at(i)).collect::<Vec<_>>(), vec![2, 4, 6]);
    }
}
