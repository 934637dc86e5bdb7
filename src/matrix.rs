// Copyright (C) 2020-2026 Andy Kurnia.

// walks a flat row-major buffer along a fixed direction.
#[derive(Clone, Debug)]
pub struct Strider {
    base: isize,
    step: isize,
    len: usize,
}

impl Strider {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: usize) -> usize {
        (self.base + (idx as isize) * self.step) as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: usize,
    pub cols: usize,
}

impl Dim {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // caller guarantees every one of the len cells is inside the matrix.
    #[inline(always)]
    pub fn ray(&self, row: usize, col: usize, drow: i8, dcol: i8, len: usize) -> Strider {
        Strider {
            base: self.at_row_col(row, col) as isize,
            step: (drow as isize) * (self.cols as isize) + (dcol as isize),
            len,
        }
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline(always)]
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    // both sides grow together.
    #[inline(always)]
    pub fn grown(&self) -> Dim {
        Dim {
            rows: self.rows + 1,
            cols: self.cols + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_across_and_down() {
        let dim = Dim { rows: 3, cols: 4 };
        let across = dim.ray(2, 0, 0, 1, 4);
        assert_eq!((0..across.len()).map(|i| across.at(i)).collect::<Vec<_>>(), vec![8, 9, 10, 11]);
        let down = dim.ray(0, 1, 1, 0, 3);
        assert_eq!((0..down.len()).map(|i| down.at(i)).collect::<Vec<_>>(), vec![1, 5, 9]);
        assert!(!down.is_empty());
    }

    #[test]
    fn test_ray_backwards_diagonal() {
        let dim = Dim { rows: 4, cols: 4 };
        // from (row 3, col 3) up and to the left
        let ray = dim.ray(3, 3, -1, -1, 4);
        assert_eq!((0..ray.len()).map(|i| ray.at(i)).collect::<Vec<_>>(), vec![15, 10, 5, 0]);
    }

    #[test]
    fn test_grown_and_contains() {
        let dim = Dim { rows: 2, cols: 3 }.grown();
        assert_eq!(dim, Dim { rows: 3, cols: 4 });
        assert!(dim.contains(2, 3));
        assert!(!dim.contains(3, 0));
        assert!(!dim.contains(0, -1));
    }
}
