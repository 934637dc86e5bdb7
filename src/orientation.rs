// Copyright (C) 2020-2026 Andy Kurnia.

//! The eight directions a word may run in.
//!
//! Each direction is described by a row of [`DESCRIPTORS`]: a unit step, a
//! bounds predicate telling whether a word of a given length fits when it
//! starts at a given cell, and a skip rule giving the next origin worth
//! trying after an origin that does not fit. Adding a direction means adding
//! a row, not another match arm.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Horizontal,
    HorizontalBack,
    Vertical,
    VerticalUp,
    Diagonal,
    DiagonalBack,
    DiagonalUp,
    DiagonalUpBack,
}

pub struct OrientationDescriptor {
    pub orientation: Orientation,
    pub name: &'static str,
    pub dx: i8,
    pub dy: i8,
    // (x, y, height, width, len)
    fits: fn(usize, usize, usize, usize, usize) -> bool,
    // (x, y, len) -> next (x, y)
    skip: fn(usize, usize, usize) -> (usize, usize),
}

impl OrientationDescriptor {
    #[inline(always)]
    pub fn fits(&self, x: usize, y: usize, height: usize, width: usize, len: usize) -> bool {
        (self.fits)(x, y, height, width, len)
    }

    #[inline(always)]
    pub fn skip(&self, x: usize, y: usize, len: usize) -> (usize, usize) {
        (self.skip)(x, y, len)
    }

    // may be outside the grid (or negative) when the word does not fit.
    #[inline(always)]
    pub fn step(&self, x: usize, y: usize, i: usize) -> (isize, isize) {
        (
            x as isize + (self.dx as isize) * (i as isize),
            y as isize + (self.dy as isize) * (i as isize),
        )
    }
}

// len is never zero here, words are validated before searching.
pub static DESCRIPTORS: [OrientationDescriptor; 8] = [
    OrientationDescriptor {
        orientation: Orientation::Horizontal,
        name: "horizontal",
        dx: 1,
        dy: 0,
        fits: |x, _y, _h, w, l| w >= x + l,
        skip: |_x, y, _l| (0, y + 1),
    },
    OrientationDescriptor {
        orientation: Orientation::HorizontalBack,
        name: "horizontalBack",
        dx: -1,
        dy: 0,
        fits: |x, _y, _h, _w, l| x + 1 >= l,
        skip: |_x, y, l| (l - 1, y),
    },
    OrientationDescriptor {
        orientation: Orientation::Vertical,
        name: "vertical",
        dx: 0,
        dy: 1,
        fits: |_x, y, h, _w, l| h >= y + l,
        // no later row fits either.
        skip: |_x, y, l| (0, y + l),
    },
    OrientationDescriptor {
        orientation: Orientation::VerticalUp,
        name: "verticalUp",
        dx: 0,
        dy: -1,
        fits: |_x, y, _h, _w, l| y + 1 >= l,
        skip: |_x, _y, l| (0, l - 1),
    },
    OrientationDescriptor {
        orientation: Orientation::Diagonal,
        name: "diagonal",
        dx: 1,
        dy: 1,
        fits: |x, y, h, w, l| w >= x + l && h >= y + l,
        skip: |_x, y, _l| (0, y + 1),
    },
    OrientationDescriptor {
        orientation: Orientation::DiagonalBack,
        name: "diagonalBack",
        dx: -1,
        dy: 1,
        fits: |x, y, h, _w, l| x + 1 >= l && h >= y + l,
        skip: |x, y, l| (l - 1, if x + 1 >= l { y + 1 } else { y }),
    },
    OrientationDescriptor {
        orientation: Orientation::DiagonalUp,
        name: "diagonalUp",
        dx: 1,
        dy: -1,
        fits: |x, y, _h, w, l| w >= x + l && y + 1 >= l,
        skip: |_x, y, l| (0, if y + 1 < l { l - 1 } else { y + 1 }),
    },
    OrientationDescriptor {
        orientation: Orientation::DiagonalUpBack,
        name: "diagonalUpBack",
        dx: -1,
        dy: -1,
        fits: |x, y, _h, _w, l| x + 1 >= l && y + 1 >= l,
        skip: |x, y, l| (l - 1, if x + 1 >= l { y + 1 } else { y }),
    },
];

// the order used when no subset is configured.
pub static ALL_ORIENTATIONS: [Orientation; 8] = [
    Orientation::Horizontal,
    Orientation::HorizontalBack,
    Orientation::Vertical,
    Orientation::VerticalUp,
    Orientation::Diagonal,
    Orientation::DiagonalUp,
    Orientation::DiagonalBack,
    Orientation::DiagonalUpBack,
];

impl Orientation {
    #[inline(always)]
    pub fn descriptor(self) -> &'static OrientationDescriptor {
        &DESCRIPTORS[self as usize]
    }

    #[inline(always)]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    #[inline(always)]
    pub fn step(self, x: usize, y: usize, i: usize) -> (isize, isize) {
        self.descriptor().step(x, y, i)
    }

    pub fn from_name(name: &str) -> Option<Orientation> {
        DESCRIPTORS
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .map(|d| d.orientation)
    }

    pub fn from_step(dx: i8, dy: i8) -> Option<Orientation> {
        DESCRIPTORS
            .iter()
            .find(|d| d.dx == dx && d.dy == dy)
            .map(|d| d.orientation)
    }

    // the orientation whose single step goes from one cell to the other.
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Orientation> {
        let dx = to.0 as isize - from.0 as isize;
        let dy = to.1 as isize - from.1 as isize;
        if dx.abs() > 1 || dy.abs() > 1 {
            return None;
        }
        Orientation::from_step(dx as i8, dy as i8)
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feasible_origins(orientation: Orientation, h: usize, w: usize, l: usize) -> Vec<(usize, usize)> {
        let d = orientation.descriptor();
        let mut v = Vec::new();
        for y in 0..h {
            for x in 0..w {
                if d.fits(x, y, h, w, l) {
                    v.push((x, y));
                }
            }
        }
        v
    }

    #[test]
    fn test_descriptor_table_matches_enum() {
        for (i, d) in DESCRIPTORS.iter().enumerate() {
            assert_eq!(d.orientation as usize, i);
            assert_eq!(Orientation::from_name(d.name), Some(d.orientation));
        }
    }

    #[test]
    fn test_horizontal_fits_only_at_left_edge() {
        let v = feasible_origins(Orientation::Horizontal, 5, 5, 5);
        assert_eq!(v, (0..5).map(|y| (0, y)).collect::<Vec<_>>());
    }

    #[test]
    fn test_vertical_up_fits_only_at_bottom() {
        let v = feasible_origins(Orientation::VerticalUp, 5, 5, 5);
        assert_eq!(v, (0..5).map(|x| (x, 4)).collect::<Vec<_>>());
    }

    #[test]
    fn test_diagonal_up_back_fits_only_in_corner() {
        assert_eq!(feasible_origins(Orientation::DiagonalUpBack, 5, 5, 5), vec![(4, 4)]);
        assert_eq!(feasible_origins(Orientation::DiagonalBack, 5, 5, 5), vec![(4, 0)]);
        assert_eq!(feasible_origins(Orientation::DiagonalUp, 5, 5, 5), vec![(0, 4)]);
        assert_eq!(feasible_origins(Orientation::Diagonal, 5, 5, 5), vec![(0, 0)]);
    }

    #[test]
    fn test_steps() {
        assert_eq!(Orientation::HorizontalBack.step(4, 2, 3), (1, 2));
        assert_eq!(Orientation::DiagonalUp.step(0, 4, 4), (4, 0));
        assert_eq!(Orientation::VerticalUp.step(1, 1, 2), (1, -1));
    }

    #[test]
    fn test_skip_never_goes_backwards() {
        for d in DESCRIPTORS.iter() {
            for l in 1..6 {
                for y in 0..6 {
                    for x in 0..6 {
                        if !d.fits(x, y, 6, 6, l) {
                            let (nx, ny) = d.skip(x, y, l);
                            assert!((ny, nx) > (y, x), "{} stalls at ({}, {})", d.name, x, y);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_between() {
        assert_eq!(Orientation::between((1, 1), (2, 1)), Some(Orientation::Horizontal));
        assert_eq!(Orientation::between((1, 1), (0, 0)), Some(Orientation::DiagonalUpBack));
        assert_eq!(Orientation::between((1, 1), (0, 2)), Some(Orientation::DiagonalBack));
        assert_eq!(Orientation::between((1, 1), (1, 1)), None);
        assert_eq!(Orientation::between((1, 1), (3, 1)), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Orientation::DiagonalUpBack).unwrap();
        assert_eq!(json, "\"diagonalUpBack\"");
        let back: Orientation = serde_json::from_str("\"verticalUp\"").unwrap();
        assert_eq!(back, Orientation::VerticalUp);
    }
}
