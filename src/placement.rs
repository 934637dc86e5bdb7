// Copyright (C) 2020-2026 Andy Kurnia.

use super::{grid, orientation, puzzle_config};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CandidateLocation {
    pub x: usize,
    pub y: usize,
    pub orientation: orientation::Orientation,
    // letters already on the grid that the word would reuse.
    pub overlap: usize,
}

#[inline(always)]
fn letters_match(cell: char, letter: char, ignore_case: bool) -> bool {
    cell == letter || (ignore_case && cell.to_lowercase().eq(letter.to_lowercase()))
}

// None if some square already holds a different letter.
// the word must fit at (x, y) in this orientation.
pub fn calc_overlap(
    grid: &grid::Grid,
    word: &[char],
    x: usize,
    y: usize,
    orientation: orientation::Orientation,
    ignore_case: bool,
) -> Option<usize> {
    let ray = grid.ray(x, y, orientation, word.len());
    let mut overlap = 0;
    for (i, &letter) in word.iter().enumerate() {
        match grid.at(ray.at(i)) {
            None => {}
            Some(c) if letters_match(c, letter, ignore_case) => overlap += 1,
            Some(_) => return None,
        }
    }
    // a word entirely covered by letters already there is still accepted.
    Some(overlap)
}

pub fn place_word(
    grid: &mut grid::Grid,
    word: &[char],
    x: usize,
    y: usize,
    orientation: orientation::Orientation,
) {
    debug_assert!(orientation.descriptor().fits(
        x,
        y,
        grid.height(),
        grid.width(),
        word.len()
    ));
    let ray = grid.ray(x, y, orientation, word.len());
    for (i, &letter) in word.iter().enumerate() {
        grid.put(ray.at(i), letter);
    }
}

// keeps its buffer between words so repeated attempts do not reallocate.
#[derive(Default)]
pub struct PlacementEngine {
    locations: Vec<CandidateLocation>,
}

impl PlacementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // scans every allowed orientation, origins row by row.
    // with prefer_overlap only the locations with the highest overlap survive.
    pub fn find_best_locations(
        &mut self,
        grid: &grid::Grid,
        params: &puzzle_config::SearchParams,
        word: &[char],
    ) -> &[CandidateLocation] {
        self.locations.clear();
        let height = grid.height();
        let width = grid.width();
        let len = word.len();
        if len == 0 {
            return &self.locations;
        }
        let mut max_overlap = 0;

        for &orientation in params.orientations {
            let descriptor = orientation.descriptor();
            let (mut x, mut y) = (0, 0);
            while y < height {
                if x >= width {
                    x = 0;
                    y += 1;
                    continue;
                }
                if descriptor.fits(x, y, height, width, len) {
                    if let Some(overlap) =
                        calc_overlap(grid, word, x, y, orientation, params.ignore_case)
                    {
                        if !params.prefer_overlap || overlap >= max_overlap {
                            if params.prefer_overlap {
                                max_overlap = overlap;
                            }
                            self.locations.push(CandidateLocation {
                                x,
                                y,
                                orientation,
                                overlap,
                            });
                        }
                    }
                    x += 1;
                } else {
                    (x, y) = descriptor.skip(x, y, len);
                }
            }
        }

        if params.prefer_overlap {
            self.locations.retain(|location| location.overlap >= max_overlap);
        }
        &self.locations
    }

    // false if the word fits nowhere. otherwise one of the best locations,
    // chosen uniformly, now holds the word.
    pub fn place_word_in_puzzle(
        &mut self,
        grid: &mut grid::Grid,
        params: &puzzle_config::SearchParams,
        word: &[char],
        rng: &mut dyn RngCore,
    ) -> bool {
        let num_locations = self.find_best_locations(grid, params, word).len();
        if num_locations == 0 {
            return false;
        }
        let sel = self.locations[rng.random_range(0..num_locations)];
        place_word(grid, word, sel.x, sel.y, sel.orientation);
        true
    }
}

pub fn find_best_locations(
    grid: &grid::Grid,
    params: &puzzle_config::SearchParams,
    word: &[char],
) -> Vec<CandidateLocation> {
    let mut engine = PlacementEngine::new();
    engine.find_best_locations(grid, params, word);
    engine.locations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::{Orientation, ALL_ORIENTATIONS};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn params(orientations: &[Orientation], prefer_overlap: bool) -> puzzle_config::SearchParams<'_> {
        puzzle_config::SearchParams {
            orientations,
            prefer_overlap,
            ignore_case: false,
        }
    }

    #[test]
    fn test_horizontal_candidates_on_empty_grid() {
        let grid = grid::Grid::new(5, 5);
        let found = find_best_locations(&grid, &params(&[Orientation::Horizontal], true), &chars("hello"));
        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|l| l.x == 0 && l.overlap == 0));
        assert_eq!(found.iter().map(|l| l.y).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_vertical_up_candidates_on_empty_grid() {
        let grid = grid::Grid::new(5, 5);
        let found = find_best_locations(&grid, &params(&[Orientation::VerticalUp], true), &chars("hello"));
        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|l| l.y == 4));
    }

    #[test]
    fn test_word_longer_than_grid_has_no_candidates() {
        let grid = grid::Grid::new(3, 3);
        let found = find_best_locations(&grid, &params(&ALL_ORIENTATIONS, true), &chars("abcd"));
        assert!(found.is_empty());
    }

    #[test]
    fn test_conflict_rejects_origin() {
        let grid = grid::Grid::from_rows(&["x  ", "   ", "   "]).unwrap();
        assert_eq!(calc_overlap(&grid, &chars("abc"), 0, 0, Orientation::Horizontal, false), None);
        assert_eq!(calc_overlap(&grid, &chars("xbc"), 0, 0, Orientation::Horizontal, false), Some(1));
        assert_eq!(calc_overlap(&grid, &chars("abc"), 0, 1, Orientation::Horizontal, false), Some(0));
    }

    #[test]
    fn test_prefer_overlap_keeps_only_maximum() {
        let grid = grid::Grid::from_rows(&["cat", "   ", "   "]).unwrap();
        let found = find_best_locations(
            &grid,
            &params(&[Orientation::Horizontal, Orientation::Vertical], true),
            &chars("car"),
        );
        // only the vertical run down from the c shares a letter
        assert_eq!(
            found,
            vec![CandidateLocation {
                x: 0,
                y: 0,
                orientation: Orientation::Vertical,
                overlap: 1,
            }]
        );
    }

    #[test]
    fn test_without_prefer_overlap_keeps_every_fit() {
        let grid = grid::Grid::from_rows(&["cat", "   ", "   "]).unwrap();
        let found = find_best_locations(
            &grid,
            &params(&[Orientation::Horizontal, Orientation::Vertical], false),
            &chars("car"),
        );
        // rows 1 and 2 across, columns 0 down (through the c); columns 1 and 2 conflict.
        assert_eq!(found.len(), 3);
        assert_eq!(found.iter().filter(|l| l.overlap == 1).count(), 1);
    }

    #[test]
    fn test_full_overlap_is_accepted() {
        let grid = grid::Grid::from_rows(&["cat", "   ", "   "]).unwrap();
        let found = find_best_locations(&grid, &params(&[Orientation::Horizontal], true), &chars("cat"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].overlap, 3);
    }

    #[test]
    fn test_ignore_case() {
        let grid = grid::Grid::from_rows(&["CAT"]).unwrap();
        let mut p = params(&[Orientation::Horizontal], true);
        assert!(find_best_locations(&grid, &p, &chars("cat")).is_empty());
        p.ignore_case = true;
        assert_eq!(find_best_locations(&grid, &p, &chars("cat"))[0].overlap, 3);
    }

    #[test]
    fn test_place_word_in_puzzle_writes_letters() {
        let mut grid = grid::Grid::new(3, 3);
        let mut engine = PlacementEngine::new();
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
        let p = params(&[Orientation::DiagonalUpBack], true);
        assert!(engine.place_word_in_puzzle(&mut grid, &p, &chars("dog"), &mut rng));
        assert_eq!(grid.to_rows(), vec!["g  ", " o ", "  d"]);
        // the only diagonal is taken by a different word now
        assert!(!engine.place_word_in_puzzle(&mut grid, &p, &chars("cat"), &mut rng));
    }
}
