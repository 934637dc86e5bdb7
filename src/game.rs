// Copyright (C) 2020-2026 Andy Kurnia.

use super::{builder, grid, orientation};

// straight-line selections on a finished puzzle. knows nothing about pointers.
pub struct WordFindGame {
    grid: grid::Grid,
    orientations: Vec<orientation::Orientation>,
    remaining: Vec<String>,
    found: Vec<builder::PlacementRecord>,
}

impl WordFindGame {
    pub fn new(puzzle: builder::Puzzle, orientations: &[orientation::Orientation]) -> Self {
        let mut remaining = puzzle.words;
        remaining.sort();
        Self {
            grid: puzzle.grid,
            orientations: orientations.to_vec(),
            remaining,
            found: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn grid(&self) -> &grid::Grid {
        &self.grid
    }

    #[inline(always)]
    pub fn remaining(&self) -> &[String] {
        &self.remaining
    }

    #[inline(always)]
    pub fn found(&self) -> &[builder::PlacementRecord] {
        &self.found
    }

    #[inline(always)]
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    // the letters from start to end inclusive, if the two squares are on one line.
    pub fn selection(
        &self,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Option<(orientation::Orientation, String)> {
        let dim = self.grid.dim();
        if !dim.contains(start.1 as isize, start.0 as isize)
            || !dim.contains(end.1 as isize, end.0 as isize)
            || start == end
        {
            return None;
        }
        let dx = end.0 as isize - start.0 as isize;
        let dy = end.1 as isize - start.1 as isize;
        if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
            return None;
        }
        let next = (
            (start.0 as isize + dx.signum()) as usize,
            (start.1 as isize + dy.signum()) as usize,
        );
        let orientation = orientation::Orientation::between(start, next)?;
        if !self.orientations.contains(&orientation) {
            return None;
        }
        let len = dx.abs().max(dy.abs()) as usize + 1;
        let letters = self.grid.read(start.0, start.1, orientation, len);
        if letters.chars().count() != len {
            return None;
        }
        Some((orientation, letters))
    }

    // marks the selected word found. None if it is not one of the remaining words.
    pub fn select(
        &mut self,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Option<&builder::PlacementRecord> {
        let (orientation, letters) = self.selection(start, end)?;
        let lowered = letters.to_lowercase();
        let pos = self
            .remaining
            .iter()
            .position(|word| word.to_lowercase() == lowered)?;
        let word = self.remaining.remove(pos);
        let overlap = word.chars().count();
        self.found.push(builder::PlacementRecord {
            x: start.0,
            y: start.1,
            orientation,
            word,
            overlap,
        });
        if self.is_complete() {
            log::info!("all {} words found", self.found.len());
        }
        self.found.last()
    }

    // where the words nobody has found yet are.
    pub fn reveal(&self) -> builder::Solution {
        builder::solve_with(&self.grid, &self.remaining, &self.orientations)
    }

    pub fn empty_squares_count(&self) -> usize {
        self.grid.empty_count()
    }
}
