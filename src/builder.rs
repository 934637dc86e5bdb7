// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, display, error, grid, matrix, orientation, placement, puzzle_config};
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Puzzle {
    pub grid: grid::Grid,
    // in placement order.
    pub words: Vec<String>,
    // only lax builds drop words.
    pub dropped: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PlacementRecord {
    pub x: usize,
    pub y: usize,
    pub orientation: orientation::Orientation,
    pub word: String,
    pub overlap: usize,
}

impl PlacementRecord {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    // (x, y) of every square the word covers, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len()).map(move |i| {
            let (x, y) = self.orientation.step(self.x, self.y, i);
            (x as usize, y as usize)
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub found: Vec<PlacementRecord>,
    pub not_found: Vec<String>,
}

fn to_chars(words: &[String]) -> Result<Vec<Vec<char>>, error::PuzzleError> {
    if words.is_empty() {
        return Err(error::PuzzleError::invalid_input("No words provided"));
    }
    if let Some(pos) = words.iter().position(|word| word.is_empty()) {
        return Err(error::PuzzleError::invalid_input(format!(
            "word {} (0-based) is empty",
            pos
        )));
    }
    Ok(words.iter().map(|word| word.chars().collect()).collect())
}

// longest first, then alphabetical, so long words get the empty grid.
pub fn sort_words(words: &[String]) -> Vec<String> {
    let mut sorted = words.to_vec();
    sorted.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    sorted
}

enum BuildState {
    Attempting(u32),
    Growing,
    Success(grid::Grid),
    Failed,
}

struct LaxBranch {
    words: Vec<String>,
    budget: u32,
    dropped: Vec<String>,
}

pub struct PuzzleBuilder<'a> {
    config: &'a puzzle_config::PuzzleConfig,
    alphabet: alphabet::FillAlphabet,
    engine: placement::PlacementEngine,
}

impl<'a> PuzzleBuilder<'a> {
    pub fn new(config: &'a puzzle_config::PuzzleConfig) -> Self {
        Self::with_alphabet(
            config,
            alphabet::FillAlphabet::from_provider(&alphabet::LANGUAGE_ALPHABETS, &config.lang),
        )
    }

    pub fn with_alphabet(
        config: &'a puzzle_config::PuzzleConfig,
        alphabet: alphabet::FillAlphabet,
    ) -> Self {
        Self {
            config,
            alphabet,
            engine: placement::PlacementEngine::new(),
        }
    }

    // one attempt on a fresh grid. None as soon as any word does not fit.
    pub fn fill_puzzle(
        &mut self,
        words: &[Vec<char>],
        dim: matrix::Dim,
        rng: &mut dyn RngCore,
    ) -> Option<grid::Grid> {
        let mut grid = grid::Grid::new(dim.rows, dim.cols);
        let params = self.config.search_params();
        for word in words {
            if !self
                .engine
                .place_word_in_puzzle(&mut grid, &params, word, rng)
            {
                return None;
            }
        }
        Some(grid)
    }

    // places words in the given order, retrying and then growing the grid.
    pub fn new_puzzle(
        &mut self,
        words: &[String],
        rng: &mut dyn RngCore,
    ) -> Result<grid::Grid, error::PuzzleError> {
        let words = to_chars(words)?;
        if self.config.fill_blanks && self.alphabet.is_empty() {
            return Err(error::PuzzleError::invalid_input(
                "fillBlanks needs a non-empty alphabet",
            ));
        }
        let longest = words.iter().map(|word| word.len()).max().unwrap_or(0);
        let max_attempts = self.config.effective_max_attempts();
        let mut dim = self.config.initial_dim(longest);
        let mut growth_count = 0;

        let mut state = BuildState::Attempting(0);
        let mut grid = loop {
            state = match state {
                BuildState::Attempting(attempt_count) => {
                    if attempt_count >= max_attempts {
                        BuildState::Growing
                    } else {
                        match self.fill_puzzle(&words, dim, rng) {
                            Some(grid) => BuildState::Success(grid),
                            None => BuildState::Attempting(attempt_count + 1),
                        }
                    }
                }
                BuildState::Growing => {
                    growth_count += 1;
                    if growth_count > self.config.max_grid_growth {
                        BuildState::Failed
                    } else {
                        log::info!(
                            "No valid {}x{} grid found after {} attempts, trying with bigger grid",
                            dim.cols,
                            dim.rows,
                            max_attempts
                        );
                        dim = dim.grown();
                        BuildState::Attempting(0)
                    }
                }
                BuildState::Success(grid) => break grid,
                BuildState::Failed => {
                    return Err(error::PuzzleError::Construction {
                        width: dim.cols,
                        height: dim.rows,
                    });
                }
            };
        };

        if self.config.fill_blanks {
            let alphabet = &self.alphabet;
            grid.fill_empty(|| alphabet.pick(rng));
        } else if !self.config.allow_extra_blanks && grid.empty_count() > 0 {
            log::warn!(
                "{}x{} grid has {} empty squares",
                grid.width(),
                grid.height(),
                grid.empty_count()
            );
        }

        if self.config.debug {
            log::info!("\n{}", display::format_grid(&grid));
        }
        Ok(grid)
    }

    // like new_puzzle, but may drop up to allowed_missing_words words.
    // branches are tried depth first, dropping earlier words first.
    pub fn new_puzzle_lax(
        &mut self,
        words: &[String],
        rng: &mut dyn RngCore,
    ) -> Result<Puzzle, error::PuzzleError> {
        let root_error = match self.new_puzzle(words, rng) {
            Ok(grid) => {
                return Ok(Puzzle {
                    grid,
                    words: words.to_vec(),
                    dropped: Vec::new(),
                });
            }
            Err(err @ error::PuzzleError::InvalidInput { .. }) => return Err(err),
            Err(err) => err,
        };
        let allowed_missing_words = self.config.allowed_missing_words;
        if allowed_missing_words == 0 {
            return Err(root_error);
        }

        let mut stack = Vec::new();
        let mut branches = 0;
        push_branches(
            &mut stack,
            &LaxBranch {
                words: words.to_vec(),
                budget: allowed_missing_words,
                dropped: Vec::new(),
            },
        );
        while let Some(branch) = stack.pop() {
            branches += 1;
            match self.new_puzzle(&branch.words, rng) {
                Ok(grid) => {
                    for word in &branch.dropped {
                        log::info!("Solution found without word {:?}", word);
                    }
                    return Ok(Puzzle {
                        grid,
                        words: branch.words,
                        dropped: branch.dropped,
                    });
                }
                Err(err) => {
                    log::debug!("dropping {:?} was not enough: {}", branch.dropped, err);
                    push_branches(&mut stack, &branch);
                }
            }
        }
        Err(error::PuzzleError::LaxExhausted {
            allowed_missing_words,
            branches,
            source: Box::new(root_error),
        })
    }
}

// children of a failed branch, one per word removed. the stack is popped from
// the end, so they are pushed last index first.
fn push_branches(stack: &mut Vec<LaxBranch>, branch: &LaxBranch) {
    if branch.budget == 0 || branch.words.len() <= 1 {
        return;
    }
    for i in (0..branch.words.len()).rev() {
        let mut words = branch.words.clone();
        let word = words.remove(i);
        let mut dropped = branch.dropped.clone();
        dropped.push(word);
        stack.push(LaxBranch {
            words,
            budget: branch.budget - 1,
            dropped,
        });
    }
}

pub fn build(
    words: &[String],
    config: &puzzle_config::PuzzleConfig,
    rng: &mut dyn RngCore,
) -> Result<Puzzle, error::PuzzleError> {
    let words = sort_words(words);
    let grid = PuzzleBuilder::new(config).new_puzzle(&words, rng)?;
    Ok(Puzzle {
        grid,
        words,
        dropped: Vec::new(),
    })
}

pub fn build_lax(
    words: &[String],
    config: &puzzle_config::PuzzleConfig,
    rng: &mut dyn RngCore,
) -> Result<Puzzle, error::PuzzleError> {
    PuzzleBuilder::new(config).new_puzzle_lax(&sort_words(words), rng)
}

pub fn solve(grid: &grid::Grid, words: &[String]) -> Solution {
    solve_with(grid, words, &orientation::ALL_ORIENTATIONS)
}

// a word is found only where every one of its letters is already on the grid.
pub fn solve_with(
    grid: &grid::Grid,
    words: &[String],
    orientations: &[orientation::Orientation],
) -> Solution {
    let params = puzzle_config::SearchParams {
        orientations,
        prefer_overlap: true,
        ignore_case: true,
    };
    let mut engine = placement::PlacementEngine::new();
    let mut solution = Solution::default();
    for word in words {
        let chars = word.chars().collect::<Vec<_>>();
        match engine.find_best_locations(grid, &params, &chars).first() {
            Some(best) if best.overlap == chars.len() => {
                solution.found.push(PlacementRecord {
                    x: best.x,
                    y: best.y,
                    orientation: best.orientation,
                    word: word.clone(),
                    overlap: best.overlap,
                });
            }
            _ => solution.not_found.push(word.clone()),
        }
    }
    solution
}
