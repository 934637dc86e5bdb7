// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use std::io::Read;
use wordfind::{builder, display, error, grid, logging, puzzle_config, return_error};

// action: "build" (all words or fail), "lax" (may drop up to
//   options.allowedMissingWords words), "solve" (locate words in "grid").
// words: the words to hide or to look for.
// options: see PuzzleConfig, camelCase keys, everything optional.
// grid: rows of equal length, space for an empty square. only for "solve".
// seed: makes "build" and "lax" reproducible.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Question {
    #[serde(default = "default_action")]
    action: String,
    words: Vec<String>,
    #[serde(default)]
    options: puzzle_config::PuzzleConfig,
    #[serde(default)]
    grid: Option<Vec<String>>,
    #[serde(default)]
    seed: Option<u64>,
}

fn default_action() -> String {
    "build".to_string()
}

static SAMPLE: &str = r#"
  {
    "action": "lax",
    "words": [ "sensible", "sincere", "complice", "creative", "elegante", "farceuse" ],
    "options": {
      "lang": "FR",
      "orientations": [ "horizontal", "vertical" ],
      "allowedMissingWords": 1
    },
    "seed": 42
  }
"#;

fn answer_for_puzzle(action: &str, puzzle: &builder::Puzzle) -> serde_json::Value {
    let solution = builder::solve(&puzzle.grid, &puzzle.words);
    serde_json::json!({
        "action": action,
        "width": puzzle.grid.width(),
        "height": puzzle.grid.height(),
        "grid": puzzle.grid.to_rows(),
        "words": puzzle.words,
        "dropped": puzzle.dropped,
        "emptySquares": puzzle.grid.empty_count(),
        "solution": solution })
}

pub fn main() -> error::Returns<()> {
    let args = std::env::args().collect::<Vec<_>>();
    let data = match args.get(1).map(String::as_str) {
        None => SAMPLE.to_string(),
        Some("-") => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            s
        }
        Some(path) => std::fs::read_to_string(path)?,
    };
    let question = serde_json::from_str::<Question>(&data)?;
    logging::init_logger(question.options.debug);

    let mut rng: Box<dyn RngCore> = match question.seed {
        Some(seed) => Box::new(rand_chacha::ChaCha20Rng::seed_from_u64(seed)),
        None => Box::new(rand_chacha::ChaCha20Rng::from_os_rng()),
    };

    let answer = match question.action.as_str() {
        "build" | "lax" => {
            let result = if question.action == "build" {
                builder::build(&question.words, &question.options, &mut *rng)
            } else {
                builder::build_lax(&question.words, &question.options, &mut *rng)
            };
            let puzzle = match result {
                Ok(puzzle) => puzzle,
                Err(err) => {
                    return_error!(err.display_detailed());
                }
            };
            display::print_grid(&puzzle.grid);
            answer_for_puzzle(&question.action, &puzzle)
        }
        "solve" => {
            let rows = match &question.grid {
                Some(rows) if !rows.is_empty() => rows,
                _ => {
                    return_error!("solve needs a non-empty \"grid\"".to_string());
                }
            };
            let grid = match grid::Grid::from_rows(rows.as_slice()) {
                Some(grid) => grid,
                None => {
                    return_error!(format!(
                        "grid rows must all have {} squares",
                        rows[0].chars().count()
                    ));
                }
            };
            let solution =
                builder::solve_with(&grid, &question.words, &question.options.orientations);
            display::print_framed(&grid, &solution.found);
            serde_json::json!({
                "action": "solve",
                "width": grid.width(),
                "height": grid.height(),
                "solution": solution })
        }
        other => {
            return_error!(format!("invalid action {:?}", other));
        }
    };

    println!("{}", serde_json::to_string_pretty(&answer)?);
    Ok(())
}
