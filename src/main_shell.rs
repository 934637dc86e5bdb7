// Copyright (C) 2020-2026 Andy Kurnia.

mod rlhelper;

use rand::prelude::*;
use wordfind::{
    alphabet, builder, display, error, game, logging, orientation, puzzle_config, return_error,
};

static HELP: &str = "\
words [w...]          set the word list (no args: show it)
lang CODE             alphabet for blank squares (EN, FR, DE, JA, ...)
size H W | size auto  starting grid size
orient all | o...     allowed orientations (horizontal, verticalUp, diagonalBack, ...)
blanks on|off         fill unused squares with random letters
overlap on|off        prefer placements that reuse letters
missing N             words lax mode may drop
seed N | seed random  reproducible puzzles
build                 build with every word
lax                   build, dropping words if needed
show                  print the current puzzle
pick X1 Y1 X2 Y2      select a straight run, 0-based x (column) and y (row)
solve [w...]          locate words (no args: the ones not picked yet)
csv FILE              write the grid rows to FILE
source FILE           run commands from FILE
exit";

struct Shell {
    words: Vec<String>,
    config: puzzle_config::PuzzleConfig,
    rng: Box<dyn RngCore>,
    game: Option<game::WordFindGame>,
}

fn parse_on_off(s: Option<&String>) -> error::Returns<bool> {
    match s.map(String::as_str) {
        Some("on") => Ok(true),
        Some("off") => Ok(false),
        _ => Err("need on or off".into()),
    }
}

fn parse_arg<T: std::str::FromStr>(strings: &[String], idx: usize) -> error::Returns<T> {
    match strings.get(idx) {
        Some(s) => match s.parse::<T>() {
            Ok(v) => Ok(v),
            Err(_) => {
                return_error!(format!("invalid number {:?}", s));
            }
        },
        None => {
            return_error!(format!("{} needs more args", strings[0]));
        }
    }
}

impl Shell {
    fn new() -> Self {
        Self {
            words: Vec::new(),
            config: puzzle_config::PuzzleConfig::default(),
            rng: Box::new(rand_chacha::ChaCha20Rng::from_os_rng()),
            game: None,
        }
    }

    fn game(&self) -> error::Returns<&game::WordFindGame> {
        self.game.as_ref().ok_or_else(|| "build a puzzle first".into())
    }

    fn show(&self) -> error::Returns<()> {
        let game = self.game()?;
        display::print_framed(game.grid(), game.found());
        println!("to find: {}", game.remaining().join(" "));
        if game.empty_squares_count() > 0 {
            println!("empty squares: {}", game.empty_squares_count());
        }
        Ok(())
    }

    fn build(&mut self, lax: bool) -> error::Returns<()> {
        let result = if lax {
            builder::build_lax(&self.words, &self.config, &mut *self.rng)
        } else {
            builder::build(&self.words, &self.config, &mut *self.rng)
        };
        let puzzle = match result {
            Ok(puzzle) => puzzle,
            Err(err) => {
                return_error!(err.display_detailed());
            }
        };
        if !puzzle.dropped.is_empty() {
            println!("dropped: {}", puzzle.dropped.join(" "));
        }
        self.game = Some(game::WordFindGame::new(puzzle, &self.config.orientations));
        self.show()
    }

    fn write_csv(&self, path: &str) -> error::Returns<()> {
        let game = self.game()?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        for row in game.grid().rows() {
            wtr.write_record(row.iter().map(|c| c.map_or_else(String::new, String::from)))?;
        }
        wtr.flush()?;
        println!("wrote {}x{} grid to {}", game.grid().width(), game.grid().height(), path);
        Ok(())
    }

    // Ok(false) to exit.
    fn run(&mut self, strings: &[String]) -> error::Returns<bool> {
        match strings[0].as_str() {
            "help" => println!("{}", HELP),
            "exit" => return Ok(false),
            "words" => {
                if strings.len() > 1 {
                    self.words = strings[1..].iter().map(|w| w.to_lowercase()).collect();
                }
                println!("{} words: {}", self.words.len(), self.words.join(" "));
            }
            "lang" => {
                let code = strings.get(1).ok_or("need a language code")?;
                if !alphabet::LANGUAGE_ALPHABETS.knows(code) {
                    println!("unknown language, blank squares will use {}", alphabet::DEFAULT_LETTERS);
                }
                self.config.lang = code.to_uppercase();
            }
            "size" => {
                if strings.get(1).map(String::as_str) == Some("auto") {
                    self.config.height = None;
                    self.config.width = None;
                } else {
                    self.config.height = Some(parse_arg(strings, 1)?);
                    self.config.width = Some(parse_arg(strings, 2)?);
                }
            }
            "orient" => {
                if strings.len() < 2 {
                    return_error!("need orientations".to_string());
                }
                if strings[1] == "all" {
                    self.config.orientations = orientation::ALL_ORIENTATIONS.to_vec();
                } else {
                    let mut v = Vec::with_capacity(strings.len() - 1);
                    for name in &strings[1..] {
                        match orientation::Orientation::from_name(name) {
                            Some(o) => v.push(o),
                            None => {
                                return_error!(format!("invalid orientation {:?}", name));
                            }
                        }
                    }
                    self.config.orientations = v;
                }
                println!(
                    "orientations: {}",
                    self.config
                        .orientations
                        .iter()
                        .map(|o| o.name())
                        .collect::<Vec<_>>()
                        .join(" ")
                );
            }
            "blanks" => self.config.fill_blanks = parse_on_off(strings.get(1))?,
            "overlap" => self.config.prefer_overlap = parse_on_off(strings.get(1))?,
            "missing" => self.config.allowed_missing_words = parse_arg(strings, 1)?,
            "seed" => {
                if strings.get(1).map(String::as_str) == Some("random") {
                    self.rng = Box::new(rand_chacha::ChaCha20Rng::from_os_rng());
                } else {
                    self.rng = Box::new(rand_chacha::ChaCha20Rng::seed_from_u64(parse_arg(
                        strings, 1,
                    )?));
                }
            }
            "build" => self.build(false)?,
            "lax" => self.build(true)?,
            "show" => self.show()?,
            "pick" => {
                let start = (parse_arg(strings, 1)?, parse_arg(strings, 2)?);
                let end = (parse_arg(strings, 3)?, parse_arg(strings, 4)?);
                let game = self.game.as_mut().ok_or("build a puzzle first")?;
                match game.select(start, end) {
                    Some(record) => println!("found {} ({})", record.word, record.orientation),
                    None => println!("not a word"),
                }
                if game.is_complete() {
                    println!("all words found");
                }
                self.show()?;
            }
            "solve" => {
                let game = self.game()?;
                let solution = if strings.len() > 1 {
                    builder::solve_with(game.grid(), &strings[1..], &self.config.orientations)
                } else {
                    game.reveal()
                };
                for record in &solution.found {
                    println!("{} at {},{} {}", record.word, record.x, record.y, record.orientation);
                }
                if !solution.not_found.is_empty() {
                    println!("not found: {}", solution.not_found.join(" "));
                }
                display::print_framed(game.grid(), &solution.found);
            }
            "csv" => self.write_csv(strings.get(1).ok_or("need a file name")?)?,
            _ => println!("invalid input, help for help"),
        }
        Ok(true)
    }
}

pub fn main() -> error::Returns<()> {
    logging::init_logger(false);
    let mut rl = rlhelper::new_rl_editor()?;
    let mut shell = Shell::new();
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if strings.is_empty() {
                        continue;
                    }
                    if strings[0] == "source" {
                        if strings.len() > 1 {
                            match std::fs::read_to_string(&strings[1]) {
                                Ok(whole_file) => {
                                    let v = cmd_stack.len();
                                    for (line_num, line) in whole_file.lines().enumerate() {
                                        cmd_stack.push((
                                            line.to_string(),
                                            Some((strings[1].clone(), line_num + 1)),
                                        ));
                                    }
                                    cmd_stack[v..].reverse();
                                }
                                Err(err) => {
                                    println!("cannot open file: {:?}", err);
                                }
                            }
                        } else {
                            println!("need another arg");
                        }
                        continue;
                    }
                    match shell.run(&strings) {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(err) => println!("{}", err),
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline("wordfind> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
