// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod builder;
pub mod display;
pub mod game;
pub mod grid;
pub mod logging;
pub mod matrix;
pub mod orientation;
pub mod placement;
pub mod puzzle_config;
