// Copyright (C) 2020-2026 Andy Kurnia.

use log::LevelFilter;

// RUST_LOG, when set, overrides the level picked here.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // a second init (tests, repeated shells) keeps the first logger.
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {:?} level", level);
    }
}
