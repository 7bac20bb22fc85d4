use log::LevelFilter;

// Install a logger for the dispatch layer's diagnostics. The library
// never does this on its own; applications that already have a logger
// skip it. Calling it twice is harmless.

#[cfg(target_os = "android")]
pub fn init(level: LevelFilter) {
    // Off means no logger at all.
    if let Some(level) = level.to_level() {
        android_logger::init_once(
            android_logger::Config::default()
                .with_min_level(level)
                .with_tag("lazygl"),
        );
    }
}

#[cfg(not(target_os = "android"))]
pub fn init(level: LevelFilter) {
    // RUST_LOG, when set, overrides `level`.
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
