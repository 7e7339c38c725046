//! `country-picker [CONFIG.json]`
//!
//! Reads key scripts from stdin, one line at a time, and prints the form's
//! accessibility tree as a JSON line after each of them.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use country_picker::{AppConfig, AppError};

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => AppConfig::load(&path),
        None => Ok(AppConfig::load_from_default_path().unwrap_or_default()),
    };

    let level = config
        .as_ref()
        .map(|c| c.preferences.log_level)
        .unwrap_or_default();
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .init();

    let result = config.map_err(AppError::from).and_then(|config| {
        log::debug!("Starting with config {:?}", config);
        country_picker::run(&config, std::io::stdin().lock(), std::io::stdout().lock())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

// No stdin or filesystem on WASM
#[cfg(target_arch = "wasm32")]
fn main() {}
