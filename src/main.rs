//! Command-line entry point for the Glint viewer: loads options (from an
//! optional TOML path argument) and runs the standalone rendering window.

use std::path::Path;

use glint::options::Options;
use glint::Viewer;

fn load_options() -> Result<Options, String> {
    match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))
            .map_err(|e| format!("failed to load options from {path}: {e}")),
        None => Ok(Options::default()),
    }
}

fn main() {
    env_logger::init();

    let options = match load_options() {
        Ok(opts) => opts,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
