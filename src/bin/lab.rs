use log::{debug, warn};
use rust_lab::report::{self, Index};
use rust_lab::LabConfig;
use std::io::{self, Write};
use std::path::Path;

fn setup_logging() {
    let env = env_logger::Env::default().filter_or("LAB_LOG", "warn");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn main() {
    setup_logging();

    // Directories are resolved next to the crate, not the caller's cwd.
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let config = LabConfig::load(root).unwrap_or_else(|err| {
        warn!("{err}; using the default layout");
        LabConfig::default().resolve(root)
    });

    let index = Index::scan(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = report::render(&mut out, &index, report::color_enabled()).and_then(|()| out.flush()) {
        debug!("could not write the index: {err}");
    }
}
