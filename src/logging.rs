//! A minimal `log::Log` implementation driven by `-v/--verbose`.
//!
//! No external log sink, no color dependency: just `eprintln!`, in the
//! style of the retrieval pack's own hand-rolled logger, trimmed down since
//! this CLI has no use for ANSI styling.

use log::{LevelFilter, Log, Metadata, Record};

pub struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        eprintln!("{:5} {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Installs the logger once, at `Info` level when `verbose` else `Warn`.
pub fn init(verbose: bool) {
    let level = if verbose { LevelFilter::Info } else { LevelFilter::Warn };
    log::set_max_level(level);
    // `set_logger` only fails if called more than once; a CLI's `main` only
    // calls this once, so a failure here would be a programming error, not
    // a runtime condition worth propagating.
    let _ = log::set_logger(&LOGGER);
}
