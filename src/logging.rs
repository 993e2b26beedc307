use std::{fmt::Display, io::Write};

use env_logger::{Builder, Env};
use log::Level;

/// Initialize `env_logger` with `TAG: message` records on stderr
///
/// Warnings and errors are shown by default; `RUST_LOG` overrides the filter.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level()).bold();
            writeln!(
                buf,
                "{style}{}:{style:#} {}",
                severity_tag(record.level()),
                record.args()
            )
        })
        .init();
}

/// Report the error that ends the run
///
/// Goes through the logger when errors are enabled, and straight to stderr
/// when `RUST_LOG` filters them out, so a failing run always explains itself.
pub fn fatal(err: &dyn Display) {
    if log::log_enabled!(Level::Error) {
        log::error!("{err}");
    } else {
        eprintln!("{}: {err}", severity_tag(Level::Error));
    }
}

fn severity_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
