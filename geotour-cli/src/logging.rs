//! Logger installation for the `geotour` binary.
//!
//! Library crates log through the `log` facade; only the binary picks a
//! backend. Output goes to stderr so stdout carries nothing but command
//! output.

use std::io::{self, Write};

use env_logger::{Builder, Env, Target, WriteStyle};
use log::Level;

const DEFAULT_FILTER: &str = "warn";

/// Install the process-wide logger, honouring `RUST_LOG` and defaulting to
/// warnings and errors only.
pub fn init_logging() -> io::Result<()> {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(io::Error::other)
}

const fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
