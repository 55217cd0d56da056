//! Browser Logging
//!
//! Routes `tracing` events to the developer console through the standard
//! `fmt` layer, so the rest of the crate can log with the usual macros.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_web::MakeWebConsoleWriter;

/// Install the console subscriber at the given level.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(level: &str) {
    let console = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    let _ = tracing_subscriber::registry()
        .with(parse_level(level))
        .with(console)
        .try_init();
}

/// Parse a level name, defaulting to `info`
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::INFO)
}
