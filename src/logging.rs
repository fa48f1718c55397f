//! Logging setup.
//!
//! Remote-call attempts and outcomes are recorded to a rotating
//! `clinvar_lookup.log` in the given directory. The returned guard must stay
//! alive for the life of the process or buffered events are dropped.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name, rotated daily by the appender.
pub const LOG_FILE: &str = "clinvar_lookup.log";

/// Initialize tracing with a rotating file appender.
///
/// The filter honors `RUST_LOG` and defaults to `info`.
pub fn init_logging(dir: &Path) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    Ok(guard)
}
