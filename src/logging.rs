//! Diagnostic logging for wx2tt.
//!
//! Progress lines go to stdout with `println!`; per-file events go through
//! `tracing` to stderr and are hidden unless `RUST_LOG` asks for them.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize a tracing subscriber writing compact lines to stderr.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let fmt_layer = fmt::layer()
		.with_writer(std::io::stderr)
		.with_target(false)
		.compact();

	let filter_layer =
		EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

	tracing_subscriber::registry()
		.with(filter_layer)
		.with(fmt_layer)
		.try_init()?;

	Ok(())
}
