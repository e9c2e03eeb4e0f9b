use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter directives for a `-v` count. `RUST_LOG` takes precedence.
pub fn default_directives(verbose: u8) -> &'static str {
	match verbose {
		0 => "warn",
		1 => "warn,sbtx=debug",
		_ => "warn,sbtx=trace",
	}
}

/// Installs the global subscriber writing to stderr, leaving stdout to the
/// export report. A second call is a no-op.
pub fn init_logging(verbose: u8) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr).with_target(false))
		.try_init();
}
