use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub type InitError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Installs the global stderr subscriber.
///
/// `level` is the default directive; `RUST_LOG` directives are layered on top of it.
/// Fails if a global subscriber is already set.
pub fn init(level: LevelFilter) -> Result<(), InitError> {
	let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).try_init()
}
