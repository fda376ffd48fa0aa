use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `pricetab=trace`
const LOG_ENV: &str = "PRICETAB_LOG";

/// Install the stderr subscriber. `PRICETAB_LOG` wins over `--debug`.
pub(crate) fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
