use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset; covers the core library and this
/// binary, whose target is the bin name, not the package name
fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!(
        "poetry_core={level},{bin}={level}",
        bin = env!("CARGO_CRATE_NAME")
    )
}

/// Installs the stderr logger. `RUST_LOG` wins over the verbose flag.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
