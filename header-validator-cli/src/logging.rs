use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Log level for a `-v` count: warn, info, debug, then trace.
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `RUST_LOG` wins when set; otherwise the `-v` count decides.
fn filter_for(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)))
}

/// Install the stderr subscriber. Report output stays on stdout.
pub fn init(verbose: u8) {
    // Colors only when stderr is a TTY
    let ansi = std::io::stderr().is_terminal();

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
