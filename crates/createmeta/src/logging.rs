use tracing_subscriber::EnvFilter;

/// Log to stderr. `RUST_LOG` takes precedence over `-v`.
pub fn init(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "createmeta=debug,jira_createmeta=debug",
        _ => "createmeta=trace,jira_createmeta=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
