use tracing_subscriber::EnvFilter;

const VERBOSE_DIRECTIVE: &str = "wildflower=debug";

/// Build the log filter from a `RUST_LOG`-style string.
///
/// Without one the level is `warn`. `verbose` adds `wildflower=debug` on top
/// of whatever the string asked for.
fn build_filter(env: Option<&str>, verbose: bool) -> EnvFilter {
    let filter = env
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    match VERBOSE_DIRECTIVE.parse() {
        Ok(directive) if verbose => filter.add_directive(directive),
        _ => filter,
    }
}

/// Send `tracing` output to stderr, filtered by `RUST_LOG` and `--verbose`.
pub fn init_logging(verbose: bool) {
    let env = std::env::var("RUST_LOG").ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(env.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
