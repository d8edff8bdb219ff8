use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive covering both `webui` and `webui_core` targets.
fn default_directive(quiet: bool) -> &'static str {
    if quiet { "webui=error" } else { "webui=info" }
}

/// `RUST_LOG` plus the default directive for the chosen verbosity.
fn env_filter(quiet: bool) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        default_directive(quiet)
            .parse()
            .expect("Invalid log directive"),
    )
}

/// Initialize logging with optional quiet mode.
///
/// Events are JSON lines on stderr so stdout stays free for the rendered
/// view and `--json` output. Quiet mode keeps only errors.
pub fn init_logging(quiet: bool) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(env_filter(quiet))
        .init();
}
