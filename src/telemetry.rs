use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "info,sample_services=debug";

/// Structured logging; `RUST_LOG` overrides the default filter.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
        )
        .with_target(false)
        .compact()
        .init();
}
