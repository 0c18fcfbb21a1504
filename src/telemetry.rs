// =============================================================================
// Tracing setup
// =============================================================================

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` when a global subscriber was already installed; repeated
/// calls are harmless.
pub fn init_tracing() -> bool {
    init_tracing_with_default("info")
}

/// Same as `init_tracing`, with a caller-chosen fallback directive such as
/// `"aurora_ta=debug"`.
pub fn init_tracing_with_default(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
