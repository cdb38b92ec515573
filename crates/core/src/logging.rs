use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` does not say otherwise.
const DEFAULT_DIRECTIVE: &str = "wallet_analysis_core=info";

/// Installs a global `tracing` fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once; only the first call has an effect, and
/// an already-installed subscriber from the host app is left alone.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        if fmt().with_env_filter(filter).try_init().is_ok() {
            tracing::debug!("wallet-analysis-core tracing initialized");
        }
    });
}
