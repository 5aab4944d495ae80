use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::settings::AppEnvironment;

const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// Installs the global subscriber. Production logs are JSON lines.
pub fn init_tracing(env: &AppEnvironment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(filter);

    match env {
        AppEnvironment::Production => registry.with(fmt::layer().json()).init(),
        _ => registry.with(fmt::layer()).init(),
    }
}
