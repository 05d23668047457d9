//! file: logger.rs
//! author: Jacob Xie
//! date: 2025/12/20 10:20:05 Saturday
//! brief:

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_logger(verbose: bool) {
    let default = if verbose {
        "cloud_heroes=debug,info"
    } else {
        "cloud_heroes=info,warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}
