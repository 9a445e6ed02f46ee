//! Sample-data loader and store diagnostics for the Tuneshelf catalog.

pub mod connectivity;
pub mod scenario;
pub mod seed;

pub use connectivity::{check, ConnectionReport};
pub use seed::{run_seed, SeedOptions, SeedSummary};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the fmt subscriber used by the binaries. `RUST_LOG` wins over
/// the `info` default.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
