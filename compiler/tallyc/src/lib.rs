//! Library half of the `tally` driver: option parsing, result persistence
//! and the command implementations `main` dispatches to.

pub mod commands;
mod options;
mod persist;

pub use options::{RunOptions, UsageError};
pub use persist::{append_results, PersistError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `TALLY_LOG` or `RUST_LOG` is set; `TALLY_LOG` wins.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let Some(directives) = std::env::var("TALLY_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
        else {
            return;
        };

        tracing_subscriber::registry()
            .with(EnvFilter::new(directives))
            .with(
                HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true),
            )
            .init();
    });
}
