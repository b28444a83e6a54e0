//! Cart Replay Example
//!
//! Applies a sequence of cart actions to an empty cart and prints the result.
//!
//! Use `-f` to load a catalog fixture set by name
//! Use `-c` to load a cart configuration file
//! Set `RUST_LOG=trolley=debug` to see each cart update
//!
//! ```sh
//! cargo run --example cart -- increase:1 increase:1 increase:2 decrease:1 open
//! ```

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trolley::{prelude::*, utils::ExampleCartArgs};

/// Cart Replay Example
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = ExampleCartArgs::parse();
    let fixture = Fixture::with_base_path(&args.fixtures_dir);
    let catalog = fixture.catalog(&args.fixture)?;

    let config = match &args.config {
        Some(path) => CartConfig::from_path(path)?,
        None => match fixture.config(&args.fixture) {
            Ok(config) => config,
            Err(FixtureError::Config(ConfigError::Io(_))) => CartConfig::default(),
            Err(error) => return Err(error.into()),
        },
    };

    let mut state = CartState::with_config(config);

    for action in args.actions {
        if let CartAction::Increase(id) = action
            && catalog.get(id).is_none()
        {
            tracing::warn!(product_id = %id, "product not in catalog, skipping");
            continue;
        }

        let changed = state.apply(action)?;

        tracing::info!(%action, changed, cart_quantity = state.cart_quantity(), "applied");
    }

    let stdout = io::stdout();
    let handle = stdout.lock();

    CartSummary::new(state.cart(), &catalog)
        .with_panel(state.is_open())
        .write_to(handle)?;

    Ok(())
}
