//! Utils

use std::path::PathBuf;

use clap::Parser;

use crate::actions::CartAction;

/// Arguments for the cart example
#[derive(Debug, Parser)]
pub struct ExampleCartArgs {
    /// Fixture set to use for the catalog
    #[clap(short, long, default_value = "demo")]
    pub fixture: String,

    /// Base directory holding the fixture sets
    #[clap(short = 'd', long, default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Cart configuration file (defaults to the fixture set's config, if any)
    #[clap(short, long)]
    pub config: Option<PathBuf>,

    /// Actions to apply in order, e.g. `increase:1 decrease:2 remove:3 open close`
    pub actions: Vec<CartAction>,
}
