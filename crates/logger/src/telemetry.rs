// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Install a global fmt subscriber logging everything at `log_level` and above
pub fn setup_simple_tracing(log_level: Level) -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(LevelFilter::from_level(log_level))
        .try_init()
        .map_err(|e| anyhow!("Could not install tracing subscriber: {e}"))
}

/// Like [`setup_simple_tracing`] but `RUST_LOG` directives take precedence over `default_level`
pub fn setup_env_tracing(default_level: Level) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .try_init()
        .map_err(|e| anyhow!("Could not install tracing subscriber: {e}"))
}

