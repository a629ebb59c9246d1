// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::yaml::load_yaml_with_env;
use crate::PollConfig;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use path_clean::clean;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_CONFIG_NAME: &str = "tally.config.yaml";

/// Environment variables with this prefix override file values, eg. `TALLY_CHAIN_ID`
pub const ENV_PREFIX: &str = "TALLY_";

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

pub fn find_in_parent(path: &Path, filename: &str) -> Option<PathBuf> {
    path.ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.exists())
}

/// Work out which configuration file to read.
///
/// An explicitly supplied file always wins and is resolved against `cwd` when relative. Otherwise
/// the nearest `default_filename` in `cwd` or one of its parents is used. `None` means the poll
/// runs on built-in defaults.
pub fn resolve_config_path(
    find_in_parent: FindInParent,
    cwd: &Path,
    default_filename: &str,
    cli_file: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(cli_file) = cli_file {
        if cli_file.is_absolute() {
            return Some(cli_file);
        }
        return Some(clean(cwd.join(cli_file)));
    }

    find_in_parent(cwd, default_filename)
}

/// Load the poll configuration from the given file, the nearest `tally.config.yaml`, or the
/// built-in catalog, then apply `TALLY_*` environment overrides and validate the result.
pub fn load_config(config_file: Option<PathBuf>) -> Result<PollConfig> {
    let cwd = env::current_dir()?;
    let resolved = resolve_config_path(find_in_parent, &cwd, DEFAULT_CONFIG_NAME, config_file);

    let mut figment = Figment::from(Serialized::defaults(PollConfig::default()));

    match &resolved {
        Some(path) => {
            info!(path = %path.display(), "Loading poll configuration");
            let loaded_yaml = load_yaml_with_env(path)
                .with_context(|| format!("Configuration file {} not found", path.display()))?;
            figment = figment.merge(Yaml::string(&loaded_yaml));
        }
        None => debug!("No configuration file found, using the built-in catalog"),
    }

    let config: PollConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("Could not parse configuration")?;

    config.validate().context("Invalid question catalog")?;

    Ok(config)
}
