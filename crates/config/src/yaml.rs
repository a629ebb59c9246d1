// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use std::path::Path;

/// Read a yaml file and substitute `$VAR` / `${VAR}` references from the environment.
pub fn load_yaml_with_env(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)?;
    let expanded = shellexpand::env(&content).with_context(|| {
        format!(
            "Could not substitute environment variables in {}",
            path.display()
        )
    })?;
    Ok(expanded.into_owned())
}
