// SPDX-License-Identifier: MPL-2.0
//! Application directory resolution.
//!
//! Two directories are used: the data directory (preset storage, persisted
//! state) and the config directory (`settings.toml`). Each is resolved in
//! this order:
//!
//! 1. **Explicit override**, passed to the `_with_override()` functions
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) registered through
//!    [`init_cli_overrides`]
//! 3. **Environment variables** (`ICON_FORGE_DATA_DIR`, `ICON_FORGE_CONFIG_DIR`)
//! 4. **Platform default** from the `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name appended to platform defaults.
const APP_NAME: &str = "IconForge";

/// Environment variable overriding the data directory.
pub const ENV_DATA_DIR: &str = "ICON_FORGE_DATA_DIR";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "ICON_FORGE_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the directories given on the command line.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    if CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("CLI data dir override already initialized");
    }
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("CLI config dir override already initialized");
    }
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: &OnceLock<Option<PathBuf>>,
    env_var: &str,
    platform: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the data directory, e.g. `~/.local/share/IconForge/` on Linux.
///
/// Returns `None` if no platform data directory exists.
#[must_use]
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the data directory, preferring `override_path` when given.
#[must_use]
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_DATA_DIR, ENV_DATA_DIR, dirs::data_dir)
}

/// Returns the config directory, e.g. `~/.config/IconForge/` on Linux.
#[must_use]
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, &CLI_CONFIG_DIR, ENV_CONFIG_DIR, dirs::config_dir)
}
