use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::seed::derive_seed;

/// Directory holding `config.toml`.
///
/// `$XDG_CONFIG_HOME/wildflower`, or `$HOME/.config/wildflower` when the
/// variable is unset or empty.
pub fn wildflower_home() -> PathBuf {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => PathBuf::from(env::var_os("HOME").unwrap_or_default()).join(".config"),
    };
    base.join("wildflower")
}

/// Top-level configuration structure loaded from `config.toml`.
///
/// Every key is optional; a missing file behaves like an empty one.
///
/// Example TOML:
/// ```toml
/// [garden]
/// density  = 0.3
/// margin   = 10
/// grass    = ","
/// avatar   = "@"
/// signpost = true
/// seed     = 1234
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub garden: GardenSettings,
}

/// The `[garden]` table.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GardenSettings {
    pub density: f64,
    pub margin: u16,
    pub grass: char,
    pub avatar: char,
    pub signpost: bool,
    pub seed: Option<u64>,
}

impl Default for GardenSettings {
    fn default() -> Self {
        Self {
            density: 0.3,
            margin: 10,
            grass: ',',
            avatar: '@',
            signpost: true,
            seed: None,
        }
    }
}

impl GardenSettings {
    /// Reject values the planter cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.density) {
            bail!("density must be between 0 and 1 (got {})", self.density);
        }
        Ok(())
    }

    /// Apply command-line overrides and pick the RNG seed.
    ///
    /// `density` replaces the configured one and is validated afterwards.
    /// The seed is the command-line value, else the configured one, else one
    /// derived from the garden's `name`.
    pub fn resolve(
        &mut self,
        density: Option<f64>,
        seed: Option<u64>,
        name: Option<&str>,
    ) -> Result<u64> {
        if let Some(d) = density {
            self.density = d;
        }
        self.validate()?;
        Ok(seed
            .or(self.seed)
            .unwrap_or_else(|| derive_seed(name)))
    }
}

/// Load `config.toml` from the resolved config directory.
///
/// # Errors
/// - Returns an error if the file exists but cannot be read or parsed.
pub fn load_config() -> Result<Config> {
    load_config_from(&wildflower_home().join("config.toml"))
}

/// Load a config file from an explicit path; a missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let txt = match fs::read_to_string(path) {
        Ok(txt) => txt,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let cfg: Config = toml::from_str(&txt)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    cfg.garden.validate()?;
    Ok(cfg)
}
