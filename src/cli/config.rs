use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::args::Cli;
use crate::subtitle::{PipelineConfig, RateConversion, Rational, ShiftOffset};

/// Defaults read from `config.toml`; command-line options take precedence
///
/// ```toml
/// clear = true
/// three = false
/// fps = ["25", "23.976"]
/// shift = "-1.5"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub clear: bool,
    pub three: bool,
    pub fps: Option<[String; 2]>,
    pub shift: Option<String>,
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("srttool").join("config.toml")
    } else {
        PathBuf::from("config.toml")
    }
}

/// Load the explicit config file, or the default one when it exists
pub fn load(explicit: Option<&Path>) -> Result<FileConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = get_config_path();
            if !path.exists() {
                return Ok(FileConfig::default());
            }
            path
        }
    };

    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}

pub fn parse(content: &str) -> Result<FileConfig> {
    Ok(toml::from_str(content)?)
}

/// Merge command-line options over file defaults
pub fn resolve(cli: &Cli, file: &FileConfig) -> Result<PipelineConfig> {
    let fps = match (&cli.fps, &file.fps) {
        (Some(rates), _) => match rates.as_slice() {
            [from, to] => Some(RateConversion::new(*from, *to)?),
            _ => anyhow::bail!("--fps takes exactly two values"),
        },
        (None, Some([from, to])) => Some(RateConversion::new(
            from.parse::<Rational>().context("Invalid fps in config")?,
            to.parse::<Rational>().context("Invalid fps in config")?,
        )?),
        (None, None) => None,
    };

    let shift = match (&cli.shift, &file.shift) {
        (Some(seconds), _) => Some(ShiftOffset::new(*seconds)),
        (None, Some(seconds)) => Some(ShiftOffset::new(
            seconds.parse().context("Invalid shift in config")?,
        )),
        (None, None) => None,
    };

    let clear = stage_enabled("clear", cli.clear, cli.no_clear, file.clear);
    let three = stage_enabled("three", cli.three, cli.no_three, file.three);

    Ok(PipelineConfig {
        fps,
        shift,
        clear,
        three,
    })
}

/// A command-line flag (or its `--no-` form) wins over the config file
fn stage_enabled(name: &str, flag: bool, negated: bool, from_file: bool) -> bool {
    if flag {
        return true;
    }
    if negated {
        return false;
    }
    if from_file {
        info!("'{}' enabled by config file (pass --no-{} to skip it)", name, name);
    }
    from_file
}
