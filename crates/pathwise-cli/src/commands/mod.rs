pub mod engagement;
pub mod init;
pub mod insight;
pub mod quiz;
pub mod risk;
pub mod roster;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use pathwise_core::config::load_config_from;
use pathwise_core::parser::parse_roster;
use pathwise_core::roster::Roster;

/// Load the roster named on the command line, or the one in the config.
pub fn load_roster(roster: Option<PathBuf>, config: Option<&Path>) -> Result<Roster> {
    let path = match roster {
        Some(path) => path,
        None => load_config_from(config)?.roster.ok_or_else(|| {
            anyhow::anyhow!("no roster given; pass --roster or set `roster` in pathwise.toml")
        })?,
    };
    tracing::debug!(path = %path.display(), "loading roster");
    parse_roster(&path)
}
