//! Subcommands of the `combat-gauge` binary.

mod evaluate;
mod replay;

pub use evaluate::Evaluate;
pub use replay::Replay;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use gauge_content::SettingsLoader;
use gauge_core::{DisplayMode, GaugeConfig};
use gauge_runtime::Viewer;

use crate::config::ClientConfig;

/// Options shared by every command that builds a gauge.
#[derive(Args, Debug, Default)]
pub struct GaugeArgs {
    /// Render as a game master
    #[arg(long)]
    gm: bool,

    /// Gauge settings file (TOML)
    #[arg(short, long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Display mode override (right, left or floating)
    #[arg(long, value_name = "MODE", value_parser = parse_display_mode)]
    mode: Option<DisplayMode>,
}

impl GaugeArgs {
    /// Settings file, then environment, then flags.
    fn resolve(&self, client: &ClientConfig) -> Result<(GaugeConfig, Viewer)> {
        let base = match &self.settings {
            Some(path) => SettingsLoader::load(path)?,
            None => GaugeConfig::default(),
        };

        let mut config = client.apply(base);
        if let Some(mode) = self.mode {
            config.display_mode = mode;
        }

        let viewer = if self.gm || client.is_gm {
            Viewer::gm("console")
        } else {
            Viewer::player("console")
        };

        tracing::debug!(?config, gm = viewer.is_gm, "resolved gauge settings");
        Ok((config, viewer))
    }
}

fn parse_display_mode(value: &str) -> Result<DisplayMode, String> {
    value
        .parse()
        .map_err(|_| format!("unknown display mode '{value}' (expected right, left or floating)"))
}
