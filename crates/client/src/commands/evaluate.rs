//! Evaluate a single combat snapshot.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use gauge_content::EncounterLoader;
use gauge_runtime::{GaugeFrame, GaugeSession, HostEvent, SessionOutcome};

use super::GaugeArgs;
use crate::config::ClientConfig;
use crate::render::frame_lines;

/// Evaluate one combat snapshot and print the gauge
#[derive(Parser)]
pub struct Evaluate {
    /// Snapshot file (.ron, .toml or .json)
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    #[command(flatten)]
    gauge: GaugeArgs,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Colored bars per side
    Summary,
    /// Template context as JSON
    Json,
}

impl Evaluate {
    pub fn execute(self, client: &ClientConfig) -> Result<()> {
        let (outcome, frame) = self.evaluate(client)?;

        if let SessionOutcome::Ignored(reason) = &outcome {
            eprintln!(
                "{} gauge would stay hidden ({})",
                style("note:").yellow().bold(),
                reason
            );
        }

        match self.format {
            OutputFormat::Summary => {
                for line in frame_lines(&frame) {
                    println!("{line}");
                }
            }
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(&frame).context("Failed to serialize frame")?;
                println!("{json}");
            }
        }

        Ok(())
    }

    /// Runs the snapshot through a fresh session. The frame is returned even
    /// when the gauge would stay hidden, so the numbers can still be read.
    fn evaluate(&self, client: &ClientConfig) -> Result<(SessionOutcome, GaugeFrame)> {
        let (config, viewer) = self.gauge.resolve(client)?;
        let combat = EncounterLoader::load(&self.snapshot)?;

        tracing::info!(
            snapshot = %self.snapshot.display(),
            combatants = combat.combatants.len(),
            "evaluating snapshot"
        );

        let mut session = GaugeSession::new(config, viewer);
        let outcome = session.handle(HostEvent::CombatUpdated(combat));
        let frame = session.frame();
        Ok((outcome, frame))
    }
}
