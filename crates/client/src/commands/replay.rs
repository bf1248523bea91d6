//! Replay a scripted sequence of host events through the gauge service.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use gauge_content::load_document;
use gauge_runtime::{GaugeService, HostEvent, SessionOutcome};

use super::GaugeArgs;
use crate::config::ClientConfig;
use crate::render::ConsoleRenderer;

/// Feed an ordered list of host events to a live gauge
#[derive(Parser)]
pub struct Replay {
    /// Event script (.ron, .toml or .json): a list of host events
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    #[command(flatten)]
    gauge: GaugeArgs,
}

impl Replay {
    pub async fn execute(self, client: &ClientConfig) -> Result<()> {
        let (config, viewer) = self.gauge.resolve(client)?;
        let events = load_script(&self.script)?;

        tracing::info!(
            script = %self.script.display(),
            events = events.len(),
            "replaying host events"
        );

        let service = GaugeService::builder()
            .gauge_config(config)
            .viewer(viewer)
            .renderer(ConsoleRenderer::new())
            .start();
        let handle = service.handle();

        for (index, event) in events.into_iter().enumerate() {
            let name = event.name();
            let outcome = handle
                .dispatch(event)
                .await
                .with_context(|| format!("Failed to dispatch event {} ({})", index + 1, name))?;

            if let SessionOutcome::Ignored(reason) = outcome {
                println!(
                    "{} {} ignored: {}",
                    style(format!("[event {}]", index + 1)).dim(),
                    name,
                    reason
                );
            }
        }

        drop(handle);
        service.shutdown().await?;
        Ok(())
    }
}

fn load_script(path: &Path) -> Result<Vec<HostEvent>> {
    load_document(path).context("Failed to load event script")
}
