//! Terminal drawing of gauge frames.
use async_trait::async_trait;
use console::{Style, style};

use gauge_core::{ForceMetrics, Side};
use gauge_runtime::{GaugeFrame, GaugeRenderer};

const BAR_WIDTH: usize = 20;

/// Prints every frame to stdout.
#[derive(Debug, Default)]
pub struct ConsoleRenderer {
    frames: usize,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GaugeRenderer for ConsoleRenderer {
    async fn render(&mut self, frame: &GaugeFrame, opened: bool) -> gauge_runtime::Result<()> {
        self.frames += 1;
        let status = if opened { "opened" } else { "updated" };
        println!(
            "{} {}",
            style(format!("[frame {}]", self.frames)).dim(),
            style(status).cyan()
        );
        for line in frame_lines(frame) {
            println!("{line}");
        }
        Ok(())
    }

    async fn close(&mut self) -> gauge_runtime::Result<()> {
        println!("{}", style("[gauge closed]").dim());
        Ok(())
    }
}

/// Summary lines for one frame: a header, then one block per side.
pub fn frame_lines(frame: &GaugeFrame) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({}, {} view)",
        style(&frame.window.title).bold(),
        frame.window.classes.join(" "),
        if frame.is_gm { "GM" } else { "player" }
    )];

    let reading = frame.reading();
    for side in [Side::Friendly, Side::Hostile] {
        lines.extend(side_lines(side, reading.side(side)));
    }
    lines
}

fn side_lines(side: Side, metrics: &ForceMetrics) -> Vec<String> {
    let (label, color) = match side {
        Side::Friendly => ("Friendly", Style::new().green()),
        Side::Hostile => ("Hostile", Style::new().red()),
    };

    vec![
        format!(
            "  {:<9}{} {:>3}%",
            color.apply_to(label).bold(),
            color.apply_to(bar(metrics.total)),
            metrics.total
        ),
        format!(
            "           hp {:>3}%  spell slots {:>3}%  resources {:>3}%",
            metrics.hp, metrics.spell_slots, metrics.resources
        ),
    ]
}

fn bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
