use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use dial_ui::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "dial-studio", version, about = "Render an analog clock face")]
pub struct Cli {
    /// Log filter in env_logger syntax (overrides RUST_LOG).
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a single frame.
    Render(RenderArgs),
    /// Redraw once per tick, writing one SVG per frame.
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub clock: ClockArgs,

    /// Time to show (HH:MM or HH:MM:SS); defaults to the local wall clock.
    #[arg(long)]
    pub at: Option<TimeOfDay>,

    /// Output file; `.png` is rasterized, anything else is written as SVG.
    #[arg(long, short, default_value = "clock.svg")]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub clock: ClockArgs,

    /// Number of ticks to run; 0 runs until interrupted.
    #[arg(long, default_value_t = 10)]
    pub ticks: u64,

    /// Tick period in milliseconds.
    #[arg(long, default_value_t = 1000)]
    pub period_ms: u64,

    /// Directory receiving `frame-NNNNNN.svg` files.
    #[arg(long, default_value = "frames")]
    pub out_dir: PathBuf,
}

/// Layout and style options shared by every command.
#[derive(Debug, Clone, Args)]
pub struct ClockArgs {
    #[arg(long, default_value_t = 300.0)]
    pub width: f32,

    #[arg(long, default_value_t = 300.0)]
    pub height: f32,

    /// Clock frame size as a fraction of the viewport's shorter side.
    #[arg(long, default_value_t = DEFAULT_INSET_RATIO, value_parser = parse_inset)]
    pub inset: f32,

    #[arg(long, value_enum, default_value_t = LabelSet::Arabic)]
    pub labels: LabelSet,

    /// Paint the dial flat instead of with a centred radial gradient.
    #[arg(long)]
    pub solid_background: bool,

    #[arg(long)]
    pub no_hand_shadow: bool,

    #[arg(long)]
    pub no_label_shadow: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum LabelSet {
    Arabic,
    Roman,
}

impl ClockArgs {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn labels(&self) -> ClockLabels {
        match self.labels {
            LabelSet::Arabic => ClockLabels::arabic(),
            LabelSet::Roman => ClockLabels::roman(),
        }
    }

    pub fn style(&self) -> StyleDraft {
        let draft = if self.solid_background { StyleDraft::default() } else { StyleDraft::gradient() };
        draft.hand_shadow(!self.no_hand_shadow).label_shadow(!self.no_label_shadow)
    }

    pub fn view(&self) -> ClockView {
        ClockView::new(self.style(), self.labels()).with_inset(self.inset)
    }
}

impl RunArgs {
    /// Whether `written` frames exhaust the tick budget.
    pub fn is_done(&self, written: u64) -> bool {
        self.ticks != 0 && written >= self.ticks
    }
}

fn parse_inset(s: &str) -> Result<f32, String> {
    let ratio: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if ratio.is_finite() {
        Ok(ratio)
    } else {
        Err(format!("inset must be a finite number, got `{s}`"))
    }
}
