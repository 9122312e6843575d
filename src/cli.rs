// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use chrono::{DateTime, Local};
use clap::Parser;

use crate::scenes::SceneKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-animator")]
#[command(about = "Animated 3D scenes, windowed or headless", long_about = None)]
pub struct Cli {
    /// Scene to animate
    #[arg(long, value_enum, default_value = "globe")]
    pub scene: SceneKind,

    /// Render offscreen with a synthetic clock instead of opening a window
    #[arg(long)]
    pub headless: bool,

    /// Frames to run in headless mode
    #[arg(long, default_value_t = 120)]
    pub frames: u64,

    /// Seconds between headless frames
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub step: f32,

    /// Headless viewport width in device-independent pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Headless viewport height in device-independent pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Headless device pixel ratio (capped at 2)
    #[arg(long = "pixel-ratio", default_value_t = 1.0)]
    pub pixel_ratio: f32,

    /// PNG path for the last headless frame
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print a JSON snapshot of the final state to stdout
    #[arg(long)]
    pub report: bool,

    /// Root directory for texture lookup
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// Fixed seed for recoloring, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Where the headless frame goes: `--output`, or a timestamped name
    pub fn output_path(&self, now: DateTime<Local>) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "scene-animator-{}.png",
                now.format("%Y%m%d-%H%M%S")
            ))
        })
    }
}
