//! Command-line configuration for the viewer.

use std::path::PathBuf;

use clap::Parser;
use log::warn;

use crate::controls::{ViewAngles, DEFAULT_HEADING, DEFAULT_PITCH};
use crate::engine::RenderMode;

pub const DEFAULT_WIDTH: u32 = 400;
pub const DEFAULT_HEIGHT: u32 = 400;
/// Degrees one arrow key press moves a slider.
pub const DEFAULT_STEP: f64 = 5.0;

#[derive(Parser, Debug)]
#[command(
    name = "tetraview",
    version,
    about = "Software-rendered tetrahedron with heading/pitch controls"
)]
pub struct Args {
    /// Surface width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Initial heading in degrees, 0 to 360
    #[arg(long, default_value_t = DEFAULT_HEADING, allow_negative_numbers = true)]
    pub heading: f64,

    /// Initial pitch in degrees, -90 to 90
    #[arg(long, default_value_t = DEFAULT_PITCH, allow_negative_numbers = true)]
    pub pitch: f64,

    /// What to draw
    #[arg(long, value_enum, default_value_t = RenderMode::FilledWireframe)]
    pub mode: RenderMode,

    /// Render one frame to this PNG file instead of opening a window
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Degrees per arrow key press
    #[arg(long, default_value_t = DEFAULT_STEP, allow_negative_numbers = true)]
    pub step: f64,
}

/// Resolved viewer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub angles: ViewAngles,
    pub mode: RenderMode,
    pub snapshot: Option<PathBuf>,
    pub step: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            angles: ViewAngles::default(),
            mode: RenderMode::FilledWireframe,
            snapshot: None,
            step: DEFAULT_STEP,
        }
    }
}

impl Args {
    /// Validates the parsed arguments, clamping angles into slider range.
    pub fn into_config(self) -> ViewerConfig {
        let angles = ViewAngles::new(self.heading, self.pitch);
        if angles.heading() != self.heading || angles.pitch() != self.pitch {
            warn!(
                "angles ({}, {}) clamped to ({}, {})",
                self.heading,
                self.pitch,
                angles.heading(),
                angles.pitch()
            );
        }

        let step = if self.step.is_finite() && self.step > 0.0 {
            self.step
        } else {
            warn!("invalid step {}, using {DEFAULT_STEP}", self.step);
            DEFAULT_STEP
        };

        ViewerConfig {
            width: self.width,
            height: self.height,
            angles,
            mode: self.mode,
            snapshot: self.snapshot,
            step,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ViewerConfig {
        Args::try_parse_from(std::iter::once("tetraview").chain(args.iter().copied()))
            .unwrap()
            .into_config()
    }

    #[test]
    fn defaults_match_initial_window() {
        assert_eq!(parse(&[]), ViewerConfig::default());
    }

    #[test]
    fn window_outlines_by_default() {
        assert_eq!(parse(&[]).mode, RenderMode::FilledWireframe);
        assert_eq!(parse(&["--mode", "filled"]).mode, RenderMode::Filled);
        assert_ne!(parse(&[]).mode, RenderMode::default());
    }

    #[test]
    fn parses_all_options() {
        let config = parse(&[
            "--width",
            "640",
            "--height",
            "480",
            "--heading",
            "90",
            "--pitch",
            "-30",
            "--mode",
            "wireframe",
            "--snapshot",
            "out.png",
            "--step",
            "2.5",
        ]);
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.angles, ViewAngles::new(90.0, -30.0));
        assert_eq!(config.mode, RenderMode::Wireframe);
        assert_eq!(config.snapshot, Some(PathBuf::from("out.png")));
        assert_eq!(config.step, 2.5);
    }

    #[test]
    fn out_of_range_angles_are_clamped() {
        let config = parse(&["--heading", "720", "--pitch", "-100"]);
        assert_eq!(config.angles.heading(), 360.0);
        assert_eq!(config.angles.pitch(), -90.0);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Args::try_parse_from(["tetraview", "--width", "0"]).is_err());
    }

    #[test]
    fn non_positive_step_falls_back() {
        assert_eq!(parse(&["--step", "-3"]).step, DEFAULT_STEP);
    }
}
