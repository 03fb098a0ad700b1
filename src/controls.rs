//! Viewer-side rotation state.
//!
//! [`ViewAngles`] models the two sliders of the viewer: heading sweeps a
//! full turn, pitch tilts at most a quarter turn either way. Values are kept
//! in degrees and clamped to the slider ranges.

use crate::math::mat3::Mat3;

pub const HEADING_MIN: f64 = 0.0;
pub const HEADING_MAX: f64 = 360.0;
pub const PITCH_MIN: f64 = -90.0;
pub const PITCH_MAX: f64 = 90.0;

pub const DEFAULT_HEADING: f64 = 180.0;
pub const DEFAULT_PITCH: f64 = 0.0;

/// Heading and pitch in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewAngles {
    heading: f64,
    pitch: f64,
}

impl Default for ViewAngles {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING,
            pitch: DEFAULT_PITCH,
        }
    }
}

impl ViewAngles {
    /// Creates angles clamped to the slider ranges. NaN falls back to the
    /// default for that slider.
    pub fn new(heading: f64, pitch: f64) -> Self {
        let mut angles = Self::default();
        angles.set_heading(heading);
        angles.set_pitch(pitch);
        angles
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Sets the heading, clamped to [0, 360]. Returns whether it changed.
    pub fn set_heading(&mut self, heading: f64) -> bool {
        Self::update(&mut self.heading, heading, HEADING_MIN, HEADING_MAX)
    }

    /// Sets the pitch, clamped to [-90, 90]. Returns whether it changed.
    pub fn set_pitch(&mut self, pitch: f64) -> bool {
        Self::update(&mut self.pitch, pitch, PITCH_MIN, PITCH_MAX)
    }

    pub fn nudge_heading(&mut self, delta: f64) -> bool {
        self.set_heading(self.heading + delta)
    }

    pub fn nudge_pitch(&mut self, delta: f64) -> bool {
        self.set_pitch(self.pitch + delta)
    }

    /// The rotation these angles describe, heading composed with pitch.
    pub fn transform(&self) -> Mat3 {
        Mat3::from_view_angles(self.heading, self.pitch)
    }

    fn update(slot: &mut f64, value: f64, min: f64, max: f64) -> bool {
        if value.is_nan() {
            return false;
        }
        let value = value.clamp(min, max);
        let changed = *slot != value;
        *slot = value;
        changed
    }
}
