//! Resonator design parameters
//!
//! One explicit struct covers every dimensional knob of the pixel:
//! feedline, interdigitated capacitor, and kinetic-inductance inductor
//! all read from the same parameter set so that separately built parts
//! land in one shared coordinate frame. All lengths are in µm.
//!
//! Every field has a documented default and the struct deserializes
//! from a partial JSON overrides file (missing keys fall back to the
//! defaults).

use serde::{Deserialize, Serialize};

use crate::error::DesignError;

/// Full parameter set for one resonator pixel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResonatorParams {
    /// Feedline center conductor width (x axis)
    pub center_width: f64,
    /// Gap between the center strip and the ground planes
    pub gap: f64,
    /// Pixel height (y axis)
    pub height: f64,
    /// Narrow ground strip on the right side of the center strip
    pub ground2_width: f64,
    /// Ground pad below the cavity, right of the center strip
    pub bottom_ground_height: f64,
    /// Vertical gap between the ground pads; the resonator lives here
    pub cavity_height: f64,

    /// Inductor coupling length (horizontal run)
    pub inductor_length: f64,
    /// Clearance between the inductor trace and the waveguide
    pub spacing_between_inductor_waveguide: f64,
    /// Inductor trace width
    pub inductor_width: f64,
    /// Overlap between the two inductor fabrication layers
    pub inductor_overlap: f64,

    /// Gap between the waveguide and the coupling bar
    pub coupling_bar_gap: f64,
    /// Coupling bar width (x axis)
    pub coupling_bar_width: f64,
    /// Left boundary bar length
    pub left_bar_width: f64,
    /// Gap between the left and right boundary bars
    pub bar_gap: f64,
    /// Height of the capacitor boundary bars
    pub bar_height: f64,
    /// Total length of the capacitor frame (sets the finger span)
    pub bar_width: f64,
    /// Coupling bar shortening, measured up from the cavity bottom;
    /// 0 keeps the full-height bar
    pub coupling_bar_height: f64,

    /// Number of interdigitated finger pairs
    pub finger_pairs: usize,
    /// Gap between adjacent fingers
    pub finger_gap: f64,
    /// Finger width (y axis)
    pub finger_width: f64,
    /// Requested total finger engagement; defaults to the physical
    /// maximum when absent
    pub fill: Option<f64>,
    /// Alternative to `fill`: shorten the engagement by this much from
    /// the physical maximum. Takes precedence over `fill` when set.
    pub shrink: Option<f64>,

    /// Simulation grid pitch along x
    pub dx: f64,
    /// Simulation grid pitch along y
    pub dy: f64,
}

impl Default for ResonatorParams {
    fn default() -> Self {
        Self {
            center_width: 8.0,
            gap: 3.0,
            height: 150.0,
            ground2_width: 1.0,
            bottom_ground_height: 10.0,
            cavity_height: 130.0,
            inductor_length: 250.0,
            spacing_between_inductor_waveguide: 7.0,
            inductor_width: 2.0,
            inductor_overlap: 6.0,
            coupling_bar_gap: 0.5,
            coupling_bar_width: 10.0,
            left_bar_width: 41.5,
            bar_gap: 7.0,
            bar_height: 10.0,
            bar_width: 400.0,
            coupling_bar_height: 0.0,
            finger_pairs: 7,
            finger_gap: 2.0,
            finger_width: 2.0,
            fill: None,
            shrink: None,
            dx: 0.5,
            dy: 0.5,
        }
    }
}

impl ResonatorParams {
    /// Check that every base dimension is finite and non-negative.
    /// Derived-dimension checks live in [`crate::layout::Frame`].
    pub fn validate(&self) -> Result<(), DesignError> {
        let lengths: [(&'static str, f64); 18] = [
            ("center_width", self.center_width),
            ("gap", self.gap),
            ("height", self.height),
            ("ground2_width", self.ground2_width),
            ("bottom_ground_height", self.bottom_ground_height),
            ("cavity_height", self.cavity_height),
            ("inductor_length", self.inductor_length),
            (
                "spacing_between_inductor_waveguide",
                self.spacing_between_inductor_waveguide,
            ),
            ("inductor_width", self.inductor_width),
            ("inductor_overlap", self.inductor_overlap),
            ("coupling_bar_gap", self.coupling_bar_gap),
            ("coupling_bar_width", self.coupling_bar_width),
            ("left_bar_width", self.left_bar_width),
            ("bar_gap", self.bar_gap),
            ("bar_height", self.bar_height),
            ("bar_width", self.bar_width),
            ("finger_gap", self.finger_gap),
            ("finger_width", self.finger_width),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value < 0.0 {
                return Err(DesignError::configuration(name, value));
            }
        }
        if !self.coupling_bar_height.is_finite() || self.coupling_bar_height < 0.0 {
            return Err(DesignError::configuration(
                "coupling_bar_height",
                self.coupling_bar_height,
            ));
        }
        if !self.dx.is_finite() || self.dx <= 0.0 {
            return Err(DesignError::configuration("dx", self.dx));
        }
        if !self.dy.is_finite() || self.dy <= 0.0 {
            return Err(DesignError::configuration("dy", self.dy));
        }
        Ok(())
    }
}
