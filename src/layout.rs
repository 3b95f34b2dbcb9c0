//! Layout cursor: the single offset-chain accumulator
//!
//! Every feature position in the pixel is a running sum of upstream
//! widths and gaps. The original mask scripts re-derived those sums
//! inline at every call site; here each named landmark is computed once
//! and every part builder reads the same values, so separately built
//! cells always land in one shared coordinate frame.
//!
//! All derived-dimension validation lives here. A negative span is a
//! caller configuration error and is reported, never clamped.

use crate::error::DesignError;
use crate::params::ResonatorParams;

/// Named x/y landmarks of one resonator pixel, all absolute, all in µm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Left ground block width; fixed at 50x the center conductor so the
    /// ground plane stays electrically infinite relative to the trace
    pub ground1_width: f64,
    /// Left edge of the center conductor strip
    pub center_left: f64,
    /// Right edge of the center conductor strip
    pub center_right: f64,
    /// Left edge of the narrow right-hand ground strip
    pub ground2_left: f64,
    /// Right edge of the right-hand ground strip; x origin of the cavity
    pub cavity_origin: f64,
    /// Left edge of the coupling bar
    pub coupling_bar_left: f64,
    /// Left face of the capacitor frame; origin of the left fingers
    pub frame_left: f64,
    /// End of the left boundary bar; transition into the inductor
    pub transition: f64,
    /// Start of the right boundary bar
    pub right_bar_start: f64,
    /// Right face of the capacitor frame; origin of the right fingers
    pub frame_right: f64,
    /// Length of the right boundary bar
    pub right_bar_width: f64,

    /// Bottom of the cavity (top of the bottom ground pad)
    pub cavity_bottom: f64,
    /// Top of the cavity (bottom of the top ground pad)
    pub cavity_top: f64,
    /// Full vertical span available to the coupling bar
    pub coupling_bar_span: f64,
    /// Top face of the boundary bars; the finger stack grows up from here
    pub cap_midline: f64,
    /// Bottom face of the inductor's upper return run
    pub upper_return: f64,
    /// Bottom face of the inductor's outbound run and of the taper cells
    pub trace_bottom: f64,
}

impl Frame {
    /// Walk the offset chain once and validate every derived span.
    pub fn from_params(p: &ResonatorParams) -> Result<Self, DesignError> {
        p.validate()?;

        let ground1_width = 50.0 * p.center_width;
        let center_left = ground1_width + p.gap;
        let center_right = center_left + p.center_width;
        let ground2_left = center_right + p.gap;
        let cavity_origin = ground2_left + p.ground2_width;
        let coupling_bar_left = cavity_origin + p.coupling_bar_gap;
        let frame_left = coupling_bar_left + p.coupling_bar_width;
        let transition = frame_left + p.left_bar_width;
        let right_bar_start = transition + p.bar_gap;
        let frame_right = frame_left + p.bar_width;

        let right_bar_width = p.bar_width - p.left_bar_width - p.bar_gap;
        if right_bar_width < 0.0 {
            return Err(DesignError::configuration("right_bar_width", right_bar_width));
        }

        let cavity_bottom = p.bottom_ground_height;
        let cavity_top = p.bottom_ground_height + p.cavity_height;
        if cavity_top > p.height {
            return Err(DesignError::configuration(
                "top_ground_height",
                p.height - cavity_top,
            ));
        }

        let coupling_bar_span = p.cavity_height - 2.0 * p.coupling_bar_gap;
        if coupling_bar_span < 0.0 {
            return Err(DesignError::configuration(
                "coupling_bar_span",
                coupling_bar_span,
            ));
        }
        if p.coupling_bar_height > coupling_bar_span {
            return Err(DesignError::configuration(
                "coupling_bar_length",
                coupling_bar_span - p.coupling_bar_height,
            ));
        }

        let cap_midline = cavity_bottom + p.coupling_bar_gap + coupling_bar_span / 2.0;
        let upper_return = cap_midline
            - p.bar_height
            - p.spacing_between_inductor_waveguide
            - p.inductor_width;
        let trace_bottom = cap_midline
            - p.bar_height
            - 2.0 * p.spacing_between_inductor_waveguide
            - 2.0 * p.inductor_width;

        // The outbound run must clear the bend allowance at its far end.
        let outbound_run = p.inductor_length - p.bar_height - p.inductor_width / 2.0;
        if outbound_run <= 0.0 {
            return Err(DesignError::configuration("inductor_run", outbound_run));
        }

        Ok(Frame {
            ground1_width,
            center_left,
            center_right,
            ground2_left,
            cavity_origin,
            coupling_bar_left,
            frame_left,
            transition,
            right_bar_start,
            frame_right,
            right_bar_width,
            cavity_bottom,
            cavity_top,
            coupling_bar_span,
            cap_midline,
            upper_return,
            trace_bottom,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_frame_landmarks() {
        let f = Frame::from_params(&ResonatorParams::default()).unwrap();
        assert_relative_eq!(f.ground1_width, 400.0);
        assert_relative_eq!(f.center_left, 403.0);
        assert_relative_eq!(f.center_right, 411.0);
        assert_relative_eq!(f.cavity_origin, 415.0);
        assert_relative_eq!(f.frame_left, 425.5);
        assert_relative_eq!(f.transition, 467.0);
        assert_relative_eq!(f.right_bar_start, 474.0);
        assert_relative_eq!(f.frame_right, 825.5);
        assert_relative_eq!(f.right_bar_width, 351.5);
        // Right bar closes the frame exactly.
        assert_relative_eq!(f.right_bar_start + f.right_bar_width, f.frame_right);
        assert_relative_eq!(f.cavity_bottom, 10.0);
        assert_relative_eq!(f.cavity_top, 140.0);
        assert_relative_eq!(f.coupling_bar_span, 129.0);
        assert_relative_eq!(f.cap_midline, 75.0);
        assert_relative_eq!(f.upper_return, 56.0);
        assert_relative_eq!(f.trace_bottom, 47.0);
    }

    #[test]
    fn oversized_bar_gap_is_a_configuration_error() {
        let p = ResonatorParams {
            bar_gap: 400.0,
            ..Default::default()
        };
        let err = Frame::from_params(&p).unwrap_err();
        match err {
            DesignError::Configuration { name, .. } => assert_eq!(name, "right_bar_width"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn coupling_bar_longer_than_cavity_is_rejected() {
        let p = ResonatorParams {
            coupling_bar_height: 1000.0,
            ..Default::default()
        };
        assert!(Frame::from_params(&p).is_err());
    }

    #[test]
    fn cavity_taller_than_pixel_is_rejected() {
        let p = ResonatorParams {
            cavity_height: 200.0,
            ..Default::default()
        };
        assert!(Frame::from_params(&p).is_err());
    }

    #[test]
    fn too_short_inductor_is_rejected() {
        let p = ResonatorParams {
            inductor_length: 5.0,
            ..Default::default()
        };
        match Frame::from_params(&p).unwrap_err() {
            DesignError::Configuration { name, .. } => assert_eq!(name, "inductor_run"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
