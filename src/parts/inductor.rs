//! Kinetic-inductance inductor
//!
//! A layer-overlap rectangle at the transition patch, then a single
//! bent trace: out along the cavity floor for the coupling length, up,
//! and back to the right transition patch. The tapered variant replaces
//! the outbound run with one rectangle per current-density grid cell.

use geo_types::Polygon;

use crate::cell::{rect, Cell, FlexPath};
use crate::error::DesignError;
use crate::layout::Frame;
use crate::params::ResonatorParams;

/// Overlap between the photosensitive and non-photosensitive inductor
/// layers, hanging off the left transition patch.
fn overlap_patch(frame: &Frame, params: &ResonatorParams) -> Polygon<f64> {
    rect(
        (frame.transition - params.bar_height, frame.trace_bottom),
        (
            frame.transition,
            frame.upper_return + params.inductor_overlap,
        ),
    )
}

/// Build the uniform-width inductor cell.
pub fn inductor(params: &ResonatorParams) -> Result<Cell, DesignError> {
    let frame = Frame::from_params(params)?;
    let mut cell = Cell::new("inductor");
    cell.add(overlap_patch(&frame, params));

    // Half the trace width offsets the centerline from the geometry
    // edges the frame tracks.
    let half = params.inductor_width / 2.0;
    let turn = frame.transition + params.inductor_length - params.bar_height - half;
    let trace = FlexPath::new((frame.transition, frame.trace_bottom + half), params.inductor_width)
        .horizontal(turn)
        .vertical(frame.upper_return + half)
        .horizontal(frame.right_bar_start);
    cell.extend(trace.to_polygons());
    Ok(cell)
}

/// Build the inductor with a piecewise-constant width taper.
///
/// `widths` is one width per longitudinal grid cell, as produced by
/// [`crate::taper::taper_widths`]; cells are `dx` wide and abut at the
/// grid pitch, growing up from the cavity floor.
pub fn tapered_inductor(
    params: &ResonatorParams,
    widths: &[f64],
) -> Result<Cell, DesignError> {
    let frame = Frame::from_params(params)?;
    if widths.is_empty() {
        return Err(DesignError::computation("empty taper width profile"));
    }
    if widths.iter().any(|w| !w.is_finite() || *w <= 0.0) {
        return Err(DesignError::computation(
            "taper width profile contains non-positive widths",
        ));
    }

    let mut cell = Cell::new("inductor");
    cell.add(overlap_patch(&frame, params));

    let mut x = frame.transition;
    for &width in widths {
        cell.add(rect(
            (x, frame.trace_bottom),
            (x + params.dx, frame.trace_bottom + width),
        ));
        x += params.dx;
    }

    // Riser starts two cells back so it lands inside the tapered run.
    let half = params.inductor_width / 2.0;
    let closing = FlexPath::new((x - 2.0 * params.dx, frame.trace_bottom), params.inductor_width)
        .vertical(frame.upper_return + half)
        .horizontal(frame.right_bar_start);
    cell.extend(closing.to_polygons());
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_inductor_shapes() {
        let cell = inductor(&ResonatorParams::default()).unwrap();
        // overlap rectangle plus the single-outline bent trace
        assert_eq!(cell.len(), 2);
        assert_eq!(cell.polygons()[0], rect((457.0, 47.0), (467.0, 62.0)));
    }

    #[test]
    fn trace_spans_the_coupling_length() {
        let cell = inductor(&ResonatorParams::default()).unwrap();
        let b = cell.bounding_box().unwrap();
        // outbound run turns at x = 467 + 250 - 10 - 1 = 706, and the
        // riser outline extends half a width past the centerline
        assert_relative_eq!(b.max.x, 707.0);
        assert_relative_eq!(b.min.x, 457.0);
        assert_relative_eq!(b.min.y, 47.0);
        assert_relative_eq!(b.max.y, 62.0);
    }

    #[test]
    fn longer_coupling_length_moves_the_turn() {
        let p = ResonatorParams {
            inductor_length: 900.0,
            ..Default::default()
        };
        let b = inductor(&p).unwrap().bounding_box().unwrap();
        assert_relative_eq!(b.max.x, 467.0 + 900.0 - 10.0);
    }

    #[test]
    fn tapered_inductor_emits_one_rectangle_per_cell() {
        let p = ResonatorParams::default();
        let widths = vec![2.0; 40];
        let cell = tapered_inductor(&p, &widths).unwrap();
        // overlap + 40 taper cells + closing path outline
        assert_eq!(cell.len(), 42);
        assert_eq!(cell.polygons()[1], rect((467.0, 47.0), (467.5, 49.0)));
        assert_eq!(cell.polygons()[40], rect((486.5, 47.0), (487.0, 49.0)));
    }

    #[test]
    fn taper_cells_abut_at_the_grid_pitch() {
        let p = ResonatorParams::default();
        let widths = vec![1.8, 2.0, 2.2, 2.0];
        let cell = tapered_inductor(&p, &widths).unwrap();
        for window in cell.polygons()[1..5].windows(2) {
            let right = window[0]
                .exterior()
                .0
                .iter()
                .map(|c| c.x)
                .fold(f64::MIN, f64::max);
            let left = window[1]
                .exterior()
                .0
                .iter()
                .map(|c| c.x)
                .fold(f64::MAX, f64::min);
            assert_relative_eq!(right, left);
        }
    }

    #[test]
    fn empty_taper_profile_is_rejected() {
        let p = ResonatorParams::default();
        assert!(tapered_inductor(&p, &[]).is_err());
        assert!(tapered_inductor(&p, &[2.0, 0.0]).is_err());
    }

    #[test]
    fn inductor_is_deterministic() {
        let p = ResonatorParams::default();
        let a = inductor(&p).unwrap();
        let b = inductor(&p).unwrap();
        assert_eq!(a.polygons(), b.polygons());
    }
}
