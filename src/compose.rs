//! Composite cells
//!
//! Part cells are built in one shared absolute frame, so composition is
//! identity placement followed by an eager flatten; composite cells are
//! never referenced by anything deeper.

use crate::cell::Cell;
use crate::error::DesignError;
use crate::params::ResonatorParams;
use crate::parts::{capacitor, feedline, inductor};

/// Inductor plus capacitor, flattened into one polygon list.
pub fn resonator(params: &ResonatorParams) -> Result<Cell, DesignError> {
    let mut cell = Cell::new("resonator");
    cell.absorb(inductor(params)?);
    cell.absorb(capacitor(params)?);
    Ok(cell)
}

/// The full pixel: inductor, capacitor, and feedline.
pub fn geometry(params: &ResonatorParams) -> Result<Cell, DesignError> {
    let mut cell = Cell::new("geometry");
    cell.absorb(inductor(params)?);
    cell.absorb(capacitor(params)?);
    cell.absorb(feedline(params)?);
    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn resonator_flattens_both_parts() {
        let p = ResonatorParams::default();
        let cell = resonator(&p).unwrap();
        let expected = inductor(&p).unwrap().len() + capacitor(&p).unwrap().len();
        assert_eq!(cell.len(), expected);
    }

    #[test]
    fn composition_does_not_drift_coordinates() {
        // The flattened bounding box must equal the union of the three
        // individually built parts' boxes.
        let p = ResonatorParams::default();
        let composite = geometry(&p).unwrap().bounding_box().unwrap();
        let merged = inductor(&p)
            .unwrap()
            .bounding_box()
            .unwrap()
            .merge(&capacitor(&p).unwrap().bounding_box().unwrap())
            .merge(&feedline(&p).unwrap().bounding_box().unwrap());
        assert_relative_eq!(composite.min.x, merged.min.x);
        assert_relative_eq!(composite.min.y, merged.min.y);
        assert_relative_eq!(composite.max.x, merged.max.x);
        assert_relative_eq!(composite.max.y, merged.max.y);
    }

    #[test]
    fn parts_align_without_manual_offsets() {
        // Shift a shared upstream parameter; every part must move with
        // it and still compose cleanly.
        let p = ResonatorParams {
            center_width: 10.0,
            bottom_ground_height: 20.0,
            ..Default::default()
        };
        let cell = geometry(&p).unwrap();
        let b = cell.bounding_box().unwrap();
        assert_relative_eq!(b.min.x, 0.0);
        assert_relative_eq!(b.min.y, 0.0);
        assert_relative_eq!(b.max.y, p.height);
    }

    #[test]
    fn geometry_is_deterministic() {
        let p = ResonatorParams {
            fill: Some(600.0),
            coupling_bar_height: 30.0,
            ..Default::default()
        };
        let a = geometry(&p).unwrap();
        let b = geometry(&p).unwrap();
        assert_eq!(a.polygons(), b.polygons());
    }
}
