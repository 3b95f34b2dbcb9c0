//! Interdigitated capacitor
//!
//! A coupling bar sits just inside the cavity, followed by the left and
//! right boundary bars that form a partial frame, two transition
//! patches dropping toward the inductor, and the finger stack. Finger
//! engagement per pair comes from the fill allocator.

use crate::cell::{rect, Cell, FlexPath};
use crate::error::DesignError;
use crate::fill::{allocate, resolve_fill, FillBounds};
use crate::layout::Frame;
use crate::params::ResonatorParams;

/// Build the capacitor cell.
pub fn capacitor(params: &ResonatorParams) -> Result<Cell, DesignError> {
    let frame = Frame::from_params(params)?;
    let mut cell = Cell::new("capacitor");

    // Coupling bar, shortened from the bottom as coupling_bar_height
    // grows; this is the knob the coupling sweep turns.
    let bar_bottom = frame.cavity_bottom + params.coupling_bar_gap + params.coupling_bar_height;
    let bar_top = frame.cavity_bottom + params.coupling_bar_gap + frame.coupling_bar_span;
    cell.add(rect(
        (frame.coupling_bar_left, bar_bottom),
        (frame.coupling_bar_left + params.coupling_bar_width, bar_top),
    ));

    // Left boundary bar.
    let bar_axis = frame.cap_midline - params.bar_height / 2.0;
    cell.extend(
        FlexPath::new((frame.frame_left, bar_axis), params.bar_height)
            .horizontal(frame.transition)
            .to_polygons(),
    );

    // Right boundary bar, turning up into the riser that encloses the
    // finger stack.
    let fingers = 2 * params.finger_pairs;
    let stack_top =
        frame.cap_midline + fingers as f64 * (params.finger_gap + params.finger_width);
    cell.extend(
        FlexPath::new((frame.right_bar_start, bar_axis), params.bar_height)
            .horizontal(frame.frame_right + params.bar_height / 2.0)
            .vertical(stack_top)
            .to_polygons(),
    );

    // Transition patches connecting the frame down toward the inductor.
    let patch_top = frame.cap_midline - params.bar_height;
    cell.add(rect(
        (frame.transition - params.bar_height, patch_top),
        (frame.transition, frame.upper_return),
    ));
    cell.add(rect(
        (frame.right_bar_start, patch_top),
        (frame.right_bar_start + params.bar_height, frame.upper_return),
    ));

    // Finger stack: pairs alternate left/right origin, starting from the
    // coupling-bar side, stepping up by finger_width + finger_gap. Each
    // extent is the pair allocation less one finger width.
    let bounds = FillBounds::from_params(params);
    let fill = resolve_fill(params, bounds);
    let allocation = allocate(fill, params.finger_pairs, bounds);

    let pitch = params.finger_gap + params.finger_width;
    let mut position = frame.cap_midline + params.finger_gap;
    for &added in &allocation.per_pair {
        cell.add(rect(
            (frame.frame_left, position),
            (
                frame.frame_left + added - params.finger_width,
                position + params.finger_width,
            ),
        ));
        position += pitch;
        cell.add(rect(
            (frame.frame_right, position),
            (
                frame.frame_right - added + params.finger_width,
                position + params.finger_width,
            ),
        ));
        position += pitch;
    }

    Ok(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_capacitor_polygon_count() {
        let cell = capacitor(&ResonatorParams::default()).unwrap();
        // coupling bar + 2 boundary bars + 2 patches + 14 fingers
        assert_eq!(cell.len(), 19);
    }

    #[test]
    fn coupling_bar_shrinks_from_the_bottom() {
        let full = capacitor(&ResonatorParams::default()).unwrap();
        assert_eq!(full.polygons()[0], rect((415.5, 10.5), (425.5, 139.5)));

        let shortened = capacitor(&ResonatorParams {
            coupling_bar_height: 20.0,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(shortened.polygons()[0], rect((415.5, 30.5), (425.5, 139.5)));
    }

    #[test]
    fn first_finger_pair_literal_coordinates() {
        // Default fill saturates every pair at max_fill = 398.
        let cell = capacitor(&ResonatorParams::default()).unwrap();
        let fingers = &cell.polygons()[5..];
        assert_eq!(fingers[0], rect((425.5, 77.0), (821.5, 79.0)));
        assert_eq!(fingers[1], rect((429.5, 81.0), (825.5, 83.0)));
    }

    #[test]
    fn fingers_alternate_origin_sides() {
        let cell = capacitor(&ResonatorParams::default()).unwrap();
        let fingers = &cell.polygons()[5..];
        assert_eq!(fingers.len(), 14);
        for (i, finger) in fingers.iter().enumerate() {
            let touches_left = finger.exterior().0.iter().any(|c| c.x == 425.5);
            let touches_right = finger.exterior().0.iter().any(|c| c.x == 825.5);
            if i % 2 == 0 {
                assert!(touches_left && !touches_right, "finger {i}");
            } else {
                assert!(touches_right && !touches_left, "finger {i}");
            }
        }
    }

    #[test]
    fn finger_stack_pitch() {
        let cell = capacitor(&ResonatorParams::default()).unwrap();
        let fingers = &cell.polygons()[5..];
        let bottoms: Vec<f64> = fingers
            .iter()
            .map(|f| {
                f.exterior()
                    .0
                    .iter()
                    .map(|c| c.y)
                    .fold(f64::MAX, f64::min)
            })
            .collect();
        for pair in bottoms.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 4.0);
        }
    }

    #[test]
    fn zero_fill_still_produces_minimum_fingers() {
        let cell = capacitor(&ResonatorParams {
            fill: Some(0.0),
            ..Default::default()
        })
        .unwrap();
        let fingers = &cell.polygons()[5..];
        assert_eq!(fingers.len(), 14);
        // base_fill = 400/2 + 400/6, minus one finger width
        let first = &fingers[0];
        let max_x = first
            .exterior()
            .0
            .iter()
            .map(|c| c.x)
            .fold(f64::MIN, f64::max);
        assert_relative_eq!(max_x - 425.5, 400.0 / 2.0 + 400.0 / 6.0 - 2.0);
    }

    #[test]
    fn capacitor_is_deterministic() {
        let p = ResonatorParams {
            fill: Some(1234.5),
            coupling_bar_height: 12.0,
            ..Default::default()
        };
        let a = capacitor(&p).unwrap();
        let b = capacitor(&p).unwrap();
        assert_eq!(a.polygons(), b.polygons());
    }
}
