//! Coplanar-waveguide feedline
//!
//! Left to right: the wide left ground block, a gap, the center
//! conductor, a second gap, the narrow right ground strip, then the two
//! ground pads whose vertical separation forms the cavity that houses
//! the resonator.

use crate::cell::{difference, rect, union, Cell};
use crate::error::DesignError;
use crate::layout::Frame;
use crate::params::ResonatorParams;

/// Build the feedline cell.
///
/// The ground set is the union of the two ground strips with the center
/// strip cut away; the center conductor is electrically isolated, not
/// an additive ground region, and is kept as its own polygon. Since the
/// three strips never overlap, the result is always the two original
/// ground rectangles.
pub fn feedline(params: &ResonatorParams) -> Result<Cell, DesignError> {
    let frame = Frame::from_params(params)?;

    let ground1 = rect((0.0, 0.0), (frame.ground1_width, params.height));
    let center = rect((frame.center_left, 0.0), (frame.center_right, params.height));
    let ground2 = rect((frame.ground2_left, 0.0), (frame.cavity_origin, params.height));

    // The pads stop 50 µm past the capacitor frame.
    let pad_width = params.coupling_bar_gap
        + params.coupling_bar_width
        + params.bar_width
        + params.bar_height
        + 50.0;
    let bottom_pad = rect(
        (frame.cavity_origin, 0.0),
        (frame.cavity_origin + pad_width, frame.cavity_bottom),
    );
    let top_pad = rect(
        (frame.cavity_origin, frame.cavity_top),
        (frame.cavity_origin + pad_width, params.height),
    );

    let grounds = difference(&union(&[ground1], &[ground2]), &[center.clone()]);

    let mut cell = Cell::new("feedline");
    cell.extend(grounds);
    cell.add(center);
    cell.add(bottom_pad);
    cell.add(top_pad);
    Ok(cell)
}
