//! GDSII export boundary
//!
//! Flattened cells are serialized to GDSII for the photomask and EM
//! tool chain. Only the polygon lists cross this boundary: rectangles
//! and path outlines are already plain closed polygons by the time a
//! cell is flattened. Units are 1 µm user / 1 nm database, matching the
//! rest of the tool chain.

use anyhow::{anyhow, Result};
use gds21::{GdsBoundary, GdsElement, GdsLibrary, GdsPoint, GdsStruct, GdsUnits};
use std::path::Path;

use crate::cell::Cell;

/// GDS layer assignment, one layer per technology metal.
pub const LAYER_FEEDLINE: i16 = 0;
pub const LAYER_CAPACITOR: i16 = 1;
pub const LAYER_INDUCTOR: i16 = 2;

/// Micrometers to database units (nm).
const UM_TO_NM: f64 = 1000.0;

/// Write cells to a GDSII library, one struct per cell, each polygon a
/// boundary element on the cell's layer.
pub fn write_gds(path: &Path, library: &str, cells: &[(&Cell, i16)]) -> Result<()> {
    let mut lib = GdsLibrary::new(library);
    lib.units = GdsUnits(1e-3, 1e-9);

    for (cell, layer) in cells {
        let mut gds_struct = GdsStruct::new(cell.name());
        for polygon in cell.polygons() {
            let xy: Vec<GdsPoint> = polygon
                .exterior()
                .0
                .iter()
                .map(|c| {
                    GdsPoint::new(
                        (c.x * UM_TO_NM).round() as i32,
                        (c.y * UM_TO_NM).round() as i32,
                    )
                })
                .collect();
            if xy.len() < 4 {
                // not a closed polygon with area; nothing to emit
                continue;
            }
            let mut boundary = GdsBoundary::default();
            boundary.layer = *layer;
            boundary.datatype = 0;
            boundary.xy = xy;
            gds_struct.elems.push(GdsElement::GdsBoundary(boundary));
        }
        lib.structs.push(gds_struct);
    }

    lib.save(path)
        .map_err(|e| anyhow!("failed to write {}: {e:?}", path.display()))
}
