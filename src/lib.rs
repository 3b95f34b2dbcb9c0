//! resomask: parametric photomask geometry for superconducting
//! microwave resonator arrays
//!
//! This crate builds the planar mask geometry of one resonator pixel —
//! coplanar-waveguide feedline, interdigitated capacitor, and
//! kinetic-inductance inductor — as watertight polygon cells in one
//! shared coordinate frame, ready for GDSII export and EM-solver
//! ingestion. It also post-processes simulated current-density maps
//! into a trace-width taper that equalizes inductance per unit length.
//!
//! Everything geometric is a pure function of [`ResonatorParams`]:
//! the same parameter set always yields bit-identical polygons, and
//! separately built parts compose at identity placement because every
//! offset derives from a single layout cursor.
//!
//! The EM solver, the resonance fitter, and the surrounding design
//! search are external collaborators; they consume only a cell's
//! flattened polygon list and bounding box.

pub mod cell;
pub mod compose;
pub mod error;
pub mod export;
pub mod fill;
pub mod layout;
pub mod params;
pub mod parts;
pub mod search;
pub mod taper;

pub use cell::{BoundingBox, Cell, FlexPath};
pub use error::DesignError;
pub use fill::{allocate, FillAllocation, FillBounds};
pub use params::ResonatorParams;
pub use taper::{taper_from_grid, taper_widths};

/// The three independently buildable mask parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Feedline,
    Capacitor,
    Inductor,
}

/// The two flattened composites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKind {
    /// Inductor plus capacitor
    Resonator,
    /// Inductor, capacitor, and feedline
    Geometry,
}

/// Build one mask part. Pure and deterministic in `params`.
pub fn build_part(kind: PartKind, params: &ResonatorParams) -> Result<Cell, DesignError> {
    match kind {
        PartKind::Feedline => parts::feedline(params),
        PartKind::Capacitor => parts::capacitor(params),
        PartKind::Inductor => parts::inductor(params),
    }
}

/// Build a flattened composite cell.
pub fn compose(kind: CompositeKind, params: &ResonatorParams) -> Result<Cell, DesignError> {
    match kind {
        CompositeKind::Resonator => compose::resonator(params),
        CompositeKind::Geometry => compose::geometry(params),
    }
}
