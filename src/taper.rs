//! Current-density-driven trace-width taper
//!
//! Given a 1D current-density profile J(x) sampled at uniform pitch
//! along a straight inductor run, solve for a position-dependent width
//! w(x) that keeps inductance per unit length constant while preserving
//! the total inductance of the original uniform trace:
//!
//! ```text
//! L per square is Ls * l / w, so dL = Ls * dl / w(x).
//! Requiring L_new / L_0 = 1 with w(x) = a * J(x) gives
//!     a = w0 * integral(dl / J) / l
//!     w(x) = w0 * J(x) * integral(dx / J(x)) / l
//! ```
//!
//! The quadrature runs in grid-cell units (unit sample spacing); `w0`
//! and `l` are converted by the grid pitch, and the result is scaled
//! back to µm and rounded to 0.01 µm, the fabrication grid.

use crate::error::DesignError;

/// Trapezoidal quadrature at unit sample spacing.
fn trapezoid(values: impl Iterator<Item = f64>) -> f64 {
    let mut previous: Option<f64> = None;
    let mut total = 0.0;
    for v in values {
        if let Some(p) = previous {
            total += 0.5 * (p + v);
        }
        previous = Some(v);
    }
    total
}

/// Reduce a current-density grid to a 1D profile by averaging across
/// the transverse (width) axis. Rows must be non-empty and equal length.
pub fn column_mean(grid: &[Vec<f64>]) -> Result<Vec<f64>, DesignError> {
    let rows = grid.len();
    let columns = grid.first().map(|r| r.len()).unwrap_or(0);
    if rows == 0 || columns == 0 {
        return Err(DesignError::computation("empty current-density grid"));
    }
    if grid.iter().any(|r| r.len() != columns) {
        return Err(DesignError::computation("ragged current-density grid"));
    }
    let mut profile = vec![0.0; columns];
    for row in grid {
        for (sum, &j) in profile.iter_mut().zip(row) {
            *sum += j;
        }
    }
    for sum in &mut profile {
        *sum /= rows as f64;
    }
    Ok(profile)
}

/// Compute the tapered width profile, one width per longitudinal grid
/// cell.
///
/// * `profile` — column-mean current density J(x), uniform pitch `dx`
/// * `w0` — reference uniform trace width, µm
/// * `l` — reference trace length, µm
/// * `dx`, `dy` — grid pitch, µm per cell
pub fn taper_widths(
    profile: &[f64],
    w0: f64,
    l: f64,
    dx: f64,
    dy: f64,
) -> Result<Vec<f64>, DesignError> {
    if profile.len() < 2 {
        return Err(DesignError::computation(format!(
            "current-density profile has {} samples, need at least 2",
            profile.len()
        )));
    }
    for (i, &j) in profile.iter().enumerate() {
        if !j.is_finite() || j <= 0.0 {
            return Err(DesignError::computation(format!(
                "current-density sample {i} is {j}; the quadrature of 1/J is undefined"
            )));
        }
    }
    for (name, value) in [("w0", w0), ("l", l), ("dx", dx), ("dy", dy)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(DesignError::computation(format!(
                "taper parameter {name} = {value} must be positive"
            )));
        }
    }

    let integral = trapezoid(profile.iter().map(|&j| 1.0 / j));
    let w0_cells = w0 / dy;
    let l_cells = l / dx;

    let widths = profile
        .iter()
        .map(|&j| {
            let w = w0_cells * j * integral / l_cells;
            // scale back to µm and round to the 0.01 µm process grid
            (w * dy * 100.0).round() / 100.0
        })
        .collect();
    Ok(widths)
}

/// Convenience entry point for a raw 2D current-density export: reduce
/// across the width axis, then taper.
pub fn taper_from_grid(
    grid: &[Vec<f64>],
    w0: f64,
    l: f64,
    dx: f64,
    dy: f64,
) -> Result<Vec<f64>, DesignError> {
    let profile = column_mean(grid)?;
    taper_widths(&profile, w0, l, dx, dy)
}
