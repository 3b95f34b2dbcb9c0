//! Design-space schedule helpers
//!
//! Pure arithmetic backing the (fill, coupling-length) search over a
//! pixel array: the capacitor-fill schedule that spaces resonances
//! evenly in frequency, the coupling-length sweep, and the verdict on a
//! fitted coupling quality factor. Running the simulator and fitting
//! the scattering data belong to the orchestration layer, not here.

use crate::error::DesignError;

/// Capacitor fills hitting evenly spaced resonances between the two
/// extreme pixels.
///
/// `f_low` is the resonance of the fully filled capacitor, `f_high` the
/// resonance of the empty one. For a target frequency f the LC scaling
/// gives
///
/// ```text
/// fill(f) = (f_low/f)^2 * (f_high^2 - f^2) / (f_high^2 - f_low^2) * max_fill
/// ```
///
/// The schedule is returned lowest fill first and snapped to `d_fill`,
/// the smallest step that stays on the simulator grid.
pub fn fill_schedule(
    f_low: f64,
    f_high: f64,
    steps: usize,
    max_fill: f64,
    d_fill: f64,
) -> Result<Vec<f64>, DesignError> {
    if !(f_low > 0.0) || !(f_high > f_low) {
        return Err(DesignError::configuration("frequency_span", f_high - f_low));
    }
    if !(d_fill > 0.0) {
        return Err(DesignError::configuration("d_fill", d_fill));
    }
    if steps < 2 {
        return Err(DesignError::configuration("fill_steps", steps as f64));
    }

    let span = f_high * f_high - f_low * f_low;
    let step = (f_high - f_low) / (steps - 1) as f64;
    let mut fills: Vec<f64> = (0..steps)
        .map(|i| {
            let f = f_low + step * i as f64;
            let fill = (f_low / f).powi(2) * (f_high * f_high - f * f) / span * max_fill;
            (fill / d_fill).round() * d_fill
        })
        .collect();
    fills.reverse();
    Ok(fills)
}

/// Coupling-bar length sweep from zero to `max_length` on the simulator
/// grid.
pub fn coupling_lengths(max_length: f64, d_length: f64) -> Result<Vec<f64>, DesignError> {
    if !(d_length > 0.0) {
        return Err(DesignError::configuration("d_length", d_length));
    }
    if max_length < 0.0 {
        return Err(DesignError::configuration("max_length", max_length));
    }
    let count = (max_length / d_length).ceil() as usize;
    Ok((0..count).map(|i| i as f64 * d_length).collect())
}

/// Verdict on a fitted coupling quality factor during the length sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouplingVerdict {
    /// Q_c fell below the tolerance band: coupling overshot the target,
    /// longer bars only make it worse, stop this sweep
    TooStrong,
    /// Q_c landed inside the tolerance band: accept this design point
    Converged,
    /// Q_c is still above the band: keep increasing the coupling
    TooWeak,
}

/// Classify a fitted Q_c against `target` within `tolerance`.
pub fn assess_coupling(qc: f64, target: f64, tolerance: f64) -> CouplingVerdict {
    if qc < target - tolerance {
        CouplingVerdict::TooStrong
    } else if (qc - target).abs() < tolerance {
        CouplingVerdict::Converged
    } else {
        CouplingVerdict::TooWeak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn schedule_endpoints_hit_the_extreme_fills() {
        let fills = fill_schedule(4.0, 8.0, 10, 1950.0, 0.5).unwrap();
        assert_eq!(fills.len(), 10);
        // f = f_low -> full fill, f = f_high -> zero fill; reversed
        // output runs lowest first
        assert_relative_eq!(fills[0], 0.0);
        assert_relative_eq!(fills[9], 1950.0);
    }

    #[test]
    fn schedule_is_monotonic_and_on_grid() {
        let d_fill = 0.5;
        let fills = fill_schedule(4.0, 8.0, 10, 1950.0, d_fill).unwrap();
        for pair in fills.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        for &fill in &fills {
            assert_relative_eq!(fill, (fill / d_fill).round() * d_fill, epsilon = 1e-9);
        }
    }

    #[test]
    fn inverted_frequency_span_is_rejected() {
        assert!(fill_schedule(8.0, 4.0, 10, 1950.0, 0.5).is_err());
        assert!(fill_schedule(4.0, 8.0, 1, 1950.0, 0.5).is_err());
        assert!(fill_schedule(4.0, 8.0, 10, 1950.0, 0.0).is_err());
    }

    #[test]
    fn coupling_sweep_covers_the_grid() {
        let lengths = coupling_lengths(46.0, 0.5).unwrap();
        assert_eq!(lengths.len(), 92);
        assert_relative_eq!(lengths[0], 0.0);
        assert_relative_eq!(lengths[91], 45.5);
    }

    #[test]
    fn coupling_verdicts() {
        let target = 20_000.0;
        let tol = 10_000.0;
        assert_eq!(assess_coupling(5_000.0, target, tol), CouplingVerdict::TooStrong);
        assert_eq!(assess_coupling(25_000.0, target, tol), CouplingVerdict::Converged);
        assert_eq!(assess_coupling(50_000.0, target, tol), CouplingVerdict::TooWeak);
    }
}
