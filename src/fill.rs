//! Finger-fill allocation
//!
//! Distributes a requested total engagement length over a fixed number
//! of interdigitated finger pairs. Each pair takes as much as it can up
//! to `max_fill`; a remainder too small to form a valid finger is
//! clamped up to `base_fill`, so the realized total can exceed the
//! request. The clamp-then-accumulate order matches the measured
//! behavior of fabricated arrays and must not be reordered.
//!
//! Out-of-range requests are recoverable by contract: designers sweep
//! past the nominal bounds during the design-space search, so the
//! allocator warns and proceeds with the clamped allocation.

use tracing::warn;

use crate::params::ResonatorParams;

/// Per-finger engagement bounds derived from the capacitor frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillBounds {
    /// Minimum engagement of a single finger; the capacitor never has
    /// truly absent fingers
    pub base_fill: f64,
    /// Maximum engagement of a single finger
    pub max_fill: f64,
}

impl FillBounds {
    pub fn from_params(p: &ResonatorParams) -> Self {
        FillBounds {
            base_fill: p.bar_width / 2.0 + p.bar_width / 6.0,
            max_fill: p.bar_width - p.finger_gap,
        }
    }

    /// Largest total engagement the frame can hold.
    pub fn capacity(&self, finger_pairs: usize) -> f64 {
        self.max_fill * finger_pairs as f64
    }
}

/// Result of distributing a fill request over the finger pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct FillAllocation {
    /// Engagement per pair, in stacking order from the boundary bars up
    pub per_pair: Vec<f64>,
    /// The fill that was asked for
    pub requested: f64,
    /// The fill that was actually allocated
    pub realized: f64,
}

impl FillAllocation {
    /// True when the minimum-finger clamp pushed the realized total past
    /// the request.
    pub fn overshot(&self) -> bool {
        self.realized > self.requested
    }
}

/// Resolve the requested fill from the parameter set.
///
/// `shrink` takes precedence and measures down from the frame capacity;
/// otherwise `fill` is used directly, defaulting to the capacity.
/// Requests outside `[0, capacity]` warn and proceed.
pub fn resolve_fill(p: &ResonatorParams, bounds: FillBounds) -> f64 {
    let capacity = bounds.capacity(p.finger_pairs);
    let fill = match (p.shrink, p.fill) {
        (Some(shrink), _) => {
            if shrink < 0.0 {
                warn!(shrink, "the 'shrink' parameter should be positive");
            } else if shrink > capacity {
                warn!(
                    shrink,
                    capacity, "'shrink' is larger than the maximum value possible for the current geometry"
                );
            }
            capacity - shrink
        }
        (None, Some(fill)) => fill,
        (None, None) => capacity,
    };
    if fill < 0.0 {
        warn!(fill, "the 'fill' parameter should be positive");
    } else if fill > capacity {
        warn!(
            fill,
            capacity, "'fill' is larger than the maximum value possible for the current geometry"
        );
    }
    fill
}

/// Distribute `fill` across `finger_pairs` allocations.
///
/// Each allocation is `min(max_fill, fill - used)`, clamped up to
/// `base_fill` when the remainder is too small. The clamp makes the
/// total overshoot small requests instead of dropping fingers.
pub fn allocate(fill: f64, finger_pairs: usize, bounds: FillBounds) -> FillAllocation {
    let mut per_pair = Vec::with_capacity(finger_pairs);
    let mut used = 0.0_f64;
    for _ in 0..finger_pairs {
        let mut added = bounds.max_fill.min(fill - used);
        if added < bounds.base_fill {
            added = bounds.base_fill;
        }
        used += added;
        per_pair.push(added);
    }
    FillAllocation {
        per_pair,
        requested: fill,
        realized: used,
    }
}
