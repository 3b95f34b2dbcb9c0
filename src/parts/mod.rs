//! Part builders: feedline, interdigitated capacitor, inductor
//!
//! Each builder is a pure function of the parameter set. All three read
//! the same [`crate::layout::Frame`], so cells built separately share
//! one absolute coordinate frame and compose without translation.

mod capacitor;
mod feedline;
mod inductor;

pub use capacitor::capacitor;
pub use feedline::feedline;
pub use inductor::{inductor, tapered_inductor};
