//! Animation primitives: colours, breakpoint interpolation and timed
//! transitions.
//!
//! Everything here is pure or driven by an explicit clock (`Instant`
//! passed in), so the state machines built on top are deterministic
//! under test.

mod color;
mod interpolate;
mod timing;

pub use color::Rgba;
pub use interpolate::{Extrapolation, interpolate, interpolate_clamped, interpolate_color};
pub use timing::{AnimatedValue, Easing, Timing};
