//! Monotone cubic interpolation over editable control points.
//! The curve passes through every control and never overshoots where the control values are monotone.
//!
//! # Example
//! ```
//! use monotone_spline::{Control, MonotoneSpline};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let mut spline = MonotoneSpline::new(vec![
//!     Control::new(1.0, 4.0),
//!     Control::new(0.0, 0.0),
//! ]);
//! spline.add_control(Control::new(0.5, 3.0));
//!
//! assert_eq!(vec![0.0, 0.5, 1.0], spline.control_keys());
//! assert_approx_eq!(3.0, spline.interpolate(0.5).unwrap(), 1e-12);
//! assert_approx_eq!(4.0, spline.interpolate(7.0).unwrap(), 1e-12);
//! ```

mod control;
mod hermite;
mod spline;

pub use control::Control;
pub use spline::{MonotoneSpline, SplineError};
