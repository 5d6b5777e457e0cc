//! An interpolating spline for smooth curves through sample points.
//!
//! A [`Spline`] is a piecewise cubic curve `y = f(x)` that passes exactly
//! through its samples and has a continuous first derivative. It can be
//! evaluated, inverted when the samples increase in y, and rendered to a
//! [`kurbo::BezPath`] without approximation, since every piece is itself a
//! cubic Bézier.
//!
//! Two splines over the same parameter values make a 2D curve; see
//! [`ParametricSpline`].
//!
//! ```
//! use tension_spline::Spline;
//!
//! let spline = Spline::new(vec![0., 1., 3., 7.], vec![1., 3., 5., 9.]).unwrap();
//! assert_eq!(spline.at(3.0), 5.0);
//! let x = spline.inverse(4.0).unwrap();
//! assert!((spline.at(x) - 4.0).abs() < 1e-8);
//! println!("{}", spline.render().to_svg());
//! ```

mod error;
mod parametric;
pub mod path;
mod spline;
mod util;

pub use error::{AxesMismatch, InvalidInput, SplineError};
pub use parametric::ParametricSpline;
pub use spline::{Spline, DEFAULT_ACCURACY, MAX_INVERSE_ITERATIONS};
pub use util::search;
