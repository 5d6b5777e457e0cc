//! A 2D curve built from two splines over a shared parameter.

#[cfg(feature = "serde")]
use std::convert::TryFrom;

use kurbo::{BezPath, Point};
#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::error::{InvalidInput, SplineError};
use crate::path;
use crate::Spline;

/// A parametric curve `t -> (x(t), y(t))`.
///
/// Both coordinate splines are built over the same parameter values, which
/// makes it possible to draw curves that loop back or run vertically.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", try_from = "Components", into = "Components")
)]
pub struct ParametricSpline {
    x: Spline,
    y: Spline,
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(crate = "serde_")]
struct Components {
    x: Spline,
    y: Spline,
}

impl ParametricSpline {
    /// Added to every chord length in [`through_points`], so that repeated
    /// points still produce strictly increasing parameters.
    ///
    /// [`through_points`]: ParametricSpline::through_points
    pub const CHORD_EPSILON: f64 = 1e-5;

    /// Combine two splines that share their parameter values.
    pub fn new(x: Spline, y: Spline) -> Result<ParametricSpline, SplineError> {
        path::check_axes(x.x(), y.x())?;
        Ok(ParametricSpline { x, y })
    }

    /// Create a smooth curve through `pts`, parametrized by chord length.
    pub fn through_points(pts: &[Point]) -> Result<ParametricSpline, SplineError> {
        if pts.len() < 2 {
            return Err(InvalidInput::SinglePoint.into());
        }
        let mut t = Vec::with_capacity(pts.len());
        t.push(0.0);
        for w in pts.windows(2) {
            let last = t[t.len() - 1];
            t.push(last + (w[1] - w[0]).hypot() + Self::CHORD_EPSILON);
        }
        let xs = pts.iter().map(|p| p.x).collect();
        let ys = pts.iter().map(|p| p.y).collect();
        let x = Spline::new(t.clone(), xs)?;
        let y = Spline::new(t, ys)?;
        Ok(ParametricSpline { x, y })
    }

    /// The shared parameter values.
    pub fn params(&self) -> &[f64] {
        self.x.x()
    }

    /// The spline mapping the parameter to x.
    pub fn x_spline(&self) -> &Spline {
        &self.x
    }

    /// The spline mapping the parameter to y.
    pub fn y_spline(&self) -> &Spline {
        &self.y
    }

    /// The point on the curve at parameter `t`.
    pub fn at(&self, t: f64) -> Point {
        Point::new(self.x.at(t), self.y.at(t))
    }

    /// Render to a Bézier path, multiplying all coordinates by `scale`.
    pub fn to_path(&self, scale: f64) -> BezPath {
        let mut path = BezPath::new();
        self.render_extend(&mut path, scale);
        path
    }

    /// Render to a Bézier path.
    pub fn render(&self) -> BezPath {
        self.to_path(1.0)
    }

    /// Render the curve, appending to the given path.
    pub fn render_extend(&self, path: &mut BezPath, scale: f64) {
        path::extend_parametric(path, &self.x, &self.y, scale);
    }
}

#[cfg(feature = "serde")]
impl TryFrom<Components> for ParametricSpline {
    type Error = SplineError;

    fn try_from(c: Components) -> Result<ParametricSpline, SplineError> {
        ParametricSpline::new(c.x, c.y)
    }
}

#[cfg(feature = "serde")]
impl From<ParametricSpline> for Components {
    fn from(p: ParametricSpline) -> Components {
        Components { x: p.x, y: p.y }
    }
}
