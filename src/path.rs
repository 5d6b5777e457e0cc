//! Conversion of splines to Bézier paths.
//!
//! Each interval between two samples is a cubic Hermite segment, which is
//! exactly a cubic Bézier whose inner control points sit one third of the
//! interval along the end tangents.

use kurbo::{BezPath, Point};

use crate::error::{AxesMismatch, SplineError};
use crate::Spline;

impl Spline {
    /// Render the curve `y = f(x)` to a Bézier path.
    ///
    /// The path is one `MoveTo` to the first sample followed by one `CurveTo`
    /// per remaining sample. If `flip` is set, the coordinates of every point
    /// are swapped, so the sample abscissas run along the vertical axis.
    pub fn to_path(&self, flip: bool) -> BezPath {
        let (x, y, k) = (self.x(), self.y(), self.slopes());
        let pt = |px: f64, py: f64| {
            if flip {
                Point::new(py, px)
            } else {
                Point::new(px, py)
            }
        };
        let mut path = BezPath::new();
        path.move_to(pt(x[0], y[0]));
        for i in 1..x.len() {
            let il = i - 1;
            let dx3 = (x[i] - x[il]) / 3.0;
            path.curve_to(
                pt(x[il] + dx3, y[il] + k[il] * dx3),
                pt(x[i] - dx3, y[i] - k[i] * dx3),
                pt(x[i], y[i]),
            );
        }
        path
    }

    /// Render the spline to a Bézier path.
    pub fn render(&self) -> BezPath {
        self.to_path(false)
    }
}

/// Render the parametric curve `(x(t), y(t))` to a Bézier path.
///
/// `x_spline` maps the parameter to x and `y_spline` maps it to y; both must
/// have been built over the same parameter values. Every emitted coordinate
/// is multiplied by `scale`.
pub fn parametric_path(
    x_spline: &Spline,
    y_spline: &Spline,
    scale: f64,
) -> Result<BezPath, SplineError> {
    check_axes(x_spline.x(), y_spline.x())?;
    let mut path = BezPath::new();
    extend_parametric(&mut path, x_spline, y_spline, scale);
    Ok(path)
}

/// Append the parametric curve to `path`; the axes must already be checked.
pub(crate) fn extend_parametric(
    path: &mut BezPath,
    x_spline: &Spline,
    y_spline: &Spline,
    scale: f64,
) {
    let t = x_spline.x();
    let (x, kx) = (x_spline.y(), x_spline.slopes());
    let (y, ky) = (y_spline.y(), y_spline.slopes());
    let pt = |px: f64, py: f64| Point::new(scale * px, scale * py);
    path.move_to(pt(x[0], y[0]));
    for i in 1..t.len() {
        let il = i - 1;
        let dt3 = (t[i] - t[il]) / 3.0;
        path.curve_to(
            pt(x[il] + kx[il] * dt3, y[il] + ky[il] * dt3),
            pt(x[i] - kx[i] * dt3, y[i] - ky[i] * dt3),
            pt(x[i], y[i]),
        );
    }
}

/// Check that two parameter sequences are identical.
pub(crate) fn check_axes(t0: &[f64], t1: &[f64]) -> Result<(), AxesMismatch> {
    if t0.len() != t1.len() {
        return Err(AxesMismatch::Length {
            left: t0.len(),
            right: t1.len(),
        });
    }
    match t0.iter().zip(t1).position(|(a, b)| a != b) {
        Some(index) => Err(AxesMismatch::Value { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{ParamCurve, PathEl, PathSeg};

    fn reference() -> Spline {
        Spline::new(vec![0., 1., 3., 7., 9.], vec![1., 3., 5., 9., 16.]).unwrap()
    }

    #[test]
    fn one_curve_per_interval() {
        let spline = reference();
        let path = spline.render();
        let els = path.elements();
        assert_eq!(els.len(), spline.len());
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0., 1.)));
        assert!(els[1..].iter().all(|el| matches!(el, PathEl::CurveTo(..))));
    }

    #[test]
    fn control_points_follow_tangents() {
        let spline = Spline::new(vec![0., 3.], vec![0., 6.]).unwrap();
        let path = spline.to_path(false);
        assert_eq!(
            path.elements()[1],
            PathEl::CurveTo(Point::new(1., 2.), Point::new(2., 4.), Point::new(3., 6.))
        );
        let flipped = spline.to_path(true);
        assert_eq!(flipped.elements()[0], PathEl::MoveTo(Point::new(0., 0.)));
        assert_eq!(
            flipped.elements()[1],
            PathEl::CurveTo(Point::new(2., 1.), Point::new(4., 2.), Point::new(6., 3.))
        );
    }

    #[test]
    fn bezier_matches_spline() {
        let spline = reference();
        let path = spline.render();
        for (i, seg) in path.segments().enumerate() {
            let cubic = match seg {
                PathSeg::Cubic(c) => c,
                _ => panic!("expected cubic segment"),
            };
            for &t in &[0.0, 0.2, 0.5, 0.8, 1.0] {
                // x is linear in t, so the Bézier point lies on the curve.
                let p = cubic.eval(t);
                let expected = spline.x()[i] + t * (spline.x()[i + 1] - spline.x()[i]);
                assert!((p.x - expected).abs() < 1e-12);
                assert!((p.y - spline.at(p.x)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn parametric() {
        let t = vec![0., 1., 2.];
        let sx = Spline::new(t.clone(), vec![0., 10., 0.]).unwrap();
        let sy = Spline::new(t, vec![0., 5., 10.]).unwrap();
        let path = parametric_path(&sx, &sy, 1.0).unwrap();
        let els = path.elements();
        assert_eq!(els.len(), 3);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0., 0.)));
        let (kx, ky) = (sx.slopes(), sy.slopes());
        let dt3 = 1.0 / 3.0;
        assert_eq!(
            els[1],
            PathEl::CurveTo(
                Point::new(kx[0] * dt3, ky[0] * dt3),
                Point::new(10. - kx[1] * dt3, 5. - ky[1] * dt3),
                Point::new(10., 5.)
            )
        );

        let doubled = |p: Point| Point::new(2. * p.x, 2. * p.y);
        let scaled = parametric_path(&sx, &sy, 2.0).unwrap();
        for (el, scaled_el) in els.iter().zip(scaled.elements()) {
            let expected = match *el {
                PathEl::MoveTo(p) => PathEl::MoveTo(doubled(p)),
                PathEl::CurveTo(p1, p2, p3) => {
                    PathEl::CurveTo(doubled(p1), doubled(p2), doubled(p3))
                }
                _ => panic!("unexpected element {:?}", el),
            };
            assert_eq!(*scaled_el, expected);
        }
    }

    #[test]
    fn inconsistent_axes() {
        let a = Spline::new(vec![0., 1., 2.], vec![0., 1., 0.]).unwrap();
        let b = Spline::new(vec![0., 1.], vec![0., 1.]).unwrap();
        let c = Spline::new(vec![0., 1.5, 2.], vec![0., 1., 0.]).unwrap();
        assert_eq!(
            parametric_path(&a, &b, 1.0).unwrap_err(),
            SplineError::InconsistentAxes(AxesMismatch::Length { left: 3, right: 2 })
        );
        assert_eq!(
            parametric_path(&a, &c, 1.0).unwrap_err(),
            SplineError::InconsistentAxes(AxesMismatch::Value { index: 1 })
        );
    }
}
