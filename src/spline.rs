//! The interpolating spline.

#[cfg(feature = "serde")]
use std::convert::TryFrom;

#[cfg(feature = "serde")]
use serde_::{Deserialize, Serialize};

use crate::error::{InvalidInput, SplineError};
use crate::util;

/// The residual accepted by [`Spline::inverse`].
pub const DEFAULT_ACCURACY: f64 = 1e-8;

/// Upper bound on root finder steps for a single inversion.
///
/// Bisection alone reaches the resolution of an `f64` in the unit interval
/// in well under this many steps.
pub const MAX_INVERSE_ITERATIONS: usize = 100;

/// A smooth curve `y = f(x)` through a sequence of samples.
///
/// Between two consecutive samples the curve is a cubic Hermite segment. The
/// tangent slopes at the samples are chosen so that the first derivative is
/// continuous across every interior sample. Outside the sample range the
/// curve continues as a straight line along the boundary tangent.
///
/// A `Spline` cannot be changed after it is built; edits to the samples
/// mean building a new one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_", try_from = "Samples", into = "Samples")
)]
pub struct Spline {
    x: Vec<f64>,
    y: Vec<f64>,
    /// Tangent slope at each sample.
    k: Vec<f64>,
    /// `true` if every sample is strictly above the previous one.
    increasing_y: bool,
}

/// The serialized form of a spline; slopes are always re-solved.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(crate = "serde_")]
struct Samples {
    x: Vec<f64>,
    y: Vec<f64>,
}

/// One interval of the curve in Bézier form, over a local parameter `t` in `0..=1`.
struct Segment {
    dx: f64,
    yl: f64,
    yc: f64,
    dy: f64,
    a: f64,
    b: f64,
}

impl Spline {
    /// Build a spline through the points `(x[i], y[i])`.
    ///
    /// `x` must be strictly increasing and both sequences must have the
    /// same length, at least two.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Spline, SplineError> {
        let n1 = x.len();
        if n1 < 2 {
            return Err(InvalidInput::SinglePoint.into());
        }
        if n1 != y.len() {
            return Err(InvalidInput::LengthMismatch { x: n1, y: y.len() }.into());
        }
        // Written as a negation so that NaN steps are refused as well.
        if let Some(index) = x.windows(2).position(|w| !(w[1] - w[0] > 0.0)) {
            return Err(InvalidInput::NonIncreasingX { index }.into());
        }
        let (k, increasing_y) = solve_slopes(&x, &y);
        log::trace!(
            "built spline with {} samples, increasing y: {}",
            n1,
            increasing_y
        );
        Ok(Spline {
            x,
            y,
            k,
            increasing_y,
        })
    }

    /// Build a spline, copying the samples.
    pub fn from_slices(x: &[f64], y: &[f64]) -> Result<Spline, SplineError> {
        Spline::new(x.to_vec(), y.to_vec())
    }

    /// Build a spline from single precision samples.
    pub fn from_f32(x: &[f32], y: &[f32]) -> Result<Spline, SplineError> {
        if x.len() != y.len() {
            return Err(InvalidInput::LengthMismatch {
                x: x.len(),
                y: y.len(),
            }
            .into());
        }
        let widen = |v: &[f32]| -> Vec<f64> { v.iter().copied().map(f64::from).collect() };
        Spline::new(widen(x), widen(y))
    }

    /// The sample abscissas.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The sample ordinates.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The tangent slope of the curve at each sample.
    pub fn slopes(&self) -> &[f64] {
        &self.k
    }

    /// The number of samples; always at least two.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether [`inverse`](Spline::inverse) is supported.
    ///
    /// Note that increasing samples do not guarantee the curve itself is
    /// monotonic between them.
    pub fn is_increasing_y(&self) -> bool {
        self.increasing_y
    }

    /// Evaluate the curve at `xt`.
    ///
    /// `at(x[i]) == y[i]` exactly for every sample.
    pub fn at(&self, xt: f64) -> f64 {
        let (x, y, k) = (&self.x, &self.y, &self.k);
        let n = x.len() - 1;
        let i = util::lower_bound(x, xt);
        if i > n {
            return k[n] * (xt - x[n]) + y[n];
        }
        if x[i] == xt {
            return y[i];
        }
        if i == 0 {
            return k[0] * (xt - x[0]) + y[0];
        }
        let il = i - 1;
        let seg = self.segment(il);
        seg.value((xt - x[il]) / seg.dx)
    }

    /// The curve parameter for `xt`.
    ///
    /// This is the fractional sample index: `param(x[i]) == i` and values in
    /// between are linearly interpolated. Outside the sample range the first
    /// or last interval is extended.
    pub fn param(&self, xt: f64) -> f64 {
        let x = &self.x;
        let n = x.len() - 1;
        let i = util::lower_bound(x, xt);
        if i > n {
            return n as f64 + (xt - x[n]) / (x[n] - x[n - 1]);
        }
        if x[i] == xt {
            return i as f64;
        }
        if i == 0 {
            return (xt - x[0]) / (x[1] - x[0]);
        }
        let il = i - 1;
        il as f64 + (xt - x[il]) / (x[i] - x[il])
    }

    /// Find `xt` such that `at(xt) == yt`, to within [`DEFAULT_ACCURACY`].
    pub fn inverse(&self, yt: f64) -> Result<f64, SplineError> {
        self.inverse_with_accuracy(yt, DEFAULT_ACCURACY)
    }

    /// Find `xt` such that `|at(xt) - yt| < max_err`.
    ///
    /// This requires the samples to be increasing in y. If the curve is not
    /// monotonic inside the interval containing `yt`, which of the solutions
    /// is found is unspecified, but the result always lies in that interval.
    pub fn inverse_with_accuracy(&self, yt: f64, max_err: f64) -> Result<f64, SplineError> {
        if !self.increasing_y {
            return Err(SplineError::NotIncreasing);
        }
        let (x, y, k) = (&self.x, &self.y, &self.k);
        let n = x.len() - 1;
        let i = util::lower_bound(y, yt);
        if i > n {
            return Ok((yt - y[n]) / k[n] + x[n]);
        }
        if y[i] == yt {
            return Ok(x[i]);
        }
        if i == 0 {
            return Ok((yt - y[0]) / k[0] + x[0]);
        }
        let il = i - 1;
        let seg = self.segment(il);
        Ok(x[il] + seg.solve(yt, max_err) * seg.dx)
    }

    fn segment(&self, il: usize) -> Segment {
        let i = il + 1;
        let dx = self.x[i] - self.x[il];
        let yl = self.y[il];
        let yc = self.y[i];
        let dy = yc - yl;
        Segment {
            dx,
            yl,
            yc,
            dy,
            a: self.k[il] * dx - dy,
            b: dy - self.k[i] * dx,
        }
    }
}

/// Solve for the tangent slopes, and check whether y is increasing.
///
/// The slopes satisfy, with `s[i] = 1 / (x[i + 1] - x[i])` and
/// `r[i] = 3 * (y[i + 1] - y[i]) * s[i]^2`:
///
/// ```text
/// 2*s[0]*k[0] + s[0]*k[1] = r[0]
/// s[i-1]*k[i-1] + 2*(s[i-1] + s[i])*k[i] + s[i]*k[i+1] = r[i-1] + r[i]
/// s[n-1]*k[n-1] + 2*s[n-1]*k[n] = r[n-1]
/// ```
///
/// The system is tridiagonal. Forward elimination finds `a[i]`, `b[i]` with
/// `k[i-1] = a[i]*k[i] + b[i]`, and back substitution recovers `k`.
///
/// `x` must already be validated: at least two samples, strictly increasing.
fn solve_slopes(x: &[f64], y: &[f64]) -> (Vec<f64>, bool) {
    let n1 = x.len();
    let n = n1 - 1;
    let mut k = vec![0.0; n1];

    if n == 1 {
        k[0] = (y[1] - y[0]) / (x[1] - x[0]);
        k[1] = k[0];
        let increasing_y = k[0] > 0.0;
        return (k, increasing_y);
    }

    let mut a = vec![0.0; n1];
    let mut b = vec![0.0; n1];

    // sl, rl are s[i-1], r[i-1]; sc, rc are s[i], r[i].
    let mut sl = 1.0 / (x[1] - x[0]);
    let mut rl = 3.0 * (y[1] - y[0]) * sl * sl;
    let mut increasing_y = rl > 0.0;
    a[1] = -0.5;
    b[1] = rl / (2.0 * sl);
    for i in 1..n {
        let i1 = i + 1;
        let sc = 1.0 / (x[i1] - x[i]);
        let rc = 3.0 * (y[i1] - y[i]) * sc * sc;
        if rc <= 0.0 {
            increasing_y = false;
        }
        let d = sl * a[i] + 2.0 * (sc + sl);
        a[i1] = -sc / d;
        b[i1] = (rl + rc - sl * b[i]) / d;
        sl = sc;
        rl = rc;
    }

    k[n] = (rl - sl * b[n]) / (sl * (2.0 + a[n]));
    for i in (1..=n).rev() {
        k[i - 1] = a[i] * k[i] + b[i];
    }
    (k, increasing_y)
}

impl Segment {
    /// The cubic at `t`; exactly `yl` at 0 and `yc` at 1.
    fn value(&self, t: f64) -> f64 {
        let q = 1.0 - t;
        q * (self.yl + t * (self.a * q + self.b * t)) + t * self.yc
    }

    /// Derivative of [`value`](Segment::value) with respect to `t`.
    fn derivative(&self, t: f64) -> f64 {
        let q = 1.0 - t;
        self.dy + q * (self.a * q - 2.0 * t * (self.a - self.b)) - self.b * t * t
    }

    /// Find `t` in `0..=1` where the segment reaches `yt`.
    ///
    /// This is Newton's method guarded by a bracket `[tl, tr]` around the
    /// root. A Newton step is only taken while the error keeps shrinking as
    /// fast as expected and the new estimate lands strictly inside the
    /// bracket; otherwise the bracket is bisected. Since bisection halves the
    /// bracket every time it runs, the loop converges even where Newton
    /// would not, for example near an inflection point.
    ///
    /// `yt` must lie strictly between `yl` and `yc`, with `yl < yc`.
    fn solve(&self, yt: f64, max_err: f64) -> f64 {
        let mut t = (yt - self.yl) / self.dy;
        let mut tl = 0.0;
        let mut tr = 1.0;
        let mut expected_err = self.dy;
        for _ in 0..MAX_INVERSE_ITERATIONS {
            let err_r = self.value(t) - yt;
            if err_r > 0.0 {
                tr = t;
            } else {
                tl = t;
            }
            let err = err_r.abs();
            if err < max_err || tl >= tr {
                return t;
            }
            if err < expected_err {
                let next = t - err_r / self.derivative(t);
                if tl < next && next < tr {
                    t = next;
                    expected_err = 0.5 * err;
                    continue;
                }
            }
            expected_err = err;
            t = 0.5 * (tl + tr);
        }
        log::debug!(
            "inverse for y = {} stopped after {} iterations, bracket [{}, {}]",
            yt,
            MAX_INVERSE_ITERATIONS,
            tl,
            tr
        );
        t
    }
}

#[cfg(feature = "serde")]
impl TryFrom<Samples> for Spline {
    type Error = SplineError;

    fn try_from(samples: Samples) -> Result<Spline, SplineError> {
        Spline::new(samples.x, samples.y)
    }
}

#[cfg(feature = "serde")]
impl From<Spline> for Samples {
    fn from(spline: Spline) -> Samples {
        Samples {
            x: spline.x,
            y: spline.y,
        }
    }
}
