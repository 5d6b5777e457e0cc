//! Renders a function spline and a parametric spline to an HTML page.
//!
//! Pass `--random` to use random points instead of the fixed set.

use rand::distributions::{Distribution, Uniform};

use kurbo::Point;

use tension_spline::{ParametricSpline, Spline};

fn fixed_points() -> Vec<Point> {
    let xs = [30., 160., 310., 420., 520., 610.];
    let ys = [250., 130., 180., 100., 160., 200.];
    xs.iter().zip(&ys).map(|(&x, &y)| Point::new(x, y)).collect()
}

fn random_points() -> Vec<Point> {
    let mut rng = rand::thread_rng();
    const N: usize = 8;
    let mut pts = (0..N)
        .map(|_| {
            let x = Uniform::from(0.0..640.0).sample(&mut rng);
            let y = Uniform::from(0.0..300.0).sample(&mut rng);
            Point::new(x, y)
        })
        .collect::<Vec<_>>();
    pts.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap());
    pts
}

fn main() {
    let random = std::env::args().skip(1).any(|arg| arg == "--random");
    let pts = if random { random_points() } else { fixed_points() };

    let xs = pts.iter().map(|p| p.x).collect::<Vec<_>>();
    let ys = pts.iter().map(|p| p.y).collect::<Vec<_>>();
    let function = match Spline::new(xs.clone(), ys.clone()) {
        Ok(spline) => spline,
        Err(e) => {
            eprintln!("can't build spline: {}", e);
            std::process::exit(1);
        }
    };
    let parametric = ParametricSpline::through_points(&pts).expect("at least two points");

    // Only a spline with increasing samples can be inverted, so check
    // inversion on the same abscissas with the ordinates sorted.
    let mut sorted_ys = ys;
    sorted_ys.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let y_mid = 0.5 * (sorted_ys[0] + sorted_ys[sorted_ys.len() - 1]);
    match Spline::new(xs, sorted_ys).and_then(|s| Ok((s.inverse(y_mid)?, s))) {
        Ok((x, increasing)) => {
            eprintln!("inverse({}) = {}, at({}) = {}", y_mid, x, x, increasing.at(x))
        }
        Err(e) => eprintln!("inverse({}): {}", y_mid, e),
    }

    println!(
        r##"<!DOCTYPE html>
<html>
    <body>
    <svg height="320" width="660">
      <path d="{}" fill="none" stroke="#00f" />
      <path d="{}" fill="none" stroke="#0a0" />"##,
        function.render().to_svg(),
        parametric.render().to_svg()
    );
    for pt in &pts {
        println!(
            r#"      <circle cx="{}" cy="{}" r="5" fill="red" />"#,
            pt.x, pt.y
        );
    }
    println!(
        r#"    </svg>
    </body>
</html>"#
    );
}
