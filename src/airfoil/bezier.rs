use crate::airfoil::spacing::{spacing, SpacingMethod};
use crate::airfoil::{mid_point, Airfoil};
use crate::errors::AirfoilError;
use itertools::Itertools;
use log::{debug, trace};
use ncollide2d::na::Point2;

/// Sampling options for the Bezier airfoil
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierParams {
    /// Total trailing edge thickness, split evenly above and below the chord line
    pub te_thickness: f64,

    /// Number of stations on each surface, not counting the leading edge
    pub points: usize,

    pub spacing: SpacingMethod,
}

impl Default for BezierParams {
    fn default() -> Self {
        BezierParams::new(0.00252, 100, SpacingMethod::Cosine)
    }
}

impl BezierParams {
    pub fn new(te_thickness: f64, points: usize, spacing: SpacingMethod) -> Self {
        BezierParams {
            te_thickness,
            points,
            spacing,
        }
    }
}

/// Evaluates one coordinate of a quadratic Bezier curve at the parameter `t`
fn b2(t: f64, p0: f64, p1: f64, p2: f64) -> f64 {
    p1 + (p0 - p1) * (1.0 - t).powi(2) + (p2 - p1) * t.powi(2)
}

/// Solves `x = b2(t, a, b, c)` for t, clamped to [0, 1]
fn b2_find_t(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if a == b && b == c {
        return 0.0;
    }

    let d = (c * x + x * a - 2.0 * x * b + b.powi(2) - c * a).abs();

    // Rationalized root, so a quadratic term that is only rounding noise away from zero doesn't
    // end up in a denominator. With a + c == 2b this is exactly (x - a) / (2 (b - a)).
    let den = (b - a) + d.sqrt();
    let t = if den != 0.0 {
        (x - a) / den
    } else if a + c != 2.0 * b {
        (a - b + d.sqrt()) / (c + a - 2.0 * b)
    } else {
        (x - a) / (2.0 * (b - a))
    };

    t.clamp(0.0, 1.0)
}

/// A single quadratic Bezier segment which is monotonic in x, so that it can be evaluated as a
/// function y(x) over the interval (p0.x, p2.x]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub p0: Point2<f64>,
    pub p1: Point2<f64>,
    pub p2: Point2<f64>,
}

impl QuadraticBezier {
    pub fn new(p0: Point2<f64>, p1: Point2<f64>, p2: Point2<f64>) -> QuadraticBezier {
        QuadraticBezier { p0, p1, p2 }
    }

    pub fn point_at(&self, t: f64) -> Point2<f64> {
        Point2::new(
            b2(t, self.p0.x, self.p1.x, self.p2.x),
            b2(t, self.p0.y, self.p1.y, self.p2.y),
        )
    }

    /// The curve parameter at which the segment reaches the chord position `x`
    pub fn t_at_x(&self, x: f64) -> f64 {
        b2_find_t(x, self.p0.x, self.p1.x, self.p2.x)
    }

    /// True if `x` is in the half open interval (p0.x, p2.x] covered by this segment
    pub fn covers(&self, x: f64) -> bool {
        self.p0.x < x && x <= self.p2.x
    }

    pub fn y_at_x(&self, x: f64) -> f64 {
        let t = self.t_at_x(x);
        b2(t, self.p0.y, self.p1.y, self.p2.y)
    }
}

/// Splits a list of at least three control points into the quadratic segments of a composite
/// curve. Interior segments start and end at the mid points between consecutive control points,
/// which keeps the tangent continuous across each joint; only the first and last control points
/// lie on the curve.
pub fn composite_segments(cps: &[Point2<f64>]) -> Result<Vec<QuadraticBezier>, AirfoilError> {
    let n = cps.len();
    if n < 3 {
        return Err(AirfoilError::invalid(format!(
            "a composite quadratic Bezier curve needs at least 3 control points, got {n}"
        )));
    }

    let segments = (0..n - 2)
        .map(|i| {
            let start = if i == 0 {
                cps[0]
            } else {
                mid_point(&cps[i], &cps[i + 1])
            };
            let end = if i == n - 3 {
                cps[n - 1]
            } else {
                mid_point(&cps[i + 1], &cps[i + 2])
            };
            QuadraticBezier::new(start, cps[i + 1], end)
        })
        .collect();

    Ok(segments)
}

/// Evaluates the composite quadratic Bezier curve defined by `cps` at each chord station. Each
/// station is evaluated on the segment whose x range contains it; stations outside of every
/// segment are dropped.
pub fn quadratic_bezier(
    stations: &[f64],
    cps: &[Point2<f64>],
) -> Result<Vec<Point2<f64>>, AirfoilError> {
    let segments = composite_segments(cps)?;
    trace!("evaluating {} stations on {} segments", stations.len(), segments.len());

    let mut curve = Vec::with_capacity(stations.len());
    for segment in segments.iter() {
        curve.extend(
            stations
                .iter()
                .filter(|&&x| segment.covers(x))
                .map(|&x| Point2::new(x, segment.y_at_x(x))),
        );
    }

    Ok(curve)
}

fn check_surface(name: &str, cps: &[Point2<f64>]) -> Result<(), AirfoilError> {
    if cps.len() < 2 {
        return Err(AirfoilError::invalid(format!(
            "not enough control points for the {name} surface, at least 2 are needed"
        )));
    }

    if let Some(p) = cps.iter().find(|p| !(0.0..=1.0).contains(&p.x)) {
        return Err(AirfoilError::invalid(format!(
            "{name} surface control point ({}, {}) must lie between x = 0 and x = 1",
            p.x, p.y
        )));
    }

    if !cps.iter().tuple_windows().all(|(a, b)| a.x < b.x) {
        return Err(AirfoilError::invalid(format!(
            "{name} surface control point x-coordinates must be monotonically increasing"
        )));
    }

    Ok(())
}

/// Builds the full control point list for one surface by adding the leading edge point, the
/// leading edge radius point directly above or below it, and the trailing edge point.
fn surface_control_points(le_y: f64, cps: &[Point2<f64>], te_y: f64) -> Vec<Point2<f64>> {
    let mut result = Vec::with_capacity(cps.len() + 3);
    result.push(Point2::origin());
    result.push(Point2::new(0.0, le_y));
    result.extend(cps.iter());
    result.push(Point2::new(1.0, te_y));
    result
}

/// Generates an airfoil made of two composite quadratic Bezier curves which meet at the leading
/// edge with a continuous tangent.
///
/// # Arguments
///
/// * `le_radii` - one or two leading edge radii. A single value is used for both surfaces, two
/// values are the upper and lower radius in that order. All values must be positive.
///
/// * `top` - the control points of the upper surface, at least two, in increasing x
///
/// * `bottom` - the control points of the lower surface. When omitted the lower surface is the
/// mirror image of the upper one and the profile is symmetric.
///
/// * `params` - trailing edge thickness and station sampling
pub fn bezier(
    le_radii: &[f64],
    top: &[Point2<f64>],
    bottom: Option<&[Point2<f64>]>,
    params: &BezierParams,
) -> Result<Airfoil, AirfoilError> {
    check_surface("top", top)?;

    let (r_top, r_bottom) = match *le_radii {
        [r] => (r, r),
        [r0, r1] => (r0, r1),
        _ => {
            return Err(AirfoilError::invalid(format!(
                "one or two leading edge radii must be given, got {}",
                le_radii.len()
            )))
        }
    };
    if !(r_top > 0.0 && r_bottom > 0.0) {
        return Err(AirfoilError::invalid(
            "leading edge radius must be defined with positive values",
        ));
    }

    if let Some(cps) = bottom {
        check_surface("bottom", cps)?;
    }

    let stations = spacing(params.points, params.spacing)?;
    let half_te = params.te_thickness / 2.0;

    let upper = quadratic_bezier(&stations, &surface_control_points(r_top, top, half_te))?;
    let lower = match bottom {
        Some(cps) => {
            quadratic_bezier(&stations, &surface_control_points(-r_bottom, cps, -half_te))?
        }
        None => {
            debug!("no bottom control points, mirroring the top surface");
            upper.iter().map(|p| Point2::new(p.x, -p.y)).collect()
        }
    };

    debug!(
        "bezier airfoil with {} upper and {} lower points",
        upper.len(),
        lower.len()
    );
    Ok(Airfoil::from_surfaces(upper, lower))
}
