use approx::assert_relative_eq;
use foilgen::{bezier, naca, AirfoilError, BezierParams, NacaParams, SpacingMethod};
use ncollide2d::na::Point2;
use test_case::test_case;

fn min_max(v: &[f64]) -> (f64, f64) {
    v.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &y| (lo.min(y), hi.max(y)))
}

#[test]
fn test_naca_0012_max_thickness() {
    let (_, ys) = naca("0012", &NacaParams::default()).unwrap().to_coordinates();
    let (lo, hi) = min_max(&ys);
    assert_relative_eq!(0.12, hi + lo.abs(), epsilon = 1e-4);
}

#[test_case("0012")]
#[test_case("0009")]
#[test_case("24012")]
#[test_case("23012")]
fn test_finite_trailing_edge_is_split(digits: &str) {
    let (_, ys) = naca(digits, &NacaParams::default()).unwrap().to_coordinates();
    assert!(ys[0] > 0.0);
    assert!(*ys.last().unwrap() < 0.0);
}

#[test_case("0012", SpacingMethod::Cosine)]
#[test_case("2312", SpacingMethod::Cosine)]
#[test_case("6409", SpacingMethod::Equal)]
#[test_case("24012", SpacingMethod::Cosine)]
#[test_case("21012", SpacingMethod::Equal)]
#[test_case("23112", SpacingMethod::Cosine)]
#[test_case("25118", SpacingMethod::Equal)]
fn test_closed_trailing_edge_is_exactly_zero(digits: &str, spacing: SpacingMethod) {
    let params = NacaParams::new(100, false, spacing);
    let (_, ys) = naca(digits, &params).unwrap().to_coordinates();
    assert_eq!(0.0, ys[0]);
    assert_eq!(0.0, *ys.last().unwrap());
}

#[test_case("0012", 100)]
#[test_case("4415", 37)]
#[test_case("24012", 64)]
#[test_case("22112", 1)]
fn test_leading_edge_at_midpoint(digits: &str, n: usize) {
    let params = NacaParams::new(n, true, SpacingMethod::Cosine);
    let (xs, ys) = naca(digits, &params).unwrap().to_coordinates();
    assert_eq!(2 * n + 1, xs.len());
    assert_eq!(xs.len(), ys.len());

    let origins: Vec<usize> = (0..xs.len())
        .filter(|&i| xs[i] == 0.0 && ys[i] == 0.0)
        .collect();
    assert_eq!(vec![n], origins);
}

#[test]
fn test_bezier_leading_edge_at_midpoint() {
    let top = [Point2::new(0.2, 0.08), Point2::new(0.6, 0.06)];
    let params = BezierParams::new(0.0, 50, SpacingMethod::Equal);
    let (xs, ys) = bezier(&[0.02], &top, None, &params)
        .unwrap()
        .to_coordinates();
    assert_eq!(101, xs.len());
    assert_eq!((0.0, 0.0), (xs[50], ys[50]));
    assert!((0..xs.len()).filter(|&i| i != 50).all(|i| xs[i] > 0.0));
    assert_relative_eq!(0.0, ys[0], epsilon = 1e-12);
}

#[test]
fn test_bezier_spans_chord() {
    let top = [
        Point2::new(0.19, 0.17),
        Point2::new(0.5, 0.2),
        Point2::new(0.81, 0.1),
    ];
    let bottom = [
        Point2::new(0.085, -0.02),
        Point2::new(0.3, 0.06),
        Point2::new(0.6, 0.08),
    ];
    let params = BezierParams::default();
    let airfoil = bezier(&[0.05, 0.02], &top, Some(&bottom[..]), &params).unwrap();
    let (xs, ys) = airfoil.to_coordinates();
    assert_eq!((0.0, 1.0), min_max(&xs));

    // Both surfaces leave the nose vertically, on their own side of the chord
    let i = airfoil.leading_edge_index();
    assert!(ys[i - 1] > 0.0 && ys[i - 1] > 10.0 * xs[i - 1]);
    assert!(ys[i + 1] < 0.0 && -ys[i + 1] > 2.0 * xs[i + 1]);
}

#[test]
fn test_bezier_single_control_point_rejected() {
    let result = bezier(&[0.05], &[Point2::new(0.1, 0.1)], None, &BezierParams::default());
    assert!(matches!(result, Err(AirfoilError::InvalidArgument(_))));
}

#[test]
fn test_three_digit_naca_rejected() {
    let result = naca("001", &NacaParams::default());
    assert!(matches!(result, Err(AirfoilError::UnsupportedProfile(_))));
}

#[test]
fn test_unknown_spacing_rejected() {
    let result = "chebyshev".parse::<SpacingMethod>();
    assert!(matches!(result, Err(AirfoilError::InvalidArgument(_))));
}
