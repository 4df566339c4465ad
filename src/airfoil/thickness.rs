const A0: f64 = 0.2969;
const A1: f64 = -0.1260;
const A2: f64 = -0.3516;
const A3: f64 = 0.2843;

/// Trailing edge coefficient giving the standard, slightly open trailing edge
const A4_FINITE: f64 = -0.1015;

/// Trailing edge coefficient which closes the polynomial at x = 1
const A4_CLOSED: f64 = -0.1036;

/// The NACA half-thickness at a chord fraction `x` for a maximum thickness `t` expressed as a
/// fraction of the chord.
pub fn half_thickness(t: f64, finite_te: bool, x: f64) -> f64 {
    let a4 = if finite_te { A4_FINITE } else { A4_CLOSED };
    5.0 * t * (A0 * x.sqrt() + A1 * x + A2 * x.powi(2) + A3 * x.powi(3) + a4 * x.powi(4))
}

/// Computes the half-thickness distribution shared by the NACA 4 and 5 digit families at each of
/// the given stations. With a closed trailing edge the value at the last station is set to
/// exactly zero, since the polynomial only reaches zero to within rounding.
pub fn thickness_distribution(t: f64, finite_te: bool, stations: &[f64]) -> Vec<f64> {
    let mut yt: Vec<f64> = stations
        .iter()
        .map(|&x| half_thickness(t, finite_te, x))
        .collect();

    if !finite_te {
        if let Some(last) = yt.last_mut() {
            *last = 0.0;
        }
    }

    yt
}
