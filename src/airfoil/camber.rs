use crate::airfoil::{Airfoil, CamberStation};

/// A mean camber line which can report its ordinate and gradient at a chord fraction from 0.0 to
/// 1.0. Both NACA families describe their camber lines this way, and the surfaces are then
/// produced by the same thickness rotation in `cambered_airfoil`.
pub trait CamberLine {
    /// Return the camber ordinate `yc` and the camber gradient `dyc/dx` at `x`
    fn evaluate(&self, x: f64) -> (f64, f64);

    fn station_at(&self, x: f64, yt: f64) -> CamberStation {
        let (yc, slope) = self.evaluate(x);
        CamberStation::rotated(x, yc, slope, yt)
    }
}

/// Assembles an airfoil by laying the half thickness `yt[i]` perpendicular to the camber line at
/// each `stations[i]`
pub fn cambered_airfoil<C: CamberLine + ?Sized>(
    camber: &C,
    stations: &[f64],
    yt: &[f64],
) -> Airfoil {
    let stations: Vec<CamberStation> = stations
        .iter()
        .zip(yt.iter())
        .map(|(&x, &t)| camber.station_at(x, t))
        .collect();

    Airfoil::from_stations(&stations)
}

/// Assembles an airfoil with a flat camber line, where the half thickness is applied directly in
/// the y direction
pub fn symmetric_airfoil(stations: &[f64], yt: &[f64]) -> Airfoil {
    let stations: Vec<CamberStation> = stations
        .iter()
        .zip(yt.iter())
        .map(|(&x, &t)| CamberStation::symmetric(x, t))
        .collect();

    Airfoil::from_stations(&stations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct Flat;

    impl CamberLine for Flat {
        fn evaluate(&self, _x: f64) -> (f64, f64) {
            (0.0, 0.0)
        }
    }

    struct Ramp(f64);

    impl CamberLine for Ramp {
        fn evaluate(&self, x: f64) -> (f64, f64) {
            (self.0 * x, self.0)
        }
    }

    #[test]
    fn test_flat_camber_matches_symmetric() {
        let stations = [0.1, 0.5, 1.0];
        let yt = [0.03, 0.05, 0.001];
        let a = cambered_airfoil(&Flat, &stations, &yt);
        let b = symmetric_airfoil(&stations, &yt);
        for (p, q) in a.to_outer_contour().iter().zip(b.to_outer_contour().iter()) {
            assert_relative_eq!(p.x, q.x, epsilon = 1e-15);
            assert_relative_eq!(p.y, q.y, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_ramp_camber_offsets_normal() {
        let airfoil = cambered_airfoil(&Ramp(1.0), &[0.5], &[0.1]);
        let h = 0.1 / 2.0_f64.sqrt();
        assert_relative_eq!(0.5 - h, airfoil.upper[0].x, epsilon = 1e-12);
        assert_relative_eq!(0.5 + h, airfoil.upper[0].y, epsilon = 1e-12);
        assert_relative_eq!(0.5 + h, airfoil.lower[0].x, epsilon = 1e-12);
        assert_relative_eq!(0.5 - h, airfoil.lower[0].y, epsilon = 1e-12);
        assert_relative_eq!(0.5, airfoil.camber[0].y, epsilon = 1e-12);
    }
}
