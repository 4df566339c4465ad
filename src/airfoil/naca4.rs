use crate::airfoil::camber::{cambered_airfoil, symmetric_airfoil, CamberLine};
use crate::airfoil::naca::NacaParams;
use crate::airfoil::spacing::spacing;
use crate::airfoil::thickness::thickness_distribution;
use crate::airfoil::Airfoil;
use crate::errors::AirfoilError;

/// A generator for a NACA 4-digit airfoil of the form MPTT, where M is the maximum camber P is the
/// location of the maximum camber, and TT is the maximum thickness of the airfoil as a fraction of
/// the chord.  For example, a NACA 2412 airfoil has a 2% camber at 40% of the chord and a max
/// thickness which is 12% of the chord length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Naca4Digit {
    t: f64,
    m: f64,
    p: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `t_max` - the maximum thickness of the airfoil as a fraction of the chord length. For
    /// instance, on a NACA 2412 t_max should be 0.12
    ///
    /// * `max_camber` - The max camber as a fraction, for example on a NACA 2412 this value should
    /// be set to 0.02
    ///
    /// * `max_camber_chord` - The location of the max camber as a fraction of chord length. For
    /// example on a NACA 2412 this values should be 0.4
    pub fn new(t_max: f64, max_camber: f64, max_camber_chord: f64) -> Naca4Digit {
        Naca4Digit {
            t: t_max,
            m: max_camber,
            p: max_camber_chord,
        }
    }

    /// Create the generator from the already separated digits of the designator, so that "2412"
    /// becomes `from_digits(2, 4, 12)`
    pub fn from_digits(m: u32, p: u32, xx: u32) -> Naca4Digit {
        Naca4Digit::new(xx as f64 / 100.0, m as f64 / 100.0, p as f64 / 10.0)
    }

    pub fn thickness(&self) -> f64 {
        self.t
    }

    /// A zero position of max camber means the camber line is the chord line, regardless of the
    /// value of the max camber itself
    pub fn is_symmetric(&self) -> bool {
        self.p < 1e-6
    }

    pub fn generate(&self, params: &NacaParams) -> Result<Airfoil, AirfoilError> {
        let stations = spacing(params.points, params.spacing)?;
        let yt = thickness_distribution(self.t, params.finite_te, &stations);

        if self.is_symmetric() {
            Ok(symmetric_airfoil(&stations, &yt))
        } else {
            Ok(cambered_airfoil(self, &stations, &yt))
        }
    }
}

impl CamberLine for Naca4Digit {
    fn evaluate(&self, x: f64) -> (f64, f64) {
        let (m, p) = (self.m, self.p);
        if self.is_symmetric() {
            (0.0, 0.0)
        } else if x <= p {
            let k = m / p.powi(2);
            (k * (2.0 * p * x - x.powi(2)), 2.0 * k * (p - x))
        } else {
            // (1 - 2p) + 2px - x^2, factored so the trailing edge lands exactly on the chord
            let k = m / (1.0 - p).powi(2);
            (k * (1.0 - x) * (1.0 + x - 2.0 * p), 2.0 * k * (p - x))
        }
    }
}
