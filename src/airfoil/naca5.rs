use crate::airfoil::camber::{cambered_airfoil, CamberLine};
use crate::airfoil::naca::NacaParams;
use crate::airfoil::spacing::spacing;
use crate::airfoil::thickness::thickness_distribution;
use crate::airfoil::Airfoil;
use crate::errors::AirfoilError;

/// The tabulated mean line of a NACA 5-digit profile. `p` is the chord position of maximum camber,
/// `r` the position where the camber line changes from one polynomial to the next, `k1` the
/// leading coefficient, and for reflexed lines `k2_k1` the ratio of the aft coefficient to `k1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Naca5Camber {
    Simple { p: f64, r: f64, k1: f64 },
    Reflexed { p: f64, r: f64, k1: f64, k2_k1: f64 },
}

#[rustfmt::skip]
static SIMPLE_LINES: [(&str, Naca5Camber); 5] = [
    ("210", Naca5Camber::Simple { p: 0.05, r: 0.0580, k1: 361.40 }),
    ("220", Naca5Camber::Simple { p: 0.10, r: 0.1260, k1: 51.640 }),
    ("230", Naca5Camber::Simple { p: 0.15, r: 0.2025, k1: 15.957 }),
    ("240", Naca5Camber::Simple { p: 0.20, r: 0.2900, k1: 6.643 }),
    ("250", Naca5Camber::Simple { p: 0.25, r: 0.3910, k1: 3.230 }),
];

#[rustfmt::skip]
static REFLEXED_LINES: [(&str, Naca5Camber); 4] = [
    ("221", Naca5Camber::Reflexed { p: 0.05, r: 0.0580, k1: 361.40, k2_k1: 0.000764 }),
    ("231", Naca5Camber::Reflexed { p: 0.15, r: 0.2170, k1: 15.793, k2_k1: 0.00677 }),
    ("241", Naca5Camber::Reflexed { p: 0.20, r: 0.3180, k1: 6.520, k2_k1: 0.0303 }),
    ("251", Naca5Camber::Reflexed { p: 0.25, r: 0.4410, k1: 3.191, k2_k1: 0.1355 }),
];

impl Naca5Camber {
    /// Find the tabulated mean line for a three digit "LPS" code, such as "230" or "231"
    pub fn lookup(code: &str) -> Option<Naca5Camber> {
        SIMPLE_LINES
            .iter()
            .chain(REFLEXED_LINES.iter())
            .find(|(c, _)| *c == code)
            .map(|(_, line)| *line)
    }

    /// All codes with a tabulated mean line, simple lines first
    pub fn codes() -> impl Iterator<Item = &'static str> {
        SIMPLE_LINES
            .iter()
            .chain(REFLEXED_LINES.iter())
            .map(|(c, _)| *c)
    }

    pub fn is_reflexed(&self) -> bool {
        matches!(self, Naca5Camber::Reflexed { .. })
    }

    /// Chord position of the maximum camber
    pub fn max_camber_position(&self) -> f64 {
        match *self {
            Naca5Camber::Simple { p, .. } | Naca5Camber::Reflexed { p, .. } => p,
        }
    }
}

impl CamberLine for Naca5Camber {
    fn evaluate(&self, x: f64) -> (f64, f64) {
        match *self {
            Naca5Camber::Simple { r, k1, .. } => {
                if x <= r {
                    let c = r.powi(2) * (3.0 - r);
                    (
                        (k1 / 6.0) * (x.powi(3) - 3.0 * r * x.powi(2) + c * x),
                        (k1 / 6.0) * (3.0 * x.powi(2) - 6.0 * r * x + c),
                    )
                } else {
                    let k = k1 * r.powi(3) / 6.0;
                    (k * (1.0 - x), -k)
                }
            }
            Naca5Camber::Reflexed { r, k1, k2_k1, .. } => {
                let aft = k2_k1 * (1.0 - r).powi(3);
                let r3 = r.powi(3);
                let q = if x <= r { 1.0 } else { k2_k1 };
                (
                    (k1 / 6.0) * (q * (x - r).powi(3) - aft * x - r3 * x + r3),
                    (k1 / 6.0) * (3.0 * q * (x - r).powi(2) - aft - r3),
                )
            }
        }
    }
}

/// A generator for a NACA 5-digit airfoil of the form LPSTT, where L is the design lift
/// coefficient times 20/3, P twice the position of max camber in tenths of chord, S selects a
/// simple (0) or reflexed (1) mean line, and TT is the max thickness in percent of the chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Naca5Digit {
    t: f64,
    camber: Naca5Camber,
}

impl Naca5Digit {
    pub fn new(t_max: f64, camber: Naca5Camber) -> Naca5Digit {
        Naca5Digit { t: t_max, camber }
    }

    /// Create the generator from the separated digits of the designator, so that "23012" becomes
    /// `from_digits(2, 3, 0, 12)`. Fails if there is no tabulated mean line for the "LPS" code.
    pub fn from_digits(l: u32, p: u32, s: u32, tt: u32) -> Result<Naca5Digit, AirfoilError> {
        let code = format!("{l}{p}{s}");
        let camber = Naca5Camber::lookup(&code).ok_or_else(|| {
            AirfoilError::unsupported(format!("no tabulated NACA 5-digit mean line '{code}'"))
        })?;

        Ok(Naca5Digit::new(tt as f64 / 100.0, camber))
    }

    pub fn thickness(&self) -> f64 {
        self.t
    }

    pub fn camber(&self) -> &Naca5Camber {
        &self.camber
    }

    pub fn generate(&self, params: &NacaParams) -> Result<Airfoil, AirfoilError> {
        let stations = spacing(params.points, params.spacing)?;
        let yt = thickness_distribution(self.t, params.finite_te, &stations);

        Ok(cambered_airfoil(&self.camber, &stations, &yt))
    }
}
