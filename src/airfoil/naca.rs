use crate::airfoil::naca4::Naca4Digit;
use crate::airfoil::naca5::{Naca5Camber, Naca5Digit};
use crate::airfoil::spacing::SpacingMethod;
use crate::airfoil::Airfoil;
use crate::errors::AirfoilError;
use log::debug;
use std::str::FromStr;

/// Sampling options shared by the NACA generators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NacaParams {
    /// Number of stations on each surface, not counting the leading edge
    pub points: usize,

    /// Use the standard open trailing edge rather than closing the profile at x = 1
    pub finite_te: bool,

    pub spacing: SpacingMethod,
}

impl Default for NacaParams {
    fn default() -> Self {
        NacaParams::new(100, true, SpacingMethod::Cosine)
    }
}

impl NacaParams {
    pub fn new(points: usize, finite_te: bool, spacing: SpacingMethod) -> Self {
        NacaParams {
            points,
            finite_te,
            spacing,
        }
    }
}

/// A parsed NACA designator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NacaProfile {
    FourDigit(Naca4Digit),
    FiveDigit(Naca5Digit),
}

impl NacaProfile {
    pub fn generate(&self, params: &NacaParams) -> Result<Airfoil, AirfoilError> {
        match self {
            NacaProfile::FourDigit(naca) => naca.generate(params),
            NacaProfile::FiveDigit(naca) => naca.generate(params),
        }
    }
}

impl FromStr for NacaProfile {
    type Err = AirfoilError;

    /// Parses a bare digit designator such as "2412" or "23012". Designators of any other length
    /// (including the 6-series), or which contain anything other than digits, are unsupported.
    fn from_str(digits: &str) -> Result<Self, Self::Err> {
        let d: Vec<u32> = digits
            .chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<Vec<u32>>>()
            .ok_or_else(|| {
                AirfoilError::unsupported(format!("'{digits}' is not a NACA digit designator"))
            })?;

        match d.as_slice() {
            [m, p, x0, x1] => {
                debug!("NACA {digits}: 4-digit, m={m} p={p} xx={x0}{x1}");
                Ok(NacaProfile::FourDigit(Naca4Digit::from_digits(
                    *m,
                    *p,
                    x0 * 10 + x1,
                )))
            }
            [l, p, s, t0, t1] => {
                let code = &digits[..3];
                if *s > 1 {
                    return Err(AirfoilError::unsupported(format!(
                        "'{code}' has camber line type {s}, expected 0 (simple) or 1 (reflexed)"
                    )));
                }
                if Naca5Camber::lookup(code).is_none() {
                    return Err(AirfoilError::unsupported(format!(
                        "'{code}' is not a tabulated NACA 5-digit mean line"
                    )));
                }

                debug!("NACA {digits}: 5-digit, mean line {code}, tt={t0}{t1}");
                Ok(NacaProfile::FiveDigit(Naca5Digit::from_digits(
                    *l,
                    *p,
                    *s,
                    t0 * 10 + t1,
                )?))
            }
            _ => Err(AirfoilError::unsupported(format!(
                "'{digits}' has {} digits, only 4 and 5 digit profiles are supported",
                d.len()
            ))),
        }
    }
}

/// Generates the outline of a NACA 4 or 5 digit airfoil from its designator. The returned
/// airfoil's outer contour runs from the trailing edge over the upper surface, through (0, 0),
/// and back along the lower surface.
pub fn naca(digits: &str, params: &NacaParams) -> Result<Airfoil, AirfoilError> {
    let profile: NacaProfile = digits.parse()?;
    profile.generate(params)
}
