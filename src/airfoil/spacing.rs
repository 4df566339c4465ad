use crate::errors::AirfoilError;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The method used to distribute the chordwise stations at which an airfoil is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingMethod {
    /// Uniformly spaced stations
    Equal,

    /// Stations clustered toward both the leading and trailing edges, where the surface
    /// curvature is highest
    #[default]
    Cosine,
}

impl FromStr for SpacingMethod {
    type Err = AirfoilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(SpacingMethod::Equal),
            "cosine" => Ok(SpacingMethod::Cosine),
            _ => Err(AirfoilError::invalid(format!(
                "unrecognized spacing method '{s}', expected 'equal' or 'cosine'"
            ))),
        }
    }
}

impl Display for SpacingMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SpacingMethod::Equal => write!(f, "equal"),
            SpacingMethod::Cosine => write!(f, "cosine"),
        }
    }
}

/// Generates `n` strictly increasing chord fractions in (0, 1], running from just aft of the
/// leading edge to the trailing edge. The leading edge itself is never included, and the last
/// station is always exactly 1.0.
pub fn spacing(n: usize, method: SpacingMethod) -> Result<Vec<f64>, AirfoilError> {
    if n == 0 {
        return Err(AirfoilError::invalid("the point count must be at least 1"));
    }

    let nf = n as f64;
    let stations = (1..=n).map(|i| i as f64);
    Ok(match method {
        SpacingMethod::Equal => stations.map(|i| i / nf).collect(),
        SpacingMethod::Cosine => stations.map(|i| (1.0 - (i / nf * PI).cos()) / 2.0).collect(),
    })
}
