use crate::serialize;
use ncollide2d::na::Point2;
use serde::Serialize;

pub mod bezier;
pub mod camber;
pub mod naca;
pub mod naca4;
pub mod naca5;
pub mod spacing;
pub mod thickness;

/// Return the point half way between two 2D points
pub fn mid_point(a: &Point2<f64>, b: &Point2<f64>) -> Point2<f64> {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// The camber point and the two surface points generated at a single chordwise station
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamberStation {
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }

    /// Builds the station at chord position `x` by offsetting the half thickness `yt` from the
    /// camber point `(x, yc)` perpendicular to the local camber line, whose gradient is `slope`.
    /// This is the one place where both NACA families turn camber + thickness into surfaces.
    pub fn rotated(x: f64, yc: f64, slope: f64, yt: f64) -> CamberStation {
        let theta = slope.atan();
        let (sin, cos) = theta.sin_cos();

        CamberStation::new(
            Point2::new(x, yc),
            Point2::new(x - yt * sin, yc + yt * cos),
            Point2::new(x + yt * sin, yc - yt * cos),
        )
    }

    /// A station on a symmetric profile, where the camber line is the chord line and no rotation
    /// is needed
    pub fn symmetric(x: f64, yt: f64) -> CamberStation {
        CamberStation::new(
            Point2::new(x, 0.0),
            Point2::new(x, yt),
            Point2::new(x, -yt),
        )
    }
}

/// A generated airfoil outline. The upper and lower surfaces are stored in station order, from
/// the first station after the leading edge to the trailing edge, and neither contains the
/// leading edge point at (0, 0).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airfoil {
    #[serde(serialize_with = "serialize::points")]
    pub camber: Vec<Point2<f64>>,

    #[serde(serialize_with = "serialize::points")]
    pub upper: Vec<Point2<f64>>,

    #[serde(serialize_with = "serialize::points")]
    pub lower: Vec<Point2<f64>>,
}

impl Airfoil {
    pub fn from_stations(stations: &[CamberStation]) -> Airfoil {
        Airfoil {
            camber: stations.iter().map(|s| s.camber).collect(),
            upper: stations.iter().map(|s| s.upper).collect(),
            lower: stations.iter().map(|s| s.lower).collect(),
        }
    }

    /// Builds an airfoil from separately evaluated surfaces. The camber line is taken as the mid
    /// point between the upper and lower surface points with the same index.
    pub fn from_surfaces(upper: Vec<Point2<f64>>, lower: Vec<Point2<f64>>) -> Airfoil {
        let camber = upper
            .iter()
            .zip(lower.iter())
            .map(|(u, l)| mid_point(u, l))
            .collect();

        Airfoil {
            camber,
            upper,
            lower,
        }
    }

    /// The full outline, running from the trailing edge over the upper surface to the leading
    /// edge at (0, 0) and back along the lower surface to the trailing edge.
    pub fn to_outer_contour(&self) -> Vec<Point2<f64>> {
        let mut result = Vec::with_capacity(self.len());
        result.extend(self.upper.iter().rev());
        result.push(Point2::origin());
        result.extend(self.lower.iter());
        result
    }

    /// The outer contour split into separate x and y coordinate lists
    pub fn to_coordinates(&self) -> (Vec<f64>, Vec<f64>) {
        self.to_outer_contour().iter().map(|p| (p.x, p.y)).unzip()
    }

    /// Number of points in the outer contour
    pub fn len(&self) -> usize {
        self.upper.len() + self.lower.len() + 1
    }

    /// Index of the leading edge point in the outer contour
    pub fn leading_edge_index(&self) -> usize {
        self.upper.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn sample() -> Airfoil {
        Airfoil::from_stations(&[
            CamberStation::symmetric(0.5, 0.05),
            CamberStation::symmetric(1.0, 0.01),
        ])
    }

    #[test]
    fn test_outer_contour_order() {
        let contour = sample().to_outer_contour();
        let expected = [
            Point2::new(1.0, 0.01),
            Point2::new(0.5, 0.05),
            Point2::new(0.0, 0.0),
            Point2::new(0.5, -0.05),
            Point2::new(1.0, -0.01),
        ];
        assert_eq!(expected.to_vec(), contour);
    }

    #[test]
    fn test_leading_edge_index() {
        let airfoil = sample();
        let (xs, ys) = airfoil.to_coordinates();
        let i = airfoil.leading_edge_index();
        assert_eq!(5, airfoil.len());
        assert_eq!(2, i);
        assert_eq!(0.0, xs[i]);
        assert_eq!(0.0, ys[i]);
    }

    #[test_case(0.0)]
    #[test_case(0.3)]
    #[test_case(-0.2)]
    fn test_rotated_station_thickness(slope: f64) {
        let s = CamberStation::rotated(0.4, 0.02, slope, 0.05);
        let d = s.upper - s.lower;
        assert_relative_eq!(0.1, d.norm(), epsilon = 1e-12);
        // The surface offset is normal to the camber tangent
        assert_relative_eq!(0.0, d.x + d.y * slope, epsilon = 1e-12);
        assert_relative_eq!(s.camber.x, (s.upper.x + s.lower.x) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_from_surfaces_camber() {
        let airfoil = Airfoil::from_surfaces(
            vec![Point2::new(0.5, 0.08)],
            vec![Point2::new(0.5, -0.02)],
        );
        assert_relative_eq!(0.03, airfoil.camber[0].y, epsilon = 1e-12);
    }

    #[test]
    fn test_serialize_points() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(0.5, json["upper"][0]["x"].as_f64().unwrap());
        assert_eq!(-0.01, json["lower"][1]["y"].as_f64().unwrap());
    }
}
