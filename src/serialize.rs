use ncollide2d::na::Point2;
use serde::{Serialize, Serializer};

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

struct PointRef<'a>(&'a Point2<f64>);

impl Serialize for PointRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Point2f64::serialize(self.0, serializer)
    }
}

/// Serializes a list of points as a sequence of `{"x": .., "y": ..}` objects, for use with
/// `#[serde(serialize_with = "...")]` on `Vec<Point2<f64>>` fields
pub fn points<S: Serializer>(points: &[Point2<f64>], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(points.iter().map(PointRef))
}
