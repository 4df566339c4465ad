pub mod airfoil;
pub mod errors;
pub mod serialize;

pub use airfoil::bezier::{bezier, quadratic_bezier, BezierParams};
pub use airfoil::naca::{naca, NacaParams, NacaProfile};
pub use airfoil::spacing::{spacing, SpacingMethod};
pub use airfoil::Airfoil;
pub use errors::AirfoilError;
