use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AirfoilError {
    /// A parameter was outside of the range the generators can work with, such as an unknown
    /// spacing method or a control point list that isn't monotonic in x.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The profile designator does not name a family/camber line this crate can generate.
    #[error("unsupported profile: {0}")]
    UnsupportedProfile(String),
}

impl AirfoilError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        AirfoilError::InvalidArgument(msg.into())
    }

    pub fn unsupported(code: impl Into<String>) -> Self {
        AirfoilError::UnsupportedProfile(code.into())
    }
}
