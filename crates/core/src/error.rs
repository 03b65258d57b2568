use thiserror::Error;

/// Broad classification of [GridError]s. Callers that don't care about the
/// exact failure can branch on the kind to decide whether to fix an
/// argument, repair a coordinate, or reject the input outright.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum GridErrorKind {
    /// An argument fell outside its documented domain
    InvalidArgument,
    /// A coordinate value breaks its representation's structural rule
    InvariantViolation,
    /// An input has no meaningful interpretation at all
    DegenerateInput,
}

/// Any error produced by coordinate construction, conversion, region
/// queries, or world mapping.
///
/// Errors are always surfaced at the call boundary: nothing in this crate
/// silently coerces a bad input into a plausible-looking number.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GridError {
    /// Direction index outside the closed direction set
    #[error("direction index {index} out of range (max {max})")]
    InvalidDirection { index: usize, max: usize },

    /// A checked region query was asked to exceed the configured cap
    #[error("region radius {radius} exceeds configured maximum {max}")]
    RadiusOutOfBounds { radius: u16, max: u16 },

    /// An offset coordinate doesn't fit the row-major grid it was indexed
    /// against
    #[error(
        "offset coordinate ({col}, {row}) does not fit a row-major grid \
        of width {width}"
    )]
    OffsetOutsideGrid { col: i32, row: i32, width: u16 },

    /// A row-major index maps to a row beyond the representable range
    #[error("row-major index {index} overflows the coordinate range")]
    IndexOverflow { index: usize },

    /// A cube coordinate whose components don't cancel out
    #[error("cube coordinate ({x}, {y}, {z}) violates x + y + z = 0")]
    ZeroSumViolation { x: i32, y: i32, z: i32 },

    /// A doubled coordinate whose column and row disagree on parity
    #[error("doubled coordinate ({col}, {row}) violates (col + row) % 2 == 0")]
    ParityViolation { col: i32, row: i32 },

    /// A component outside the configured bounding range
    #[error("component {value} outside bounding range [-{max}, {max}]")]
    OutOfBounds { value: i32, max: i32 },

    /// A cell size that can't describe any grid
    #[error("size must be positive and finite, got {value}")]
    DegenerateSize { value: f64 },

    /// Row-major index mapping against a zero-width grid
    #[error("row-major index mapping requires a nonzero grid width")]
    DegenerateWidth,

    /// A world point with NaN or infinite components
    #[error("world point ({x}, {y}) is not finite")]
    NonFinitePoint { x: f64, y: f64 },

    /// Config field validation failure
    #[error("invalid grid config: {0}")]
    Config(String),
}

impl GridError {
    pub fn kind(&self) -> GridErrorKind {
        match self {
            Self::InvalidDirection { .. }
            | Self::RadiusOutOfBounds { .. }
            | Self::OffsetOutsideGrid { .. }
            | Self::IndexOverflow { .. } => GridErrorKind::InvalidArgument,
            Self::ZeroSumViolation { .. }
            | Self::ParityViolation { .. }
            | Self::OutOfBounds { .. } => GridErrorKind::InvariantViolation,
            Self::DegenerateSize { .. }
            | Self::DegenerateWidth
            | Self::NonFinitePoint { .. }
            | Self::Config(_) => GridErrorKind::DegenerateInput,
        }
    }
}

impl From<validator::ValidationErrors> for GridError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Config(errors.to_string())
    }
}
