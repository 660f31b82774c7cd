use std::error::Error;
use std::fmt;

/// Error type for rescaling failures
#[derive(Debug, Clone, PartialEq)]
pub enum RescaleError {
    EmptyInput,
    NotRepresentable { index: usize }, // Flat (row-major) position of the element
    NonFinite { count: usize },        // Number of NaN / infinite values found
    AxisOutOfBounds { axis: usize, ndim: usize },
    ShapeMismatch { expected: Vec<usize>, found: Vec<usize> }, // Shapes with the fitted axis removed
    UnknownMethod(String),
}

impl fmt::Display for RescaleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RescaleError::EmptyInput => write!(f, "Cannot rescale an array with no elements"),
            RescaleError::NotRepresentable { index } => {
                write!(f, "Element at position {} has no f64 representation", index)
            }
            RescaleError::NonFinite { count } => {
                write!(f, "Found {} non-finite values in input array", count)
            }
            RescaleError::AxisOutOfBounds { axis, ndim } => write!(
                f,
                "Axis {} is out of bounds for an array with {} dimensions",
                axis, ndim
            ),
            RescaleError::ShapeMismatch { expected, found } => write!(
                f,
                "Rescaler was fitted on lanes of shape {:?} but the input has {:?}",
                expected, found
            ),
            RescaleError::UnknownMethod(name) => write!(
                f,
                "Unknown rescaling method: {}. Expected one of `minmax` or `zscore`",
                name
            ),
        }
    }
}

impl Error for RescaleError {}

pub type Result<T> = std::result::Result<T, RescaleError>;
