use thiserror::Error;

/// Top-level error type for geomkit.
#[derive(Debug, Error)]
pub enum GeomkitError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Buffer(#[from] BufferError),
}

/// Errors related to numeric or geometric degeneracy.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{required} control points required, {actual} given")]
    TooFewControlPoints { required: usize, actual: usize },

    #[error("triangle {triangle} has coincident vertices")]
    DegenerateTriangle { triangle: usize },
}

/// Errors related to raw vertex and index buffer layouts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("field at byte offset {offset} with size {size} does not fit in stride {stride}")]
    FieldOutsideStride {
        offset: usize,
        size: usize,
        stride: usize,
    },

    #[error("buffer holds {actual} bytes, {required} required")]
    BufferTooSmall { required: usize, actual: usize },

    #[error("index {index} is out of bounds for {count} vertices")]
    IndexOutOfBounds { index: usize, count: usize },

    #[error("index count {len} is not a multiple of 3")]
    IncompleteTriangle { len: usize },
}

/// Convenience type alias for results using [`GeomkitError`].
pub type Result<T> = std::result::Result<T, GeomkitError>;
