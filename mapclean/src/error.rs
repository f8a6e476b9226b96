use thiserror::Error;

/// Errors produced while loading, processing or saving a map
#[derive(Error, Debug)]
pub enum Error {
    /// The raster header or pixel data could not be understood
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A grid access outside the current dimensions. Seeing this means a bug in one of the passes.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("missing input path")]
    MissingArgument,

    /// Outdoor is a working label only and has no sample value
    #[error("outdoor cell at ({row}, {col}) cannot be encoded")]
    UnencodableCell { row: usize, col: usize },

    #[error("failed to encode raster: {0}")]
    Encode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
