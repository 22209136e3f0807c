use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the plot helpers.
///
/// Collaborator failures (rendering, encoding, I/O) pass through unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("column '{0}' not found in table")]
    ColumnNotFound(String),

    #[error("column '{column}' is not numeric at row {row}")]
    NotNumeric { column: String, row: usize },

    #[error("row has {got} cells but table has {want} columns")]
    RowShape { want: usize, got: usize },

    #[error("figure dimensions {0}x{1} must be non-zero")]
    FigureSize(u32, u32),

    #[error("rendering failed: {0}")]
    Render(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for Error {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        Error::Render(e.to_string())
    }
}
