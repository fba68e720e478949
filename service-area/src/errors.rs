use thiserror::Error;

/// Errors that can stop a service area from being drawn.
///
/// None of these escape the map or list components: they are turned into an
/// inline message on the drawing surface instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// Network failure or a non-success response from the service area API.
    #[error("Unable to load service area data: {0}")]
    DataFetch(String),

    /// The request succeeded but there was nothing usable to draw.
    #[error("No service area data available")]
    NoData,

    /// A projection was requested over a zero-size viewport or canvas.
    #[error("Service area bounds are degenerate")]
    DegenerateBounds,

    #[error("Invalid coordinates for {0}")]
    InvalidCoordinates(String),

    #[error("Invalid color '{0}', expected #rrggbb")]
    InvalidColor(String),

    #[error("Color palette must contain at least one color")]
    EmptyPalette,
}

pub type Result<T> = std::result::Result<T, MapError>;
