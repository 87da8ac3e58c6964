use gtlparser_tile_utils::{BasemapError, TileUtilsError};

use crate::legend::LegendError;
use crate::vector::VectorError;

/// Errors returned by [`Map`](super::Map) operations.
///
/// A failed operation never leaves a layer or control behind.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("Invalid WMS URL {1}: {0}")]
    InvalidWmsUrl(#[source] url::ParseError, String),

    #[error("Opacity must be between 0 and 1, got {0}")]
    InvalidOpacity(f64),

    #[error("Invalid overlay bounds {0:?}. Expected [[south, west], [north, east]] in degrees")]
    InvalidBounds([[f64; 2]; 2]),

    #[error("The map has no basemap selector")]
    NoBasemapSelector,

    #[error(transparent)]
    VectorError(#[from] VectorError),

    #[error(transparent)]
    LegendError(#[from] LegendError),

    #[error(transparent)]
    BasemapError(#[from] BasemapError),

    #[error(transparent)]
    TileUtilsError(#[from] TileUtilsError),
}

pub type MapResult<T> = Result<T, MapError>;
