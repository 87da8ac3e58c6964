//! Error types for vector ingestion.

use std::path::PathBuf;

use super::Crs;

/// Errors that can occur while normalizing vector input.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum VectorError {
    /// The input is neither a file path, a feature table, nor a GeoJSON object.
    #[error(
        "Invalid vector input: {0}. Expected a file path, a feature table, or a GeoJSON object"
    )]
    InvalidInputKind(String),

    /// IO error.
    #[error("IO error {0}: {1}")]
    IoError(#[source] std::io::Error, PathBuf),

    /// The file was read but does not contain valid `GeoJSON`.
    #[error("File {1} is not valid GeoJSON: {0}")]
    NotValidGeoJson(#[source] serde_json::Error, PathBuf),

    /// The file exists but no reader understands its format.
    #[error("Unsupported vector file format {0}. Only GeoJSON files (.geojson, .json) can be read")]
    UnsupportedFormat(PathBuf),

    /// The reprojector cannot convert between these coordinate systems.
    #[error("Unable to reproject from {from} to {to}")]
    UnsupportedCrs {
        /// Source coordinate system.
        from: Crs,
        /// Requested coordinate system.
        to: Crs,
    },
}

/// A convenience [`Result`] for vector ingestion.
pub type VectorResult<T> = Result<T, VectorError>;
