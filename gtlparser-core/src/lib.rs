#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations)]

/// Legend tables and legend controls
pub mod legend;

/// Map model
pub mod map;

/// Default vector styles
pub mod styles;

/// Vector ingestion and normalization to WGS84
pub mod vector;

use gtlparser_tile_utils::{BasemapError, TileUtilsError};

/// Any error produced by this crate or by `gtlparser-tile-utils`.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum GtlCoreError {
    #[error(transparent)]
    VectorError(#[from] vector::VectorError),

    #[error(transparent)]
    LegendError(#[from] legend::LegendError),

    #[error(transparent)]
    BasemapError(#[from] BasemapError),

    #[error(transparent)]
    TileUtilsError(#[from] TileUtilsError),

    #[error(transparent)]
    MapError(#[from] map::MapError),
}

/// A convenience [`Result`] for this crate.
pub type GtlCoreResult<T> = Result<T, GtlCoreError>;
