#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod basemaps;
pub use basemaps::{
    BasemapError, PROVIDER_GROUPS, ProviderGroup, ResolvedBasemap, STANDALONE_PROVIDERS,
    TileProvider, names as basemap_names, resolve as resolve_basemap,
};

mod google;
pub use google::{GOOGLE_ATTRIBUTION, GoogleMapType};

mod mercator;
pub use mercator::{EARTH_CIRCUMFERENCE, EARTH_RADIUS, webmercator_to_wgs84, wgs84_to_webmercator};

mod raster;
pub use raster::{DEFAULT_COLORMAP, RasterTileServer};

/// Errors produced while building tile URLs.
#[non_exhaustive]
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TileUtilsError {
    /// The Google Maps type is not one of `ROADMAP`, `SATELLITE`, `HYBRID` or `TERRAIN`.
    #[error("Unknown Google Maps type '{0}'. Valid options: ROADMAP, SATELLITE, HYBRID, TERRAIN")]
    UnknownGoogleMapType(String),

    /// The tile server endpoint could not be parsed as a base URL.
    #[error("Invalid tile server endpoint '{1}': {0}")]
    InvalidEndpoint(#[source] url::ParseError, String),

    /// The tile server endpoint parsed, but cannot be used as a base for tile paths.
    #[error("Tile server endpoint '{0}' cannot be used as a base URL")]
    EndpointNotABase(String),
}
