//! Tile URLs for rasters served by an external local tile server.
//!
//! The tile server itself is not part of this crate. We only know how to
//! address it: `{endpoint}/api/tiles/{z}/{x}/{y}.png?filename=...&colormap=...`.

use url::Url;
use url::form_urlencoded::Serializer;

use crate::TileUtilsError;

/// Colormap applied to single-band rasters when none is requested.
pub const DEFAULT_COLORMAP: &str = "RdYlBu_11";

/// Address of a running local tile server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterTileServer {
    endpoint: Url,
}

impl RasterTileServer {
    /// Parse the tile server base URL, e.g. `http://localhost:8080`.
    pub fn new(endpoint: &str) -> Result<Self, TileUtilsError> {
        let url = Url::parse(endpoint)
            .map_err(|e| TileUtilsError::InvalidEndpoint(e, endpoint.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(TileUtilsError::EndpointNotABase(endpoint.to_string()));
        }
        Ok(Self { endpoint: url })
    }

    /// The base URL of the server.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// XYZ URL template serving `filename` through the tile server.
    ///
    /// Placeholders are left unescaped so that the map client can fill them in.
    #[must_use]
    pub fn tile_url(&self, filename: &str, colormap: Option<&str>) -> String {
        let mut query = Serializer::new(String::new());
        query.append_pair("filename", filename);
        if let Some(colormap) = colormap {
            query.append_pair("colormap", colormap);
        }
        let base = self.endpoint.as_str().trim_end_matches('/');
        format!("{base}/api/tiles/{{z}}/{{x}}/{{y}}.png?{}", query.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_tile_template() {
        let server = RasterTileServer::new("http://localhost:8080").unwrap();
        assert_eq!(
            server.tile_url("/data/dem.tif", Some(DEFAULT_COLORMAP)),
            "http://localhost:8080/api/tiles/{z}/{x}/{y}.png?filename=%2Fdata%2Fdem.tif&colormap=RdYlBu_11"
        );
    }

    #[test]
    fn keeps_endpoint_path() {
        let server = RasterTileServer::new("http://example.com/tiler/").unwrap();
        assert_eq!(
            server.tile_url("landsat 7.tif", None),
            "http://example.com/tiler/api/tiles/{z}/{x}/{y}.png?filename=landsat+7.tif"
        );
    }

    #[test]
    fn rejects_bad_endpoints() {
        assert!(matches!(
            RasterTileServer::new("localhost:8080"),
            Err(TileUtilsError::EndpointNotABase(_))
        ));
        assert!(matches!(
            RasterTileServer::new("not a url"),
            Err(TileUtilsError::InvalidEndpoint(..))
        ));
    }
}
