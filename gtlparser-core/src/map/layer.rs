use gtlparser_tile_utils::ResolvedBasemap;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{MapError, MapResult};
use crate::styles::{GeometryClass, StyleAttributes};
use crate::vector::NormalizedGeometry;

/// A layer on the map, in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Layer {
    Tile(TileLayer),
    GeoJson(GeoJsonLayer),
    Image(MediaOverlay),
    Video(MediaOverlay),
    Wms(WmsLayer),
}

impl Layer {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Tile(layer) => &layer.name,
            Self::GeoJson(layer) => &layer.name,
            Self::Image(layer) | Self::Video(layer) => &layer.name,
            Self::Wms(layer) => &layer.name,
        }
    }
}

/// An XYZ tile layer.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub name: String,
    /// URL template with `{z}`, `{x}` and `{y}` placeholders.
    pub url: String,
    pub attribution: Option<String>,
    pub max_zoom: Option<u8>,
    pub opacity: f64,
    /// Set on the layer owned by the basemap selector.
    #[serde(skip_serializing_if = "is_false")]
    pub from_selector: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !value
}

impl From<ResolvedBasemap> for TileLayer {
    fn from(basemap: ResolvedBasemap) -> Self {
        Self {
            name: basemap.name,
            url: basemap.provider.url.to_string(),
            attribution: Some(basemap.provider.attribution.to_string()),
            max_zoom: Some(basemap.provider.max_zoom),
            opacity: 1.0,
            from_selector: false,
        }
    }
}

/// A styled vector layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoJsonLayer {
    pub name: String,
    pub geometry_class: GeometryClass,
    pub style: StyleAttributes,
    pub hover_style: StyleAttributes,
    pub data: NormalizedGeometry,
}

/// An image or video stretched over a geographic box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaOverlay {
    pub name: String,
    pub url: String,
    pub bounds: Bounds,
    pub opacity: f64,
}

/// A layer from a Web Map Service.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WmsLayer {
    pub name: String,
    pub url: String,
    pub layers: String,
    pub format: String,
    pub transparent: bool,
    pub attribution: Option<String>,
}

/// `[[south, west], [north, east]]` in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bounds(pub [[f64; 2]; 2]);

impl Bounds {
    /// The whole world, used when an overlay comes without bounds.
    pub const WORLD: Self = Self([[-90.0, -180.0], [90.0, 180.0]]);

    pub(crate) fn validate(self) -> MapResult<Self> {
        let [[south, west], [north, east]] = self.0;
        let valid = [south, west, north, east].iter().all(|v| v.is_finite())
            && (-90.0..=90.0).contains(&south)
            && (-90.0..=90.0).contains(&north)
            && (-180.0..=180.0).contains(&west)
            && (-180.0..=180.0).contains(&east)
            && south <= north
            && west <= east;
        if valid {
            Ok(self)
        } else {
            Err(MapError::InvalidBounds(self.0))
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::WORLD
    }
}

pub(crate) fn validate_opacity(opacity: f64) -> MapResult<f64> {
    if (0.0..=1.0).contains(&opacity) {
        Ok(opacity)
    } else {
        Err(MapError::InvalidOpacity(opacity))
    }
}
