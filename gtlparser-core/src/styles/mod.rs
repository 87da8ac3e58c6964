//! Default styling of vector layers.

use geojson::{Feature, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::vector::NormalizedGeometry;

/// Leaflet path style options, e.g. `{"color": "#3388ff", "weight": 2}`.
pub type StyleAttributes = serde_json::Map<String, serde_json::Value>;

/// The kind of geometry a layer is styled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryClass {
    Point,
    LineString,
    Polygon,
    /// Geometry collections, features without geometry, and empty layers.
    Unknown,
}

impl GeometryClass {
    /// Multi-part geometries share the class of their single-part counterpart.
    #[must_use]
    pub fn of_value(value: &Value) -> Self {
        match value {
            Value::Point(_) | Value::MultiPoint(_) => Self::Point,
            Value::LineString(_) | Value::MultiLineString(_) => Self::LineString,
            Value::Polygon(_) | Value::MultiPolygon(_) => Self::Polygon,
            Value::GeometryCollection(_) => Self::Unknown,
        }
    }

    #[must_use]
    pub fn of_feature(feature: &Feature) -> Self {
        feature
            .geometry
            .as_ref()
            .map_or(Self::Unknown, |geometry| Self::of_value(&geometry.value))
    }

    /// The class of a layer is decided by its first feature.
    #[must_use]
    pub fn of_layer(geometry: &NormalizedGeometry) -> Self {
        let mut classes = geometry.features().iter().map(Self::of_feature);
        let Some(first) = classes.next() else {
            return Self::Unknown;
        };
        if let Some(other) = classes.find(|class| *class != first) {
            warn!(
                "Layer mixes {first:?} and {other:?} geometries, styling all features as {first:?}"
            );
        }
        first
    }
}

/// Base and hover styles of a vector layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StylePair {
    pub style: StyleAttributes,
    pub hover_style: StyleAttributes,
}

impl StylePair {
    /// Built-in styles for a geometry class.
    #[must_use]
    pub fn defaults_for(class: GeometryClass) -> Self {
        let (style, hover_style) = match class {
            GeometryClass::Point => (
                json!({
                    "radius": 5,
                    "color": "blue",
                    "fillColor": "#3388ff",
                    "fillOpacity": 0.8,
                    "weight": 1
                }),
                json!({"fillColor": "red", "fillOpacity": 1.0}),
            ),
            GeometryClass::LineString => (
                json!({"color": "blue", "weight": 3, "opacity": 0.8}),
                json!({"color": "yellow", "weight": 4, "opacity": 1.0}),
            ),
            GeometryClass::Polygon => (
                json!({"color": "blue", "fillOpacity": 0.5}),
                json!({"color": "yellow", "fillOpacity": 0.2}),
            ),
            GeometryClass::Unknown => (json!({}), json!({})),
        };
        Self {
            style: into_attributes(style),
            hover_style: into_attributes(hover_style),
        }
    }
}

fn into_attributes(value: serde_json::Value) -> StyleAttributes {
    match value {
        serde_json::Value::Object(map) => map,
        _ => StyleAttributes::new(),
    }
}

/// Pick the styles of a vector layer.
///
/// An override replaces the matching default wholesale, keys are never merged.
#[must_use]
pub fn resolve_styles(
    geometry: &NormalizedGeometry,
    style: Option<StyleAttributes>,
    hover_style: Option<StyleAttributes>,
) -> StylePair {
    let defaults = StylePair::defaults_for(GeometryClass::of_layer(geometry));
    StylePair {
        style: style.unwrap_or(defaults.style),
        hover_style: hover_style.unwrap_or(defaults.hover_style),
    }
}
