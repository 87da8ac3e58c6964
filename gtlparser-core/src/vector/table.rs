use geojson::{Feature, FeatureCollection, GeoJson, JsonValue};

use super::Crs;

/// An in-memory table of features in a known coordinate reference system.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureTable {
    crs: Crs,
    features: Vec<Feature>,
}

impl FeatureTable {
    #[must_use]
    pub fn new(crs: Crs, features: Vec<Feature>) -> Self {
        Self { crs, features }
    }

    /// Build a table from parsed `GeoJSON`.
    ///
    /// The coordinate system comes from the legacy `crs` member when present,
    /// otherwise `GeoJSON` coordinates are WGS84 by definition.
    #[must_use]
    pub fn from_geojson(geojson: GeoJson) -> Self {
        let collection = into_feature_collection(geojson);
        let crs = collection
            .foreign_members
            .as_ref()
            .and_then(|members| members.get("crs"))
            .and_then(legacy_crs)
            .unwrap_or_default();
        Self::new(crs, collection.features)
    }

    #[must_use]
    pub fn crs(&self) -> &Crs {
        &self.crs
    }

    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    #[must_use]
    pub fn into_parts(self) -> (Crs, Vec<Feature>) {
        (self.crs, self.features)
    }

    /// Export the table as a `GeoJSON` feature collection.
    ///
    /// Coordinates are written as-is, so callers reproject to WGS84 first.
    #[must_use]
    pub fn to_geo_interchange(self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.features,
            foreign_members: None,
        }
    }
}

/// Wrap single features and bare geometries into a collection.
pub(crate) fn into_feature_collection(geojson: GeoJson) -> FeatureCollection {
    match geojson {
        GeoJson::FeatureCollection(collection) => collection,
        GeoJson::Feature(feature) => FeatureCollection {
            bbox: None,
            features: vec![feature],
            foreign_members: None,
        },
        GeoJson::Geometry(geometry) => FeatureCollection {
            bbox: None,
            features: vec![Feature::from(geometry)],
            foreign_members: None,
        },
    }
}

/// Reads `{"type": "name", "properties": {"name": "EPSG:3857"}}`
/// and the older `{"type": "EPSG", "properties": {"code": 3857}}`.
fn legacy_crs(crs: &JsonValue) -> Option<Crs> {
    let properties = crs.get("properties")?;
    if let Some(name) = properties.get("name").and_then(JsonValue::as_str) {
        return Some(Crs::parse(name));
    }
    match properties.get("code")? {
        JsonValue::Number(code) => Some(Crs::parse(&format!("EPSG:{code}"))),
        JsonValue::String(code) => Some(Crs::parse(&format!("EPSG:{code}"))),
        _ => None,
    }
}
