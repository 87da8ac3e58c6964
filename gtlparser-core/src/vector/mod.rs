//! Vector ingestion.
//!
//! Every vector input accepted by the map is funnelled through
//! [`VectorIngestNormalizer::normalize`], which yields WGS84 `GeoJSON`
//! regardless of whether the caller handed over a file path, an in-memory
//! [`FeatureTable`], or a raw `GeoJSON` object.

mod crs;
mod error;
mod reader;
mod reproject;
mod table;

use std::path::{Path, PathBuf};

pub use crs::Crs;
pub use error::{VectorError, VectorResult};
use geojson::{Feature, FeatureCollection, GeoJson, JsonValue};
pub use reader::{GeoJsonFileReader, VectorReader};
pub use reproject::{BuiltinReprojector, Reprojector};
use serde::{Deserialize, Serialize};
pub use table::FeatureTable;
use tracing::debug;

/// The three kinds of vector input.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorSource {
    /// A file on disk, opened by a [`VectorReader`].
    FilePath(PathBuf),
    /// A feature table in any coordinate system the [`Reprojector`] supports.
    Table(FeatureTable),
    /// `GeoJSON` that is already in WGS84.
    Raw(FeatureCollection),
}

impl VectorSource {
    /// Short human-readable name of the input kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FilePath(_) => "file path",
            Self::Table(_) => "feature table",
            Self::Raw(_) => "GeoJSON object",
        }
    }
}

impl From<PathBuf> for VectorSource {
    fn from(path: PathBuf) -> Self {
        Self::FilePath(path)
    }
}

impl From<&Path> for VectorSource {
    fn from(path: &Path) -> Self {
        Self::FilePath(path.to_path_buf())
    }
}

impl From<FeatureTable> for VectorSource {
    fn from(table: FeatureTable) -> Self {
        Self::Table(table)
    }
}

impl From<FeatureCollection> for VectorSource {
    fn from(collection: FeatureCollection) -> Self {
        Self::Raw(collection)
    }
}

impl From<NormalizedGeometry> for VectorSource {
    fn from(geometry: NormalizedGeometry) -> Self {
        Self::Raw(geometry.0)
    }
}

/// Classify loosely typed input: a string is a path, a `GeoJSON` object is raw data.
impl TryFrom<JsonValue> for VectorSource {
    type Error = VectorError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::String(path) => Ok(Self::FilePath(PathBuf::from(path))),
            JsonValue::Object(_) => {
                let description = describe(&value);
                GeoJson::from_json_value(value)
                    .map(|geojson| Self::Raw(table::into_feature_collection(geojson)))
                    .map_err(|_| VectorError::InvalidInputKind(description))
            }
            other => Err(VectorError::InvalidInputKind(describe(&other))),
        }
    }
}

fn describe(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(v) => format!("boolean {v}"),
        JsonValue::Number(v) => format!("number {v}"),
        JsonValue::String(_) => "string".to_string(),
        JsonValue::Array(v) => format!("array of {} elements", v.len()),
        JsonValue::Object(v) => match v.get("type").and_then(JsonValue::as_str) {
            Some(kind) => format!("object of type {kind:?}"),
            None => "object without a GeoJSON type".to_string(),
        },
    }
}

/// WGS84 `GeoJSON` ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedGeometry(FeatureCollection);

impl NormalizedGeometry {
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.0.features
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.features.is_empty()
    }

    #[must_use]
    pub fn as_collection(&self) -> &FeatureCollection {
        &self.0
    }

    #[must_use]
    pub fn into_collection(self) -> FeatureCollection {
        self.0
    }
}

/// Turns any [`VectorSource`] into [`NormalizedGeometry`].
#[derive(Debug, Clone)]
pub struct VectorIngestNormalizer<R = GeoJsonFileReader, P = BuiltinReprojector> {
    reader: R,
    reprojector: P,
}

impl VectorIngestNormalizer {
    /// A normalizer using the built-in `GeoJSON` reader and reprojector.
    #[must_use]
    pub fn new() -> Self {
        Self::with_collaborators(GeoJsonFileReader, BuiltinReprojector)
    }
}

impl Default for VectorIngestNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, P> VectorIngestNormalizer<R, P> {
    #[must_use]
    pub fn with_collaborators(reader: R, reprojector: P) -> Self {
        Self {
            reader,
            reprojector,
        }
    }
}

impl<R: VectorReader, P: Reprojector> VectorIngestNormalizer<R, P> {
    /// Normalize vector input to WGS84 `GeoJSON`.
    ///
    /// Raw `GeoJSON` is trusted to already be in WGS84 and is passed through
    /// unchanged. Files are read and then treated like tables. Tables are
    /// reprojected when they are not in WGS84.
    pub fn normalize(&self, source: VectorSource) -> VectorResult<NormalizedGeometry> {
        match source {
            VectorSource::FilePath(path) => {
                let table = self.reader.open(&path)?;
                self.normalize_table(table)
            }
            VectorSource::Table(table) => self.normalize_table(table),
            VectorSource::Raw(collection) => Ok(NormalizedGeometry(collection)),
        }
    }

    fn normalize_table(&self, table: FeatureTable) -> VectorResult<NormalizedGeometry> {
        let table = if table.crs() == &Crs::Wgs84 {
            table
        } else {
            self.reprojector.reproject(table, &Crs::Wgs84)?
        };
        debug!("Normalized {} features", table.len());
        Ok(NormalizedGeometry(table.to_geo_interchange()))
    }
}

/// Normalize with the default collaborators.
pub fn normalize(source: VectorSource) -> VectorResult<NormalizedGeometry> {
    VectorIngestNormalizer::new().normalize(source)
}
