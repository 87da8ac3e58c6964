use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use geojson::GeoJson;
use tracing::debug;

use super::{FeatureTable, VectorError, VectorResult};

/// Opens a vector file on disk as a [`FeatureTable`].
pub trait VectorReader {
    fn open(&self, path: &Path) -> VectorResult<FeatureTable>;
}

/// Reads `.geojson` and `.json` files.
///
/// Other formats such as shapefiles need a dedicated reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonFileReader;

impl VectorReader for GeoJsonFileReader {
    fn open(&self, path: &Path) -> VectorResult<FeatureTable> {
        let file = File::open(path).map_err(|e| VectorError::IoError(e, path.to_path_buf()))?;

        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);
        if !matches!(extension.as_deref(), Some("geojson" | "json")) {
            return Err(VectorError::UnsupportedFormat(path.to_path_buf()));
        }

        let geojson = GeoJson::from_reader(BufReader::new(file))
            .map_err(|e| VectorError::NotValidGeoJson(e, path.to_path_buf()))?;
        let table = FeatureTable::from_geojson(geojson);
        debug!(
            "Read {} features in {} from {}",
            table.len(),
            table.crs(),
            path.display()
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;
    use crate::vector::Crs;

    #[test]
    fn missing_file_is_io_error() {
        let err = GeoJsonFileReader.open(Path::new("missing.shp")).unwrap_err();
        assert!(matches!(err, VectorError::IoError(..)));
    }

    #[test]
    fn rejects_other_formats() {
        let mut file = tempfile::Builder::new().suffix(".shp").tempfile().unwrap();
        file.write_all(b"not a shapefile").unwrap();
        let err = GeoJsonFileReader.open(file.path()).unwrap_err();
        assert!(matches!(err, VectorError::UnsupportedFormat(_)));
    }

    #[test]
    fn rejects_invalid_geojson() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"type": "Nope"}"#).unwrap();
        let err = GeoJsonFileReader.open(file.path()).unwrap_err();
        assert!(matches!(err, VectorError::NotValidGeoJson(..)));
    }

    #[test]
    fn reads_uppercase_extension() {
        let mut file = tempfile::Builder::new()
            .suffix(".GeoJSON")
            .tempfile()
            .unwrap();
        file.write_all(br#"{"type": "Point", "coordinates": [10.0, 20.0]}"#)
            .unwrap();
        let table = GeoJsonFileReader.open(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.crs(), &Crs::Wgs84);
    }
}
