use geojson::{Geometry, Value};
use gtlparser_tile_utils::{webmercator_to_wgs84, wgs84_to_webmercator};
use tracing::debug;

use super::{Crs, FeatureTable, VectorError, VectorResult};

/// Converts a [`FeatureTable`] into another coordinate reference system.
pub trait Reprojector {
    fn reproject(&self, table: FeatureTable, target: &Crs) -> VectorResult<FeatureTable>;
}

/// Handles the identity case and the WGS84 / Web Mercator pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinReprojector;

impl Reprojector for BuiltinReprojector {
    fn reproject(&self, table: FeatureTable, target: &Crs) -> VectorResult<FeatureTable> {
        if table.crs() == target {
            return Ok(table);
        }
        let transform: fn(f64, f64) -> (f64, f64) = match (table.crs(), target) {
            (Crs::WebMercator, Crs::Wgs84) => webmercator_to_wgs84,
            (Crs::Wgs84, Crs::WebMercator) => wgs84_to_webmercator,
            (from, to) => {
                return Err(VectorError::UnsupportedCrs {
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        };
        debug!(
            "Reprojecting {} features from {} to {target}",
            table.len(),
            table.crs()
        );

        let (_, mut features) = table.into_parts();
        for feature in &mut features {
            // bounding boxes are stale once coordinates move
            feature.bbox = None;
            if let Some(geometry) = feature.geometry.as_mut() {
                transform_geometry(geometry, transform);
            }
        }
        Ok(FeatureTable::new(target.clone(), features))
    }
}

fn transform_geometry(geom: &mut Geometry, transform: fn(f64, f64) -> (f64, f64)) {
    geom.bbox = None;
    match &mut geom.value {
        Value::Point(p) => transform_position(p, transform),
        Value::MultiPoint(ps) | Value::LineString(ps) => {
            for p in ps {
                transform_position(p, transform);
            }
        }
        Value::MultiLineString(ls) | Value::Polygon(ls) => {
            for ps in ls {
                for p in ps {
                    transform_position(p, transform);
                }
            }
        }
        Value::MultiPolygon(polys) => {
            for poly in polys {
                for ring in poly {
                    for p in ring {
                        transform_position(p, transform);
                    }
                }
            }
        }
        Value::GeometryCollection(gs) => {
            for g in gs {
                transform_geometry(g, transform);
            }
        }
    }
}

fn transform_position(v: &mut [f64], transform: fn(f64, f64) -> (f64, f64)) {
    if let [x, y, ..] = v {
        (*x, *y) = transform(*x, *y);
    }
}
