//! Export a [`Map`] as a JSON map document or as a standalone Leaflet page.

mod template;

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use gtlparser_core::legend::Swatch;
use gtlparser_core::map::{Control, Map, TileLayer};
use gtlparser_tile_utils::resolve_basemap;
use log::{info, warn};
use serde::Serialize;
pub use template::{MAP_DOCUMENT_PLACEHOLDER, MAP_HTML};

use crate::{GtlError, GtlResult};

/// What the page script needs on top of the map itself.
#[derive(Serialize)]
struct MapDocument<'a> {
    #[serde(flatten)]
    map: &'a Map,
    /// Tile layers the basemap selector can switch to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    basemaps: Vec<TileLayer>,
    /// Swatch box of every legend shape in use.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    swatches: BTreeMap<String, Swatch>,
}

impl<'a> MapDocument<'a> {
    fn new(map: &'a Map) -> Self {
        let mut basemaps = Vec::new();
        let mut swatches = BTreeMap::new();
        for control in map.controls() {
            match control {
                Control::BasemapSelector(selector) => {
                    basemaps = selector
                        .options()
                        .iter()
                        .filter_map(|name| match resolve_basemap(name, None) {
                            Ok(basemap) => Some(TileLayer::from(basemap)),
                            Err(e) => {
                                warn!("Leaving {name} out of the basemap selector: {e}");
                                None
                            }
                        })
                        .collect();
                }
                Control::Legend(legend) => {
                    swatches.insert(legend.shape.to_string(), legend.shape.swatch());
                }
                Control::Layers { .. } | Control::SplitMap { .. } => {}
            }
        }
        Self {
            map,
            basemaps,
            swatches,
        }
    }
}

/// Serialize the map, with `<` escaped so the text can sit inside a `<script>` element.
pub fn map_document(map: &Map) -> serde_json::Result<String> {
    let json = serde_json::to_string_pretty(&MapDocument::new(map))?;
    Ok(json.replace('<', "\\u003c"))
}

/// A standalone HTML page showing the map with Leaflet.
pub fn render_html(map: &Map) -> serde_json::Result<String> {
    Ok(MAP_HTML.replacen(MAP_DOCUMENT_PLACEHOLDER, &map_document(map)?, 1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
    /// JSON printed to stdout.
    Stdout,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> GtlResult<Self> {
        if path.as_os_str() == OsStr::new("-") {
            return Ok(Self::Stdout);
        }
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("html" | "htm") => Ok(Self::Html),
            Some("json") => Ok(Self::Json),
            _ => Err(GtlError::UnsupportedOutputFormat(path.to_path_buf())),
        }
    }
}

/// Write the map to `output`, picking the format from its extension.
pub fn write_map(map: &Map, output: &Path) -> GtlResult<()> {
    let contents = match OutputFormat::from_path(output)? {
        OutputFormat::Html => render_html(map)?,
        OutputFormat::Json => map_document(map)?,
        OutputFormat::Stdout => {
            println!("{}", map_document(map)?);
            return Ok(());
        }
    };
    fs::write(output, contents).map_err(|e| GtlError::OutputWriteError(e, output.to_path_buf()))?;
    info!("Map saved to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use gtlparser_core::legend::{LegendOptions, LegendShape, Position};
    use gtlparser_core::map::{MapOptions, VectorLayerOptions};
    use gtlparser_core::vector::VectorSource;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;

    fn sample_map() -> Map {
        let mut map = Map::new(MapOptions::default());
        map.add_basemap("OpenTopoMap", None).unwrap();
        let point = json!({
            "type": "Feature",
            "properties": {"name": "</script><script>alert(1)</script>"},
            "geometry": {"type": "Point", "coordinates": [13.4, 52.5]}
        });
        map.add_vector(
            VectorSource::try_from(point).unwrap(),
            VectorLayerOptions::default(),
        )
        .unwrap();
        map
    }

    #[rstest]
    #[case("map.html", OutputFormat::Html)]
    #[case("MAP.HTM", OutputFormat::Html)]
    #[case("out/map.json", OutputFormat::Json)]
    #[case("-", OutputFormat::Stdout)]
    fn output_format(#[case] path: &str, #[case] expected: OutputFormat) {
        assert_eq!(OutputFormat::from_path(Path::new(path)).unwrap(), expected);
    }

    #[test]
    fn unsupported_output() {
        let err = OutputFormat::from_path(Path::new("map.png")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported output file map.png. Use a .html or .json file, or - to print JSON to stdout"
        );
    }

    #[test]
    fn script_tags_cannot_escape() {
        let html = render_html(&sample_map()).unwrap();
        assert!(!html.contains(MAP_DOCUMENT_PLACEHOLDER));
        assert_eq!(html.matches("</script>").count(), 4);
        assert!(html.contains(r"\u003c/script>\u003cscript>alert(1)\u003c/script>"));
    }

    #[test]
    fn document_is_plain_json() {
        let doc: Value = serde_json::from_str(&map_document(&sample_map()).unwrap()).unwrap();
        assert_eq!(doc["options"]["zoom"], 2);
        assert_eq!(doc["layers"][0]["type"], "tile");
        assert_eq!(doc["layers"][1]["type"], "geo_json");
        assert_eq!(
            doc["layers"][1]["data"]["features"][0]["properties"]["name"],
            "</script><script>alert(1)</script>"
        );
        assert!(doc.get("basemaps").is_none());
        assert!(doc.get("swatches").is_none());
    }

    #[test]
    fn selector_and_legend_extras() {
        let mut map = sample_map();
        map.add_basemap_selector(Position::TopRight);
        map.add_legend(LegendOptions {
            builtin: Some("Dynamic_World".to_string()),
            ..Default::default()
        })
        .unwrap();

        let doc: Value = serde_json::from_str(&map_document(&map).unwrap()).unwrap();
        let basemaps = doc["basemaps"].as_array().unwrap();
        assert_eq!(
            basemaps.len(),
            doc["controls"][0]["options"].as_array().unwrap().len()
        );
        assert_eq!(basemaps[0]["name"], "OpenStreetMap.Mapnik");
        assert_eq!(
            doc["swatches"],
            json!({"rectangle": {"width_px": 30, "height_px": 16, "border_radius": "0"}})
        );
        assert_eq!(LegendShape::default().to_string(), "rectangle");
    }

    #[test]
    fn same_named_layers_stay_apart() {
        let mut map = Map::new(MapOptions::default());
        map.add_image("https://example.com/a.png", None, 1.0).unwrap();
        map.add_image("https://example.com/b.png", None, 0.5).unwrap();
        map.add_split_map("OpenTopoMap", "OpenTopoMap", None)
            .unwrap();

        let doc: Value = serde_json::from_str(&map_document(&map).unwrap()).unwrap();
        let layers = doc["layers"].as_array().unwrap();
        assert_eq!(layers.len(), 4);
        assert_eq!(layers[0]["name"], layers[1]["name"]);
        assert_eq!(layers[1]["url"], "https://example.com/b.png");
        assert_eq!(
            doc["controls"][0],
            json!({"type": "split_map", "left": 2, "right": 3})
        );

        let html = render_html(&map).unwrap();
        assert!(html.contains("control.addOverlay(built[i], l.name)"));
        assert!(html.contains("sideBySide(built[c.left], built[c.right])"));
    }

    #[test]
    fn writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let map = sample_map();

        let html = dir.path().join("map.html");
        write_map(&map, &html).unwrap();
        assert!(fs::read_to_string(&html).unwrap().starts_with("<!DOCTYPE html>"));

        let json = dir.path().join("map.json");
        write_map(&map, &json).unwrap();
        let doc: Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(doc["layers"].as_array().unwrap().len(), 2);

        let missing = dir.path().join("missing").join("map.html");
        assert!(matches!(
            write_map(&map, &missing),
            Err(GtlError::OutputWriteError(..))
        ));
    }
}
