//! The map model.
//!
//! A [`Map`] is an ordered list of layers and controls plus view options.
//! Every `add_*` operation validates and normalizes its input before it
//! touches the map, so an error leaves the map exactly as it was.

mod control;
mod error;
mod layer;
mod selector;

use std::path::{Path, PathBuf};

pub use control::Control;
pub use error::{MapError, MapResult};
use gtlparser_tile_utils::{
    BasemapError, DEFAULT_COLORMAP, GOOGLE_ATTRIBUTION, GoogleMapType, RasterTileServer,
    basemap_names, resolve_basemap,
};
pub use layer::{Bounds, GeoJsonLayer, Layer, MediaOverlay, TileLayer, WmsLayer};
pub use selector::{BasemapSelector, SelectorAction, SelectorEvent, SelectorState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::legend::{Legend, LegendOptions, Position};
use crate::styles::{GeometryClass, StyleAttributes, resolve_styles};
use crate::vector::{
    FeatureTable, Reprojector, VectorError, VectorIngestNormalizer, VectorReader, VectorSource,
};

/// Name of the layer added by [`Map::add_google_maps`].
pub const GOOGLE_MAPS_LAYER: &str = "Google Maps";

/// Initial view of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    /// `[latitude, longitude]`
    pub center: [f64; 2],
    pub zoom: u8,
    /// CSS height of the map element.
    pub height: String,
    pub scroll_wheel_zoom: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: [20.0, 0.0],
            zoom: 2,
            height: "600px".to_string(),
            scroll_wheel_zoom: true,
        }
    }
}

/// Options of a vector layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorLayerOptions {
    pub name: Option<String>,
    /// Replaces the default style of the geometry class.
    pub style: Option<StyleAttributes>,
    /// Replaces the default hover style of the geometry class.
    pub hover_style: Option<StyleAttributes>,
}

/// Options of a raster served by the local tile server.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterOptions {
    pub name: String,
    pub colormap: String,
    pub opacity: f64,
    pub attribution: Option<String>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            name: "Raster".to_string(),
            colormap: DEFAULT_COLORMAP.to_string(),
            opacity: 1.0,
            attribution: None,
        }
    }
}

/// Options of a WMS layer.
#[derive(Debug, Clone, PartialEq)]
pub struct WmsOptions {
    pub url: String,
    pub layers: String,
    /// Defaults to the value of `layers`.
    pub name: Option<String>,
    pub format: String,
    pub transparent: bool,
    pub attribution: Option<String>,
}

impl WmsOptions {
    #[must_use]
    pub fn new(url: impl Into<String>, layers: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            layers: layers.into(),
            name: None,
            format: "image/png".to_string(),
            transparent: true,
            attribution: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Map {
    options: MapOptions,
    layers: Vec<Layer>,
    controls: Vec<Control>,
}

impl Map {
    #[must_use]
    pub fn new(options: MapOptions) -> Self {
        Self {
            options,
            layers: Vec::new(),
            controls: Vec::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[must_use]
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    fn push_layer(&mut self, layer: Layer) {
        info!("Adding {} layer", layer.name());
        self.layers.push(layer);
    }

    /// Add a basemap from the catalog. A group without `subset` adds its first member.
    pub fn add_basemap(&mut self, name: &str, subset: Option<&str>) -> MapResult<()> {
        let basemap = resolve_basemap(name, subset)?;
        self.push_layer(Layer::Tile(TileLayer::from(basemap)));
        Ok(())
    }

    pub fn add_google_maps(&mut self, map_type: GoogleMapType) {
        self.push_layer(Layer::Tile(TileLayer {
            name: GOOGLE_MAPS_LAYER.to_string(),
            url: map_type.url_template(),
            attribution: Some(GOOGLE_ATTRIBUTION.to_string()),
            max_zoom: None,
            opacity: 1.0,
            from_selector: false,
        }));
    }

    /// Add a layers control at the top right corner, once.
    pub fn add_layer_control(&mut self) {
        if self
            .controls
            .iter()
            .any(|control| matches!(control, Control::Layers { .. }))
        {
            debug!("The map already has a layer control");
            return;
        }
        self.controls.push(Control::Layers {
            position: Position::TopRight,
        });
    }

    /// Add any kind of vector input using the built-in reader and reprojector.
    pub fn add_vector(
        &mut self,
        source: VectorSource,
        options: VectorLayerOptions,
    ) -> MapResult<()> {
        self.add_vector_with(&VectorIngestNormalizer::new(), source, options)
    }

    /// Add any kind of vector input using a custom normalizer.
    pub fn add_vector_with<R: VectorReader, P: Reprojector>(
        &mut self,
        normalizer: &VectorIngestNormalizer<R, P>,
        source: VectorSource,
        options: VectorLayerOptions,
    ) -> MapResult<()> {
        let default_name = match &source {
            VectorSource::FilePath(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string()),
            VectorSource::Table(_) | VectorSource::Raw(_) => None,
        };
        let data = normalizer.normalize(source)?;
        let geometry_class = GeometryClass::of_layer(&data);
        let styles = resolve_styles(&data, options.style, options.hover_style);
        let name = options
            .name
            .or(default_name)
            .unwrap_or_else(|| "GeoJSON".to_string());
        self.push_layer(Layer::GeoJson(GeoJsonLayer {
            name,
            geometry_class,
            style: styles.style,
            hover_style: styles.hover_style,
            data,
        }));
        Ok(())
    }

    /// Add a `GeoJSON` file or object. Feature tables are rejected, use [`Self::add_gdf`].
    pub fn add_geojson(
        &mut self,
        source: VectorSource,
        options: VectorLayerOptions,
    ) -> MapResult<()> {
        if let VectorSource::Table(_) = source {
            return Err(VectorError::InvalidInputKind(source.kind().to_string()).into());
        }
        self.add_vector(source, options)
    }

    /// Add a vector file from disk.
    pub fn add_shp(
        &mut self,
        path: impl Into<PathBuf>,
        options: VectorLayerOptions,
    ) -> MapResult<()> {
        self.add_vector(VectorSource::FilePath(path.into()), options)
    }

    /// Add an in-memory feature table in any supported coordinate system.
    pub fn add_gdf(
        &mut self,
        table: FeatureTable,
        options: VectorLayerOptions,
    ) -> MapResult<()> {
        self.add_vector(VectorSource::Table(table), options)
    }

    /// Add a raster file rendered by the local tile server.
    pub fn add_raster(
        &mut self,
        path: &Path,
        options: RasterOptions,
        server: &RasterTileServer,
    ) -> MapResult<()> {
        let opacity = layer::validate_opacity(options.opacity)?;
        let url = server.tile_url(&path.to_string_lossy(), Some(&options.colormap));
        self.push_layer(Layer::Tile(TileLayer {
            name: options.name,
            url,
            attribution: options.attribution,
            max_zoom: None,
            opacity,
            from_selector: false,
        }));
        Ok(())
    }

    /// Add an image overlay. Without bounds the image covers the whole world.
    pub fn add_image(&mut self, url: &str, bounds: Option<Bounds>, opacity: f64) -> MapResult<()> {
        let overlay = media_overlay("Image", url, bounds, opacity)?;
        self.push_layer(Layer::Image(overlay));
        Ok(())
    }

    /// Add a video overlay. Without bounds the video covers the whole world.
    pub fn add_video(&mut self, url: &str, bounds: Option<Bounds>, opacity: f64) -> MapResult<()> {
        let overlay = media_overlay("Video", url, bounds, opacity)?;
        self.push_layer(Layer::Video(overlay));
        Ok(())
    }

    pub fn add_wms_layer(&mut self, options: WmsOptions) -> MapResult<()> {
        let url = Url::parse(&options.url)
            .map_err(|e| MapError::InvalidWmsUrl(e, options.url.clone()))?;
        self.push_layer(Layer::Wms(WmsLayer {
            name: options.name.unwrap_or_else(|| options.layers.clone()),
            url: url.to_string(),
            layers: options.layers,
            format: options.format,
            transparent: options.transparent,
            attribution: options.attribution,
        }));
        Ok(())
    }

    /// Show two layers side by side with a swipe control.
    ///
    /// Each side is a catalog basemap name, or else a raster file served by
    /// the local tile server.
    pub fn add_split_map(
        &mut self,
        left: &str,
        right: &str,
        server: Option<&RasterTileServer>,
    ) -> MapResult<()> {
        let left = split_side(left, "Left raster", server)?;
        let right = split_side(right, "Right raster", server)?;
        let control = Control::SplitMap {
            left: self.layers.len(),
            right: self.layers.len() + 1,
        };
        self.push_layer(Layer::Tile(left));
        self.push_layer(Layer::Tile(right));
        self.controls.push(control);
        self.add_layer_control();
        Ok(())
    }

    pub fn add_legend(&mut self, options: LegendOptions) -> MapResult<()> {
        let legend = Legend::try_from(options)?;
        debug!("Adding legend {} with {} entries", legend.title, legend.entries.len());
        self.controls.push(Control::Legend(legend));
        Ok(())
    }

    /// Add a dropdown listing every catalog basemap, replacing any previous one.
    pub fn add_basemap_selector(&mut self, position: Position) {
        self.controls
            .retain(|control| !matches!(control, Control::BasemapSelector(_)));
        self.controls
            .push(Control::BasemapSelector(BasemapSelector::new(
                position,
                basemap_names(),
            )));
    }

    /// Feed a UI event to the basemap selector and return its new state.
    ///
    /// A basemap picked from the dropdown replaces the one picked before it,
    /// in the same place. Layers added by other means are never touched.
    pub fn handle_selector_event(&mut self, event: SelectorEvent) -> MapResult<SelectorState> {
        let (index, mut selector) = self
            .controls
            .iter()
            .enumerate()
            .find_map(|(index, control)| match control {
                Control::BasemapSelector(selector) => Some((index, selector.clone())),
                _ => None,
            })
            .ok_or(MapError::NoBasemapSelector)?;

        if let SelectorAction::ChangeBasemap(name) = selector.handle(event) {
            let layer = TileLayer {
                from_selector: true,
                ..TileLayer::from(resolve_basemap(&name, None)?)
            };
            selector.set_selected(layer.name.clone());
            let owned = self
                .layers
                .iter_mut()
                .find(|l| matches!(l, Layer::Tile(tile) if tile.from_selector));
            if let Some(owned) = owned {
                info!("Replacing {} with {}", owned.name(), layer.name);
                *owned = Layer::Tile(layer);
            } else {
                self.push_layer(Layer::Tile(layer));
            }
        }

        let state = selector.state();
        if let Some(control) = self.controls.get_mut(index) {
            *control = Control::BasemapSelector(selector);
        }
        Ok(state)
    }
}

fn media_overlay(
    name: &str,
    url: &str,
    bounds: Option<Bounds>,
    opacity: f64,
) -> MapResult<MediaOverlay> {
    Ok(MediaOverlay {
        name: name.to_string(),
        url: url.to_string(),
        bounds: bounds.unwrap_or_default().validate()?,
        opacity: layer::validate_opacity(opacity)?,
    })
}

fn split_side(
    name: &str,
    raster_name: &str,
    server: Option<&RasterTileServer>,
) -> MapResult<TileLayer> {
    match (resolve_basemap(name, None), server) {
        (Ok(basemap), _) => Ok(TileLayer::from(basemap)),
        (Err(BasemapError::UnknownBasemap(_)), Some(server)) => Ok(TileLayer {
            name: raster_name.to_string(),
            url: server.tile_url(name, Some(DEFAULT_COLORMAP)),
            attribution: None,
            max_zoom: None,
            opacity: 1.0,
            from_selector: false,
        }),
        (Err(e), _) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use geojson::{Feature, FeatureCollection, Geometry, Value};
    use gtlparser_tile_utils::TileUtilsError;
    use insta::assert_json_snapshot;
    use serde_json::json;

    use super::*;
    use crate::legend::LegendError;

    fn points() -> VectorSource {
        VectorSource::Raw(FeatureCollection {
            bbox: None,
            features: vec![Feature::from(Geometry::new(Value::Point(vec![
                13.4, 52.5,
            ])))],
            foreign_members: None,
        })
    }

    fn server() -> RasterTileServer {
        RasterTileServer::new("http://localhost:8080").unwrap()
    }

    #[test]
    fn default_options() {
        let map = Map::default();
        assert_eq!(map.options().center, [20.0, 0.0]);
        assert_eq!(map.options().zoom, 2);
        assert_eq!(map.options().height, "600px");
        assert!(map.options().scroll_wheel_zoom);
    }

    #[test]
    fn basemap_group_uses_first_member() {
        let mut map = Map::default();
        map.add_basemap("Esri", None).unwrap();
        map.add_basemap("CartoDB", Some("DarkMatter")).unwrap();
        let names: Vec<_> = map.layers().iter().map(Layer::name).collect();
        assert_eq!(names, ["Esri.WorldStreetMap", "CartoDB.DarkMatter"]);
    }

    #[test]
    fn google_maps_layer() {
        let mut map = Map::default();
        map.add_google_maps("hybrid".parse().unwrap());
        assert_json_snapshot!(map.layers(), @r#"
        [
          {
            "type": "tile",
            "name": "Google Maps",
            "url": "https://mt1.google.com/vt/lyrs=y&x={x}&y={y}&z={z}",
            "attribution": "Google",
            "opacity": 1.0
          }
        ]
        "#);
    }

    #[test]
    fn layer_control_once() {
        let mut map = Map::default();
        map.add_layer_control();
        map.add_layer_control();
        assert_eq!(
            map.controls(),
            [Control::Layers {
                position: Position::TopRight
            }]
        );
    }

    #[test]
    fn vector_layer_gets_default_styles() {
        let mut map = Map::default();
        map.add_vector(points(), VectorLayerOptions::default()).unwrap();
        let Layer::GeoJson(layer) = &map.layers()[0] else {
            panic!("expected a GeoJSON layer");
        };
        assert_eq!(layer.name, "GeoJSON");
        assert_eq!(layer.geometry_class, GeometryClass::Point);
        assert_eq!(layer.style.get("radius"), Some(&json!(5)));
        assert_eq!(layer.hover_style.get("fillColor"), Some(&json!("red")));
    }

    #[test]
    fn vector_layer_overrides() {
        let mut map = Map::default();
        let style = json!({"color": "green"}).as_object().cloned();
        map.add_vector(
            points(),
            VectorLayerOptions {
                name: Some("Cities".to_string()),
                style: style.clone(),
                hover_style: None,
            },
        )
        .unwrap();
        let Layer::GeoJson(layer) = &map.layers()[0] else {
            panic!("expected a GeoJSON layer");
        };
        assert_eq!(layer.name, "Cities");
        assert_eq!(Some(layer.style.clone()), style);
    }

    #[test]
    fn geojson_rejects_tables() {
        let mut map = Map::default();
        let err = map
            .add_geojson(
                VectorSource::Table(FeatureTable::default()),
                VectorLayerOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            MapError::VectorError(VectorError::InvalidInputKind(_))
        ));
        assert!(map.layers().is_empty());
    }

    #[test]
    fn gdf_accepts_tables() {
        let mut map = Map::default();
        map.add_gdf(FeatureTable::default(), VectorLayerOptions::default())
            .unwrap();
        assert_eq!(map.layers().len(), 1);
    }

    #[test]
    fn missing_file_leaves_map_untouched() {
        let mut map = Map::default();
        map.add_basemap("OpenTopoMap", None).unwrap();
        let before = map.clone();
        assert!(map.add_shp("missing.shp", VectorLayerOptions::default()).is_err());
        assert_eq!(map, before);
    }

    #[test]
    fn raster_layer() {
        let mut map = Map::default();
        map.add_raster(Path::new("dem.tif"), RasterOptions::default(), &server())
            .unwrap();
        let Layer::Tile(layer) = &map.layers()[0] else {
            panic!("expected a tile layer");
        };
        assert_eq!(layer.name, "Raster");
        assert_eq!(
            layer.url,
            "http://localhost:8080/api/tiles/{z}/{x}/{y}.png?filename=dem.tif&colormap=RdYlBu_11"
        );

        let err = map
            .add_raster(
                Path::new("dem.tif"),
                RasterOptions {
                    opacity: 2.0,
                    ..RasterOptions::default()
                },
                &server(),
            )
            .unwrap_err();
        assert!(matches!(err, MapError::InvalidOpacity(_)));
        assert_eq!(map.layers().len(), 1);
    }

    #[test]
    fn overlays_default_to_world() {
        let mut map = Map::default();
        map.add_image("https://example.com/a.png", None, 1.0).unwrap();
        let swapped = Bounds([[32.0, -130.0], [13.0, -100.0]]);
        assert!(
            map.add_video("https://example.com/b.webm", Some(swapped), 0.5)
                .is_err()
        );
        map.add_video(
            "https://example.com/b.webm",
            Some(Bounds([[13.0, -130.0], [32.0, -100.0]])),
            0.5,
        )
        .unwrap();
        assert_json_snapshot!(map.layers(), @r#"
        [
          {
            "type": "image",
            "name": "Image",
            "url": "https://example.com/a.png",
            "bounds": [
              [
                -90.0,
                -180.0
              ],
              [
                90.0,
                180.0
              ]
            ],
            "opacity": 1.0
          },
          {
            "type": "video",
            "name": "Video",
            "url": "https://example.com/b.webm",
            "bounds": [
              [
                13.0,
                -130.0
              ],
              [
                32.0,
                -100.0
              ]
            ],
            "opacity": 0.5
          }
        ]
        "#);
    }

    #[test]
    fn wms_layer() {
        let mut map = Map::default();
        let err = map
            .add_wms_layer(WmsOptions::new("not a url", "nexrad"))
            .unwrap_err();
        assert!(matches!(err, MapError::InvalidWmsUrl(..)));
        assert!(map.layers().is_empty());

        map.add_wms_layer(WmsOptions::new(
            "https://mesonet.agron.iastate.edu/cgi-bin/wms/nexrad/n0r.cgi",
            "nexrad-n0r-900913",
        ))
        .unwrap();
        let Layer::Wms(layer) = &map.layers()[0] else {
            panic!("expected a WMS layer");
        };
        assert_eq!(layer.name, "nexrad-n0r-900913");
        assert_eq!(layer.format, "image/png");
        assert!(layer.transparent);
    }

    #[test]
    fn split_map_with_basemaps() {
        let mut map = Map::default();
        map.add_split_map("openstreetmap", "cartodbpositron", None)
            .unwrap();
        let names: Vec<_> = map.layers().iter().map(Layer::name).collect();
        assert_eq!(names, ["OpenStreetMap.Mapnik", "CartoDB.Positron"]);
        assert_eq!(
            map.controls(),
            [
                Control::SplitMap { left: 0, right: 1 },
                Control::Layers {
                    position: Position::TopRight
                }
            ]
        );
    }

    #[test]
    fn split_map_with_rasters() {
        let mut map = Map::default();
        map.add_split_map("before.tif", "Esri.WorldImagery", Some(&server()))
            .unwrap();
        assert_eq!(map.layers()[0].name(), "Left raster");
        assert_eq!(map.layers()[1].name(), "Esri.WorldImagery");

        let mut map = Map::default();
        let err = map
            .add_split_map("before.tif", "after.tif", None)
            .unwrap_err();
        assert!(matches!(
            err,
            MapError::BasemapError(BasemapError::UnknownBasemap(_))
        ));
        assert!(map.layers().is_empty());
        assert!(map.controls().is_empty());
    }

    #[test]
    fn legend_errors_add_nothing() {
        let mut map = Map::default();
        let err = map
            .add_legend(LegendOptions {
                labels: Some(vec!["a".to_string(), "b".to_string()]),
                colors: Some(vec!["ff0000".to_string()]),
                ..LegendOptions::default()
            })
            .unwrap_err();
        assert!(matches!(
            err,
            MapError::LegendError(LegendError::LegendLengthMismatch { .. })
        ));
        assert!(map.controls().is_empty());

        map.add_legend(LegendOptions {
            builtin: Some("NLCD".to_string()),
            ..LegendOptions::default()
        })
        .unwrap();
        assert!(matches!(&map.controls()[0], Control::Legend(legend) if legend.entries.len() == 20));
    }

    #[test]
    fn selector_replaces_its_basemap() {
        let mut map = Map::default();
        assert!(matches!(
            map.handle_selector_event(SelectorEvent::Toggle),
            Err(MapError::NoBasemapSelector)
        ));

        map.add_basemap("OpenStreetMap", None).unwrap();
        map.add_basemap_selector(Position::TopRight);
        let Control::BasemapSelector(selector) = &map.controls()[0] else {
            panic!("expected a basemap selector");
        };
        assert_eq!(selector.options().len(), basemap_names().len());

        let state = map
            .handle_selector_event(SelectorEvent::Select("Esri.WorldImagery".to_string()))
            .unwrap();
        assert_eq!(state, SelectorState::Expanded);
        let state = map
            .handle_selector_event(SelectorEvent::Select("CartoDB.DarkMatter".to_string()))
            .unwrap();
        assert_eq!(state, SelectorState::Expanded);
        let names: Vec<_> = map.layers().iter().map(Layer::name).collect();
        assert_eq!(names, ["OpenStreetMap.Mapnik", "CartoDB.DarkMatter"]);

        let before = map.clone();
        assert!(map
            .handle_selector_event(SelectorEvent::Select("Nowhere".to_string()))
            .is_err());
        assert_eq!(map, before);

        assert_eq!(
            map.handle_selector_event(SelectorEvent::Toggle).unwrap(),
            SelectorState::Collapsed
        );
        map.handle_selector_event(SelectorEvent::Select("OpenTopoMap".to_string()))
            .unwrap();
        assert_eq!(map.layers().len(), 2);

        assert_eq!(
            map.handle_selector_event(SelectorEvent::Close).unwrap(),
            SelectorState::Closed
        );
        assert_eq!(
            map.handle_selector_event(SelectorEvent::Toggle).unwrap(),
            SelectorState::Closed
        );
    }

    #[test]
    fn selector_keeps_same_named_layers() {
        let mut map = Map::default();
        map.add_basemap("OpenTopoMap", None).unwrap();
        map.add_split_map("OpenTopoMap", "CartoDB.Positron", None)
            .unwrap();
        map.add_basemap_selector(Position::TopLeft);

        map.handle_selector_event(SelectorEvent::Select("OpenTopoMap".to_string()))
            .unwrap();
        map.handle_selector_event(SelectorEvent::Select("Esri.WorldImagery".to_string()))
            .unwrap();

        let names: Vec<_> = map.layers().iter().map(Layer::name).collect();
        assert_eq!(
            names,
            [
                "OpenTopoMap",
                "OpenTopoMap",
                "CartoDB.Positron",
                "Esri.WorldImagery"
            ]
        );
        let Some(Control::SplitMap { left, right }) = map
            .controls()
            .iter()
            .find(|c| matches!(c, Control::SplitMap { .. }))
        else {
            panic!("expected a split map");
        };
        assert_eq!(map.layers()[*left].name(), "OpenTopoMap");
        assert_eq!(map.layers()[*right].name(), "CartoDB.Positron");
        let owned: Vec<_> = map
            .layers()
            .iter()
            .filter(|l| matches!(l, Layer::Tile(tile) if tile.from_selector))
            .map(Layer::name)
            .collect();
        assert_eq!(owned, ["Esri.WorldImagery"]);
    }

    #[test]
    fn overlay_longitude_must_be_in_range() {
        let mut map = Map::default();
        let err = map
            .add_image(
                "https://example.com/a.png",
                Some(Bounds([[0.0, -500.0], [10.0, 900.0]])),
                1.0,
            )
            .unwrap_err();
        assert!(matches!(err, MapError::InvalidBounds(_)));
        assert!(map.layers().is_empty());
    }

    #[test]
    fn tile_utils_errors_convert() {
        let err = MapError::from(TileUtilsError::UnknownGoogleMapType("x".to_string()));
        assert_eq!(
            err.to_string(),
            "Unknown Google Maps type 'x'. Valid options: ROADMAP, SATELLITE, HYBRID, TERRAIN"
        );
    }
}
