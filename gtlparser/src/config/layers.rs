//! Config sections describing individual layers and controls.

use std::path::PathBuf;

use gtlparser_core::legend::{LegendOptions, LegendShape, Position};
use gtlparser_core::map::{Bounds, RasterOptions, VectorLayerOptions, WmsOptions};
use gtlparser_core::styles::StyleAttributes;
use serde::{Deserialize, Serialize};

use crate::config::file_config::{ConfigExtras, UnrecognizedKeys, UnrecognizedValues};

/// A catalog basemap, either `OpenTopoMap` or `{name: Esri, subset: WorldImagery}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BasemapConfig {
    Name(String),
    Detailed(BasemapDetails),
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BasemapDetails {
    pub name: String,
    pub subset: Option<String>,
    #[serde(flatten, skip_serializing)]
    pub unrecognized: UnrecognizedValues,
}

impl BasemapConfig {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Detailed(details) => &details.name,
        }
    }

    #[must_use]
    pub fn subset(&self) -> Option<&str> {
        match self {
            Self::Name(_) => None,
            Self::Detailed(details) => details.subset.as_deref(),
        }
    }
}

impl ConfigExtras for BasemapConfig {
    fn get_unrecognized_keys(&self) -> UnrecognizedKeys {
        match self {
            Self::Name(_) => UnrecognizedKeys::new(),
            Self::Detailed(details) => details.unrecognized.keys().cloned().collect(),
        }
    }
}

/// A vector layer read from `path`, or given inline as `data`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorConfig {
    /// Relative paths are resolved against the working directory, not the config file.
    pub path: Option<PathBuf>,
    /// Inline `GeoJSON` object.
    pub data: Option<serde_json::Value>,
    pub name: Option<String>,
    pub style: Option<StyleAttributes>,
    pub hover_style: Option<StyleAttributes>,
    #[serde(flatten, skip_serializing)]
    pub unrecognized: UnrecognizedValues,
}

impl VectorConfig {
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn layer_options(&self) -> VectorLayerOptions {
        VectorLayerOptions {
            name: self.name.clone(),
            style: self.style.clone(),
            hover_style: self.hover_style.clone(),
        }
    }
}

impl ConfigExtras for VectorConfig {
    fn get_unrecognized_keys(&self) -> UnrecognizedKeys {
        self.unrecognized.keys().cloned().collect()
    }
}

/// An image or video overlay.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    pub url: String,
    pub bounds: Option<Bounds>,
    pub opacity: Option<f64>,
    #[serde(flatten, skip_serializing)]
    pub unrecognized: UnrecognizedValues,
}

impl OverlayConfig {
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }
}

impl ConfigExtras for OverlayConfig {
    fn get_unrecognized_keys(&self) -> UnrecognizedKeys {
        self.unrecognized.keys().cloned().collect()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WmsConfig {
    pub url: String,
    pub layers: String,
    pub name: Option<String>,
    pub format: Option<String>,
    pub transparent: Option<bool>,
    pub attribution: Option<String>,
    #[serde(flatten, skip_serializing)]
    pub unrecognized: UnrecognizedValues,
}

impl WmsConfig {
    #[must_use]
    pub fn wms_options(&self) -> WmsOptions {
        let mut options = WmsOptions::new(&self.url, &self.layers);
        options.name.clone_from(&self.name);
        if let Some(format) = &self.format {
            options.format.clone_from(format);
        }
        if let Some(transparent) = self.transparent {
            options.transparent = transparent;
        }
        options.attribution.clone_from(&self.attribution);
        options
    }
}

impl ConfigExtras for WmsConfig {
    fn get_unrecognized_keys(&self) -> UnrecognizedKeys {
        self.unrecognized.keys().cloned().collect()
    }
}

/// A raster file rendered by the local tile server.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RasterConfig {
    pub path: PathBuf,
    pub name: Option<String>,
    pub colormap: Option<String>,
    pub opacity: Option<f64>,
    pub attribution: Option<String>,
    #[serde(flatten, skip_serializing)]
    pub unrecognized: UnrecognizedValues,
}

impl RasterConfig {
    #[must_use]
    pub fn raster_options(&self) -> RasterOptions {
        let defaults = RasterOptions::default();
        RasterOptions {
            name: self.name.clone().unwrap_or(defaults.name),
            colormap: self.colormap.clone().unwrap_or(defaults.colormap),
            opacity: self.opacity.unwrap_or(defaults.opacity),
            attribution: self.attribution.clone(),
        }
    }
}

impl ConfigExtras for RasterConfig {
    fn get_unrecognized_keys(&self) -> UnrecognizedKeys {
        self.unrecognized.keys().cloned().collect()
    }
}

/// Two basemaps or rasters shown side by side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitMapConfig {
    pub left: String,
    pub right: String,
    #[serde(flatten, skip_serializing)]
    pub unrecognized: UnrecognizedValues,
}

impl ConfigExtras for SplitMapConfig {
    fn get_unrecognized_keys(&self) -> UnrecognizedKeys {
        self.unrecognized.keys().cloned().collect()
    }
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    pub title: Option<String>,
    pub labels: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    /// Name of a compiled-in legend, e.g. `NLCD`.
    pub builtin: Option<String>,
    pub position: Option<Position>,
    pub shape: Option<LegendShape>,
    #[serde(flatten, skip_serializing)]
    pub unrecognized: UnrecognizedValues,
}

impl LegendConfig {
    #[must_use]
    pub fn builtin(name: impl Into<String>) -> Self {
        Self {
            builtin: Some(name.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn legend_options(&self) -> LegendOptions {
        let defaults = LegendOptions::default();
        LegendOptions {
            title: self.title.clone(),
            labels: self.labels.clone(),
            colors: self.colors.clone(),
            builtin: self.builtin.clone(),
            position: self.position.unwrap_or(defaults.position),
            shape: self.shape.unwrap_or(defaults.shape),
        }
    }
}

impl ConfigExtras for LegendConfig {
    fn get_unrecognized_keys(&self) -> UnrecognizedKeys {
        self.unrecognized.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn basemap_forms() {
        let basemaps: Vec<BasemapConfig> = serde_yaml::from_str(indoc! {"
            - OpenTopoMap
            - name: Esri
              subset: WorldImagery
              zoom: 3
        "})
        .unwrap();

        assert_eq!(basemaps[0].name(), "OpenTopoMap");
        assert_eq!(basemaps[0].subset(), None);
        assert_eq!(basemaps[1].name(), "Esri");
        assert_eq!(basemaps[1].subset(), Some("WorldImagery"));
        assert_eq!(
            basemaps[1].get_unrecognized_keys_with_prefix("basemaps[]."),
            UnrecognizedKeys::from(["basemaps[].zoom".to_string()])
        );
    }

    #[test]
    fn raster_defaults() {
        let raster: RasterConfig = serde_yaml::from_str("path: dem.tif").unwrap();
        assert_eq!(raster.raster_options(), RasterOptions::default());

        let raster: RasterConfig = serde_yaml::from_str(indoc! {"
            path: dem.tif
            name: Elevation
            colormap: terrain
            opacity: 0.5
        "})
        .unwrap();
        let options = raster.raster_options();
        assert_eq!(options.name, "Elevation");
        assert_eq!(options.colormap, "terrain");
        assert!((options.opacity - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn wms_overrides() {
        let wms: WmsConfig = serde_yaml::from_str(indoc! {"
            url: https://www.mrlc.gov/geoserver/mrlc_display/NLCD_2019_Land_Cover_L48/wms
            layers: NLCD_2019_Land_Cover_L48
            name: NLCD 2019
            format: image/jpeg
        "})
        .unwrap();
        let options = wms.wms_options();
        assert_eq!(options.name.as_deref(), Some("NLCD 2019"));
        assert_eq!(options.format, "image/jpeg");
        assert!(options.transparent);
        assert_eq!(options.attribution, None);
    }

    #[test]
    fn legend_options() {
        let legend: LegendConfig = serde_yaml::from_str(indoc! {"
            title: Land cover
            builtin: NLCD
            position: top-left
            shape: circle
        "})
        .unwrap();
        let options = legend.legend_options();
        assert_eq!(options.position, Position::TopLeft);
        assert_eq!(options.shape, LegendShape::Circle);
        assert_eq!(options.builtin.as_deref(), Some("NLCD"));

        let options = LegendConfig::builtin("ESA_WorldCover").legend_options();
        assert_eq!(options.position, Position::BottomRight);
        assert_eq!(options.shape, LegendShape::Rectangle);
    }
}
