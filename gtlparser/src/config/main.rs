use std::ffi::OsStr;
use std::fs::File;
use std::io::{Read as _, Write as _};
use std::path::Path;

use gtlparser_core::GtlCoreResult;
use gtlparser_core::legend::Position;
use gtlparser_core::map::{Map, MapOptions};
use gtlparser_core::vector::VectorSource;
use gtlparser_tile_utils::{GoogleMapType, RasterTileServer};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use subst::VariableMap;

use crate::config::file_config::{
    ConfigExtras, UnrecognizedKeys, UnrecognizedValues, copy_unrecognized_keys_from_config,
};
use crate::config::layers::{
    BasemapConfig, LegendConfig, OverlayConfig, RasterConfig, SplitMapConfig, VectorConfig,
    WmsConfig,
};
use crate::config::{ConfigFileError, ConfigFileResult, OptOneMany};

/// The map description read from a YAML file and/or the command line.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// `[latitude, longitude]` of the initial view.
    pub center: Option<[f64; 2]>,
    pub zoom: Option<u8>,
    /// CSS height of the map, e.g. `600px`.
    pub height: Option<String>,
    pub scroll_wheel_zoom: Option<bool>,

    #[serde(default, skip_serializing_if = "OptOneMany::is_none")]
    pub basemaps: OptOneMany<BasemapConfig>,
    /// One of `ROADMAP`, `SATELLITE`, `HYBRID` or `TERRAIN`.
    pub google_maps: Option<String>,
    pub layer_control: Option<bool>,
    /// Endpoint of the local tile server that renders `rasters`.
    pub raster_tile_server: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vectors: Vec<VectorConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<OverlayConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<OverlayConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wms: Vec<WmsConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rasters: Vec<RasterConfig>,
    pub split_map: Option<SplitMapConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legends: Vec<LegendConfig>,
    pub basemap_selector: Option<Position>,

    #[serde(flatten, skip_serializing)]
    pub unrecognized: UnrecognizedValues,
}

fn collect_unrecognized<T: ConfigExtras>(
    result: &mut UnrecognizedKeys,
    section: &str,
    items: &[T],
) {
    for (idx, item) in items.iter().enumerate() {
        result.extend(item.get_unrecognized_keys_with_prefix(&format!("{section}[{idx}].")));
    }
}

impl Config {
    /// Validate the merged config, and warn about every key that will be ignored.
    pub fn finalize(&mut self) -> ConfigFileResult<UnrecognizedKeys> {
        let mut res = UnrecognizedKeys::new();
        copy_unrecognized_keys_from_config(&mut res, "", &self.unrecognized);

        let basemap_prefix = if matches!(self.basemaps, OptOneMany::One(_)) {
            "basemaps."
        } else {
            "basemaps[]."
        };
        for basemap in self.basemaps.iter() {
            res.extend(basemap.get_unrecognized_keys_with_prefix(basemap_prefix));
        }

        for (idx, vector) in self.vectors.iter().enumerate() {
            if vector.path.is_some() == vector.data.is_some() {
                return Err(ConfigFileError::VectorSourceMissing(idx));
            }
        }
        if self.raster_tile_server.is_none()
            && let Some(raster) = self.rasters.first()
        {
            return Err(ConfigFileError::RasterTileServerMissing(raster.path.clone()));
        }

        collect_unrecognized(&mut res, "vectors", &self.vectors);
        collect_unrecognized(&mut res, "images", &self.images);
        collect_unrecognized(&mut res, "videos", &self.videos);
        collect_unrecognized(&mut res, "wms", &self.wms);
        collect_unrecognized(&mut res, "rasters", &self.rasters);
        collect_unrecognized(&mut res, "legends", &self.legends);
        if let Some(split_map) = &self.split_map {
            res.extend(split_map.get_unrecognized_keys_with_prefix("split_map."));
        }

        for key in &res {
            warn!(
                "Ignoring unrecognized configuration key '{key}'. Please check your configuration file for typos."
            );
        }

        if self.has_layers() {
            Ok(res)
        } else {
            Err(ConfigFileError::EmptyMap)
        }
    }

    fn has_layers(&self) -> bool {
        !self.basemaps.is_empty()
            || self.google_maps.is_some()
            || !self.vectors.is_empty()
            || !self.images.is_empty()
            || !self.videos.is_empty()
            || !self.wms.is_empty()
            || !self.rasters.is_empty()
            || self.split_map.is_some()
    }

    /// Add every configured layer and control to a new map, in a fixed order:
    /// basemaps first, then overlays, then controls.
    pub fn build_map(&self) -> GtlCoreResult<Map> {
        let defaults = MapOptions::default();
        let mut map = Map::new(MapOptions {
            center: self.center.unwrap_or(defaults.center),
            zoom: self.zoom.unwrap_or(defaults.zoom),
            height: self.height.clone().unwrap_or(defaults.height),
            scroll_wheel_zoom: self.scroll_wheel_zoom.unwrap_or(defaults.scroll_wheel_zoom),
        });

        for basemap in self.basemaps.iter() {
            map.add_basemap(basemap.name(), basemap.subset())?;
        }
        if let Some(map_type) = &self.google_maps {
            map.add_google_maps(map_type.parse::<GoogleMapType>()?);
        }

        let server = self
            .raster_tile_server
            .as_deref()
            .map(RasterTileServer::new)
            .transpose()?;
        if let Some(server) = &server {
            for raster in &self.rasters {
                map.add_raster(&raster.path, raster.raster_options(), server)?;
            }
        }
        if let Some(split_map) = &self.split_map {
            map.add_split_map(&split_map.left, &split_map.right, server.as_ref())?;
        }

        for vector in &self.vectors {
            let source = match (&vector.path, &vector.data) {
                (Some(path), _) => VectorSource::FilePath(path.clone()),
                (None, Some(data)) => VectorSource::try_from(data.clone())?,
                (None, None) => continue,
            };
            map.add_vector(source, vector.layer_options())?;
        }
        for image in &self.images {
            map.add_image(&image.url, image.bounds, image.opacity())?;
        }
        for video in &self.videos {
            map.add_video(&video.url, video.bounds, video.opacity())?;
        }
        for wms in &self.wms {
            map.add_wms_layer(wms.wms_options())?;
        }

        for legend in &self.legends {
            map.add_legend(legend.legend_options())?;
        }
        if let Some(position) = self.basemap_selector {
            map.add_basemap_selector(position);
        }
        if self.layer_control.unwrap_or_default() {
            map.add_layer_control();
        }

        info!(
            "Built a map with {} layers and {} controls",
            map.layers().len(),
            map.controls().len()
        );
        Ok(map)
    }

    pub fn save_to_file(&self, file_name: &Path) -> ConfigFileResult<()> {
        let yaml = serde_yaml::to_string(&self)?;
        if file_name.as_os_str() == OsStr::new("-") {
            info!("Current map configuration:");
            println!("\n\n{yaml}\n");
            Ok(())
        } else {
            info!(
                "Saving config to {}, use --config to load it",
                file_name.display()
            );
            File::create(file_name)
                .map_err(|e| ConfigFileError::ConfigWriteError(e, file_name.to_path_buf()))?
                .write_all(yaml.as_bytes())
                .map_err(|e| ConfigFileError::ConfigWriteError(e, file_name.to_path_buf()))?;
            Ok(())
        }
    }
}

/// Read config from a file
pub fn read_config<'a, M>(file_name: &Path, env: &'a M) -> ConfigFileResult<Config>
where
    M: VariableMap<'a>,
    M::Value: AsRef<str>,
{
    let mut file =
        File::open(file_name).map_err(|e| ConfigFileError::ConfigLoadError(e, file_name.into()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| ConfigFileError::ConfigLoadError(e, file_name.into()))?;
    parse_config(&contents, env, file_name)
}

/// Parse YAML config text, substituting `${VAR}` references from `env`.
pub fn parse_config<'a, M>(contents: &str, env: &'a M, file_name: &Path) -> ConfigFileResult<Config>
where
    M: VariableMap<'a>,
    M::Value: AsRef<str>,
{
    subst::yaml::from_str(contents, env)
        .map_err(|e| ConfigFileError::ConfigParseError(e, file_name.into()))
}
