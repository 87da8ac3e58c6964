use std::path::PathBuf;

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use log::warn;

use crate::GtlError::ConfigAndInputsError;
use crate::GtlResult;
use crate::config::{BasemapConfig, Config, LegendConfig, OptOneMany, VectorConfig};

/// Defines the styles used for the CLI help output.
const HELP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Blue.on_default().bold())
    .usage(AnsiColor::Blue.on_default().bold())
    .literal(AnsiColor::White.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug, PartialEq, Default)]
#[command(
    about,
    version,
    after_help = "Use RUST_LOG environment variable to control logging level, e.g. RUST_LOG=debug or RUST_LOG=gtlparser=debug. Use GTLPARSER_FORMAT to pick the log format: json, full, compact, bare or pretty.",
    styles = HELP_STYLES
)]
pub struct Args {
    #[command(flatten)]
    pub meta: MetaArgs,
    #[command(flatten)]
    pub map: MapArgs,
}

// None of these params will be transferred to the config
#[derive(Parser, Debug, Clone, PartialEq, Default)]
#[command(about, version)]
pub struct MetaArgs {
    /// Path to a YAML map description. If set, no input files are allowed.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Save the resulting config to a file or use "-" to print to stdout.
    #[arg(long)]
    pub save_config: Option<PathBuf>,
    /// Where to write the map: a .html page, a .json map document, or "-" for JSON on stdout.
    #[arg(short, long, default_value = "map.html")]
    pub output: PathBuf,
    /// Vector files to add to the map, e.g. `cities.geojson`
    pub inputs: Vec<String>,
}

#[derive(Parser, Debug, Clone, PartialEq, Default)]
#[command()]
pub struct MapArgs {
    /// Add a catalog basemap, e.g. `OpenTopoMap` or `Esri.WorldImagery`. Can be specified multiple times.
    #[arg(short, long)]
    pub basemap: Vec<String>,
    /// Add Google Maps tiles: ROADMAP, SATELLITE, HYBRID or TERRAIN.
    #[arg(long)]
    pub google_maps: Option<String>,
    /// Add a builtin legend, e.g. `NLCD` or `ESA_WorldCover`.
    #[arg(long)]
    pub legend: Option<String>,
    /// Add a control to toggle layers on and off.
    #[arg(long)]
    pub layer_control: bool,
    /// Initial map center as `LAT,LON`.
    #[arg(long, value_parser = parse_center, allow_hyphen_values = true)]
    pub center: Option<[f64; 2]>,
    /// Initial zoom level.
    #[arg(long)]
    pub zoom: Option<u8>,
}

fn parse_center(value: &str) -> Result<[f64; 2], String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("Expected LAT,LON but got '{value}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid coordinate '{v}': {e}"))
    };
    let center = [parse(lat)?, parse(lon)?];
    if (-90.0..=90.0).contains(&center[0]) && (-180.0..=180.0).contains(&center[1]) {
        Ok(center)
    } else {
        Err(format!("Center {value} is outside of the world"))
    }
}

impl Args {
    pub fn merge_into_config(self, config: &mut Config) -> GtlResult<()> {
        if self.meta.config.is_some() && !self.meta.inputs.is_empty() {
            return Err(ConfigAndInputsError(self.meta.inputs));
        }

        config
            .vectors
            .extend(self.meta.inputs.into_iter().map(VectorConfig::from_path));

        if !self.map.basemap.is_empty() {
            if !config.basemaps.is_empty() {
                warn!("--basemap replaces the basemaps of the config file");
            }
            config.basemaps = OptOneMany::new(self.map.basemap.into_iter().map(BasemapConfig::Name));
        }
        if self.map.google_maps.is_some() {
            config.google_maps = self.map.google_maps;
        }
        if let Some(builtin) = self.map.legend {
            config.legends.push(LegendConfig::builtin(builtin));
        }
        if self.map.layer_control {
            config.layer_control = Some(true);
        }
        if self.map.center.is_some() {
            config.center = self.map.center;
        }
        if self.map.zoom.is_some() {
            config.zoom = self.map.zoom;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_yaml_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> GtlResult<(Config, MetaArgs)> {
        let args = Args::parse_from(args);
        let meta = args.meta.clone();
        let mut config = Config::default();
        args.merge_into_config(&mut config)?;
        Ok((config, meta))
    }

    #[test]
    fn cli_no_args() {
        let (config, meta) = parse(&["gtlparser"]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(meta.output, PathBuf::from("map.html"));
        assert_eq!(meta.config, None);
    }

    #[test]
    fn cli_with_config() {
        let (config, meta) = parse(&["gtlparser", "-c", "map.yaml", "--save-config", "-"]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(meta.config, Some(PathBuf::from("map.yaml")));
        assert_eq!(meta.save_config, Some(PathBuf::from("-")));

        let err = parse(&["gtlparser", "-c", "map.yaml", "cities.geojson"]).unwrap_err();
        assert!(matches!(err, ConfigAndInputsError(v) if v == ["cities.geojson"]));
    }

    #[test]
    fn cli_map_args() {
        let (config, meta) = parse(&[
            "gtlparser",
            "cities.geojson",
            "rivers.json",
            "-b",
            "OpenTopoMap",
            "--basemap",
            "Esri.WorldImagery",
            "--google-maps",
            "satellite",
            "--legend",
            "NLCD",
            "--layer-control",
            "--center",
            "-1.29,36.82",
            "--zoom",
            "6",
            "-o",
            "nairobi.json",
        ])
        .unwrap();
        assert_eq!(meta.output, PathBuf::from("nairobi.json"));
        assert_yaml_snapshot!(config, @r"
        center:
          - -1.29
          - 36.82
        zoom: 6
        basemaps:
          - OpenTopoMap
          - Esri.WorldImagery
        google_maps: satellite
        layer_control: true
        vectors:
          - path: cities.geojson
          - path: rivers.json
        legends:
          - builtin: NLCD
        ");
    }

    #[test]
    fn cli_overrides_config_file() {
        let mut config = Config {
            zoom: Some(3),
            basemaps: OptOneMany::One(BasemapConfig::Name("CartoDB".to_string())),
            ..Default::default()
        };
        let args = Args::parse_from(["gtlparser", "-c", "map.yaml", "-b", "USGS", "--zoom", "8"]);
        args.merge_into_config(&mut config).unwrap();
        assert_eq!(config.zoom, Some(8));
        assert_eq!(
            config.basemaps,
            OptOneMany::One(BasemapConfig::Name("USGS".to_string()))
        );
    }

    #[test]
    fn center_parsing() {
        assert_eq!(parse_center("52.5, 13.4"), Ok([52.5, 13.4]));
        assert!(parse_center("52.5").is_err());
        assert!(parse_center("north,east").is_err());
        assert_eq!(
            parse_center("95,0"),
            Err("Center 95,0 is outside of the world".to_string())
        );
    }
}
