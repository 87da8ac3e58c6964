//! Map description file.
//!
//! The YAML file lists the basemaps, overlays and controls of a map. Values may
//! reference environment variables as `${VAR}`. Command line arguments are merged
//! into the same [`Config`] before the map is built.

mod error;
pub use error::{ConfigFileError, ConfigFileResult};

mod file_config;
pub use file_config::{
    ConfigExtras, UnrecognizedKeys, UnrecognizedValues,
    copy_unrecognized_keys_from_config,
};

mod layers;
pub use layers::{
    BasemapConfig, BasemapDetails, LegendConfig, OverlayConfig, RasterConfig, SplitMapConfig,
    VectorConfig, WmsConfig,
};

mod main;
pub use main::{Config, parse_config, read_config};

mod one_many;
pub use one_many::OptOneMany;
