use std::path::PathBuf;

pub type ConfigFileResult<T> = Result<T, ConfigFileError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigFileError {
    #[error("Unable to load config file {1}: {0}")]
    ConfigLoadError(#[source] std::io::Error, PathBuf),

    #[error("Unable to parse config file {1}: {0}")]
    ConfigParseError(#[source] subst::yaml::Error, PathBuf),

    #[error("Unable to write config file {1}: {0}")]
    ConfigWriteError(#[source] std::io::Error, PathBuf),

    #[error("Unable to serialize config: {0}")]
    ConfigSerializeError(#[from] serde_yaml::Error),

    #[error(
        "Nothing to show on the map. Pass vector files on the command line, a basemap with --basemap, or a config file."
    )]
    EmptyMap,

    #[error("Vector layer vectors[{0}] must set exactly one of 'path' or 'data'")]
    VectorSourceMissing(usize),

    #[error(
        "Raster layers need a tile server. Set 'raster_tile_server' to the endpoint serving {0}"
    )]
    RasterTileServerMissing(PathBuf),
}
