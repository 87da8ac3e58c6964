use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

use gtlparser_core::GtlCoreError;

use crate::config::ConfigFileError;

pub type GtlResult<T> = Result<T, GtlError>;

fn elide_vec(vec: &[String], max_items: usize, max_len: usize) -> String {
    let mut s = String::new();
    for (i, v) in vec.iter().enumerate() {
        if i > max_items {
            let _ = write!(s, " and {} more", vec.len() - i);
            break;
        }
        if i > 0 {
            s.push(' ');
        }
        if v.chars().count() > max_len {
            s.extend(v.chars().take(max_len));
            s.push('…');
        } else {
            s.push_str(v);
        }
    }
    s
}

#[derive(thiserror::Error, Debug)]
pub enum GtlError {
    #[error("The --config and the input files cannot be used together. Please remove unsupported parameters '{}'", elide_vec(.0, 3, 15))]
    ConfigAndInputsError(Vec<String>),

    #[error("Unable to write map to {1}: {0}")]
    OutputWriteError(#[source] io::Error, PathBuf),

    #[error("Unsupported output file {0}. Use a .html or .json file, or - to print JSON to stdout")]
    UnsupportedOutputFormat(PathBuf),

    #[error("Unable to serialize the map document: {0}")]
    MapSerializationError(#[from] serde_json::Error),

    #[error(transparent)]
    ConfigFileError(#[from] ConfigFileError),

    #[error(transparent)]
    CoreError(#[from] GtlCoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_input_lists_are_elided() {
        let inputs: Vec<String> = ["a.geojson", "b.geojson", "c.geojson", "d.geojson", "e.geojson"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let err = GtlError::ConfigAndInputsError(inputs);
        assert_eq!(
            err.to_string(),
            "The --config and the input files cannot be used together. Please remove unsupported parameters 'a.geojson b.geojson c.geojson d.geojson and 1 more'"
        );
    }

    #[test]
    fn long_names_are_cut() {
        let inputs = vec!["a_very_long_file_name.geojson".to_string()];
        assert_eq!(elide_vec(&inputs, 3, 15), "a_very_long_fil…");
    }
}
