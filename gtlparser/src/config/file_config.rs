use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

pub type UnrecognizedValues = HashMap<String, serde_yaml::Value>;
pub type UnrecognizedKeys = HashSet<String>;

/// Implemented by every nested config section.
pub trait ConfigExtras: Clone + Debug + PartialEq {
    /// Keys that were present in the file but are not part of the section.
    fn get_unrecognized_keys(&self) -> UnrecognizedKeys;

    fn get_unrecognized_keys_with_prefix(&self, prefix: &str) -> UnrecognizedKeys {
        self.get_unrecognized_keys()
            .into_iter()
            .map(|key| format!("{prefix}{key}"))
            .collect()
    }
}

pub fn copy_unrecognized_keys_from_config(
    result: &mut UnrecognizedKeys,
    prefix: &str,
    unrecognized: &UnrecognizedValues,
) {
    result.extend(unrecognized.keys().map(|k| format!("{prefix}{k}")));
}
