use serde::Serialize;

use super::selector::BasemapSelector;
use crate::legend::{Legend, Position};

/// A control widget drawn on top of the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Control {
    /// Toggles layer visibility.
    Layers { position: Position },
    Legend(Legend),
    /// Swipe between two tile layers, given as indices into the map layers.
    SplitMap { left: usize, right: usize },
    BasemapSelector(BasemapSelector),
}
