//! Map legends.

mod builtin;
mod error;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use builtin::{BUILTIN_LEGENDS, BuiltinLegend};
pub use error::{LegendError, LegendResult};
use log::debug;
use serde::Serialize;
use serde_with::{DeserializeFromStr, SerializeDisplay};

const DEFAULT_LABELS: [&str; 5] = ["One", "Two", "Three", "Four", "etc"];
const DEFAULT_COLORS: [&str; 5] = ["#8DD3C7", "#FFFFB3", "#BEBADA", "#FB8072", "#80B1D3"];

/// Title used when the caller does not provide one.
pub const DEFAULT_TITLE: &str = "Legend";

/// One row of a legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    /// Always starts with `#`.
    pub color: String,
}

impl LegendEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, color: &str) -> Self {
        Self {
            label: label.into(),
            color: normalize_color(color),
        }
    }
}

/// Legend rows in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct LegendTable(Vec<LegendEntry>);

impl LegendTable {
    /// Build the rows of a legend.
    ///
    /// A builtin legend takes precedence over `labels` and `colors`.
    /// When only colors are given, each label is its color.
    /// When nothing is given, a five-class placeholder legend is returned.
    pub fn build(
        labels: Option<Vec<String>>,
        colors: Option<Vec<String>>,
        builtin: Option<&str>,
    ) -> LegendResult<Self> {
        if let Some(name) = builtin {
            let legend = builtin::find(name).ok_or_else(|| {
                LegendError::UnknownBuiltinLegend(name.to_string(), builtin::names())
            })?;
            debug!("Using builtin legend {}", legend.name);
            return Ok(Self::from(legend));
        }

        match (labels, colors) {
            (Some(labels), Some(colors)) => {
                if labels.len() != colors.len() {
                    return Err(LegendError::LegendLengthMismatch {
                        labels: labels.len(),
                        colors: colors.len(),
                    });
                }
                Ok(Self(
                    labels
                        .into_iter()
                        .zip(colors)
                        .map(|(label, color)| LegendEntry::new(label, &color))
                        .collect(),
                ))
            }
            (None, Some(colors)) => Ok(Self(
                colors
                    .iter()
                    .map(|color| {
                        let color = normalize_color(color);
                        LegendEntry {
                            label: color.clone(),
                            color,
                        }
                    })
                    .collect(),
            )),
            (Some(labels), None) => Err(LegendError::LegendLengthMismatch {
                labels: labels.len(),
                colors: 0,
            }),
            (None, None) => Ok(Self(
                DEFAULT_LABELS
                    .iter()
                    .zip(DEFAULT_COLORS)
                    .map(|(label, color)| LegendEntry::new(*label, color))
                    .collect(),
            )),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[LegendEntry] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&BuiltinLegend> for LegendTable {
    fn from(legend: &BuiltinLegend) -> Self {
        Self(
            legend
                .entries
                .iter()
                .map(|(label, color)| LegendEntry::new(*label, color))
                .collect(),
        )
    }
}

/// Prefix a `#` unless already present. Nothing else is checked.
#[must_use]
pub fn normalize_color(color: &str) -> String {
    if color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{color}")
    }
}

/// Corner of the map a control is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl FromStr for Position {
    type Err = LegendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "topleft" => Ok(Self::TopLeft),
            "topright" => Ok(Self::TopRight),
            "bottomleft" => Ok(Self::BottomLeft),
            "bottomright" => Ok(Self::BottomRight),
            _ => Err(LegendError::UnknownPosition(s.to_string())),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::TopLeft => "topleft",
            Self::TopRight => "topright",
            Self::BottomLeft => "bottomleft",
            Self::BottomRight => "bottomright",
        })
    }
}

/// Shape of the color swatch next to each legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, SerializeDisplay, DeserializeFromStr)]
pub enum LegendShape {
    #[default]
    Rectangle,
    Circle,
    Line,
}

/// CSS box of a legend swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub width_px: u8,
    pub height_px: u8,
    pub border_radius: &'static str,
}

impl LegendShape {
    /// Every entry of a legend is drawn with the same swatch.
    #[must_use]
    pub fn swatch(self) -> Swatch {
        match self {
            Self::Rectangle => Swatch {
                width_px: 30,
                height_px: 16,
                border_radius: "0",
            },
            Self::Circle => Swatch {
                width_px: 16,
                height_px: 16,
                border_radius: "50%",
            },
            Self::Line => Swatch {
                width_px: 30,
                height_px: 3,
                border_radius: "0",
            },
        }
    }
}

impl FromStr for LegendShape {
    type Err = LegendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rectangle" => Ok(Self::Rectangle),
            "circle" => Ok(Self::Circle),
            "line" => Ok(Self::Line),
            _ => Err(LegendError::UnknownShape(s.to_string())),
        }
    }
}

impl Display for LegendShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Line => "line",
        })
    }
}

/// What a caller asks for when adding a legend to a map.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendOptions {
    pub title: Option<String>,
    pub labels: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub builtin: Option<String>,
    pub position: Position,
    pub shape: LegendShape,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            title: None,
            labels: None,
            colors: None,
            builtin: None,
            position: Position::BottomRight,
            shape: LegendShape::default(),
        }
    }
}

/// A legend control, ready to be placed on a map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    pub entries: LegendTable,
    pub position: Position,
    pub shape: LegendShape,
}

impl TryFrom<LegendOptions> for Legend {
    type Error = LegendError;

    fn try_from(options: LegendOptions) -> Result<Self, Self::Error> {
        let entries =
            LegendTable::build(options.labels, options.colors, options.builtin.as_deref())?;
        Ok(Self {
            title: options.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            entries,
            position: options.position,
            shape: options.shape,
        })
    }
}
