/// Errors that can occur while building a legend.
#[non_exhaustive]
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LegendError {
    #[error("Unknown builtin legend {0}. Available legends: {1}")]
    UnknownBuiltinLegend(String, String),

    #[error("A legend needs one color per label, got {labels} labels and {colors} colors")]
    LegendLengthMismatch { labels: usize, colors: usize },

    #[error("Unknown position {0}. Use one of topleft, topright, bottomleft, bottomright")]
    UnknownPosition(String),

    #[error("Unknown legend shape {0}. Use one of rectangle, circle, line")]
    UnknownShape(String),
}

/// A convenience [`Result`] for legend building.
pub type LegendResult<T> = Result<T, LegendError>;
