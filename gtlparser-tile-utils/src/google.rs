use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TileUtilsError;

/// Attribution shown with every Google Maps layer.
pub const GOOGLE_ATTRIBUTION: &str = "Google";

/// The public Google Maps tile flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GoogleMapType {
    /// Street map (`lyrs=m`).
    #[default]
    Roadmap,
    /// Imagery only (`lyrs=s`).
    Satellite,
    /// Imagery with labels (`lyrs=y`).
    Hybrid,
    /// Shaded relief with labels (`lyrs=p`).
    Terrain,
}

impl GoogleMapType {
    /// The `lyrs` code Google uses for this map type.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Roadmap => "m",
            Self::Satellite => "s",
            Self::Hybrid => "y",
            Self::Terrain => "p",
        }
    }

    /// XYZ URL template for this map type.
    #[must_use]
    pub fn url_template(self) -> String {
        format!(
            "https://mt1.google.com/vt/lyrs={}&x={{x}}&y={{y}}&z={{z}}",
            self.code()
        )
    }
}

impl FromStr for GoogleMapType {
    type Err = TileUtilsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ROADMAP" => Ok(Self::Roadmap),
            "SATELLITE" => Ok(Self::Satellite),
            "HYBRID" => Ok(Self::Hybrid),
            "TERRAIN" => Ok(Self::Terrain),
            _ => Err(TileUtilsError::UnknownGoogleMapType(s.to_string())),
        }
    }
}

impl Display for GoogleMapType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Roadmap => "ROADMAP",
            Self::Satellite => "SATELLITE",
            Self::Hybrid => "HYBRID",
            Self::Terrain => "TERRAIN",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("ROADMAP", "m")]
    #[case("satellite", "s")]
    #[case("Hybrid", "y")]
    #[case("terrain", "p")]
    fn parses_map_types(#[case] name: &str, #[case] code: &str) {
        let map_type: GoogleMapType = name.parse().unwrap();
        assert_eq!(map_type.code(), code);
        assert_eq!(
            map_type.url_template(),
            format!("https://mt1.google.com/vt/lyrs={code}&x={{x}}&y={{y}}&z={{z}}")
        );
    }

    #[test]
    fn rejects_unknown_map_type() {
        assert_eq!(
            "STREETVIEW".parse::<GoogleMapType>(),
            Err(TileUtilsError::UnknownGoogleMapType("STREETVIEW".to_string()))
        );
    }

    #[test]
    fn display_round_trips() {
        for map_type in [
            GoogleMapType::Roadmap,
            GoogleMapType::Satellite,
            GoogleMapType::Hybrid,
            GoogleMapType::Terrain,
        ] {
            assert_eq!(map_type.to_string().parse::<GoogleMapType>(), Ok(map_type));
        }
    }
}
