use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Coordinate reference system of a feature table.
#[derive(Debug, Clone, PartialEq, Eq, Default, SerializeDisplay, DeserializeFromStr)]
pub enum Crs {
    /// Longitude/latitude degrees, `EPSG:4326`.
    #[default]
    Wgs84,
    /// Spherical Web Mercator meters, `EPSG:3857`.
    WebMercator,
    /// Any other system, kept verbatim.
    Other(String),
}

impl Crs {
    /// Parse the name found in a legacy `GeoJSON` `crs` member or in user input.
    ///
    /// Accepts `EPSG:4326`, `CRS84`, `urn:ogc:def:crs:OGC:1.3:CRS84`,
    /// `urn:ogc:def:crs:EPSG::3857` and the older Web Mercator aliases.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        let upper = name.trim().to_ascii_uppercase();
        let code = upper.rsplit(':').next().unwrap_or_default();
        match code {
            "4326" | "CRS84" => Self::Wgs84,
            "3857" | "900913" | "3785" | "102100" | "102113" => Self::WebMercator,
            _ => Self::Other(name.trim().to_string()),
        }
    }
}

impl FromStr for Crs {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wgs84 => f.write_str("EPSG:4326"),
            Self::WebMercator => f.write_str("EPSG:3857"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("EPSG:4326", Crs::Wgs84)]
    #[case("epsg:4326", Crs::Wgs84)]
    #[case("urn:ogc:def:crs:OGC:1.3:CRS84", Crs::Wgs84)]
    #[case("urn:ogc:def:crs:EPSG::4326", Crs::Wgs84)]
    #[case("EPSG:3857", Crs::WebMercator)]
    #[case("urn:ogc:def:crs:EPSG::3857", Crs::WebMercator)]
    #[case("EPSG:900913", Crs::WebMercator)]
    #[case("ESRI:102100", Crs::WebMercator)]
    #[case("EPSG:32633", Crs::Other("EPSG:32633".to_string()))]
    fn parses_names(#[case] name: &str, #[case] expected: Crs) {
        assert_eq!(Crs::parse(name), expected);
    }

    #[test]
    fn displays_epsg_codes() {
        assert_eq!(Crs::Wgs84.to_string(), "EPSG:4326");
        assert_eq!(Crs::WebMercator.to_string(), "EPSG:3857");
        assert_eq!(Crs::parse(" EPSG:2056 ").to_string(), "EPSG:2056");
    }
}
