//! Land cover legends that ship with the library.

/// A named, ordered label/color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinLegend {
    pub name: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

/// National Land Cover Database classes.
pub const NLCD: BuiltinLegend = BuiltinLegend {
    name: "NLCD",
    entries: &[
        ("11 Open Water", "466b9f"),
        ("12 Perennial Ice/Snow", "d1def8"),
        ("21 Developed, Open Space", "dec5c5"),
        ("22 Developed, Low Intensity", "d99282"),
        ("23 Developed, Medium Intensity", "eb0000"),
        ("24 Developed High Intensity", "ab0000"),
        ("31 Barren Land (Rock/Sand/Clay)", "b3ac9f"),
        ("41 Deciduous Forest", "68ab5f"),
        ("42 Evergreen Forest", "1c5f2c"),
        ("43 Mixed Forest", "b5c58f"),
        ("51 Dwarf Scrub", "af963c"),
        ("52 Shrub/Scrub", "ccb879"),
        ("71 Grassland/Herbaceous", "dfdfc2"),
        ("72 Sedge/Herbaceous", "d1d182"),
        ("73 Lichens", "a3cc51"),
        ("74 Moss", "82ba9e"),
        ("81 Pasture/Hay", "dcd939"),
        ("82 Cultivated Crops", "ab6c28"),
        ("90 Woody Wetlands", "b8d9eb"),
        ("95 Emergent Herbaceous Wetlands", "6c9fb8"),
    ],
};

/// ESA `WorldCover` 10m classes.
pub const ESA_WORLD_COVER: BuiltinLegend = BuiltinLegend {
    name: "ESA_WorldCover",
    entries: &[
        ("10 Trees", "006400"),
        ("20 Shrubland", "ffbb22"),
        ("30 Grassland", "ffff4c"),
        ("40 Cropland", "f096ff"),
        ("50 Built-up", "fa0000"),
        ("60 Barren / sparse vegetation", "b4b4b4"),
        ("70 Snow and ice", "f0f0f0"),
        ("80 Open water", "0064c8"),
        ("90 Herbaceous wetland", "0096a0"),
        ("95 Mangroves", "00cf75"),
        ("100 Moss and lichen", "fae6a0"),
    ],
};

/// Esri 10m land cover classes.
pub const ESRI_LAND_COVER: BuiltinLegend = BuiltinLegend {
    name: "ESRI_LandCover",
    entries: &[
        ("Water", "#1A5BAB"),
        ("Trees", "#358221"),
        ("Flooded Vegetation", "#87D19E"),
        ("Crops", "#FFDB5C"),
        ("Built Area", "#ED022A"),
        ("Bare Ground", "#EDE9E4"),
        ("Snow/Ice", "#F2FAFF"),
        ("Clouds", "#C8C8C8"),
        ("Rangeland", "#C6AD8D"),
    ],
};

/// Google Dynamic World classes.
pub const DYNAMIC_WORLD: BuiltinLegend = BuiltinLegend {
    name: "Dynamic_World",
    entries: &[
        ("Water", "#419BDF"),
        ("Trees", "#397D49"),
        ("Grass", "#88B053"),
        ("Flooded Vegetation", "#7A87C6"),
        ("Crops", "#E49635"),
        ("Shrub & Scrub", "#DFC35A"),
        ("Built Area", "#C4281C"),
        ("Bare Ground", "#A59B8F"),
        ("Snow & Ice", "#B39FE1"),
    ],
};

pub const BUILTIN_LEGENDS: &[BuiltinLegend] =
    &[NLCD, ESA_WORLD_COVER, ESRI_LAND_COVER, DYNAMIC_WORLD];

/// Look up a builtin legend, ignoring case.
#[must_use]
pub fn find(name: &str) -> Option<&'static BuiltinLegend> {
    BUILTIN_LEGENDS
        .iter()
        .find(|legend| legend.name.eq_ignore_ascii_case(name))
}

/// Comma separated names, for error messages.
#[must_use]
pub fn names() -> String {
    BUILTIN_LEGENDS
        .iter()
        .map(|legend| legend.name)
        .collect::<Vec<_>>()
        .join(", ")
}
