//! Catalog of well-known XYZ basemaps.
//!
//! Basemaps are either stand-alone providers (`OpenTopoMap`) or members of a
//! provider group (`Esri.WorldImagery`). A group name alone resolves to one of
//! its members, chosen by an explicit subset or defaulting to the first one.

use serde::Serialize;

const OSM_ATTRIBUTION: &str = "(C) OpenStreetMap contributors";
const ESRI_ATTRIBUTION: &str = "Tiles (C) Esri";
const CARTO_ATTRIBUTION: &str = "(C) OpenStreetMap contributors (C) CARTO";
const USGS_ATTRIBUTION: &str = "Tiles courtesy of the U.S. Geological Survey";

/// A single XYZ tile provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileProvider {
    /// Provider name, unique within its group.
    pub name: &'static str,
    /// URL template with `{z}`, `{x}` and `{y}` placeholders.
    pub url: &'static str,
    /// Attribution text to display with the tiles.
    pub attribution: &'static str,
    /// Highest zoom level served by the provider.
    pub max_zoom: u8,
}

/// A named family of providers, e.g. all `Esri` basemaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderGroup {
    /// Group name.
    pub name: &'static str,
    /// Members in catalog order. The first member is the group default.
    pub providers: &'static [TileProvider],
}

impl ProviderGroup {
    /// Find a member by name, ignoring case and separators.
    #[must_use]
    pub fn get(&self, subset: &str) -> Option<&'static TileProvider> {
        let key = normalize_key(subset);
        self.providers.iter().find(|p| normalize_key(p.name) == key)
    }
}

const fn provider(
    name: &'static str,
    url: &'static str,
    attribution: &'static str,
    max_zoom: u8,
) -> TileProvider {
    TileProvider {
        name,
        url,
        attribution,
        max_zoom,
    }
}

/// Every provider group known to the catalog.
pub static PROVIDER_GROUPS: &[ProviderGroup] = &[
    ProviderGroup {
        name: "OpenStreetMap",
        providers: &[
            provider(
                "Mapnik",
                "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
                OSM_ATTRIBUTION,
                19,
            ),
            provider(
                "DE",
                "https://tile.openstreetmap.de/{z}/{x}/{y}.png",
                OSM_ATTRIBUTION,
                18,
            ),
            provider(
                "France",
                "https://a.tile.openstreetmap.fr/osmfr/{z}/{x}/{y}.png",
                OSM_ATTRIBUTION,
                20,
            ),
            provider(
                "HOT",
                "https://a.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png",
                OSM_ATTRIBUTION,
                19,
            ),
        ],
    },
    ProviderGroup {
        name: "Esri",
        providers: &[
            provider(
                "WorldStreetMap",
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Street_Map/MapServer/tile/{z}/{y}/{x}",
                ESRI_ATTRIBUTION,
                18,
            ),
            provider(
                "WorldTopoMap",
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Topo_Map/MapServer/tile/{z}/{y}/{x}",
                ESRI_ATTRIBUTION,
                18,
            ),
            provider(
                "WorldImagery",
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
                ESRI_ATTRIBUTION,
                18,
            ),
            provider(
                "WorldTerrain",
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Terrain_Base/MapServer/tile/{z}/{y}/{x}",
                ESRI_ATTRIBUTION,
                13,
            ),
            provider(
                "WorldShadedRelief",
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Shaded_Relief/MapServer/tile/{z}/{y}/{x}",
                ESRI_ATTRIBUTION,
                13,
            ),
            provider(
                "WorldPhysical",
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Physical_Map/MapServer/tile/{z}/{y}/{x}",
                ESRI_ATTRIBUTION,
                8,
            ),
            provider(
                "OceanBasemap",
                "https://server.arcgisonline.com/ArcGIS/rest/services/Ocean/World_Ocean_Base/MapServer/tile/{z}/{y}/{x}",
                ESRI_ATTRIBUTION,
                13,
            ),
            provider(
                "NatGeoWorldMap",
                "https://server.arcgisonline.com/ArcGIS/rest/services/NatGeo_World_Map/MapServer/tile/{z}/{y}/{x}",
                ESRI_ATTRIBUTION,
                16,
            ),
            provider(
                "WorldGrayCanvas",
                "https://server.arcgisonline.com/ArcGIS/rest/services/Canvas/World_Light_Gray_Base/MapServer/tile/{z}/{y}/{x}",
                ESRI_ATTRIBUTION,
                16,
            ),
        ],
    },
    ProviderGroup {
        name: "CartoDB",
        providers: &[
            provider(
                "Positron",
                "https://a.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png",
                CARTO_ATTRIBUTION,
                20,
            ),
            provider(
                "PositronNoLabels",
                "https://a.basemaps.cartocdn.com/light_nolabels/{z}/{x}/{y}.png",
                CARTO_ATTRIBUTION,
                20,
            ),
            provider(
                "DarkMatter",
                "https://a.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}.png",
                CARTO_ATTRIBUTION,
                20,
            ),
            provider(
                "DarkMatterNoLabels",
                "https://a.basemaps.cartocdn.com/dark_nolabels/{z}/{x}/{y}.png",
                CARTO_ATTRIBUTION,
                20,
            ),
            provider(
                "Voyager",
                "https://a.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}.png",
                CARTO_ATTRIBUTION,
                20,
            ),
        ],
    },
    ProviderGroup {
        name: "USGS",
        providers: &[
            provider(
                "USTopo",
                "https://basemap.nationalmap.gov/arcgis/rest/services/USGSTopo/MapServer/tile/{z}/{y}/{x}",
                USGS_ATTRIBUTION,
                20,
            ),
            provider(
                "USImagery",
                "https://basemap.nationalmap.gov/arcgis/rest/services/USGSImageryOnly/MapServer/tile/{z}/{y}/{x}",
                USGS_ATTRIBUTION,
                20,
            ),
            provider(
                "USImageryTopo",
                "https://basemap.nationalmap.gov/arcgis/rest/services/USGSImageryTopo/MapServer/tile/{z}/{y}/{x}",
                USGS_ATTRIBUTION,
                20,
            ),
        ],
    },
];

/// Providers that do not belong to any group.
pub static STANDALONE_PROVIDERS: &[TileProvider] = &[provider(
    "OpenTopoMap",
    "https://a.tile.opentopomap.org/{z}/{x}/{y}.png",
    "Map data: (C) OpenStreetMap contributors, SRTM | Map style: (C) OpenTopoMap (CC-BY-SA)",
    17,
)];

/// Errors that can occur while resolving a basemap name.
#[non_exhaustive]
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BasemapError {
    /// The name matches neither a provider nor a group.
    #[error("Basemap '{0}' not found in the basemap catalog")]
    UnknownBasemap(String),

    /// The group exists but has no member with this name.
    #[error("Basemap group '{group}' has no member '{subset}'")]
    UnknownSubset {
        /// Group that was found.
        group: String,
        /// Member that was requested.
        subset: String,
    },

    /// A subset was requested for a basemap that is not a group.
    #[error("Basemap '{basemap}' is a single provider, it has no member '{subset}'")]
    NotAGroup {
        /// Resolved provider name.
        basemap: String,
        /// Member that was requested.
        subset: String,
    },
}

/// A basemap selected from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedBasemap {
    /// Fully qualified name, e.g. `Esri.WorldImagery`. Used as the layer name.
    pub name: String,
    /// The selected provider.
    pub provider: TileProvider,
}

impl ResolvedBasemap {
    fn grouped(group: &ProviderGroup, provider: &TileProvider) -> Self {
        Self {
            name: format!("{}.{}", group.name, provider.name),
            provider: *provider,
        }
    }

    fn standalone(provider: &TileProvider) -> Self {
        Self {
            name: provider.name.to_string(),
            provider: *provider,
        }
    }
}

/// Lowercase the name and drop the separators people tend to vary on,
/// so that `Esri.WorldImagery`, `esri_worldimagery` and `cartodbpositron` all match.
fn normalize_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '.' | '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn find_provider(key: &str) -> Option<ResolvedBasemap> {
    for group in PROVIDER_GROUPS {
        for provider in group.providers {
            if normalize_key(&format!("{}{}", group.name, provider.name)) == key {
                return Some(ResolvedBasemap::grouped(group, provider));
            }
        }
    }
    STANDALONE_PROVIDERS
        .iter()
        .find(|p| normalize_key(p.name) == key)
        .map(ResolvedBasemap::standalone)
}

/// Resolve a basemap by name, with an optional group member.
///
/// A group name without a subset resolves to the first member of the group.
pub fn resolve(name: &str, subset: Option<&str>) -> Result<ResolvedBasemap, BasemapError> {
    let key = normalize_key(name);

    if let Some(group) = PROVIDER_GROUPS.iter().find(|g| normalize_key(g.name) == key) {
        let provider = match subset {
            Some(subset) => group.get(subset).ok_or_else(|| BasemapError::UnknownSubset {
                group: group.name.to_string(),
                subset: subset.to_string(),
            })?,
            None => group
                .providers
                .first()
                .ok_or_else(|| BasemapError::UnknownBasemap(name.to_string()))?,
        };
        return Ok(ResolvedBasemap::grouped(group, provider));
    }

    let resolved =
        find_provider(&key).ok_or_else(|| BasemapError::UnknownBasemap(name.to_string()))?;
    if let Some(subset) = subset {
        return Err(BasemapError::NotAGroup {
            basemap: resolved.name,
            subset: subset.to_string(),
        });
    }
    Ok(resolved)
}

/// Every fully qualified basemap name accepted by [`resolve`], in catalog order.
#[must_use]
pub fn names() -> Vec<String> {
    PROVIDER_GROUPS
        .iter()
        .flat_map(|g| g.providers.iter().map(|p| format!("{}.{}", g.name, p.name)))
        .chain(STANDALONE_PROVIDERS.iter().map(|p| p.name.to_string()))
        .collect()
}
