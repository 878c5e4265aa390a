//! Configuration for style transformation
//!
//! The defaults reproduce the circuit palette exactly. A TOML file may override
//! any section; a section that is present replaces only the keys it names.

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use super::classifier::{PlaceRole, RoadTier};
use super::error::{ConfigError, ConfigResult};
use crate::models::ZoomStops;

/// Name written into every derived document unless configured otherwise
pub const DERIVED_STYLE_NAME: &str = "Circuit Style Map";

/// Configuration for a transformation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TransformConfig {
    /// Display name of the derived style
    pub style_name: String,

    /// Colors, widths and zoom ramps applied per category
    pub palette: Palette,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            style_name: DERIVED_STYLE_NAME.to_string(),
            palette: Palette::default(),
        }
    }
}

impl TransformConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> TransformConfigBuilder {
        TransformConfigBuilder::default()
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: TransformConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.style_name.trim().is_empty() {
            return Err(ConfigError::EmptyStyleName);
        }
        self.palette.validate()
    }
}

/// Builder for TransformConfig
#[derive(Debug, Default)]
pub struct TransformConfigBuilder {
    config: TransformConfig,
}

impl TransformConfigBuilder {
    /// Set the derived style name
    pub fn style_name(mut self, name: impl Into<String>) -> Self {
        self.config.style_name = name.into();
        self
    }

    /// Replace the whole palette
    pub fn palette(mut self, palette: Palette) -> Self {
        self.config.palette = palette;
        self
    }

    /// Build the configuration
    pub fn build(self) -> TransformConfig {
        self.config
    }
}

/// Every literal the category rules write
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Palette {
    pub background: BackgroundPalette,
    pub land: LandPalette,
    pub water: WaterPalette,
    pub roads: RoadPalette,
    pub road_labels: RoadLabelPalette,
    pub places: PlacePalette,
    pub buildings: BuildingPalette,
    pub boundaries: BoundaryPalette,
}

impl Palette {
    pub fn validate(&self) -> ConfigResult<()> {
        let colors = [
            ("background.color", &self.background.color),
            ("land.fill-color", &self.land.fill_color),
            ("water.fill-color", &self.water.fill_color),
            ("water.line-color", &self.water.line_color),
            ("roads.casing-color", &self.roads.casing_color),
            ("roads.fill-color.motorway", &self.roads.fill_color.motorway),
            ("roads.fill-color.major", &self.roads.fill_color.major),
            ("roads.fill-color.minor", &self.roads.fill_color.minor),
            ("road-labels.halo-color", &self.road_labels.halo_color),
            ("road-labels.text-color", &self.road_labels.text_color),
            ("places.halo-color", &self.places.halo_color),
            ("places.city.text-color", &self.places.city.text_color),
            ("places.other.text-color", &self.places.other.text_color),
            ("buildings.fill-color", &self.buildings.fill_color),
            ("buildings.outline-color", &self.buildings.outline_color),
            ("boundaries.line-color", &self.boundaries.line_color),
        ];
        if let Some((name, _)) = colors.iter().find(|(_, color)| color.trim().is_empty()) {
            return Err(ConfigError::EmptyColor(*name));
        }

        let scalars = [
            ("land.fill-opacity", self.land.fill_opacity),
            ("road-labels.halo-width", self.road_labels.halo_width),
            ("places.city.halo-width", self.places.city.halo_width),
            ("places.other.halo-width", self.places.other.halo_width),
        ];
        if let Some((name, _)) = scalars.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite(*name));
        }

        let ramps = [
            ("roads.casing-width", &self.roads.casing_width),
            ("roads.fill-width", &self.roads.fill_width),
        ];
        for (name, ramps) in ramps {
            let finite = [&ramps.motorway, &ramps.major, &ramps.minor]
                .iter()
                .all(|ramp| ramp.stops().iter().all(|(_, width)| width.is_finite()));
            if !finite {
                return Err(ConfigError::NonFinite(name));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BackgroundPalette {
    pub color: String,
}

impl Default for BackgroundPalette {
    fn default() -> Self {
        Self {
            color: "#f2f2f2".to_string(),
        }
    }
}

/// Land colors; only written over values the layer already has
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LandPalette {
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl Default for LandPalette {
    fn default() -> Self {
        Self {
            fill_color: "#e0e0e0".to_string(),
            fill_opacity: 0.9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WaterPalette {
    pub fill_color: String,
    pub line_color: String,
}

impl Default for WaterPalette {
    fn default() -> Self {
        Self {
            fill_color: "#dcdcdc".to_string(),
            line_color: "#cccccc".to_string(),
        }
    }
}

/// One value per road tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerTier<T> {
    pub motorway: T,
    pub major: T,
    pub minor: T,
}

impl<T> PerTier<T> {
    pub fn for_tier(&self, tier: RoadTier) -> &T {
        match tier {
            RoadTier::Motorway => &self.motorway,
            RoadTier::Major => &self.major,
            RoadTier::Minor => &self.minor,
        }
    }
}

/// Tier table as written in a config file; absent tiers keep their default
#[derive(Deserialize)]
struct PartialTiers<T> {
    motorway: Option<T>,
    major: Option<T>,
    minor: Option<T>,
}

impl<T> PartialTiers<T> {
    fn over(self, defaults: PerTier<T>) -> PerTier<T> {
        PerTier {
            motorway: self.motorway.unwrap_or(defaults.motorway),
            major: self.major.unwrap_or(defaults.major),
            minor: self.minor.unwrap_or(defaults.minor),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RoadPalette {
    pub casing_color: String,
    #[serde(deserialize_with = "partial_casing_width")]
    pub casing_width: PerTier<ZoomStops<f64>>,
    #[serde(deserialize_with = "partial_fill_color")]
    pub fill_color: PerTier<String>,
    #[serde(deserialize_with = "partial_fill_width")]
    pub fill_width: PerTier<ZoomStops<f64>>,
}

impl Default for RoadPalette {
    fn default() -> Self {
        Self {
            casing_color: "#b0b0b0".to_string(),
            casing_width: default_casing_width(),
            fill_color: default_fill_color(),
            fill_width: default_fill_width(),
        }
    }
}

fn default_casing_width() -> PerTier<ZoomStops<f64>> {
    PerTier {
        motorway: ZoomStops::from_breakpoints(&[(5, 1.0), (10, 2.0), (14, 3.5)]),
        major: ZoomStops::from_breakpoints(&[(7, 0.8), (10, 1.8), (14, 3.2)]),
        minor: ZoomStops::from_breakpoints(&[(10, 0.3), (13, 0.7), (16, 1.4)]),
    }
}

fn default_fill_color() -> PerTier<String> {
    PerTier {
        motorway: "#cccccc".to_string(),
        major: "#e0e0e0".to_string(),
        minor: "#ffffff".to_string(),
    }
}

fn default_fill_width() -> PerTier<ZoomStops<f64>> {
    PerTier {
        motorway: ZoomStops::from_breakpoints(&[(5, 0.8), (10, 1.6), (14, 3.0)]),
        major: ZoomStops::from_breakpoints(&[(7, 0.6), (10, 1.4), (14, 2.6)]),
        minor: ZoomStops::from_breakpoints(&[(10, 0.3), (13, 0.7), (16, 1.4)]),
    }
}

fn partial_casing_width<'de, D>(deserializer: D) -> Result<PerTier<ZoomStops<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(PartialTiers::<ZoomStops<f64>>::deserialize(deserializer)?.over(default_casing_width()))
}

fn partial_fill_color<'de, D>(deserializer: D) -> Result<PerTier<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(PartialTiers::<String>::deserialize(deserializer)?.over(default_fill_color()))
}

fn partial_fill_width<'de, D>(deserializer: D) -> Result<PerTier<ZoomStops<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(PartialTiers::<ZoomStops<f64>>::deserialize(deserializer)?.over(default_fill_width()))
}

/// Street name labels (`transportation_name`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RoadLabelPalette {
    pub minzoom: u32,
    pub text_size: ZoomStops<u32>,
    pub halo_color: String,
    pub halo_width: f64,
    pub text_color: String,
}

impl Default for RoadLabelPalette {
    fn default() -> Self {
        Self {
            minzoom: 10,
            text_size: ZoomStops::from_breakpoints(&[(10, 10), (13, 13), (17, 17)]),
            halo_color: "#ffffff".to_string(),
            halo_width: 1.4,
            text_color: "#334155".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PlaceTextStyle {
    pub halo_width: f64,
    pub text_color: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct PartialPlaceText {
    halo_width: Option<f64>,
    text_color: Option<String>,
}

impl PartialPlaceText {
    fn over(self, defaults: PlaceTextStyle) -> PlaceTextStyle {
        PlaceTextStyle {
            halo_width: self.halo_width.unwrap_or(defaults.halo_width),
            text_color: self.text_color.unwrap_or(defaults.text_color),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PlacePalette {
    pub halo_color: String,
    #[serde(deserialize_with = "partial_city_text")]
    pub city: PlaceTextStyle,
    #[serde(deserialize_with = "partial_other_text")]
    pub other: PlaceTextStyle,
}

impl PlacePalette {
    pub fn for_role(&self, role: PlaceRole) -> &PlaceTextStyle {
        match role {
            PlaceRole::City => &self.city,
            PlaceRole::Other => &self.other,
        }
    }
}

impl Default for PlacePalette {
    fn default() -> Self {
        Self {
            halo_color: "#ffffff".to_string(),
            city: default_city_text(),
            other: default_other_text(),
        }
    }
}

fn default_city_text() -> PlaceTextStyle {
    PlaceTextStyle {
        halo_width: 1.6,
        text_color: "#0f172a".to_string(),
    }
}

fn default_other_text() -> PlaceTextStyle {
    PlaceTextStyle {
        halo_width: 1.2,
        text_color: "#4b5563".to_string(),
    }
}

fn partial_city_text<'de, D>(deserializer: D) -> Result<PlaceTextStyle, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(PartialPlaceText::deserialize(deserializer)?.over(default_city_text()))
}

fn partial_other_text<'de, D>(deserializer: D) -> Result<PlaceTextStyle, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(PartialPlaceText::deserialize(deserializer)?.over(default_other_text()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BuildingPalette {
    pub fill_color: String,
    /// Only written over an existing `fill-outline-color`
    pub outline_color: String,
}

impl Default for BuildingPalette {
    fn default() -> Self {
        Self {
            fill_color: "#cccccc".to_string(),
            outline_color: "#b3b3b3".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BoundaryPalette {
    pub line_color: String,
}

impl Default for BoundaryPalette {
    fn default() -> Self {
        Self {
            line_color: "#9ca3af".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TransformConfig::default();
        assert_eq!(config.style_name, "Circuit Style Map");
        assert_eq!(config.palette.background.color, "#f2f2f2");
        assert_eq!(config.palette.road_labels.minzoom, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let mut palette = Palette::default();
        palette.boundaries.line_color = "#000000".to_string();

        let config = TransformConfig::builder()
            .style_name("Night Circuit")
            .palette(palette)
            .build();

        assert_eq!(config.style_name, "Night Circuit");
        assert_eq!(config.palette.boundaries.line_color, "#000000");
        assert_eq!(config.palette.water, WaterPalette::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = TransformConfig::from_toml_str(
            r##"
            style-name = "Blueprint"

            [palette.water]
            fill-color = "#1e3a8a"

            [palette.roads.casing-width]
            motorway = { stops = [[4, 1.5], [12, 4.0]] }
            major = { stops = [[7, 0.8], [14, 3.2]] }
            minor = { stops = [[10, 0.3], [16, 1.4]] }
            "##,
        )
        .unwrap();

        assert_eq!(config.style_name, "Blueprint");
        assert_eq!(config.palette.water.fill_color, "#1e3a8a");
        assert_eq!(config.palette.water.line_color, "#cccccc");
        assert_eq!(
            config.palette.roads.casing_width.motorway.stops(),
            &[(4, 1.5), (12, 4.0)]
        );
        assert_eq!(config.palette.roads.casing_color, "#b0b0b0");
        assert_eq!(config.palette.places, PlacePalette::default());
    }

    #[test]
    fn test_partial_tier_and_place_tables() {
        let config = TransformConfig::from_toml_str(
            r##"
            [palette.roads.fill-color]
            motorway = "#111111"

            [palette.roads.fill-width]
            minor = { stops = [[12, 0.5], [16, 2.0]] }

            [palette.places.city]
            text-color = "#000000"
            "##,
        )
        .unwrap();

        let roads = &config.palette.roads;
        assert_eq!(roads.fill_color.motorway, "#111111");
        assert_eq!(roads.fill_color.major, "#e0e0e0");
        assert_eq!(roads.fill_color.minor, "#ffffff");
        assert_eq!(roads.fill_width.minor.stops(), &[(12, 0.5), (16, 2.0)]);
        assert_eq!(roads.fill_width.motorway, RoadPalette::default().fill_width.motorway);
        assert_eq!(roads.casing_width, RoadPalette::default().casing_width);

        let places = &config.palette.places;
        assert_eq!(places.city.text_color, "#000000");
        assert_eq!(places.city.halo_width, 1.6);
        assert_eq!(places.other, PlacePalette::default().other);
    }

    #[test]
    fn test_partial_place_table_keeps_role_defaults() {
        let config = TransformConfig::from_toml_str(
            r#"
            [palette.places.other]
            halo-width = 0.8
            "#,
        )
        .unwrap();
        assert_eq!(config.palette.places.other.halo_width, 0.8);
        assert_eq!(config.palette.places.other.text_color, "#4b5563");
        assert_eq!(config.palette.places.city.halo_width, 1.6);
    }

    #[test]
    fn test_invalid_ramp_rejected() {
        let result = TransformConfig::from_toml_str(
            r#"
            [palette.road-labels]
            text-size = { stops = [[13, 13], [10, 10]] }
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_empty_values_rejected() {
        let result = TransformConfig::from_toml_str(
            r#"
            [palette.boundaries]
            line-color = ""
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::EmptyColor("boundaries.line-color"))
        ));

        let result = TransformConfig::from_toml_str(r#"style-name = " ""#);
        assert!(matches!(result, Err(ConfigError::EmptyStyleName)));

        let result = TransformConfig::from_toml_str(
            r#"
            [palette.land]
            fill-opacity = nan
            "#,
        );
        assert!(matches!(
            result,
            Err(ConfigError::NonFinite("land.fill-opacity"))
        ));
    }

    #[test]
    fn test_default_ramps_are_strictly_increasing() {
        let roads = RoadPalette::default();
        for ramps in [&roads.casing_width, &roads.fill_width] {
            for tier in [RoadTier::Motorway, RoadTier::Major, RoadTier::Minor] {
                let ramp = ramps.for_tier(tier);
                assert!(ZoomStops::new(ramp.stops().to_vec()).is_ok());
            }
        }
        let labels = RoadLabelPalette::default();
        assert!(ZoomStops::new(labels.text_size.stops().to_vec()).is_ok());
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let config = TransformConfig::default();
        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("style-name = \"Circuit Style Map\""));
        assert_eq!(TransformConfig::from_toml_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let result = TransformConfig::load("/nonexistent/palette.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
