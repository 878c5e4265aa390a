//! Category rule table
//!
//! Turns a classified category and the active palette into the overrides to
//! merge into a layer.

use super::classifier::{Category, RoadRole};
use super::config::Palette;
use super::merge::{Override, merge_container};
use crate::models::{Layer, PropertyContainer};

/// Property overrides for one category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryRule {
    /// Paint key the layer must already carry for the rule to apply at all
    pub requires_paint: Option<&'static str>,
    pub paint: Vec<Override>,
    pub layout: Vec<Override>,
    pub minzoom: Option<u32>,
}

impl CategoryRule {
    /// Rule that changes nothing
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.paint.is_empty() && self.layout.is_empty() && self.minzoom.is_none()
    }

    /// Merge the overrides into `layer`
    pub fn apply(&self, layer: &mut Layer) {
        if let Some(key) = self.requires_paint
            && !layer.has_paint_property(key)
        {
            return;
        }

        let fields = layer.fields_mut();
        merge_container(fields, PropertyContainer::Layout.key(), &self.layout);
        merge_container(fields, PropertyContainer::Paint.key(), &self.paint);

        if let Some(zoom) = self.minzoom {
            layer.set_minzoom(zoom);
        }
    }
}

/// Build the rule for a category from the palette
pub fn rule_for(category: Category, palette: &Palette) -> CategoryRule {
    match category {
        Category::Background => CategoryRule {
            paint: vec![Override::always(
                "background-color",
                palette.background.color.as_str(),
            )],
            ..CategoryRule::none()
        },
        Category::Land => CategoryRule {
            requires_paint: Some("fill-color"),
            paint: vec![
                Override::if_present("fill-color", palette.land.fill_color.as_str()),
                Override::if_present("fill-opacity", palette.land.fill_opacity),
            ],
            ..CategoryRule::none()
        },
        Category::WaterFill => CategoryRule {
            paint: vec![Override::always(
                "fill-color",
                palette.water.fill_color.as_str(),
            )],
            ..CategoryRule::none()
        },
        Category::WaterLine => CategoryRule {
            paint: vec![Override::always(
                "line-color",
                palette.water.line_color.as_str(),
            )],
            ..CategoryRule::none()
        },
        Category::Road { role, tier } => {
            let roads = &palette.roads;
            let (color, width) = match role {
                RoadRole::Casing => (&roads.casing_color, roads.casing_width.for_tier(tier)),
                RoadRole::Fill => (
                    roads.fill_color.for_tier(tier),
                    roads.fill_width.for_tier(tier),
                ),
            };
            CategoryRule {
                paint: vec![
                    Override::always("line-color", color.as_str()),
                    Override::always("line-width", width.to_value()),
                ],
                ..CategoryRule::none()
            }
        }
        Category::RoadLabel => {
            let labels = &palette.road_labels;
            CategoryRule {
                minzoom: Some(labels.minzoom),
                layout: vec![Override::always("text-size", labels.text_size.to_value())],
                paint: vec![
                    Override::always("text-halo-color", labels.halo_color.as_str()),
                    Override::always("text-halo-width", labels.halo_width),
                    Override::always("text-color", labels.text_color.as_str()),
                ],
                ..CategoryRule::none()
            }
        }
        Category::PlaceLabel { role } => {
            let places = &palette.places;
            let text = places.for_role(role);
            CategoryRule {
                paint: vec![
                    Override::always("text-halo-color", places.halo_color.as_str()),
                    Override::always("text-halo-width", text.halo_width),
                    Override::always("text-color", text.text_color.as_str()),
                ],
                ..CategoryRule::none()
            }
        }
        Category::Building => CategoryRule {
            paint: vec![
                Override::always("fill-color", palette.buildings.fill_color.as_str()),
                Override::if_present(
                    "fill-outline-color",
                    palette.buildings.outline_color.as_str(),
                ),
            ],
            ..CategoryRule::none()
        },
        Category::Boundary => CategoryRule {
            paint: vec![Override::always(
                "line-color",
                palette.boundaries.line_color.as_str(),
            )],
            ..CategoryRule::none()
        },
        Category::Unclassified => CategoryRule::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::classifier::{PlaceRole, RoadTier};
    use serde_json::{Value, json};

    fn apply(category: Category, value: Value) -> Value {
        let mut layer: Layer = serde_json::from_value(value).unwrap();
        rule_for(category, &Palette::default()).apply(&mut layer);
        serde_json::to_value(&layer).unwrap()
    }

    #[test]
    fn test_background_creates_paint() {
        let out = apply(Category::Background, json!({"id": "bg", "type": "background"}));
        assert_eq!(out["paint"], json!({"background-color": "#f2f2f2"}));
    }

    #[test]
    fn test_land_only_overwrites_existing_values() {
        let out = apply(
            Category::Land,
            json!({"id": "landuse", "type": "fill", "paint": {"fill-color": "#abc", "fill-opacity": 0.4}}),
        );
        assert_eq!(out["paint"], json!({"fill-color": "#e0e0e0", "fill-opacity": 0.9}));

        let out = apply(
            Category::Land,
            json!({"id": "landcover_wood", "type": "fill", "paint": {"fill-color": "#abc"}}),
        );
        assert_eq!(out["paint"], json!({"fill-color": "#e0e0e0"}));

        // Opacity alone is not enough: the whole rule needs fill-color.
        let input = json!({"id": "landcover_ice", "type": "fill", "paint": {"fill-opacity": 0.4}});
        assert_eq!(apply(Category::Land, input.clone()), input);

        let input = json!({"id": "landuse_park", "type": "fill"});
        assert_eq!(apply(Category::Land, input.clone()), input);
    }

    #[test]
    fn test_road_ramps_per_role_and_tier() {
        let out = apply(
            Category::Road {
                role: RoadRole::Casing,
                tier: RoadTier::Motorway,
            },
            json!({"id": "road-casing-motorway", "source-layer": "transportation"}),
        );
        assert_eq!(out["paint"]["line-color"], "#b0b0b0");
        assert_eq!(
            out["paint"]["line-width"],
            json!({"stops": [[5, 1.0], [10, 2.0], [14, 3.5]]})
        );

        let out = apply(
            Category::Road {
                role: RoadRole::Casing,
                tier: RoadTier::Major,
            },
            json!({"id": "casing_primary"}),
        );
        assert_eq!(
            out["paint"]["line-width"],
            json!({"stops": [[7, 0.8], [10, 1.8], [14, 3.2]]})
        );

        let out = apply(
            Category::Road {
                role: RoadRole::Fill,
                tier: RoadTier::Motorway,
            },
            json!({"id": "motorway"}),
        );
        assert_eq!(out["paint"]["line-color"], "#cccccc");
        assert_eq!(
            out["paint"]["line-width"],
            json!({"stops": [[5, 0.8], [10, 1.6], [14, 3.0]]})
        );

        let out = apply(
            Category::Road {
                role: RoadRole::Fill,
                tier: RoadTier::Major,
            },
            json!({"id": "trunk"}),
        );
        assert_eq!(out["paint"]["line-color"], "#e0e0e0");
        assert_eq!(
            out["paint"]["line-width"],
            json!({"stops": [[7, 0.6], [10, 1.4], [14, 2.6]]})
        );

        let out = apply(
            Category::Road {
                role: RoadRole::Fill,
                tier: RoadTier::Minor,
            },
            json!({"id": "street", "paint": {"line-color": "#f00", "line-dasharray": [2, 1]}}),
        );
        assert_eq!(
            out["paint"],
            json!({
                "line-color": "#ffffff",
                "line-dasharray": [2, 1],
                "line-width": {"stops": [[10, 0.3], [13, 0.7], [16, 1.4]]}
            })
        );
    }

    #[test]
    fn test_road_label_sets_minzoom_layout_and_paint() {
        let out = apply(
            Category::RoadLabel,
            json!({"id": "highway_name", "minzoom": 8, "layout": {"text-field": "{name}"}}),
        );
        assert_eq!(out["minzoom"], json!(10));
        assert_eq!(
            out["layout"],
            json!({"text-field": "{name}", "text-size": {"stops": [[10, 10], [13, 13], [17, 17]]}})
        );
        assert_eq!(
            out["paint"],
            json!({"text-halo-color": "#ffffff", "text-halo-width": 1.4, "text-color": "#334155"})
        );
    }

    #[test]
    fn test_place_roles() {
        let out = apply(
            Category::PlaceLabel {
                role: PlaceRole::City,
            },
            json!({"id": "place-city-label"}),
        );
        assert_eq!(out["paint"]["text-halo-color"], "#ffffff");
        assert_eq!(out["paint"]["text-halo-width"], json!(1.6));
        assert_eq!(out["paint"]["text-color"], "#0f172a");

        let out = apply(
            Category::PlaceLabel {
                role: PlaceRole::Other,
            },
            json!({"id": "place_village"}),
        );
        assert_eq!(out["paint"]["text-halo-width"], json!(1.2));
        assert_eq!(out["paint"]["text-color"], "#4b5563");
    }

    #[test]
    fn test_building_outline_only_if_present() {
        let out = apply(Category::Building, json!({"id": "building"}));
        assert_eq!(out["paint"], json!({"fill-color": "#cccccc"}));

        let out = apply(
            Category::Building,
            json!({"id": "building", "paint": {"fill-outline-color": "#000"}}),
        );
        assert_eq!(
            out["paint"],
            json!({"fill-outline-color": "#b3b3b3", "fill-color": "#cccccc"})
        );
    }

    #[test]
    fn test_water_and_boundary() {
        let out = apply(Category::WaterFill, json!({"id": "water", "type": "fill"}));
        assert_eq!(out["paint"], json!({"fill-color": "#dcdcdc"}));

        let out = apply(Category::WaterLine, json!({"id": "waterway", "type": "line"}));
        assert_eq!(out["paint"], json!({"line-color": "#cccccc"}));

        let out = apply(Category::Boundary, json!({"id": "admin"}));
        assert_eq!(out["paint"], json!({"line-color": "#9ca3af"}));
    }

    #[test]
    fn test_unclassified_rule_is_empty() {
        assert!(rule_for(Category::Unclassified, &Palette::default()).is_empty());
        let input = json!({"id": "poi", "paint": {"icon-color": "#123"}});
        assert_eq!(apply(Category::Unclassified, input.clone()), input);
    }
}
