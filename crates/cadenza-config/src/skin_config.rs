// Skin configuration — active skin selection and the persisted form of
// per-component user adjustments.

use serde::{Deserialize, Serialize};

use cadenza_skin::{Anchor, SkinnableComponent};

/// Which scene a skin applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneKind {
    MusicSelect,
    Play,
    Result,
}

impl SceneKind {
    fn default_skin_path(self) -> &'static str {
        match self {
            Self::MusicSelect => "skin/default/select.json",
            Self::Play => "skin/default/play.json",
            Self::Result => "skin/default/result.json",
        }
    }
}

/// A user's persisted adjustment of one skinnable component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentOverride {
    pub name: String,
    /// Pinned anchor; `None` keeps the skin's own placement.
    pub anchor: Option<Anchor>,
    /// True while the anchor is chosen automatically by proximity.
    pub using_closest_anchor: bool,
}

impl Default for ComponentOverride {
    fn default() -> Self {
        Self {
            name: String::new(),
            anchor: None,
            using_closest_anchor: true,
        }
    }
}

impl ComponentOverride {
    fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    /// Applies this adjustment to a live component. Components that are
    /// not end-user editable are left untouched.
    pub fn apply_to(&self, component: &mut dyn SkinnableComponent) {
        if !component.is_editable() {
            return;
        }
        component.set_using_closest_anchor(self.anchor.is_none() && self.using_closest_anchor);
    }
}

/// Skin configuration: active skin path plus per-component overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SkinConfig {
    pub path: Option<String>,
    pub components: Vec<ComponentOverride>,
}

impl SkinConfig {
    /// Validates this skin config, dropping nameless overrides and
    /// reconciling pinned anchors with the proximity flag. Returns false
    /// when no skin path is set.
    pub fn validate(&mut self) -> bool {
        self.components.retain(|c| c.is_valid());
        for component in &mut self.components {
            if component.anchor.is_some() {
                component.using_closest_anchor = false;
            }
        }
        matches!(&self.path, Some(p) if !p.is_empty())
    }

    /// Returns the default skin config for a scene.
    pub fn default_for(scene: SceneKind) -> Self {
        let mut config = Self {
            path: Some(scene.default_skin_path().to_string()),
            components: Vec::new(),
        };
        config.validate();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeComponent {
        editable: bool,
        using_closest_anchor: bool,
    }

    impl SkinnableComponent for FakeComponent {
        fn is_editable(&self) -> bool {
            self.editable
        }

        fn using_closest_anchor(&self) -> bool {
            self.using_closest_anchor
        }

        fn set_using_closest_anchor(&mut self, value: bool) {
            self.using_closest_anchor = value;
        }
    }

    #[test]
    fn validate_empty_path_fails() {
        let mut config = SkinConfig::default();
        assert!(!config.validate());
    }

    #[test]
    fn validate_drops_nameless_overrides() {
        let mut config = SkinConfig {
            path: Some("skin/custom/play.json".to_string()),
            components: vec![
                ComponentOverride {
                    name: "combo_counter".to_string(),
                    ..Default::default()
                },
                ComponentOverride::default(),
            ],
        };
        assert!(config.validate());
        assert_eq!(config.components.len(), 1);
        assert_eq!(config.components[0].name, "combo_counter");
    }

    #[test]
    fn validate_reconciles_pinned_anchor() {
        let mut config = SkinConfig {
            path: Some("skin/custom/play.json".to_string()),
            components: vec![ComponentOverride {
                name: "song_progress".to_string(),
                anchor: Some(Anchor::BottomCentre),
                using_closest_anchor: true,
            }],
        };
        config.validate();
        assert!(!config.components[0].using_closest_anchor);
    }

    #[test]
    fn default_for_each_scene() {
        let select = SkinConfig::default_for(SceneKind::MusicSelect);
        assert_eq!(select.path.as_deref(), Some("skin/default/select.json"));

        let play = SkinConfig::default_for(SceneKind::Play);
        assert_eq!(play.path.as_deref(), Some("skin/default/play.json"));

        let result = SkinConfig::default_for(SceneKind::Result);
        assert_eq!(result.path.as_deref(), Some("skin/default/result.json"));
    }

    #[test]
    fn apply_to_clears_proximity_when_pinned() {
        let mut component = FakeComponent {
            editable: true,
            using_closest_anchor: true,
        };
        let adjustment = ComponentOverride {
            name: "score_display".to_string(),
            anchor: Some(Anchor::TopRight),
            using_closest_anchor: false,
        };
        adjustment.apply_to(&mut component);
        assert!(!component.using_closest_anchor);
    }

    #[test]
    fn apply_to_skips_non_editable_components() {
        let mut component = FakeComponent {
            editable: false,
            using_closest_anchor: true,
        };
        let adjustment = ComponentOverride {
            name: "background".to_string(),
            anchor: Some(Anchor::Centre),
            using_closest_anchor: false,
        };
        adjustment.apply_to(&mut component);
        assert!(component.using_closest_anchor);
    }

    #[test]
    fn override_defaults_to_automatic_anchor() {
        let adjustment = ComponentOverride::default();
        assert!(adjustment.using_closest_anchor);
        assert!(adjustment.anchor.is_none());
    }

    #[test]
    fn deserialize_from_empty_object() {
        let config: SkinConfig = serde_json::from_str("{}").unwrap();
        assert!(config.path.is_none());
        assert!(config.components.is_empty());

        let adjustment: ComponentOverride = serde_json::from_str("{}").unwrap();
        assert!(adjustment.using_closest_anchor);
    }

    #[test]
    fn serde_round_trip() {
        let config = SkinConfig {
            path: Some("skin/custom/select.json".to_string()),
            components: vec![ComponentOverride {
                name: "leaderboard".to_string(),
                anchor: Some(Anchor::CentreLeft),
                using_closest_anchor: false,
            }],
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SkinConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.path, config.path);
        assert_eq!(back.components.len(), 1);
        assert_eq!(back.components[0].anchor, Some(Anchor::CentreLeft));
    }
}
