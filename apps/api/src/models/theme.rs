use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Page padding in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            top: 40.0,
            right: 40.0,
            bottom: 40.0,
            left: 40.0,
        }
    }
}

/// User-adjustable look of a resume, applied on top of the chosen template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub primary_color: String,
    pub accent_color: String,
    pub font_family: String,
    /// `small`, `medium` or `large`; anything else renders as `medium`.
    pub font_size: String,
    pub line_spacing: f64,
    pub margin: Margins,
    /// Gap below each section, in CSS pixels.
    pub section_spacing: f64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            primary_color: "#1e293b".to_string(),
            accent_color: "#2563eb".to_string(),
            font_family: "Inter".to_string(),
            font_size: "medium".to_string(),
            line_spacing: 1.5,
            margin: Margins::default(),
            section_spacing: 24.0,
        }
    }
}

impl ThemeConfig {
    /// Shallow-merges a stored (possibly partial) theme over the default.
    ///
    /// Keys are applied one at a time; a key whose value does not fit the theme shape
    /// is skipped and keeps its default. `null` values count as absent.
    pub fn merged(stored: Option<&Value>) -> Self {
        let Ok(Value::Object(mut merged)) = serde_json::to_value(ThemeConfig::default()) else {
            return ThemeConfig::default();
        };

        if let Some(Value::Object(overrides)) = stored {
            for (key, value) in overrides {
                if value.is_null() {
                    continue;
                }
                let previous = merged.insert(key.clone(), value.clone());
                if Self::from_map(&merged).is_none() {
                    warn!("Ignoring theme key '{key}' with unexpected value {value}");
                    match previous {
                        Some(previous) => merged.insert(key.clone(), previous),
                        None => merged.remove(key),
                    };
                }
            }
        }

        Self::from_map(&merged).unwrap_or_default()
    }

    fn from_map(map: &Map<String, Value>) -> Option<Self> {
        serde_json::from_value(Value::Object(map.clone())).ok()
    }
}
