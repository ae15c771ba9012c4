//! Overlay toggles and colours.
//!
//! [`RenderSettings`] is a plain value handed to every draw call through the
//! frame context. It can be loaded from JSON; any field a file leaves out
//! keeps its default.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::colors::Color;

/// What the per-tile counter label on in-scene path tiles shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileCounter {
    #[default]
    Disabled,
    /// 0-based position along the path.
    Ascending,
    /// Steps left to the destination.
    Remaining,
}

impl TileCounter {
    /// The label for the tile at `index` in a path of `len` tiles.
    pub fn label(&self, index: usize, len: usize) -> Option<usize> {
        match self {
            TileCounter::Disabled => None,
            TileCounter::Ascending => Some(index),
            TileCounter::Remaining => Some(len.saturating_sub(index + 1)),
        }
    }

    /// The next mode, wrapping around.
    pub fn cycle(&self) -> Self {
        match self {
            TileCounter::Disabled => TileCounter::Ascending,
            TileCounter::Ascending => TileCounter::Remaining,
            TileCounter::Remaining => TileCounter::Disabled,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub draw_map: bool,
    pub draw_minimap: bool,
    pub draw_transports: bool,
    pub draw_collision_map: bool,
    pub draw_tiles: bool,
    pub path_color: Color,
    pub path_calculating_color: Color,
    pub transport_color: Color,
    pub collision_color: Color,
    pub tile_counter: TileCounter,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            draw_map: true,
            draw_minimap: true,
            draw_transports: true,
            draw_collision_map: false,
            draw_tiles: true,
            path_color: Color::rgb(255, 0, 0),
            path_calculating_color: Color::rgb(0, 0, 255),
            transport_color: Color::rgba(0, 255, 0, 128),
            collision_color: Color::rgba(0, 128, 255, 128),
            tile_counter: TileCounter::Disabled,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderSettings {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Loads `path`, falling back to defaults if it cannot be read or parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::debug!("loaded render settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("{err}; using default render settings ({})", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_labels_for_five_tiles() {
        let asc: Vec<_> = (0..5).map(|i| TileCounter::Ascending.label(i, 5)).collect();
        let rem: Vec<_> = (0..5).map(|i| TileCounter::Remaining.label(i, 5)).collect();
        assert_eq!(asc, [0, 1, 2, 3, 4].map(Some));
        assert_eq!(rem, [4, 3, 2, 1, 0].map(Some));
        assert_eq!(TileCounter::Disabled.label(2, 5), None);
    }

    #[test]
    fn counter_cycles_through_all_modes() {
        let mode = TileCounter::Disabled;
        assert_eq!(mode.cycle().cycle().cycle(), mode);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = RenderSettings::from_json_str(
            r##"{ "draw_collision_map": true, "path_color": "#00FF00", "tile_counter": "remaining" }"##,
        )
        .unwrap();
        assert!(settings.draw_collision_map);
        assert!(settings.draw_map);
        assert_eq!(settings.path_color, Color::rgb(0, 255, 0));
        assert_eq!(settings.tile_counter, TileCounter::Remaining);
        assert_eq!(settings.transport_color, RenderSettings::default().transport_color);
    }

    #[test]
    fn bad_colour_is_a_json_error() {
        let err = RenderSettings::from_json_str(r#"{ "path_color": "red" }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
        assert!(err.to_string().contains("red"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = RenderSettings::load_or_default("/nonexistent/pathviz-settings.json");
        assert_eq!(settings, RenderSettings::default());
    }
}
