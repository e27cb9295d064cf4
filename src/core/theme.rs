use serde::{Deserialize, Serialize};

use super::emotion::PerEmotion;

/// Base colors of the dark theme, as `#RRGGBB`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeBase {
    pub bg_primary: String,
    pub bg_secondary: String,
    pub accent: String,
}

/// Card colors for one emotion on the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionPalette {
    pub primary: String,
    pub secondary: String,
    pub icon: String,
    pub label: String,
}

/// Ambient background orb. Position and radius are relative to the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orb {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub color: [u8; 3],
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UiTheme {
    pub theme: ThemeBase,
    pub emotions: PerEmotion<EmotionPalette>,
    pub orbs: Vec<Orb>,
}

impl UiTheme {
    /// Every hex color in the theme, labelled for error reporting
    pub fn hex_colors(&self) -> Vec<(String, &str)> {
        let mut colors = vec![
            ("theme.bg_primary".to_string(), self.theme.bg_primary.as_str()),
            ("theme.bg_secondary".to_string(), self.theme.bg_secondary.as_str()),
            ("theme.accent".to_string(), self.theme.accent.as_str()),
        ];
        for (kind, palette) in self.emotions.iter() {
            colors.push((format!("{kind}.primary"), palette.primary.as_str()));
            colors.push((format!("{kind}.secondary"), palette.secondary.as_str()));
            colors.push((format!("{kind}.icon"), palette.icon.as_str()));
            colors.push((format!("{kind}.label"), palette.label.as_str()));
        }
        colors
    }
}

pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
