//! Visual themes for the résumé preview
//!
//! A theme is a small palette of hex colors. Three built-in palettes ship
//! with the app; the fourth theme, `custom`, is driven by four user-chosen
//! colors whose defaults depend on the dark-mode flag.

use crossterm::style::Color;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Theme identifier, persisted as a plain lowercase string
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Futuristic,
    Modern,
    Minimal,
    Custom,
}

impl ThemeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Futuristic => "futuristic",
            ThemeId::Modern => "modern",
            ThemeId::Minimal => "minimal",
            ThemeId::Custom => "custom",
        }
    }
}

/// Font identifier, persisted as a plain string
///
/// The terminal cannot switch fonts; the selection is carried so exports
/// and a future graphical front end stay faithful to the user's choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum FontId {
    #[default]
    Poppins,
    Roboto,
    OpenSans,
    Lato,
    Montserrat,
}

impl FontId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontId::Poppins => "Poppins",
            FontId::Roboto => "Roboto",
            FontId::OpenSans => "Open Sans",
            FontId::Lato => "Lato",
            FontId::Montserrat => "Montserrat",
        }
    }
}

/// The four user-configurable colors behind the `custom` theme
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CustomColors {
    pub accent: String,
    pub background: String,
    pub card: String,
    pub text: String,
}

impl Default for CustomColors {
    fn default() -> Self {
        Self::defaults(true)
    }
}

impl CustomColors {
    /// Default color set; dark and light mode have different baselines
    pub fn defaults(dark_mode: bool) -> Self {
        if dark_mode {
            CustomColors {
                accent: "#8B5CF6".to_string(),
                background: "#111827".to_string(),
                card: "#1F2937".to_string(),
                text: "#FFFFFF".to_string(),
            }
        } else {
            CustomColors {
                accent: "#7C3AED".to_string(),
                background: "#FFFFFF".to_string(),
                card: "#F9FAFB".to_string(),
                text: "#111827".to_string(),
            }
        }
    }
}

/// Resolved render palette for one theme
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub accent: String,
    pub background: String,
    pub card: String,
    pub text: String,
    pub subtext: String,
    pub border: String,
}

static BUILTIN_PALETTES: Lazy<HashMap<ThemeId, Palette>> = Lazy::new(|| {
    HashMap::from([
        (
            ThemeId::Futuristic,
            Palette {
                accent: "#8B5CF6".to_string(),
                background: "#111827".to_string(),
                card: "#1F2937".to_string(),
                text: "#FFFFFF".to_string(),
                subtext: "#D1D5DB".to_string(),
                border: "#4B5563".to_string(),
            },
        ),
        (
            ThemeId::Modern,
            Palette {
                accent: "#60A5FA".to_string(),
                background: "#1E3A8A".to_string(),
                card: "#1E40AF".to_string(),
                text: "#FFFFFF".to_string(),
                subtext: "#D1D5DB".to_string(),
                border: "#3B82F6".to_string(),
            },
        ),
        (
            ThemeId::Minimal,
            Palette {
                accent: "#9CA3AF".to_string(),
                background: "#1F2937".to_string(),
                card: "#374151".to_string(),
                text: "#FFFFFF".to_string(),
                subtext: "#D1D5DB".to_string(),
                border: "#6B7280".to_string(),
            },
        ),
    ])
});

impl Palette {
    /// Resolve the palette for a theme selection.
    ///
    /// The custom theme derives its subtext and border from the chosen text
    /// and accent colors (70% and 30% alpha respectively, encoded as 8-digit
    /// hex); built-in themes use their fixed palettes.
    pub fn resolve(theme: ThemeId, custom: &CustomColors, dark_mode: bool) -> Palette {
        match theme {
            ThemeId::Custom => {
                let defaults = CustomColors::defaults(dark_mode);
                let pick = |value: &str, default: &str| {
                    if value.is_empty() {
                        default.to_string()
                    } else {
                        value.to_string()
                    }
                };
                let accent = pick(&custom.accent, &defaults.accent);
                let text = pick(&custom.text, &defaults.text);
                Palette {
                    subtext: format!("{text}B3"),
                    border: format!("{accent}4D"),
                    background: pick(&custom.background, &defaults.background),
                    card: pick(&custom.card, &defaults.card),
                    accent,
                    text,
                }
            }
            builtin => BUILTIN_PALETTES
                .get(&builtin)
                .cloned()
                .unwrap_or_else(|| BUILTIN_PALETTES[&ThemeId::Futuristic].clone()),
        }
    }

    /// Convert hex color string to a terminal color
    pub fn hex_to_color(hex: &str) -> Option<Color> {
        // Remove # if present
        let hex = hex.trim_start_matches('#');

        // Support both 6-character (RGB) and 8-character (RGBA) hex codes;
        // for RGBA the alpha channel is ignored
        match hex.len() {
            6 | 8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::Rgb { r, g, b })
            }
            _ => None,
        }
    }

    /// Get color with fallback to white
    pub fn get_color(hex: &str) -> Color {
        Self::hex_to_color(hex).unwrap_or(Color::White)
    }
}
