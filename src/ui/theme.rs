//! Theme management and ANSI escape sequence generation.
//!
//! Two built-in palettes ship with the plugin, `dark` and `light`, loaded
//! from embedded TOML. Which one is active is controlled by a persisted flag
//! that the user flips at runtime; a custom TOML theme file can override the
//! built-ins entirely.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#89b4fa"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#89b4fa"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! wishlist_fg = "#f38ba8"
//! price_fg = "#a6e3a1"
//! modal_border = "#89b4fa"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which built-in palette is active.
///
/// Persisted as the text values `"dark"` and `"light"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeFlag {
    Dark,
    Light,
}

impl ThemeFlag {
    /// The persisted text value of the flag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parses a persisted flag value; unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// The opposite flag.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g. "#cdd6f4").
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary columns).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Wishlist membership indicator color.
    pub wishlist_fg: String,

    /// Price column color.
    pub price_fg: String,

    /// Detail overlay border color.
    pub modal_border: String,
}

impl Theme {
    /// Loads the built-in theme for a flag.
    ///
    /// # Panics
    ///
    /// Panics if an embedded theme fails to parse, which cannot happen for
    /// shipped builds.
    #[must_use]
    pub fn from_flag(flag: ThemeFlag) -> Self {
        let toml_str = match flag {
            ThemeFlag::Dark => include_str!("../../themes/dark.toml"),
            ThemeFlag::Light => include_str!("../../themes/light.toml"),
        };

        toml::from_str(toml_str).expect("built-in theme should always parse")
    }

    /// Loads a built-in theme by name ("dark" or "light").
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        ThemeFlag::parse(name).map(Self::from_flag)
    }

    /// Loads a theme from a custom TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML does not
    /// parse into a complete palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read theme file: {e}"))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse theme TOML: {e}"))
    }

    /// Converts a hex color to an RGB tuple, falling back to white on parse
    /// errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// ANSI reset escape sequence, clearing all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the dark theme, the session-start default until the persisted
    /// flag arrives.
    fn default() -> Self {
        Self::from_flag(ThemeFlag::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::from_flag(ThemeFlag::Dark).name, "dark");
        assert_eq!(Theme::from_flag(ThemeFlag::Light).name, "light");
    }

    #[test]
    fn flag_parses_persisted_values_only() {
        assert_eq!(ThemeFlag::parse("dark"), Some(ThemeFlag::Dark));
        assert_eq!(ThemeFlag::parse("light"), Some(ThemeFlag::Light));
        assert_eq!(ThemeFlag::parse("sepia"), None);
        assert_eq!(ThemeFlag::parse("Dark"), None);
    }

    #[test]
    fn toggle_flips_between_the_two_flags() {
        assert_eq!(ThemeFlag::Dark.toggled(), ThemeFlag::Light);
        assert_eq!(ThemeFlag::Light.toggled(), ThemeFlag::Dark);
    }

    #[test]
    fn fg_emits_truecolor_sequence() {
        assert_eq!(Theme::fg("#000000"), "\u{001b}[38;2;0;0;0m");
        assert_eq!(Theme::fg("ffffff"), "\u{001b}[38;2;255;255;255m");
        // Malformed colors fall back to white rather than panicking.
        assert_eq!(Theme::fg("#zz"), "\u{001b}[38;2;255;255;255m");
    }
}
