//! Theme system for the TUI
//!
//! Provides the color palette used by all widgets. Presets can be selected
//! from the config file or the `--theme` flag.

use ratatui::style::Color;

/// Available theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreset {
    #[default]
    CatppuccinMocha,
    Nord,
}

impl ThemePreset {
    /// Parse a preset name as written in config/CLI
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "catppuccin-mocha" | "mocha" => Some(Self::CatppuccinMocha),
            "nord" => Some(Self::Nord),
            _ => None,
        }
    }
}

/// Theme colors for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_main: Color,
    pub bg_dark: Color,

    pub border: Color,
    pub border_focused: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub cyan: Color,
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::catppuccin_mocha()
    }
}

impl Theme {
    pub fn from_preset(preset: ThemePreset) -> Self {
        match preset {
            ThemePreset::CatppuccinMocha => Self::catppuccin_mocha(),
            ThemePreset::Nord => Self::nord(),
        }
    }

    /// Catppuccin Mocha theme (default)
    pub fn catppuccin_mocha() -> Self {
        Self {
            bg_main: Color::Rgb(30, 30, 46),
            bg_dark: Color::Rgb(24, 24, 37),

            border: Color::Rgb(49, 50, 68),
            border_focused: Color::Rgb(137, 180, 250),

            text_primary: Color::Rgb(205, 214, 244),
            text_secondary: Color::Rgb(166, 173, 200),
            text_muted: Color::Rgb(108, 112, 134),

            cyan: Color::Rgb(148, 226, 213),
            blue: Color::Rgb(137, 180, 250),
            green: Color::Rgb(166, 227, 161),
            yellow: Color::Rgb(249, 226, 175),
            red: Color::Rgb(243, 139, 168),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            bg_main: Color::Rgb(46, 52, 64),
            bg_dark: Color::Rgb(40, 44, 52),

            border: Color::Rgb(67, 76, 94),
            border_focused: Color::Rgb(136, 192, 208),

            text_primary: Color::Rgb(216, 222, 233),
            text_secondary: Color::Rgb(229, 233, 240),
            text_muted: Color::Rgb(97, 110, 136),

            cyan: Color::Rgb(136, 192, 208),
            blue: Color::Rgb(129, 161, 193),
            green: Color::Rgb(163, 190, 140),
            yellow: Color::Rgb(235, 203, 139),
            red: Color::Rgb(191, 97, 106),
        }
    }

    /// Color for a risk classification
    pub fn risk_color(&self, risk: crate::predict::RiskLabel) -> Color {
        use crate::predict::RiskLabel;
        match risk {
            RiskLabel::Low => self.green,
            RiskLabel::Moderate => self.yellow,
            RiskLabel::High => self.red,
        }
    }
}
