use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors, also used for toasts
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: rgb(125, 207, 255),       // Blue
            accent: rgb(255, 159, 196),        // Magenta
            text: rgb(169, 177, 214),          // Foreground
            text_muted: rgb(117, 121, 148),    // Comment
            success: rgb(158, 206, 106),       // Green
            warning: rgb(255, 202, 40),        // Yellow
            error: rgb(247, 118, 142),         // Red
            info: rgb(125, 207, 255),          // Blue
            border_active: rgb(125, 207, 255), // Blue
            border_normal: rgb(117, 121, 148), // Comment
            highlight_bg: rgb(125, 207, 255),  // Blue
            highlight_fg: rgb(26, 27, 38),     // Background
        }
    }

    /// Tokyo Night Day theme.
    ///
    pub fn tokyo_night_day() -> Self {
        Theme {
            name: "tokyo-night-day".to_string(),
            primary: rgb(46, 126, 233),
            accent: rgb(152, 84, 241),
            text: rgb(55, 96, 191),
            text_muted: rgb(132, 140, 181),
            success: rgb(88, 117, 57),
            warning: rgb(140, 108, 62),
            error: rgb(245, 42, 101),
            info: rgb(0, 113, 151),
            border_active: rgb(46, 126, 233),
            border_normal: rgb(132, 140, 181),
            highlight_bg: rgb(46, 126, 233),
            highlight_fg: rgb(225, 226, 231),
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: rgb(161, 119, 255),       // Purple
            accent: rgb(255, 109, 146),        // Pink
            text: rgb(88, 82, 96),             // Text
            text_muted: rgb(152, 147, 165),    // Muted
            success: rgb(59, 247, 209),        // Pine
            warning: rgb(255, 210, 0),         // Gold
            error: rgb(235, 111, 146),         // Love
            info: rgb(61, 174, 233),           // Foam
            border_active: rgb(161, 119, 255), // Purple
            border_normal: rgb(88, 82, 96),    // Text
            highlight_bg: rgb(61, 174, 233),   // Foam
            highlight_fg: rgb(0, 0, 0),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "tokyo-night-day" => Some(Self::tokyo_night_day()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "tokyo-night-day".to_string(),
            "rose-pine-dawn".to_string(),
        ]
    }
}
