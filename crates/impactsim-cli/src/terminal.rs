//! Terminal styling and color utilities.
//!
//! ANSI escape codes plus color detection, so renderers can emit the same
//! layout with or without styling.

use impactsim_lib::ImpactCategory;

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for headings.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for labels and secondary text.
    pub const GRAY: &str = "\x1b[90m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    /// Orange (256-color).
    pub const ORANGE: &str = "\x1b[38;5;208m";
    pub const RED: &str = "\x1b[31m";
    /// Bold reverse red for extinction-level badges.
    pub const RED_BADGE: &str = "\x1b[1;7;31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub orange: &'static str,
    pub red: &'static str,
    pub red_badge: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            orange: colors::ORANGE,
            red: colors::RED,
            red_badge: colors::RED_BADGE,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            yellow: "",
            orange: "",
            red: "",
            red_badge: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Color for a severity category, escalating from green to a red badge.
    #[must_use]
    pub fn severity(&self, category: ImpactCategory) -> &'static str {
        match category {
            ImpactCategory::LocalEffects => self.green,
            ImpactCategory::RegionalDevastation => self.yellow,
            ImpactCategory::ContinentalEffects => self.orange,
            ImpactCategory::GlobalCatastrophe => self.red,
            ImpactCategory::ExtinctionLevelEvent => self.red_badge,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}
