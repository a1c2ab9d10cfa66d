//! Theme presets for the haikei background animator.
//!
//! A preset bundles a full color palette with the animation style that suits
//! it. The animation engine itself only consumes the primary accent color and
//! the style identifier; the remaining colors style the surrounding chrome.

/// A named color palette paired with a background animation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    /// Stable identifier, used in config files.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Page background.
    pub bg: &'static str,
    /// Raised surface color.
    pub surface: &'static str,
    /// Input field surface color.
    pub surface_input: &'static str,
    /// Primary accent; the animation engine's color input.
    pub primary: &'static str,
    /// Accent hover variant.
    pub primary_hover: &'static str,
    /// Muted accent variant.
    pub primary_muted: &'static str,
    /// Border color.
    pub border: &'static str,
    /// Table header color.
    pub table_header: &'static str,
    /// Body text color.
    pub text: &'static str,
    /// High-contrast text color.
    pub text_white: &'static str,
    /// Identifier of the paired animation style.
    pub animation: &'static str,
}

/// All built-in presets. The first entry is the default.
pub const PRESETS: &[ThemePreset] = &[
    ThemePreset {
        id: "purple-network",
        name: "Purple Network",
        bg: "#000000",
        surface: "#180530",
        surface_input: "#1E0A3C",
        primary: "#855CF9",
        primary_hover: "#A78BFA",
        primary_muted: "#C4B5FD",
        border: "#2D0B4E",
        table_header: "#6D28D9",
        text: "#E4E7EF",
        text_white: "#FFFFFF",
        animation: "particle-network",
    },
    ThemePreset {
        id: "cyber-green",
        name: "Cyber Green",
        bg: "#0A0A0A",
        surface: "#0D1A0D",
        surface_input: "#112211",
        primary: "#00FF41",
        primary_hover: "#33FF66",
        primary_muted: "#80FF9F",
        border: "#1A3A1A",
        table_header: "#0D6B0D",
        text: "#D0E8D0",
        text_white: "#FFFFFF",
        animation: "matrix-rain",
    },
    ThemePreset {
        id: "red-hacker",
        name: "Red Hacker",
        bg: "#000000",
        surface: "#1A0510",
        surface_input: "#220818",
        primary: "#FF0055",
        primary_hover: "#FF3377",
        primary_muted: "#FF80AA",
        border: "#3A0520",
        table_header: "#990033",
        text: "#E8D0D8",
        text_white: "#FFFFFF",
        animation: "glitch-scanline",
    },
    ThemePreset {
        id: "blue-security",
        name: "Blue Security",
        bg: "#000810",
        surface: "#051525",
        surface_input: "#081E30",
        primary: "#00D9FF",
        primary_hover: "#33E0FF",
        primary_muted: "#80ECFF",
        border: "#0A3050",
        table_header: "#006B80",
        text: "#D0E8F0",
        text_white: "#FFFFFF",
        animation: "hexagon-grid",
    },
    ThemePreset {
        id: "orange-fire",
        name: "Orange Fire",
        bg: "#0A0500",
        surface: "#1A0F05",
        surface_input: "#22150A",
        primary: "#FF6B35",
        primary_hover: "#FF8855",
        primary_muted: "#FFAA80",
        border: "#3A2010",
        table_header: "#994020",
        text: "#E8DDD0",
        text_white: "#FFFFFF",
        animation: "rising-embers",
    },
    ThemePreset {
        id: "dark-minimal",
        name: "Dark Minimal",
        bg: "#000000",
        surface: "#111111",
        surface_input: "#1A1A1A",
        primary: "#CCCCCC",
        primary_hover: "#E0E0E0",
        primary_muted: "#999999",
        border: "#2A2A2A",
        table_header: "#444444",
        text: "#D0D0D0",
        text_white: "#FFFFFF",
        animation: "dot-grid",
    },
];

/// Look up a preset by id, falling back to the default preset.
pub fn preset(id: &str) -> &'static ThemePreset {
    PRESETS.iter().find(|p| p.id == id).unwrap_or(&PRESETS[0])
}

/// The animation style identifier paired with a preset id.
pub fn animation_for(id: &str) -> &'static str {
    preset(id).animation
}

impl ThemePreset {
    /// Cycle to the next preset in table order.
    pub fn next(&self) -> &'static ThemePreset {
        let idx = PRESETS
            .iter()
            .position(|p| p.id == self.id)
            .unwrap_or(0);
        &PRESETS[(idx + 1) % PRESETS.len()]
    }
}
