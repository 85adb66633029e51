//! Color constants for the portfolio theme.
//!
//! Night-sky palette: deep background, violet/cyan gradient accents.

#![allow(dead_code)]

// === Backgrounds ===
pub const NIGHT: &str = "#0b0d17";
pub const NIGHT_CARD: &str = "#131726";
pub const NIGHT_BORDER: &str = "#232a3f";

// === Accents ===
pub const VIOLET: &str = "#8b5cf6";
pub const CYAN: &str = "#22d3ee";
pub const GREEN: &str = "#4ade80";

// === Text ===
pub const TEXT_PRIMARY: &str = "#f1f5f9";
pub const TEXT_SECONDARY: &str = "rgba(241, 245, 249, 0.75)";
pub const TEXT_MUTED: &str = "rgba(241, 245, 249, 0.5)";

/// Per-column heading accents for the skills grid, in display order.
pub const SKILL_ACCENTS: [&str; 3] = [VIOLET, CYAN, GREEN];
