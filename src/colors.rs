//! Terminal colouring for log lines.

use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};

use crate::environment::Environment;

/// Palette for request IDs. Plain white/black are left out so IDs stay
/// readable on both light and dark terminals.
const PALETTE: [AnsiColors; 12] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Blue,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
    AnsiColors::BrightRed,
    AnsiColors::BrightGreen,
    AnsiColors::BrightYellow,
    AnsiColors::BrightBlue,
    AnsiColors::BrightMagenta,
    AnsiColors::BrightCyan,
];

/// Stable palette index for a request ID
fn palette_index(id: &str) -> usize {
    let hash = id
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    hash as usize % PALETTE.len()
}

pub fn color_for_id(id: &str) -> AnsiColors {
    PALETTE[palette_index(id)]
}

/// `[id]` wrapped in the ID's colour
pub fn colored_id(id: &str) -> String {
    let style = Style::new().color(DynColors::Ansi(color_for_id(id)));
    format!("[{}]", id).style(style).to_string()
}

/// Short label shown in startup logs: yellow `DEV` or green `PROD`.
pub fn env_badge(env: Environment) -> String {
    match env {
        Environment::Development => "DEV".yellow().bold().to_string(),
        Environment::Production => "PROD".green().bold().to_string(),
    }
}
