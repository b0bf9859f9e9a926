//! Plain-text exports of a palette

use super::Palette;

/// CSS custom properties, one per color: `--deep-navy: #1B2A41;`
pub fn css_variables(palette: &Palette) -> String {
    palette
        .colors
        .iter()
        .map(|c| format!("--{}: {};", css_ident(&c.name), c.hex))
        .collect::<Vec<_>>()
        .join("\n")
}

/// All hexes, comma separated
pub fn hex_list(palette: &Palette) -> String {
    palette
        .colors
        .iter()
        .map(|c| c.hex.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Lowercase, whitespace runs collapsed to `-`
fn css_ident(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
