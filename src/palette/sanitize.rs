//! Response sanitization
//!
//! The model's answer is untrusted: fields may be missing, mistyped, or
//! malformed. [`sanitize`] is total. Whatever it is handed, it returns a
//! palette with exactly five named colors and canonical hexes.

use serde_json::Value;

use super::{fallback_name, hex, Color, Mode, Palette, PALETTE_SIZE};

/// Name used when the response has no usable `palette_name`
pub const FALLBACK_PALETTE_NAME: &str = "Generated Palette";

/// Turn a parsed model response into a well-formed palette.
///
/// `mode` is the request's resolved mode; any `mode` in the response is ignored.
pub fn sanitize(raw: &Value, mode: Mode) -> Palette {
    let palette_name = text_field(raw, "palette_name")
        .unwrap_or_else(|| FALLBACK_PALETTE_NAME.to_string());
    let description = text_field(raw, "description").unwrap_or_default();

    let entries = raw
        .get("colors")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    if entries.len() > PALETTE_SIZE {
        tracing::debug!(count = entries.len(), "Truncating extra palette colors");
    }

    let colors = std::array::from_fn(|index| match entries.get(index) {
        Some(entry) => sanitize_color(entry, index),
        None => Color::fallback(index),
    });

    Palette {
        palette_name,
        description,
        mode,
        colors,
    }
}

/// Trimmed, non-empty string at `key`
fn text_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn sanitize_color(entry: &Value, index: usize) -> Color {
    let name = entry
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| fallback_name(index));

    let hex = entry
        .get("hex")
        .and_then(hex_text)
        .and_then(|text| hex::normalize(&text))
        .unwrap_or_else(|| hex::FALLBACK_HEX.to_string());

    Color { name, hex }
}

/// Text form of a hex field. Numbers use their decimal text (`112233`).
fn hex_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn assert_well_formed(palette: &Palette) {
        assert_eq!(palette.colors.len(), PALETTE_SIZE);
        for color in &palette.colors {
            assert!(hex::is_canonical(&color.hex), "bad hex {}", color.hex);
            assert!(!color.name.is_empty());
        }
    }

    fn colors_json(count: usize) -> Value {
        let colors: Vec<Value> = (0..count)
            .map(|i| json!({"name": format!("C{}", i), "hex": format!("#10203{}", i % 10)}))
            .collect();
        json!({ "palette_name": "P", "colors": colors })
    }

    #[test]
    fn test_always_five_colors() {
        for count in [0, 3, 5, 12] {
            let palette = sanitize(&colors_json(count), Mode::Light);
            assert_well_formed(&palette);
        }
    }

    #[test]
    fn test_extra_colors_are_truncated() {
        let palette = sanitize(&colors_json(12), Mode::Light);
        assert_eq!(palette.colors[4].name, "C4");
    }

    #[test]
    fn test_single_color_is_padded() {
        let raw = json!({"colors": [{"name": "A", "hex": "#112233"}]});
        let palette = sanitize(&raw, Mode::Light);
        assert_eq!(palette.colors[0], Color::new("A", "#112233"));
        for n in 1..PALETTE_SIZE {
            assert_eq!(
                palette.colors[n],
                Color::new(format!("Color {}", n + 1), "#F5F5F5")
            );
        }
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let palette = sanitize(&json!({}), Mode::Dark);
        assert_eq!(palette.palette_name, FALLBACK_PALETTE_NAME);
        assert_eq!(palette.description, "");
        assert_eq!(palette.mode, Mode::Dark);
        assert_well_formed(&palette);
    }

    #[test]
    fn test_non_object_response() {
        for raw in [json!(null), json!(42), json!("text"), json!([1, 2, 3])] {
            let palette = sanitize(&raw, Mode::Light);
            assert_eq!(palette.palette_name, FALLBACK_PALETTE_NAME);
            assert_well_formed(&palette);
        }
    }

    #[test]
    fn test_wrong_types_are_repaired() {
        let raw = json!({
            "palette_name": "   ",
            "description": 7,
            "colors": [
                {"name": 5, "hex": "#abc"},
                {"name": "  Teal  ", "hex": "008080"},
                {"name": "", "hex": null},
                "#FF0000",
                {"name": "Numeric", "hex": 112233}
            ]
        });
        let palette = sanitize(&raw, Mode::Light);
        assert_eq!(palette.palette_name, FALLBACK_PALETTE_NAME);
        assert_eq!(palette.description, "");
        assert_eq!(palette.colors[0], Color::new("Color 1", "#F5F5F5"));
        assert_eq!(palette.colors[1], Color::new("Teal", "#008080"));
        assert_eq!(palette.colors[2], Color::new("Color 3", "#F5F5F5"));
        assert_eq!(palette.colors[3], Color::new("Color 4", "#F5F5F5"));
        assert_eq!(palette.colors[4], Color::new("Numeric", "#112233"));
    }

    #[test]
    fn test_response_mode_is_ignored() {
        let raw = json!({"mode": "dark", "palette_name": " Dusk ", "description": " Soft. "});
        let palette = sanitize(&raw, Mode::Light);
        assert_eq!(palette.mode, Mode::Light);
        assert_eq!(palette.palette_name, "Dusk");
        assert_eq!(palette.description, "Soft.");
    }

    #[test]
    fn test_colors_not_an_array() {
        let palette = sanitize(&json!({"colors": {"name": "A", "hex": "#112233"}}), Mode::Light);
        assert_eq!(palette.colors[0], Color::new("Color 1", "#F5F5F5"));
        assert_well_formed(&palette);
    }
}
