//! Hex color canonicalization
//!
//! Only strict six-digit `#RRGGBB` is accepted. Shorthand, alpha, named
//! colors and CSS functions are rejected rather than expanded.

use once_cell::sync::Lazy;
use regex::Regex;

/// Neutral color used wherever a slot has no usable hex
pub const FALLBACK_HEX: &str = "#F5F5F5";

static CANONICAL_HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-F]{6}$").expect("valid hex regex"));

/// Canonicalize a hex string to `#RRGGBB` (uppercase).
///
/// Returns `None` for anything that is not six hex digits after trimming and
/// an optional leading `#`.
pub fn normalize(input: &str) -> Option<String> {
    // ASCII only: full Unicode mapping turns U+FB00 into "FF"
    let upper = input.trim().to_ascii_uppercase();
    if upper.is_empty() {
        return None;
    }

    let candidate = if upper.starts_with('#') {
        upper
    } else {
        format!("#{}", upper)
    };

    CANONICAL_HEX.is_match(&candidate).then_some(candidate)
}

/// True if `hex` is already in canonical form
pub fn is_canonical(hex: &str) -> bool {
    CANONICAL_HEX.is_match(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_accepts_six_digits() {
        assert_eq!(normalize("#abc123").as_deref(), Some("#ABC123"));
        assert_eq!(normalize("abc123").as_deref(), Some("#ABC123"));
        assert_eq!(normalize("  #0a0B0c \n").as_deref(), Some("#0A0B0C"));
    }

    #[test]
    fn test_normalize_rejects_everything_else() {
        assert_eq!(normalize("#abc"), None);
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("#"), None);
        assert_eq!(normalize("#GGHHII"), None);
        assert_eq!(normalize("#AABBCCDD"), None);
        assert_eq!(normalize("##AABBCC"), None);
        assert_eq!(normalize("red"), None);
        assert_eq!(normalize("rgb(1,2,3)"), None);
        assert_eq!(normalize("#AB CDEF"), None);
        assert_eq!(normalize("#\u{FB00}\u{FB00}\u{FB00}"), None);
        assert_eq!(normalize("\u{FB00}\u{FB00}\u{FB00}"), None);
    }

    #[test]
    fn test_fallback_is_canonical() {
        assert!(is_canonical(FALLBACK_HEX));
        assert!(!is_canonical("#f5f5f5"));
    }
}
