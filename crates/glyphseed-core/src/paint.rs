//! Colour tokens fed into generated markup.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PaintError;
use crate::markup::escape_attr;
use crate::palette;
use crate::seed::Seed;

/// The colour a generator paints with.
///
/// The default is [`Paint::CurrentColor`], which renders the `currentColor`
/// token so the host page's foreground colour applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Paint {
    /// Inherit the container's foreground colour.
    #[default]
    CurrentColor,
    /// A lowercase `#rgb` or `#rrggbb` colour.
    Hex(String),
    /// Any other token, passed through (escaped) as-is.
    Token(String),
}

impl Paint {
    /// The palette colour assigned to a seed.
    pub fn from_seed(seed: impl Into<Seed>) -> Self {
        Paint::Hex(palette::pick_color(seed).hex.to_string())
    }

    /// Parse a token, rejecting anything that does not look like a colour.
    ///
    /// Accepts `currentColor`, `#rgb`/`#rrggbb`, palette colour names
    /// (resolved to their hex), bare CSS keywords like `teal`, and functional
    /// forms like `rgb(10, 20, 30)`.
    pub fn parse_strict(token: &str) -> Result<Self, PaintError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(PaintError::Empty);
        }
        if token.eq_ignore_ascii_case("currentcolor") {
            return Ok(Paint::CurrentColor);
        }
        if token.starts_with('#') {
            return if is_hex_color(token) {
                Ok(Paint::Hex(token.to_ascii_lowercase()))
            } else {
                Err(PaintError::InvalidHex(token.to_string()))
            };
        }
        if let Some(color) = palette::get_color_by_name(token) {
            return Ok(Paint::Hex(color.hex.to_string()));
        }
        if token.chars().all(|c| c.is_ascii_alphabetic()) || is_functional(token) {
            return Ok(Paint::Token(token.to_string()));
        }
        Err(PaintError::Unrecognised(token.to_string()))
    }

    /// The escaped attribute value for this paint.
    pub fn as_attr(&self) -> String {
        match self {
            Paint::CurrentColor => "currentColor".to_string(),
            Paint::Hex(hex) => escape_attr(hex),
            Paint::Token(token) => escape_attr(token),
        }
    }
}

impl From<&str> for Paint {
    /// Lenient conversion: never fails, empty means `currentColor`.
    fn from(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() || token.eq_ignore_ascii_case("currentcolor") {
            Paint::CurrentColor
        } else if is_hex_color(token) {
            Paint::Hex(token.to_ascii_lowercase())
        } else {
            Paint::Token(token.to_string())
        }
    }
}

impl From<String> for Paint {
    fn from(token: String) -> Self {
        Paint::from(token.as_str())
    }
}

impl From<Paint> for String {
    fn from(paint: Paint) -> Self {
        match paint {
            Paint::CurrentColor => "currentColor".to_string(),
            Paint::Hex(value) | Paint::Token(value) => value,
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paint::CurrentColor => f.write_str("currentColor"),
            Paint::Hex(value) | Paint::Token(value) => f.write_str(value),
        }
    }
}

fn is_hex_color(token: &str) -> bool {
    let Some(digits) = token.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_functional(token: &str) -> bool {
    let Some((name, rest)) = token.split_once('(') else {
        return false;
    };
    let Some(args) = rest.strip_suffix(')') else {
        return false;
    };
    !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphabetic())
        && args
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%' | ' ' | '-' | '/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_conversion() {
        assert_eq!(Paint::from(""), Paint::CurrentColor);
        assert_eq!(Paint::from("currentColor"), Paint::CurrentColor);
        assert_eq!(Paint::from("#ABCDEF"), Paint::Hex("#abcdef".to_string()));
        assert_eq!(Paint::from("#zz"), Paint::Token("#zz".to_string()));
    }

    #[test]
    fn test_strict_parsing() {
        assert_eq!(Paint::parse_strict("#FFF"), Ok(Paint::Hex("#fff".to_string())));
        assert_eq!(Paint::parse_strict("teal"), Ok(Paint::Token("teal".to_string())));
        assert_eq!(
            Paint::parse_strict("Jade"),
            Ok(Paint::Hex("#00a86b".to_string()))
        );
        assert!(Paint::parse_strict("rgb(1, 2, 3)").is_ok());
        assert_eq!(Paint::parse_strict("  "), Err(PaintError::Empty));
        assert!(matches!(
            Paint::parse_strict("#12345"),
            Err(PaintError::InvalidHex(_))
        ));
        assert!(matches!(
            Paint::parse_strict("\"><script>"),
            Err(PaintError::Unrecognised(_))
        ));
    }

    #[test]
    fn test_attr_is_escaped() {
        let paint = Paint::from("a\"b<c");
        assert_eq!(paint.as_attr(), "a&quot;b&lt;c");
    }

    #[test]
    fn test_serde_round_trip_through_string() {
        let json = serde_json::to_string(&Paint::CurrentColor).unwrap();
        assert_eq!(json, "\"currentColor\"");
        let paint: Paint = serde_json::from_str("\"#00A86B\"").unwrap();
        assert_eq!(paint, Paint::Hex("#00a86b".to_string()));
    }

    #[test]
    fn test_from_seed_uses_palette() {
        assert_eq!(Paint::from_seed("jaskier"), Paint::Hex("#00a86b".to_string()));
    }
}
