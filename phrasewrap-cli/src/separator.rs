//! Decoding of separator arguments
//!
//! Invisible separators are awkward to type, so besides a literal
//! character the CLI accepts `\u{200B}`, `\u200B` and `U+200B`.

use crate::error::CliError;

/// Decode a separator argument into the character it names
pub fn decode_separator(arg: &str) -> Result<String, CliError> {
    let hex = arg
        .strip_prefix("\\u{")
        .and_then(|rest| rest.strip_suffix('}'))
        .or_else(|| arg.strip_prefix("\\u"))
        .or_else(|| arg.strip_prefix("U+"))
        .or_else(|| arg.strip_prefix("u+"));

    let Some(hex) = hex else {
        return Ok(arg.to_string());
    };

    u32::from_str_radix(hex, 16)
        .ok()
        .and_then(char::from_u32)
        .map(String::from)
        .ok_or_else(|| CliError::InvalidSeparator(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_separator() {
        assert_eq!(decode_separator("-").unwrap(), "-");
        assert_eq!(decode_separator("\u{200B}").unwrap(), "\u{200B}");
    }

    #[test]
    fn test_escape_forms() {
        for arg in ["\\u{200B}", "\\u200B", "U+200B", "u+200b"] {
            assert_eq!(decode_separator(arg).unwrap(), "\u{200B}", "{arg}");
        }
    }

    #[test]
    fn test_bad_escape() {
        assert!(decode_separator("\\u{zz}").is_err());
        assert!(decode_separator("U+D800").is_err());
    }

    #[test]
    fn test_multi_character_literal_passes_through() {
        // Length is checked by the adapter, not here
        assert_eq!(decode_separator("ab").unwrap(), "ab");
    }
}
