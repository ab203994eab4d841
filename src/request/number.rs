use super::UsageError;

/// Reads a numeric parameter the way the scripting host converts strings to numbers.
///
/// Surrounding whitespace is ignored and an empty string reads as zero. Decimal
/// and exponent notations are accepted, as are the `0x`, `0o` and `0b` integer
/// prefixes. Returns `None` for anything else.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();

    if text.is_empty() {
        return Some(0.0);
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };

    if let Some(radix) = radix {
        return u64::from_str_radix(&text[2..], radix)
            .ok()
            .map(|v| v as f64);
    }

    // Rust also accepts `inf` and `nan` spellings the host would reject.
    if !text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }

    text.parse().ok()
}

/// Reads an integer grid coordinate.
///
/// `position` is the 1-based position of the parameter, used for error reporting.
pub(crate) fn parse_coordinate(
    command: &str,
    position: usize,
    text: &str,
) -> Result<i32, UsageError> {
    parse_number(text)
        .filter(|v| v.fract() == 0.0 && *v >= i32::MIN as f64 && *v <= i32::MAX as f64)
        .map(|v| v as i32)
        .ok_or_else(|| UsageError::InvalidNumber {
            command: command.to_string(),
            position,
            value: text.to_string(),
        })
}

/// Reads a non-negative integer radius.
pub(crate) fn parse_radius(command: &str, position: usize, text: &str) -> Result<u16, UsageError> {
    let value = parse_coordinate(command, position, text)?;

    u16::try_from(value).map_err(|_| UsageError::InvalidRadius {
        command: command.to_string(),
        position,
        value: text.to_string(),
    })
}
