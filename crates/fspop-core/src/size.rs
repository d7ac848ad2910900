//! Parsing of human-entered byte sizes such as `512`, `10m` or `1T`.

use fspop_util::errors::FspopError;

const KIB: u64 = 1024;

/// Parse a size with an optional case-insensitive `k`, `m`, `g` or `t`
/// suffix (powers of 1024).
///
/// The numeric part is decimal, or hexadecimal with a `0x` prefix. Signs,
/// whitespace inside the number, unknown suffixes and values that overflow
/// `u64` are rejected.
pub fn parse_size(input: &str) -> Result<u64, FspopError> {
    let invalid = || FspopError::InvalidSize {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let (digits, multiplier) = match trimmed.chars().last() {
        Some(c) => match suffix_multiplier(c) {
            Some(m) => (&trimmed[..trimmed.len() - 1], m),
            None => (trimmed, 1),
        },
        None => return Err(invalid()),
    };

    let value = parse_unsigned(digits).ok_or_else(invalid)?;
    value.checked_mul(multiplier).ok_or_else(invalid)
}

fn suffix_multiplier(c: char) -> Option<u64> {
    match c.to_ascii_lowercase() {
        'k' => Some(KIB),
        'm' => Some(KIB * KIB),
        'g' => Some(KIB * KIB * KIB),
        't' => Some(KIB * KIB * KIB * KIB),
        _ => None,
    }
}

fn parse_unsigned(digits: &str) -> Option<u64> {
    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return u64::from_str_radix(hex, 16).ok();
    }
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
