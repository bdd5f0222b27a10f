use crate::{color::Rgb, error::LampError};

/// Parse a `RRGGBB` hex string into raw channel values.
///
/// Exactly six ASCII hex digits are accepted, upper or lower case.
pub fn parse_color(color: &str) -> Result<Rgb, LampError> {
    let bytes = color.as_bytes();
    if bytes.len() != 6 || !bytes.iter().all(u8::is_ascii_hexdigit) {
        return Err(LampError::InvalidColorFormat);
    }

    Ok(Rgb {
        r: hex_byte(bytes[0], bytes[1]),
        g: hex_byte(bytes[2], bytes[3]),
        b: hex_byte(bytes[4], bytes[5]),
    })
}

/// Scale a raw channel by a brightness factor.
///
/// Rounds half up (`floor(raw * brightness + 0.5)`) and saturates to the
/// byte range. Negative and NaN products map to zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_channel(raw: u8, brightness: f64) -> u8 {
    let scaled = libm::floor(f64::from(raw) * brightness + 0.5);
    // Float to int casts saturate, NaN becomes 0
    scaled as u8
}

const fn hex_byte(high: u8, low: u8) -> u8 {
    (hex_digit(high) << 4) | hex_digit(low)
}

const fn hex_digit(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}
