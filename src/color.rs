//! RGB colors as `Vec3` with components in `[0, 1]`.
//!
//! Hex strings map to components by dividing each byte by 255, with no
//! gamma conversion. The viewer treats the result as sRGB.

use crate::error::HelixError;
use crate::Vec3;

/// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb` into an RGB triple.
///
/// ```
/// let c = helix_field::color::parse_hex("#ff6030").unwrap();
/// assert_eq!(c.x, 1.0);
/// ```
pub fn parse_hex(s: &str) -> Result<Vec3, HelixError> {
    let digits = s.trim().trim_start_matches('#');
    let invalid = || HelixError::InvalidColor(s.to_string());

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let (r, g, b) = match digits.len() {
        6 => (
            u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?,
            u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?,
            u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?,
        ),
        3 => {
            // #abc expands to #aabbcc
            let nibble = |i: usize| {
                u8::from_str_radix(&digits[i..i + 1], 16)
                    .map(|n| n * 17)
                    .map_err(|_| invalid())
            };
            (nibble(0)?, nibble(1)?, nibble(2)?)
        }
        _ => return Err(invalid()),
    };

    Ok(from_bytes([r, g, b]))
}

/// Encode an RGB triple as sRGB bytes, the form color pickers edit.
///
/// Components are clamped to `[0, 1]` and rounded to the nearest byte.
pub fn to_bytes(color: Vec3) -> [u8; 3] {
    let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [byte(color.x), byte(color.y), byte(color.z)]
}

/// Inverse of [`to_bytes`]: each byte divided by 255.
pub fn from_bytes([r, g, b]: [u8; 3]) -> Vec3 {
    Vec3::new(r as f32, g as f32, b as f32) / 255.0
}

/// Format an RGB triple as lowercase `#rrggbb`.
pub fn to_hex(color: Vec3) -> String {
    let [r, g, b] = to_bytes(color);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Linear blend from `a` (t = 0) to `b` (t = 1).
#[inline]
pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// True when every component lies in `[0, 1]`.
#[inline]
pub fn is_unit_rgb(color: Vec3) -> bool {
    color.cmpge(Vec3::ZERO).all() && color.cmple(Vec3::ONE).all()
}

/// Serde adapter storing a `Vec3` color as a hex string.
pub(crate) mod hex_serde {
    use crate::Vec3;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Vec3, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec3, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}
