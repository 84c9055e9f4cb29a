use std::fmt;

use crate::history::HistoryError;

/// A 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Read the first six hex digits of a short hash as `rrggbb`.
    ///
    /// # Errors
    /// [`HistoryError::MalformedHash`] if the hash is shorter than six
    /// characters or any of them is not a hex digit.
    pub fn from_short_hash(hash: &str) -> Result<Self, HistoryError> {
        let malformed = || HistoryError::MalformedHash {
            hash: hash.to_string(),
        };
        let digits = hash.get(..6).ok_or_else(malformed)?;
        let mut rgb = [0u8; 3];
        hex::decode_to_slice(digits, &mut rgb).map_err(|_| malformed())?;
        Ok(Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
        })
    }

    /// Wrap `glyph` in a truecolor foreground escape, reset right after.
    pub fn paint(self, glyph: impl fmt::Display) -> String {
        format!(
            "\x1b[38;2;{};{};{}m{}\x1b[0m",
            self.r, self.g, self.b, glyph
        )
    }
}

/// Tint `glyph` with the color encoded in `short_hash`.
pub fn colorize(short_hash: &str, glyph: char) -> Result<String, HistoryError> {
    Ok(Rgb::from_short_hash(short_hash)?.paint(glyph))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_channels_from_leading_digits() {
        let c = Rgb::from_short_hash("ff000012ab").unwrap();
        assert_eq!(c, Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn digits_past_the_sixth_are_ignored() {
        let c = Rgb::from_short_hash("ff0012ab").unwrap();
        assert_eq!(c, Rgb { r: 255, g: 0, b: 18 });
        assert_eq!(colorize("ff0012ab", 'x').unwrap(), "\x1b[38;2;255;0;18mx\x1b[0m");
    }

    #[test]
    fn colorize_wraps_in_truecolor_escape() {
        assert_eq!(
            colorize("ff000012ab", 'x').unwrap(),
            "\x1b[38;2;255;0;0mx\x1b[0m"
        );
    }

    #[test]
    fn mixed_case_hex_is_accepted() {
        assert_eq!(
            Rgb::from_short_hash("AbCdEf").unwrap(),
            Rgb { r: 0xab, g: 0xcd, b: 0xef }
        );
    }

    #[test]
    fn short_hash_is_rejected() {
        assert_eq!(
            Rgb::from_short_hash("abc12"),
            Err(HistoryError::MalformedHash {
                hash: "abc12".to_string()
            })
        );
    }

    #[test]
    fn non_hex_is_rejected() {
        assert!(colorize("zz0000", 'x').is_err());
        assert!(colorize("+f0000", 'x').is_err());
    }

    #[test]
    fn multibyte_prefix_is_rejected_not_panicking() {
        assert!(Rgb::from_short_hash("ééé").is_err());
    }
}
