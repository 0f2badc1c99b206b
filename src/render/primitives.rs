use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rgb` or `#rrggbb`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidConfig(format!("invalid hex color `{input}`"));
        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |hex: &str| -> ChartResult<f64> {
            let value = u8::from_str_radix(hex, 16).map_err(|_| invalid())?;
            Ok(f64::from(value) / 255.0)
        };

        match digits.len() {
            3 => {
                let expand = |index: usize| digits[index..=index].repeat(2);
                Ok(Self::rgb(
                    channel(&expand(0))?,
                    channel(&expand(1))?,
                    channel(&expand(2))?,
                ))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(
            Color::from_hex("#fff").expect("short"),
            Color::rgb(1.0, 1.0, 1.0)
        );
        let navy = Color::from_hex("#000066").expect("long");
        assert_eq!(navy.red, 0.0);
        assert!((navy.blue - 102.0 / 255.0).abs() <= 1e-12);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("000066").is_err());
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }
}
