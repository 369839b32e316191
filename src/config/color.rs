use core::fmt::{Display, Formatter as FmtFormatter, Result as FmtResult};
use palette::Srgb;
use serde::{Deserialize, Serialize};

/// A display color for a risk badge, deserialized from:
/// - Hex strings: "#FF0000", "#F00", "FF0000", "F00"
/// - Named colors: "red", "green", "orange", etc. (SVG/CSS3 color names)
/// - RGB structs: { red: 255, green: 0, blue: 0 }
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub Srgb<u8>);

impl Color {
    /// Look up an SVG/CSS3 color name.
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        palette::named::from_str(name).map(|c| Self(Srgb::from_format(c)))
    }

    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.0.red, self.0.green, self.0.blue)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut FmtFormatter<'_>) -> FmtResult {
        let (r, g, b) = self.rgb();
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        struct ColorVisitor;

        impl<'de> serde::de::Visitor<'de> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, formatter: &mut FmtFormatter) -> FmtResult {
                formatter.write_str("a hex color string like \"#FF0000\", a named color like \"red\", or an RGB struct")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                if let Ok(color) = v.parse::<Srgb<u8>>() {
                    return Ok(Color(color));
                }

                Color::named(v).ok_or_else(|| {
                    E::custom(format!(
                        "invalid color: '{v}' (must be a hex color like '#FF0000' or a named color like 'red')"
                    ))
                })
            }

            fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
            where
                M: serde::de::MapAccess<'de>,
            {
                Srgb::<u8>::deserialize(serde::de::value::MapAccessDeserializer::new(map)).map(Color)
            }
        }

        deserializer.deserialize_any(ColorVisitor)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        let c: Color = serde_yaml::from_str("\"#FFA500\"").unwrap();
        assert_eq!(c.rgb(), (255, 165, 0));
    }

    #[test]
    fn test_named() {
        let c: Color = serde_yaml::from_str("orange").unwrap();
        assert_eq!(c.rgb(), (255, 165, 0));
    }

    #[test]
    fn test_rgb_map() {
        let c: Color = serde_yaml::from_str("{ red: 1, green: 2, blue: 3 }").unwrap();
        assert_eq!(c.rgb(), (1, 2, 3));
    }

    #[test]
    fn test_invalid() {
        let result: Result<Color, _> = serde_yaml::from_str("not-a-color");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(Color::named("red").unwrap().to_string(), "#FF0000");
    }
}
