//! Page-level size and spacing primitives.
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser::SerializeMap};
use std::hash::{Hash, Hasher};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("invalid length '{0}'")]
    InvalidLength(String),
    #[error("invalid margin shorthand: expected 1, 2, or 4 values, got {0}")]
    InvalidShorthand(usize),
    #[error("unknown page size: {0}")]
    UnknownPageSize(String),
}

/// Parse a length with an optional unit suffix (e.g. "72pt", "1in", "25mm").
/// A bare number is read as points.
fn parse_length(input: &str) -> Result<f32, StyleError> {
    let input = input.trim();
    let (value, scale) = if let Some(v) = input.strip_suffix("pt") {
        (v, 1.0)
    } else if let Some(v) = input.strip_suffix("in") {
        (v, 72.0)
    } else if let Some(v) = input.strip_suffix("cm") {
        (v, 28.35)
    } else if let Some(v) = input.strip_suffix("mm") {
        (v, 2.835)
    } else {
        (input, 1.0)
    };
    value
        .trim()
        .parse::<f32>()
        .map(|v| v * scale)
        .map_err(|_| StyleError::InvalidLength(input.to_string()))
}

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Hash for Margins {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.top.to_bits().hash(state);
        self.right.to_bits().hash(state);
        self.bottom.to_bits().hash(state);
        self.left.to_bits().hash(state);
    }
}

impl Eq for Margins {}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Parse a CSS-style margin shorthand (1, 2, or 4 values).
    fn parse_shorthand(input: &str) -> Result<Self, StyleError> {
        let values = input
            .split_whitespace()
            .map(parse_length)
            .collect::<Result<Vec<_>, _>>()?;

        match values[..] {
            [v] => Ok(Margins::all(v)),
            [y, x] => Ok(Margins {
                top: y,
                right: x,
                bottom: y,
                left: x,
            }),
            [top, right, bottom, left] => Ok(Margins {
                top,
                right,
                bottom,
                left,
            }),
            _ => Err(StyleError::InvalidShorthand(values.len())),
        }
    }
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MarginsVisitor;
        impl<'de> de::Visitor<'de> for MarginsVisitor {
            type Value = Margins;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string like '1in' or '1in 1.5in' or a map")
            }

            fn visit_str<E>(self, value: &str) -> Result<Margins, E>
            where
                E: de::Error,
            {
                Margins::parse_shorthand(value).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Margins, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut margins = Margins::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "top" => margins.top = map.next_value()?,
                        "right" => margins.right = map.next_value()?,
                        "bottom" => margins.bottom = map.next_value()?,
                        "left" => margins.left = map.next_value()?,
                        _ => { /* ignore unknown fields */ }
                    }
                }
                Ok(margins)
            }
        }
        deserializer.deserialize_any(MarginsVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    Letter,
    A4,
    Legal,
    Custom {
        width: f32,
        height: f32,
    },
}

impl Eq for PageSize {}

impl Hash for PageSize {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            PageSize::Letter => 0u8.hash(state),
            PageSize::A4 => 1u8.hash(state),
            PageSize::Legal => 2u8.hash(state),
            PageSize::Custom { width, height } => {
                3u8.hash(state);
                width.to_bits().hash(state);
                height.to_bits().hash(state);
            }
        }
    }
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::Letter => (612.0, 792.0),
            PageSize::A4 => (595.28, 841.89),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    fn parse(s: &str) -> Result<Self, StyleError> {
        match s.to_lowercase().as_str() {
            "letter" => Ok(PageSize::Letter),
            "a4" => Ok(PageSize::A4),
            "legal" => Ok(PageSize::Legal),
            _ => Err(StyleError::UnknownPageSize(s.to_string())),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lengths_with_units() {
        assert_eq!(parse_length("72pt").unwrap(), 72.0);
        assert_eq!(parse_length("1in").unwrap(), 72.0);
        assert_eq!(parse_length("10").unwrap(), 10.0);
        assert!((parse_length("10mm").unwrap() - 28.35).abs() < 0.001);
        assert!(parse_length("wide").is_err());
    }

    #[test]
    fn parses_margin_shorthand() {
        let m = Margins::parse_shorthand("1in").unwrap();
        assert_eq!(m, Margins::all(72.0));

        let m = Margins::parse_shorthand("72pt 108pt").unwrap();
        assert_eq!(m.top, 72.0);
        assert_eq!(m.bottom, 72.0);
        assert_eq!(m.left, 108.0);
        assert_eq!(m.right, 108.0);

        let m = Margins::parse_shorthand("1in 1in 1in 1.5in").unwrap();
        assert_eq!(m.left, 108.0);

        assert!(matches!(
            Margins::parse_shorthand("1 2 3"),
            Err(StyleError::InvalidShorthand(3))
        ));
    }

    #[test]
    fn margins_deserialize_from_string_or_map() {
        let m: Margins = serde_json::from_str(r#""1in""#).unwrap();
        assert_eq!(m, Margins::all(72.0));

        let m: Margins = serde_json::from_str(r#"{ "top": 72.0, "left": 108.0 }"#).unwrap();
        assert_eq!(m.top, 72.0);
        assert_eq!(m.left, 108.0);
        assert_eq!(m.right, 0.0);
    }

    #[test]
    fn page_size_roundtrip() {
        let s: PageSize = serde_json::from_str(r#""letter""#).unwrap();
        assert_eq!(s, PageSize::Letter);

        let s: PageSize = serde_json::from_str(r#"{ "width": 612.0, "height": 100.0 }"#).unwrap();
        assert_eq!(s.dimensions_pt(), (612.0, 100.0));

        assert!(serde_json::from_str::<PageSize>(r#""tabloid""#).is_err());
    }
}
