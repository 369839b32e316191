//! Lenient parsing of likelihood/severity ratings.
//!
//! Storage drivers and form state hand ratings over as integers, floats, or strings.
//! They are coerced to integers here so the scoring code only ever sees `i64`.

use core::fmt::Formatter;
use serde::de::{self, Deserializer, Visitor};

pub fn deserialize_rating<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(RatingVisitor)
}

struct RatingVisitor;

impl Visitor<'_> for RatingVisitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> core::fmt::Result {
        formatter.write_str("an integer rating, or a string containing one")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(v)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v).map_err(|_err| E::custom(format!("rating {v} is too large")))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        float_to_rating(v).ok_or_else(|| E::custom(format!("rating {v} is not a whole number")))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        let trimmed = v.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(value);
        }

        trimmed
            .parse::<f64>()
            .ok()
            .and_then(float_to_rating)
            .ok_or_else(|| E::custom(format!("invalid rating: '{v}'")))
    }
}

#[expect(clippy::cast_possible_truncation, reason = "value is integral and range-checked first")]
fn float_to_rating(v: f64) -> Option<i64> {
    #[expect(clippy::cast_precision_loss, reason = "only used as a coarse bound")]
    let in_range = v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64;
    in_range.then(|| v as i64)
}
