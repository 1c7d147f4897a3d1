//! Lenient numeric fields: admin forms tend to submit numbers as strings.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    Str(String),
    Null,
}

pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(v) => Ok(v),
        NumberOrString::Float(v) if v.is_finite() => Ok(v.trunc() as i64),
        NumberOrString::Float(_) => Err(de::Error::custom("number out of range")),
        NumberOrString::Str(s) if s.trim().is_empty() => Ok(0),
        NumberOrString::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("expected a number, got {:?}", s))),
        NumberOrString::Null => Ok(0),
    }
}
