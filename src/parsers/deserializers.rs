use chrono::{DateTime, NaiveDateTime};
use serde::de::Error;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

use crate::models::{BRAND_SEPARATOR, BrandType};
use crate::utils::time::parse_local_datetime;

/// Catalog timestamp format
const DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Custom deserializer for optional timestamps
///
/// Accepts `null`, epoch milliseconds, `yyyy/MM/dd[ HH:mm:ss]` or RFC 3339
/// strings. An empty string is treated as no value.
pub fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            let ms = n.as_i64().ok_or_else(|| D::Error::custom("invalid timestamp"))?;
            DateTime::from_timestamp_millis(ms)
                .map(|dt| Some(dt.naive_utc()))
                .ok_or_else(|| Error::custom("timestamp out of range"))
        }
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => parse_local_datetime(&s)
            .map(Some)
            .ok_or_else(|| Error::custom(format!("invalid date: {}", s))),
        _ => Err(Error::custom("date must be a number, string or null")),
    }
}

pub fn serialize_optional_datetime<S>(
    value: &Option<NaiveDateTime>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(dt) => serializer.serialize_str(&dt.format(DATETIME_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

/// Custom deserializer for brand sets
///
/// Accepts a raw bitmask, an array of flag names (`"MILLION"`) or display
/// labels (`"ミリオンライブ！"`), or one combined display string.
pub fn deserialize_brands<'de, D>(deserializer: D) -> Result<BrandType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(BrandType::empty()),
        Value::Number(n) => {
            let bits = n
                .as_u64()
                .and_then(|b| u32::try_from(b).ok())
                .ok_or_else(|| D::Error::custom("invalid brand bitmask"))?;
            BrandType::from_bits(bits)
                .ok_or_else(|| Error::custom(format!("unknown brand bits in {:#x}", bits)))
        }
        Value::Array(items) => items.iter().try_fold(BrandType::empty(), |acc, item| {
            let name = item.as_str().ok_or_else(|| D::Error::custom("brand must be a string"))?;
            parse_brand_name::<D::Error>(name).map(|brand| acc | brand)
        }),
        Value::String(s) => s
            .split(BRAND_SEPARATOR)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .try_fold(BrandType::empty(), |acc, name| {
                parse_brand_name::<D::Error>(name).map(|brand| acc | brand)
            }),
        _ => Err(Error::custom("brands must be a number, array or string")),
    }
}

/// Flag name (case-insensitive) or exact display label
fn parse_brand_name<E: Error>(name: &str) -> Result<BrandType, E> {
    BrandType::from_name(&name.to_ascii_uppercase())
        .or_else(|| BrandType::from_display(name))
        .ok_or_else(|| E::custom(format!("unknown brand: {}", name)))
}

/// Serialize brands as a list of display labels
pub fn serialize_brands<S>(value: &BrandType, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let labels: Vec<&str> = value.labels().collect();
    let mut seq = serializer.serialize_seq(Some(labels.len()))?;
    for label in labels {
        seq.serialize_element(label)?;
    }
    seq.end()
}
