//! Typed lookups into a request's additional-data bag.
//!
//! Keys match case-insensitively. Values may arrive as JSON numbers/booleans
//! or as strings; anything that does not parse is treated as absent.

use rust_decimal::Decimal;
use serde_json::Value;

use coverhub_carriers::AdditionalData;

fn lookup<'a>(data: &'a AdditionalData, key: &str) -> Option<&'a Value> {
    data.get(key).or_else(|| {
        data.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

pub(crate) fn decimal(data: &AdditionalData, key: &str) -> Option<Decimal> {
    match lookup(data, key)? {
        Value::Number(n) => n.to_string().parse().ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn count(data: &AdditionalData, key: &str) -> Option<u32> {
    match lookup(data, key)? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn flag(data: &AdditionalData, key: &str) -> Option<bool> {
    match lookup(data, key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn text(data: &AdditionalData, key: &str) -> Option<String> {
    match lookup(data, key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
