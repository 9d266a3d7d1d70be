//! Serde representation for `f64` fields that may be non-finite.
//!
//! JSON has no infinity or NaN, and serde_json writes them as `null`. Finite
//! values stay plain numbers; non-finite ones are written as the strings
//! `"inf"`, `"-inf"` and `"NaN"`, matching `f64`'s `Display` output.

use serde::de::{self, Deserialize, Deserializer};
use serde::Serializer;

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_sign_positive() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Repr::deserialize(deserializer)? {
        Repr::Number(n) => Ok(n),
        Repr::Text(s) => match s.as_str() {
            "inf" => Ok(f64::INFINITY),
            "-inf" => Ok(f64::NEG_INFINITY),
            "NaN" => Ok(f64::NAN),
            other => Err(de::Error::custom(format!(
                "expected a number, \"inf\", \"-inf\" or \"NaN\", found \"{}\"",
                other
            ))),
        },
    }
}
