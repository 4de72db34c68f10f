use serde::ser::{Error as _, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;

/// A single cell of a parsed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Integer(i64),
    /// An integer literal outside the `i64` range, kept as canonical digits
    /// (optional `-`, no leading zeros) and emitted as an exact JSON number.
    BigInteger(String),
    Text(String),
}

impl FieldValue {
    /// Applies the coercion rule: the whole raw cell must be an integer
    /// literal (`-?[0-9]+`), otherwise it is kept verbatim as text. No
    /// trimming is done, and `""` stays text.
    pub fn coerce(raw: &str) -> Self {
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return FieldValue::Text(raw.to_string());
        }

        if let Ok(n) = raw.parse::<i64>() {
            return FieldValue::Integer(n);
        }

        // Anything that overflows i64 has a non-zero digit.
        let significant = digits.trim_start_matches('0');
        if negative {
            FieldValue::BigInteger(format!("-{}", significant))
        } else {
            FieldValue::BigInteger(significant.to_string())
        }
    }

    pub fn is_number(&self) -> bool {
        !matches!(self, FieldValue::Text(_))
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Integer(n) => serializer.serialize_i64(*n),
            FieldValue::BigInteger(digits) => RawValue::from_string(digits.clone())
                .map_err(S::Error::custom)?
                .serialize(serializer),
            FieldValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::BigInteger(digits) => f.write_str(digits),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}
