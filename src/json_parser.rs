/*

    Provide utilities to parse the JSON files read by this crate.

    The parser is somewhat robust, let <a> be integer or float type,
    in JSON file <a> can be given both in quotes (string) or as is.

    e.g. In JSON file both
    "maxDepth": "6" and "maxDepth": 6
    works as max_depth: Int in source code

    @date: 2 Oct, 2025
    @author: bartu
*/

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};

use crate::prelude::*;

/// Open a JSON file and deserialize it into T.
pub fn parse_json_file<T, P>(path: P) -> Result<T, Box<dyn std::error::Error>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Open file
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    debug!("Reading file from {}", path.display());

    let parsed: T = serde_json::from_reader(reader)?;
    Ok(parsed)
}

pub(crate) fn deser_int<'de, D>(deserializer: D) -> Result<Int, D::Error>
where
    D: Deserializer<'de>,
{
    /*
        Deserialize integer type given as either string or number in JSON
    */
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match s {
        serde_json::Value::Number(n) => n.as_i64()
            .and_then(|v| Int::try_from(v).ok())
            .ok_or_else(|| de::Error::custom("Invalid integer")),
        serde_json::Value::String(s) => s.trim().parse::<Int>()
            .map_err(|_| de::Error::custom("Failed to parse integer from string")),
        t => Err(de::Error::custom(format!("Expected int or string, found {t}"))),
    }
}

// Handles floats as string or number
pub(crate) fn deser_float<'de, D>(deserializer: D) -> Result<Float, D::Error>
where
    D: Deserializer<'de>,
{
    /*
        Deserialize float type given as either string or number in JSON
    */
    let s: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match s {
        serde_json::Value::Number(n) => n.as_f64()
            .map(|v| v as Float)
            .ok_or_else(|| de::Error::custom("Invalid float")),
        serde_json::Value::String(s) => s.trim().parse::<Float>()
            .map_err(|_| de::Error::custom("Failed to parse float from string")),
        t => Err(de::Error::custom(format!("Expected float or string, found {t}"))),
    }
}

pub(crate) fn deser_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct BoolVisitor;

    impl<'de> serde::de::Visitor<'de> for BoolVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a boolean or a string containing true/false")
        }

        fn visit_bool<E>(self, v: bool) -> Result<bool, E>
        where
            E: serde::de::Error,
        {
            Ok(v)
        }

        fn visit_str<E>(self, v: &str) -> Result<bool, E>
        where
            E: serde::de::Error,
        {
            match v.to_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                "1" => Ok(true),
                "0" => Ok(false),
                _ => Err(E::custom(format!("invalid bool '{}'", v))),
            }
        }

        fn visit_string<E>(self, v: String) -> Result<bool, E>
        where
            E: serde::de::Error,
        {
            self.visit_str(&v)
        }

        fn visit_u64<E>(self, v: u64) -> Result<bool, E>
        where
            E: serde::de::Error,
        {
            Ok(v != 0)
        }

        fn visit_i64<E>(self, v: i64) -> Result<bool, E>
        where
            E: serde::de::Error,
        {
            Ok(v != 0)
        }
    }

    deserializer.deserialize_any(BoolVisitor)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug)]
    struct Lenient {
        #[serde(deserialize_with = "deser_int")]
        depth: Int,
        #[serde(deserialize_with = "deser_float")]
        limit: Float,
        #[serde(deserialize_with = "deser_bool")]
        quiet: bool,
    }

    #[test]
    fn accepts_numbers_given_as_numbers() {
        let v: Lenient = serde_json::from_str(r#"{"depth": 6, "limit": 2.5, "quiet": true}"#).unwrap();
        assert_eq!(v.depth, 6);
        assert_eq!(v.limit, 2.5);
        assert!(v.quiet);
    }

    #[test]
    fn accepts_numbers_given_as_strings() {
        let v: Lenient = serde_json::from_str(r#"{"depth": "6", "limit": " 2.5", "quiet": "0"}"#).unwrap();
        assert_eq!(v.depth, 6);
        assert_eq!(v.limit, 2.5);
        assert!(!v.quiet);
    }

    #[test]
    fn float_field_accepts_integer_literal() {
        let v: Lenient = serde_json::from_str(r#"{"depth": -1, "limit": 60, "quiet": 1}"#).unwrap();
        assert_eq!(v.depth, -1);
        assert_eq!(v.limit, 60.0);
        assert!(v.quiet);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Lenient>(r#"{"depth": "six", "limit": 1, "quiet": true}"#).is_err());
        assert!(serde_json::from_str::<Lenient>(r#"{"depth": 1, "limit": [1], "quiet": true}"#).is_err());
        assert!(serde_json::from_str::<Lenient>(r#"{"depth": 1, "limit": 1, "quiet": "maybe"}"#).is_err());
        assert!(serde_json::from_str::<Lenient>(r#"{"depth": 1.5, "limit": 1, "quiet": true}"#).is_err());
    }
}
