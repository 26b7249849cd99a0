//! Serde helpers shared by the response types

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default value
///
/// The API freely sends `null` where a string, number or list is expected.
/// Pair with `#[serde(default)]` so a missing field behaves the same way.
///
/// # Usage
/// ```rust
/// use flume_domain::utils::serde::null_as_default;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Example {
///     #[serde(default, deserialize_with = "null_as_default")]
///     name: String,
/// }
///
/// let example: Example = serde_json::from_str(r#"{"name":null}"#).unwrap();
/// assert!(example.name.is_empty());
/// ```
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        values: Vec<i64>,
    }

    #[test]
    fn test_null_and_missing_become_default() {
        let nulls: Sample = serde_json::from_str(r#"{"name":null,"values":null}"#).unwrap();
        let missing: Sample = serde_json::from_str("{}").unwrap();

        assert_eq!(nulls, Sample { name: String::new(), values: vec![] });
        assert_eq!(missing, nulls);
    }

    #[test]
    fn test_present_values_kept() {
        let sample: Sample = serde_json::from_str(r#"{"name":"x","values":[1,2]}"#).unwrap();
        assert_eq!(sample, Sample { name: "x".to_string(), values: vec![1, 2] });
    }

    #[test]
    fn test_wrong_type_still_rejected() {
        let result: std::result::Result<Sample, _> = serde_json::from_str(r#"{"name":5}"#);
        assert!(result.is_err());
    }
}
