//! Custom serde adapters shared by the wire models

use serde::{Deserialize, Deserializer, Serializer};

/// Distinguish an absent field from an explicit `null`
///
/// Use with `#[serde(default, deserialize_with = "double_option")]`:
/// absent gives `None`, `null` gives `Some(None)`, a value gives `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Optional id given as a JSON number or a numeric string (`7` or `"7"`)
///
/// Use with `#[serde(default, deserialize_with = "lenient_id")]`.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(id)) => Ok(Some(id)),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid id: {}", s))),
    }
}

/// `Option<i64>` microseconds <-> `"[D ]HH:MM:SS[.ffffff]"` or `null`
pub mod duration_us {
    use super::*;
    use crate::util::{format_duration, parse_duration};

    pub fn serialize<S>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(micros) => serializer.serialize_str(&format_duration(*micros)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| {
            parse_duration(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid duration: {}", s)))
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        end_time: Option<Option<String>>,
    }

    #[derive(Debug, Deserialize)]
    struct Ref {
        #[serde(default, deserialize_with = "lenient_id")]
        employee_id: Option<i64>,
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Span {
        #[serde(with = "duration_us")]
        duration: Option<i64>,
    }

    #[test]
    fn test_double_option_states() {
        let absent: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.end_time, None);

        let cleared: Patch = serde_json::from_str(r#"{"end_time": null}"#).unwrap();
        assert_eq!(cleared.end_time, Some(None));

        let set: Patch = serde_json::from_str(r#"{"end_time": "2024-01-01"}"#).unwrap();
        assert_eq!(set.end_time, Some(Some("2024-01-01".to_string())));
    }

    #[test]
    fn test_duration_serialize() {
        let json = serde_json::to_string(&Span {
            duration: Some(3_600_000_000),
        })
        .unwrap();
        assert_eq!(json, r#"{"duration":"01:00:00"}"#);

        let json = serde_json::to_string(&Span { duration: None }).unwrap();
        assert_eq!(json, r#"{"duration":null}"#);
    }

    #[test]
    fn test_duration_deserialize() {
        let span: Span = serde_json::from_str(r#"{"duration":"1 00:00:00"}"#).unwrap();
        assert_eq!(span.duration, Some(86_400_000_000));
        assert!(serde_json::from_str::<Span>(r#"{"duration":"later"}"#).is_err());
    }

    #[test]
    fn test_lenient_id_forms() {
        let r: Ref = serde_json::from_str(r#"{"employee_id": 7}"#).unwrap();
        assert_eq!(r.employee_id, Some(7));
        let r: Ref = serde_json::from_str(r#"{"employee_id": " 7"}"#).unwrap();
        assert_eq!(r.employee_id, Some(7));
        let r: Ref = serde_json::from_str(r#"{"employee_id": null}"#).unwrap();
        assert_eq!(r.employee_id, None);
        let r: Ref = serde_json::from_str("{}").unwrap();
        assert_eq!(r.employee_id, None);

        assert!(serde_json::from_str::<Ref>(r#"{"employee_id": "seven"}"#).is_err());
        assert!(serde_json::from_str::<Ref>(r#"{"employee_id": 1.5}"#).is_err());
    }
}
