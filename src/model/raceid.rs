use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric race identifier, the join key between race and athlete documents
///
/// Input documents hold raceids either as integers or as decimal strings;
/// both normalize to the same value here and are always written as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RaceId(pub u32);

impl RaceId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RaceId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(RaceId)
    }
}

struct RaceIdVisitor;

impl<'de> Visitor<'de> for RaceIdVisitor {
    type Value = RaceId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a raceid as an integer or a numeric string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RaceId, E> {
        u32::try_from(v)
            .map(RaceId)
            .map_err(|_| E::custom(format!("raceid {} is out of range", v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RaceId, E> {
        u32::try_from(v)
            .map(RaceId)
            .map_err(|_| E::custom(format!("raceid {} is out of range", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RaceId, E> {
        Err(E::custom(format!("invalid raceid {}: expected an integer", v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RaceId, E> {
        v.parse()
            .map_err(|_| E::custom(format!("invalid raceid {:?}: expected an integer", v)))
    }
}

impl<'de> Deserialize<'de> for RaceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RaceIdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_integer_and_numeric_string() {
        let ids: Vec<RaceId> = serde_json::from_str(r#"[22500, "23500", " 41000 "]"#).unwrap();
        assert_eq!(ids, vec![RaceId(22500), RaceId(23500), RaceId(41000)]);
    }

    #[test]
    fn test_always_serializes_as_integer() {
        let id: RaceId = serde_json::from_str("\"39155\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "39155");
    }

    #[test]
    fn test_rejects_non_numeric_values() {
        let err = serde_json::from_str::<RaceId>("\"abc\"").unwrap_err();
        assert!(err.to_string().contains("invalid raceid"));

        assert!(serde_json::from_str::<RaceId>("-5").is_err());
        assert!(serde_json::from_str::<RaceId>("12.5").is_err());
        assert!(serde_json::from_str::<RaceId>("true").is_err());
        assert!(serde_json::from_str::<RaceId>("null").is_err());
    }
}
