use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::RaceId;
use crate::classify::{Classification, Gender, RaceType};

/// Derived fields the classifier owns; stale copies in the input are dropped
const DERIVED_FIELDS: [&str; 2] = ["type", "gender"];

/// A race record as it appears in the input results document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub raceid: RaceId,
    pub codex: Value,
    pub date: String,
    #[serde(default)]
    pub nation: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub category: String,
    pub discipline: String,
    #[serde(rename = "hasDetails")]
    pub has_details: bool,
    /// Required, but may be `null`
    #[serde(deserialize_with = "nullable")]
    pub results: Option<Vec<Value>>,
    /// Fields this tool does not interpret, carried through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A classified race with its result list removed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceInfo {
    pub raceid: RaceId,
    pub codex: Value,
    pub date: String,
    pub nation: Option<String>,
    pub location: Option<String>,
    pub category: String,
    pub discipline: String,
    #[serde(rename = "hasDetails")]
    pub has_details: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(rename = "type")]
    pub race_type: RaceType,
    pub gender: Gender,
}

impl RaceInfo {
    pub fn classification(&self) -> Classification {
        Classification {
            race_type: self.race_type,
            gender: self.gender,
        }
    }
}

/// The result list of one race, stored apart from the race info
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResults {
    pub raceid: RaceId,
    pub result: Option<Vec<Value>>,
}

/// Only the identifier of a race, for reading canonical race lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RaceRef {
    pub raceid: RaceId,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::deserialize(deserializer)
}

impl Race {
    /// Attach a classification and move the result list out of the record
    pub fn into_parts(self, classification: Classification) -> (RaceInfo, RaceResults) {
        let Race {
            raceid,
            codex,
            date,
            nation,
            location,
            category,
            discipline,
            has_details,
            results,
            mut extra,
        } = self;

        for field in DERIVED_FIELDS {
            extra.remove(field);
        }

        let info = RaceInfo {
            raceid,
            codex,
            date,
            nation,
            location,
            category,
            discipline,
            has_details,
            extra,
            race_type: classification.race_type,
            gender: classification.gender,
        };
        let results = RaceResults {
            raceid,
            result: results,
        };

        (info, results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "raceid": "22500",
            "codex": 2345,
            "date": "2019-02-23",
            "nation": "AUT",
            "location": "Seefeld",
            "category": "WSC",
            "discipline": "Men's Sprint Qual",
            "hasDetails": true,
            "results": [{"rank": 1, "fiscode": 3420586}],
            "homologation": "12345/AUT",
            "type": "DI"
        })
    }

    #[test]
    fn test_race_keeps_unknown_fields() {
        let race: Race = serde_json::from_value(sample()).unwrap();
        assert_eq!(race.raceid, RaceId(22500));
        assert_eq!(race.extra.get("homologation"), Some(&json!("12345/AUT")));
        assert_eq!(race.results.map(|r| r.len()), Some(1));
    }

    #[test]
    fn test_optional_nation_and_location() {
        let mut value = sample();
        let obj = value.as_object_mut().unwrap();
        obj.remove("nation");
        obj.insert("location".into(), Value::Null);

        let race: Race = serde_json::from_value(value).unwrap();
        assert_eq!(race.nation, None);
        assert_eq!(race.location, None);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("discipline");
        let err = serde_json::from_value::<Race>(value).unwrap_err();
        assert!(err.to_string().contains("missing field `discipline`"));
    }

    #[test]
    fn test_null_results_pass_through() {
        let mut value = sample();
        value["results"] = Value::Null;

        let race: Race = serde_json::from_value(value).unwrap();
        let (_, results) = race.into_parts(classify("Men's Sprint Qual"));
        assert_eq!(results.result, None);
        assert_eq!(
            serde_json::to_value(&results).unwrap(),
            json!({"raceid": 22500, "result": null})
        );
    }

    #[test]
    fn test_absent_results_is_still_an_error() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("results");
        let err = serde_json::from_value::<Race>(value).unwrap_err();
        assert!(err.to_string().contains("missing field `results`"));
    }

    #[test]
    fn test_into_parts_moves_results_and_replaces_derived_fields() {
        let race: Race = serde_json::from_value(sample()).unwrap();
        let classification = classify(&race.discipline);
        let (info, results) = race.into_parts(classification);

        assert_eq!(results.raceid, RaceId(22500));
        assert_eq!(
            results.result,
            Some(vec![json!({"rank": 1, "fiscode": 3420586})])
        );

        let value = serde_json::to_value(&info).unwrap();
        assert!(value.get("results").is_none());
        assert_eq!(value["type"], json!("SQ"));
        assert_eq!(value["gender"], json!("M"));
        assert_eq!(value["raceid"], json!(22500));
        assert_eq!(value["homologation"], json!("12345/AUT"));
    }

    #[test]
    fn test_info_field_order_is_stable() {
        let race: Race = serde_json::from_value(sample()).unwrap();
        let (info, _) = race.into_parts(classify("Men's Sprint Qual"));
        let text = serde_json::to_string(&info).unwrap();

        let order = [
            "\"raceid\"",
            "\"codex\"",
            "\"date\"",
            "\"nation\"",
            "\"location\"",
            "\"category\"",
            "\"discipline\"",
            "\"hasDetails\"",
            "\"homologation\"",
            "\"type\"",
            "\"gender\"",
        ];
        let positions: Vec<usize> = order.iter().map(|key| text.find(key).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", text);
    }

    #[test]
    fn test_race_ref_ignores_other_fields() {
        let race: RaceRef = serde_json::from_value(sample()).unwrap();
        assert_eq!(race.raceid, RaceId(22500));
    }
}
