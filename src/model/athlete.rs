use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RaceId;

/// An athlete and the races they are recorded as having entered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteRaces {
    pub fiscode: Value,
    #[serde(rename = "results")]
    pub raceids: Vec<RaceId>,
}

/// An athlete after dangling raceids have been pruned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedAthlete {
    pub fiscode: Value,
    pub races: Vec<RaceId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_athlete_raceids_normalize_mixed_types() {
        let athlete: AthleteRaces =
            serde_json::from_value(json!({"fiscode": 3420586, "results": [22500, "23500"]}))
                .unwrap();
        assert_eq!(athlete.raceids, vec![RaceId(22500), RaceId(23500)]);
    }

    #[test]
    fn test_cleaned_athlete_wire_format() {
        let athlete = CleanedAthlete {
            fiscode: json!("3420586"),
            races: vec![RaceId(22500)],
        };
        assert_eq!(
            serde_json::to_value(&athlete).unwrap(),
            json!({"fiscode": "3420586", "races": [22500]})
        );
    }
}
