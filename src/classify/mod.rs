//! Discipline classification
//!
//! Derives a race type and a gender tag from the free-text discipline field
//! using whole-token keyword rules. Tokens are compared case-insensitively and
//! must match exactly: "qualification" is not "qual", "ladies" is not a gender.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Race type tag written to the `type` field of every race record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RaceType {
    /// Sprint qualification
    #[serde(rename = "SQ")]
    SprintQualification,
    /// Sprint final or any other sprint round
    #[serde(rename = "SO")]
    SprintOther,
    /// Interval-start distance race
    #[serde(rename = "DI")]
    DistanceInterval,
    /// Mass start, skiathlon or marathon
    #[serde(rename = "DM")]
    DistanceMassStart,
    /// Pursuit
    #[serde(rename = "DP")]
    DistancePursuit,
    #[default]
    #[serde(rename = "")]
    Uncategorized,
}

impl RaceType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::SprintQualification => "SQ",
            Self::SprintOther => "SO",
            Self::DistanceInterval => "DI",
            Self::DistanceMassStart => "DM",
            Self::DistancePursuit => "DP",
            Self::Uncategorized => "",
        }
    }

    /// Distance races are the `D*` family
    pub fn is_distance(&self) -> bool {
        matches!(
            self,
            Self::DistanceInterval | Self::DistanceMassStart | Self::DistancePursuit
        )
    }
}

impl fmt::Display for RaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Gender tag written to the `gender` field of every race record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Men,
    #[serde(rename = "F")]
    Women,
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl Gender {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Men => "M",
            Self::Women => "F",
            Self::Unknown => "",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Outcome of classifying one discipline string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub race_type: RaceType,
    pub gender: Gender,
}

const QUALIFICATION: &str = "qual";
const MASS_START: [&str; 3] = ["mst", "skiathlon", "marathon"];
const PURSUIT: &str = "pursuit";
const SPRINT: [&str; 2] = ["sp", "sprint"];
const KILOMETRES: &str = "km";
const MEN: [&str; 3] = ["men", "men's", "mens"];
const WOMEN: [&str; 4] = ["women", "women's", "womens", "woman"];

/// Classify a discipline string such as "Men's 15 km Pursuit"
pub fn classify(discipline: &str) -> Classification {
    let tokens: Vec<String> = discipline
        .split_whitespace()
        .map(|token| token.to_lowercase())
        .collect();

    let mut race_type = RaceType::Uncategorized;
    let mut gender = Gender::Unknown;

    // First pass: qualification and mass start/pursuit, gender alongside.
    // "qual" is tested on every token, so it wins from any position.
    for token in &tokens {
        let token = token.as_str();

        if token == QUALIFICATION {
            race_type = RaceType::SprintQualification;
        }
        if race_type == RaceType::Uncategorized && MASS_START.contains(&token) {
            race_type = RaceType::DistanceMassStart;
        }
        if race_type == RaceType::Uncategorized && token == PURSUIT {
            race_type = RaceType::DistancePursuit;
        }

        if MEN.contains(&token) {
            gender = Gender::Men;
        }
        if WOMEN.contains(&token) {
            gender = Gender::Women;
        }
    }

    if race_type == RaceType::Uncategorized
        && tokens.iter().any(|t| SPRINT.contains(&t.as_str()))
    {
        race_type = RaceType::SprintOther;
    }

    if race_type == RaceType::Uncategorized && tokens.iter().any(|t| t == KILOMETRES) {
        race_type = RaceType::DistanceInterval;
    }

    Classification { race_type, gender }
}

/// Counts of distance sub-types seen during a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistanceTally {
    pub mass_start: usize,
    pub pursuit: usize,
    pub interval: usize,
}

impl DistanceTally {
    pub fn record(&mut self, race_type: RaceType) {
        match race_type {
            RaceType::DistanceMassStart => self.mass_start += 1,
            RaceType::DistancePursuit => self.pursuit += 1,
            RaceType::DistanceInterval => self.interval += 1,
            _ => {}
        }
    }

    pub fn total(&self) -> usize {
        self.mass_start + self.pursuit + self.interval
    }
}
