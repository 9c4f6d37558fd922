use std::collections::BTreeMap;
use std::fmt;

use super::classify_race;
use crate::classify::{Classification, DistanceTally, Gender, RaceType};
use crate::model::{Race, RaceInfo, RaceResults};

/// Output bucket for the category partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bucket {
    SprintQualMen,
    SprintQualWomen,
    SprintOther,
    DistanceMen,
    DistanceWomen,
    Other,
}

impl Bucket {
    pub const ALL: [Bucket; 6] = [
        Bucket::SprintQualMen,
        Bucket::SprintQualWomen,
        Bucket::SprintOther,
        Bucket::DistanceMen,
        Bucket::DistanceWomen,
        Bucket::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SprintQualMen => "SQ-M",
            Self::SprintQualWomen => "SQ-F",
            Self::SprintOther => "SO",
            Self::DistanceMen => "D-M",
            Self::DistanceWomen => "D-F",
            Self::Other => "other",
        }
    }

    /// Human-readable name used in the run summary
    pub fn title(&self) -> &'static str {
        match self {
            Self::SprintQualMen => "Sprint Qual M",
            Self::SprintQualWomen => "Sprint Qual F",
            Self::SprintOther => "Sprint Other",
            Self::DistanceMen => "Distance M",
            Self::DistanceWomen => "Distance F",
            Self::Other => "Other",
        }
    }

    pub fn file_name(&self) -> String {
        format!("races-info-{}.json", self.label())
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pick the bucket for a classification
///
/// Sprint qualifications and distance races without a gender go to `Other`.
pub fn route(classification: &Classification) -> Bucket {
    let Classification { race_type, gender } = *classification;

    match (race_type, gender) {
        (RaceType::Uncategorized, _) => Bucket::Other,
        (RaceType::SprintQualification, Gender::Men) => Bucket::SprintQualMen,
        (RaceType::SprintQualification, Gender::Women) => Bucket::SprintQualWomen,
        (RaceType::SprintQualification, Gender::Unknown) => Bucket::Other,
        (RaceType::SprintOther, _) => Bucket::SprintOther,
        (t, Gender::Men) if t.is_distance() => Bucket::DistanceMen,
        (t, Gender::Women) if t.is_distance() => Bucket::DistanceWomen,
        _ => Bucket::Other,
    }
}

/// Races grouped by category plus the detached result lists
#[derive(Debug, Clone, Default)]
pub struct CategoryPartition {
    buckets: BTreeMap<Bucket, Vec<RaceInfo>>,
    pub results: Vec<RaceResults>,
    pub distance: DistanceTally,
}

impl CategoryPartition {
    pub fn bucket(&self, bucket: Bucket) -> &[RaceInfo] {
        self.buckets.get(&bucket).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every bucket in output order, including empty ones
    pub fn buckets(&self) -> impl Iterator<Item = (Bucket, &[RaceInfo])> + '_ {
        Bucket::ALL.into_iter().map(|b| (b, self.bucket(b)))
    }

    /// Number of races placed in any bucket
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Classify every race and place it in exactly one category bucket
pub fn partition_by_category(races: Vec<Race>) -> CategoryPartition {
    let mut partition = CategoryPartition {
        results: Vec::with_capacity(races.len()),
        ..Default::default()
    };

    for race in races {
        let (info, results) = classify_race(race, &mut partition.distance);
        let bucket = route(&info.classification());
        partition.buckets.entry(bucket).or_default().push(info);
        partition.results.push(results);
    }

    partition
}
