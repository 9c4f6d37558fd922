use std::fmt;

use tracing::warn;

use super::classify_race;
use crate::classify::DistanceTally;
use crate::error::{ErrorCode, RaceDbError, Result};
use crate::model::{Race, RaceId, RaceInfo, RaceResults};

/// Default range boundaries for splitting result lists by raceid
pub const DEFAULT_BOUNDARIES: [u32; 8] = [0, 23000, 26000, 29000, 32000, 35000, 38000, 41000];

/// A half-open raceid range; `end == None` means unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceRange {
    pub start: u32,
    pub end: Option<u32>,
}

impl RaceRange {
    pub fn contains(&self, id: RaceId) -> bool {
        id.get() >= self.start && self.end.map_or(true, |end| id.get() < end)
    }

    pub fn file_name(&self) -> String {
        match self.end {
            Some(end) => format!("races-results-{}-{}.json", self.start, end - 1),
            None => format!("races-results-{}-up.json", self.start),
        }
    }
}

impl fmt::Display for RaceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "[{}, {})", self.start, end),
            None => write!(f, "[{}, ...)", self.start),
        }
    }
}

/// Validated range layout: consecutive boundaries form the buckets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSpec {
    ranges: Vec<RaceRange>,
}

impl RangeSpec {
    /// Build a layout from strictly increasing boundaries
    ///
    /// With `open_ended`, raceids at or above the last boundary get a final
    /// unbounded bucket instead of being reported as overflow.
    pub fn new(boundaries: &[u32], open_ended: bool) -> Result<Self> {
        if boundaries.len() < 2 {
            return Err(RaceDbError::validation_with_code(
                ErrorCode::VALIDATION_INVALID_BOUNDARIES,
                format!(
                    "at least two range boundaries are required, got {}",
                    boundaries.len()
                ),
                Some("boundaries".to_string()),
            ));
        }

        if let Some(pair) = boundaries.windows(2).find(|w| w[0] >= w[1]) {
            return Err(RaceDbError::validation_with_code(
                ErrorCode::VALIDATION_INVALID_BOUNDARIES,
                format!(
                    "boundaries must be strictly increasing, but {} is followed by {}",
                    pair[0], pair[1]
                ),
                Some("boundaries".to_string()),
            ));
        }

        let mut ranges: Vec<RaceRange> = boundaries
            .windows(2)
            .map(|w| RaceRange {
                start: w[0],
                end: Some(w[1]),
            })
            .collect();

        if open_ended {
            if let Some(&last) = boundaries.last() {
                ranges.push(RaceRange {
                    start: last,
                    end: None,
                });
            }
        }

        Ok(Self { ranges })
    }

    pub fn ranges(&self) -> &[RaceRange] {
        &self.ranges
    }

    /// Index of the range holding `id`, if any
    pub fn locate(&self, id: RaceId) -> Option<usize> {
        self.ranges.iter().position(|range| range.contains(id))
    }
}

impl Default for RangeSpec {
    fn default() -> Self {
        let ranges = DEFAULT_BOUNDARIES
            .windows(2)
            .map(|w| RaceRange {
                start: w[0],
                end: Some(w[1]),
            })
            .collect();
        Self { ranges }
    }
}

/// All races sorted by raceid, with result lists bucketed by range
#[derive(Debug, Clone, Default)]
pub struct RangePartition {
    pub info: Vec<RaceInfo>,
    pub buckets: Vec<(RaceRange, Vec<RaceResults>)>,
    /// Raceids that fell outside every range; their results are not written
    pub overflow: Vec<RaceId>,
    pub distance: DistanceTally,
}

impl RangePartition {
    /// Number of result lists placed in a range bucket
    pub fn bucketed(&self) -> usize {
        self.buckets.iter().map(|(_, results)| results.len()).sum()
    }
}

/// Sort races by raceid, classify them and bucket their results by range
pub fn partition_by_range(mut races: Vec<Race>, spec: &RangeSpec) -> RangePartition {
    races.sort_by_key(|race| race.raceid);

    let mut partition = RangePartition {
        info: Vec::with_capacity(races.len()),
        buckets: spec.ranges().iter().map(|r| (*r, Vec::new())).collect(),
        ..Default::default()
    };

    for race in races {
        let (info, results) = classify_race(race, &mut partition.distance);

        match spec.locate(results.raceid) {
            Some(index) => partition.buckets[index].1.push(results),
            None => {
                warn!("Raceid {} is outside every configured range", results.raceid);
                partition.overflow.push(results.raceid);
            }
        }

        partition.info.push(info);
    }

    partition
}
