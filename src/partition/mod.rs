//! Race partitioning
//!
//! Two independent strategies split a classified race list for output:
//! by race category (type and gender) or by fixed raceid ranges. Both are
//! pure functions that take ownership of the races and return a partition
//! struct; writing the files is left to the caller.

pub mod category;
pub mod range;

pub use category::{partition_by_category, route, Bucket, CategoryPartition};
pub use range::{partition_by_range, RaceRange, RangePartition, RangeSpec};

use crate::classify::{classify, DistanceTally};
use crate::model::{Race, RaceInfo, RaceResults};

/// Classify one race and split it into its info record and result list
pub fn classify_race(race: Race, tally: &mut DistanceTally) -> (RaceInfo, RaceResults) {
    let classification = classify(&race.discipline);
    tally.record(classification.race_type);
    race.into_parts(classification)
}
