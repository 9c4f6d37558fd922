//! Range split: one race info file plus results files bucketed by raceid

use anyhow::{Context, Result};
use std::fmt;
use tracing::info;

use super::{save, WrittenFile};
use crate::classify::DistanceTally;
use crate::config::Config;
use crate::document::{load_records, Decoded};
use crate::model::{Race, RaceId};
use crate::partition::partition_by_range;

#[derive(Debug, Clone)]
pub struct SplitRangesSummary {
    pub loaded: usize,
    pub skipped: usize,
    pub info: WrittenFile,
    pub ranges: Vec<WrittenFile>,
    pub overflow: Vec<RaceId>,
    pub distance: DistanceTally,
}

impl fmt::Display for SplitRangesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Races: {} (skipped {})", self.loaded, self.skipped)?;
        writeln!(
            f,
            "Distance races: DM {}, DP {}, DI {}",
            self.distance.mass_start, self.distance.pursuit, self.distance.interval
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.info)?;
        for file in &self.ranges {
            writeln!(f, "{}", file)?;
        }

        if !self.overflow.is_empty() {
            let ids: Vec<String> = self.overflow.iter().map(RaceId::to_string).collect();
            writeln!(f)?;
            writeln!(
                f,
                "Out of range, results not saved: {} ({})",
                self.overflow.len(),
                ids.join(", ")
            )?;
        }
        Ok(())
    }
}

/// Load races, sort them by raceid and write info and range-bucketed results
pub fn run_split_ranges(config: &Config) -> Result<SplitRangesSummary> {
    let spec = config.range_spec()?;

    let decoded: Decoded<Race> = load_records(
        &config.races.file,
        &config.races.key,
        config.records.on_missing_field,
    )
    .with_context(|| format!("Failed to load races from {}", config.races.file.display()))?;

    info!(
        "{} races loaded from {}",
        decoded.records.len(),
        config.races.file.display()
    );

    let loaded = decoded.total();
    let skipped = decoded.skipped.len();
    let partition = partition_by_range(decoded.records, &spec);

    let info_path = config.output_path(&config.ranges.info_file);
    let info = save(config, &info_path, &config.output.key, &partition.info)?;

    let mut ranges = Vec::with_capacity(partition.buckets.len());
    for (range, results) in &partition.buckets {
        let path = config.output_path(range.file_name());
        ranges.push(save(config, &path, &config.output.key, results)?);
    }

    Ok(SplitRangesSummary {
        loaded,
        skipped,
        info,
        ranges,
        overflow: partition.overflow,
        distance: partition.distance,
    })
}
