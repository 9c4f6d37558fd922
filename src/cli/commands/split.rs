//! Category split: one race info file per bucket plus one results file

use anyhow::{Context, Result};
use std::fmt;
use tracing::info;

use super::{save, WrittenFile};
use crate::classify::DistanceTally;
use crate::config::Config;
use crate::document::{load_records, Decoded};
use crate::model::Race;
use crate::partition::{partition_by_category, Bucket, CategoryPartition};

/// File holding every race's result list
pub const RESULTS_FILE_NAME: &str = "races-results.json";

#[derive(Debug, Clone)]
pub struct SplitSummary {
    pub loaded: usize,
    pub skipped: usize,
    pub buckets: Vec<(Bucket, usize)>,
    pub results: usize,
    pub distance: DistanceTally,
    pub files: Vec<WrittenFile>,
}

impl SplitSummary {
    fn new(decoded_total: usize, skipped: usize, partition: &CategoryPartition) -> Self {
        Self {
            loaded: decoded_total,
            skipped,
            buckets: partition
                .buckets()
                .map(|(bucket, races)| (bucket, races.len()))
                .collect(),
            results: partition.results.len(),
            distance: partition.distance,
            files: Vec::new(),
        }
    }

    pub fn count(&self, bucket: Bucket) -> usize {
        self.buckets
            .iter()
            .find(|(b, _)| *b == bucket)
            .map_or(0, |(_, n)| *n)
    }

    pub fn bucketed(&self) -> usize {
        self.buckets.iter().map(|(_, n)| n).sum()
    }
}

impl fmt::Display for SplitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (bucket, count) in &self.buckets {
            writeln!(f, "{:<15}{}", format!("{}:", bucket.title()), count)?;
        }
        writeln!(f, "{:<15}{}", "Total:", self.bucketed())?;

        let distance_gendered =
            self.count(Bucket::DistanceMen) + self.count(Bucket::DistanceWomen);
        writeln!(f)?;
        writeln!(f, "Distance races:")?;
        writeln!(f, "DM:  {}", self.distance.mass_start)?;
        writeln!(f, "DP:  {}", self.distance.pursuit)?;
        writeln!(f, "DI:  {}", self.distance.interval)?;
        writeln!(
            f,
            "Tot: {} (Distance M + Distance F: {})",
            self.distance.total(),
            distance_gendered
        )?;

        writeln!(f)?;
        writeln!(f, "races-results: {}", self.results)?;
        writeln!(f, "Skipped records: {} of {}", self.skipped, self.loaded)?;

        writeln!(f)?;
        for file in &self.files {
            writeln!(f, "{}", file)?;
        }
        Ok(())
    }
}

/// Load races, partition them by category and write every bucket
pub fn run_split(config: &Config) -> Result<SplitSummary> {
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

    let total = decoded.total();
    let skipped = decoded.skipped.len();
    let partition = partition_by_category(decoded.records);
    let mut summary = SplitSummary::new(total, skipped, &partition);

    for (bucket, races) in partition.buckets() {
        let path = config.output_path(bucket.file_name());
        summary
            .files
            .push(save(config, &path, &config.output.key, races)?);
    }

    let path = config.output_path(RESULTS_FILE_NAME);
    summary
        .files
        .push(save(config, &path, &config.output.key, &partition.results)?);

    Ok(summary)
}
