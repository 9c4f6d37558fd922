//! Cleanup: prune athlete raceids against the canonical race list

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use tracing::info;

use super::{save, WrittenFile};
use crate::config::Config;
use crate::document::{load_records, Decoded};
use crate::model::{AthleteRaces, RaceRef};
use crate::validate::{prune_athletes, CanonicalSet, PruneReport};

#[derive(Debug, Clone)]
pub struct CleanupSummary {
    pub canonical_races: usize,
    pub canonical_ids: usize,
    pub skipped_races: usize,
    pub skipped_athletes: usize,
    pub report: PruneReport,
    pub output: WrittenFile,
}

impl fmt::Display for CleanupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} raceids extracted from {} races",
            self.canonical_ids, self.canonical_races
        )?;
        if self.skipped_races > 0 || self.skipped_athletes > 0 {
            writeln!(
                f,
                "Skipped records: {} races, {} athletes",
                self.skipped_races, self.skipped_athletes
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.report)?;
        writeln!(f, "{}", self.output)
    }
}

fn progress_bar(total: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} athletes")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ "),
    );
    pb
}

/// Load the canonical race list and athletes, prune, and write the result
pub fn run_cleanup(config: &Config, show_progress: bool) -> Result<CleanupSummary> {
    let policy = config.records.on_missing_field;
    let cleanup = &config.cleanup;

    let races: Decoded<RaceRef> = load_records(&cleanup.canonical_file, &cleanup.canonical_key, policy)
        .with_context(|| {
            format!(
                "Failed to load canonical races from {}",
                cleanup.canonical_file.display()
            )
        })?;
    let canonical: CanonicalSet = races.records.iter().map(|race| race.raceid).collect();
    info!(
        "{} raceids extracted from {} races in {}",
        canonical.len(),
        races.records.len(),
        cleanup.canonical_file.display()
    );

    let athletes: Decoded<AthleteRaces> =
        load_records(&cleanup.athletes_file, &cleanup.athletes_key, policy).with_context(
            || format!("Failed to load athletes from {}", cleanup.athletes_file.display()),
        )?;
    info!(
        "{} athletes loaded from {}",
        athletes.records.len(),
        cleanup.athletes_file.display()
    );

    let bar = progress_bar(athletes.records.len(), show_progress);
    let (cleaned, report) =
        prune_athletes(athletes.records, &canonical, |done| bar.set_position(done as u64));
    bar.finish_and_clear();

    let path = config.output_path(&cleanup.output_file);
    let output = save(config, &path, &cleanup.athletes_key, &cleaned)?;

    Ok(CleanupSummary {
        canonical_races: races.records.len(),
        canonical_ids: canonical.len(),
        skipped_races: races.skipped.len(),
        skipped_athletes: athletes.skipped.len(),
        report,
        output,
    })
}
