//! Athlete reference validation
//!
//! Prunes raceids from athlete records that do not name a race in the
//! canonical race list.

use std::collections::HashSet;
use std::fmt;

use tracing::trace;

use crate::model::{AthleteRaces, CleanedAthlete, RaceId};

/// The set of raceids considered valid
#[derive(Debug, Clone, Default)]
pub struct CanonicalSet {
    ids: HashSet<RaceId>,
}

impl CanonicalSet {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: RaceId) -> bool {
        self.ids.contains(&id)
    }
}

impl FromIterator<RaceId> for CanonicalSet {
    fn from_iter<I: IntoIterator<Item = RaceId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Per-athlete pruning outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AthleteOutcome {
    pub kept: usize,
    pub removed: usize,
}

impl AthleteOutcome {
    pub fn original(&self) -> usize {
        self.kept + self.removed
    }
}

/// Aggregate counts over a whole validation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneReport {
    pub athletes: usize,
    pub total: usize,
    pub valid: usize,
    pub removed: usize,
}

impl PruneReport {
    fn add(&mut self, outcome: AthleteOutcome) {
        self.athletes += 1;
        self.total += outcome.original();
        self.valid += outcome.kept;
        self.removed += outcome.removed;
    }
}

impl fmt::Display for PruneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total athletes checked: {}", self.athletes)?;
        writeln!(f, "Deleted {} out of {} raceids", self.removed, self.total)?;
        write!(f, "{} valid raceids remaining", self.valid)
    }
}

/// Keep only the raceids of `athlete` found in `canonical`, in their original order
pub fn prune_athlete(
    athlete: AthleteRaces,
    canonical: &CanonicalSet,
) -> (CleanedAthlete, AthleteOutcome) {
    let original = athlete.raceids.len();
    let races: Vec<RaceId> = athlete
        .raceids
        .into_iter()
        .filter(|id| canonical.contains(*id))
        .collect();

    let outcome = AthleteOutcome {
        kept: races.len(),
        removed: original - races.len(),
    };
    let cleaned = CleanedAthlete {
        fiscode: athlete.fiscode,
        races,
    };

    (cleaned, outcome)
}

/// Prune every athlete, calling `on_progress` after each one
pub fn prune_athletes<F>(
    athletes: Vec<AthleteRaces>,
    canonical: &CanonicalSet,
    mut on_progress: F,
) -> (Vec<CleanedAthlete>, PruneReport)
where
    F: FnMut(usize),
{
    let mut report = PruneReport::default();
    let mut cleaned = Vec::with_capacity(athletes.len());

    for athlete in athletes {
        let (athlete, outcome) = prune_athlete(athlete, canonical);
        if outcome.removed > 0 {
            trace!(
                "Removed {} of {} raceids for athlete {}",
                outcome.removed,
                outcome.original(),
                athlete.fiscode
            );
        }
        report.add(outcome);
        cleaned.push(athlete);
        on_progress(report.athletes);
    }

    (cleaned, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(values: &[u32]) -> Vec<RaceId> {
        values.iter().copied().map(RaceId).collect()
    }

    fn athlete(fiscode: u64, raceids: &[u32]) -> AthleteRaces {
        AthleteRaces {
            fiscode: json!(fiscode),
            raceids: ids(raceids),
        }
    }

    #[test]
    fn test_prune_athlete_drops_unknown_raceids() {
        let canonical: CanonicalSet = ids(&[22500, 23500]).into_iter().collect();
        let (cleaned, outcome) = prune_athlete(athlete(3420586, &[22500, 23500, 99999]), &canonical);

        assert_eq!(cleaned.races, ids(&[22500, 23500]));
        assert_eq!(outcome.kept, 2);
        assert_eq!(outcome.removed, 1);
        assert_eq!(cleaned.fiscode, json!(3420586));
    }

    #[test]
    fn test_prune_keeps_order_and_duplicates() {
        let canonical: CanonicalSet = ids(&[1, 2, 3]).into_iter().collect();
        let (cleaned, outcome) = prune_athlete(athlete(1, &[3, 9, 1, 3]), &canonical);
        assert_eq!(cleaned.races, ids(&[3, 1, 3]));
        assert_eq!(outcome.original(), 4);
    }

    #[test]
    fn test_prune_athletes_report_and_progress() {
        let canonical: CanonicalSet = ids(&[22500, 23500]).into_iter().collect();
        let athletes = vec![
            athlete(1, &[22500, 99999]),
            athlete(2, &[]),
            athlete(3, &[23500, 23500, 1]),
        ];

        let mut seen = Vec::new();
        let (cleaned, report) = prune_athletes(athletes, &canonical, |n| seen.push(n));

        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(cleaned.len(), 3);
        assert!(cleaned[1].races.is_empty());
        assert_eq!(
            report,
            PruneReport {
                athletes: 3,
                total: 5,
                valid: 3,
                removed: 2,
            }
        );
        assert_eq!(report.valid + report.removed, report.total);
    }

    #[test]
    fn test_empty_canonical_set_removes_everything() {
        let canonical = CanonicalSet::default();
        assert!(canonical.is_empty());
        let (cleaned, report) = prune_athletes(vec![athlete(1, &[5, 6])], &canonical, |_| {});
        assert!(cleaned[0].races.is_empty());
        assert_eq!(report.removed, 2);
    }

    #[test]
    fn test_report_display() {
        let report = PruneReport {
            athletes: 2,
            total: 10,
            valid: 7,
            removed: 3,
        };
        let text = report.to_string();
        assert!(text.contains("Total athletes checked: 2"));
        assert!(text.contains("Deleted 3 out of 10 raceids"));
        assert!(text.contains("7 valid raceids remaining"));
    }
}
