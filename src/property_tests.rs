//! Property-based tests for the classifier, partitioners and validator

use proptest::prelude::*;

use crate::classify::{classify, Gender, RaceType};
use crate::model::{AthleteRaces, RaceId};
use crate::partition::fixtures::race;
use crate::partition::{partition_by_category, partition_by_range, RangeSpec};
use crate::validate::{prune_athlete, CanonicalSet};

const KEYWORDS: [&str; 15] = [
    "qual", "mst", "skiathlon", "marathon", "pursuit", "sp", "sprint", "km", "men", "men's",
    "mens", "women", "women's", "womens", "woman",
];

fn plain_word() -> impl Strategy<Value = String> {
    "[a-z0-9.]{1,10}".prop_filter("not a keyword", |w| !KEYWORDS.contains(&w.as_str()))
}

fn any_word() -> impl Strategy<Value = String> {
    prop_oneof![
        plain_word(),
        prop::sample::select(KEYWORDS.to_vec()).prop_map(str::to_string),
        prop::sample::select(vec!["QUAL", "Sprint", "KM", "Men's", "WOMEN"])
            .prop_map(str::to_string),
    ]
}

fn randomly_cased(word: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), word.len()).prop_map(move |upper| {
        word.chars()
            .zip(upper)
            .map(|(c, u)| if u { c.to_ascii_uppercase() } else { c })
            .collect()
    })
}

proptest! {
    #[test]
    fn test_qual_token_always_gives_sprint_qualification(
        before in prop::collection::vec(any_word(), 0..6),
        after in prop::collection::vec(any_word(), 0..6),
        qual in randomly_cased("qual"),
    ) {
        let mut words = before;
        words.push(qual);
        words.extend(after);

        let classification = classify(&words.join(" "));
        prop_assert_eq!(classification.race_type, RaceType::SprintQualification);
    }

    #[test]
    fn test_no_keywords_means_uncategorized(
        words in prop::collection::vec(plain_word(), 0..8),
    ) {
        let classification = classify(&words.join(" "));
        prop_assert_eq!(classification.race_type, RaceType::Uncategorized);
        prop_assert_eq!(classification.gender, Gender::Unknown);
    }

    #[test]
    fn test_category_partition_is_total(
        disciplines in prop::collection::vec(prop::collection::vec(any_word(), 0..5), 0..40),
    ) {
        let races: Vec<_> = disciplines
            .iter()
            .enumerate()
            .map(|(i, words)| race(20000 + i as u32, &words.join(" ")))
            .collect();
        let count = races.len();

        let partition = partition_by_category(races);
        prop_assert_eq!(partition.total(), count);
        prop_assert_eq!(partition.results.len(), count);

        let listed: usize = partition.buckets().map(|(_, races)| races.len()).sum();
        prop_assert_eq!(listed, count);
    }

    #[test]
    fn test_range_partition_accounts_for_every_race(
        ids in prop::collection::hash_set(0u32..50000, 0..60),
    ) {
        let races: Vec<_> = ids.iter().map(|&id| race(id, "Men 10 km")).collect();
        let count = races.len();

        let partition = partition_by_range(races, &RangeSpec::default());
        prop_assert_eq!(partition.info.len(), count);
        prop_assert_eq!(partition.bucketed() + partition.overflow.len(), count);
        prop_assert!(partition.info.windows(2).all(|w| w[0].raceid <= w[1].raceid));
        prop_assert!(partition.overflow.iter().all(|id| id.get() >= 41000));
    }

    #[test]
    fn test_pruned_raceids_are_canonical(
        canonical_ids in prop::collection::vec(0u32..500, 0..50),
        held in prop::collection::vec(0u32..500, 0..80),
    ) {
        let canonical: CanonicalSet = canonical_ids.iter().copied().map(RaceId).collect();
        let athlete = AthleteRaces {
            fiscode: serde_json::json!(1),
            raceids: held.iter().copied().map(RaceId).collect(),
        };

        let (cleaned, outcome) = prune_athlete(athlete, &canonical);
        prop_assert!(cleaned.races.iter().all(|id| canonical.contains(*id)));
        prop_assert_eq!(outcome.kept + outcome.removed, held.len());
        prop_assert_eq!(cleaned.races.len(), outcome.kept);
    }
}
