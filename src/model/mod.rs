//! Record types for race and athlete documents

pub mod athlete;
pub mod race;
pub mod raceid;

pub use athlete::{AthleteRaces, CleanedAthlete};
pub use race::{Race, RaceInfo, RaceRef, RaceResults};
pub use raceid::RaceId;
