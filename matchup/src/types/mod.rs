//! Domain types for matchup arithmetic

mod attack;
mod bucket;
mod creature;
mod profile;
mod ranking;

pub use attack::Attack;
pub use bucket::{DefenseBuckets, DefenseClass, OffenseBuckets, OffenseClass};
pub use creature::{CreatureTyping, DefenseSnapshot, DefenseWeights, MAX_ATTACKS, OffenseSnapshot};
pub use profile::TypeProfile;
pub use ranking::Outcome;
