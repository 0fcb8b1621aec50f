//! Flattened defensive lists over a creature's buckets

use typecov_chart::ElementType;

use crate::types::CreatureTyping;

/// Types dealing more than 1x: the 4x entries first, then the 2x ones
pub fn weaknesses(creature: &CreatureTyping) -> Vec<ElementType> {
    let buckets = creature.def_buckets();
    [buckets.double_weaknesses.as_slice(), buckets.weaknesses.as_slice()].concat()
}

/// Types dealing less than 1x but not 0: the 0.25x entries first
pub fn resistances(creature: &CreatureTyping) -> Vec<ElementType> {
    let buckets = creature.def_buckets();
    [buckets.double_resistances.as_slice(), buckets.resistances.as_slice()].concat()
}

pub fn immunities(creature: &CreatureTyping) -> Vec<ElementType> {
    creature.def_buckets().immunities.clone()
}
