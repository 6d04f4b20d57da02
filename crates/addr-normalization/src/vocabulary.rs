//! Street directional and suffix vocabularies.
//!
//! Both tables map a surface form (abbreviated or spelled out) to its
//! canonical abbreviation. Every canonical form is also a key mapping to
//! itself, so a value that has already been standardized stays unchanged.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Compass directionals, abbreviated and spelled out.
static DIRECTIONALS: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("N", "N"),
        ("NE", "NE"),
        ("E", "E"),
        ("SE", "SE"),
        ("S", "S"),
        ("SW", "SW"),
        ("W", "W"),
        ("NW", "NW"),
        ("NORTH", "N"),
        ("NORTHEAST", "NE"),
        ("EAST", "E"),
        ("SOUTHEAST", "SE"),
        ("SOUTH", "S"),
        ("SOUTHWEST", "SW"),
        ("WEST", "W"),
        ("NORTHWEST", "NW"),
    ])
});

/// Street type suffix variants seen in manually entered records.
static SUFFIXES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("ALLEE", "ALLEY"),
        ("ALLEY", "ALLEY"),
        ("ALLY", "ALLEY"),
        ("ALY", "ALLEY"),
        ("AV", "AVE"),
        ("AVE", "AVE"),
        ("AVEN", "AVE"),
        ("AVENU", "AVE"),
        ("AVENUE", "AVE"),
        ("AVN", "AVE"),
        ("AVNUE", "AVE"),
        ("HIGHWAY", "HWY"),
        ("HIGHWY", "HWY"),
        ("HIWAY", "HWY"),
        ("HIWY", "HWY"),
        ("HWAY", "HWY"),
        ("HWY", "HWY"),
        ("PL", "PL"),
        ("PLACE", "PL"),
        ("RD", "RD"),
        ("ROAD", "RD"),
        ("STREET", "ST"),
        ("STRT", "ST"),
        ("ST", "ST"),
        ("STR", "ST"),
    ])
});

/// Canonical directional for a cleaned token, if it is one.
pub fn directional(token: &str) -> Option<&'static str> {
    DIRECTIONALS.get(token).copied()
}

/// Canonical suffix for a cleaned token, if it is one.
pub fn suffix(token: &str) -> Option<&'static str> {
    SUFFIXES.get(token).copied()
}

/// All directional entries in key order.
pub fn directionals() -> impl Iterator<Item = (&'static str, &'static str)> {
    DIRECTIONALS.iter().map(|(key, value)| (*key, *value))
}

/// All suffix entries in key order.
pub fn suffixes() -> impl Iterator<Item = (&'static str, &'static str)> {
    SUFFIXES.iter().map(|(key, value)| (*key, *value))
}
