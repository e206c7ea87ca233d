//! Per-system output set folding.
//!
//! Pure helpers that fold a callback over a fixed list of
//! platform-identifier strings and merge the per-system results into
//! nested or flat mappings. No state, no I/O.

use std::collections::BTreeMap;

/// Platform identifiers used by the `*_default` variants.
pub const DEFAULT_SYSTEMS: &[&str] = &[
    "aarch64-darwin",
    "aarch64-linux",
    "x86_64-darwin",
    "x86_64-linux",
];

/// Fold `f` over `systems`, nesting each produced output under its name
/// and then the system: `output-name -> system -> value`.
pub fn each_system<V, F>(systems: &[&str], mut f: F) -> BTreeMap<String, BTreeMap<String, V>>
where
    F: FnMut(&str) -> BTreeMap<String, V>,
{
    let mut merged: BTreeMap<String, BTreeMap<String, V>> = BTreeMap::new();
    for system in systems {
        for (name, value) in f(system) {
            merged
                .entry(name)
                .or_default()
                .insert((*system).to_string(), value);
        }
    }
    merged
}

/// Map each system directly to its callback result: `system -> value`.
pub fn each_system_mapped<V, F>(systems: &[&str], mut f: F) -> BTreeMap<String, V>
where
    F: FnMut(&str) -> V,
{
    systems
        .iter()
        .map(|system| ((*system).to_string(), f(system)))
        .collect()
}

/// Fold `f` over `systems` and merge the produced sets flat, without
/// per-system nesting. Later systems override earlier ones on key
/// collision.
pub fn each_system_passthrough<V, F>(systems: &[&str], mut f: F) -> BTreeMap<String, V>
where
    F: FnMut(&str) -> BTreeMap<String, V>,
{
    let mut merged = BTreeMap::new();
    for system in systems {
        merged.extend(f(system));
    }
    merged
}

/// [`each_system`] over [`DEFAULT_SYSTEMS`].
pub fn each_system_default<V, F>(f: F) -> BTreeMap<String, BTreeMap<String, V>>
where
    F: FnMut(&str) -> BTreeMap<String, V>,
{
    each_system(DEFAULT_SYSTEMS, f)
}

/// [`each_system_mapped`] over [`DEFAULT_SYSTEMS`].
pub fn each_system_mapped_default<V, F>(f: F) -> BTreeMap<String, V>
where
    F: FnMut(&str) -> V,
{
    each_system_mapped(DEFAULT_SYSTEMS, f)
}

/// [`each_system_passthrough`] over [`DEFAULT_SYSTEMS`].
pub fn each_system_passthrough_default<V, F>(f: F) -> BTreeMap<String, V>
where
    F: FnMut(&str) -> BTreeMap<String, V>,
{
    each_system_passthrough(DEFAULT_SYSTEMS, f)
}
