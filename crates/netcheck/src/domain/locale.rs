//! # Locale Profiles
//!
//! Regional knowledge about probe targets: hosts that work well in a region
//! (`special`) and hosts known to be blocked or unreliable there (`black`).
//!
//! The table is an ordinary value handed to the catalog, so tests can run
//! against synthetic profiles.

use std::collections::HashMap;

/// Extra-include / always-exclude endpoints for one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleProfile {
    /// Endpoints added to the candidate pool, in order.
    pub special: Vec<String>,
    /// Endpoints always excluded.
    pub black: Vec<String>,
}

impl LocaleProfile {
    /// Build a profile from string slices.
    pub fn new(special: &[&str], black: &[&str]) -> Self {
        Self {
            special: special.iter().map(|s| s.to_string()).collect(),
            black: black.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Locale profiles keyed by lowercase locale tag.
#[derive(Clone, Debug, Default)]
pub struct LocaleTable {
    profiles: HashMap<String, LocaleProfile>,
}

impl LocaleTable {
    /// Empty table: every locale contributes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Profiles shipped with the crate.
    pub fn builtin() -> Self {
        let china_mainland = LocaleProfile::new(&["114.114.114.114:53"], &["google.com"]);
        let russia = LocaleProfile::new(&["yandex.ru"], &[]);
        let egypt = LocaleProfile::new(&["196.201.244.6:53"], &[]);

        Self::new()
            .with("zh", china_mainland.clone())
            .with("zh-cn", china_mainland)
            .with("ru", russia.clone())
            .with("ru-ru", russia)
            .with("ar-eg", egypt)
    }

    /// Register a profile, replacing any previous one for the same tag.
    pub fn insert(&mut self, tag: &str, profile: LocaleProfile) {
        self.profiles.insert(tag.to_lowercase(), profile);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, tag: &str, profile: LocaleProfile) -> Self {
        self.insert(tag, profile);
        self
    }

    /// Case-insensitive exact lookup.
    pub fn get(&self, tag: &str) -> Option<&LocaleProfile> {
        self.profiles.get(&tag.to_lowercase())
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True if no profiles are registered.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
