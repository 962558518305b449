//! # Host Catalog
//!
//! Derives the candidate list from three inputs:
//!
//! ```text
//! candidates = uniq((defaults ∪ locale.special ∪ custom.special)
//!                   \ (locale.black ∪ custom.black))
//! ```
//!
//! Order is first-seen: defaults, then locale specials, then custom
//! specials. Membership is a strict set difference, so a blacklisted
//! endpoint is absent no matter how many lists nominated it.

use super::locale::LocaleTable;
use std::collections::HashSet;
use tracing::debug;

/// Globally reachable probe targets used in every locale.
pub const DEFAULT_ENDPOINTS: [&str; 4] = [
    "8.8.8.8:53",
    "captive.apple.com",
    "time.windows.com",
    "google.com",
];

/// Which customization list an endpoint is added to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CustomKind {
    /// Always include.
    Special,
    /// Always exclude.
    Black,
}

/// Caller-supplied include/exclude lists, appended over the tool's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Customization {
    /// Endpoints to always include.
    pub special: Vec<String>,
    /// Endpoints to always exclude.
    pub black: Vec<String>,
}

impl Customization {
    fn list_mut(&mut self, kind: CustomKind) -> &mut Vec<String> {
        match kind {
            CustomKind::Special => &mut self.special,
            CustomKind::Black => &mut self.black,
        }
    }
}

/// Candidate-list derivation over defaults, locale profile and customization.
#[derive(Clone, Debug)]
pub struct HostCatalog {
    defaults: Vec<String>,
    locales: LocaleTable,
    language: String,
    custom: Customization,
    candidates: Vec<String>,
}

impl HostCatalog {
    /// Catalog over [`DEFAULT_ENDPOINTS`] with no locale selected.
    pub fn new(locales: LocaleTable) -> Self {
        Self::with_defaults(DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()), locales)
    }

    /// Catalog over a custom default list.
    pub fn with_defaults<I, S>(defaults: I, locales: LocaleTable) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self {
            defaults: defaults.into_iter().map(Into::into).collect(),
            locales,
            language: String::new(),
            custom: Customization::default(),
            candidates: Vec::new(),
        };
        catalog.recompute();
        catalog
    }

    /// Active locale tag (lowercase, empty if never set).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Current candidate list.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Runtime customization lists.
    pub fn customization(&self) -> &Customization {
        &self.custom
    }

    /// True if `endpoint` is currently a candidate.
    pub fn contains(&self, endpoint: &str) -> bool {
        self.candidates.iter().any(|c| c == endpoint)
    }

    /// True if the active locale or the customization excludes `endpoint`.
    pub fn is_blacklisted(&self, endpoint: &str) -> bool {
        self.custom.black.iter().any(|b| b == endpoint)
            || self
                .locales
                .get(&self.language)
                .is_some_and(|p| p.black.iter().any(|b| b == endpoint))
    }

    /// Select a locale.
    ///
    /// Recomputes only when the normalized tag changed or the candidate list
    /// is empty. Returns whether a recomputation happened.
    pub fn set_language(&mut self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        if tag == self.language && !self.candidates.is_empty() {
            return false;
        }
        self.language = tag;
        self.recompute();
        true
    }

    /// Append one endpoint to a customization list. Empty input is ignored.
    ///
    /// Returns whether the catalog changed.
    pub fn add_one(&mut self, kind: CustomKind, endpoint: &str) -> bool {
        if endpoint.is_empty() {
            return false;
        }
        self.custom.list_mut(kind).push(endpoint.to_string());
        self.recompute();
        true
    }

    /// Append a batch to a customization list. Empty entries are skipped and
    /// an empty batch is ignored.
    ///
    /// Returns whether the catalog changed.
    pub fn add_many<I, S>(&mut self, kind: CustomKind, endpoints: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.custom.list_mut(kind).len();
        self.custom.list_mut(kind).extend(
            endpoints
                .into_iter()
                .map(Into::<String>::into)
                .filter(|e| !e.is_empty()),
        );
        if self.custom.list_mut(kind).len() == before {
            return false;
        }
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.candidates = self.derive();
        debug!(
            "[netcheck] Candidate list recomputed for locale '{}': {:?}",
            self.language, self.candidates
        );
    }

    fn derive(&self) -> Vec<String> {
        let profile = self.locales.get(&self.language);
        let locale_special = profile.map(|p| p.special.as_slice()).unwrap_or_default();
        let locale_black = profile.map(|p| p.black.as_slice()).unwrap_or_default();

        let excluded: HashSet<&str> = locale_black
            .iter()
            .chain(&self.custom.black)
            .map(String::as_str)
            .collect();
        let mut seen = HashSet::new();

        self.defaults
            .iter()
            .chain(locale_special)
            .chain(&self.custom.special)
            .filter(|e| !excluded.contains(e.as_str()))
            .filter(|e| seen.insert(*e))
            .cloned()
            .collect()
    }
}
