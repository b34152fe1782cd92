//! Type filtering and fuzzy search over the catalog.
//!
//! Search matches the query against each record's `title` and every
//! element of `tags`, keeps the best score per record, and normalizes it
//! against the query's self-match score so the threshold behaves as a
//! similarity floor in `[0, 1]`. Filtering by type composes with search:
//! the type filter is applied first, search narrows within the filtered
//! set.

use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::Serialize;

use crate::indexer::sort_by_id;
use crate::model::{Duty, TypeSelector};

/// Default similarity floor. Tolerates partial and lightly mangled
/// queries while excluding unrelated terms.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Search tuning parameters.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Minimum normalized similarity in `[0.0, 1.0]`.
    pub threshold: f64,
    /// Maximum results to return, `None` for all matches.
    pub limit: Option<usize>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            limit: None,
        }
    }
}

/// A record paired with its relevance score in `[0.0, 1.0]`.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredDuty {
    pub score: f64,
    #[serde(flatten)]
    pub duty: Duty,
}

/// Retain only records of the selected type; `All` is the identity.
pub fn filter_by_type(duties: &[Duty], selector: TypeSelector) -> Vec<Duty> {
    match selector {
        TypeSelector::All => duties.to_vec(),
        TypeSelector::Only(t) => duties.iter().filter(|d| d.duty_type == t).cloned().collect(),
    }
}

/// Fuzzy search engine over duty titles and tags.
pub struct DutySearch {
    matcher: Matcher,
    params: SearchParams,
}

impl DutySearch {
    pub fn new(params: SearchParams) -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            params,
        }
    }

    /// Search the collection.
    ///
    /// An empty (after trimming) query returns the whole collection in
    /// ascending-id order with a neutral score. Otherwise results carry
    /// their best similarity across title and tags, every returned score
    /// is at least the configured threshold, and results are ordered by
    /// descending relevance.
    pub fn search(&mut self, duties: &[Duty], query: &str) -> Vec<ScoredDuty> {
        let query = query.trim();
        if query.is_empty() {
            let mut all: Vec<Duty> = duties.to_vec();
            sort_by_id(&mut all);
            return all
                .into_iter()
                .map(|duty| ScoredDuty { score: 1.0, duty })
                .collect();
        }

        let needle = query.to_lowercase();
        let denominator = match self.raw_score(&needle, &needle) {
            Some(s) if s > 0 => s as f64,
            _ => return Vec::new(),
        };

        let mut results: Vec<ScoredDuty> = duties
            .iter()
            .filter_map(|duty| {
                let best = self
                    .best_field_score(duty, &needle)
                    .map(|raw| (raw as f64 / denominator).min(1.0))?;
                if best >= self.params.threshold {
                    Some(ScoredDuty {
                        score: best,
                        duty: duty.clone(),
                    })
                } else {
                    None
                }
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        if let Some(limit) = self.params.limit {
            results.truncate(limit);
        }
        results
    }

    /// Compose the type filter and the fuzzy search: filter first, then
    /// search within the filtered set.
    pub fn query(
        &mut self,
        duties: &[Duty],
        selector: TypeSelector,
        query: &str,
    ) -> Vec<ScoredDuty> {
        let filtered = filter_by_type(duties, selector);
        self.search(&filtered, query)
    }

    /// Best raw match across the record's searchable fields.
    fn best_field_score(&mut self, duty: &Duty, needle: &str) -> Option<u16> {
        let mut best: Option<u16> = None;
        let title = duty.title.to_lowercase();
        if let Some(s) = self.raw_score(&title, needle) {
            best = Some(best.map_or(s, |b| b.max(s)));
        }
        for tag in &duty.tags {
            let tag = tag.to_lowercase();
            if let Some(s) = self.raw_score(&tag, needle) {
                best = Some(best.map_or(s, |b| b.max(s)));
            }
        }
        best
    }

    fn raw_score(&mut self, haystack: &str, needle: &str) -> Option<u16> {
        let mut haystack_buf = Vec::new();
        let mut needle_buf = Vec::new();
        let haystack = Utf32Str::new(haystack, &mut haystack_buf);
        let needle = Utf32Str::new(needle, &mut needle_buf);
        self.matcher.fuzzy_match(haystack, needle)
    }
}

impl Default for DutySearch {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}
