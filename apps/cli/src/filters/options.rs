//! Filter Option Extractor.
//!
//! Builds the facet list for a dimension from the full fetched job set:
//! distinct observed values with occurrence counts, most frequent first.
//! Recomputed whenever the job set changes; never persisted.

use indexmap::IndexMap;

use crate::filters::FilterDimension;
use crate::jobs::NormalizedJob;

/// One facet choice: the raw value, its display label, and how many jobs
/// carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub count: usize,
}

/// Counts the values produced by `extract` across all jobs.
///
/// Values that are empty after trimming are excluded entirely; everything
/// else is counted under the exact original string. The result is sorted by
/// descending count with a stable sort, so equal counts keep first-appearance
/// order.
pub fn collect_options<F, I>(jobs: &[NormalizedJob], extract: F) -> Vec<FilterOption>
where
    F: Fn(&NormalizedJob) -> I,
    I: IntoIterator<Item = String>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for job in jobs {
        for value in extract(job) {
            if value.trim().is_empty() {
                continue;
            }
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    let mut options: Vec<FilterOption> = counts
        .into_iter()
        .map(|(value, count)| FilterOption {
            label: value.clone(),
            value,
            count,
        })
        .collect();
    options.sort_by(|a, b| b.count.cmp(&a.count));
    options
}

/// Facet list for one dimension, using its canonical extraction.
pub fn dimension_options(jobs: &[NormalizedJob], dimension: FilterDimension) -> Vec<FilterOption> {
    collect_options(jobs, |job| dimension.values_of(job))
}
