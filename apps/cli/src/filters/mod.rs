// Client-side filtering engine.
// Facet extraction, selection state, and the inclusion predicate all share
// one value-extraction path per dimension, so an option shown in the facet
// list always matches the predicate's membership test verbatim.

pub mod buckets;
pub mod options;
pub mod predicate;
pub mod selection;

pub use options::{collect_options, dimension_options, FilterOption};
pub use predicate::{filter_jobs, matches};
pub use selection::ActiveFilters;

use std::fmt;

use crate::filters::buckets::{experience_band, salary_band};
use crate::jobs::NormalizedJob;

/// Placeholder for absent source fields. Jobs missing a value still show up
/// under this facet and can be filtered on explicitly.
pub const NOT_SPECIFIED: &str = "Not specified";

/// The closed set of filterable axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    Sector,
    Location,
    Industry,
    Experience,
    Qualification,
    Salary,
}

impl FilterDimension {
    pub const ALL: [FilterDimension; 6] = [
        FilterDimension::Sector,
        FilterDimension::Location,
        FilterDimension::Industry,
        FilterDimension::Experience,
        FilterDimension::Qualification,
        FilterDimension::Salary,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FilterDimension::Sector => "sector",
            FilterDimension::Location => "location",
            FilterDimension::Industry => "industry",
            FilterDimension::Experience => "experience",
            FilterDimension::Qualification => "qualification",
            FilterDimension::Salary => "salary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterDimension::Sector => "Sector",
            FilterDimension::Location => "Location",
            FilterDimension::Industry => "Industry",
            FilterDimension::Experience => "Experience Level",
            FilterDimension::Qualification => "Qualification",
            FilterDimension::Salary => "Salary Range",
        }
    }

    pub fn parse(token: &str) -> Option<FilterDimension> {
        let token = token.trim().to_lowercase();
        FilterDimension::ALL
            .into_iter()
            .find(|dimension| dimension.key() == token)
    }

    /// The value(s) this job contributes to the dimension. Scalar dimensions
    /// yield exactly one string; continuous dimensions yield their bucket
    /// label. The same extraction backs facet counting and the predicate.
    pub fn values_of(&self, job: &NormalizedJob) -> Vec<String> {
        match self {
            FilterDimension::Sector => vec![text_or_placeholder(&job.record.sectorname)],
            FilterDimension::Location => vec![location_of(job)],
            FilterDimension::Industry => vec![text_or_placeholder(&job.record.industryname)],
            FilterDimension::Experience => {
                vec![experience_band(job.record.aveexp).to_string()]
            }
            FilterDimension::Qualification => {
                vec![text_or_placeholder(&job.record.highestqualification)]
            }
            FilterDimension::Salary => vec![salary_band(job.record.avewage).to_string()],
        }
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn text_or_placeholder(value: &str) -> String {
    if value.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        value.to_string()
    }
}

/// Location is the "district, state" composite. A single present part stands
/// alone; both absent collapses to the placeholder.
fn location_of(job: &NormalizedJob) -> String {
    let district = job.record.districtname.trim();
    let state = job.record.statename.trim();
    match (district.is_empty(), state.is_empty()) {
        (true, true) => NOT_SPECIFIED.to_string(),
        (false, true) => district.to_string(),
        (true, false) => state.to_string(),
        (false, false) => format!("{district}, {state}"),
    }
}
