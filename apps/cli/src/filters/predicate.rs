//! Job Filter Predicate Engine.
//!
//! Inclusion is a conjunction across dimensions: every dimension with an
//! active selection must accept the job, and a dimension accepts it when at
//! least one of the job's extracted values is selected (disjunction within
//! the dimension). Dimensions without selections pass vacuously. Pure; the
//! caller reapplies it whenever the job set or the filter state changes.

use crate::filters::{ActiveFilters, FilterDimension};
use crate::jobs::NormalizedJob;

pub fn matches(job: &NormalizedJob, filters: &ActiveFilters) -> bool {
    FilterDimension::ALL.iter().all(|&dimension| {
        let selected = filters.selected(dimension);
        if selected.is_empty() {
            return true;
        }
        dimension
            .values_of(job)
            .iter()
            .any(|value| selected.contains(value.as_str()))
    })
}

pub fn filter_jobs<'a>(jobs: &'a [NormalizedJob], filters: &ActiveFilters) -> Vec<&'a NormalizedJob> {
    jobs.iter().filter(|job| matches(job, filters)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::normalize_job;
    use crate::models::job::JobRecord;

    fn job(sector: &str, district: &str, state: &str, aveexp: f64, avewage: f64) -> NormalizedJob {
        normalize_job(JobRecord {
            sectorname: sector.to_string(),
            districtname: district.to_string(),
            statename: state.to_string(),
            aveexp,
            avewage,
            ..JobRecord::default()
        })
    }

    #[test]
    fn test_no_selections_means_every_job_passes() {
        let jobs = vec![
            job("IT", "Pune", "Maharashtra", 3.0, 40000.0),
            job("Health", "Thane", "Maharashtra", 0.0, 0.0),
        ];
        let filters = ActiveFilters::default();
        assert_eq!(filter_jobs(&jobs, &filters).len(), jobs.len());
    }

    #[test]
    fn test_conjunction_across_dimensions() {
        let both = job("IT", "Pune", "Maharashtra", 0.0, 0.0);
        let sector_only = job("IT", "Nagpur", "Maharashtra", 0.0, 0.0);
        let location_only = job("Health", "Pune", "Maharashtra", 0.0, 0.0);
        let neither = job("Health", "Nagpur", "Maharashtra", 0.0, 0.0);

        let mut filters = ActiveFilters::default();
        filters.toggle(FilterDimension::Sector, "IT");
        filters.toggle(FilterDimension::Location, "Pune, Maharashtra");

        assert!(matches(&both, &filters));
        assert!(!matches(&sector_only, &filters));
        assert!(!matches(&location_only, &filters));
        assert!(!matches(&neither, &filters));
    }

    #[test]
    fn test_disjunction_within_a_dimension() {
        let mut filters = ActiveFilters::default();
        filters.toggle(FilterDimension::Sector, "IT");
        filters.toggle(FilterDimension::Sector, "Health");

        assert!(matches(&job("IT", "", "", 0.0, 0.0), &filters));
        assert!(matches(&job("Health", "", "", 0.0, 0.0), &filters));
        assert!(!matches(&job("Retail", "", "", 0.0, 0.0), &filters));
    }

    #[test]
    fn test_bucketed_dimensions_match_on_labels() {
        let mut filters = ActiveFilters::default();
        filters.toggle(FilterDimension::Experience, "Mid-level (3-5 years)");

        assert!(matches(&job("", "", "", 4.0, 0.0), &filters));
        assert!(matches(&job("", "", "", 5.0, 0.0), &filters));
        assert!(!matches(&job("", "", "", 5.5, 0.0), &filters));
    }

    #[test]
    fn test_salary_bucket_filtering() {
        let mut filters = ActiveFilters::default();
        filters.toggle(FilterDimension::Salary, "₹50K - ₹75K");

        assert!(matches(&job("", "", "", 0.0, 60_000.0), &filters));
        assert!(!matches(&job("", "", "", 0.0, 40_000.0), &filters));
    }

    #[test]
    fn test_placeholder_is_explicitly_filterable() {
        let missing = job("", "", "", 0.0, 0.0);
        let present = job("IT", "", "", 0.0, 0.0);

        let mut filters = ActiveFilters::default();
        filters.toggle(FilterDimension::Sector, crate::filters::NOT_SPECIFIED);

        assert!(matches(&missing, &filters));
        assert!(!matches(&present, &filters));
    }

    #[test]
    fn test_membership_is_exact_string_equality() {
        let mut filters = ActiveFilters::default();
        filters.toggle(FilterDimension::Sector, "it");
        assert!(!matches(&job("IT", "", "", 0.0, 0.0), &filters));
    }

    #[test]
    fn test_filter_jobs_preserves_input_order() {
        let jobs = vec![
            job("IT", "Pune", "Maharashtra", 0.0, 0.0),
            job("Health", "Pune", "Maharashtra", 0.0, 0.0),
            job("IT", "Nashik", "Maharashtra", 0.0, 0.0),
        ];
        let mut filters = ActiveFilters::default();
        filters.toggle(FilterDimension::Sector, "IT");

        let kept = filter_jobs(&jobs, &filters);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].record.districtname, "Pune");
        assert_eq!(kept[1].record.districtname, "Nashik");
    }
}
