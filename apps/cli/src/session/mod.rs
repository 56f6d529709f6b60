//! Session state and its reducer.
//!
//! The whole user session is one value: skills, fetched jobs, filter
//! selections, sort spec, recommendations, and status banner. Every mutation
//! goes through `reduce`, which clones the current state and returns a fresh
//! one, so the filtering engine underneath stays pure and the UI layer never
//! aliases state mid-update.

pub mod flow;

use std::cmp::Ordering;

use crate::filters::{filter_jobs, ActiveFilters, FilterDimension};
use crate::jobs::{normalize_batch, NormalizedJob};
use crate::models::course::CourseRecommendation;
use crate::models::job::JobRecord;
use crate::recommend::{canon, fallback::demo_recommendations};

/// Non-fatal status surfaced above the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    /// A backend call failed and nothing replaced its data.
    Error(String),
    /// Demo data is standing in for a failed recommendation fetch.
    Demo(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Match,
    Salary,
    Experience,
}

impl SortKey {
    pub fn parse(token: &str) -> Option<SortKey> {
        match token.trim().to_lowercase().as_str() {
            "match" => Some(SortKey::Match),
            "salary" => Some(SortKey::Salary),
            "experience" => Some(SortKey::Experience),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Match => "match",
            SortKey::Salary => "salary",
            SortKey::Experience => "experience",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn parse(token: &str) -> Option<SortDirection> {
        match token.trim().to_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// One immutable snapshot of the session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Skills the user entered, original casing, canonically deduplicated.
    pub skills: Vec<String>,
    /// Normalized batch from the latest search.
    pub jobs: Vec<NormalizedJob>,
    pub filters: ActiveFilters,
    pub sort: SortSpec,
    pub recommendations: Vec<CourseRecommendation>,
    /// Skills the current recommendations were generated for.
    pub covered_skills: Vec<String>,
    pub banner: Option<Banner>,
    pub searching: bool,
    /// Distinguishes "never searched" from "searched, zero results".
    pub has_searched: bool,
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    SkillAdded(String),
    SkillRemoved(String),
    SearchStarted,
    JobsLoaded(Vec<JobRecord>),
    SearchFailed(String),
    FilterToggled {
        dimension: FilterDimension,
        value: String,
    },
    /// Replaces a dimension's selection wholesale.
    FilterReplaced {
        dimension: FilterDimension,
        values: Vec<String>,
    },
    FilterRemoved {
        dimension: FilterDimension,
        value: String,
    },
    DimensionCleared(FilterDimension),
    FiltersCleared,
    SortChanged(SortSpec),
    RecommendationsLoaded {
        courses: Vec<CourseRecommendation>,
        covered_skills: Vec<String>,
    },
    RecommendationsFailed(String),
}

/// Applies one event to a snapshot, producing the next snapshot.
pub fn reduce(state: &SessionState, event: SessionEvent) -> SessionState {
    let mut next = state.clone();
    match event {
        SessionEvent::SkillAdded(skill) => {
            let trimmed = skill.trim().to_string();
            let key = canon(&trimmed);
            if !key.is_empty() && !next.skills.iter().any(|s| canon(s) == key) {
                next.skills.push(trimmed);
            }
        }
        SessionEvent::SkillRemoved(skill) => {
            let key = canon(&skill);
            next.skills.retain(|s| canon(s) != key);
        }
        SessionEvent::SearchStarted => {
            next.searching = true;
            next.jobs.clear();
            next.recommendations.clear();
            next.covered_skills.clear();
            next.banner = None;
            next.filters.clear_all();
        }
        SessionEvent::JobsLoaded(records) => {
            next.searching = false;
            next.has_searched = true;
            next.jobs = normalize_batch(records);
        }
        SessionEvent::SearchFailed(message) => {
            next.searching = false;
            next.has_searched = true;
            next.jobs.clear();
            next.banner = Some(Banner::Error(message));
        }
        SessionEvent::FilterToggled { dimension, value } => {
            next.filters.toggle(dimension, &value);
        }
        SessionEvent::FilterReplaced { dimension, values } => {
            next.filters.set_all(dimension, values);
        }
        SessionEvent::FilterRemoved { dimension, value } => {
            next.filters.remove(dimension, &value);
        }
        SessionEvent::DimensionCleared(dimension) => {
            next.filters.clear_dimension(dimension);
        }
        SessionEvent::FiltersCleared => {
            next.filters.clear_all();
        }
        SessionEvent::SortChanged(sort) => {
            next.sort = sort;
        }
        SessionEvent::RecommendationsLoaded {
            courses,
            covered_skills,
        } => {
            next.recommendations = courses;
            next.covered_skills = covered_skills;
        }
        SessionEvent::RecommendationsFailed(message) => {
            let (courses, covered) = demo_recommendations();
            next.recommendations = courses;
            next.covered_skills = covered;
            next.banner = Some(Banner::Demo(message));
        }
    }
    next
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jobs passing the active filters, in fetch order.
    pub fn filtered_jobs(&self) -> Vec<&NormalizedJob> {
        filter_jobs(&self.jobs, &self.filters)
    }

    /// Jobs passing the active filters, in the session's sort order.
    /// Stable, so equal keys keep fetch order.
    pub fn visible_jobs(&self) -> Vec<&NormalizedJob> {
        let mut jobs = self.filtered_jobs();
        let SortSpec { key, direction } = self.sort;
        jobs.sort_by(|a, b| {
            let ordering = sort_value(a, key)
                .partial_cmp(&sort_value(b, key))
                .unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        jobs
    }
}

fn sort_value(job: &NormalizedJob, key: SortKey) -> f64 {
    match key {
        SortKey::Match => job.record.match_percentage,
        SortKey::Salary => job.record.avewage,
        SortKey::Experience => job.record.aveexp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, match_percentage: f64, avewage: f64, aveexp: f64) -> JobRecord {
        JobRecord {
            ncspjobid: id.to_string(),
            title: format!("Job {id}"),
            match_percentage,
            avewage,
            aveexp,
            sectorname: "IT".to_string(),
            ..JobRecord::default()
        }
    }

    fn state_with_jobs() -> SessionState {
        let state = SessionState::new();
        reduce(
            &state,
            SessionEvent::JobsLoaded(vec![
                record("a", 40.0, 30_000.0, 1.0),
                record("b", 90.0, 20_000.0, 5.0),
                record("c", 70.0, 50_000.0, 3.0),
            ]),
        )
    }

    #[test]
    fn test_reduce_returns_fresh_state() {
        let state = SessionState::new();
        let next = reduce(&state, SessionEvent::SkillAdded("Python".to_string()));
        assert!(state.skills.is_empty());
        assert_eq!(next.skills, vec!["Python"]);
    }

    #[test]
    fn test_skill_add_trims_and_rejects_blank() {
        let state = reduce(
            &SessionState::new(),
            SessionEvent::SkillAdded("  SQL  ".to_string()),
        );
        assert_eq!(state.skills, vec!["SQL"]);

        let state = reduce(&state, SessionEvent::SkillAdded("   ".to_string()));
        assert_eq!(state.skills, vec!["SQL"]);
    }

    #[test]
    fn test_skill_add_dedups_canonically() {
        let mut state = reduce(
            &SessionState::new(),
            SessionEvent::SkillAdded("Node JS".to_string()),
        );
        state = reduce(&state, SessionEvent::SkillAdded("nodejs".to_string()));
        assert_eq!(state.skills, vec!["Node JS"]);
    }

    #[test]
    fn test_skill_remove_matches_canonically() {
        let mut state = reduce(
            &SessionState::new(),
            SessionEvent::SkillAdded("Power BI".to_string()),
        );
        state = reduce(&state, SessionEvent::SkillRemoved("powerbi".to_string()));
        assert!(state.skills.is_empty());
    }

    #[test]
    fn test_search_started_resets_results_and_filters() {
        let mut state = state_with_jobs();
        state = reduce(
            &state,
            SessionEvent::FilterToggled {
                dimension: FilterDimension::Sector,
                value: "IT".to_string(),
            },
        );
        state = reduce(
            &state,
            SessionEvent::RecommendationsFailed("down".to_string()),
        );

        let started = reduce(&state, SessionEvent::SearchStarted);
        assert!(started.searching);
        assert!(started.jobs.is_empty());
        assert!(started.recommendations.is_empty());
        assert!(started.banner.is_none());
        assert!(!started.filters.has_any());
    }

    #[test]
    fn test_jobs_loaded_normalizes_batch() {
        let state = reduce(
            &SessionState::new(),
            SessionEvent::JobsLoaded(vec![JobRecord {
                keywords: "Python, SQL".to_string(),
                ..JobRecord::default()
            }]),
        );
        assert!(state.has_searched);
        assert!(!state.searching);
        assert_eq!(state.jobs[0].skills_array, vec!["Python", "SQL"]);
    }

    #[test]
    fn test_search_failed_sets_error_banner() {
        let state = reduce(
            &SessionState::new(),
            SessionEvent::SearchFailed("no route".to_string()),
        );
        assert!(state.jobs.is_empty());
        assert!(state.has_searched);
        assert_eq!(state.banner, Some(Banner::Error("no route".to_string())));
    }

    #[test]
    fn test_recommendations_failure_installs_demo_set() {
        let state = reduce(
            &SessionState::new(),
            SessionEvent::RecommendationsFailed("timeout".to_string()),
        );
        assert!(!state.recommendations.is_empty());
        assert_eq!(state.covered_skills, vec!["React", "SQL"]);
        assert!(matches!(state.banner, Some(Banner::Demo(_))));
    }

    #[test]
    fn test_recommendations_loaded_replaces_previous() {
        let mut state = reduce(
            &SessionState::new(),
            SessionEvent::RecommendationsFailed("down".to_string()),
        );
        state = reduce(
            &state,
            SessionEvent::RecommendationsLoaded {
                courses: vec![CourseRecommendation {
                    course_name: "Rust in Action".to_string(),
                    ..CourseRecommendation::default()
                }],
                covered_skills: vec!["Rust".to_string()],
            },
        );
        assert_eq!(state.recommendations.len(), 1);
        assert_eq!(state.covered_skills, vec!["Rust"]);
    }

    #[test]
    fn test_filter_events_drive_selection_state() {
        let mut state = state_with_jobs();
        state = reduce(
            &state,
            SessionEvent::FilterToggled {
                dimension: FilterDimension::Sector,
                value: "IT".to_string(),
            },
        );
        assert!(state.filters.is_selected(FilterDimension::Sector, "IT"));

        state = reduce(
            &state,
            SessionEvent::FilterReplaced {
                dimension: FilterDimension::Sector,
                values: vec!["Manufacturing".to_string()],
            },
        );
        assert!(!state.filters.is_selected(FilterDimension::Sector, "IT"));
        assert!(state
            .filters
            .is_selected(FilterDimension::Sector, "Manufacturing"));

        state = reduce(
            &state,
            SessionEvent::FilterRemoved {
                dimension: FilterDimension::Sector,
                value: "Manufacturing".to_string(),
            },
        );
        assert!(!state.filters.has_any());
    }

    #[test]
    fn test_visible_jobs_default_sort_is_match_desc() {
        let state = state_with_jobs();
        let ids: Vec<&str> = state
            .visible_jobs()
            .iter()
            .map(|j| j.record.ncspjobid.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_visible_jobs_sorts_by_salary_asc() {
        let mut state = state_with_jobs();
        state = reduce(
            &state,
            SessionEvent::SortChanged(SortSpec {
                key: SortKey::Salary,
                direction: SortDirection::Asc,
            }),
        );
        let ids: Vec<&str> = state
            .visible_jobs()
            .iter()
            .map(|j| j.record.ncspjobid.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_visible_jobs_respects_filters() {
        // Wages 30000 and 20000 fall in "Under ₹30K" (inclusive bound);
        // only the 50000 job sits in the next band.
        let mut state = state_with_jobs();
        state = reduce(
            &state,
            SessionEvent::FilterToggled {
                dimension: FilterDimension::Salary,
                value: "₹30K - ₹50K".to_string(),
            },
        );
        let visible = state.visible_jobs();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].record.ncspjobid, "c");
    }

    #[test]
    fn test_sort_parsers() {
        assert_eq!(SortKey::parse("Match"), Some(SortKey::Match));
        assert_eq!(SortKey::parse("salary"), Some(SortKey::Salary));
        assert_eq!(SortKey::parse("rank"), None);
        assert_eq!(SortDirection::parse("ASC"), Some(SortDirection::Asc));
        assert_eq!(SortDirection::parse("down"), None);
    }
}
