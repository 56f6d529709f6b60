//! Search orchestration.
//!
//! Flow: search → normalize → derive skill gap → sample seeds → recommend.
//! Mirrors the backend sequencing of the product: recommendations are only
//! requested after a search lands, and every failure degrades into session
//! state (banner, demo data) instead of propagating. The function always
//! returns the next snapshot.

use tracing::{info, warn};

use crate::backend::SearchBackend;
use crate::recommend::{sample_seeds, unmatched_skills};
use crate::session::{reduce, SessionEvent, SessionState};

/// At most this many gap skills seed one recommendation request.
const MAX_RECOMMENDATION_SEEDS: usize = 4;

pub async fn run_search(
    backend: &dyn SearchBackend,
    state: &SessionState,
    limit: u32,
) -> SessionState {
    let state = reduce(state, SessionEvent::SearchStarted);

    info!(
        "Searching jobs for {} skill(s), limit {limit}",
        state.skills.len()
    );
    let records = match backend.search_jobs(&state.skills, limit).await {
        Ok(records) => records,
        Err(error) => {
            warn!("Job search failed: {error}");
            return reduce(
                &state,
                SessionEvent::SearchFailed(format!("Failed to fetch jobs: {error}")),
            );
        }
    };
    info!("Search returned {} job(s)", records.len());
    let state = reduce(&state, SessionEvent::JobsLoaded(records));

    if state.jobs.is_empty() {
        return state;
    }

    let gap = unmatched_skills(&state.jobs, &state.skills);
    if gap.is_empty() {
        info!("No skill gap in the result set; skipping course recommendations");
        return state;
    }

    let seeds = sample_seeds(gap, MAX_RECOMMENDATION_SEEDS);
    info!("Requesting course recommendations for {} skill(s)", seeds.len());

    match backend.recommend_for_gap(&seeds).await {
        Ok(response) => {
            let covered: Vec<String> = response
                .keywords_processed
                .into_iter()
                .filter(|skill| skill != "NA")
                .collect();
            info!(
                "Received {} course recommendation(s) in {:.0} ms",
                response.recommendations.len(),
                response.processing_time_ms
            );
            reduce(
                &state,
                SessionEvent::RecommendationsLoaded {
                    courses: response.recommendations,
                    covered_skills: covered,
                },
            )
        }
        Err(error) => {
            warn!("Course recommendation fetch failed: {error}");
            reduce(
                &state,
                SessionEvent::RecommendationsFailed(
                    "Course service unreachable; showing demo recommendations.".to_string(),
                ),
            )
        }
    }
}
