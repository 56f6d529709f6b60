//! Skill-gap derivation.
//!
//! Finds the skills job listings ask for that the user did not supply; those
//! seed the course-recommendation request. One canonicalization policy is
//! used for every skill comparison in the app (see `canon`), so the gap set,
//! the matched-skill badge, and duplicate-skill checks can never disagree
//! about whether two spellings are the same skill.

use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::jobs::NormalizedJob;

/// Canonical comparison form: all whitespace removed, then lowercased.
/// "Node JS", "node js" and "NodeJS" all compare equal.
pub fn canon(skill: &str) -> String {
    skill
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Distinct job skills the user did not supply.
///
/// Deduplicated by canonical form; returned strings keep their first-seen
/// original casing, in order of first appearance across the job list. The
/// full set is returned; callers subsample separately (`sample_seeds`).
pub fn unmatched_skills(jobs: &[NormalizedJob], user_skills: &[String]) -> Vec<String> {
    let supplied: HashSet<String> = user_skills.iter().map(|s| canon(s)).collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut unmatched = Vec::new();
    for job in jobs {
        for skill in &job.skills_array {
            let key = canon(skill);
            if key.is_empty() || supplied.contains(&key) {
                continue;
            }
            if seen.insert(key) {
                unmatched.push(skill.clone());
            }
        }
    }
    unmatched
}

/// Whether a job skill renders with the "matched" badge: the user supplied
/// it, or the backend listed it in the job's `skills_matched`.
pub fn is_skill_matched(skill: &str, user_skills: &[String], skills_matched: &[String]) -> bool {
    let key = canon(skill);
    user_skills.iter().any(|s| canon(s) == key)
        || skills_matched.iter().any(|s| canon(s) == key)
}

/// Uniform shuffle, then keep at most `max` elements.
pub fn sample_seeds(mut skills: Vec<String>, max: usize) -> Vec<String> {
    skills.shuffle(&mut rand::rng());
    skills.truncate(max);
    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::normalize_job;
    use crate::models::job::JobRecord;

    fn job_with_keywords(keywords: &str) -> NormalizedJob {
        normalize_job(JobRecord {
            keywords: keywords.to_string(),
            ..JobRecord::default()
        })
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unmatched_is_job_skills_minus_user_skills() {
        let jobs = vec![
            job_with_keywords("Python, SQL"),
            job_with_keywords("Python, React"),
        ];
        let mut result = unmatched_skills(&jobs, &skills(&["Python"]));
        result.sort();
        assert_eq!(result, vec!["React", "SQL"]);
    }

    #[test]
    fn test_unmatched_compares_canonically() {
        let jobs = vec![job_with_keywords("node js, PYTHON")];
        let result = unmatched_skills(&jobs, &skills(&["NodeJS", "python"]));
        assert!(result.is_empty());
    }

    #[test]
    fn test_unmatched_keeps_first_seen_casing() {
        let jobs = vec![job_with_keywords("PostgreSQL, postgresql, Redis")];
        let result = unmatched_skills(&jobs, &[]);
        assert_eq!(result, vec!["PostgreSQL", "Redis"]);
    }

    #[test]
    fn test_unmatched_with_no_user_skills_returns_all_distinct() {
        let jobs = vec![job_with_keywords("A, B"), job_with_keywords("B, C")];
        let result = unmatched_skills(&jobs, &[]);
        assert_eq!(result, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_badge_matches_user_skills_and_backend_matches() {
        let user = skills(&["Python"]);
        let backend = skills(&["Machine Learning"]);

        assert!(is_skill_matched("python", &user, &backend));
        assert!(is_skill_matched("machinelearning", &user, &backend));
        assert!(!is_skill_matched("Go", &user, &backend));
    }

    #[test]
    fn test_sample_caps_size_and_draws_from_input() {
        let input = skills(&["a", "b", "c", "d", "e", "f"]);
        let sample = sample_seeds(input.clone(), 4);
        assert_eq!(sample.len(), 4);
        for skill in &sample {
            assert!(input.contains(skill));
        }
    }

    #[test]
    fn test_sample_returns_everything_when_under_cap() {
        let input = skills(&["a", "b"]);
        let mut sample = sample_seeds(input, 4);
        sample.sort();
        assert_eq!(sample, vec!["a", "b"]);
    }
}
