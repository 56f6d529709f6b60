use serde::{Deserialize, Serialize};

/// A job listing as returned by the search backend.
///
/// `ncspjobid` is unique within a result set. Numeric fields are
/// non-negative. Every other field may be missing on the wire, so the whole
/// struct deserializes with defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRecord {
    pub ncspjobid: String,
    pub title: String,
    pub organization_name: String,
    /// Backend-computed relevance, 0-100.
    pub match_percentage: f64,
    pub similarity_score: f64,
    /// Comma-delimited skill string, split by the normalizer.
    pub keywords: String,
    pub description: String,
    pub date: Option<String>,
    pub numberofopenings: Option<u32>,
    pub industryname: String,
    pub sectorname: String,
    pub functionalrolename: String,
    /// Average required experience in years.
    pub aveexp: f64,
    /// Average monthly wage in rupees.
    pub avewage: f64,
    pub gendercode: Option<String>,
    pub highestqualification: String,
    pub statename: String,
    pub districtname: String,
    /// Skills the backend already matched against the query, when it says.
    pub skills_matched: Vec<String>,
}

/// Trimmed job shape sent back to the backend when requesting course
/// recommendations for a result set.
#[derive(Debug, Clone, Serialize)]
pub struct JobSummary {
    pub ncspjobid: String,
    pub title: String,
    pub keywords: String,
    pub description: String,
    pub match_percentage: f64,
}

impl From<&JobRecord> for JobSummary {
    fn from(job: &JobRecord) -> Self {
        JobSummary {
            ncspjobid: job.ncspjobid.clone(),
            title: job.title.clone(),
            keywords: job.keywords.clone(),
            description: job.description.clone(),
            match_percentage: job.match_percentage,
        }
    }
}

/// Envelope of the search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub jobs: Vec<JobRecord>,
}
