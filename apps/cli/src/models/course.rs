use serde::{Deserialize, Serialize};

/// A single recommended course. All fields arrive as strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseRecommendation {
    pub course_name: String,
    pub platform: String,
    pub duration: String,
    pub link: String,
    pub educator: String,
    pub skill_covered: String,
    pub difficulty_level: String,
    pub rating: String,
}

/// Envelope of the course recommendation endpoints.
///
/// `keywords_processed` may carry the sentinel "NA" for skills the backend
/// could not map to any course; callers drop those before display.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CourseRecommendationResponse {
    pub recommendations: Vec<CourseRecommendation>,
    pub keywords_processed: Vec<String>,
    pub processing_time_ms: f64,
}
