//! Backend client: the single point of entry for all job-search API calls.
//!
//! No other module may talk to the backend directly. All HTTP traffic goes
//! through `BackendClient`, which owns the base URL, the configurable search
//! endpoint name, retry policy, and error mapping. The search flow depends
//! only on the narrow `SearchBackend` trait so tests can drive it with a
//! stub.

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::course::CourseRecommendationResponse;
use crate::models::job::{JobRecord, JobSummary, SearchResponse};
use crate::models::profile::{
    ChatTurnRequest, ChatTurnResponse, CvUploadResponse, SuggestionsResponse,
};

const RECOMMEND_COURSE_ENDPOINT: &str = "recommend_course";
const RECOMMEND_COURSES_ENDPOINT: &str = "recommend_courses";
const UPLOAD_CV_ENDPOINT: &str = "upload_cv";
const CHAT_ENDPOINT: &str = "chat";
const CHAT_WITH_CV_ENDPOINT: &str = "chat_with_cv";
const SUGGESTIONS_ENDPOINT: &str = "search_suggestions";

const MAX_RETRIES: u32 = 3;
/// CV processing regularly takes tens of seconds server-side.
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Backend unavailable after {retries} retries")]
    Unavailable { retries: u32 },
}

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    detail: String,
}

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    skills: &'a [String],
    limit: u32,
}

#[derive(Debug, Serialize)]
struct GapRecommendRequest<'a> {
    keywords_unmatched: &'a [String],
}

#[derive(Debug, Serialize)]
struct JobsRecommendRequest<'a> {
    user_skills: &'a [String],
    job_results: &'a [JobSummary],
}

/// The slice of the backend the search flow depends on.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search_jobs(
        &self,
        skills: &[String],
        limit: u32,
    ) -> Result<Vec<JobRecord>, BackendError>;

    async fn recommend_for_gap(
        &self,
        keywords_unmatched: &[String],
    ) -> Result<CourseRecommendationResponse, BackendError>;
}

/// HTTP client for the job-search backend.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    search_endpoint: String,
}

impl BackendClient {
    pub fn new(base_url: &str, search_endpoint: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            search_endpoint: search_endpoint.to_string(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// POST with retry on 429/5xx and transport errors.
    /// Backoff: 1s, 2s between attempts.
    async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        let mut last_error: Option<BackendError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Backend call to {endpoint} attempt {attempt} failed, retrying after {}ms...",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self.client.post(&url).json(body).send().await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(BackendError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Backend returned {status} for {endpoint}: {body}");
                last_error = Some(BackendError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorBody>(&body)
                    .map(|e| e.detail)
                    .unwrap_or(body);
                return Err(BackendError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let body = response.text().await?;
            let parsed: T = serde_json::from_str(&body)?;
            debug!("Backend call to {endpoint} succeeded");
            return Ok(parsed);
        }

        Err(last_error.unwrap_or(BackendError::Unavailable {
            retries: MAX_RETRIES,
        }))
    }

    /// Single-shot GET; interactive lookups do not retry.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BackendError> {
        let response = self
            .client
            .get(self.url(endpoint))
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.detail)
                .unwrap_or(body);
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Searches jobs for the given skills against the configured endpoint.
    pub async fn search_jobs(
        &self,
        skills: &[String],
        limit: u32,
    ) -> Result<Vec<JobRecord>, BackendError> {
        let request = SearchRequest { skills, limit };
        let response: SearchResponse = self.post_json(&self.search_endpoint, &request).await?;
        Ok(response.jobs)
    }

    /// Requests courses for skills the user is missing.
    pub async fn recommend_for_gap(
        &self,
        keywords_unmatched: &[String],
    ) -> Result<CourseRecommendationResponse, BackendError> {
        let request = GapRecommendRequest { keywords_unmatched };
        self.post_json(RECOMMEND_COURSE_ENDPOINT, &request).await
    }

    /// Requests courses against a concrete result set (CV chat flow).
    pub async fn recommend_for_jobs(
        &self,
        user_skills: &[String],
        jobs: &[JobSummary],
    ) -> Result<CourseRecommendationResponse, BackendError> {
        let request = JobsRecommendRequest {
            user_skills,
            job_results: jobs,
        };
        self.post_json(RECOMMEND_COURSES_ENDPOINT, &request).await
    }

    /// One conversational turn. `cv_aware` selects the CV-grounded endpoint
    /// once an extracted profile exists.
    pub async fn chat_turn(
        &self,
        request: &ChatTurnRequest,
        cv_aware: bool,
    ) -> Result<ChatTurnResponse, BackendError> {
        let endpoint = if cv_aware {
            CHAT_WITH_CV_ENDPOINT
        } else {
            CHAT_ENDPOINT
        };
        self.post_json(endpoint, request).await
    }

    /// Uploads a CV as multipart form data. Not retried: the form is
    /// consumed per attempt and server-side processing is not idempotent.
    pub async fn upload_cv(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<CvUploadResponse, BackendError> {
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_for(file_name))?;
        let form = multipart::Form::new().part("cv_file", part);

        let response = self
            .client
            .post(self.url(UPLOAD_CV_ENDPOINT))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.detail)
                .unwrap_or(body);
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Autocomplete lookup. A body carrying `error` counts as a failure even
    /// on HTTP 200; callers degrade to an empty suggestion list.
    pub async fn search_suggestions(
        &self,
        query: &str,
    ) -> Result<SuggestionsResponse, BackendError> {
        let mut response: SuggestionsResponse = self
            .get_json(SUGGESTIONS_ENDPOINT, &[("q", query)])
            .await?;

        if let Some(message) = response.error.take() {
            return Err(BackendError::Api {
                status: 200,
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl SearchBackend for BackendClient {
    async fn search_jobs(
        &self,
        skills: &[String],
        limit: u32,
    ) -> Result<Vec<JobRecord>, BackendError> {
        BackendClient::search_jobs(self, skills, limit).await
    }

    async fn recommend_for_gap(
        &self,
        keywords_unmatched: &[String],
    ) -> Result<CourseRecommendationResponse, BackendError> {
        BackendClient::recommend_for_gap(self, keywords_unmatched).await
    }
}

/// Content type for the upload part, from the file extension.
fn mime_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit('.')
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_duplicate_slashes() {
        let client = BackendClient::new("http://localhost:8000/", "search_jobs");
        assert_eq!(client.url("chat"), "http://localhost:8000/chat");
        let client = BackendClient::new("http://localhost:8000", "search_jobs");
        assert_eq!(client.url("chat"), "http://localhost:8000/chat");
    }

    #[test]
    fn test_search_request_serializes_expected_shape() {
        let skills = vec!["Python".to_string(), "SQL".to_string()];
        let request = SearchRequest {
            skills: &skills,
            limit: 10,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["skills"][1], "SQL");
        assert_eq!(json["limit"], 10);
    }

    #[test]
    fn test_gap_request_uses_wire_field_name() {
        let gap = vec!["React".to_string()];
        let request = GapRecommendRequest {
            keywords_unmatched: &gap,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("keywords_unmatched").is_some());
    }

    #[test]
    fn test_mime_for_covers_accepted_extensions() {
        assert_eq!(mime_for("resume.pdf"), "application/pdf");
        assert!(mime_for("resume.DOCX").contains("wordprocessingml"));
        assert_eq!(mime_for("scan.jpeg"), "image/jpeg");
        assert_eq!(mime_for("odd.bin"), "application/octet-stream");
    }

    #[test]
    fn test_error_display_carries_status_and_message() {
        let error = BackendError::Api {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(error.to_string(), "API error (status 503): overloaded");
    }
}
