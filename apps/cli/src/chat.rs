//! Conversational client state.
//!
//! The chat session is a plain message list plus a phase marker the backend
//! drives ("profile_building" until a CV or enough conversation establishes a
//! profile). Turns go to `/chat`, or `/chat_with_cv` once a CV profile is
//! installed. Backend failures never surface as errors here; they degrade
//! into a visible bot message so the conversation keeps going.

use std::path::Path;

use tokio::fs;
use tracing::{info, warn};

use crate::backend::BackendClient;
use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::models::profile::{
    ChatTurnRequest, ChatTurnResponse, CvProfile, CvUploadResponse, HistoryMessage,
};

/// Trailing turns sent as context with every message.
const HISTORY_WINDOW: usize = 10;
/// Upload cap, enforced before any bytes leave the machine.
const MAX_CV_BYTES: u64 = 10 * 1024 * 1024;
const ALLOWED_CV_EXTENSIONS: [&str; 6] = ["pdf", "doc", "docx", "png", "jpg", "jpeg"];

const INITIAL_PHASE: &str = "profile_building";
const CV_ANALYSIS_PHASE: &str = "cv_analysis";

/// Shown in place of a reply when the chat backend cannot be reached.
const FALLBACK_REPLY: &str =
    "Sorry, I encountered an error. Please try again or check if the backend server is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
}

impl ChatRole {
    /// Wire name used in conversation history payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Bot => "bot",
        }
    }
}

/// One transcript entry. Bot replies may carry structured attachments.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub jobs: Vec<JobRecord>,
    pub suggestions: Vec<String>,
}

impl ChatMessage {
    fn text(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            jobs: Vec::new(),
            suggestions: Vec::new(),
        }
    }
}

/// In-memory conversation state for one run of the program.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub messages: Vec<ChatMessage>,
    pub phase: String,
    pub profile: Option<CvProfile>,
    pub cv_processed: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            phase: INITIAL_PHASE.to_string(),
            profile: None,
            cv_processed: false,
        }
    }

    /// The trailing window of turns, oldest first, in the wire shape.
    pub fn history_window(&self) -> Vec<HistoryMessage> {
        let start = self.messages.len().saturating_sub(HISTORY_WINDOW);
        self.messages[start..]
            .iter()
            .map(|message| HistoryMessage {
                role: message.role.as_str().to_string(),
                content: message.content.clone(),
            })
            .collect()
    }

    /// Builds the request for one outgoing message. History covers turns
    /// before this message; the message itself rides in its own field.
    pub fn turn_request(&self, message: &str) -> ChatTurnRequest {
        ChatTurnRequest {
            message: message.to_string(),
            chat_phase: self.phase.clone(),
            user_profile: self.profile.clone(),
            conversation_history: self.history_window(),
            cv_profile_data: if self.cv_aware() {
                self.profile.clone()
            } else {
                None
            },
        }
    }

    /// True once a CV profile is installed; routes turns to `/chat_with_cv`.
    pub fn cv_aware(&self) -> bool {
        self.cv_processed && self.profile.is_some()
    }

    pub fn install_profile(&mut self, profile: CvProfile) {
        self.profile = Some(profile);
        self.cv_processed = true;
        self.phase = CV_ANALYSIS_PHASE.to_string();
    }

    /// Folds a backend reply into the transcript and session state. An empty
    /// `chat_phase` means "no transition", matching the backend contract.
    pub fn apply_reply(&mut self, response: ChatTurnResponse) {
        let mut message = ChatMessage::text(ChatRole::Bot, response.response);
        message.jobs = response.jobs;
        message.suggestions = response.suggestions;
        self.messages.push(message);

        if let Some(profile) = response.profile_data {
            self.profile = Some(profile);
        }
        if let Some(phase) = response.chat_phase.filter(|p| !p.is_empty()) {
            self.phase = phase;
        }
    }
}

/// Sends one user message and folds the reply (or the fallback) into the
/// session. Never fails; connectivity problems become a bot message.
pub async fn send_turn(backend: &BackendClient, session: &mut ChatSession, message: &str) {
    let request = session.turn_request(message);
    let cv_aware = session.cv_aware();
    session
        .messages
        .push(ChatMessage::text(ChatRole::User, message));

    match backend.chat_turn(&request, cv_aware).await {
        Ok(response) => session.apply_reply(response),
        Err(error) => {
            warn!("Chat turn failed: {error}");
            session
                .messages
                .push(ChatMessage::text(ChatRole::Bot, FALLBACK_REPLY));
        }
    }
}

/// Client-side checks before any upload traffic.
pub async fn validate_cv_file(path: &Path) -> Result<(), AppError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    if !ALLOWED_CV_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::Validation(
            "Please upload a valid CV file (PDF, DOC, DOCX, PNG, JPG)".to_string(),
        ));
    }

    let metadata = fs::metadata(path).await?;
    if metadata.len() > MAX_CV_BYTES {
        return Err(AppError::Validation(
            "File size must be less than 10MB".to_string(),
        ));
    }
    Ok(())
}

/// Validates, uploads, and installs the extracted profile. The caller gets
/// the full response back so matched jobs can feed the search session.
pub async fn run_upload(
    backend: &BackendClient,
    session: &mut ChatSession,
    path: &Path,
) -> Result<CvUploadResponse, AppError> {
    validate_cv_file(path).await?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("cv")
        .to_string();
    info!("Uploading CV {file_name}");

    let bytes = fs::read(path).await?;
    let response = backend.upload_cv(&file_name, bytes).await?;

    match (response.success, &response.profile) {
        (true, Some(profile)) => {
            info!(
                "CV processed: {} skill(s), {} matched job(s)",
                profile.skills.len(),
                response.jobs.len()
            );
            session.install_profile(profile.clone());
        }
        _ => {
            warn!("CV upload returned no usable profile");
            session.phase = INITIAL_PHASE.to_string();
        }
    }
    Ok(response)
}
