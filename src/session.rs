use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::models::message::{ChatMessage, ModelInfo};
use crate::models::task::DEFAULT_TASK;

/// A fully composed submission, ready for the network leg.
#[derive(Debug, Clone)]
pub struct Submission {
    pub query: String,
    pub task_type: String,
    pub file: Option<PathBuf>,
}

/// Snapshot of the session for the page, serialized over IPC.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub messages: Vec<ChatMessage>,
    pub pending_input: String,
    pub pending_file: Option<String>,
    pub selected_task: String,
    pub awaiting_response: bool,
}

/// The in-memory chat session: ordered message history plus the pending
/// composition state. History is append-only; nothing is persisted and the
/// session dies with the window.
///
/// The session is a two-state machine: idle, and awaiting a reply between
/// [`ChatSession::begin_submission`] and [`ChatSession::settle`]. There is
/// no retry and no cancellation; a submission always runs to settlement.
#[derive(Debug)]
pub struct ChatSession {
    history: Vec<ChatMessage>,
    pending_input: String,
    pending_file: Option<PathBuf>,
    selected_task: String,
    awaiting_response: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            pending_input: String::new(),
            pending_file: None,
            selected_task: DEFAULT_TASK.to_string(),
            awaiting_response: false,
        }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    pub fn selected_task(&self) -> &str {
        &self.selected_task
    }

    pub fn pending_file(&self) -> Option<&Path> {
        self.pending_file.as_deref()
    }

    pub fn select_task(&mut self, key: impl Into<String>) {
        self.selected_task = key.into();
    }

    pub fn attach_file(&mut self, path: PathBuf) {
        self.pending_file = Some(path);
    }

    pub fn clear_file(&mut self) {
        self.pending_file = None;
    }

    /// Start a submission cycle: record the pending input, append the user
    /// message and mark the session as awaiting a reply. Returns `None`
    /// without touching any state when there is nothing to send (blank
    /// query and no attached file).
    pub fn begin_submission(&mut self, query: &str) -> Option<Submission> {
        if query.trim().is_empty() && self.pending_file.is_none() {
            return None;
        }

        self.pending_input = query.to_string();
        self.history.push(ChatMessage::user(query));
        self.awaiting_response = true;

        Some(Submission {
            query: query.to_string(),
            task_type: self.selected_task.clone(),
            file: self.pending_file.clone(),
        })
    }

    /// Append the agent-side reply for the current cycle. Error text goes
    /// through here too, as a regular agent message.
    pub fn record_reply(
        &mut self,
        content: impl Into<String>,
        model_info: Option<ModelInfo>,
    ) -> ChatMessage {
        let message = ChatMessage::agent(content, model_info);
        self.history.push(message.clone());
        message
    }

    /// Close the submission cycle. Runs regardless of how the network leg
    /// ended: the flag drops and the composition state is cleared.
    pub fn settle(&mut self) {
        self.awaiting_response = false;
        self.pending_input.clear();
        self.pending_file = None;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            messages: self.history.clone(),
            pending_input: self.pending_input.clone(),
            pending_file: self
                .pending_file
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            selected_task: self.selected_task.clone(),
            awaiting_response: self.awaiting_response,
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::message::MessageRole;

    #[test]
    fn test_blank_submission_is_a_noop() {
        let mut session = ChatSession::new();
        assert!(session.begin_submission("").is_none());
        assert!(session.begin_submission("   ").is_none());
        assert!(session.history().is_empty());
        assert!(!session.is_awaiting_response());
    }

    #[test]
    fn test_submission_appends_user_message_before_network_leg() {
        let mut session = ChatSession::new();
        let submission = session
            .begin_submission("analyze this statement")
            .expect("should submit");

        assert_eq!(submission.query, "analyze this statement");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, MessageRole::User);
        assert_eq!(session.history()[0].content, "analyze this statement");
        assert!(session.is_awaiting_response());
    }

    #[test]
    fn test_file_alone_passes_the_precondition() {
        let mut session = ChatSession::new();
        session.attach_file(PathBuf::from("handler.py"));

        let submission = session
            .begin_submission("")
            .expect("attached file alone should submit");
        assert_eq!(submission.file.as_deref(), Some(Path::new("handler.py")));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_submission_carries_the_selected_task() {
        let mut session = ChatSession::new();
        assert_eq!(session.selected_task(), DEFAULT_TASK);

        session.select_task("visual_content");
        let submission = session.begin_submission("a sunrise").expect("should submit");
        assert_eq!(submission.task_type, "visual_content");
    }

    #[test]
    fn test_reply_then_settle_closes_the_cycle() {
        let mut session = ChatSession::new();
        session.attach_file(PathBuf::from("handler.py"));
        session.begin_submission("review this").expect("should submit");
        assert!(session.is_awaiting_response());

        session.record_reply("Looks fine.", None);
        session.settle();

        assert!(!session.is_awaiting_response());
        assert!(session.pending_file().is_none());
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].role, MessageRole::User);
        assert_eq!(session.history()[1].role, MessageRole::Agent);
        assert_ne!(session.history()[0].id, session.history()[1].id);
    }

    #[test]
    fn test_error_reply_is_an_ordinary_agent_message() {
        let mut session = ChatSession::new();
        session.begin_submission("hello").expect("should submit");
        let message = session.record_reply("Transport error: connection refused", None);
        session.settle();

        assert_eq!(message.role, MessageRole::Agent);
        assert!(!message.content.is_empty());
        assert!(!session.is_awaiting_response());
    }

    #[test]
    fn test_settle_without_reply_still_clears_state() {
        let mut session = ChatSession::new();
        session.begin_submission("hello").expect("should submit");
        session.settle();

        assert!(!session.is_awaiting_response());
        assert_eq!(session.snapshot().pending_input, "");
        assert_eq!(session.history().len(), 1);
    }
}
