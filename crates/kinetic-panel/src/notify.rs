//! Non-blocking user notifications (toasts).

pub const SCHEMAS_INCOMPATIBLE: &str = "Schemas are incompatible, try fix";
pub const SORT_FAILED: &str = "Failed to sort animation";
pub const ADD_FAILED: &str = "Failed to add animation";
pub const REMOVE_FAILED: &str = "Failed to remove animation";

pub fn subject_not_found(subject: &str) -> String {
    format!("Subject \"{}\" not found", subject)
}

/// Receives user-visible error messages.
pub trait Notifier {
    fn error(&mut self, message: &str);
}

/// Sends notifications to the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&mut self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Keeps every message, for callers that report them later.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Notifier for RecordingNotifier {
    fn error(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
