//! Chat transcript state for the assistant coach panel.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

use crate::services::coach::{DrillAdvice, TacticSheet};

/// Message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Coach,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachMessage {
    pub role: Role,
    pub text: String,
    /// Board proposal the user may apply, when the coach produced one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tactic: Option<TacticSheet>,
}

/// The transcript plus the in-flight request flag. At most one request is
/// in flight at a time; the chrome disables input while `pending` is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    messages: Vec<CoachMessage>,
    pending: bool,
}

impl ChatState {
    /// A transcript opened with the coach's greeting.
    #[must_use]
    pub fn with_greeting() -> Self {
        let mut state = Self::default();
        state.messages.push(CoachMessage {
            role: Role::Coach,
            text: "Hello Coach! I can help you design drills. Ask me for \"a 4v2 rondo\" or \"a corner kick setup\"."
                .to_owned(),
            tactic: None,
        });
        state
    }

    #[must_use]
    pub fn messages(&self) -> &[CoachMessage] {
        &self.messages
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record the outgoing prompt and mark a request in flight. Returns
    /// `false` (recording nothing) while another request is pending or when
    /// the prompt is blank.
    pub fn begin(&mut self, query: &str) -> bool {
        if self.pending || query.trim().is_empty() {
            return false;
        }
        self.messages.push(CoachMessage { role: Role::User, text: query.to_owned(), tactic: None });
        self.pending = true;
        true
    }

    /// Append the coach's reply (or the apology) as one atomic entry and
    /// clear the in-flight flag.
    pub fn finish(&mut self, advice: DrillAdvice) {
        self.messages.push(CoachMessage { role: Role::Coach, text: advice.text, tactic: advice.tactic });
        self.pending = false;
    }

    /// The tactic sheet attached to transcript entry `index`, if any.
    #[must_use]
    pub fn tactic_at(&self, index: usize) -> Option<&TacticSheet> {
        self.messages.get(index)?.tactic.as_ref()
    }
}
