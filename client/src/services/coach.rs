//! AI drill coach — free-text prompt in, advice plus an optional board
//! proposal out.
//!
//! DESIGN
//! ======
//! The transport sits behind the [`CoachClient`] trait so tests can mock it.
//! [`CoachService`] is the boundary the session talks to: it never fails.
//! Any client error is logged and degraded to a fixed apology reply, so a
//! dead backend costs the user one message, never a crash. A proposal
//! ([`TacticSheet`]) arrives in flat wire form and is converted to entity
//! types on apply, assigning fresh ids and clamping coordinates.

#[cfg(test)]
#[path = "coach_test.rs"]
mod coach_test;

use pitch::board::{IdGen, Item, ItemKind, Line, LineKind};
use pitch::coords::Position;
use serde::{Deserialize, Serialize};

/// Reply shown when the coach backend cannot be reached.
pub const APOLOGY_TEXT: &str = "Sorry, I couldn't reach the assistant coach. Please try again in a moment.";

/// Endpoint handled by the hosting backend.
pub const COACH_URL: &str = "/api/coach";

#[derive(Debug, thiserror::Error)]
pub enum CoachError {
    /// The HTTP request itself failed (network, CORS, aborted).
    #[error("request failed: {0}")]
    Request(String),
    /// The backend answered with a non-success status.
    #[error("response error: status {status}")]
    Status { status: u16 },
    /// The response body could not be deserialized.
    #[error("response parse failed: {0}")]
    Parse(String),
    /// No browser environment to make the call from.
    #[error("coach unavailable outside the browser")]
    Unavailable,
}

/// Request body for the coach endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachRequest {
    pub query: String,
    /// Current session name, if any, as conversational context.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub context: Option<String>,
}

/// A proposed marker in wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
}

/// A proposed line in wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetLine {
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

/// A complete board proposal from the coach.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TacticSheet {
    #[serde(default)]
    pub items: Vec<SheetItem>,
    #[serde(default)]
    pub lines: Vec<SheetLine>,
}

impl TacticSheet {
    /// Convert to entity types, assigning fresh ids and clamping every
    /// coordinate into board range (the model is not trusted to stay in
    /// bounds).
    #[must_use]
    pub fn into_entities(self, ids: &mut dyn IdGen) -> (Vec<Item>, Vec<Line>) {
        let items = self
            .items
            .into_iter()
            .map(|sheet| Item {
                id: ids.next(),
                kind: sheet.kind,
                pos: Position::new(sheet.x, sheet.y),
                rotation: 0.0,
                label: sheet.label,
                text: None,
            })
            .collect();
        let lines = self
            .lines
            .into_iter()
            .map(|sheet| {
                Line::new(
                    ids.next(),
                    sheet.kind,
                    Position::new(sheet.start_x, sheet.start_y),
                    Position::new(sheet.end_x, sheet.end_y),
                )
            })
            .collect();
        (items, lines)
    }
}

/// The coach's reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillAdvice {
    pub text: String,
    #[serde(rename = "tacticData", skip_serializing_if = "Option::is_none", default)]
    pub tactic: Option<TacticSheet>,
}

impl DrillAdvice {
    /// The fixed degraded reply used when the backend fails.
    #[must_use]
    pub fn apology() -> Self {
        Self { text: APOLOGY_TEXT.to_owned(), tactic: None }
    }
}

/// Transport seam for the coach backend. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait CoachClient {
    /// Send one prompt to the backend.
    ///
    /// # Errors
    ///
    /// Returns a [`CoachError`] if the request fails, the backend answers
    /// with an error status, or the body is malformed.
    async fn ask(&self, request: &CoachRequest) -> Result<DrillAdvice, CoachError>;
}

/// HTTP client posting to [`COACH_URL`]. Browser-only; on native builds
/// every call reports [`CoachError::Unavailable`].
#[derive(Debug, Default)]
pub struct HttpCoach;

#[async_trait::async_trait(?Send)]
impl CoachClient for HttpCoach {
    async fn ask(&self, request: &CoachRequest) -> Result<DrillAdvice, CoachError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(COACH_URL)
                .json(request)
                .map_err(|e| CoachError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| CoachError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(CoachError::Status { status: resp.status() });
            }
            resp.json::<DrillAdvice>()
                .await
                .map_err(|e| CoachError::Parse(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(CoachError::Unavailable)
        }
    }
}

/// The boundary the session talks to. Never fails: every error is logged
/// and degraded to the fixed apology.
pub struct CoachService {
    client: Box<dyn CoachClient>,
}

impl CoachService {
    #[must_use]
    pub fn new(client: Box<dyn CoachClient>) -> Self {
        Self { client }
    }

    /// Ask the coach. Always produces advice.
    pub async fn advise(&self, query: &str, context: Option<&str>) -> DrillAdvice {
        let request = CoachRequest {
            query: query.to_owned(),
            context: context.map(str::to_owned),
        };
        match self.client.ask(&request).await {
            Ok(advice) => advice,
            Err(err) => {
                log::error!("coach request failed: {err}");
                DrillAdvice::apology()
            }
        }
    }
}

impl Default for CoachService {
    fn default() -> Self {
        Self::new(Box::new(HttpCoach))
    }
}
