//! Optional audit logging for cleanup runs.
//!
//! When `scour run --audit-log <FILE>` is given, each invocation appends one
//! event in NDJSON format (one JSON object per line). Declined runs are
//! logged too, so the audit trail records every time the gate was reached.
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: `run` or `declined`
//! - `actor`: the owner string (e.g. `user@HOST`)
//! - `details`: freeform object (working dir, removed/failed counts)
//!
//! Scour owns no on-disk state by default; the log only exists when the
//! operator asks for it, and append failures degrade to a warning.

use crate::error::{Result, ScourError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as audit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Plan executed after an affirmed confirmation.
    Run,
    /// Confirmation gate reached and declined; nothing removed.
    Declined,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditAction::Run => write!(f, "run"),
            AuditAction::Declined => write!(f, "declined"),
        }
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: AuditAction,

    /// The actor who performed the action (e.g. `user@HOST`).
    pub actor: String,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl AuditEvent {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is determined
    /// from the environment (USER@HOSTNAME).
    pub fn new(action: AuditAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor_string(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ScourError::UserError(format!("failed to serialize audit event: {}", e)))
    }
}

/// Get the actor string for event metadata.
fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the audit log.
///
/// The file is created if it doesn't exist. Each append results in one line
/// with a trailing newline.
pub fn append_event(log_path: &Path, event: &AuditEvent) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| {
            ScourError::UserError(format!(
                "failed to open audit log '{}': {}",
                log_path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        ScourError::UserError(format!(
            "failed to write audit log '{}': {}",
            log_path.display(),
            e
        ))
    })?;

    Ok(())
}
