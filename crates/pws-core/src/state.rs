//! Export state: captured snapshot, per-format status and user messages

use crate::error::{PwsError, Result};
use crate::export::{DownloadTarget, ExportKind, ExportManager};
use crate::response::RawResponse;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{info, warn};

/// Status of one export control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExportStatus {
    #[default]
    Idle,
    Exporting,
    Exported,
}

/// Per-format export status
///
/// Each format moves `Idle -> Exporting -> Exported` on success or back to
/// `Idle` on failure. A format that is exporting refuses to start again;
/// the other format is unaffected.
#[derive(Debug, Clone, Default)]
pub struct ExportControls {
    status: HashMap<ExportKind, ExportStatus>,
}

impl ExportControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, kind: ExportKind) -> ExportStatus {
        self.status.get(&kind).copied().unwrap_or_default()
    }

    /// Enter `Exporting` for `kind`
    pub fn begin(&mut self, kind: ExportKind) -> Result<()> {
        if self.status(kind) == ExportStatus::Exporting {
            return Err(PwsError::ExportInProgress(kind));
        }
        self.status.insert(kind, ExportStatus::Exporting);
        Ok(())
    }

    pub fn complete(&mut self, kind: ExportKind) {
        self.status.insert(kind, ExportStatus::Exported);
    }

    pub fn fail(&mut self, kind: ExportKind) {
        self.status.insert(kind, ExportStatus::Idle);
    }

    /// Return every format to `Idle`
    pub fn reset(&mut self) {
        self.status.clear();
    }
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Danger,
}

/// Short message shown to the user after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub severity: Severity,
    pub message: String,
}

impl StatusMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Danger,
            message: message.into(),
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Owner of the last captured response and the export controls
pub struct Workbench {
    response: Option<RawResponse>,
    controls: ExportControls,
    exports: ExportManager,
    last_message: Option<StatusMessage>,
}

impl Workbench {
    pub fn new(exports: ExportManager) -> Self {
        Self {
            response: None,
            controls: ExportControls::new(),
            exports,
            last_message: None,
        }
    }

    /// Replace the snapshot with a freshly fetched response
    pub fn capture(&mut self, response: RawResponse) {
        self.controls.reset();
        self.last_message = None;
        self.response = Some(response);
    }

    pub fn response(&self) -> Option<&RawResponse> {
        self.response.as_ref()
    }

    pub fn controls(&self) -> &ExportControls {
        &self.controls
    }

    pub fn last_message(&self) -> Option<&StatusMessage> {
        self.last_message.as_ref()
    }

    /// Export the captured response and deliver it to `target`
    ///
    /// The snapshot survives any failure and stays available for a retry.
    pub fn export(&mut self, kind: ExportKind, target: &dyn DownloadTarget) -> StatusMessage {
        let message = match self.response.as_ref() {
            None => StatusMessage::info("Fetch data before exporting"),
            Some(response) => match self.controls.begin(kind) {
                Err(e) => StatusMessage::info(e.to_string()),
                Ok(()) => {
                    let result = self
                        .exports
                        .export_response(response, kind)
                        .and_then(|artifact| {
                            target.deliver(&artifact)?;
                            Ok(artifact.file_name)
                        });
                    match result {
                        Ok(file_name) => {
                            self.controls.complete(kind);
                            info!("Exported {}", file_name);
                            StatusMessage::success(format!("Exported {}", file_name))
                        }
                        Err(e) => {
                            self.controls.fail(kind);
                            warn!("{} export failed: {}", kind, e);
                            StatusMessage::danger(format!("Export to {} failed: {}", kind, e))
                        }
                    }
                }
            },
        };

        self.last_message = Some(message.clone());
        message
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new(ExportManager::new())
    }
}
