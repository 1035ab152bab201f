//! Upload workflow coordinator.
//!
//! Owns the client info and the staged files for one upload session and
//! gates submission on both being present:
//!
//! ```text
//! Idle ──info──▶ InfoProvided ──stage──▶ FilesStaged ──submit──▶ Submitting
//!                                             ▲                     │
//!                                             └────── failure ──────┤
//!                                                                   ▼
//!                                                                Success
//! ```
//!
//! Submission is split in two halves ([`UploadWorkflow::begin_submission`]
//! and [`UploadWorkflow::finish_submission`]) so reactive callers never hold
//! the workflow across an await point.

use crate::services::DataSource;
use crate::types::{AppResult, ClientInfo, UploadStatementResponse};
use crate::workflow::staging::{FileCandidate, StageOutcome, StagedFile, StagingArea, StagingConfig};

/// Tabs of the upload page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadTab {
    #[default]
    Manual,
    Connect,
}

/// Where the manual upload path currently stands.
///
/// There is no separate failed phase: a failed submission keeps the client
/// info and staged files and lands back in `FilesStaged`, ready to retry.
/// The failure itself is reported through [`SubmissionOutcome::Failed`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowPhase {
    Idle,
    InfoProvided,
    FilesStaged,
    Submitting,
    Success,
}

/// Identifiers handed to the analysis page after a successful upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadReceipt {
    pub client_id: String,
    pub upload_id: String,
}

impl UploadReceipt {
    pub fn navigation_target(&self) -> String {
        format!(
            "/analysis?clientId={}&uploadId={}",
            self.client_id, self.upload_id
        )
    }
}

/// Snapshot taken when a submission starts.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionRequest<P> {
    pub client_info: ClientInfo,
    pub files: Vec<StagedFile<P>>,
}

/// How a submission resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded(UploadReceipt),
    Failed(String),
}

impl SubmissionOutcome {
    /// Text for the transient notification.
    pub fn notification(&self) -> String {
        match self {
            SubmissionOutcome::Succeeded(_) => "Files uploaded successfully!".to_string(),
            SubmissionOutcome::Failed(message) => format!("Upload failed: {}", message),
        }
    }
}

/// State owned by the upload page.
#[derive(Clone, Debug)]
pub struct UploadWorkflow<P> {
    client_info: Option<ClientInfo>,
    staging: StagingArea<P>,
    active_tab: UploadTab,
    submitting: bool,
    completed: Option<UploadReceipt>,
}

impl<P: Clone> UploadWorkflow<P> {
    pub fn new(config: StagingConfig) -> Self {
        Self {
            client_info: None,
            staging: StagingArea::new(config),
            active_tab: UploadTab::default(),
            submitting: false,
            completed: None,
        }
    }

    pub fn phase(&self) -> WorkflowPhase {
        if self.submitting {
            WorkflowPhase::Submitting
        } else if self.client_info.is_none() {
            if self.completed.is_some() {
                WorkflowPhase::Success
            } else {
                WorkflowPhase::Idle
            }
        } else if self.staging.is_empty() {
            WorkflowPhase::InfoProvided
        } else {
            WorkflowPhase::FilesStaged
        }
    }

    pub fn client_info(&self) -> Option<&ClientInfo> {
        self.client_info.as_ref()
    }

    pub fn files(&self) -> &[StagedFile<P>] {
        self.staging.files()
    }

    pub fn staging_config(&self) -> &StagingConfig {
        self.staging.config()
    }

    pub fn active_tab(&self) -> UploadTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: UploadTab) {
        self.active_tab = tab;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Receipt of the last successful upload, until new info is provided.
    pub fn last_receipt(&self) -> Option<&UploadReceipt> {
        self.completed.as_ref()
    }

    /// Whether the "Start Analysis" action is enabled.
    pub fn can_submit(&self) -> bool {
        self.client_info.is_some() && !self.staging.is_empty() && !self.submitting
    }

    /// Record (or replace) the client info. Ignored while submitting.
    pub fn provide_client_info(&mut self, info: ClientInfo) -> bool {
        if self.submitting {
            return false;
        }
        log::info!(
            "🏢 Client info provided: {} ({} account(s))",
            info.name(),
            info.account_numbers().len()
        );
        self.client_info = Some(info);
        self.completed = None;
        true
    }

    /// Hand candidates to the staging area.
    ///
    /// Nothing is staged before client info exists or while submitting.
    pub fn stage(&mut self, candidates: Vec<FileCandidate<P>>) -> StageOutcome<P> {
        if self.client_info.is_none() || self.submitting {
            log::warn!("⚠️  Ignored {} dropped file(s): staging is locked", candidates.len());
            return StageOutcome::empty();
        }
        self.staging.stage(candidates)
    }

    /// Remove a staged file. Ignored while submitting.
    pub fn remove_file(&mut self, id: &str) -> bool {
        if self.submitting {
            return false;
        }
        self.staging.remove(id).is_some()
    }

    /// Enter `Submitting` and snapshot what must be sent.
    ///
    /// Returns `None`, issuing nothing, unless client info is present, files
    /// are staged and no submission is already in flight.
    pub fn begin_submission(&mut self) -> Option<SubmissionRequest<P>> {
        if !self.can_submit() {
            return None;
        }
        let client_info = self.client_info.clone()?;
        self.submitting = true;
        log::info!("📤 Uploading {} statement(s)...", self.staging.len());
        Some(SubmissionRequest {
            client_info,
            files: self.staging.files().to_vec(),
        })
    }

    /// Apply the upload result.
    ///
    /// Success clears the session; failure keeps it so the user can retry.
    pub fn finish_submission(
        &mut self,
        result: AppResult<UploadStatementResponse>,
    ) -> SubmissionOutcome {
        self.submitting = false;
        match result {
            Ok(response) => {
                log::info!(
                    "✅ Upload {} accepted for client {} ({})",
                    response.upload_id,
                    response.client_id,
                    response.status
                );
                let receipt = UploadReceipt {
                    client_id: response.client_id,
                    upload_id: response.upload_id,
                };
                self.client_info = None;
                self.staging.clear();
                self.completed = Some(receipt.clone());
                SubmissionOutcome::Succeeded(receipt)
            }
            Err(err) => {
                log::error!("❌ Upload failed: {}", err);
                SubmissionOutcome::Failed(err.to_string())
            }
        }
    }

    /// Run one full submission against `source`.
    ///
    /// Returns `None` when the submission guard refused to start.
    pub async fn submit<S>(&mut self, source: &S) -> Option<SubmissionOutcome>
    where
        S: DataSource<Payload = P>,
    {
        let request = self.begin_submission()?;
        let result = source
            .upload_statement(&request.files, &request.client_info)
            .await;
        Some(self.finish_submission(result))
    }
}
