//! File staging area: client-side acceptance of statements before upload.
//!
//! Files are validated against the accepted formats, the per-file size
//! limit and the total count limit. Accepted files are immediately
//! considered ready to send; no progress is simulated before submission.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::config::{MAX_FILES, MAX_FILE_SIZE};
use crate::types::{AcceptedFileType, ValidationError};

/// Limits enforced by the staging area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagingConfig {
    /// Per-file limit in bytes.
    pub max_size: u64,
    /// Total number of staged files.
    pub max_files: usize,
}

impl Default for StagingConfig {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
            max_files: MAX_FILES,
        }
    }
}

impl StagingConfig {
    /// Size limit in whole-or-fractional megabytes, as shown to users.
    pub fn max_size_mb(&self) -> String {
        format!("{}", self.max_size as f64 / (1024.0 * 1024.0))
    }

    /// "Supports PDF, CSV, XLS, and XLSX files up to 10MB each"
    pub fn hint(&self) -> String {
        let labels: Vec<&str> = AcceptedFileType::ALL.iter().map(|kind| kind.label()).collect();
        let formats = match labels.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{}, and {}", rest.join(", "), last),
            Some((last, _)) => last.to_string(),
            None => String::new(),
        };
        format!("Supports {} files up to {}MB each", formats, self.max_size_mb())
    }
}

/// A file offered to the staging area (dropped or picked).
#[derive(Clone, Debug, PartialEq)]
pub struct FileCandidate<P> {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    /// Opaque handle sent on upload (`web_sys::File` in the browser).
    pub payload: P,
}

/// Per-file status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileStatus {
    Uploading { progress: Option<u8> },
    Completed,
    Error { message: String },
}

impl FileStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            FileStatus::Uploading { .. } => "📄",
            FileStatus::Completed => "✅",
            FileStatus::Error { .. } => "⚠️",
        }
    }
}

/// A file accepted into the staging area.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedFile<P> {
    pub id: String,
    pub name: String,
    pub kind: AcceptedFileType,
    pub mime_type: String,
    pub size_bytes: u64,
    pub status: FileStatus,
    pub payload: P,
}

/// A single rejected candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRejection {
    pub filename: String,
    pub reason: ValidationError,
}

/// Result of one [`StagingArea::stage`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct StageOutcome<P> {
    pub accepted: Vec<StagedFile<P>>,
    pub rejected: Vec<FileRejection>,
    /// Set when the whole batch was refused for exceeding the count limit.
    pub batch_rejection: Option<ValidationError>,
}

impl<P> StageOutcome<P> {
    pub(crate) fn empty() -> Self {
        Self {
            accepted: Vec::new(),
            rejected: Vec::new(),
            batch_rejection: None,
        }
    }

    /// Human-readable reasons: one per rejected file, then the batch
    /// reason if the count limit was hit.
    pub fn errors(&self) -> Vec<String> {
        self.rejected
            .iter()
            .map(|r| r.reason.to_string())
            .chain(self.batch_rejection.iter().map(ToString::to_string))
            .collect()
    }
}

/// Ordered set of staged files plus the limits they were checked against.
#[derive(Clone, Debug)]
pub struct StagingArea<P> {
    config: StagingConfig,
    files: Vec<StagedFile<P>>,
}

impl<P: Clone> StagingArea<P> {
    pub fn new(config: StagingConfig) -> Self {
        Self {
            config,
            files: Vec::new(),
        }
    }

    pub fn config(&self) -> &StagingConfig {
        &self.config
    }

    pub fn files(&self) -> &[StagedFile<P>] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Validate and add a batch of candidates.
    ///
    /// Each candidate is checked for format, then size, and every failure
    /// is reported. A batch that would exceed `max_files` is then refused as
    /// a whole: nothing is staged and one aggregate reason is added.
    /// Otherwise valid candidates are appended with status
    /// [`FileStatus::Completed`].
    pub fn stage(&mut self, candidates: Vec<FileCandidate<P>>) -> StageOutcome<P> {
        let mut outcome = StageOutcome::empty();
        if candidates.is_empty() {
            return outcome;
        }

        let over_limit = self.files.len() + candidates.len() > self.config.max_files;
        let mut valid = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            match self.validate(&candidate) {
                Ok(kind) => valid.push((candidate, kind)),
                Err(reason) => {
                    log::warn!("⚠️  {}", reason);
                    outcome.rejected.push(FileRejection {
                        filename: candidate.name,
                        reason,
                    });
                }
            }
        }

        if over_limit {
            log::warn!(
                "⚠️  Refused batch of {} file(s): limit is {}",
                valid.len() + outcome.rejected.len(),
                self.config.max_files
            );
            outcome.batch_rejection = Some(ValidationError::TooManyFiles {
                max_files: self.config.max_files,
            });
            return outcome;
        }

        for (candidate, kind) in valid {
            let staged = StagedFile {
                id: self.fresh_id(),
                name: candidate.name,
                kind,
                mime_type: candidate.mime_type,
                size_bytes: candidate.size_bytes,
                status: FileStatus::Completed,
                payload: candidate.payload,
            };
            log::info!("📎 Staged {} ({})", staged.name, format_size(staged.size_bytes));
            self.files.push(staged.clone());
            outcome.accepted.push(staged);
        }

        outcome
    }

    fn validate(&self, candidate: &FileCandidate<P>) -> Result<AcceptedFileType, ValidationError> {
        let kind = AcceptedFileType::detect(&candidate.mime_type, &candidate.name).ok_or_else(|| {
            ValidationError::UnsupportedFileType {
                name: candidate.name.clone(),
            }
        })?;

        if candidate.size_bytes > self.config.max_size {
            return Err(ValidationError::FileTooLarge {
                name: candidate.name.clone(),
                max_mb: self.config.max_size_mb(),
            });
        }

        Ok(kind)
    }

    /// Random id, regenerated on the (unlikely) collision with a staged file.
    fn fresh_id(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let id: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(8)
                .map(|c| char::from(c).to_ascii_lowercase())
                .collect();
            if !self.files.iter().any(|file| file.id == id) {
                return id;
            }
        }
    }

    /// Remove a staged file by id. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> Option<StagedFile<P>> {
        let index = self.files.iter().position(|file| file.id == id)?;
        Some(self.files.remove(index))
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}

/// Format a byte count for display, base 1024, two decimals.
///
/// `0` is rendered as `"0 Bytes"`; anything past gigabytes stays in GB.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", value, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    fn candidate(name: &str, mime: &str, size: u64) -> FileCandidate<()> {
        FileCandidate {
            name: name.to_string(),
            mime_type: mime.to_string(),
            size_bytes: size,
            payload: (),
        }
    }

    fn pdf(name: &str) -> FileCandidate<()> {
        candidate(name, "application/pdf", MB)
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 Bytes");
        assert_eq!(format_size(512), "512.00 Bytes");
        assert_eq!(format_size(512 * 1024), "512.00 KB");
        assert_eq!(format_size(MB), "1.00 MB");
        assert_eq!(format_size(1_536), "1.50 KB");
        assert_eq!(format_size(3 * 1024 * MB), "3.00 GB");
        assert_eq!(format_size(2048 * 1024 * MB), "2048.00 GB");
    }

    #[test]
    fn test_hint_reflects_limits() {
        let config = StagingConfig::default();
        assert_eq!(
            config.hint(),
            "Supports PDF, CSV, XLS, and XLSX files up to 10MB each"
        );
    }

    #[test]
    fn test_accepts_every_supported_format() {
        let mut area = StagingArea::new(StagingConfig::default());
        let batch = AcceptedFileType::ALL
            .iter()
            .map(|kind| candidate(&format!("statement{}", kind.extension()), kind.mime_type(), 1024))
            .collect();

        let outcome = area.stage(batch);
        assert_eq!(outcome.accepted.len(), 4);
        assert!(outcome.errors().is_empty());
        assert!(area
            .files()
            .iter()
            .all(|file| file.status == FileStatus::Completed));
    }

    #[test]
    fn test_rejects_wrong_type_and_oversize_per_file() {
        let mut area = StagingArea::new(StagingConfig::default());
        let outcome = area.stage(vec![
            candidate("photo.png", "image/png", 1024),
            candidate("huge.pdf", "application/pdf", 10 * MB + 1),
            candidate("ok.csv", "text/csv", 10 * MB),
        ]);

        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.accepted[0].name, "ok.csv");
        assert_eq!(
            outcome.errors(),
            vec![
                "photo.png is not a supported file type.".to_string(),
                "huge.pdf is too large. Maximum size is 10MB.".to_string(),
            ]
        );
        assert_eq!(area.len(), 1);
    }

    #[test]
    fn test_type_checked_before_size() {
        let mut area = StagingArea::new(StagingConfig::default());
        let outcome = area.stage(vec![candidate("movie.mp4", "video/mp4", 50 * MB)]);
        assert_eq!(
            outcome.rejected[0].reason,
            ValidationError::UnsupportedFileType {
                name: "movie.mp4".into()
            }
        );
    }

    #[test]
    fn test_batch_over_limit_rejected_whole() {
        let mut area = StagingArea::new(StagingConfig::default());
        area.stage(vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")]);

        let outcome = area.stage(vec![pdf("d.pdf"), pdf("e.pdf"), pdf("f.pdf")]);
        assert!(outcome.accepted.is_empty());
        assert!(outcome.rejected.is_empty());
        assert_eq!(
            outcome.errors(),
            vec!["Cannot upload more than 5 files at once.".to_string()]
        );
        assert_eq!(area.len(), 3);

        let outcome = area.stage(vec![pdf("d.pdf"), pdf("e.pdf")]);
        assert_eq!(outcome.accepted.len(), 2);
        assert_eq!(area.len(), 5);
    }

    #[test]
    fn test_batch_over_limit_keeps_per_file_reasons() {
        let mut area = StagingArea::new(StagingConfig::default());
        area.stage(vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf"), pdf("d.pdf")]);

        let outcome = area.stage(vec![candidate("photo.png", "image/png", MB), pdf("e.pdf")]);
        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].filename, "photo.png");
        assert_eq!(
            outcome.errors(),
            vec![
                "photo.png is not a supported file type.".to_string(),
                "Cannot upload more than 5 files at once.".to_string(),
            ]
        );
        assert_eq!(area.len(), 4);
    }

    #[test]
    fn test_custom_limits() {
        let mut area = StagingArea::new(StagingConfig {
            max_size: 1024,
            max_files: 1,
        });
        let outcome = area.stage(vec![candidate("a.pdf", "application/pdf", 2048)]);
        assert_eq!(
            outcome.errors(),
            vec!["a.pdf is too large. Maximum size is 0.0009765625MB.".to_string()]
        );
        let outcome = area.stage(vec![pdf("a.pdf"), pdf("b.pdf")]);
        assert!(outcome.batch_rejection.is_some());
    }

    #[test]
    fn test_ids_unique_and_remove() {
        let mut area = StagingArea::new(StagingConfig::default());
        let outcome = area.stage(vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")]);
        let ids: Vec<String> = outcome.accepted.iter().map(|f| f.id.clone()).collect();
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);

        let removed = area.remove(&ids[1]).unwrap();
        assert_eq!(removed.name, "b.pdf");
        assert!(area.remove("missing").is_none());
        let names: Vec<&str> = area.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "c.pdf"]);
    }
}
