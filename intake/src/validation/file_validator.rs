// Upload gate in front of the extraction step.
use std::fs;
use std::path::Path;

use shared::models::{UploadedFile, ValidationOutcome};

use crate::config::{IntakeSettings, DEFAULT_MAX_UPLOAD_BYTES};
use crate::error::{FileRejection, IntakeError};

/// The only document type the extraction step understands.
pub const PDF_MIME_TYPE: &str = "application/pdf";
const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_size_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        UploadPolicy {
            max_size_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl From<&IntakeSettings> for UploadPolicy {
    fn from(settings: &IntakeSettings) -> Self {
        UploadPolicy {
            max_size_bytes: settings.upload.max_size_bytes,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FileValidator {
    policy: UploadPolicy,
}

impl FileValidator {
    pub fn new(policy: UploadPolicy) -> Self {
        FileValidator { policy }
    }

    /// Rules run in order (non-empty, type, size) and stop at the first one that fails.
    pub fn check(&self, file: &UploadedFile) -> Result<(), FileRejection> {
        if file.size_bytes == 0 {
            return Err(FileRejection::Empty);
        }
        if file.mime_type != PDF_MIME_TYPE {
            return Err(FileRejection::UnsupportedType {
                mime_type: file.mime_type.clone(),
            });
        }
        if file.size_bytes > self.policy.max_size_bytes {
            return Err(FileRejection::TooLarge {
                size_bytes: file.size_bytes,
                limit_bytes: self.policy.max_size_bytes,
            });
        }
        Ok(())
    }

    pub fn validate(&self, file: &UploadedFile) -> ValidationOutcome {
        match self.check(file) {
            Ok(()) => ValidationOutcome::accepted(),
            Err(rejection) => {
                tracing::debug!(
                    mime_type = %file.mime_type,
                    size_bytes = file.size_bytes,
                    reason = ?rejection,
                    "Upload rejected"
                );
                rejection.into()
            }
        }
    }
}

impl From<FileRejection> for ValidationOutcome {
    fn from(rejection: FileRejection) -> Self {
        ValidationOutcome::rejected(rejection.to_string())
    }
}

/// Validates against the default 20 MiB PDF policy.
pub fn validate_file(file: &UploadedFile) -> ValidationOutcome {
    FileValidator::default().validate(file)
}

/// Builds upload metadata for a file on disk: size from the filesystem, type from the extension.
pub fn inspect_path(path: impl AsRef<Path>) -> Result<UploadedFile, IntakeError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(IntakeError::InvalidInput(format!(
            "'{}' is not a regular file",
            path.display()
        )));
    }
    Ok(UploadedFile::new(mime_type_for_path(path), metadata.len()))
}

fn mime_type_for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("pdf") => PDF_MIME_TYPE,
        _ => FALLBACK_MIME_TYPE,
    }
}
