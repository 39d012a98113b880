pub mod file_validator;

pub use file_validator::{inspect_path, validate_file, FileValidator, UploadPolicy, PDF_MIME_TYPE};
