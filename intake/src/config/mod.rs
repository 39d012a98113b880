pub mod settings;

pub use settings::{
    DisplaySettings, IntakeSettings, UploadSettings, BYTES_PER_MIB, DEFAULT_MAX_UPLOAD_BYTES,
};
