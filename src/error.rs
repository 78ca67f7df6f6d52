use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum SlideError {
    /// A required asset (base image, font file) is missing or unreadable,
    /// or a margin specification leaves no usable layout region. Fatal for
    /// the current story only.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The narrative tokenized to zero sentences. The story is skipped.
    #[error("no sentences found in narrative text")]
    EmptyInput,

    /// The caption/title generation provider failed. Callers recover with
    /// deterministic fallback text; this never aborts a batch.
    #[error("provider error: {0}")]
    Provider(String),

    /// The upload collaborator rejected the login.
    #[error("login failed: {0}")]
    Auth(String),

    /// The upload collaborator rejected the media.
    #[error("upload failed: {0}")]
    Upload(String),

    /// The input table is missing required columns. Fatal for the whole
    /// batch run.
    #[error("table is missing required columns: {}", missing.join(", "))]
    Validation { missing: Vec<String> },

    /// [rusttype] could not parse the font data
    #[error("could not parse font data")]
    FontParsing,

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to decode or encode the image
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// [csv] failed to read or write the table
    Csv(#[from] csv::Error),

    #[error(transparent)]
    /// [reqwest] failed before the provider produced a response
    Http(#[from] reqwest::Error),
}
