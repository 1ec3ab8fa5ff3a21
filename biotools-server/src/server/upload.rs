use axum::extract::multipart::{Multipart, MultipartError};
use biotools_core::DeclaredType;
use thiserror::Error;
use tracing::debug;

/// File extensions accepted for FASTA uploads
pub const FASTA_EXTENSIONS: &[&str] = &["fasta", "fa", "fas"];

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("no 'file' field in the upload")]
    MissingFile,

    #[error("'{0}' is not a FASTA file (expected .fasta, .fa or .fas)")]
    UnsupportedExtension(String),

    #[error("'{0}' is not valid UTF-8")]
    Encoding(String),

    #[error("{0}")]
    Multipart(String),

    #[error("unknown sequence type '{0}'")]
    InvalidSequenceType(String),
}

impl UploadError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFile | Self::Multipart(_) => "upload_error",
            Self::UnsupportedExtension(_) => "unsupported_file_type",
            Self::Encoding(_) => "file_encoding_error",
            Self::InvalidSequenceType(_) => "invalid_input",
        }
    }
}

impl From<MultipartError> for UploadError {
    fn from(err: MultipartError) -> Self {
        UploadError::Multipart(err.body_text())
    }
}

#[derive(Debug)]
pub struct UploadedFasta {
    pub filename: String,
    pub content: String,
    pub sequence_type: DeclaredType,
}

/// Whether a file name carries a FASTA extension (case-insensitive)
pub fn has_fasta_extension(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => FASTA_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed)),
        _ => false,
    }
}

/// Read the `file` part of a FASTA upload, plus an optional `sequence_type` field
pub async fn read_fasta_upload(mut multipart: Multipart) -> Result<UploadedFasta, UploadError> {
    let mut file: Option<(String, String)> = None;
    let mut sequence_type = DeclaredType::Auto;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                if !has_fasta_extension(&filename) {
                    return Err(UploadError::UnsupportedExtension(filename));
                }

                let bytes = field.bytes().await?;
                let content = String::from_utf8(bytes.to_vec())
                    .map_err(|_| UploadError::Encoding(filename.clone()))?;

                debug!(filename = %filename, bytes = content.len(), "Received FASTA upload");
                file = Some((filename, content));
            }
            Some("sequence_type") => {
                let value = field.text().await?;
                sequence_type = value
                    .parse()
                    .map_err(|_| UploadError::InvalidSequenceType(value.trim().to_string()))?;
            }
            _ => {}
        }
    }

    let (filename, content) = file.ok_or(UploadError::MissingFile)?;
    Ok(UploadedFasta {
        filename,
        content,
        sequence_type,
    })
}
