use crate::i18n::{Language, Message};
use crate::server::upload::UploadError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts},
    http::{header::ACCEPT_LANGUAGE, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use biotools_core::BiotoolsError;
use serde::Serialize;
use std::convert::Infallible;
use tracing::error;

/// Error response with a localized `detail` line
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
    pub kind: &'static str,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: &'a str,
    kind: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: &'static str, prefix: &str, message: impl AsRef<str>) -> Self {
        Self {
            status,
            detail: format!("{}: {}", prefix, message.as_ref()),
            kind,
        }
    }

    /// Map an engine error onto a status code and localized prefix
    pub fn from_engine(err: BiotoolsError, lang: Language) -> Self {
        let message = match &err {
            BiotoolsError::Validation(_) => Message::ValidationError,
            BiotoolsError::UnsupportedOperation(_) => Message::UnsupportedOperation,
            BiotoolsError::Parse(_) => Message::ParseError,
            BiotoolsError::InvalidInput(_) => Message::InvalidInput,
            _ => Message::ProcessingError,
        };

        let status = if err.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            error!(kind = err.kind(), "Request failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        Self::new(status, err.kind(), lang.text(message), err.message())
    }

    pub fn from_upload(err: UploadError, lang: Language) -> Self {
        let message = match &err {
            UploadError::MissingFile => Message::MissingFile,
            UploadError::UnsupportedExtension(_) => Message::UnsupportedFileType,
            UploadError::Encoding(_) => Message::FileEncoding,
            UploadError::Multipart(_) => Message::UploadError,
            UploadError::InvalidSequenceType(_) => Message::InvalidInput,
        };

        Self::new(StatusCode::BAD_REQUEST, err.kind(), lang.text(message), err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: &self.detail,
            kind: self.kind,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Missing content type or malformed bodies are client errors too
        ApiError::new(
            StatusCode::BAD_REQUEST,
            "invalid_input",
            Language::En.text(Message::InvalidInput),
            rejection.body_text(),
        )
    }
}

/// JSON body extractor whose rejections use the API error shape
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Response language negotiated from `Accept-Language`
#[derive(Debug, Clone, Copy)]
pub struct Lang(pub Language);

#[async_trait]
impl<S> FromRequestParts<S> for Lang
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());
        Ok(Lang(Language::from_accept_language(header)))
    }
}
