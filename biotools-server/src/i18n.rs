//! Localized text for API responses
//!
//! Only the HTTP layer is language aware. Engine errors carry a kind and a
//! message; the localized prefix is chosen here from the request's
//! `Accept-Language` header.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Zh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ApiDescription,
    ValidationError,
    UnsupportedOperation,
    ParseError,
    InvalidInput,
    ProcessingError,
    UnsupportedFileType,
    FileEncoding,
    UploadError,
    MissingFile,
}

impl Language {
    /// Pick the first supported language from an `Accept-Language` value.
    ///
    /// Quality parameters are ignored; entries are taken in header order.
    pub fn from_accept_language(header: Option<&str>) -> Self {
        let Some(header) = header else {
            return Language::En;
        };

        for entry in header.split(',') {
            let tag = entry.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
            if tag.starts_with("zh") {
                return Language::Zh;
            }
            if tag.starts_with("en") {
                return Language::En;
            }
        }

        Language::En
    }

    pub fn text(&self, message: Message) -> &'static str {
        match self {
            Language::En => match message {
                Message::ApiDescription => {
                    "Sequence transformation and statistics for DNA, RNA and protein"
                }
                Message::ValidationError => "Validation error",
                Message::UnsupportedOperation => "Unsupported operation",
                Message::ParseError => "Parse error",
                Message::InvalidInput => "Invalid input",
                Message::ProcessingError => "Processing error",
                Message::UnsupportedFileType => "Unsupported file type",
                Message::FileEncoding => "File encoding error",
                Message::UploadError => "Upload error",
                Message::MissingFile => "Missing file",
            },
            Language::Zh => match message {
                Message::ApiDescription => "DNA、RNA 与蛋白质序列的转换和统计服务",
                Message::ValidationError => "验证错误",
                Message::UnsupportedOperation => "不支持的操作",
                Message::ParseError => "解析错误",
                Message::InvalidInput => "无效输入",
                Message::ProcessingError => "处理错误",
                Message::UnsupportedFileType => "不支持的文件类型",
                Message::FileEncoding => "文件编码错误",
                Message::UploadError => "上传错误",
                Message::MissingFile => "缺少文件",
            },
        }
    }
}
