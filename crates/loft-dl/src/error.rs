use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum DownloadError {
    #[error("Invalid URL: {url}")]
    #[diagnostic(code(loft_dl::invalid_url))]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid proxy `{value}`")]
    #[diagnostic(code(loft_dl::invalid_proxy))]
    InvalidProxy {
        value: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error(transparent)]
    #[diagnostic(
        code(loft_dl::network),
        help("Check your internet connection or try again later")
    )]
    Network(#[from] Box<ureq::Error>),

    #[error("HTTP {status} response fetching {url}")]
    #[diagnostic(code(loft_dl::http_status))]
    HttpStatus { status: String, url: String },

    #[error("`{url}` does not map to a local file path")]
    #[diagnostic(code(loft_dl::file_url))]
    FileUrl { url: String },

    #[error(transparent)]
    #[diagnostic(code(loft_dl::io))]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DownloadError>;

impl From<ureq::Error> for DownloadError {
    fn from(e: ureq::Error) -> Self {
        Self::Network(Box::new(e))
    }
}
