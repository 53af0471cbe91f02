use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Invalid template path: {0:?}")]
    InvalidTemplatePath(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("malformed XML in {part}: {source}")]
    Xml {
        part: String,
        #[source]
        source: quick_xml::Error,
    },

    #[error("template error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("template archive has no {0}")]
    MissingPart(&'static str),
}

impl Error {
    /// Failures caused by the request itself rather than by rendering.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::TemplateNotFound(_) | Error::InvalidTemplatePath(_) | Error::InvalidRequest(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
