use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HeadstampError {
    #[error("Unknown extension: {ext}")]
    #[diagnostic(help("Supported extensions: {supported}"))]
    UnknownExtension { ext: String, supported: String },

    #[error("No comment style registered for extension '{ext}'")]
    MissingStyle { ext: String },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HeadstampError>;
