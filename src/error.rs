use miette::Diagnostic;
use thiserror::Error;

/// Main error type for lvlgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum LvlError {
    #[error("IO error: {0}")]
    #[diagnostic(code(lvlgen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(lvlgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Cannot read level directory {path}: {message}")]
    #[diagnostic(
        code(lvlgen::directory),
        help("Pass the level image directory with --input or set `input` in lvlgen.yaml")
    )]
    Directory {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(lvlgen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to decode image {path}: {message}")]
    #[diagnostic(code(lvlgen::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(lvlgen::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, LvlError>;
