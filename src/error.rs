use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum GenoPhenoError {
    #[error("Failed to read input table '{path}'")]
    #[diagnostic(
        code(genopheno::input_read_error),
        help("Check that the file exists, is readable, and is a well-formed CSV table")
    )]
    InputReadError {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Required column '{column}' is missing from the input table")]
    #[diagnostic(
        code(genopheno::schema_error),
        help("The table has columns: {available}")
    )]
    SchemaError { column: String, available: String },

    #[error("Cannot classify nodes: node-type column '{column}' is missing")]
    #[diagnostic(
        code(genopheno::classification_error),
        help("Genotype-phenotype tables need a '{column}' column marking each target node")
    )]
    ClassificationError { column: String },

    #[error("Failed to render graph image: {message}")]
    #[diagnostic(
        code(genopheno::render_error),
        help("This is likely an internal error - please report it")
    )]
    RenderError { message: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(genopheno::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(genopheno::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(genopheno::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(genopheno::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
