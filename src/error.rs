use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk template directory. Original error: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Failed to serialize metadata. Original error: {0}")]
    JSONParseError(serde_json::Error),

    #[error("invalid metadata file: {path}")]
    InvalidMetadata { path: String },

    #[error("missing option {option}")]
    MissingOption { option: String },

    #[error("you don't have permission to write to '{path}'")]
    OutputNotWritable { path: String },

    /// A placeholder referenced a key the metadata does not provide.
    #[error("key '{key}' from template '{template}' does not exist in metadata file.")]
    MissingKey { key: String, template: String },

    #[error("could not render template {template}. Original error: {source}")]
    RenderFailure {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("could not start config script {template}. Original error: {source}")]
    SpawnFailure {
        template: String,
        #[source]
        source: std::io::Error,
    },

    /// When the executable template has run but finished with a non-zero status.
    #[error("config script failed: {template}\n\nwith output:\n\n{output}")]
    ExecutableFailed { template: String, output: String },

    #[error("config script {template} did not finish within {seconds} seconds")]
    ExecutableTimeout { template: String, seconds: u64 },

    #[error(
        "templates '{first}' and '{second}' both render to destination '{destination}'"
    )]
    DestinationCollision { destination: String, first: String, second: String },

    #[error("could not write '{path}'. Original error: {source}")]
    WriteFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;
