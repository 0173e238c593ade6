/// Entry points that build and write the output tree.
pub mod applier;

/// Handles argument parsing and the command-line workflow.
pub mod cli;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Writing the output tree to disk.
pub mod ioutils;

/// Injected logging capability and the process-wide log backend.
pub mod logger;

/// Loading the metadata document.
pub mod metadata;

/// Textual and executable template rendering.
pub mod renderer;

/// Template discovery, per-template processing and tree assembly.
pub mod template;
