/// Command-line interface and batch file processing
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Source image decoding and PNG export
pub mod image;
/// Batch progress display
pub mod progress;
