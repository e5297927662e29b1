//! Utility functions shared by the library and the CLI.
//!
//! ## Modules
//!
//! - [`encoding`] - Little-endian integer encoding for index files
//! - [`input`] - Memory-mapped input text with truncation
//! - [`progress`] - Spinner that compiles away without the `progress` feature

pub mod encoding;
pub mod input;
pub mod progress;

pub use encoding::*;
pub use input::InputText;
