//! Error types and error handling for the lexical analyser.
//!
//! This module defines the single error type shared by both tokenizers:
//!
//! - Error structures carrying the source position of the failure
//! - Specific error variants for each way a scan can fail
//! - Error names and tips used when rendering diagnostics

pub mod errors;
