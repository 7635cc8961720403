//! Error types and error handling for the parser.
//!
//! This module defines the error types used throughout the parsing
//! process. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexing and parsing phases
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
