//! semainier library
//!
//! This module exports the report pipeline and its configuration for use
//! in integration tests and as a library.

pub mod config;
pub mod pipeline;
