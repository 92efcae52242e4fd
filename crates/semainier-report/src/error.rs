// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for semainier-report

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering the report
#[derive(Debug, Error)]
pub enum RenderError {
    /// No usable TTF font family was found
    #[error("No usable font family found, searched: {searched:?}")]
    FontsNotFound {
        /// The directories that were searched for the font family
        searched: Vec<PathBuf>,
    },

    /// Error from the PDF layout engine
    #[error("PDF layout error: {0}")]
    Pdf(#[from] genpdf::error::Error),

    /// The finished document could not be written to the output location
    #[error("Failed to write report to {path}: {source}")]
    OutputWrite {
        /// The output path being written
        path: PathBuf,
        /// The underlying I/O failure
        source: std::io::Error,
    },
}
