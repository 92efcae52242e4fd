// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Font discovery for the PDF renderer
//!
//! `genpdf` lays text out from a TTF family on disk. The report uses
//! Liberation Sans, looked up in the caller-supplied directory first and
//! then in the usual user and system font locations.

use std::path::{Path, PathBuf};

use genpdf::fonts::{self, FontData, FontFamily};
use tracing::debug;

use crate::error::RenderError;

/// Family name expected on disk as `LiberationSans-Regular.ttf` and friends
const FAMILY: &str = "LiberationSans";

/// System directories searched for the font family
const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/liberation-fonts",
    "/usr/share/fonts/TTF",
    "/usr/local/share/fonts",
    "/Library/Fonts",
];

/// Candidate directories in lookup order
fn search_dirs(override_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = override_dir {
        candidates.push(dir.to_path_buf());
    }
    if let Some(dir) = dirs::font_dir() {
        candidates.push(dir);
    }
    candidates.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));
    candidates
}

/// Load the report's font family
///
/// # Errors
///
/// Returns `RenderError::FontsNotFound` listing the searched directories
/// when no directory holds the family, and `RenderError::Pdf` when a
/// directory holds an incomplete or unreadable family.
pub fn load_font_family(
    override_dir: Option<&Path>,
) -> Result<FontFamily<FontData>, RenderError> {
    let searched = search_dirs(override_dir);
    for dir in &searched {
        if dir.join(format!("{FAMILY}-Regular.ttf")).is_file() {
            debug!(dir = %dir.display(), family = FAMILY, "Loading font family");
            return Ok(fonts::from_files(dir, FAMILY, None)?);
        }
    }
    Err(RenderError::FontsNotFound { searched })
}
