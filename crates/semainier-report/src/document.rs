// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! PDF report assembly
//!
//! Lays out the title block, the boxed summary paragraph and the two-column
//! commit table with `genpdf`, then writes the finished document atomically
//! so a failed render never leaves a partial file at the output location.

use std::path::Path;

use genpdf::elements::{
    Break, FrameCellDecorator, LinearLayout, Paragraph, TableLayout,
};
use genpdf::fonts::{FontData, FontFamily};
use genpdf::style::Style;
use genpdf::{Document, Element as _, SimplePageDecorator};
use tracing::{debug, info};

use semainier_git::Commit;

use crate::error::RenderError;
use crate::fonts;

/// Report title, rendered as the large heading of the first page
pub const REPORT_TITLE: &str = "Rapport des Commits de la Semaine";

/// Heading shown above the commit table
pub const COMMIT_LIST_HEADING: &str = "Liste détaillée des commits";

/// Split a commit message into the lines shown inside its table cell
///
/// Lines are trimmed; a line whose trimmed form starts with a dash is
/// rendered as an indented bullet with the dash stripped (any space after
/// the dash is kept). Lines without a leading dash pass through unchanged,
/// so reformatting them twice is a no-op.
#[must_use]
pub fn format_message_lines(message: &str) -> Vec<String> {
    message
        .split('\n')
        .map(|line| {
            let line = line.trim();
            match line.strip_prefix('-') {
                Some(rest) => format!("    • {rest}"),
                None => line.to_string(),
            }
        })
        .collect()
}

/// Assemble the report document from the commit list and summary text
fn build_document(
    font_family: FontFamily<FontData>,
    commits: &[Commit],
    summary: &str,
) -> Result<Document, RenderError> {
    let mut doc = Document::new(font_family);
    doc.set_title(REPORT_TITLE);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(15);
    doc.set_page_decorator(decorator);

    // Title block
    doc.push(Paragraph::new(REPORT_TITLE).styled(Style::new().bold().with_font_size(24)));
    doc.push(Break::new(2.0));

    // Summary box: one paragraph per summary line so the line breaks of the
    // summary text stay visible inside a single framed block
    let mut summary_block = LinearLayout::vertical();
    for line in summary.split('\n') {
        summary_block.push(Paragraph::new(line).styled(Style::new().with_font_size(11)));
    }
    doc.push(summary_block.padded(3).framed());
    doc.push(Break::new(1.5));

    // Commit list heading
    doc.push(Paragraph::new(COMMIT_LIST_HEADING).styled(Style::new().bold().with_font_size(16)));
    doc.push(Break::new(1.0));

    // Two-column table: date, message
    let mut table = TableLayout::new(vec![2, 7]);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    table
        .row()
        .element(
            Paragraph::new("Date")
                .styled(Style::new().bold().with_font_size(14))
                .padded(2),
        )
        .element(
            Paragraph::new("Message")
                .styled(Style::new().bold().with_font_size(14))
                .padded(2),
        )
        .push()?;

    for commit in commits {
        let mut message_block = LinearLayout::vertical();
        for line in format_message_lines(&commit.message) {
            message_block.push(Paragraph::new(line).styled(Style::new().with_font_size(10)));
        }

        table
            .row()
            .element(
                Paragraph::new(commit.date_label())
                    .styled(Style::new().with_font_size(10))
                    .padded(2),
            )
            .element(message_block.padded(2))
            .push()?;
    }

    doc.push(table);
    debug!(rows = commits.len(), "Assembled report document");
    Ok(doc)
}

/// Render the weekly report and write it to `output`
///
/// The document is rendered to a temporary file in the output directory and
/// atomically persisted over `output` once rendering succeeded, overwriting
/// any previous report at that location.
///
/// # Errors
///
/// Returns `RenderError::FontsNotFound` when no usable font family exists,
/// `RenderError::Pdf` for layout failures and `RenderError::OutputWrite`
/// when the output location is not writable.
pub fn render_report(
    commits: &[Commit],
    summary: &str,
    output: &Path,
    font_dir: Option<&Path>,
) -> Result<(), RenderError> {
    let font_family = fonts::load_font_family(font_dir)?;
    let doc = build_document(font_family, commits, summary)?;

    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut staging =
        tempfile::NamedTempFile::new_in(parent).map_err(|source| RenderError::OutputWrite {
            path: output.to_path_buf(),
            source,
        })?;

    doc.render(&mut staging)?;

    staging
        .persist(output)
        .map_err(|e| RenderError::OutputWrite {
            path: output.to_path_buf(),
            source: e.error,
        })?;

    info!(path = %output.display(), commits = commits.len(), "Wrote weekly report");
    Ok(())
}
