// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit classification and weekly summary text
//!
//! Each commit's subject line is bucketed into one of four fixed topical
//! categories by case-insensitive keyword matching, and the non-empty
//! buckets are written out as the French prose summary shown above the
//! commit table.

use semainier_git::Commit;

/// Fixed introductory sentence of every summary
pub const SUMMARY_INTRO: &str = "Cette semaine, j'ai travaillé sur plusieurs aspects du projet :";

/// The fixed topical buckets, declared in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Interface and styling work
    UiUx,
    /// New user-facing features
    Features,
    /// API and routing work
    Api,
    /// Catch-all for everything else
    Improvements,
}

impl Category {
    /// All categories in emission order, the order bucket headings appear
    /// in the summary
    pub const EMISSION_ORDER: [Category; 4] = [
        Category::UiUx,
        Category::Features,
        Category::Api,
        Category::Improvements,
    ];

    /// The report label for this category
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::UiUx => "UI/UX",
            Category::Features => "Fonctionnalités",
            Category::Api => "API",
            Category::Improvements => "Améliorations",
        }
    }

    /// Trigger keywords for this category (the catch-all has none)
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::UiUx => &["responsive", "styling", "ui", "layout", "design"],
            Category::Api => &["api", "route"],
            Category::Features => &["add", "implement", "create"],
            Category::Improvements => &[],
        }
    }
}

/// Keyword matching priority: UI/UX before API before Features, with the
/// catch-all last. Deliberately not the same sequence as `EMISSION_ORDER`.
const MATCH_ORDER: [Category; 3] = [Category::UiUx, Category::Api, Category::Features];

/// Classify a commit subject line into its bucket
///
/// The line is trimmed and lowercased, then tested against each category's
/// keywords in matching priority order; the first hit wins and anything
/// without a hit lands in the catch-all. Total: every input maps to
/// exactly one category.
#[must_use]
pub fn classify(subject: &str) -> Category {
    let main_point = subject.trim().to_lowercase();
    for category in MATCH_ORDER {
        if category
            .keywords()
            .iter()
            .any(|keyword| main_point.contains(keyword))
        {
            return category;
        }
    }
    Category::Improvements
}

/// Localize and sentence-case one bullet point
///
/// The stored point is already lowercased; only the first character is
/// uppercased, the rest keeps its casing.
fn clean_point(point: &str) -> String {
    let point = point.replace(" and ", " et ");
    let mut chars = point.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Build the bucketed weekly summary for the given commits
///
/// Commits keep their extraction order inside each bucket; empty buckets
/// are omitted entirely; bucket headings follow `Category::EMISSION_ORDER`.
/// The line breaks in the returned text are part of the contract, the
/// renderer turns each one into a paragraph break.
#[must_use]
pub fn build_summary(commits: &[Commit]) -> String {
    let mut buckets: [Vec<String>; 4] = Default::default();
    for commit in commits {
        let main_point = commit.subject().trim().to_lowercase();
        buckets[classify(&main_point) as usize].push(main_point);
    }

    let mut parts = vec![SUMMARY_INTRO.to_string()];
    for category in Category::EMISSION_ORDER {
        let points = &buckets[category as usize];
        if points.is_empty() {
            continue;
        }
        parts.push(format!("\n\n{} :", category.label()));
        for point in points {
            parts.push(format!("• {}", clean_point(point)));
        }
    }

    parts.join("\n")
}
