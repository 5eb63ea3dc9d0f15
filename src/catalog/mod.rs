//! # Catalog
//!
//! Process-wide, read-only tables of branches, subjects, sample doubts and
//! per-subject rule tables.
//!
//! All data is `'static` and compiled into the binary. Nothing here is ever
//! mutated, so the catalog can be shared across request handlers without
//! locking.
//!
//! # Layout
//!
//! ```text
//! Catalog
//!   └── Branch ("Computer Science")
//!         └── Subject ("Data Structures", ...)
//!               ├── definition (shared by every rule of the subject)
//!               ├── samples    (UI pre-fill only)
//!               ├── rules      (ordered, first match wins)
//!               └── fallback   (the subject's default rule)
//! ```

mod computer_science;

use std::collections::BTreeMap;

use serde::Serialize;

/// Summary used by the generic template and by every subject fallback.
pub const GENERIC_SUMMARY: &str =
    "This explanation should give you a grasp of the underlying concept so you can explore further.";

/// Template used when the branch or subject is not in the catalog.
pub const GENERIC_TEMPLATE: Template = Template {
    definition: "This topic covers fundamental ideas that engineers encounter in their courses and work.",
    examples: &[
        "A general engineering example illustrating the idea.",
        "Another applied scenario where this concept appears.",
    ],
    industry: "Core engineering disciplines apply these principles across multiple industries.",
    keywords: &["core", "fundamental"],
    summary: GENERIC_SUMMARY,
};

static CATALOG: Catalog = Catalog {
    branches: &[computer_science::BRANCH],
};

/// Get the process-wide catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Structured explanation content rendered into HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub definition: &'static str,
    pub examples: &'static [&'static str],
    pub industry: &'static str,
    pub keywords: &'static [&'static str],
    pub summary: &'static str,
}

/// Per-rule content; the definition comes from the owning subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Content {
    pub examples: &'static [&'static str],
    pub industry: &'static str,
    pub keywords: &'static [&'static str],
    pub summary: &'static str,
}

/// Keyword-triggered template selection unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Lowercase trigger keywords; any one contained in the question matches
    pub triggers: &'static [&'static str],
    pub content: Content,
}

impl Rule {
    /// Check whether an already-lowercased question triggers this rule
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// A topic within a branch, with its own rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    pub name: &'static str,
    pub definition: &'static str,
    pub samples: &'static [&'static str],
    pub rules: &'static [Rule],
    pub fallback: Content,
}

impl Subject {
    /// Build the full template for a piece of this subject's content
    pub fn template(&self, content: &Content) -> Template {
        Template {
            definition: self.definition,
            examples: content.examples,
            industry: content.industry,
            keywords: content.keywords,
            summary: content.summary,
        }
    }

    /// Index of the first rule triggered by the lowercased question
    pub fn first_match(&self, lowered: &str) -> Option<usize> {
        self.rules.iter().position(|rule| rule.matches(lowered))
    }

    /// Template of the subject's default rule
    pub fn fallback_template(&self) -> Template {
        self.template(&self.fallback)
    }
}

/// A field of study grouping subjects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branch {
    pub name: &'static str,
    pub subjects: &'static [Subject],
}

impl Branch {
    /// Look up a subject by exact name
    pub fn subject(&self, name: &str) -> Option<&'static Subject> {
        self.subjects.iter().find(|s| s.name == name)
    }

    /// Subject names in display order
    pub fn subject_names(&self) -> impl Iterator<Item = &'static str> {
        self.subjects.iter().map(|s| s.name)
    }
}

/// All branches known to the system
#[derive(Debug)]
pub struct Catalog {
    branches: &'static [Branch],
}

impl Catalog {
    /// Branches in display order
    pub fn branches(&self) -> &'static [Branch] {
        self.branches
    }

    /// Look up a branch by exact name
    pub fn branch(&self, name: &str) -> Option<&'static Branch> {
        self.branches.iter().find(|b| b.name == name)
    }

    /// Resolve a (branch, subject) pair
    pub fn subject(&self, branch: &str, subject: &str) -> Option<&'static Subject> {
        self.branch(branch).and_then(|b| b.subject(subject))
    }

    /// Sample doubts for a subject, searched across all branches
    pub fn sample_doubts(&self, subject: &str) -> Option<&'static [&'static str]> {
        self.branches
            .iter()
            .flat_map(|b| b.subjects.iter())
            .find(|s| s.name == subject)
            .map(|s| s.samples)
    }

    /// Total number of sample doubts across the catalog
    pub fn sample_count(&self) -> usize {
        self.branches
            .iter()
            .flat_map(|b| b.subjects.iter())
            .map(|s| s.samples.len())
            .sum()
    }

    /// Serializable branch→subjects and subject→samples tables
    pub fn view(&self) -> CatalogView {
        let mut view = CatalogView::default();
        for branch in self.branches {
            view.branches
                .insert(branch.name, branch.subject_names().collect());
            for subject in branch.subjects {
                view.sample_doubts.insert(subject.name, subject.samples.to_vec());
            }
        }
        view
    }
}

/// Lookup tables consumed by the page and the JSON API
///
/// Map keys are sorted; lists keep display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub branches: BTreeMap<&'static str, Vec<&'static str>>,
    pub sample_doubts: BTreeMap<&'static str, Vec<&'static str>>,
}
